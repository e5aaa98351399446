//! Profile and repository records, and the statistics derived from them.

mod model;
mod stats;

pub use model::{Bundle, Profile, Repo};
pub use stats::attach_stats;
