//! Command-line entry point.
//!
//! [`run`] parses the arguments, sets up logging, resolves the profile through
//! the fallback chain and prints the card. Everything that touches the outside
//! world goes through a [`Host`], so the whole flow runs in tests against
//! in-memory buffers.

mod host;
mod run;

pub use host::Host;
pub use run::run;

#[cfg(test)]
pub use host::TestHost;
