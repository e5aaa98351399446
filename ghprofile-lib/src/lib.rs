#![doc(hidden)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core library for ghprofile
//!
//! Fetches a GitHub user's profile and repositories, derives star and fork
//! statistics, keeps the last good result on disk, and falls back to that cache
//! or to synthetic demo data when the live API is unreachable.
//!
//! # Module Organization
//!
//! - [`github`]: REST client and repository pagination
//! - [`profile`]: Profile and repository records, aggregate statistics
//! - [`cache`]: Per-user JSON cache on disk
//! - [`demo`]: Deterministic demo data
//! - [`fallback`]: Live, then cache, then demo
//! - [`reports`]: Console rendering
//! - [`commands`]: Command-line interface

pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

pub mod cache;
pub mod demo;
pub mod error;
pub mod fallback;
pub mod github;
pub mod profile;
pub mod reports;

#[cfg(any(debug_assertions, test))]
pub mod commands;
#[cfg(not(any(debug_assertions, test)))]
mod commands;

pub use crate::commands::{Host, run};
pub use crate::error::Error;
