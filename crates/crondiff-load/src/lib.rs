//! Cron job file loading for crondiff.
//!
//! Reads a YAML document with a top-level `cronjobs` list into an ordered
//! `Vec<Job>`, ready to hand to [`crondiff_core::compare`].

mod error;
mod loader;

pub use error::LoadError;
pub use loader::{DuplicatePolicy, duplicate_names, load_jobs, parse_jobs};
