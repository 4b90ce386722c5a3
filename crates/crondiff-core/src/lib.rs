//! Cron job diff-and-match engine.
//!
//! This crate compares two collections of scheduled jobs and:
//! - Pairs jobs across the sides by name
//! - Falls back to command text to detect renamed jobs
//! - Ignores whitespace-only differences in commands
//! - Returns sorted, typed difference records
//!
//! Nothing here touches the filesystem or the terminal; loading and
//! rendering live in `crondiff-load` and `crondiff-report`.

mod engine;
mod index;
mod normalize;
mod types;

pub use engine::compare;
pub use index::{CommandIndex, NameIndex, build_command_index, build_name_index};
pub use normalize::normalize;
pub use types::{DifferenceKind, Job, JobDifference, Side};
