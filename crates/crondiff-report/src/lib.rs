//! Rendering of crondiff results.
//!
//! Two independent [`Presenter`] implementations share one input, the sorted
//! list of [`JobDifference`](crondiff_core::JobDifference) records:
//! - [`TablePresenter`]: human-readable, optionally colored table
//! - [`JsonPresenter`]: pretty-printed JSON array

mod error;
mod json;
mod table;
mod theme;

use std::io::Write;

use crondiff_core::JobDifference;

pub use error::RenderError;
pub use json::JsonPresenter;
pub use table::TablePresenter;
pub use theme::{SideLabels, Theme, Tone};

/// Something that can write a list of differences to an output stream.
pub trait Presenter {
    /// Render `diffs` to `out`.
    fn render(&self, diffs: &[JobDifference], out: &mut dyn Write) -> Result<(), RenderError>;
}
