//! Resolved runtime options.

use std::path::Path;

use clap::ValueEnum;
use crondiff_load::DuplicatePolicy;
use crondiff_report::{JsonPresenter, Presenter, SideLabels, TablePresenter, Theme};

/// When to color table output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Color when stdout is a terminal and `NO_COLOR` is unset.
    Auto,
    /// Always emit color codes.
    Always,
    /// Never emit color codes.
    Never,
}

/// Output document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Everything that shapes a run, resolved from flags and environment.
#[derive(Debug, Clone)]
pub struct Options {
    pub format: OutputFormat,
    pub color: ColorChoice,
    pub duplicates: DuplicatePolicy,
    pub labels: SideLabels,
    pub fail_on_diff: bool,
}

impl Options {
    /// Theme for the table presenter.
    ///
    /// `Always` and `Auto` share the colored theme; forcing colors for a
    /// non-terminal stdout is done once in `main`.
    pub fn theme(&self) -> Theme {
        match self.color {
            ColorChoice::Never => Theme::plain(),
            ColorChoice::Always | ColorChoice::Auto => Theme::colored(),
        }
    }

    /// The presenter for the configured output format.
    pub fn presenter(&self, production: &Path, development: &Path) -> Box<dyn Presenter> {
        match self.format {
            OutputFormat::Json => Box::new(JsonPresenter),
            OutputFormat::Table => Box::new(
                TablePresenter::new(self.theme())
                    .with_labels(self.labels.clone())
                    .with_sources(
                        production.display().to_string(),
                        development.display().to_string(),
                    ),
            ),
        }
    }
}
