//! Presentation settings: colors and side labels.

use colored::{Color, Colorize};
use crondiff_core::{DifferenceKind, Side};

/// Visual weight of a piece of output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Commands differ.
    Warn,
    /// Schedules differ.
    Caution,
    /// Job missing or renamed.
    Info,
}

impl Tone {
    /// The tone a difference kind is shown in.
    pub fn for_kind(kind: DifferenceKind) -> Self {
        match kind {
            DifferenceKind::CommandDiff => Tone::Warn,
            DifferenceKind::ScheduleDiff => Tone::Caution,
            DifferenceKind::RenamedInOther | DifferenceKind::MissingInOther => Tone::Info,
        }
    }
}

/// Color settings for the table presenter: whether to color at all, and the
/// color used for each [`Tone`].
#[derive(Debug, Clone)]
pub struct Theme {
    enabled: bool,
    warn: Color,
    caution: Color,
    info: Color,
}

impl Theme {
    /// Red commands, yellow schedules, light blue for missing and renamed jobs.
    pub fn colored() -> Self {
        Self {
            enabled: true,
            warn: Color::Red,
            caution: Color::Yellow,
            info: Color::BrightBlue,
        }
    }

    /// No escape codes at all.
    pub fn plain() -> Self {
        Self {
            enabled: false,
            ..Self::colored()
        }
    }

    /// Whether this theme emits colors.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Paint `text` in the color of `tone`, line by line so table padding stays uncolored.
    pub fn paint(&self, text: &str, tone: Tone) -> String {
        if !self.enabled {
            return text.to_string();
        }
        let color = match tone {
            Tone::Warn => self.warn,
            Tone::Caution => self.caution,
            Tone::Info => self.info,
        };
        text.lines()
            .map(|line| line.color(color).to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::colored()
    }
}

/// Human names for the two sides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SideLabels {
    a: String,
    b: String,
}

impl SideLabels {
    /// Custom labels for side A and side B.
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
        }
    }

    /// Label of `side`, as given.
    pub fn label(&self, side: Side) -> &str {
        match side {
            Side::A => &self.a,
            Side::B => &self.b,
        }
    }

    /// Label of `side` with its first letter capitalized.
    pub fn title(&self, side: Side) -> String {
        let mut chars = self.label(side).chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl Default for SideLabels {
    fn default() -> Self {
        Self::new("production", "development")
    }
}
