//! Human-readable table output.

use std::io::Write;

use crondiff_core::{DifferenceKind, JobDifference, Side};
use prettytable::format::{FormatBuilder, LinePosition, LineSeparator, TableFormat};
use prettytable::{Cell, Row, Table};

use crate::{Presenter, RenderError, SideLabels, Theme, Tone};

/// Renders differences as a two-column table, one row per job.
#[derive(Debug, Clone, Default)]
pub struct TablePresenter {
    theme: Theme,
    labels: SideLabels,
    sources: Option<(String, String)>,
}

impl TablePresenter {
    /// Create a presenter using `theme` for colors.
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    /// Use custom names for the two sides.
    pub fn with_labels(mut self, labels: SideLabels) -> Self {
        self.labels = labels;
        self
    }

    /// Print a heading naming the two compared files.
    pub fn with_sources(mut self, a: impl Into<String>, b: impl Into<String>) -> Self {
        self.sources = Some((a.into(), b.into()));
        self
    }

    /// Text of a single record, colored by kind.
    fn describe(&self, diff: &JobDifference) -> String {
        let a = self.labels.title(Side::A);
        let b = self.labels.title(Side::B);
        let value = |v: &Option<String>| v.clone().unwrap_or_default();

        let text = match diff.kind {
            DifferenceKind::CommandDiff => format!(
                "Command difference:\n  {a}: {}\n  {b}: {}",
                value(&diff.side_a_value),
                value(&diff.side_b_value)
            ),
            DifferenceKind::ScheduleDiff => format!(
                "Schedule difference:\n  {a}: {}\n  {b}: {}",
                value(&diff.side_a_value),
                value(&diff.side_b_value)
            ),
            DifferenceKind::MissingInOther => {
                let present = diff.present_in.unwrap_or(Side::A);
                format!(
                    "Exists in {} but not in {}",
                    self.labels.label(present),
                    self.labels.label(present.other())
                )
            }
            DifferenceKind::RenamedInOther => {
                let present = diff.present_in.unwrap_or(Side::A);
                format!(
                    "Exists in {} only; {} runs the same command as '{}'",
                    self.labels.label(present),
                    self.labels.label(present.other()),
                    diff.other_name().unwrap_or_default()
                )
            }
        };
        self.theme.paint(&text, Tone::for_kind(diff.kind))
    }

    fn table_format() -> TableFormat {
        FormatBuilder::new()
            .column_separator(' ')
            .separators(&[LinePosition::Title], LineSeparator::new('-', ' ', ' ', ' '))
            .padding(0, 3)
            .build()
    }
}

/// Records grouped by job name, groups in order of first appearance.
///
/// Records of one name need not be adjacent; each name gets a single group.
fn group_by_job(diffs: &[JobDifference]) -> Vec<(&str, Vec<&JobDifference>)> {
    let mut groups: Vec<(&str, Vec<&JobDifference>)> = Vec::new();
    for diff in diffs {
        match groups.iter().position(|(name, _)| *name == diff.job_name) {
            Some(index) => groups[index].1.push(diff),
            None => groups.push((diff.job_name.as_str(), vec![diff])),
        }
    }
    groups
}

impl Presenter for TablePresenter {
    fn render(&self, diffs: &[JobDifference], out: &mut dyn Write) -> Result<(), RenderError> {
        if let Some((a, b)) = &self.sources {
            writeln!(out, "Comparing Cron Jobs:")?;
            writeln!(out, "{} File: {a}", self.labels.title(Side::A))?;
            writeln!(out, "{} File: {b}", self.labels.title(Side::B))?;
            writeln!(out)?;
        }

        if diffs.is_empty() {
            writeln!(out, "No differences found.")?;
            return Ok(());
        }

        let mut table = Table::new();
        table.set_format(Self::table_format());
        table.set_titles(Row::new(vec![Cell::new("Cron Name"), Cell::new("Difference")]));

        for (name, records) in group_by_job(diffs) {
            let cell = records
                .iter()
                .map(|diff| self.describe(diff))
                .collect::<Vec<_>>()
                .join("\n");
            table.add_row(Row::new(vec![Cell::new(name), Cell::new(&cell)]));
        }

        table.print(out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(presenter: &TablePresenter, diffs: &[JobDifference]) -> String {
        let mut out = Vec::new();
        presenter.render(diffs, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn plain() -> TablePresenter {
        TablePresenter::new(Theme::plain())
    }

    #[test]
    fn test_groups_records_per_job() {
        let diffs = vec![
            JobDifference::command("a", "x", "y"),
            JobDifference::schedule("a", "1", "2"),
            JobDifference::missing("b", Side::B),
        ];
        let groups = group_by_job(&diffs);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "a");
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[1].0, "b");
    }

    #[test]
    fn test_groups_non_adjacent_records() {
        let diffs = vec![
            JobDifference::command("a", "x", "y"),
            JobDifference::missing("b", Side::B),
            JobDifference::schedule("a", "1", "2"),
        ];
        let groups = group_by_job(&diffs);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "a");
        assert_eq!(
            groups[0].1.iter().map(|d| d.kind).collect::<Vec<_>>(),
            vec![DifferenceKind::CommandDiff, DifferenceKind::ScheduleDiff]
        );
        assert_eq!(groups[1].0, "b");
        assert_eq!(groups[1].1.len(), 1);
    }

    #[test]
    fn test_render_unsorted_input_one_row_per_job() {
        let output = render(
            &plain(),
            &[
                JobDifference::command("backup", "/bin/a.sh", "/bin/b.sh"),
                JobDifference::missing("legacy", Side::A),
                JobDifference::schedule("backup", "0 2 * * *", "0 3 * * *"),
            ],
        );

        assert_eq!(output.matches("backup").count(), 1);
        let command = output.find("Command difference:").unwrap();
        let schedule = output.find("Schedule difference:").unwrap();
        let legacy = output.find("legacy").unwrap();
        assert!(command < schedule && schedule < legacy);
    }

    #[test]
    fn test_describe_command_and_schedule() {
        let presenter = plain();
        assert_eq!(
            presenter.describe(&JobDifference::command("j", "/bin/a.sh", "/bin/b.sh")),
            "Command difference:\n  Production: /bin/a.sh\n  Development: /bin/b.sh"
        );
        assert_eq!(
            presenter.describe(&JobDifference::schedule("j", "0 2 * * *", "0 3 * * *")),
            "Schedule difference:\n  Production: 0 2 * * *\n  Development: 0 3 * * *"
        );
    }

    #[test]
    fn test_describe_missing_both_directions() {
        let presenter = plain();
        assert_eq!(
            presenter.describe(&JobDifference::missing("j", Side::A)),
            "Exists in production but not in development"
        );
        assert_eq!(
            presenter.describe(&JobDifference::missing("j", Side::B)),
            "Exists in development but not in production"
        );
    }

    #[test]
    fn test_describe_renamed() {
        let presenter = plain();
        assert_eq!(
            presenter.describe(&JobDifference::renamed("job1", Side::A, "job1_renamed")),
            "Exists in production only; development runs the same command as 'job1_renamed'"
        );
        assert_eq!(
            presenter.describe(&JobDifference::renamed("job1_renamed", Side::B, "job1")),
            "Exists in development only; production runs the same command as 'job1'"
        );
    }

    #[test]
    fn test_custom_labels() {
        let presenter = plain().with_labels(SideLabels::new("live", "staging"));
        assert_eq!(
            presenter.describe(&JobDifference::missing("j", Side::A)),
            "Exists in live but not in staging"
        );
    }

    #[test]
    fn test_render_heading_and_rows() {
        let presenter = plain().with_sources("prod.yaml", "dev.yaml");
        let output = render(
            &presenter,
            &[
                JobDifference::command("backup", "/bin/a.sh", "/bin/b.sh"),
                JobDifference::schedule("backup", "0 2 * * *", "0 3 * * *"),
                JobDifference::missing("legacy", Side::A),
            ],
        );

        assert!(output.starts_with(
            "Comparing Cron Jobs:\nProduction File: prod.yaml\nDevelopment File: dev.yaml\n\n"
        ));
        assert!(output.contains("Cron Name"));
        assert!(output.contains("Difference"));
        assert!(output.contains("---------"));
        assert!(output.contains("Command difference:"));
        assert!(output.contains("Schedule difference:"));
        assert!(output.contains("Exists in production but not in development"));
        // One row per job name, even with two records for backup
        assert_eq!(output.matches("backup").count(), 1);
        assert!(!output.contains('\u{1b}'));
    }

    #[test]
    fn test_render_no_differences() {
        let output = render(&plain(), &[]);
        assert_eq!(output, "No differences found.\n");

        let output = render(&plain().with_sources("a.yaml", "b.yaml"), &[]);
        assert!(output.ends_with("\n\nNo differences found.\n"));
    }
}
