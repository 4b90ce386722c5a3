//! Structured JSON output.

use std::io::Write;

use crondiff_core::JobDifference;

use crate::{Presenter, RenderError};

/// Renders differences as a pretty-printed JSON array.
///
/// Absent values are omitted rather than written as `null`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonPresenter;

impl Presenter for JsonPresenter {
    fn render(&self, diffs: &[JobDifference], out: &mut dyn Write) -> Result<(), RenderError> {
        serde_json::to_writer_pretty(&mut *out, diffs)?;
        writeln!(out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crondiff_core::Side;

    fn render(diffs: &[JobDifference]) -> String {
        let mut out = Vec::new();
        JsonPresenter.render(diffs, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(render(&[]), "[]\n");
    }

    #[test]
    fn test_snapshot() {
        let output = render(&[
            JobDifference::command("backup", "/bin/a.sh", "/bin/b.sh"),
            JobDifference::missing("legacy", Side::A),
            JobDifference::renamed("sync", Side::A, "sync_v2"),
        ]);

        insta::assert_snapshot!(output, @r###"
        [
          {
            "job_name": "backup",
            "kind": "command_diff",
            "side_a_value": "/bin/a.sh",
            "side_b_value": "/bin/b.sh"
          },
          {
            "job_name": "legacy",
            "kind": "missing_in_other",
            "present_in": "a"
          },
          {
            "job_name": "sync",
            "kind": "renamed_in_other",
            "side_b_value": "sync_v2",
            "present_in": "a"
          }
        ]
        "###);
    }

    #[test]
    fn test_output_parses_back() {
        let diffs = vec![
            JobDifference::schedule("report", "0 8 * * 1", "0 9 * * 1"),
            JobDifference::missing("metrics", Side::B),
        ];
        let parsed: Vec<JobDifference> = serde_json::from_str(&render(&diffs)).unwrap();
        assert_eq!(parsed, diffs);

        let value: serde_json::Value = serde_json::from_str(&render(&diffs)).unwrap();
        assert!(value[1].get("side_a_value").is_none());
    }
}
