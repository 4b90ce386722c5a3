//! Job and difference record types.

use serde::{Deserialize, Deserializer, Serialize};

/// A scheduled job as read from one side of the comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Job {
    /// Job name, the identity of the job within its collection.
    #[serde(deserialize_with = "null_as_empty")]
    pub name: String,
    /// Command line the job runs.
    #[serde(deserialize_with = "null_as_empty")]
    pub command: String,
    /// Schedule expression (e.g. `0 2 * * *`), compared verbatim.
    #[serde(deserialize_with = "null_as_empty")]
    pub schedule: String,
}

/// Absent and null fields both read as the empty string.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Job {
    /// Create a job from its three fields.
    pub fn new(
        name: impl Into<String>,
        command: impl Into<String>,
        schedule: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            command: command.into(),
            schedule: schedule.into(),
        }
    }
}

/// One of the two collections being compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// The reference side, conventionally production.
    A,
    /// The compared side, conventionally development.
    B,
}

impl Side {
    /// The opposite side.
    pub fn other(self) -> Self {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

/// Kind of discrepancy found for a job.
///
/// Declaration order is the secondary sort key of the engine output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DifferenceKind {
    /// Same name on both sides, commands differ after normalization.
    CommandDiff,
    /// Same name on both sides, schedules differ.
    ScheduleDiff,
    /// Name absent on the other side, but the command exists there under another name.
    RenamedInOther,
    /// Name absent on the other side and no job there runs the same command.
    MissingInOther,
}

/// A single difference between the two sides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDifference {
    /// Name of the job the difference belongs to.
    pub job_name: String,
    /// What kind of difference this is.
    pub kind: DifferenceKind,
    /// Value on side A: command or schedule for diffs, the A-side name for renames.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side_a_value: Option<String>,
    /// Value on side B: command or schedule for diffs, the B-side name for renames.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side_b_value: Option<String>,
    /// Side the job was found on by name. Only set for renamed and missing jobs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub present_in: Option<Side>,
}

impl JobDifference {
    /// Commands differ between two jobs sharing a name.
    pub fn command(job_name: &str, side_a: &str, side_b: &str) -> Self {
        Self::paired(job_name, DifferenceKind::CommandDiff, side_a, side_b)
    }

    /// Schedules differ between two jobs sharing a name.
    pub fn schedule(job_name: &str, side_a: &str, side_b: &str) -> Self {
        Self::paired(job_name, DifferenceKind::ScheduleDiff, side_a, side_b)
    }

    /// Job exists on `present_in` only, but its command runs on the other side as `other_name`.
    pub fn renamed(job_name: &str, present_in: Side, other_name: &str) -> Self {
        let (side_a_value, side_b_value) = match present_in {
            Side::A => (None, Some(other_name.to_string())),
            Side::B => (Some(other_name.to_string()), None),
        };
        Self {
            job_name: job_name.to_string(),
            kind: DifferenceKind::RenamedInOther,
            side_a_value,
            side_b_value,
            present_in: Some(present_in),
        }
    }

    /// Job exists on `present_in` only.
    pub fn missing(job_name: &str, present_in: Side) -> Self {
        Self {
            job_name: job_name.to_string(),
            kind: DifferenceKind::MissingInOther,
            side_a_value: None,
            side_b_value: None,
            present_in: Some(present_in),
        }
    }

    fn paired(job_name: &str, kind: DifferenceKind, side_a: &str, side_b: &str) -> Self {
        Self {
            job_name: job_name.to_string(),
            kind,
            side_a_value: Some(side_a.to_string()),
            side_b_value: Some(side_b.to_string()),
            present_in: None,
        }
    }

    /// Name the job was found under on the other side, for renamed jobs.
    pub fn other_name(&self) -> Option<&str> {
        if self.kind != DifferenceKind::RenamedInOther {
            return None;
        }
        match self.present_in? {
            Side::A => self.side_b_value.as_deref(),
            Side::B => self.side_a_value.as_deref(),
        }
    }
}
