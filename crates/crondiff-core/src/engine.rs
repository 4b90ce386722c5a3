//! The diff engine.

use tracing::debug;

use crate::index::CommandIndex;
use crate::{Job, JobDifference, Side, build_command_index, build_name_index, normalize};

/// Compare two job collections and describe how `b` differs from `a`.
///
/// Jobs are paired by name. A job whose name only exists on one side is
/// reported as renamed when its exact command text is a key of the other
/// side's command index, and as missing otherwise. Paired commands are
/// compared after whitespace normalization, schedules verbatim.
///
/// The result is sorted by job name, then by [`DifferenceKind`](crate::DifferenceKind)
/// declaration order.
pub fn compare(a: &[Job], b: &[Job]) -> Vec<JobDifference> {
    let names_a = build_name_index(a);
    let names_b = build_name_index(b);
    let commands_a = build_command_index(a);
    let commands_b = build_command_index(b);

    let mut differences = Vec::new();

    for (name, job_a) in &names_a {
        match names_b.get(name) {
            Some(job_b) => compare_pair(job_a, job_b, &mut differences),
            None => differences.push(unmatched(job_a, Side::A, &commands_b)),
        }
    }

    for (name, job_b) in &names_b {
        if !names_a.contains_key(name) {
            differences.push(unmatched(job_b, Side::B, &commands_a));
        }
    }

    differences.sort_by(|x, y| x.job_name.cmp(&y.job_name).then(x.kind.cmp(&y.kind)));

    debug!(
        jobs_a = names_a.len(),
        jobs_b = names_b.len(),
        differences = differences.len(),
        "compared job collections"
    );

    differences
}

fn compare_pair(a: &Job, b: &Job, out: &mut Vec<JobDifference>) {
    if normalize(&a.command) != normalize(&b.command) {
        out.push(JobDifference::command(&a.name, &a.command, &b.command));
    }
    if a.schedule != b.schedule {
        out.push(JobDifference::schedule(&a.name, &a.schedule, &b.schedule));
    }
}

/// Classify a job found by name on `present_in` only.
///
/// The command is looked up verbatim; only the other side's index keys are normalized.
fn unmatched(job: &Job, present_in: Side, other_commands: &CommandIndex<'_>) -> JobDifference {
    match other_commands.get(job.command.as_str()) {
        Some(other_name) => JobDifference::renamed(&job.name, present_in, other_name),
        None => JobDifference::missing(&job.name, present_in),
    }
}
