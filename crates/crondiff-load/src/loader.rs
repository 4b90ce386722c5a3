//! YAML job file loader.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use crondiff_core::Job;

use crate::LoadError;

/// What to do when a file defines the same job name twice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Keep every entry; the engine compares the last one.
    #[default]
    LastWins,
    /// Fail the load.
    Reject,
}

/// On-disk document shape.
#[derive(Debug, Default, Deserialize)]
struct JobDocument {
    #[serde(default)]
    cronjobs: Option<Vec<Job>>,
}

/// Read and parse the job file at `path`.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn load_jobs(path: &Path, policy: DuplicatePolicy) -> Result<Vec<Job>, LoadError> {
    let source = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_jobs(&source, path, policy)
}

/// Parse a job document. `path` is only used for error messages and logs.
///
/// An empty document, or one without a `cronjobs` key, is an empty collection.
pub fn parse_jobs(
    source: &str,
    path: &Path,
    policy: DuplicatePolicy,
) -> Result<Vec<Job>, LoadError> {
    let document: Option<JobDocument> = if source.trim().is_empty() {
        None
    } else {
        serde_yaml::from_str(source).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?
    };
    let jobs = document.and_then(|d| d.cronjobs).unwrap_or_default();

    let duplicates = duplicate_names(&jobs);
    if let Some(name) = duplicates.first() {
        match policy {
            DuplicatePolicy::Reject => {
                return Err(LoadError::DuplicateName {
                    path: path.to_path_buf(),
                    name: name.clone(),
                });
            }
            DuplicatePolicy::LastWins => {
                warn!(
                    path = %path.display(),
                    names = ?duplicates,
                    "duplicate job names, only the last definition of each is compared"
                );
            }
        }
    }

    debug!(path = %path.display(), jobs = jobs.len(), "loaded job file");
    Ok(jobs)
}

/// Names defined more than once in `jobs`, in order of their first repeat.
pub fn duplicate_names(jobs: &[Job]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();
    for job in jobs {
        if !seen.insert(job.name.as_str()) && reported.insert(job.name.as_str()) {
            duplicates.push(job.name.clone());
        }
    }
    duplicates
}
