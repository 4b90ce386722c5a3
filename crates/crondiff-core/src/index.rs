//! Lookup indexes built over one side's jobs.
//!
//! Both indexes are last-wins: when two jobs share a key, the one later in
//! the collection replaces the earlier one.

use std::collections::HashMap;

use tracing::debug;

use crate::{Job, normalize};

/// Job name -> job.
pub type NameIndex<'a> = HashMap<&'a str, &'a Job>;

/// Normalized command -> name of the job running it.
pub type CommandIndex<'a> = HashMap<String, &'a str>;

/// Index `jobs` by name.
pub fn build_name_index(jobs: &[Job]) -> NameIndex<'_> {
    let mut index = HashMap::with_capacity(jobs.len());
    for job in jobs {
        if let Some(previous) = index.insert(job.name.as_str(), job) {
            debug!(
                name = %job.name,
                replaced_command = %previous.command,
                "duplicate job name, keeping the later entry"
            );
        }
    }
    index
}

/// Index `jobs` by normalized command text.
pub fn build_command_index(jobs: &[Job]) -> CommandIndex<'_> {
    let mut index = HashMap::with_capacity(jobs.len());
    for job in jobs {
        if let Some(previous) = index.insert(normalize(&job.command), job.name.as_str()) {
            debug!(
                name = %job.name,
                replaced = previous,
                "duplicate command, keeping the later job name"
            );
        }
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_index_last_wins() {
        let jobs = vec![
            Job::new("backup", "/bin/old.sh", "0 1 * * *"),
            Job::new("cleanup", "/bin/cleanup.sh", "0 3 * * *"),
            Job::new("backup", "/bin/new.sh", "0 2 * * *"),
        ];
        let index = build_name_index(&jobs);

        assert_eq!(index.len(), 2);
        assert_eq!(index["backup"].command, "/bin/new.sh");
        assert_eq!(index["cleanup"].schedule, "0 3 * * *");
    }

    #[test]
    fn test_command_index_keys_are_normalized() {
        let jobs = vec![Job::new("run", "  /bin/run.sh   --all ", "* * * * *")];
        let index = build_command_index(&jobs);

        assert_eq!(index.get("/bin/run.sh --all"), Some(&"run"));
        assert_eq!(index.get("  /bin/run.sh   --all "), None);
    }

    #[test]
    fn test_command_index_last_wins() {
        let jobs = vec![
            Job::new("first", "/bin/run.sh", "* * * * *"),
            Job::new("second", "/bin/run.sh", "*/5 * * * *"),
        ];
        let index = build_command_index(&jobs);

        assert_eq!(index.len(), 1);
        assert_eq!(index["/bin/run.sh"], "second");
    }

    #[test]
    fn test_empty_collection() {
        assert!(build_name_index(&[]).is_empty());
        assert!(build_command_index(&[]).is_empty());
    }
}
