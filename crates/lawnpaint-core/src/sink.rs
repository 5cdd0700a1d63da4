//! Commit sinks.
//!
//! The planner emits instructions; a sink turns each one into exactly one
//! version-control commit. [`GitCommitSink`] shells out to the `git` binary
//! with forced author/committer dates; [`MemorySink`] records instructions
//! in memory for unit tests and dry runs.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::process::Command;

use crate::error::SinkError;
use crate::plan::CommitInstruction;

/// Turns one commit instruction into exactly one commit.
pub trait CommitSink {
    fn commit(&mut self, instruction: &CommitInstruction) -> Result<(), SinkError>;
}

/// Sink that creates real git commits in a repository.
///
/// Per instruction: append a line to the tracked marker file, stage it, and
/// commit with `GIT_AUTHOR_DATE` and `GIT_COMMITTER_DATE` both forced to the
/// instruction's timestamp. Timestamps are used exactly as requested; no
/// clamping, no dedup of same-second commits.
pub struct GitCommitSink {
    repo_dir: PathBuf,
    marker_file: String,
    message_prefix: String,
}

impl GitCommitSink {
    pub fn new(
        repo_dir: impl Into<PathBuf>,
        marker_file: impl Into<String>,
        message_prefix: impl Into<String>,
    ) -> Self {
        Self {
            repo_dir: repo_dir.into(),
            marker_file: marker_file.into(),
            message_prefix: message_prefix.into(),
        }
    }

    fn run_git(&self, args: &[&str], envs: &[(&str, &str)]) -> Result<(), SinkError> {
        let rendered = format!("git {}", args.join(" "));
        let mut command = Command::new("git");
        command.current_dir(&self.repo_dir).args(args);
        for (key, value) in envs {
            command.env(key, value);
        }
        let output = command.output().map_err(|source| SinkError::Spawn {
            command: rendered.clone(),
            source,
        })?;
        if !output.status.success() {
            return Err(SinkError::CommandFailed {
                command: rendered,
                status: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(())
    }
}

impl CommitSink for GitCommitSink {
    fn commit(&mut self, instruction: &CommitInstruction) -> Result<(), SinkError> {
        let stamp = instruction.env_timestamp();

        let marker = self.repo_dir.join(&self.marker_file);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&marker)
            .map_err(|source| SinkError::MarkerWrite {
                path: marker.clone(),
                source,
            })?;
        writeln!(file, "Commit on {stamp}").map_err(|source| SinkError::MarkerWrite {
            path: marker.clone(),
            source,
        })?;

        self.run_git(&["add", &self.marker_file], &[])?;

        let message = format!("{} {}", self.message_prefix, instruction.sequence);
        self.run_git(
            &["commit", "-m", &message],
            &[
                ("GIT_AUTHOR_DATE", stamp.as_str()),
                ("GIT_COMMITTER_DATE", stamp.as_str()),
            ],
        )
    }
}

/// In-memory sink recording every instruction it receives, optionally
/// failing once a commit limit is reached.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub commits: Vec<CommitInstruction>,
    fail_after: Option<usize>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sink that accepts `limit` commits and fails on the next one.
    pub fn failing_after(limit: usize) -> Self {
        Self {
            commits: Vec::new(),
            fail_after: Some(limit),
        }
    }
}

impl CommitSink for MemorySink {
    fn commit(&mut self, instruction: &CommitInstruction) -> Result<(), SinkError> {
        if let Some(limit) = self.fail_after {
            if self.commits.len() >= limit {
                return Err(SinkError::CommandFailed {
                    command: "memory sink".to_string(),
                    status: 1,
                    stderr: format!("refusing commits past limit {limit}"),
                });
            }
        }
        self.commits.push(instruction.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn instruction(sequence: u32) -> CommitInstruction {
        CommitInstruction {
            timestamp: NaiveDate::from_ymd_opt(2024, 3, 4)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap(),
            sequence,
        }
    }

    #[test]
    fn memory_sink_records_in_arrival_order() {
        let mut sink = MemorySink::new();
        for sequence in 1..=3 {
            sink.commit(&instruction(sequence)).unwrap();
        }
        let sequences: Vec<_> = sink.commits.iter().map(|i| i.sequence).collect();
        assert_eq!(sequences, vec![1, 2, 3]);
    }

    #[test]
    fn memory_sink_fails_past_its_limit() {
        let mut sink = MemorySink::failing_after(1);
        sink.commit(&instruction(1)).unwrap();
        let err = sink.commit(&instruction(2)).unwrap_err();
        assert!(matches!(err, SinkError::CommandFailed { .. }));
        assert_eq!(sink.commits.len(), 1);
    }
}
