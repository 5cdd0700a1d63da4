//! Commit plan construction and serial replay.
//!
//! The builder walks the grid week-major (column by column, days within each
//! column) and emits one instruction per synthesized commit. Emission order
//! is chronological at day granularity because the walk follows the calendar
//! mapping, so the replay needs no global sort.

use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

use crate::calendar::YearCalendar;
use crate::canvas::Grid;
use crate::error::{Result, SinkError};
use crate::policy::{CommitPolicy, PolicyConfig};
use crate::sink::CommitSink;

/// One synthesized commit: a concrete timestamp plus its 1-based position in
/// the run. Ephemeral; consumed by the sink, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitInstruction {
    pub timestamp: NaiveDateTime,
    pub sequence: u32,
}

impl CommitInstruction {
    /// Calendar date the commit lands on.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    /// Timestamp in the fixed `YYYY-MM-DD HH:MM:SS` form the git sink feeds
    /// to GIT_AUTHOR_DATE / GIT_COMMITTER_DATE.
    pub fn env_timestamp(&self) -> String {
        self.timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

/// Walks a grid and turns painted cells into commit instructions.
pub struct PlanBuilder {
    calendar: YearCalendar,
    policy: CommitPolicy,
}

impl PlanBuilder {
    pub fn new(calendar: YearCalendar, policy: CommitPolicy) -> Self {
        Self { calendar, policy }
    }

    /// Build the ordered instruction sequence for `grid`.
    ///
    /// Cells mapping outside the target year are skipped entirely; they draw
    /// no commit count and do not advance the sequence counter.
    pub fn build(&mut self, grid: &Grid) -> Vec<CommitInstruction> {
        let mut plan = Vec::new();
        let mut sequence = 0u32;
        for week in 0..grid.width() {
            for day in 0..grid.height() {
                let intensity = grid.get(day, week).unwrap_or(0);
                if intensity == 0 {
                    continue;
                }
                let date = self.calendar.map_cell(week, day);
                if !self.calendar.contains(date) {
                    continue;
                }
                let count = self.policy.count_for(intensity);
                for _ in 0..count {
                    sequence += 1;
                    plan.push(CommitInstruction {
                        timestamp: self.policy.commit_time(date),
                        sequence,
                    });
                }
            }
        }
        plan
    }
}

/// Build a plan for a grid in one step: calendar for the target year, policy
/// from the given config, week-major walk.
pub fn build_plan(grid: &Grid, year: i32, config: PolicyConfig) -> Result<Vec<CommitInstruction>> {
    let calendar = YearCalendar::new(year)?;
    let policy = CommitPolicy::with_config(config)?;
    Ok(PlanBuilder::new(calendar, policy).build(grid))
}

/// Raised when the sink fails partway through a plan. Commits already created
/// are independent units and stand as-is; nothing is rolled back or retried.
#[derive(Error, Debug)]
#[error("commit sink failed after {completed} of {total} commits: {source}")]
pub struct PlanHalted {
    pub completed: usize,
    pub total: usize,
    #[source]
    pub source: SinkError,
}

/// Replay a plan against a sink, one instruction at a time, in emission
/// order. `on_commit` fires after each successful commit. Returns the number
/// of commits created.
pub fn apply<S>(
    plan: &[CommitInstruction],
    sink: &mut S,
    mut on_commit: impl FnMut(&CommitInstruction),
) -> Result<usize, PlanHalted>
where
    S: CommitSink + ?Sized,
{
    for (done, instruction) in plan.iter().enumerate() {
        if let Err(source) = sink.commit(instruction) {
            return Err(PlanHalted {
                completed: done,
                total: plan.len(),
                source,
            });
        }
        on_commit(instruction);
    }
    Ok(plan.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::PolicyConfig;
    use crate::sink::MemorySink;
    use chrono::{NaiveDate, Timelike};

    fn builder_for(year: i32, seed: u64) -> PlanBuilder {
        let calendar = YearCalendar::new(year).unwrap();
        let policy = CommitPolicy::with_config(PolicyConfig {
            seed: Some(seed),
            ..Default::default()
        })
        .unwrap();
        PlanBuilder::new(calendar, policy)
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn single_cell_emits_a_contiguous_dated_run() {
        let mut grid = Grid::new(7, 52).unwrap();
        // (row 1, week 0) maps to 2024-01-01 under the 2024 anchor.
        grid.set(1, 0, 1).unwrap();

        let plan = builder_for(2024, 42).build(&grid);

        assert!((1..=3).contains(&plan.len()));
        for (i, instruction) in plan.iter().enumerate() {
            assert_eq!(instruction.date(), date(2024, 1, 1));
            assert_eq!(instruction.sequence as usize, i + 1);
        }
    }

    #[test]
    fn cells_outside_the_year_do_not_advance_the_sequence() {
        let mut grid = Grid::new(7, 52).unwrap();
        // (row 0, week 0) maps to 2023-12-31, outside 2024.
        grid.set(0, 0, 4).unwrap();
        grid.set(1, 0, 1).unwrap();

        let plan = builder_for(2024, 7).build(&grid);

        assert!(!plan.is_empty());
        assert_eq!(plan[0].sequence, 1);
        assert!(plan.iter().all(|i| i.date() == date(2024, 1, 1)));
    }

    #[test]
    fn walk_is_week_major_day_minor() {
        let mut grid = Grid::new(7, 52).unwrap();
        grid.set(6, 0, 1).unwrap(); // 2024-01-06
        grid.set(1, 1, 1).unwrap(); // 2024-01-08
        grid.set(3, 1, 1).unwrap(); // 2024-01-10

        let plan = builder_for(2024, 99).build(&grid);

        let dates: Vec<_> = plan.iter().map(CommitInstruction::date).collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);
        assert_eq!(dates.first(), Some(&date(2024, 1, 6)));
        assert_eq!(dates.last(), Some(&date(2024, 1, 10)));
    }

    #[test]
    fn empty_grid_builds_an_empty_plan() {
        let grid = Grid::new(7, 52).unwrap();
        assert!(builder_for(2024, 1).build(&grid).is_empty());
    }

    #[test]
    fn sequence_numbers_are_continuous_across_days() {
        let mut grid = Grid::new(7, 52).unwrap();
        grid.set(1, 0, 2).unwrap();
        grid.set(2, 0, 2).unwrap();

        let plan = builder_for(2024, 5).build(&grid);

        let sequences: Vec<_> = plan.iter().map(|i| i.sequence).collect();
        let expected: Vec<_> = (1..=plan.len() as u32).collect();
        assert_eq!(sequences, expected);
    }

    #[test]
    fn instructions_carry_working_hour_timestamps() {
        let mut grid = Grid::new(7, 52).unwrap();
        grid.set(1, 0, 4).unwrap();

        let plan = builder_for(2024, 13).build(&grid);

        for instruction in &plan {
            assert!((9..=22).contains(&instruction.timestamp.hour()));
        }
    }

    #[test]
    fn env_timestamp_uses_the_fixed_format() {
        let instruction = CommitInstruction {
            timestamp: date(2024, 1, 1).and_hms_opt(9, 30, 5).unwrap(),
            sequence: 1,
        };
        assert_eq!(instruction.env_timestamp(), "2024-01-01 09:30:05");
    }

    #[test]
    fn apply_replays_in_order_and_reports_the_count() {
        let mut grid = Grid::new(7, 52).unwrap();
        grid.set(1, 0, 3).unwrap();
        let plan = builder_for(2024, 21).build(&grid);

        let mut sink = MemorySink::new();
        let mut seen = 0usize;
        let done = apply(&plan, &mut sink, |_| seen += 1).unwrap();

        assert_eq!(done, plan.len());
        assert_eq!(seen, plan.len());
        assert_eq!(sink.commits, plan);
    }

    #[test]
    fn build_plan_matches_a_hand_built_builder() {
        let mut grid = Grid::new(7, 52).unwrap();
        grid.set(1, 0, 2).unwrap();
        let config = PolicyConfig {
            seed: Some(17),
            ..Default::default()
        };

        let convenient = build_plan(&grid, 2024, config.clone()).unwrap();
        let manual = builder_for(2024, 17).build(&grid);

        assert_eq!(convenient, manual);
    }

    #[test]
    fn build_plan_rejects_an_invalid_policy() {
        let grid = Grid::new(7, 52).unwrap();
        let config = PolicyConfig {
            bands: [(1, 3), (2, 7), (8, 12), (13, 20)],
            ..Default::default()
        };
        assert!(build_plan(&grid, 2024, config).is_err());
    }

    #[test]
    fn apply_halts_at_the_first_sink_failure() {
        let mut grid = Grid::new(7, 52).unwrap();
        grid.set(1, 0, 4).unwrap();
        let plan = builder_for(2024, 8).build(&grid);
        assert!(plan.len() > 2);

        let mut sink = MemorySink::failing_after(2);
        let halted = apply(&plan, &mut sink, |_| {}).unwrap_err();

        assert_eq!(halted.completed, 2);
        assert_eq!(halted.total, plan.len());
        assert_eq!(sink.commits.len(), 2);
    }
}
