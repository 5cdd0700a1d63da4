//! # Lawnpaint Core Library
//!
//! Core logic for lawnpaint, a contribution-calendar painter: edit an
//! intensity grid in the terminal, persist it as a pattern file, then
//! materialize it as a sequence of backdated git commits whose timestamps
//! reproduce the painted pattern on a calendar-style contribution view.
//!
//! ## Architecture
//!
//! - **Canvas**: the intensity grid and toroidal cursor -- pure data plus
//!   mutation operations
//! - **Calendar**: maps (week, day-of-week) grid coordinates to dates,
//!   anchored to the Sunday on/before January 1 of the target year
//! - **Policy**: turns a painted intensity into a randomized commit count and
//!   a plausible intraday time, with an injectable seed
//! - **Plan**: week-major walk over the grid producing ordered commit
//!   instructions, replayed serially against a sink
//! - **Editor**: renderer-agnostic interactive state machine
//! - **Storage**: JSON pattern files and TOML configuration
//!
//! ## Key Components
//!
//! - [`Grid`] / [`Cursor`]: canvas data model
//! - [`YearCalendar`]: grid-to-date mapping
//! - [`PlanBuilder`]: commit plan construction
//! - [`CommitSink`]: one instruction in, exactly one commit out
//! - [`Editor`]: interactive editing state machine

pub mod calendar;
pub mod canvas;
pub mod editor;
pub mod error;
pub mod plan;
pub mod policy;
pub mod render;
pub mod sink;
pub mod storage;

pub use calendar::YearCalendar;
pub use canvas::{Cursor, Direction, Grid, MAX_INTENSITY};
pub use editor::{Editor, EditorAction, EditorState, Intent};
pub use error::{
    CalendarError, CanvasError, ConfigError, CoreError, PatternError, PolicyError, SinkError,
};
pub use plan::{build_plan, CommitInstruction, PlanBuilder, PlanHalted};
pub use policy::{CommitPolicy, PolicyConfig};
pub use render::{cell_glyphs, render_text, CellGlyph, RenderStyle};
pub use sink::{CommitSink, GitCommitSink, MemorySink};
pub use storage::{Config, PatternFile};
