//! Interactive editor state machine.
//!
//! The editor is renderer-agnostic and I/O-free: a frontend blocks on one
//! input event at a time, translates it into an [`Intent`], and performs
//! whatever side effect the returned [`EditorAction`] asks for (persisting,
//! loading, terminating), redrawing after every handled intent.
//!
//! ## State Transitions
//!
//! ```text
//! Editing -> (request-exit) -> ConfirmingExit -> (confirm) -> exit
//!                                 \-> (anything else) -> Editing
//! ```

use serde::{Deserialize, Serialize};

use crate::canvas::{Cursor, Direction, Grid, MAX_INTENSITY};
use crate::render::RenderStyle;

/// Editor mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorState {
    Editing,
    /// Exit was requested; awaiting save/discard/cancel.
    ConfirmingExit,
}

/// User intention, already decoded from raw input by the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Move(Direction),
    /// Advance the cell under the cursor to the next intensity.
    Cycle,
    SetIntensity(u8),
    ClearCell,
    ClearAll,
    ToggleStyle,
    Save,
    Load,
    RequestExit,
    ConfirmSaveExit,
    ConfirmDiscardExit,
    /// Any input that maps to nothing else; cancels a pending exit.
    Cancel,
}

/// Side effect the frontend must perform after handling an intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    None,
    /// Persist the current grid to the session pattern file.
    SavePattern,
    /// Reload the grid from the session pattern file.
    LoadPattern,
    /// Terminate the session, persisting first when `save` is set.
    Exit { save: bool },
}

/// Interactive canvas editor.
///
/// Owns the grid for the duration of the session. Single-threaded and
/// synchronous; every intent is handled to completion before the next one.
pub struct Editor {
    grid: Grid,
    cursor: Cursor,
    style: RenderStyle,
    state: EditorState,
    status: String,
}

impl Editor {
    pub fn new(grid: Grid, style: RenderStyle) -> Self {
        Self {
            grid,
            cursor: Cursor::new(),
            style,
            state: EditorState::Editing,
            status: String::new(),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn style(&self) -> RenderStyle {
        self.style
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Intensity of the cell under the cursor.
    pub fn cursor_intensity(&self) -> u8 {
        self.grid.get(self.cursor.row, self.cursor.col).unwrap_or(0)
    }

    /// Transient status line, set by the frontend after I/O it performed on
    /// the editor's behalf.
    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    /// Swap in a freshly loaded grid. The cursor is folded back into the new
    /// bounds.
    pub fn replace_grid(&mut self, grid: Grid) {
        self.cursor.row %= grid.height();
        self.cursor.col %= grid.width();
        self.grid = grid;
    }

    // ── Event handling ───────────────────────────────────────────────

    /// Apply one intent and report the side effect the frontend owes.
    pub fn handle(&mut self, intent: Intent) -> EditorAction {
        match self.state {
            EditorState::Editing => self.handle_editing(intent),
            EditorState::ConfirmingExit => self.handle_confirming(intent),
        }
    }

    fn handle_editing(&mut self, intent: Intent) -> EditorAction {
        match intent {
            Intent::Move(direction) => {
                self.cursor
                    .step(direction, self.grid.height(), self.grid.width());
                self.status.clear();
            }
            Intent::Cycle => {
                let _ = self.grid.cycle(self.cursor.row, self.cursor.col);
                self.status.clear();
            }
            Intent::SetIntensity(intensity) => {
                let _ = self.grid.set(
                    self.cursor.row,
                    self.cursor.col,
                    intensity.min(MAX_INTENSITY),
                );
                self.status.clear();
            }
            Intent::ClearCell => {
                let _ = self.grid.clear(self.cursor.row, self.cursor.col);
                self.status.clear();
            }
            Intent::ClearAll => {
                self.grid.clear_all();
                self.status = "canvas cleared".to_string();
            }
            Intent::ToggleStyle => {
                self.style = self.style.toggled();
                self.status = format!("style: {}", self.style.name());
            }
            Intent::Save => return EditorAction::SavePattern,
            Intent::Load => return EditorAction::LoadPattern,
            Intent::RequestExit => {
                self.state = EditorState::ConfirmingExit;
                self.status =
                    "save and exit? (y: save / n: discard / any other key: cancel)".to_string();
            }
            // Only meaningful while an exit is pending.
            Intent::ConfirmSaveExit | Intent::ConfirmDiscardExit | Intent::Cancel => {}
        }
        EditorAction::None
    }

    fn handle_confirming(&mut self, intent: Intent) -> EditorAction {
        match intent {
            Intent::ConfirmSaveExit => EditorAction::Exit { save: true },
            Intent::ConfirmDiscardExit => EditorAction::Exit { save: false },
            _ => {
                self.state = EditorState::Editing;
                self.status = "exit cancelled".to_string();
                EditorAction::None
            }
        }
    }
}
