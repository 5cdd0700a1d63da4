//! Interactive canvas editor frontend.
//!
//! Terminal plumbing only: raw mode, key decoding, full-screen redraws. All
//! editing semantics live in `lawnpaint_core::editor`; this module translates
//! key events into intents and performs the filesystem work the editor
//! signals back.

use std::io::{self, Write};
use std::path::Path;

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{execute, queue};

use lawnpaint_core::canvas::{Direction, Grid};
use lawnpaint_core::editor::{Editor, EditorAction, EditorState, Intent};
use lawnpaint_core::error::PatternError;
use lawnpaint_core::render::{cell_glyphs, glyph_for, CellGlyph, DAY_LABELS};
use lawnpaint_core::storage::{self, Config, PatternFile};
use lawnpaint_core::MAX_INTENSITY;

const TITLE: &str = "lawnpaint canvas editor";

const HELP_LINES: [&str; 2] = [
    "arrows: move | space: paint | 0-4: intensity | t: style",
    "s: save | l: load | c: clear | backspace: erase | q/esc: exit",
];

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let pattern_path = storage::patterns_dir()?.join(&config.editor.pattern_name);

    let mut editor = Editor::new(Grid::new(7, 52)?, config.editor.style);

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, Hide)?;
    let result = event_loop(&mut stdout, &mut editor, &pattern_path);
    execute!(stdout, Show, LeaveAlternateScreen)?;
    disable_raw_mode()?;
    result
}

fn event_loop(
    stdout: &mut io::Stdout,
    editor: &mut Editor,
    pattern_path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        draw(stdout, editor)?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        let Some(intent) = map_key(key, editor.state()) else {
            continue;
        };

        match editor.handle(intent) {
            EditorAction::None => {}
            EditorAction::SavePattern => match save_pattern(editor, pattern_path) {
                Ok(()) => editor.set_status(format!("saved {}", pattern_path.display())),
                Err(e) => editor.set_status(format!("save failed: {e}")),
            },
            EditorAction::LoadPattern => match PatternFile::load_grid(pattern_path) {
                Ok(grid) => {
                    editor.replace_grid(grid);
                    editor.set_status(format!("loaded {}", pattern_path.display()));
                }
                Err(e) => editor.set_status(format!("load failed: {e}")),
            },
            EditorAction::Exit { save } => {
                if save {
                    save_pattern(editor, pattern_path)?;
                }
                return Ok(());
            }
        }
    }
}

fn save_pattern(editor: &Editor, path: &Path) -> Result<(), PatternError> {
    PatternFile::from_grid(editor.grid()).save(path)
}

fn map_key(key: KeyEvent, state: EditorState) -> Option<Intent> {
    // While an exit is pending, every key means something: confirm one way
    // or the other, or cancel.
    if state == EditorState::ConfirmingExit {
        return Some(match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => Intent::ConfirmSaveExit,
            KeyCode::Char('n') | KeyCode::Char('N') => Intent::ConfirmDiscardExit,
            _ => Intent::Cancel,
        });
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Intent::RequestExit);
    }

    Some(match key.code {
        KeyCode::Up => Intent::Move(Direction::Up),
        KeyCode::Down => Intent::Move(Direction::Down),
        KeyCode::Left => Intent::Move(Direction::Left),
        KeyCode::Right => Intent::Move(Direction::Right),
        KeyCode::Char(' ') => Intent::Cycle,
        KeyCode::Char(c @ '0'..='4') => Intent::SetIntensity(c as u8 - b'0'),
        KeyCode::Backspace | KeyCode::Delete => Intent::ClearCell,
        KeyCode::Char('t' | 'T') => Intent::ToggleStyle,
        KeyCode::Char('s' | 'S') => Intent::Save,
        KeyCode::Char('l' | 'L') => Intent::Load,
        KeyCode::Char('c' | 'C') => Intent::ClearAll,
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => Intent::RequestExit,
        _ => return None,
    })
}

fn color_for(cell: &CellGlyph) -> Color {
    if cell.is_cursor {
        return Color::Yellow;
    }
    match cell.intensity {
        0 => Color::DarkGrey,
        1 => Color::DarkGreen,
        _ => Color::Green,
    }
}

fn draw(stdout: &mut io::Stdout, editor: &Editor) -> io::Result<()> {
    let grid = editor.grid();
    let origin_x: u16 = 2;
    let origin_y: u16 = 2;

    queue!(
        stdout,
        Clear(ClearType::All),
        MoveTo(origin_x, 0),
        SetAttribute(Attribute::Bold),
        Print(TITLE),
        SetAttribute(Attribute::Reset),
    )?;

    for cell in cell_glyphs(grid, Some(editor.cursor()), editor.style()) {
        queue!(
            stdout,
            MoveTo(origin_x + cell.col as u16 * 2, origin_y + cell.row as u16),
            SetForegroundColor(color_for(&cell)),
            Print(cell.glyph),
            ResetColor,
        )?;
    }

    let label_x = origin_x + grid.width() as u16 * 2 + 2;
    for (row, label) in DAY_LABELS.iter().enumerate().take(grid.height()) {
        queue!(stdout, MoveTo(label_x, origin_y + row as u16), Print(label))?;
    }

    let cursor = editor.cursor();
    let info_y = origin_y + grid.height() as u16 + 1;
    queue!(
        stdout,
        MoveTo(origin_x, info_y),
        Print(format!(
            "position: ({}, {}) | intensity: {}",
            cursor.col,
            cursor.row,
            editor.cursor_intensity()
        )),
    )?;

    let legend_y = info_y + 1;
    queue!(
        stdout,
        MoveTo(origin_x, legend_y),
        Print(format!("levels (style: {}): ", editor.style().name())),
    )?;
    for level in 0..=MAX_INTENSITY {
        let sample = CellGlyph {
            row: 0,
            col: 0,
            glyph: glyph_for(level, editor.style()),
            intensity: level,
            is_cursor: false,
        };
        queue!(
            stdout,
            SetForegroundColor(color_for(&sample)),
            Print(sample.glyph),
            ResetColor,
            Print(format!(" {level}  ")),
        )?;
    }

    let help_y = legend_y + 2;
    for (i, line) in HELP_LINES.iter().enumerate() {
        queue!(
            stdout,
            MoveTo(origin_x, help_y + i as u16),
            SetAttribute(Attribute::Dim),
            Print(*line),
            SetAttribute(Attribute::Reset),
        )?;
    }

    if !editor.status().is_empty() {
        queue!(
            stdout,
            MoveTo(origin_x, help_y + HELP_LINES.len() as u16 + 1),
            SetAttribute(Attribute::Bold),
            Print(format!("[status] {}", editor.status())),
            SetAttribute(Attribute::Reset),
        )?;
    }

    stdout.flush()
}
