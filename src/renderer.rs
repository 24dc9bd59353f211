// --- File: renderer.rs ---
use crate::constants::{GLYPH_EMPTY, GLYPH_FULL, GLYPH_LOWER, GLYPH_UPPER, ROWS_PER_CHAR};
use crate::grid::Grid;
use crate::session::{Frontend, Input};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::Print,
    terminal::{
        self, Clear, ClearType, DisableLineWrap, EnableLineWrap, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use std::io::{self, Stdout, Write};
use std::time::Duration;

/// Glyph for a terminal cell showing two stacked automaton cells.
#[inline]
pub fn glyph(top: bool, bottom: bool) -> char {
    match (top, bottom) {
        (false, false) => GLYPH_EMPTY,
        (true, false) => GLYPH_UPPER,
        (false, true) => GLYPH_LOWER,
        (true, true) => GLYPH_FULL,
    }
}

/// Builds the text rows for `grid`, clipped to `columns` x `rows`.
pub fn frame_lines(grid: &Grid, columns: usize, rows: usize) -> Vec<String> {
    let width = grid.width().min(columns);
    (0..grid.height())
        .step_by(ROWS_PER_CHAR)
        .take(rows)
        .map(|y| {
            let y = y as isize;
            (0..width as isize)
                .map(|x| glyph(grid.get(x, y), grid.get(x, y + 1)))
                .collect()
        })
        .collect()
}

fn key_to_input(key: KeyEvent) -> Option<Input> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        // Raw mode swallows SIGINT.
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Input::Quit),
        KeyCode::Char('r') => Some(Input::Regenerate),
        KeyCode::Char('-') => Some(Input::Slower),
        KeyCode::Char('+') => Some(Input::Faster),
        KeyCode::Char('w') => Some(Input::ToggleWrap),
        KeyCode::Char('p') | KeyCode::Char(' ') => Some(Input::TogglePause),
        KeyCode::Char('b') => Some(Input::BigBang),
        KeyCode::Char('i') => Some(Input::Invert),
        KeyCode::Char('t') => Some(Input::Thanos),
        KeyCode::Char('s') => Some(Input::Step),
        KeyCode::Char('q') => Some(Input::Quit),
        _ => None,
    }
}

fn event_to_input(event: Event) -> Option<Input> {
    match event {
        Event::Key(key) => key_to_input(key),
        Event::Resize(_, _) => Some(Input::Resize),
        _ => None,
    }
}

// --- Terminal Frontend ---

/// Owns the terminal while the game runs. Raw mode, the alternate screen and
/// the hidden cursor are restored on drop.
pub struct TerminalRenderer {
    out: Stdout,
    size: (u16, u16),
    clipped: bool,
}

impl TerminalRenderer {
    pub fn new() -> io::Result<Self> {
        let mut out = io::stdout();
        execute!(out, EnterAlternateScreen, cursor::Hide, DisableLineWrap)?;
        terminal::enable_raw_mode()?;
        let size = terminal::size()?;
        execute!(out, Clear(ClearType::All))?;
        Ok(Self {
            out,
            size,
            clipped: false,
        })
    }
}

impl Frontend for TerminalRenderer {
    fn poll_input(&mut self, timeout: Duration) -> io::Result<Option<Input>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        let event = event::read()?;
        if let Event::Resize(columns, rows) = event {
            self.size = (columns, rows);
            self.clipped = false;
            queue!(self.out, Clear(ClearType::All))?;
        }
        Ok(event_to_input(event))
    }

    fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    fn draw(&mut self, grid: &Grid) -> io::Result<()> {
        let (columns, rows) = (self.size.0 as usize, self.size.1 as usize);
        let needed_rows = grid.height().div_ceil(ROWS_PER_CHAR);
        if !self.clipped && (grid.width() > columns || needed_rows > rows) {
            log::warn!(
                "Board {}x{} exceeds terminal {}x{}, clipping",
                grid.width(),
                grid.height(),
                columns,
                rows
            );
            self.clipped = true;
        }

        for (row, line) in frame_lines(grid, columns, rows).into_iter().enumerate() {
            queue!(self.out, cursor::MoveTo(0, row as u16), Print(line))?;
        }
        self.out.flush()
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        terminal::disable_raw_mode().ok();
        execute!(self.out, EnableLineWrap, cursor::Show, LeaveAlternateScreen).ok();
    }
}
