// --- File: config.rs ---
use crate::constants::{HEIGHT_ENV, MAX_BOARD_CELLS, ROWS_PER_CHAR, WIDTH_ENV};
use crate::error::ConfigError;

/// Board dimensions in automaton cells. `height` is already doubled.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BoardSize {
    pub width: usize,
    pub height: usize,
}

/// Optional fixed board size, read once at startup.
///
/// `height` is in terminal rows, like the terminal size it replaces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardConfig {
    pub width: Option<usize>,
    pub height: Option<usize>,
}

impl BoardConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Reads the overrides through `lookup`, so callers can supply something
    /// other than the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            width: parse_override(WIDTH_ENV, lookup(WIDTH_ENV))?,
            height: parse_override(HEIGHT_ENV, lookup(HEIGHT_ENV))?,
        };
        if config.width.is_some() || config.height.is_some() {
            log::info!(
                "Board overrides: width={:?}, height={:?}",
                config.width,
                config.height
            );
        }
        Ok(config)
    }

    /// Resolves the board for a terminal of `columns` x `rows` characters.
    pub fn board_size(&self, columns: u16, rows: u16) -> Result<BoardSize, ConfigError> {
        let width = self.width.unwrap_or(columns as usize);
        let rows = self.height.unwrap_or(rows as usize);
        if width == 0 || rows == 0 {
            return Err(ConfigError::EmptyBoard {
                width,
                height: rows,
            });
        }
        let too_large = ConfigError::BoardTooLarge {
            width,
            height: rows,
            limit: MAX_BOARD_CELLS,
        };
        let Some(height) = rows.checked_mul(ROWS_PER_CHAR) else {
            return Err(too_large);
        };
        match width.checked_mul(height) {
            Some(cells) if cells <= MAX_BOARD_CELLS => Ok(BoardSize { width, height }),
            _ => Err(too_large),
        }
    }
}

fn parse_override(var: &'static str, raw: Option<String>) -> Result<Option<usize>, ConfigError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    raw.trim()
        .parse::<usize>()
        .map(Some)
        .map_err(|_| ConfigError::InvalidOverride { var, value: raw })
}
