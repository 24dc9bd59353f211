// --- File: constants.rs ---
// --- Board Seeding & Mutation Odds ---
// Initial seeding: a cell starts alive when a draw over 0..=SEED_FREQUENCY hits 0.
// Lower means more initial alive cells.
pub const SEED_FREQUENCY: u32 = 3;
// Big bang: each dead cell comes alive with probability 1 / BIG_BANG_OUTCOMES.
pub const BIG_BANG_OUTCOMES: u32 = 11;
// Thanos: each live cell survives with probability 1 / THANOS_OUTCOMES.
pub const THANOS_OUTCOMES: u32 = 2;

// --- Speed Control ---
// The input poll timeout doubles as the tick interval.
pub const MIN_TICK_MS: u64 = 8;
pub const MAX_TICK_MS: u64 = 1024;
pub const INITIAL_TICK_MS: u64 = MIN_TICK_MS;

// --- Spontaneous Events ---
// Every wake while running draws from 0..RANDOM_EVENT_RANGE.
pub const RANDOM_EVENT_RANGE: u32 = 100_000;
pub const RANDOM_EVENT_BIG_BANG: u32 = 0;
pub const RANDOM_EVENT_INVERT: u32 = 1;
pub const RANDOM_EVENT_THANOS: u32 = 2;

// --- Rendering ---
// Each terminal row shows two automaton rows.
pub const ROWS_PER_CHAR: usize = 2;
pub const GLYPH_EMPTY: char = ' ';
pub const GLYPH_UPPER: char = '\u{2580}'; // ▀
pub const GLYPH_LOWER: char = '\u{2584}'; // ▄
pub const GLYPH_FULL: char = '\u{2588}'; // █

// --- Board Limits ---
// Upper bound on automaton cells; both buffers hold this many.
pub const MAX_BOARD_CELLS: usize = 1 << 24;

// --- Environment Overrides ---
pub const WIDTH_ENV: &str = "GOL_WIDTH";
pub const HEIGHT_ENV: &str = "GOL_HEIGHT";

// --- End of File: constants.rs ---
