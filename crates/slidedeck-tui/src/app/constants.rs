//! Application constants.

/// Event loop tick interval in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 50;

/// Most rows the picker strip may take. Longer decks page through it.
pub const MAX_PICKER_ROWS: u16 = 3;

/// Terminal width from which picker chips include slide titles.
pub const PICKER_TITLE_MIN_WIDTH: u16 = 100;

/// Longest slide number the jump prompt accepts.
pub const MAX_JUMP_DIGITS: usize = 4;
