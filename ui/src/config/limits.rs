/// Narrowest terminal the pagination bar is rendered into
pub const MIN_TERMINAL_WIDTH: u16 = 20;

/// Widest terminal buffer allocated for the pagination bar
pub const MAX_TERMINAL_WIDTH: u16 = 500;

/// Log levels accepted in `logging.level`
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
