/// Theater size
pub const DEFAULT_ROWS: usize = 10;
pub const DEFAULT_SEATS_PER_ROW: usize = 20;
pub const MAX_ROWS: usize = 26; // row labels run A..=Z

/// Score weights
pub const SAFETY_WEIGHT: i64 = 1;
pub const SATISFACTION_WEIGHT: i64 = 3;
pub const MAX_WEIGHT: i64 = 1_000; // weights must lie in -MAX_WEIGHT..=MAX_WEIGHT

/// Score of the ideal seat itself, reduced by Manhattan distance from it
pub const BEST_SEAT_SCORE: i64 = 100;

/// Spacing rule: a seat is rejected when it is within `ROW_BUFFER - 1` rows
/// and `COL_BUFFER - 1` columns of another group's seat
pub const ROW_BUFFER: usize = 2;
pub const COL_BUFFER: usize = 4;

/// Screen header is centered over this many characters
pub const SCREEN_LABEL_WIDTH: usize = 10;

pub const DEFAULT_OUTPUT_FILE: &str = "output.txt";
