pub mod config;
pub mod constants;
pub mod error;
pub mod export;
pub mod planner;
pub mod requests;
pub mod theater;

pub use config::Config;
pub use constants::{
    BEST_SEAT_SCORE, COL_BUFFER, DEFAULT_OUTPUT_FILE, DEFAULT_ROWS, DEFAULT_SEATS_PER_ROW,
    MAX_ROWS, MAX_WEIGHT, ROW_BUFFER, SAFETY_WEIGHT, SATISFACTION_WEIGHT,
};
pub use error::{SeatingError, SeatsError};
pub use export::{parse_tickets, write_tickets};
pub use planner::{ScoreWeights, SeatAllocator, SeatingEngine};
pub use requests::{GroupRequest, read_requests, read_requests_from_reader};
pub use theater::{Reservation, Seat, SeatGrid, SeatState};
