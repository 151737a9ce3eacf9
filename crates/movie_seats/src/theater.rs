pub mod grid;
pub mod types;

pub use grid::SeatGrid;
pub use types::{ParseSeatError, Reservation, Seat, SeatState, row_letter};
