use crate::constants::{COL_BUFFER, ROW_BUFFER};
use crate::theater::{Reservation, Seat};

/// Block of `party_size` seats starting at (`row`, `col`) and running right.
///
/// Empty when `col + party_size >= cols - 1`, so the last two columns never
/// end a block even when it would physically fit.
pub fn possible_seats(row: usize, col: usize, party_size: usize, cols: usize) -> Vec<Seat> {
    match col.checked_add(party_size) {
        Some(end) if end < cols.saturating_sub(1) => (col..end).map(|c| Seat::new(row, c)).collect(),
        _ => Vec::new(),
    }
}

/// True unless `seat` is within one row and three columns of any of `others`
pub fn valid_seat(seat: Seat, others: &[Seat]) -> bool {
    others.iter().all(|other| {
        let row_dist = seat.row.abs_diff(other.row);
        let col_dist = seat.col.abs_diff(other.col);
        !(row_dist < ROW_BUFFER && col_dist < COL_BUFFER)
    })
}

/// Every seat of `candidate` must be valid against every existing reservation
pub fn can_sit(candidate: &[Seat], reservations: &[Reservation]) -> bool {
    if candidate.is_empty() {
        return false;
    }
    reservations
        .iter()
        .all(|r| candidate.iter().all(|&seat| valid_seat(seat, &r.seats)))
}
