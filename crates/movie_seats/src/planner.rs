pub mod candidates;
pub mod scoring;

use log::{debug, info, warn};

pub use candidates::{can_sit, possible_seats, valid_seat};
pub use scoring::{ScoreWeights, best_seat, dist_to_best_seat, dist_to_nearest_person, score_seats};

use crate::config::Config;
use crate::constants::{DEFAULT_ROWS, DEFAULT_SEATS_PER_ROW};
use crate::error::SeatingError;
use crate::theater::{Reservation, Seat, SeatGrid};

/// Public contract of a seat allocator.
pub trait SeatAllocator {
    fn version() -> String {
        format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }

    /// Seats the group if possible; `false` leaves all state untouched
    fn assign_seats(&mut self, group: &str, party_size: usize) -> bool;

    fn find_best_seats(&self, party_size: usize) -> Option<Vec<Seat>>;

    /// Commits seats without validation
    fn reserve_seats(&mut self, group: &str, seats: Vec<Seat>);

    /// One `<group> <seat>,<seat>,...` line per reservation
    fn print_tickets(&self) -> String;
}

/// Owns one auditorium: its grid and the groups seated in it.
///
/// Reservations keep insertion order. Re-using a group id replaces its
/// seat list in place; the old seats stay taken.
#[derive(Debug, Clone)]
pub struct SeatingEngine {
    grid: SeatGrid,
    reservations: Vec<Reservation>,
    weights: ScoreWeights,
}

impl Default for SeatingEngine {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_SEATS_PER_ROW)
    }
}

impl SeatingEngine {
    pub fn new(rows: usize, seats_per_row: usize) -> Self {
        Self::with_weights(rows, seats_per_row, ScoreWeights::default())
    }

    pub fn with_weights(rows: usize, seats_per_row: usize, weights: ScoreWeights) -> Self {
        Self {
            grid: SeatGrid::new(rows, seats_per_row),
            reservations: Vec::new(),
            weights,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::with_weights(
            config.theater.rows,
            config.theater.seats_per_row,
            config.scoring.weights(),
        )
    }

    pub fn grid(&self) -> &SeatGrid {
        &self.grid
    }

    pub fn weights(&self) -> ScoreWeights {
        self.weights
    }

    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    pub fn reservation(&self, group: &str) -> Option<&[Seat]> {
        self.reservations
            .iter()
            .find(|r| r.group == group)
            .map(|r| r.seats.as_slice())
    }

    /// Like [`SeatAllocator::assign_seats`] but says why a group was refused.
    pub fn try_assign(&mut self, group: &str, party_size: usize) -> Result<&[Seat], SeatingError> {
        let max = self.grid.cols();
        if party_size == 0 || party_size > max {
            return Err(SeatingError::InvalidPartySize {
                group: group.to_string(),
                requested: party_size,
                max,
            });
        }

        let seats = self
            .find_best_seats(party_size)
            .ok_or_else(|| SeatingError::NoSeatsAvailable {
                group: group.to_string(),
            })?;
        self.reserve_seats(group, seats);

        // reserve_seats always leaves an entry for `group`
        Ok(self.reservation(group).unwrap_or_default())
    }

    pub fn can_sit(&self, candidate: &[Seat]) -> bool {
        can_sit(candidate, &self.reservations)
    }

    pub fn score_seats(&self, seats: &[Seat]) -> i64 {
        score_seats(&self.grid, seats, self.weights)
    }

    pub fn render(&self) -> String {
        self.grid.render()
    }
}

impl SeatAllocator for SeatingEngine {
    fn assign_seats(&mut self, group: &str, party_size: usize) -> bool {
        info!("Assigning {party_size} seats to id: {group}...");
        match self.try_assign(group, party_size) {
            Ok(seats) => {
                debug!("Group {group} seated at {seats:?}");
                info!("Seats found for group {group}");
                true
            }
            Err(e @ SeatingError::InvalidPartySize { .. }) => {
                warn!("{e}");
                false
            }
            Err(e @ SeatingError::NoSeatsAvailable { .. }) => {
                info!("{e}");
                false
            }
        }
    }

    fn find_best_seats(&self, party_size: usize) -> Option<Vec<Seat>> {
        let mut best_score = 0i64;
        let mut best_seats: Option<Vec<Seat>> = None;

        for row in 0..self.grid.rows() {
            for col in 0..self.grid.cols() {
                let candidate = possible_seats(row, col, party_size, self.grid.cols());
                if !self.can_sit(&candidate) {
                    continue;
                }

                let score = self.score_seats(&candidate);
                // First-seen wins ties; the first valid block is taken even at score <= 0
                if score > best_score || best_seats.is_none() {
                    debug!("New best block at {row},{col}: score {score}");
                    best_score = score;
                    best_seats = Some(candidate);
                }
            }
        }
        best_seats
    }

    fn reserve_seats(&mut self, group: &str, seats: Vec<Seat>) {
        for &seat in &seats {
            debug_assert!(self.grid.contains(seat), "seat {seat} is outside the grid");
            self.grid.take(seat);
        }
        match self.reservations.iter_mut().find(|r| r.group == group) {
            Some(existing) => existing.seats = seats,
            None => self.reservations.push(Reservation::new(group, seats)),
        }
    }

    fn print_tickets(&self) -> String {
        self.reservations
            .iter()
            .map(|r| r.ticket_line() + "\n")
            .collect()
    }
}
