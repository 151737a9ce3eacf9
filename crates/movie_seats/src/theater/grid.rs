use super::types::{Seat, SeatState, row_letter};
use crate::constants::SCREEN_LABEL_WIDTH;

/// Occupancy grid of the auditorium
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatGrid {
    rows: usize,
    cols: usize,
    cells: Vec<Vec<SeatState>>, // cells[row][col]
}

impl SeatGrid {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![vec![SeatState::Empty; cols]; rows],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn contains(&self, seat: Seat) -> bool {
        seat.row < self.rows && seat.col < self.cols
    }

    pub fn state(&self, seat: Seat) -> SeatState {
        self.cells[seat.row][seat.col]
    }

    pub fn is_taken(&self, seat: Seat) -> bool {
        self.state(seat) == SeatState::Taken
    }

    pub fn take(&mut self, seat: Seat) {
        self.cells[seat.row][seat.col] = SeatState::Taken;
    }

    pub fn taken_seats(&self) -> impl Iterator<Item = Seat> + '_ {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, s)| **s == SeatState::Taken)
                .map(move |(c, _)| Seat::new(r, c))
        })
    }

    /// 4-neighborhood (up, down, left, right) clipped to the grid
    pub fn neighbors(&self, seat: Seat) -> impl Iterator<Item = Seat> {
        let Seat { row, col } = seat;
        let up = (row > 0).then(|| Seat::new(row - 1, col));
        let down = (row + 1 < self.rows).then(|| Seat::new(row + 1, col));
        let left = (col > 0).then(|| Seat::new(row, col - 1));
        let right = (col + 1 < self.cols).then(|| Seat::new(row, col + 1));
        [up, down, left, right].into_iter().flatten()
    }

    /// Screen banner, a rule, then one line per row (`~` empty, `t` taken)
    pub fn render(&self) -> String {
        let pad = " ".repeat(self.cols.saturating_sub(SCREEN_LABEL_WIDTH) / 2);
        let mut out = format!("  [[{pad}SCREEN{pad}]]\n  {}\n", "-".repeat(self.cols));
        for (r, row) in self.cells.iter().enumerate() {
            out.push(row_letter(r));
            out.push(' ');
            out.extend(row.iter().map(|s| s.symbol()));
            out.push('\n');
        }
        out
    }
}
