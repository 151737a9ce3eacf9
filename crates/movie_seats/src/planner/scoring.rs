//! Seat scoring over a read-only view of the grid.

use std::collections::VecDeque;

use crate::constants::{BEST_SEAT_SCORE, SAFETY_WEIGHT, SATISFACTION_WEIGHT};
use crate::theater::{Seat, SeatGrid};

/// Weights applied to the two score terms of each seat
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreWeights {
    pub safety: i64,
    pub satisfaction: i64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            safety: SAFETY_WEIGHT,
            satisfaction: SATISFACTION_WEIGHT,
        }
    }
}

/// BFS path length from `seat` to the closest taken seat.
///
/// The start seat itself counts, so a taken start yields 0. With nobody
/// seated the result is `rows + cols`.
pub fn dist_to_nearest_person(grid: &SeatGrid, seat: Seat) -> i64 {
    let cols = grid.cols();
    let mut seen = vec![false; grid.rows() * cols];
    let mut queue = VecDeque::from([(0i64, seat)]);
    seen[seat.row * cols + seat.col] = true;

    while let Some((dist, current)) = queue.pop_front() {
        if grid.is_taken(current) {
            return dist;
        }
        for next in grid.neighbors(current) {
            let idx = next.row * cols + next.col;
            if !seen[idx] {
                seen[idx] = true;
                queue.push_back((dist + 1, next));
            }
        }
    }
    (grid.rows() + cols) as i64
}

/// Ideal seat: two thirds of the way back, centered
pub fn best_seat(grid: &SeatGrid) -> Seat {
    Seat::new(grid.rows() * 2 / 3, grid.cols() / 2)
}

/// `BEST_SEAT_SCORE` minus the Manhattan distance to the ideal seat (may go negative)
pub fn dist_to_best_seat(grid: &SeatGrid, seat: Seat) -> i64 {
    let target = best_seat(grid);
    let manhattan = seat.row.abs_diff(target.row) + seat.col.abs_diff(target.col);
    BEST_SEAT_SCORE - manhattan as i64
}

pub fn score_seats(grid: &SeatGrid, seats: &[Seat], weights: ScoreWeights) -> i64 {
    seats
        .iter()
        .map(|&seat| {
            dist_to_nearest_person(grid, seat) * weights.safety
                + dist_to_best_seat(grid, seat) * weights.satisfaction
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nearest_person_empty_grid_sentinel() {
        let grid = SeatGrid::new(10, 20);
        assert_eq!(dist_to_nearest_person(&grid, Seat::new(0, 0)), 30);
        assert_eq!(dist_to_nearest_person(&grid, Seat::new(6, 10)), 30);

        let small = SeatGrid::new(2, 5);
        assert_eq!(dist_to_nearest_person(&small, Seat::new(1, 1)), 7);
    }

    #[test]
    fn test_nearest_person_taken_start_is_zero() {
        let mut grid = SeatGrid::new(4, 4);
        grid.take(Seat::new(2, 2));
        assert_eq!(dist_to_nearest_person(&grid, Seat::new(2, 2)), 0);
    }

    #[test]
    fn test_nearest_person_is_grid_path_length() {
        let mut grid = SeatGrid::new(10, 20);
        grid.take(Seat::new(6, 10));
        assert_eq!(dist_to_nearest_person(&grid, Seat::new(6, 11)), 1);
        assert_eq!(dist_to_nearest_person(&grid, Seat::new(4, 10)), 2);
        assert_eq!(dist_to_nearest_person(&grid, Seat::new(0, 0)), 16);

        grid.take(Seat::new(0, 3));
        assert_eq!(dist_to_nearest_person(&grid, Seat::new(0, 0)), 3);
    }

    #[test]
    fn test_best_seat_target() {
        assert_eq!(best_seat(&SeatGrid::new(10, 20)), Seat::new(6, 10));
        assert_eq!(best_seat(&SeatGrid::new(2, 5)), Seat::new(1, 2));
        assert_eq!(best_seat(&SeatGrid::new(1, 1)), Seat::new(0, 0));
    }

    #[test]
    fn test_dist_to_best_seat() {
        let grid = SeatGrid::new(10, 20);
        assert_eq!(dist_to_best_seat(&grid, Seat::new(6, 10)), 100);
        assert_eq!(dist_to_best_seat(&grid, Seat::new(0, 0)), 84);
        assert_eq!(dist_to_best_seat(&grid, Seat::new(9, 19)), 88);
    }

    #[test]
    fn test_dist_to_best_seat_goes_negative() {
        let grid = SeatGrid::new(1, 500);
        assert_eq!(dist_to_best_seat(&grid, Seat::new(0, 0)), -150);
    }

    #[test]
    fn test_score_seats_empty_grid() {
        let grid = SeatGrid::new(10, 20);
        let w = ScoreWeights::default();
        assert_eq!(score_seats(&grid, &[Seat::new(6, 10)], w), 30 + 300);
        let block = [Seat::new(6, 9), Seat::new(6, 10), Seat::new(6, 11)];
        assert_eq!(score_seats(&grid, &block, w), 3 * 30 + (99 + 100 + 99) * 3);
        assert_eq!(score_seats(&grid, &[], w), 0);
    }

    #[test]
    fn test_score_seats_custom_weights() {
        let mut grid = SeatGrid::new(10, 20);
        grid.take(Seat::new(6, 10));
        let w = ScoreWeights {
            safety: 2,
            satisfaction: 0,
        };
        assert_eq!(score_seats(&grid, &[Seat::new(2, 10)], w), 8);
    }
}
