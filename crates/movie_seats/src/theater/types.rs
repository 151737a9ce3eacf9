use std::{fmt, str::FromStr};
use thiserror::Error;

/// Occupancy of a single seat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SeatState {
    #[default]
    Empty,
    Taken,
}

impl SeatState {
    pub fn symbol(self) -> char {
        match self {
            SeatState::Empty => '~',
            SeatState::Taken => 't',
        }
    }
}

/// Seat coordinate: `row` 0 is the row nearest the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Seat {
    pub row: usize,
    pub col: usize,
}

impl Seat {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Row label, 'A' for row 0. Only meaningful for the first 26 rows.
pub fn row_letter(row: usize) -> char {
    u32::try_from(row)
        .ok()
        .and_then(|r| r.checked_add('A' as u32))
        .and_then(char::from_u32)
        .unwrap_or('?')
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", row_letter(self.row), self.col)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseSeatError {
    #[error("empty seat label")]
    Empty,
    #[error("invalid row letter '{0}'")]
    Row(char),
    #[error("invalid seat number '{0}'")]
    Col(String),
}

impl FromStr for Seat {
    type Err = ParseSeatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let letter = chars.next().ok_or(ParseSeatError::Empty)?;
        if !letter.is_ascii_uppercase() {
            return Err(ParseSeatError::Row(letter));
        }
        let number = chars.as_str();
        let col = number
            .parse()
            .map_err(|_| ParseSeatError::Col(number.to_string()))?;
        Ok(Seat::new((letter as u8 - b'A') as usize, col))
    }
}

/// Seats held by one group, left to right within a single row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub group: String,
    pub seats: Vec<Seat>,
}

impl Reservation {
    pub fn new(group: impl Into<String>, seats: Vec<Seat>) -> Self {
        Self {
            group: group.into(),
            seats,
        }
    }

    /// `<group> <seat>,<seat>,...`
    pub fn ticket_line(&self) -> String {
        let seats: Vec<String> = self.seats.iter().map(Seat::to_string).collect();
        format!("{} {}", self.group, seats.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_display() {
        assert_eq!(Seat::new(0, 0).to_string(), "A0");
        assert_eq!(Seat::new(2, 5).to_string(), "C5");
        assert_eq!(Seat::new(9, 19).to_string(), "J19");
    }

    #[test]
    fn test_seat_from_str() {
        assert_eq!("C5".parse::<Seat>(), Ok(Seat::new(2, 5)));
        assert_eq!("J19".parse::<Seat>(), Ok(Seat::new(9, 19)));
        assert_eq!(" A0 ".parse::<Seat>(), Ok(Seat::new(0, 0)));
    }

    #[test]
    fn test_seat_from_str_errors() {
        assert_eq!("".parse::<Seat>(), Err(ParseSeatError::Empty));
        assert_eq!("c5".parse::<Seat>(), Err(ParseSeatError::Row('c')));
        assert_eq!("C".parse::<Seat>(), Err(ParseSeatError::Col(String::new())));
        assert_eq!(
            "Cx".parse::<Seat>(),
            Err(ParseSeatError::Col("x".to_string()))
        );
    }

    #[test]
    fn test_row_letter_past_z() {
        // Same code point arithmetic as 'A' + row
        assert_eq!(row_letter(25), 'Z');
        assert_eq!(row_letter(26), '[');
    }

    #[test]
    fn test_ticket_line() {
        let r = Reservation::new(
            "R001",
            vec![Seat::new(6, 9), Seat::new(6, 10), Seat::new(6, 11)],
        );
        assert_eq!(r.ticket_line(), "R001 G9,G10,G11");
    }

    #[test]
    fn test_seat_state_symbol() {
        assert_eq!(SeatState::default(), SeatState::Empty);
        assert_eq!(SeatState::Empty.symbol(), '~');
        assert_eq!(SeatState::Taken.symbol(), 't');
    }
}
