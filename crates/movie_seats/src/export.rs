use crate::error::{Result, SeatsError};
use crate::planner::SeatAllocator;
use crate::theater::{Reservation, Seat};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

/// Writes the allocator's tickets verbatim to `path`, creating parent directories.
pub fn write_tickets<A: SeatAllocator>(allocator: &A, path: &Path) -> Result<()> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        std::fs::create_dir_all(dir).map_err(|e| SeatsError::CreateFile {
            path: dir.to_path_buf(),
            source: e,
        })?;
    }

    let file = File::create(path).map_err(|e| SeatsError::CreateFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(allocator.print_tickets().as_bytes())
        .and_then(|()| writer.flush())
        .map_err(|e| SeatsError::WriteFile {
            path: path.to_path_buf(),
            source: e,
        })
}

/// Parses `<group> <seat>,<seat>,...` lines back into reservations
pub fn parse_tickets(text: &str) -> Result<Vec<Reservation>> {
    let mut out = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let line_no = i + 1;
        if line.trim().is_empty() {
            continue;
        }
        let (group, seats) = line
            .split_once(' ')
            .ok_or_else(|| SeatsError::TicketParse {
                line: line_no,
                reason: "missing seat list".to_string(),
            })?;

        let seats = seats
            .split(',')
            .map(|label| label.parse::<Seat>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| SeatsError::TicketParse {
                line: line_no,
                reason: e.to_string(),
            })?;
        out.push(Reservation::new(group, seats));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::SeatingEngine;
    use tempfile::TempDir;

    #[test]
    fn test_parse_tickets() {
        let parsed = parse_tickets("R001 G9,G10\nR002 E5\n").unwrap();
        assert_eq!(
            parsed,
            vec![
                Reservation::new("R001", vec![Seat::new(6, 9), Seat::new(6, 10)]),
                Reservation::new("R002", vec![Seat::new(4, 5)]),
            ]
        );
    }

    #[test]
    fn test_parse_tickets_skips_blank_lines() {
        let parsed = parse_tickets("\nR001 A0\n\n").unwrap();
        assert_eq!(parsed.len(), 1);
        assert!(parse_tickets("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_tickets_errors() {
        let err = parse_tickets("R001 A0\nR002\n").unwrap_err();
        assert!(matches!(err, SeatsError::TicketParse { line: 2, .. }));

        let err = parse_tickets("R001 A0,b1\n").unwrap_err();
        assert!(err.to_string().contains("invalid row letter 'b'"));
    }

    #[test]
    fn test_write_tickets_contents() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("output.txt");

        let mut engine = SeatingEngine::default();
        assert!(engine.assign_seats("R001", 3));
        assert!(engine.assign_seats("R002", 1));
        write_tickets(&engine, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, engine.print_tickets());
        assert!(content.starts_with("R001 G9,G10,G11\n"));
        assert_eq!(parse_tickets(&content).unwrap(), engine.reservations());
    }

    #[test]
    fn test_quote_in_group_id_round_trips() {
        let requests = crate::requests::read_requests_from_reader("\"R001 2\nR\"2 1\n".as_bytes())
            .unwrap();
        let mut engine = SeatingEngine::default();
        for r in &requests {
            assert!(engine.assign_seats(&r.group, r.party_size));
        }
        let parsed = parse_tickets(&engine.print_tickets()).unwrap();
        assert_eq!(parsed, engine.reservations());
        assert_eq!(parsed[0].group, "\"R001");
    }

    #[test]
    fn test_write_tickets_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("deeper").join("out.txt");

        write_tickets(&SeatingEngine::default(), &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_write_tickets_to_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let result = write_tickets(&SeatingEngine::default(), temp_dir.path());
        assert!(matches!(result, Err(SeatsError::CreateFile { .. })));
    }
}
