use crate::error::{Result, SeatsError};

use csv::{ReaderBuilder, StringRecord, Trim};
use std::io::Read;
use std::path::Path;

/// One line of the request file: `<group id> <party size>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupRequest {
    pub group: String,
    pub party_size: usize,
}

impl GroupRequest {
    pub fn new(group: impl Into<String>, party_size: usize) -> Self {
        Self {
            group: group.into(),
            party_size,
        }
    }
}

/// Reads group requests from a file, in file order
///
/// # Errors
/// Returns error if the file cannot be read or a line is malformed
pub fn read_requests<P: AsRef<Path>>(path: P) -> Result<Vec<GroupRequest>> {
    let file = std::fs::File::open(path)?;
    read_requests_from_reader(file)
}

/// Space separated, no header. Blank lines are skipped and extra fields ignored.
/// Quotes are plain characters, so a group id never contains a space.
pub fn read_requests_from_reader<R: Read>(reader: R) -> Result<Vec<GroupRequest>> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .trim(Trim::All)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let mut requests = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let rec = result?;
        let row = rec
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(i + 1);

        if let Some(request) = parse_record(&rec, row)? {
            requests.push(request);
        }
    }
    Ok(requests)
}

fn parse_record(rec: &StringRecord, row: usize) -> Result<Option<GroupRequest>> {
    if rec.iter().all(|f| f.is_empty()) {
        return Ok(None);
    }
    let (Some(group), Some(size)) = (rec.get(0), rec.get(1)) else {
        return Err(SeatsError::RequestRow {
            row,
            got: rec.len(),
        });
    };

    let party_size = size.parse().map_err(|e| SeatsError::PartySizeParse {
        row,
        value: size.to_string(),
        source: e,
    })?;
    Ok(Some(GroupRequest::new(group, party_size)))
}
