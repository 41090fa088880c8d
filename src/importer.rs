//! Comma-delimited score import.
//!
//! The source is read as `name,score` rows. The first line is always treated
//! as a header and discarded. Rows without exactly two fields are dropped
//! silently; rows whose score does not parse are dropped and reported.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use csv::{ByteRecord, ReaderBuilder};
use tracing::{debug, error, info, warn};

use crate::error::{ImportError, MalformedRecord, RecordError};
use crate::records::RecordStore;

/// Result of a completed import.
#[derive(Debug, Default)]
pub struct Import {
    pub store: RecordStore,
    /// Two-field rows that were rejected, in source order.
    pub malformed: Vec<MalformedRecord>,
    /// Rows dropped for having the wrong number of fields.
    pub skipped: usize,
}

/// Imports scores from the file at `path`.
///
/// # Errors
///
/// Returns [`ImportError::SourceNotFound`] if the file cannot be opened, and
/// [`ImportError::Read`] if reading fails part way through.
#[tracing::instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn import_path<P: AsRef<Path>>(path: P) -> Result<Import, ImportError> {
    let path = path.as_ref();
    let not_found = |source| ImportError::SourceNotFound {
        path: path.to_path_buf(),
        source,
    };

    if path.is_dir() {
        return Err(not_found(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "is a directory",
        )));
    }
    let file = File::open(path).map_err(not_found)?;

    let import = import_reader(file)?;
    if !import.store.is_empty() {
        info!(
            records = import.store.len(),
            "Successfully loaded {} records",
            import.store.len()
        );
    }
    Ok(import)
}

/// Imports scores from any byte source. The reader is consumed fully.
///
/// The header is the first physical line, even when that line is blank.
pub fn import_reader<R: Read>(reader: R) -> Result<Import, ImportError> {
    let mut reader = BufReader::new(reader);
    let mut header = Vec::new();
    reader
        .read_until(b'\n', &mut header)
        .map_err(csv::Error::from)?;
    debug!(header = %String::from_utf8_lossy(&header).trim_end(), "Discarding header row");

    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut import = Import::default();

    for result in rdr.byte_records() {
        let record = result?;
        match parse_row(&record) {
            Row::Accepted(name, score) => {
                if let Err(RecordError::EmptyIdentifier) = import.store.insert(&name, score) {
                    let malformed = MalformedRecord::EmptyIdentifier { line: line_of(&record) };
                    warn!(line = malformed.line(), "{}", malformed);
                    import.malformed.push(malformed);
                }
            }
            Row::Malformed(name, raw_score) => {
                let malformed = MalformedRecord::InvalidScore {
                    line: line_of(&record),
                    identifier: name,
                    raw_score,
                };
                warn!(line = malformed.line(), "{}. Skipping.", malformed);
                import.malformed.push(malformed);
            }
            Row::WrongLength(fields) => {
                debug!(line = line_of(&record), fields, "Dropping row with wrong field count");
                import.skipped += 1;
            }
        }
    }

    if import.store.is_empty() {
        warn!("No valid records found in source");
    }

    Ok(import)
}

/// Imports from `path`, logging any failure and falling back to an empty store.
pub fn load_or_empty<P: AsRef<Path>>(path: P) -> RecordStore {
    match import_path(path) {
        Ok(import) => import.store,
        Err(e) => {
            error!(error = %e, "Import failed");
            RecordStore::new()
        }
    }
}

enum Row {
    Accepted(String, f64),
    Malformed(String, String),
    WrongLength(usize),
}

fn parse_row(record: &ByteRecord) -> Row {
    if record.len() != 2 {
        return Row::WrongLength(record.len());
    }

    let name = field(record, 0).trim().to_string();
    let raw_score = field(record, 1);

    match raw_score.trim().parse::<f64>() {
        Ok(score) if score.is_finite() => Row::Accepted(name, score),
        _ => Row::Malformed(name, raw_score.into_owned()),
    }
}

fn field(record: &ByteRecord, i: usize) -> Cow<'_, str> {
    record
        .get(i)
        .map(String::from_utf8_lossy)
        .unwrap_or(Cow::Borrowed(""))
}

/// Source line of `record`, counting the header line consumed before parsing.
fn line_of(record: &ByteRecord) -> Option<u64> {
    record.position().map(|p| p.line() + 1)
}
