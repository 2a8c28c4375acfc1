//! Reader and writer for A3M alignments.
//!
//! Records are a `>` header line followed by one or more sequence lines.
//! Sequence lines are merged and stripped of whitespace, so wrapped output from
//! alignment tools becomes one flat row per record. Lines starting with `#`
//! (e.g. a cardinality header) are skipped. `.gz`/`.bgz` inputs are decompressed
//! transparently.

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use thiserror::Error;
use tracing::debug;

use crate::core::row::{is_match_column, AlignmentRow};
use crate::utils::validation::{check_record_limit, MAX_RECORDS};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid A3M format: {0}")]
    InvalidFormat(String),

    #[error("noodles error: {0}")]
    Noodles(String),

    #[error("Too many records: {0} exceeds maximum allowed ({MAX_RECORDS})")]
    TooManyRecords(usize),
}

/// An alignment whose first record is the query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Msa {
    /// First record; its ungapped sequence is the reference for contig lookup
    pub query: AlignmentRow,

    /// Every following record, in file order
    pub targets: Vec<AlignmentRow>,
}

impl Msa {
    /// Split parsed records into query and targets
    ///
    /// # Errors
    ///
    /// Returns `ParseError::InvalidFormat` if there are no records.
    pub fn from_rows(mut rows: Vec<AlignmentRow>) -> Result<Self, ParseError> {
        if rows.is_empty() {
            return Err(ParseError::InvalidFormat(
                "No records found in alignment".to_string(),
            ));
        }
        let targets = rows.split_off(1);
        let query = rows.remove(0);
        Ok(Self { query, targets })
    }

    /// Query match columns (residues and `-`), insertions removed.
    ///
    /// Offsets into this string are match-column indices, the coordinates the
    /// extractor counts in.
    #[must_use]
    pub fn reference_sequence(&self) -> String {
        self.query
            .sequence
            .bytes()
            .filter(|&c| is_match_column(c))
            .map(char::from)
            .collect()
    }
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
pub(crate) fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Read a whole text file, decompressing gzip/bgzip input
pub(crate) fn read_text(path: &Path) -> Result<String, ParseError> {
    let mut file = File::open(path)?;
    let mut text = String::new();
    if is_gzipped(path) {
        GzDecoder::new(file).read_to_string(&mut text)?;
    } else {
        file.read_to_string(&mut text)?;
    }
    Ok(text)
}

/// Parse an A3M file into its records
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or any error of
/// [`parse_a3m_text`].
pub fn parse_a3m_file(path: &Path) -> Result<Vec<AlignmentRow>, ParseError> {
    let text = read_text(path)?;
    let rows = parse_a3m_text(&text)?;
    debug!("Read {} records from {}", rows.len(), path.display());
    Ok(rows)
}

/// Parse A3M text into records
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if sequence data precedes the first header
/// or no records are found, or `ParseError::TooManyRecords` if the limit is
/// exceeded.
pub fn parse_a3m_text(text: &str) -> Result<Vec<AlignmentRow>, ParseError> {
    let mut rows: Vec<AlignmentRow> = Vec::new();

    for (i, line) in text.lines().enumerate() {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('>') {
            // Check record limit for DOS protection
            if check_record_limit(rows.len()).is_some() {
                return Err(ParseError::TooManyRecords(rows.len()));
            }
            rows.push(AlignmentRow::new(line, String::new()));
            continue;
        }

        let Some(current) = rows.last_mut() else {
            return Err(ParseError::InvalidFormat(format!(
                "Line {} has sequence data before the first header",
                i + 1
            )));
        };
        current
            .sequence
            .extend(line.chars().filter(|c| !c.is_whitespace()));
    }

    if rows.is_empty() {
        return Err(ParseError::InvalidFormat(
            "No records found in alignment".to_string(),
        ));
    }

    Ok(rows)
}

/// Read one or more A3M sources and concatenate them into a single alignment.
///
/// The first record of the first source is the query; every other record,
/// including the first record of later sources, is a target.
///
/// # Errors
///
/// Returns the first error encountered while reading any source, or
/// `ParseError::InvalidFormat` if no paths are given.
pub fn read_msa(paths: &[PathBuf]) -> Result<Msa, ParseError> {
    let mut rows = Vec::new();
    for path in paths {
        let mut source = parse_a3m_file(path)?;
        if check_record_limit(rows.len() + source.len()).is_some() {
            return Err(ParseError::TooManyRecords(rows.len() + source.len()));
        }
        rows.append(&mut source);
    }
    Msa::from_rows(rows)
}

/// Render records as flat two-line A3M
#[must_use]
pub fn format_a3m(rows: &[AlignmentRow]) -> String {
    let capacity = rows
        .iter()
        .map(|r| r.header.len() + r.sequence.len() + 2)
        .sum();
    let mut out = String::with_capacity(capacity);
    for row in rows {
        out.push_str(&row.header);
        out.push('\n');
        out.push_str(&row.sequence);
        out.push('\n');
    }
    out
}

/// Write records as flat two-line A3M
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be created or written.
pub fn write_a3m_file(path: &Path, rows: &[AlignmentRow]) -> Result<(), ParseError> {
    let mut writer = BufWriter::new(File::create(path)?);
    for row in rows {
        writeln!(writer, "{}", row.header)?;
        writeln!(writer, "{}", row.sequence)?;
    }
    writer.flush()?;
    Ok(())
}
