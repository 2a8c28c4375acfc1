//! Parser for reference FASTA files using noodles.
//!
//! Reads the ungapped chain sequences that alignments are assembled against.
//! Supports both uncompressed and gzip/bgzip compressed files.
//!
//! Supported extensions:
//! - `.fa`, `.fasta`, `.faa` (uncompressed)
//! - `.fa.gz`, `.fasta.gz`, `.faa.gz` (gzip compressed)
//! - `.fa.bgz`, `.fasta.bgz`, `.faa.bgz` (bgzip compressed)

use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::GzDecoder;
use noodles::fasta;

use crate::parsing::a3m::{is_gzipped, ParseError};
use crate::utils::validation::check_record_limit;

/// One named sequence from a reference FASTA
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceRecord {
    pub name: String,

    /// Sequence as stored in the file (uppercased)
    pub sequence: String,
}

impl ReferenceRecord {
    pub fn new(name: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sequence: sequence.into(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

/// File name stem with any compression and FASTA extension removed.
///
/// `chains/abc.fa.gz` becomes `abc`.
#[must_use]
pub fn fasta_stem(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let lower = name.to_lowercase();
    let without_compression = [".gz", ".bgz"]
        .iter()
        .find(|ext| lower.ends_with(*ext))
        .map_or(name.as_str(), |ext| &name[..name.len() - ext.len()]);
    Path::new(without_compression)
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// Parse every record of a FASTA file
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::Noodles` if
/// parsing fails, `ParseError::InvalidFormat` if no records are found, or
/// `ParseError::TooManyRecords` if the limit is exceeded.
pub fn parse_fasta_file(path: &Path) -> Result<Vec<ReferenceRecord>, ParseError> {
    let file = std::fs::File::open(path)?;
    if is_gzipped(path) {
        let reader = BufReader::new(GzDecoder::new(file));
        parse_fasta_reader(&mut fasta::io::Reader::new(reader))
    } else {
        let reader = BufReader::new(file);
        parse_fasta_reader(&mut fasta::io::Reader::new(reader))
    }
}

/// Read the first record of a FASTA file (the chain being assembled)
///
/// # Errors
///
/// Same as [`parse_fasta_file`].
pub fn read_reference(path: &Path) -> Result<ReferenceRecord, ParseError> {
    parse_fasta_file(path)?
        .into_iter()
        .next()
        .ok_or_else(|| ParseError::InvalidFormat("No sequences found in FASTA file".to_string()))
}

/// Parse from a noodles FASTA reader
fn parse_fasta_reader<R: BufRead>(
    reader: &mut fasta::io::Reader<R>,
) -> Result<Vec<ReferenceRecord>, ParseError> {
    let mut records = Vec::new();

    for result in reader.records() {
        let record = result
            .map_err(|e| ParseError::Noodles(format!("Failed to parse FASTA record: {e}")))?;

        // Check record limit for DOS protection
        if check_record_limit(records.len()).is_some() {
            return Err(ParseError::TooManyRecords(records.len()));
        }

        let name = String::from_utf8_lossy(record.name()).to_string();
        let sequence: String = record
            .sequence()
            .as_ref()
            .iter()
            .map(|&b| char::from(b.to_ascii_uppercase()))
            .collect();

        records.push(ReferenceRecord::new(name, sequence));
    }

    if records.is_empty() {
        return Err(ParseError::InvalidFormat(
            "No sequences found in FASTA file".to_string(),
        ));
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_fasta_stem() {
        assert_eq!(fasta_stem(Path::new("chain.fa")), "chain");
        assert_eq!(fasta_stem(Path::new("/data/chain_A.fasta")), "chain_A");
        assert_eq!(fasta_stem(Path::new("complex.fa.gz")), "complex");
        assert_eq!(fasta_stem(Path::new("complex.FA.BGZ")), "complex");
        assert_eq!(fasta_stem(Path::new("noext")), "noext");
    }

    #[test]
    fn test_parse_fasta_file() {
        let fasta_content = b">chainA description\nMKTAYIAK\nQRQ\n>chainB\nmkta\n";

        let mut temp = NamedTempFile::with_suffix(".fa").unwrap();
        temp.write_all(fasta_content).unwrap();
        temp.flush().unwrap();

        let records = parse_fasta_file(temp.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "chainA");
        assert_eq!(records[0].sequence, "MKTAYIAKQRQ");
        assert_eq!(records[0].len(), 11);
        assert_eq!(records[1].name, "chainB");
        assert_eq!(records[1].sequence, "MKTA");
    }

    #[test]
    fn test_read_reference_uses_first_record() {
        let mut temp = NamedTempFile::with_suffix(".fa").unwrap();
        temp.write_all(b">first\nMKT\n>second\nAAAA\n").unwrap();
        temp.flush().unwrap();

        let reference = read_reference(temp.path()).unwrap();
        assert_eq!(reference, ReferenceRecord::new("first", "MKT"));
    }

    #[test]
    fn test_parse_empty_fasta() {
        let mut temp = NamedTempFile::with_suffix(".fa").unwrap();
        temp.write_all(b"").unwrap();
        temp.flush().unwrap();

        let result = parse_fasta_file(temp.path());
        assert!(result.is_err());
    }
}
