//! Centralized validation and helper functions.

/// Maximum number of records allowed in a single alignment or FASTA file (DOS protection)
pub const MAX_RECORDS: usize = 5_000_000;

/// Contigs name their per-contig files (`<contig>.txt`), so they share the filename limit
pub const MAX_FILENAME_LENGTH: usize = 255;

/// Suffix of per-contig table files
pub const CONTIG_FILE_SUFFIX: &str = ".txt";

/// Contig validation error types
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Empty contig provided")]
    EmptyContig,
    #[error("Contig too long: exceeds {} characters", MAX_FILENAME_LENGTH - CONTIG_FILE_SUFFIX.len())]
    ContigTooLong,
    #[error("Invalid residue '{residue}' in contig '{contig}': only uppercase letters are allowed")]
    InvalidResidue { contig: String, residue: char },
}

/// Validate a contig sub-sequence supplied on the command line.
///
/// A contig must be a non-empty run of uppercase ASCII letters, the residue
/// alphabet of the query. This also makes it safe to use as a file name.
///
/// # Examples
///
/// ```
/// use hybrid_msa::utils::validation::validate_contig;
///
/// assert!(validate_contig("SFVKSHFSRQ").is_ok());
/// assert!(validate_contig("").is_err());
/// assert!(validate_contig("../etc").is_err());
/// assert!(validate_contig("mkt").is_err());
/// ```
///
/// # Errors
///
/// Returns `ValidationError::EmptyContig` for an empty string,
/// `ValidationError::ContigTooLong` when the derived file name would exceed the
/// filename limit, or `ValidationError::InvalidResidue` for any character that is
/// not an uppercase ASCII letter.
pub fn validate_contig(contig: &str) -> Result<(), ValidationError> {
    if contig.is_empty() {
        return Err(ValidationError::EmptyContig);
    }

    if contig.len() + CONTIG_FILE_SUFFIX.len() > MAX_FILENAME_LENGTH {
        return Err(ValidationError::ContigTooLong);
    }

    if let Some(residue) = contig.chars().find(|c| !c.is_ascii_uppercase()) {
        return Err(ValidationError::InvalidResidue {
            contig: contig.to_string(),
            residue,
        });
    }

    Ok(())
}

/// Check if adding another record would exceed the maximum allowed.
///
/// Call this with the current count BEFORE adding a new record.
/// Returns an error message if adding would exceed the limit, None if safe to add.
#[must_use]
pub fn check_record_limit(count: usize) -> Option<String> {
    if count >= MAX_RECORDS {
        Some(format!(
            "Too many records: adding another would exceed maximum of {MAX_RECORDS}"
        ))
    } else {
        None
    }
}
