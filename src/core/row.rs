use serde::{Deserialize, Serialize};

/// A single A3M record: header line plus aligned sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignmentRow {
    /// Header line, kept verbatim (including the leading `>`)
    pub header: String,

    /// Aligned sequence over `{A-Z, a-z, -}`
    pub sequence: String,
}

impl AlignmentRow {
    pub fn new(header: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            sequence: sequence.into(),
        }
    }

    /// Header without the leading `>`
    #[must_use]
    pub fn name(&self) -> &str {
        self.header.strip_prefix('>').unwrap_or(&self.header)
    }

    /// Number of match/delete columns in this row
    #[must_use]
    pub fn match_column_length(&self) -> usize {
        match_column_length(&self.sequence)
    }
}

/// True for characters that occupy an alignment column (uppercase or `-`)
#[inline]
#[must_use]
pub fn is_match_column(c: u8) -> bool {
    c == b'-' || c.is_ascii_uppercase()
}

/// True for insertion characters (lowercase)
#[inline]
#[must_use]
pub fn is_insertion(c: u8) -> bool {
    c.is_ascii_lowercase()
}

/// Translate a raw string index into a match-column index.
///
/// Counts the characters of `sequence[..index]` that are uppercase or `-`.
/// An index past the end of the row is clamped to the row length.
///
/// # Examples
///
/// ```
/// use hybrid_msa::core::row::match_column_index;
///
/// assert_eq!(match_column_index("AB-D", 3), 3);
/// assert_eq!(match_column_index("AbcD-E", 4), 2);
/// ```
#[must_use]
pub fn match_column_index(sequence: &str, index: usize) -> usize {
    let bytes = sequence.as_bytes();
    let end = index.min(bytes.len());
    bytes[..end].iter().filter(|&&c| is_match_column(c)).count()
}

/// Number of lowercase insertion characters in `s`
#[must_use]
pub fn count_insertions(s: &str) -> usize {
    s.bytes().filter(|&c| is_insertion(c)).count()
}

/// Number of match/delete columns in `s`
#[must_use]
pub fn match_column_length(s: &str) -> usize {
    s.bytes().filter(|&c| is_match_column(c)).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_column_index_without_insertions() {
        let row = "MKTAYIAKQR";
        for i in 0..=row.len() {
            assert_eq!(match_column_index(row, i), i);
        }
    }

    #[test]
    fn test_match_column_index_skips_insertions() {
        // raw:   A b c D - e F
        // index: 0 1 2 3 4 5 6
        let row = "AbcD-eF";
        assert_eq!(match_column_index(row, 0), 0);
        assert_eq!(match_column_index(row, 1), 1);
        assert_eq!(match_column_index(row, 3), 1);
        assert_eq!(match_column_index(row, 4), 2);
        assert_eq!(match_column_index(row, 6), 3);
        assert_eq!(match_column_index(row, 7), 4);
    }

    #[test]
    fn test_match_column_index_clamps_past_end() {
        assert_eq!(match_column_index("A-c", 100), 2);
    }

    #[test]
    fn test_column_classes() {
        assert!(is_match_column(b'A'));
        assert!(is_match_column(b'X'));
        assert!(is_match_column(b'-'));
        assert!(!is_match_column(b'a'));
        assert!(!is_match_column(b'.'));
        assert!(is_insertion(b'q'));
        assert!(!is_insertion(b'Q'));
        assert!(!is_insertion(b'-'));
    }

    #[test]
    fn test_lengths() {
        let row = AlignmentRow::new(">seq1 desc", "--ABcdE-f");
        assert_eq!(row.name(), "seq1 desc");
        assert_eq!(row.match_column_length(), 6);
        assert_eq!(count_insertions(&row.sequence), 3);
        assert_eq!(
            row.sequence.len() - count_insertions(&row.sequence),
            row.match_column_length()
        );
    }
}
