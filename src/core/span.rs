use serde::{Deserialize, Serialize};

/// Column span of a contig within the reference sequence.
///
/// `start` and `end` are 0-based match-column indices and `end` is **inclusive**,
/// so `end - start + 1 == contig.len()` always holds. Linker arithmetic uses the
/// half-open form returned by [`ContigSpan::exclusive_end`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContigSpan {
    /// The contig sub-sequence this span was located from
    pub contig: String,

    /// First match column covered by the contig
    pub start: usize,

    /// Last match column covered by the contig (inclusive)
    pub end: usize,
}

impl ContigSpan {
    /// Build the span of a non-empty `contig` located at `start`
    pub fn new(contig: impl Into<String>, start: usize) -> Self {
        let contig = contig.into();
        debug_assert!(!contig.is_empty(), "contig span requires a non-empty contig");
        let end = start + contig.len().max(1) - 1;
        Self { contig, start, end }
    }

    /// Number of match columns covered
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Always false; kept for clippy's `len_without_is_empty`
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// One past the last covered column
    #[must_use]
    pub fn exclusive_end(&self) -> usize {
        self.end + 1
    }

    /// Number of columns shared with `other` (0 when disjoint)
    #[must_use]
    pub fn overlap(&self, other: &ContigSpan) -> usize {
        let lo = self.start.max(other.start);
        let hi = self.exclusive_end().min(other.exclusive_end());
        hi.saturating_sub(lo)
    }
}

impl std::fmt::Display for ContigSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}..={}]", self.contig, self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_bounds() {
        let span = ContigSpan::new("SFVKSHFSRQ", 12);
        assert_eq!(span.start, 12);
        assert_eq!(span.end, 21);
        assert_eq!(span.len(), 10);
        assert_eq!(span.exclusive_end(), 22);
    }

    #[test]
    fn test_single_residue_span() {
        let span = ContigSpan::new("M", 0);
        assert_eq!(span.start, 0);
        assert_eq!(span.end, 0);
        assert_eq!(span.len(), 1);
    }

    #[test]
    fn test_overlap() {
        let a = ContigSpan::new("AAAAA", 0);
        let b = ContigSpan::new("AAA", 3);
        let c = ContigSpan::new("CC", 5);
        assert_eq!(a.overlap(&b), 2);
        assert_eq!(b.overlap(&a), 2);
        assert_eq!(a.overlap(&c), 0);
        assert_eq!(b.overlap(&c), 1);
    }
}
