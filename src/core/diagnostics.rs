//! Non-fatal conditions raised while locating, slicing and stitching contigs.
//!
//! None of these abort a run. Each stage returns its value together with a
//! [`Diagnostics`] list so the caller decides whether to proceed; every entry is
//! also logged at `warn` level the moment it is recorded.

use serde::Serialize;
use tracing::warn;

/// Which bookkeeping check disagreed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Checksum {
    /// Match-column index of a slice start vs. the span start
    SpanStart,
    /// Match columns inside a slice vs. the contig length
    SliceLength,
    /// Match columns of a composite row vs. the reference length
    CompositeLength,
    /// Match columns of a target row vs. the query
    RowLength,
}

impl std::fmt::Display for Checksum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SpanStart => write!(f, "span start"),
            Self::SliceLength => write!(f, "slice length"),
            Self::CompositeLength => write!(f, "composite length"),
            Self::RowLength => write!(f, "row length"),
        }
    }
}

/// A single warning-level finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// Contig does not occur in the reference; it contributes no span
    LocatorMiss { contig: String },

    /// Contig occurs more than once; the first offset is used
    LocatorAmbiguous { contig: String, offsets: Vec<usize> },

    /// Column bookkeeping disagrees (row is 0-based)
    ChecksumMismatch {
        row: usize,
        check: Checksum,
        expected: usize,
        observed: usize,
    },

    /// Row ran out of match columns before the span closed; gaps were emitted
    TruncatedRow { row: usize, contig: String },

    /// Two spans share columns, so the linker between them was clamped to zero
    SpanOverlap {
        left: String,
        right: String,
        overlap: usize,
    },

    /// Span reaches past the reference end, so the C-terminal linker was clamped
    SpanOutOfBounds {
        contig: String,
        end: usize,
        reference_length: usize,
    },

    /// Cardinality tag is not known; no cardinality header line is written
    MalformedCardinality { tag: String },

    /// A reference record differs in length from the assembled chain
    LengthMismatch {
        record: String,
        expected: usize,
        observed: usize,
    },
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LocatorMiss { contig } => {
                write!(f, "No positions found for contig '{contig}'")
            }
            Self::LocatorAmbiguous { contig, offsets } => {
                let offsets = offsets
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(" ");
                write!(
                    f,
                    "Multiple positions found for contig '{contig}': {offsets} (using the first)"
                )
            }
            Self::ChecksumMismatch {
                row,
                check,
                expected,
                observed,
            } => write!(
                f,
                "Checksum failed on row {} ({check}): expected {expected}, observed {observed}",
                row + 1
            ),
            Self::TruncatedRow { row, contig } => write!(
                f,
                "Row {} ends before contig '{contig}' closes; filled with gaps",
                row + 1
            ),
            Self::SpanOverlap {
                left,
                right,
                overlap,
            } => write!(
                f,
                "Contigs '{left}' and '{right}' overlap by {overlap} column(s); linker clamped to 0"
            ),
            Self::SpanOutOfBounds {
                contig,
                end,
                reference_length,
            } => write!(
                f,
                "Contig '{contig}' ends at column {end}, past reference length {reference_length}"
            ),
            Self::MalformedCardinality { tag } => write!(
                f,
                "Unrecognized cardinality '{tag}'; cardinality header line omitted"
            ),
            Self::LengthMismatch {
                record,
                expected,
                observed,
            } => write!(
                f,
                "Record '{record}' has length {observed}, expected {expected}"
            ),
        }
    }
}

/// Ordered collection of diagnostics produced by one stage
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic and log it
    pub fn push(&mut self, diagnostic: Diagnostic) {
        warn!("{diagnostic}");
        self.0.push(diagnostic);
    }

    /// Absorb diagnostics that were already logged by another stage
    pub fn extend(&mut self, other: Diagnostics) {
        self.0.extend(other.0);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.0.iter()
    }

    /// Number of checksum failures recorded
    #[must_use]
    pub fn checksum_failures(&self) -> usize {
        self.0
            .iter()
            .filter(|d| matches!(d, Diagnostic::ChecksumMismatch { .. }))
            .count()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
