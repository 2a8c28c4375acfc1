//! Restitching per-contig slices into one composite alignment.
//!
//! Each composite row is
//! `[N-linker][contig 0][linker 0][contig 1]...[contig n][C-linker]`,
//! where linkers are runs of `-` sized from the gaps between contig spans in the
//! reference. With well-formed input every row satisfies
//! `len(row) - insertions(row) == len(reference)`.

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::core::diagnostics::{Checksum, Diagnostic, Diagnostics};
use crate::core::row::{count_insertions, AlignmentRow};
use crate::core::span::ContigSpan;
use crate::core::tables::ContigTables;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AssembleError {
    #[error("None of the contigs could be located in the reference")]
    NoSpans,

    #[error("No table loaded for contig '{0}'")]
    MissingContig(String),

    #[error("Contig '{contig}' has {found} rows but the target name table has {expected}")]
    RowCountMismatch {
        contig: String,
        expected: usize,
        found: usize,
    },
}

/// Gap run lengths surrounding the contigs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Linkers {
    /// Gaps before the first contig
    pub n_terminal: usize,
    /// Gaps between consecutive contigs
    pub inter: Vec<usize>,
    /// Gaps after the last contig
    pub c_terminal: usize,
}

impl Linkers {
    /// Derive linker lengths from spans sorted by start.
    ///
    /// Overlapping spans and spans running past the reference produce clamped
    /// (zero) linkers plus a diagnostic; the composite checksum then shows the
    /// damage per row.
    #[must_use]
    pub fn from_spans(
        spans: &[ContigSpan],
        reference_length: usize,
        diagnostics: &mut Diagnostics,
    ) -> Self {
        let n_terminal = spans.first().map_or(reference_length, |s| s.start);

        let inter = spans
            .windows(2)
            .map(|pair| {
                let (left, right) = (&pair[0], &pair[1]);
                let overlap = left.overlap(right);
                if overlap > 0 {
                    diagnostics.push(Diagnostic::SpanOverlap {
                        left: left.contig.clone(),
                        right: right.contig.clone(),
                        overlap,
                    });
                }
                right.start.saturating_sub(left.exclusive_end())
            })
            .collect();

        let c_terminal = match spans.iter().max_by_key(|s| s.exclusive_end()) {
            Some(last) => {
                if last.exclusive_end() > reference_length {
                    diagnostics.push(Diagnostic::SpanOutOfBounds {
                        contig: last.contig.clone(),
                        end: last.end,
                        reference_length,
                    });
                }
                reference_length.saturating_sub(last.exclusive_end())
            }
            None => 0,
        };

        Self {
            n_terminal,
            inter,
            c_terminal,
        }
    }
}

/// Output of [`assemble`]
#[derive(Debug, Clone)]
pub struct Composite {
    pub records: Vec<AlignmentRow>,
    pub linkers: Linkers,
    pub diagnostics: Diagnostics,
}

/// Composite header line: `<first token>\t<first token minus its first character>`
#[must_use]
pub fn composite_header(target_name: &str) -> String {
    let token = target_name.split_whitespace().next().unwrap_or("");
    let mut chars = token.chars();
    chars.next();
    format!("{token}\t{}", chars.as_str())
}

/// Stitch contig slices into composite rows.
///
/// Spans are re-sorted by start, so the caller's contig order does not matter.
///
/// # Errors
///
/// Returns `AssembleError::NoSpans` if `spans` is empty,
/// `AssembleError::MissingContig` if `tables` lacks a span's contig, or
/// `AssembleError::RowCountMismatch` if a contig table is not row-aligned with
/// the target name table.
pub fn assemble(
    reference_length: usize,
    spans: &[ContigSpan],
    tables: &ContigTables,
) -> Result<Composite, AssembleError> {
    if spans.is_empty() {
        return Err(AssembleError::NoSpans);
    }

    let mut sorted: Vec<&ContigSpan> = spans.iter().collect();
    sorted.sort_by_key(|s| s.start);

    let mut columns = Vec::with_capacity(sorted.len());
    for span in &sorted {
        let table = tables
            .get(&span.contig)
            .ok_or_else(|| AssembleError::MissingContig(span.contig.clone()))?;
        if table.rows.len() != tables.row_count() {
            return Err(AssembleError::RowCountMismatch {
                contig: span.contig.clone(),
                expected: tables.row_count(),
                found: table.rows.len(),
            });
        }
        columns.push(&table.rows);
    }

    let mut diagnostics = Diagnostics::new();
    let sorted_spans: Vec<ContigSpan> = sorted.into_iter().cloned().collect();
    let linkers = Linkers::from_spans(&sorted_spans, reference_length, &mut diagnostics);
    debug!(
        "Linkers: N-terminal {}, inter {:?}, C-terminal {}",
        linkers.n_terminal, linkers.inter, linkers.c_terminal
    );

    let n_linker = "-".repeat(linkers.n_terminal);
    let c_linker = "-".repeat(linkers.c_terminal);
    let inter_linkers: Vec<String> = linkers.inter.iter().map(|&n| "-".repeat(n)).collect();

    let mut records = Vec::with_capacity(tables.row_count());
    for (row, name) in tables.target_names.iter().enumerate() {
        let mut sequence = n_linker.clone();
        for (k, column) in columns.iter().enumerate() {
            if k > 0 {
                sequence.push_str(&inter_linkers[k - 1]);
            }
            sequence.push_str(&column[row]);
        }
        sequence.push_str(&c_linker);

        let observed = sequence.len() - count_insertions(&sequence);
        if observed != reference_length {
            diagnostics.push(Diagnostic::ChecksumMismatch {
                row,
                check: Checksum::CompositeLength,
                expected: reference_length,
                observed,
            });
        }

        records.push(AlignmentRow::new(composite_header(name), sequence));
    }

    info!(
        "Assembled {} composite row(s) from {} contig(s)",
        records.len(),
        columns.len()
    );

    Ok(Composite {
        records,
        linkers,
        diagnostics,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tables::ContigTable;

    #[test]
    fn test_linker_lengths() {
        let spans = vec![
            ContigSpan::new("AAAAAAAA", 10),
            ContigSpan::new("CCCCC", 50),
        ];
        let mut diagnostics = Diagnostics::new();
        let linkers = Linkers::from_spans(&spans, 100, &mut diagnostics);

        assert_eq!(linkers.n_terminal, 10);
        assert_eq!(linkers.inter, vec![32]);
        assert_eq!(linkers.c_terminal, 45);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_linkers_at_termini_are_empty() {
        let spans = vec![ContigSpan::new("MK", 0), ContigSpan::new("TA", 2)];
        let mut diagnostics = Diagnostics::new();
        let linkers = Linkers::from_spans(&spans, 4, &mut diagnostics);

        assert_eq!(linkers.n_terminal, 0);
        assert_eq!(linkers.inter, vec![0]);
        assert_eq!(linkers.c_terminal, 0);
    }

    #[test]
    fn test_overlapping_spans_are_clamped() {
        let spans = vec![ContigSpan::new("MKTA", 0), ContigSpan::new("TAYI", 2)];
        let mut diagnostics = Diagnostics::new();
        let linkers = Linkers::from_spans(&spans, 8, &mut diagnostics);

        assert_eq!(linkers.inter, vec![0]);
        assert_eq!(linkers.c_terminal, 2);
        assert_eq!(
            diagnostics.iter().next(),
            Some(&Diagnostic::SpanOverlap {
                left: "MKTA".to_string(),
                right: "TAYI".to_string(),
                overlap: 2,
            })
        );
    }

    #[test]
    fn test_span_past_reference_clamps_c_terminal() {
        let spans = vec![ContigSpan::new("KQR", 8)];
        let mut diagnostics = Diagnostics::new();
        let linkers = Linkers::from_spans(&spans, 10, &mut diagnostics);

        assert_eq!(linkers.n_terminal, 8);
        assert_eq!(linkers.c_terminal, 0);
        assert_eq!(
            diagnostics.iter().next(),
            Some(&Diagnostic::SpanOutOfBounds {
                contig: "KQR".to_string(),
                end: 10,
                reference_length: 10,
            })
        );
    }

    #[test]
    fn test_nested_span_overlap() {
        let spans = vec![ContigSpan::new("MKTAYI", 0), ContigSpan::new("TA", 2)];
        let mut diagnostics = Diagnostics::new();
        let linkers = Linkers::from_spans(&spans, 8, &mut diagnostics);

        assert_eq!(linkers.inter, vec![0]);
        assert_eq!(linkers.c_terminal, 2);
        assert_eq!(
            diagnostics.iter().next(),
            Some(&Diagnostic::SpanOverlap {
                left: "MKTAYI".to_string(),
                right: "TA".to_string(),
                overlap: 2,
            })
        );
    }

    #[test]
    fn test_composite_header() {
        assert_eq!(composite_header(">UniRef100_A0A\tscore=1"), ">UniRef100_A0A\tUniRef100_A0A");
        assert_eq!(composite_header(">t1 some description"), ">t1\tt1");
        assert_eq!(composite_header(""), "\t");
    }

    #[test]
    fn test_assemble_rows() {
        // reference: MKTAYIAKQR (10), contigs KTA at 1 and KQR at 7
        let spans = vec![ContigSpan::new("KQR", 7), ContigSpan::new("KTA", 1)];
        let tables = ContigTables::new(
            vec![">t1\tx".to_string(), ">t2".to_string()],
            vec![
                ContigTable::new("KQR", vec!["KQR".to_string(), "-QR".to_string()]),
                ContigTable::new("KTA", vec!["KTA".to_string(), "-TaaA".to_string()]),
            ],
        );

        let composite = assemble(10, &spans, &tables).unwrap();

        assert_eq!(composite.linkers.n_terminal, 1);
        assert_eq!(composite.linkers.inter, vec![3]);
        assert_eq!(composite.linkers.c_terminal, 0);
        assert_eq!(composite.records[0].header, ">t1\tt1");
        assert_eq!(composite.records[0].sequence, "-KTA---KQR");
        assert_eq!(composite.records[1].sequence, "--TaaA----QR");
        assert!(composite.diagnostics.is_empty());

        for record in &composite.records {
            let columns = record.sequence.len() - count_insertions(&record.sequence);
            assert_eq!(columns, 10);
        }
    }

    #[test]
    fn test_assemble_reports_checksum_failure() {
        let spans = vec![ContigSpan::new("KTA", 1)];
        let tables = ContigTables::new(
            vec![">t1".to_string()],
            vec![ContigTable::new("KTA", vec!["KT".to_string()])],
        );

        let composite = assemble(5, &spans, &tables).unwrap();
        assert_eq!(composite.records[0].sequence, "-KT-");
        assert_eq!(composite.diagnostics.checksum_failures(), 1);
    }

    #[test]
    fn test_assemble_errors() {
        let tables = ContigTables::new(
            vec![">t1".to_string(), ">t2".to_string()],
            vec![ContigTable::new("KTA", vec!["KTA".to_string()])],
        );

        assert_eq!(assemble(10, &[], &tables).unwrap_err(), AssembleError::NoSpans);
        assert_eq!(
            assemble(10, &[ContigSpan::new("QR", 8)], &tables).unwrap_err(),
            AssembleError::MissingContig("QR".to_string())
        );
        assert_eq!(
            assemble(10, &[ContigSpan::new("KTA", 1)], &tables).unwrap_err(),
            AssembleError::RowCountMismatch {
                contig: "KTA".to_string(),
                expected: 2,
                found: 1,
            }
        );
    }
}
