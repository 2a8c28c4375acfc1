//! Column-aware slicing of alignment rows at contig spans.
//!
//! Each target row is scanned once, left to right. Only match characters
//! (uppercase or `-`) advance the column counter; a span opens at the first
//! match character whose column equals its `start` and closes at the match
//! character whose column equals its `end`. Lowercase insertions between those
//! two positions travel with the slice, insertions outside them do not.

use tracing::{debug, info};

use crate::core::diagnostics::{Checksum, Diagnostic, Diagnostics};
use crate::core::row::{count_insertions, is_match_column, match_column_index, AlignmentRow};
use crate::core::span::ContigSpan;
use crate::core::tables::{ContigTable, ContigTables};

/// Per-row scan state
#[derive(Debug)]
struct ScanState {
    /// Match columns seen so far
    column: usize,
    /// Raw index where each span opened
    open: Vec<Option<usize>>,
    /// Raw inclusive bounds of each closed span
    closed: Vec<Option<(usize, usize)>>,
}

impl ScanState {
    fn new(spans: usize) -> Self {
        Self {
            column: 0,
            open: vec![None; spans],
            closed: vec![None; spans],
        }
    }

    /// Visit the match character at raw index `index`
    fn visit(&mut self, index: usize, spans: &[ContigSpan]) {
        for (k, span) in spans.iter().enumerate() {
            if self.closed[k].is_some() {
                continue;
            }
            if self.open[k].is_none() && self.column == span.start {
                self.open[k] = Some(index);
            }
            if let Some(start) = self.open[k] {
                if self.column == span.end {
                    self.closed[k] = Some((start, index));
                    self.open[k] = None;
                }
            }
        }
        self.column += 1;
    }
}

/// Slice one aligned sequence at every span.
///
/// Returns one slice per span, in span order. A row whose match columns run out
/// before a span closes gets a run of gaps of the span's length instead.
/// `row` numbers the diagnostics.
pub fn slice_row(
    sequence: &str,
    spans: &[ContigSpan],
    row: usize,
    diagnostics: &mut Diagnostics,
) -> Vec<String> {
    let mut state = ScanState::new(spans.len());
    for (index, &c) in sequence.as_bytes().iter().enumerate() {
        if is_match_column(c) {
            state.visit(index, spans);
        }
    }

    spans
        .iter()
        .zip(state.closed)
        .map(|(span, bounds)| match bounds {
            Some((start, end)) => {
                let slice = &sequence[start..=end];
                verify_slice(sequence, start, slice, span, row, diagnostics);
                slice.to_string()
            }
            None => {
                diagnostics.push(Diagnostic::TruncatedRow {
                    row,
                    contig: span.contig.clone(),
                });
                "-".repeat(span.len())
            }
        })
        .collect()
}

/// Cross-check a slice against the column mapper
fn verify_slice(
    sequence: &str,
    start: usize,
    slice: &str,
    span: &ContigSpan,
    row: usize,
    diagnostics: &mut Diagnostics,
) {
    let start_column = match_column_index(sequence, start);
    if start_column != span.start {
        diagnostics.push(Diagnostic::ChecksumMismatch {
            row,
            check: Checksum::SpanStart,
            expected: span.start,
            observed: start_column,
        });
    }

    let columns = slice.len() - count_insertions(slice);
    if columns != span.len() {
        diagnostics.push(Diagnostic::ChecksumMismatch {
            row,
            check: Checksum::SliceLength,
            expected: span.len(),
            observed: columns,
        });
    }
}

/// Slice every target at every span.
///
/// `spans` must be sorted by start (as returned by
/// [`locate_all`](crate::msa::locator::locate_all)). Target headers are copied
/// verbatim into the target name table. `columns` is the query's match-column
/// length; targets of any other length are still sliced but raise a
/// `RowLength` checksum diagnostic.
#[must_use]
pub fn extract(
    targets: &[AlignmentRow],
    spans: &[ContigSpan],
    columns: usize,
) -> (ContigTables, Diagnostics) {
    let mut diagnostics = Diagnostics::new();
    let mut tables: Vec<Vec<String>> = spans
        .iter()
        .map(|_| Vec::with_capacity(targets.len()))
        .collect();
    let mut target_names = Vec::with_capacity(targets.len());

    for (row, target) in targets.iter().enumerate() {
        target_names.push(target.header.clone());

        let length = target.match_column_length();
        if length != columns {
            diagnostics.push(Diagnostic::ChecksumMismatch {
                row,
                check: Checksum::RowLength,
                expected: columns,
                observed: length,
            });
        }

        let slices = slice_row(&target.sequence, spans, row, &mut diagnostics);
        for (table, slice) in tables.iter_mut().zip(slices) {
            table.push(slice);
        }
    }

    let contigs = spans
        .iter()
        .zip(tables)
        .map(|(span, rows)| ContigTable::new(span.contig.clone(), rows))
        .collect();

    info!(
        "Extracted {} contig(s) from {} target row(s)",
        spans.len(),
        targets.len()
    );
    if !diagnostics.is_empty() {
        debug!("Extraction raised {} diagnostic(s)", diagnostics.len());
    }

    (ContigTables::new(target_names, contigs), diagnostics)
}
