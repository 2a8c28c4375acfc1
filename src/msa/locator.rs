use std::collections::HashSet;

use tracing::debug;

use crate::core::diagnostics::{Diagnostic, Diagnostics};
use crate::core::span::ContigSpan;

/// Span of one contig plus anything worth warning about
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Located {
    /// `None` when the contig does not occur in the reference
    pub span: Option<ContigSpan>,
    pub diagnostics: Diagnostics,
}

/// Every offset at which `contig` occurs in `reference`, overlaps included.
///
/// # Examples
///
/// ```
/// use hybrid_msa::msa::locator::find_occurrences;
///
/// assert_eq!(find_occurrences("AAAA", "AA"), vec![0, 1, 2]);
/// assert!(find_occurrences("MKT", "W").is_empty());
/// ```
#[must_use]
pub fn find_occurrences(reference: &str, contig: &str) -> Vec<usize> {
    if contig.is_empty() {
        return Vec::new();
    }

    let mut offsets = Vec::new();
    let mut from = 0;
    while let Some(found) = reference.get(from..).and_then(|rest| rest.find(contig)) {
        let offset = from + found;
        offsets.push(offset);
        // Restart one character later so overlapping hits are reported
        from = offset + reference[offset..].chars().next().map_or(1, char::len_utf8);
    }
    offsets
}

/// Locate `contig` in `reference`.
///
/// A contig found more than once is placed at its first (lowest) offset and
/// reported as ambiguous; a contig not found yields no span.
#[must_use]
pub fn locate(reference: &str, contig: &str) -> Located {
    let offsets = find_occurrences(reference, contig);
    let mut diagnostics = Diagnostics::new();

    let span = match offsets.as_slice() {
        [] => {
            diagnostics.push(Diagnostic::LocatorMiss {
                contig: contig.to_string(),
            });
            None
        }
        [offset] => Some(ContigSpan::new(contig, *offset)),
        [first, ..] => {
            let first = *first;
            diagnostics.push(Diagnostic::LocatorAmbiguous {
                contig: contig.to_string(),
                offsets,
            });
            Some(ContigSpan::new(contig, first))
        }
    };

    if let Some(span) = &span {
        debug!("Located {span}");
    }

    Located { span, diagnostics }
}

/// Locate every distinct contig and return the spans in ascending start order.
///
/// Contigs that cannot be found are dropped; repeats of an already seen contig
/// are ignored.
#[must_use]
pub fn locate_all(reference: &str, contigs: &[String]) -> (Vec<ContigSpan>, Diagnostics) {
    let mut seen = HashSet::new();
    let mut spans = Vec::with_capacity(contigs.len());
    let mut diagnostics = Diagnostics::new();

    for contig in contigs {
        if !seen.insert(contig.as_str()) {
            debug!("Ignoring repeated contig '{contig}'");
            continue;
        }
        let located = locate(reference, contig);
        diagnostics.extend(located.diagnostics);
        spans.extend(located.span);
    }

    spans.sort_by_key(|s| s.start);
    (spans, diagnostics)
}
