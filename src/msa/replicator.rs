use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::core::diagnostics::{Diagnostic, Diagnostics};
use crate::core::types::Cardinality;
use crate::parsing::fasta::ReferenceRecord;

/// Header of the self-pairing records placed above the alignment body
pub const SELF_PAIR_HEADER: &str = ">101";

/// One generated per-chain alignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplicatedAlignment {
    /// `<stem>_seq<NN>.a3m`
    pub file_name: String,
    pub contents: String,
}

impl ReplicatedAlignment {
    /// Full output path inside `dir`
    #[must_use]
    pub fn path_in(&self, dir: &Path) -> PathBuf {
        dir.join(&self.file_name)
    }
}

/// `<stem>_seq<NN>.a3m` for the 0-based record `index`
#[must_use]
pub fn output_file_name(stem: &str, index: usize) -> String {
    format!("{stem}_seq{:02}.a3m", index + 1)
}

/// `#<length>\t<copies>` line, or `None` when the cardinality has no copy count
#[must_use]
pub fn cardinality_header(length: usize, cardinality: &Cardinality) -> Option<String> {
    cardinality
        .copy_count()
        .map(|copies| format!("#{length}\t{copies}"))
}

/// Build one tagged alignment per reference record.
///
/// Each output holds the optional cardinality line, the record twice as its own
/// `>101` pair, then `body` verbatim. The cardinality length is that of the
/// first record, the chain the body was assembled for.
#[must_use]
pub fn replicate(
    stem: &str,
    records: &[ReferenceRecord],
    body: &str,
    cardinality: &Cardinality,
) -> (Vec<ReplicatedAlignment>, Diagnostics) {
    let mut diagnostics = Diagnostics::new();
    let Some(first) = records.first() else {
        return (Vec::new(), diagnostics);
    };
    let length = first.len();

    let header = cardinality_header(length, cardinality);
    if header.is_none() {
        diagnostics.push(Diagnostic::MalformedCardinality {
            tag: cardinality.to_string(),
        });
    }

    let outputs = records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            if record.len() != length {
                diagnostics.push(Diagnostic::LengthMismatch {
                    record: record.name.clone(),
                    expected: length,
                    observed: record.len(),
                });
            }

            let mut contents = String::with_capacity(
                body.len() + 2 * (record.len() + SELF_PAIR_HEADER.len() + 2) + 16,
            );
            if let Some(header) = &header {
                contents.push_str(header);
                contents.push('\n');
            }
            for _ in 0..2 {
                contents.push_str(SELF_PAIR_HEADER);
                contents.push('\n');
                contents.push_str(&record.sequence);
                contents.push('\n');
            }
            contents.push_str(body);

            let file_name = output_file_name(stem, i);
            debug!("Prepared {file_name} for record '{}'", record.name);
            ReplicatedAlignment {
                file_name,
                contents,
            }
        })
        .collect::<Vec<_>>();

    info!(
        "Replicated alignment for {} record(s) as {cardinality}",
        outputs.len()
    );
    (outputs, diagnostics)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = ">t1\tt1\n-KTA---KQR\n>t2\tt2\n--TaaA----QR\n";

    #[test]
    fn test_output_file_name() {
        assert_eq!(output_file_name("complex", 0), "complex_seq01.a3m");
        assert_eq!(output_file_name("complex", 11), "complex_seq12.a3m");
        assert_eq!(output_file_name("complex", 99), "complex_seq100.a3m");
    }

    #[test]
    fn test_homotrimer_header_and_self_pairs() {
        let records = vec![ReferenceRecord::new("A", "MKTAYIAKQR")];
        let (outputs, diagnostics) = replicate("chain", &records, BODY, &Cardinality::Homotrimer);

        assert!(diagnostics.is_empty());
        assert_eq!(outputs.len(), 1);
        let expected = format!("#10\t3\n>101\nMKTAYIAKQR\n>101\nMKTAYIAKQR\n{BODY}");
        assert_eq!(outputs[0].contents, expected);
        assert_eq!(outputs[0].contents.matches(">101\n").count(), 2);
    }

    #[test]
    fn test_monomer_one_file_per_record() {
        let records = vec![
            ReferenceRecord::new("A", "MKTAYIAKQR"),
            ReferenceRecord::new("B", "MKTAYIAKQR"),
        ];
        let (outputs, _) = replicate("dimer", &records, BODY, &Cardinality::Monomer);

        assert_eq!(outputs.len(), 2);
        assert_eq!(outputs[0].file_name, "dimer_seq01.a3m");
        assert_eq!(outputs[1].file_name, "dimer_seq02.a3m");
        for output in &outputs {
            assert!(output.contents.starts_with("#10\t1\n>101\n"));
            assert!(output.contents.ends_with(BODY));
        }
    }

    #[test]
    fn test_unrecognized_cardinality_omits_header() {
        let records = vec![ReferenceRecord::new("A", "MKT")];
        let cardinality = Cardinality::parse("heterodimer");
        let (outputs, diagnostics) = replicate("x", &records, "", &cardinality);

        assert_eq!(outputs[0].contents, ">101\nMKT\n>101\nMKT\n");
        assert_eq!(
            diagnostics.iter().next(),
            Some(&Diagnostic::MalformedCardinality {
                tag: "heterodimer".to_string()
            })
        );
    }

    #[test]
    fn test_length_mismatch_is_reported() {
        let records = vec![
            ReferenceRecord::new("A", "MKTA"),
            ReferenceRecord::new("B", "MK"),
        ];
        let (outputs, diagnostics) = replicate("x", &records, "", &Cardinality::Homodimer);

        assert_eq!(outputs.len(), 2);
        assert!(outputs[1].contents.starts_with("#4\t2\n>101\nMK\n"));
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn test_no_records() {
        let (outputs, diagnostics) = replicate("x", &[], BODY, &Cardinality::Monomer);
        assert!(outputs.is_empty());
        assert!(diagnostics.is_empty());
    }
}
