use tracing::{debug, info};

use crate::core::tables::ContigTables;

/// True when `slice` holds a residue that counts as aligned content.
///
/// Only uppercase letters other than `X` count; gaps, `X` and lowercase
/// insertions do not.
#[inline]
#[must_use]
pub fn has_residue(slice: &str) -> bool {
    slice
        .bytes()
        .any(|c| c.is_ascii_uppercase() && c != b'X')
}

/// Row indices (0-based) at which no contig table carries a residue
#[must_use]
pub fn find_empty_rows(tables: &ContigTables) -> Vec<usize> {
    (0..tables.row_count())
        .filter(|&row| {
            !tables.contigs.iter().any(|table| {
                table
                    .rows
                    .get(row)
                    .is_some_and(|slice| has_residue(slice))
            })
        })
        .collect()
}

/// Remove every empty row from all tables at once.
///
/// Returns the removed row indices (0-based, in ascending order).
pub fn filter_empty_rows(tables: &mut ContigTables) -> Vec<usize> {
    let empty = find_empty_rows(tables);
    for row in &empty {
        debug!("rm {}", row + 1);
    }
    tables.remove_rows(&empty);
    info!(
        "Removed {} empty row(s), {} remain",
        empty.len(),
        tables.row_count()
    );
    empty
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tables::ContigTable;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_has_residue() {
        assert!(has_residue("--A--"));
        assert!(has_residue("W"));
        assert!(has_residue("Z"));
        assert!(!has_residue("-----"));
        assert!(!has_residue("--X--"));
        assert!(!has_residue("-abc-"));
        assert!(!has_residue(""));
    }

    #[test]
    fn test_row_kept_when_any_contig_has_residue() {
        let mut tables = ContigTables::new(
            strings(&[">t1", ">t2"]),
            vec![
                ContigTable::new("MKT", strings(&["---", "---"])),
                ContigTable::new("QR", strings(&["--", "-Q"])),
            ],
        );
        let removed = filter_empty_rows(&mut tables);
        assert_eq!(removed, vec![0]);
        assert_eq!(tables.target_names, strings(&[">t2"]));
    }

    #[test]
    fn test_all_gap_row_removed_everywhere() {
        let names: Vec<String> = (1..=10).map(|i| format!(">t{i}")).collect();
        let mut first: Vec<String> = vec!["MKTAY".to_string(); 10];
        let mut second: Vec<String> = vec!["QR".to_string(); 10];
        first[7] = "-----".to_string();
        second[7] = "--".to_string();
        // Only X and insertions: still empty
        first[2] = "-X-aa--".to_string();
        second[2] = "x-".to_string();

        let mut tables = ContigTables::new(
            names,
            vec![
                ContigTable::new("MKTAY", first),
                ContigTable::new("QR", second),
            ],
        );

        let removed = filter_empty_rows(&mut tables);
        assert_eq!(removed, vec![2, 7]);
        assert!(tables.is_row_aligned());
        assert_eq!(tables.row_count(), 8);
        assert!(!tables.target_names.contains(&">t8".to_string()));
        assert!(!tables.target_names.contains(&">t3".to_string()));
        assert_eq!(tables.target_names[2], ">t4");
    }

    #[test]
    fn test_nothing_removed() {
        let mut tables = ContigTables::new(
            strings(&[">t1"]),
            vec![ContigTable::new("MKT", strings(&["MKT"]))],
        );
        assert!(filter_empty_rows(&mut tables).is_empty());
        assert_eq!(tables.row_count(), 1);
    }
}
