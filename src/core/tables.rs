use serde::Serialize;

/// Sliced rows of one contig, index-aligned with the target name table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContigTable {
    /// Contig sub-sequence; also names the table's file
    pub contig: String,

    /// One slice per target
    pub rows: Vec<String>,
}

impl ContigTable {
    pub fn new(contig: impl Into<String>, rows: Vec<String>) -> Self {
        Self {
            contig: contig.into(),
            rows,
        }
    }
}

/// Target name table plus every per-contig table.
///
/// Row `k` of every table refers to the same target; all operations keep the
/// tables the same length.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContigTables {
    pub target_names: Vec<String>,
    pub contigs: Vec<ContigTable>,
}

impl ContigTables {
    #[must_use]
    pub fn new(target_names: Vec<String>, contigs: Vec<ContigTable>) -> Self {
        Self {
            target_names,
            contigs,
        }
    }

    /// Number of target rows
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.target_names.len()
    }

    /// Look up a contig's table by its sub-sequence
    #[must_use]
    pub fn get(&self, contig: &str) -> Option<&ContigTable> {
        self.contigs.iter().find(|t| t.contig == contig)
    }

    /// True when every contig table has one row per target name
    #[must_use]
    pub fn is_row_aligned(&self) -> bool {
        self.contigs
            .iter()
            .all(|t| t.rows.len() == self.target_names.len())
    }

    /// Delete the given row indices from every table at once.
    ///
    /// Indices out of range are ignored.
    pub fn remove_rows(&mut self, rows: &[usize]) {
        if rows.is_empty() {
            return;
        }
        let mut drop = vec![false; self.target_names.len()];
        for &row in rows {
            if let Some(flag) = drop.get_mut(row) {
                *flag = true;
            }
        }
        retain_rows(&mut self.target_names, &drop);
        for table in &mut self.contigs {
            retain_rows(&mut table.rows, &drop);
        }
    }
}

fn retain_rows(rows: &mut Vec<String>, drop: &[bool]) {
    let mut index = 0;
    rows.retain(|_| {
        let keep = !drop.get(index).copied().unwrap_or(false);
        index += 1;
        keep
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_remove_rows_keeps_alignment() {
        let mut tables = ContigTables::new(
            strings(&[">a", ">b", ">c", ">d"]),
            vec![
                ContigTable::new("AC", strings(&["AC", "--", "AD", "AE"])),
                ContigTable::new("DEF", strings(&["DEF", "---", "D-F", "DxEF"])),
            ],
        );

        tables.remove_rows(&[1, 3, 99]);

        assert!(tables.is_row_aligned());
        assert_eq!(tables.target_names, strings(&[">a", ">c"]));
        assert_eq!(tables.get("AC").unwrap().rows, strings(&["AC", "AD"]));
        assert_eq!(tables.get("DEF").unwrap().rows, strings(&["DEF", "D-F"]));
    }

    #[test]
    fn test_get_missing_contig() {
        let tables = ContigTables::default();
        assert!(tables.get("AC").is_none());
        assert_eq!(tables.row_count(), 0);
    }
}
