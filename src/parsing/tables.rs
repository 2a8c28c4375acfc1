//! Reading and writing the row-aligned contig tables.
//!
//! A directory holds `target_names.txt` (one header line per target) and one
//! `<contig>.txt` per contig (one slice per line). Line `k` of every file refers
//! to the same target.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::tables::{ContigTable, ContigTables};
use crate::parsing::a3m::ParseError;
use crate::utils::validation::{check_record_limit, CONTIG_FILE_SUFFIX};

/// File holding the target name table
pub const TARGET_NAMES_FILE: &str = "target_names.txt";

/// Path of a contig's table inside `dir`
#[must_use]
pub fn contig_table_path(dir: &Path, contig: &str) -> PathBuf {
    dir.join(format!("{contig}{CONTIG_FILE_SUFFIX}"))
}

/// Read a line-per-row table file
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or
/// `ParseError::TooManyRecords` if the limit is exceeded.
pub fn read_lines(path: &Path) -> Result<Vec<String>, ParseError> {
    let text = std::fs::read_to_string(path)?;
    let lines: Vec<String> = text
        .lines()
        .map(|l| l.trim_end_matches('\r').to_string())
        .collect();
    if check_record_limit(lines.len()).is_some() {
        return Err(ParseError::TooManyRecords(lines.len()));
    }
    Ok(lines)
}

/// Write one line per row
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be created or written.
pub fn write_lines(path: &Path, lines: &[String]) -> Result<(), ParseError> {
    let mut writer = BufWriter::new(File::create(path)?);
    for line in lines {
        writeln!(writer, "{line}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Load the target name table and the tables of `contigs` from `dir`
///
/// # Errors
///
/// Returns `ParseError::Io` if any required file is missing or unreadable.
pub fn read_tables(dir: &Path, contigs: &[String]) -> Result<ContigTables, ParseError> {
    let target_names = read_lines(&dir.join(TARGET_NAMES_FILE))?;
    let mut tables = Vec::with_capacity(contigs.len());
    for contig in contigs {
        let rows = read_lines(&contig_table_path(dir, contig))?;
        tables.push(ContigTable::new(contig.clone(), rows));
    }
    debug!(
        "Loaded {} target rows and {} contig tables from {}",
        target_names.len(),
        tables.len(),
        dir.display()
    );
    Ok(ContigTables::new(target_names, tables))
}

/// Write the target name table and every contig table into `dir`.
///
/// Returns the paths written, target name table first.
///
/// # Errors
///
/// Returns `ParseError::Io` if the directory or any file cannot be written.
pub fn write_tables(dir: &Path, tables: &ContigTables) -> Result<Vec<PathBuf>, ParseError> {
    std::fs::create_dir_all(dir)?;
    let mut written = Vec::with_capacity(tables.contigs.len() + 1);

    let names_path = dir.join(TARGET_NAMES_FILE);
    write_lines(&names_path, &tables.target_names)?;
    written.push(names_path);

    for table in &tables.contigs {
        let path = contig_table_path(dir, &table.contig);
        write_lines(&path, &table.rows)?;
        written.push(path);
    }
    Ok(written)
}
