use std::collections::HashMap;
use std::io::Cursor;

use csv::ReaderBuilder;
use tracing::debug;

use crate::error::ConvertError;

/// The placeholder written for every empty or absent cell.
pub const MISSING_PLACEHOLDER: &str = " ";

/// An in-memory tabular dataset: header column names plus data rows in file
/// order. Rows may be shorter than the header until [`Table::fill_missing`]
/// runs; they are never wider.
#[derive(Debug)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Parse comma-delimited text. The first record is the header; every
    /// later record is a data row. Repeated header names get a numeric
    /// suffix (`id`, `id.1`, ...) so every column keys a distinct record
    /// field.
    pub fn parse(text: &str) -> Result<Self, ConvertError> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true) // short rows are filled later, not rejected here
            .from_reader(Cursor::new(text.as_bytes()));

        let mut columns: Option<Vec<String>> = None;
        let mut rows: Vec<Vec<String>> = Vec::new();

        for (idx, result) in rdr.records().enumerate() {
            let record = result
                .map_err(|e| ConvertError::MalformedInput(format!("record {}: {}", idx, e)))?;
            let cells: Vec<String> = record.iter().map(|s| s.to_string()).collect();

            match &columns {
                None => columns = Some(dedup_columns(cells)),
                Some(header) => {
                    if cells.len() > header.len() {
                        return Err(ConvertError::MalformedInput(format!(
                            "record {} has {} fields but the header defines {} columns",
                            idx,
                            cells.len(),
                            header.len()
                        )));
                    }
                    rows.push(cells);
                }
            }
        }

        let columns = columns.ok_or_else(|| {
            ConvertError::MalformedInput("empty input: no header row".to_string())
        })?;

        debug!(columns = columns.len(), rows = rows.len(), "parsed table");
        Ok(Self { columns, rows })
    }

    /// Replace every empty or absent cell with [`MISSING_PLACEHOLDER`] and
    /// pad each row out to the full header width.
    pub fn fill_missing(&mut self) {
        for row in &mut self.rows {
            fill_row(self.columns.len(), row);
        }
    }
}

/// Rename repeated header columns with numeric suffixes: the second `id`
/// becomes `id.1`, the third `id.2`. Suffixed names that would collide with
/// a column already present keep counting up until they are unique.
fn dedup_columns(raw: Vec<String>) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut columns = Vec::with_capacity(raw.len());

    for name in raw {
        match seen.get(&name).copied() {
            None => {
                seen.insert(name.clone(), 0);
                columns.push(name);
            }
            Some(count) => {
                let mut next = count + 1;
                let mut renamed = format!("{}.{}", name, next);
                while seen.contains_key(&renamed) {
                    next += 1;
                    renamed = format!("{}.{}", name, next);
                }
                seen.insert(name, next);
                seen.insert(renamed.clone(), 0);
                columns.push(renamed);
            }
        }
    }

    columns
}

/// Fill one row in place: empty cells become the placeholder, and the row is
/// extended with placeholders up to `width`. Pure over the row, no I/O.
pub fn fill_row(width: usize, row: &mut Vec<String>) {
    for cell in row.iter_mut() {
        if cell.is_empty() {
            *cell = MISSING_PLACEHOLDER.to_string();
        }
    }
    row.resize(width, MISSING_PLACEHOLDER.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_header_and_rows_in_order() {
        let table = Table::parse("id,name\n1,Alice\n2,Bob\n").unwrap();
        assert_eq!(table.columns, vec!["id", "name"]);
        assert_eq!(table.rows, vec![vec!["1", "Alice"], vec!["2", "Bob"]]);
    }

    #[test]
    fn quoted_fields_keep_embedded_commas() {
        let table = Table::parse("id,desc\n1,\"a, b\"\n").unwrap();
        assert_eq!(table.rows, vec![vec!["1", "a, b"]]);
    }

    #[test]
    fn empty_input_is_malformed() {
        let err = Table::parse("").unwrap_err();
        assert!(matches!(err, ConvertError::MalformedInput(_)));
    }

    #[test]
    fn header_only_input_yields_no_rows() {
        let table = Table::parse("id,name\n").unwrap();
        assert_eq!(table.columns, vec!["id", "name"]);
        assert!(table.rows.is_empty());
    }

    #[test]
    fn row_wider_than_header_is_malformed() {
        let err = Table::parse("id,name\n1,Alice,extra\n").unwrap_err();
        assert!(matches!(err, ConvertError::MalformedInput(_)));
    }

    #[test]
    fn duplicate_header_names_get_numeric_suffixes() {
        let table = Table::parse("id,id,id\n1,2,3\n").unwrap();
        assert_eq!(table.columns, vec!["id", "id.1", "id.2"]);
        assert_eq!(table.rows, vec![vec!["1", "2", "3"]]);
    }

    #[test]
    fn suffixed_duplicate_skips_existing_column_names() {
        let table = Table::parse("a,a.1,a\nx,y,z\n").unwrap();
        assert_eq!(table.columns, vec!["a", "a.1", "a.2"]);
    }

    #[test]
    fn fill_replaces_empty_cells_with_placeholder() {
        let mut table = Table::parse("id,name\n1,Alice\n2,\n").unwrap();
        table.fill_missing();
        assert_eq!(table.rows[0], vec!["1", "Alice"]);
        assert_eq!(table.rows[1], vec!["2", " "]);
    }

    #[test]
    fn fill_pads_short_rows_to_header_width() {
        let mut table = Table::parse("a,b,c\n1\n").unwrap();
        table.fill_missing();
        assert_eq!(table.rows[0], vec!["1", " ", " "]);
    }

    #[test]
    fn fill_row_is_pure_over_the_row() {
        let mut row = vec!["x".to_string(), String::new()];
        fill_row(3, &mut row);
        assert_eq!(row, vec!["x", " ", " "]);
    }

    #[test]
    fn fill_preserves_whitespace_cells_verbatim() {
        let mut row = vec!["  padded  ".to_string()];
        fill_row(1, &mut row);
        assert_eq!(row, vec!["  padded  "]);
    }
}
