use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::{Map, Value};

use crate::table::Table;

/// The output shape: every record under a single top-level `data` key.
///
/// Records are `serde_json::Map`s, which preserve insertion order (the
/// `preserve_order` feature), so each JSON object lists its keys in header
/// order.
#[derive(Debug, Serialize)]
pub struct Document {
    pub data: Vec<Map<String, Value>>,
}

impl Document {
    /// Wrap a filled table's rows as ordered column→value records.
    /// Expects every row to be exactly header width.
    pub fn from_table(table: Table) -> Self {
        let Table { columns, rows } = table;
        let data = rows
            .into_iter()
            .map(|row| {
                columns
                    .iter()
                    .cloned()
                    .zip(row.into_iter().map(Value::String))
                    .collect()
            })
            .collect();
        Self { data }
    }

    /// Serialize with 4-space indentation. serde_json writes non-ASCII
    /// characters literally, so accented input survives unescaped.
    pub fn render(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)
            .expect("serializing string records to memory cannot fail");
        buf
    }
}
