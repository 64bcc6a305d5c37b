//! Header-driven column dispatch.

use csv::StringRecord;

/// Ordered mapping from column position to column name.
///
/// Built from the first row of an export. Every subsequent row's cells
/// are dispatched by the name at their position rather than by position
/// alone, because the service does not guarantee a stable column order
/// across versions. Names are kept as-is, duplicates included; when a
/// name repeats, the later cell simply overwrites the earlier one during
/// dispatch.
#[derive(Debug, Clone)]
pub struct HeaderIndex {
    columns: Vec<String>,
}

impl HeaderIndex {
    /// Builds the index from the header row.
    pub fn from_record(record: &StringRecord) -> Self {
        Self {
            columns: record.iter().map(str::to_string).collect(),
        }
    }

    /// Returns the column name at `index`, if the header had one there.
    pub fn name(&self, index: usize) -> Option<&str> {
        self.columns.get(index).map(String::as_str)
    }

    /// Number of header columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the header row was empty.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
