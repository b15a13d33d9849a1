//! Column-oriented input table as handed over by the host.

use std::fmt;

use divex_core::errors::DatasetError;
use serde::{Deserialize, Serialize};

/// Required true-label column.
pub const TRUE_LABEL_COLUMN: &str = "class";
/// Required predicted-label column.
pub const PREDICTED_LABEL_COLUMN: &str = "predicted";

/// A single cell. Features are categorical, so integers and text are the
/// only accepted shapes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Int(i64),
    Text(String),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for CellValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// A named column of cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub values: Vec<CellValue>,
}

impl Column {
    pub fn new(name: &str, values: Vec<CellValue>) -> Self {
        Self {
            name: name.to_string(),
            values,
        }
    }

    /// Integer column, e.g. labels or pre-binned numeric features.
    pub fn ints(name: &str, values: &[i64]) -> Self {
        Self::new(name, values.iter().map(|&v| CellValue::Int(v)).collect())
    }

    /// Text column.
    pub fn texts(name: &str, values: &[&str]) -> Self {
        Self::new(name, values.iter().map(|&v| CellValue::from(v)).collect())
    }
}

/// Ordered collection of columns. Column order is preserved but carries no
/// meaning for mining.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputTable {
    pub columns: Vec<Column>,
}

impl InputTable {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// Builder-style column append.
    pub fn with_column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    /// Parse a column-oriented JSON object: `{"class": [0, 1], "region": ["A", "B"]}`.
    ///
    /// `serde_json` keeps object keys sorted unless `preserve_order` is on,
    /// so the resulting column order is by name.
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let object: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)?;
        let mut columns = Vec::with_capacity(object.len());
        for (name, values) in object {
            let values: Vec<CellValue> = serde_json::from_value(values)?;
            columns.push(Column { name, values });
        }
        Ok(Self { columns })
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Number of rows, taken from the first column.
    pub fn row_count(&self) -> usize {
        self.columns.first().map(|c| c.values.len()).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_mixed_cells() {
        let table = InputTable::from_json(
            r#"{"class": [1, 0], "predicted": [0, 0], "region": ["A", "B"], "age_bin": [3, 4]}"#,
        )
        .unwrap();
        assert_eq!(table.columns.len(), 4);
        assert_eq!(table.row_count(), 2);
        let region = table.column("region").unwrap();
        assert_eq!(region.values[1], CellValue::Text("B".into()));
        let age = table.column("age_bin").unwrap();
        assert_eq!(age.values[0], CellValue::Int(3));
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        assert!(InputTable::from_json("[1, 2, 3]").is_err());
    }

    #[test]
    fn test_from_json_rejects_nested_values() {
        let result = InputTable::from_json(r#"{"class": [[1]]}"#);
        assert!(matches!(result, Err(DatasetError::Json(_))));
    }

    #[test]
    fn test_cell_display() {
        assert_eq!(CellValue::Int(-2).to_string(), "-2");
        assert_eq!(CellValue::from("x").to_string(), "x");
    }
}
