//! Input tables and their encoded, read-only dataset form.

pub mod encoded;
pub mod table;
pub mod types;

pub use encoded::Dataset;
pub use table::{CellValue, Column, InputTable, PREDICTED_LABEL_COLUMN, TRUE_LABEL_COLUMN};
pub use types::{ConfusionCounts, Item, Itemset, Outcome, RowSet};
