use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One scalar value of a row. `Cell::Null` is the absent marker for missing
/// values; it is never replaced by zero.
pub type Cell = serde_json::Value;

/// Semantic type of a column as understood by the rendering engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Numeric,
    #[serde(rename = "string")]
    Text,
    Date,
    Boolean,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    pub mapping: String,
}

impl ColumnDescriptor {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        column_type: ColumnType,
        mapping: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            column_type,
            mapping: mapping.into(),
        }
    }
}

/// A data row, either canonical (values ordered like the columns) or keyed by
/// column name.
///
/// Keyed rows keep their key-insertion order, which is what the default
/// normalization emits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Row {
    Ordered(Vec<Cell>),
    Keyed(IndexMap<String, Cell>),
}

impl Row {
    #[must_use]
    pub fn ordered<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Cell>,
    {
        Self::Ordered(values.into_iter().map(Into::into).collect())
    }

    #[must_use]
    pub fn keyed<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Cell>,
    {
        Self::Keyed(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    #[must_use]
    pub fn is_ordered(&self) -> bool {
        matches!(self, Self::Ordered(_))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Ordered(cells) => cells.len(),
            Self::Keyed(entries) => entries.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<Cell>> for Row {
    fn from(cells: Vec<Cell>) -> Self {
        Self::Ordered(cells)
    }
}

impl From<IndexMap<String, Cell>> for Row {
    fn from(entries: IndexMap<String, Cell>) -> Self {
        Self::Keyed(entries)
    }
}

/// Tabular input of a chart: declared columns plus rows.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartData {
    pub columns: Vec<ColumnDescriptor>,
    #[serde(default)]
    pub rows: Vec<Row>,
}

impl ChartData {
    #[must_use]
    pub fn new(columns: Vec<ColumnDescriptor>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_row(mut self, row: impl Into<Row>) -> Self {
        self.rows.push(row.into());
        self
    }

    #[must_use]
    pub fn with_rows<I>(mut self, rows: I) -> Self
    where
        I: IntoIterator<Item = Row>,
    {
        self.rows.extend(rows);
        self
    }

    #[must_use]
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` when every row is already in ordered form.
    #[must_use]
    pub fn is_canonical(&self) -> bool {
        self.rows.iter().all(Row::is_ordered)
    }
}
