use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use super::{Cell, ChartData, ColumnDescriptor, Row};

/// How values of keyed rows are ordered when converted to canonical rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowKeyOrder {
    /// Each row's own key-insertion order. Undeclared keys are kept and the
    /// declared column order is not enforced.
    #[default]
    RowInsertion,
    /// Values looked up by `columns[i].name`. Undeclared keys are dropped and
    /// missing keys become `null`.
    ColumnDeclaration,
}

/// Converts rows into canonical ordered rows.
///
/// Only the first row's shape is inspected: when it is ordered the whole input
/// is treated as canonical, otherwise every row is converted from its keyed
/// form. The input is never modified.
#[must_use]
pub fn normalize_rows(
    columns: &[ColumnDescriptor],
    rows: &[Row],
    order: RowKeyOrder,
) -> Vec<Vec<Cell>> {
    let Some(first) = rows.first() else {
        return Vec::new();
    };

    if first.is_ordered() {
        return rows
            .iter()
            .enumerate()
            .map(|(index, row)| match row {
                Row::Ordered(cells) => cells.clone(),
                Row::Keyed(_) => {
                    warn!(
                        row = index,
                        "keyed row found after ordered first row"
                    );
                    row_cells(columns, row, order)
                }
            })
            .collect();
    }

    trace!(rows = rows.len(), ?order, "converting keyed rows");
    rows.iter().map(|row| row_cells(columns, row, order)).collect()
}

/// Returns a copy of `data` whose rows are all canonical.
#[must_use]
pub fn normalize_data(data: &ChartData, order: RowKeyOrder) -> ChartData {
    ChartData {
        columns: data.columns.clone(),
        rows: normalize_rows(&data.columns, &data.rows, order)
            .into_iter()
            .map(Row::Ordered)
            .collect(),
    }
}

fn row_cells(columns: &[ColumnDescriptor], row: &Row, order: RowKeyOrder) -> Vec<Cell> {
    match (row, order) {
        (Row::Ordered(cells), _) => cells.clone(),
        (Row::Keyed(entries), RowKeyOrder::RowInsertion) => entries.values().cloned().collect(),
        (Row::Keyed(entries), RowKeyOrder::ColumnDeclaration) => columns
            .iter()
            .map(|column| entries.get(&column.name).cloned().unwrap_or(Cell::Null))
            .collect(),
    }
}
