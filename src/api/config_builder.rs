use std::collections::HashSet;

use indexmap::IndexMap;
use tracing::debug;

use crate::core::{
    Cell, ChartData, ChartKind, ColumnDescriptor, MapDefinitionSource, build_palette,
    normalize_rows,
};
use crate::error::{ChartError, ChartResult};

use super::{
    ChartOptions, ColumnMetadata, ComponentConfig, Components, ConfigurationDocument,
    DEFAULT_DATASOURCE, DOCUMENT_LOCALE, DOCUMENT_VERSION, Datasource, ORDERED_COLUMN_LIST,
};

/// Builds the full configuration document for `kind`.
///
/// Rows are normalized with `options.row_key_order`. The component variant is
/// chosen once from the kind's category and map kinds get their definition
/// from `maps`. Fails with `InvalidChartData` on empty or duplicate columns
/// and on rows whose length differs from the column count.
pub fn build_configuration<M>(
    kind: ChartKind,
    data: &ChartData,
    options: &ChartOptions,
    maps: &M,
) -> ChartResult<ConfigurationDocument>
where
    M: MapDefinitionSource + ?Sized,
{
    validate_columns(&data.columns)?;
    let rows = normalize_rows(&data.columns, &data.rows, options.row_key_order);
    validate_row_lengths(&rows, data.columns.len())?;

    let maps = if kind.is_map_kind() {
        Some(maps.map_definition_for(kind)?)
    } else {
        None
    };

    let component = ComponentConfig {
        badgetype: kind,
        datasource: DEFAULT_DATASOURCE.to_owned(),
        column_formats: IndexMap::new(),
        overrides: options.properties.clone().unwrap_or_default(),
    };
    let palette = options.colors.as_deref().and_then(build_palette);

    debug!(
        %kind,
        num_rows = rows.len(),
        num_columns = data.columns.len(),
        has_palette = palette.is_some(),
        "build configuration document"
    );

    let mut datasources = IndexMap::with_capacity(1);
    datasources.insert(
        DEFAULT_DATASOURCE.to_owned(),
        build_datasource(&data.columns, rows),
    );

    Ok(ConfigurationDocument {
        datasources,
        components: Components::for_category(kind.category(), component),
        maps,
        conditional_formats: Vec::new(),
        palette,
        locale: DOCUMENT_LOCALE.to_owned(),
        version: DOCUMENT_VERSION.to_owned(),
    })
}

fn build_datasource(columns: &[ColumnDescriptor], rows: Vec<Vec<Cell>>) -> Datasource {
    Datasource {
        source_type: ORDERED_COLUMN_LIST.to_owned(),
        column_metadata: columns
            .iter()
            .map(|column| ColumnMetadata {
                column_type: column.column_type,
            })
            .collect(),
        column_mappings: columns.iter().map(|column| column.mapping.clone()).collect(),
        column_names: columns.iter().map(|column| column.name.clone()).collect(),
        num_rows: rows.len(),
        num_columns: columns.len(),
        rows,
    }
}

fn validate_columns(columns: &[ColumnDescriptor]) -> ChartResult<()> {
    if columns.is_empty() {
        return Err(ChartError::InvalidChartData(
            "at least one column must be declared".to_owned(),
        ));
    }
    let mut seen = HashSet::with_capacity(columns.len());
    for column in columns {
        if column.name.is_empty() {
            return Err(ChartError::InvalidChartData(
                "column name must not be empty".to_owned(),
            ));
        }
        if !seen.insert(column.name.as_str()) {
            return Err(ChartError::InvalidChartData(format!(
                "duplicate column name `{}`",
                column.name
            )));
        }
    }
    Ok(())
}

fn validate_row_lengths(rows: &[Vec<Cell>], num_columns: usize) -> ChartResult<()> {
    if let Some((index, row)) = rows
        .iter()
        .enumerate()
        .find(|(_, row)| row.len() != num_columns)
    {
        return Err(ChartError::InvalidChartData(format!(
            "row {index} has {} values, expected {num_columns}",
            row.len()
        )));
    }
    Ok(())
}
