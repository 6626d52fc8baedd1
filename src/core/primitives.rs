use chrono::{DateTime, SecondsFormat, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde_json::Number;

use crate::error::{ChartError, ChartResult};

use super::Cell;

pub fn f64_to_cell(value: f64, field_name: &str) -> ChartResult<Cell> {
    Number::from_f64(value).map(Cell::Number).ok_or_else(|| {
        ChartError::InvalidChartData(format!("{field_name} must be a finite number"))
    })
}

pub fn decimal_to_cell(value: Decimal, field_name: &str) -> ChartResult<Cell> {
    let value = value.to_f64().ok_or_else(|| {
        ChartError::InvalidChartData(format!("{field_name} cannot be represented as f64"))
    })?;
    f64_to_cell(value, field_name)
}

/// Date cells travel as RFC 3339 strings with millisecond precision.
#[must_use]
pub fn datetime_to_cell(time: DateTime<Utc>) -> Cell {
    Cell::String(time.to_rfc3339_opts(SecondsFormat::Millis, true))
}
