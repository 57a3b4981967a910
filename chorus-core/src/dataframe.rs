//! Conversion of aligned tables into `polars` data frames.

use polars::prelude::{Column, DataFrame};

use crate::{AlignedTable, ChorusError};

/// Convert a value into a `polars::DataFrame`.
pub trait ToDataFrame {
    /// Build the data frame.
    ///
    /// # Errors
    /// Returns `Err(ChorusError::Data)` if `polars` rejects the columns.
    fn to_dataframe(&self) -> Result<DataFrame, ChorusError>;
}

impl ToDataFrame for AlignedTable {
    /// A `ts` column followed by `s0`, `s1`, … for each series.
    fn to_dataframe(&self) -> Result<DataFrame, ChorusError> {
        let names: Vec<String> = (0..self.series_count()).map(|i| format!("s{i}")).collect();
        to_dataframe_with_names(self, &names)
    }
}

/// Convert `table` into a data frame with caller-chosen series column names.
///
/// # Errors
/// - Returns `Err(ChorusError::InvalidArg)` if `names.len()` differs from the
///   table's series count.
/// - Returns `Err(ChorusError::Data)` if `polars` rejects the columns, e.g.
///   on duplicate names.
pub fn to_dataframe_with_names<S: AsRef<str>>(
    table: &AlignedTable,
    names: &[S],
) -> Result<DataFrame, ChorusError> {
    if names.len() != table.series_count() {
        return Err(ChorusError::invalid_arg(format!(
            "expected {} column names, got {}",
            table.series_count(),
            names.len()
        )));
    }

    let mut columns = Vec::with_capacity(names.len() + 1);
    columns.push(Column::new("ts".into(), table.timestamps().to_vec()));
    for (col, name) in names.iter().enumerate() {
        let cells = table.column(col).map(<[Option<f64>]>::to_vec).unwrap_or_default();
        columns.push(Column::new(name.as_ref().into(), cells));
    }
    DataFrame::new(columns).map_err(|e| ChorusError::data(e.to_string()))
}
