use serde_json::Value;

use crate::timeseries::fill::fill_table;
use crate::timeseries::normalize::{normalize_json_series, normalize_series};
use crate::timeseries::timeline::unify_timeline;
use crate::{AlignOptions, AlignedTable, ChorusError, DataPoint, Series};

/// Align possibly-absent series onto one shared timeline.
///
/// - Rows: one per distinct valid timestamp across all series, ascending.
/// - Columns: one per input entry, in input order; absent entries included.
/// - Cells hold each series' exact values, then gaps are filled per column
///   according to `options`.
/// - Returns a table with no rows if no series has a usable point.
///
/// Input series are only read; sorting (when enabled) works on a copy.
///
/// ```
/// use chorus_core::{AlignOptions, DataPoint, align_series};
///
/// let a = vec![DataPoint::new(100.0, Some(10.0)), DataPoint::new(300.0, Some(30.0))];
/// let b = vec![DataPoint::new(200.0, Some(20.0))];
/// let table = align_series(&[Some(a), Some(b), None], &AlignOptions::linear());
///
/// assert_eq!(table.timestamps(), &[100.0, 200.0, 300.0]);
/// assert_eq!(table.value(1, 0), Some(20.0));
/// assert_eq!(table.column(2), Some(&[None, None, None][..]));
/// ```
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "chorus_core::align_series",
        skip(series, options),
        fields(
            series = series.len(),
            interpolation = %options.interpolation,
            before = %options.extrapolation_before,
            after = %options.extrapolation_after,
        ),
    )
)]
#[must_use]
pub fn align_series(series: &[Option<Series>], options: &AlignOptions) -> AlignedTable {
    let normalized = normalize_series(
        series.iter().map(Option::as_deref),
        options.sort_input_series,
    );
    align_normalized(&normalized.series, options)
}

/// Align series that are all present. Equivalent to wrapping each in `Some`.
#[must_use]
pub fn align_present(series: &[Series], options: &AlignOptions) -> AlignedTable {
    let normalized = normalize_series(
        series.iter().map(|s| Some(s.as_slice())),
        options.sort_input_series,
    );
    align_normalized(&normalized.series, options)
}

/// Align series given as borrowed point slices.
#[must_use]
pub fn align_slices(series: &[Option<&[DataPoint]>], options: &AlignOptions) -> AlignedTable {
    let normalized = normalize_series(series.iter().copied(), options.sort_input_series);
    align_normalized(&normalized.series, options)
}

/// Align series given in the host's JSON shape: an array of series, each an
/// array of `[timestamp, value]` pairs, with `null` for absent series.
///
/// # Errors
/// Returns `Err(ChorusError::InvalidArg)` if `input` is neither an array nor
/// `null`. Malformed series and points never cause an error.
///
/// ```
/// use chorus_core::{AlignOptions, align_json};
/// use serde_json::json;
///
/// let input = json!([[[100, 1], [200, "n/a"], [300, 3]], null]);
/// let table = align_json(&input, &AlignOptions::linear()).unwrap();
///
/// assert_eq!(table.value(1, 0), Some(2.0));
/// assert_eq!(table.series_count(), 2);
/// ```
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(name = "chorus_core::align_json", skip(input, options), err)
)]
pub fn align_json(input: &Value, options: &AlignOptions) -> Result<AlignedTable, ChorusError> {
    let normalized = normalize_json_series(input, options.sort_input_series)?;
    Ok(align_normalized(&normalized.series, options))
}

fn align_normalized(series: &[Series], options: &AlignOptions) -> AlignedTable {
    let mut table = unify_timeline(series);
    if table.is_empty() {
        return table;
    }
    fill_table(&mut table, options);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        rows = table.len(),
        columns = table.series_count(),
        "aligned series"
    );
    table
}
