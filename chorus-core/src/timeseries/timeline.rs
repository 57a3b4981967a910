use crate::{AlignedTable, Series};

/// Build the shared timeline for normalized series and seed exact values.
///
/// - The timeline is the sorted set of distinct timestamps across all series.
/// - Column `i` receives series `i`'s values at their timestamps; every other
///   cell is `None`.
/// - Within one series the later point wins on a duplicate timestamp, even if
///   its value is `None`.
/// - If no series has a point, the table has no rows but keeps one column per
///   input series.
#[must_use]
pub fn unify_timeline(series: &[Series]) -> AlignedTable {
    let timestamps: Vec<f64> = series.iter().flatten().map(|p| p.ts).collect();
    let mut table = AlignedTable::with_timeline(timestamps, series.len());
    if table.is_empty() {
        return table;
    }

    for (col, s) in series.iter().enumerate() {
        for p in s {
            if let Some(row) = table.row_of(p.ts) {
                table.set(row, col, p.value);
            }
        }
    }
    table
}
