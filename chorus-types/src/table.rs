//! Output data model: one shared timeline with a value column per series.

use chrono::{DateTime, Utc};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::ChorusError;
use crate::point::millis_to_datetime;

/// One row of an [`AlignedTable`]: a timestamp plus one cell per series.
///
/// Serialized as the flat array `[ts, v_1, …, v_n]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "Vec<Option<f64>>", try_from = "Vec<Option<f64>>")]
pub struct AlignedRow {
    /// Timestamp shared by every cell of the row.
    pub ts: f64,
    /// Cell per input series, in input order.
    pub values: Vec<Option<f64>>,
}

impl AlignedRow {
    /// Build a row from its timestamp and cells.
    #[must_use]
    pub const fn new(ts: f64, values: Vec<Option<f64>>) -> Self {
        Self { ts, values }
    }

    /// Interpret the timestamp as milliseconds since epoch.
    #[must_use]
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        millis_to_datetime(self.ts)
    }
}

impl From<AlignedRow> for Vec<Option<f64>> {
    fn from(row: AlignedRow) -> Self {
        let mut out = Vec::with_capacity(row.values.len() + 1);
        out.push(Some(row.ts));
        out.extend(row.values);
        out
    }
}

impl TryFrom<Vec<Option<f64>>> for AlignedRow {
    type Error = ChorusError;

    fn try_from(mut cells: Vec<Option<f64>>) -> Result<Self, Self::Error> {
        if cells.is_empty() {
            return Err(ChorusError::invalid_arg("aligned row has no timestamp"));
        }
        let Some(ts) = cells.remove(0) else {
            return Err(ChorusError::invalid_arg("aligned row timestamp is null"));
        };
        Ok(Self { ts, values: cells })
    }
}

/// Several series aligned on one strictly increasing timeline.
///
/// Stored column-major: `timestamps()` holds the timeline and `column(i)` the
/// cells of input series `i`. The timeline is sorted, free of duplicates, and
/// contains only finite values; the constructor enforces this.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(try_from = "Vec<AlignedRow>")]
pub struct AlignedTable {
    timestamps: Vec<f64>,
    columns: Vec<Vec<Option<f64>>>,
}

impl AlignedTable {
    /// Build an all-null table over the given timestamps.
    ///
    /// Timestamps are sorted ascending and de-duplicated; non-finite values
    /// are discarded and `-0.0` is folded into `0.0`.
    #[must_use]
    pub fn with_timeline(mut timestamps: Vec<f64>, series_count: usize) -> Self {
        timestamps.retain(|t| t.is_finite());
        for t in &mut timestamps {
            // -0.0 + 0.0 == +0.0
            *t += 0.0;
        }
        timestamps.sort_unstable_by(f64::total_cmp);
        timestamps.dedup();
        let rows = timestamps.len();
        Self {
            timestamps,
            columns: vec![vec![None; rows]; series_count],
        }
    }

    /// An empty table that still knows how many series it was built for.
    #[must_use]
    pub fn empty(series_count: usize) -> Self {
        Self::with_timeline(Vec::new(), series_count)
    }

    /// Number of rows (distinct timestamps).
    #[must_use]
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    /// True if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Number of value columns (one per input series, absent ones included).
    #[must_use]
    pub fn series_count(&self) -> usize {
        self.columns.len()
    }

    /// The shared timeline.
    #[must_use]
    pub fn timestamps(&self) -> &[f64] {
        &self.timestamps
    }

    /// Row index holding timestamp `ts`, if present.
    #[must_use]
    pub fn row_of(&self, ts: f64) -> Option<usize> {
        let ts = ts + 0.0;
        self.timestamps
            .binary_search_by(|probe| probe.total_cmp(&ts))
            .ok()
    }

    /// Cells of series `col`.
    #[must_use]
    pub fn column(&self, col: usize) -> Option<&[Option<f64>]> {
        self.columns.get(col).map(Vec::as_slice)
    }

    /// Timeline together with mutable access to the cells of series `col`.
    pub fn split_column_mut(&mut self, col: usize) -> Option<(&[f64], &mut [Option<f64>])> {
        let cells = self.columns.get_mut(col)?;
        Some((&self.timestamps, cells.as_mut_slice()))
    }

    /// Value of series `col` at row `row`; `None` when null or out of bounds.
    #[must_use]
    pub fn value(&self, row: usize, col: usize) -> Option<f64> {
        self.columns.get(col)?.get(row).copied().flatten()
    }

    /// Overwrite one cell. Returns `false` if `row` or `col` is out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: Option<f64>) -> bool {
        match self.columns.get_mut(col).and_then(|c| c.get_mut(row)) {
            Some(cell) => {
                *cell = value;
                true
            }
            None => false,
        }
    }

    /// Materialize row `row`.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<AlignedRow> {
        let ts = *self.timestamps.get(row)?;
        let values = self.columns.iter().map(|c| c[row]).collect();
        Some(AlignedRow { ts, values })
    }

    /// Iterate over materialized rows in timeline order.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = AlignedRow> + '_ {
        (0..self.len()).map(move |i| AlignedRow {
            ts: self.timestamps[i],
            values: self.columns.iter().map(|c| c[i]).collect(),
        })
    }

    /// Convert into row-major form.
    #[must_use]
    pub fn into_rows(self) -> Vec<AlignedRow> {
        self.rows().collect()
    }
}

impl Serialize for AlignedTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for row in self.rows() {
            seq.serialize_element(&row)?;
        }
        seq.end()
    }
}

impl TryFrom<Vec<AlignedRow>> for AlignedTable {
    type Error = ChorusError;

    /// Rebuild a table from rows, e.g. after a JSON round trip.
    ///
    /// Rows must share one width and be strictly increasing by finite timestamp.
    fn try_from(rows: Vec<AlignedRow>) -> Result<Self, Self::Error> {
        let series_count = rows.first().map_or(0, |r| r.values.len());
        let mut timestamps = Vec::with_capacity(rows.len());
        let mut columns = vec![Vec::with_capacity(rows.len()); series_count];
        for row in rows {
            if row.values.len() != series_count {
                return Err(ChorusError::invalid_arg(format!(
                    "aligned row at {} has {} values, expected {series_count}",
                    row.ts,
                    row.values.len()
                )));
            }
            if !row.ts.is_finite() {
                return Err(ChorusError::invalid_arg("aligned row timestamp is not finite"));
            }
            if let Some(prev) = timestamps.last()
                && *prev >= row.ts
            {
                return Err(ChorusError::invalid_arg(format!(
                    "aligned rows are not strictly increasing at {}",
                    row.ts
                )));
            }
            timestamps.push(row.ts);
            for (col, v) in columns.iter_mut().zip(row.values) {
                col.push(v);
            }
        }
        Ok(Self {
            timestamps,
            columns,
        })
    }
}
