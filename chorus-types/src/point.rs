//! Input data model: timestamped samples and the series they form.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One sample of a series.
///
/// Serialized as the pair `[ts, value]`, with `null` for a missing value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, Option<f64>)", into = "(f64, Option<f64>)")]
pub struct DataPoint {
    /// Position on the time axis. Hosts use milliseconds since the Unix epoch.
    pub ts: f64,
    /// Sampled value, or `None` when the sample is missing.
    pub value: Option<f64>,
}

/// One measured quantity over time. May be empty or unsorted.
pub type Series = Vec<DataPoint>;

impl DataPoint {
    /// Build a point from a raw timestamp and value.
    #[must_use]
    pub const fn new(ts: f64, value: Option<f64>) -> Self {
        Self { ts, value }
    }

    /// Build a point at a wall-clock instant, using milliseconds since epoch.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn at(ts: DateTime<Utc>, value: Option<f64>) -> Self {
        Self::new(ts.timestamp_millis() as f64, value)
    }

    /// Interpret the timestamp as milliseconds since epoch.
    ///
    /// Returns `None` for non-finite or out-of-range timestamps. Fractional
    /// milliseconds are truncated.
    #[must_use]
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        millis_to_datetime(self.ts)
    }
}

impl From<(f64, Option<f64>)> for DataPoint {
    fn from((ts, value): (f64, Option<f64>)) -> Self {
        Self::new(ts, value)
    }
}

impl From<(f64, f64)> for DataPoint {
    fn from((ts, value): (f64, f64)) -> Self {
        Self::new(ts, Some(value))
    }
}

impl From<DataPoint> for (f64, Option<f64>) {
    fn from(p: DataPoint) -> Self {
        (p.ts, p.value)
    }
}

#[allow(clippy::cast_possible_truncation)]
pub(crate) fn millis_to_datetime(ms: f64) -> Option<DateTime<Utc>> {
    if !ms.is_finite() || ms < i64::MIN as f64 || ms > i64::MAX as f64 {
        return None;
    }
    DateTime::from_timestamp_millis(ms.trunc() as i64)
}
