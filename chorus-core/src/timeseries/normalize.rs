//! Sanitization of raw input series.
//!
//! A point survives only if it is structurally a `[timestamp, value]` pair with
//! a finite numeric timestamp. A value that is not a finite number is kept as a
//! missing sample (`None`) so the row still exists and can be filled later.
//! Caller data is only ever read; sorting works on a private copy.

use serde_json::Value;

use crate::{ChorusError, DataPoint, Series};

/// What normalization discarded or rewrote during one call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeReport {
    /// Points removed because they were not a pair or had no usable timestamp.
    pub dropped: usize,
    /// Points kept with their value replaced by `None`.
    pub coerced: usize,
}

impl NormalizeReport {
    /// True if every input point passed through unchanged.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.dropped == 0 && self.coerced == 0
    }
}

/// Sanitized series, parallel to the input list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Normalized {
    /// One series per input entry; absent inputs become empty series.
    pub series: Vec<Series>,
    /// Tally across all series.
    pub report: NormalizeReport,
}

/// Sanitize one point. Returns `None` when the point must be dropped.
///
/// Non-finite values become `None`; `-0.0` timestamps become `0.0`.
#[must_use]
pub fn normalize_point(p: &DataPoint) -> Option<DataPoint> {
    if !p.ts.is_finite() {
        return None;
    }
    Some(DataPoint::new(
        p.ts + 0.0,
        p.value.filter(|v| v.is_finite()),
    ))
}

/// Sanitize a list of possibly-absent typed series.
///
/// When `sort` is set each output series is ordered by timestamp using a
/// stable sort, so duplicates keep their relative order.
pub fn normalize_series<'a, I>(series: I, sort: bool) -> Normalized
where
    I: IntoIterator<Item = Option<&'a [DataPoint]>>,
{
    let mut report = NormalizeReport::default();
    let series = series
        .into_iter()
        .map(|s| {
            let Some(points) = s else {
                return Series::new();
            };
            let mut out: Series = Vec::with_capacity(points.len());
            for p in points {
                match normalize_point(p) {
                    Some(clean) => {
                        if p.value.is_some() && clean.value.is_none() {
                            report.coerced += 1;
                        }
                        out.push(clean);
                    }
                    None => report.dropped += 1,
                }
            }
            if sort {
                sort_by_ts(&mut out);
            }
            out
        })
        .collect();

    log_report(&report);
    Normalized { series, report }
}

/// Sanitize series given in the host's JSON shape.
///
/// `input` is either `null` (nothing to align) or an array whose elements are
/// series. A series that is `null` or not an array counts as absent. Points
/// follow the rules described at module level; any JSON value other than a
/// number in value position (string, bool, object, null) becomes `None`.
///
/// # Errors
/// Returns `Err(ChorusError::InvalidArg)` if `input` is neither an array nor
/// `null`.
pub fn normalize_json_series(input: &Value, sort: bool) -> Result<Normalized, ChorusError> {
    let items = match input {
        Value::Null => return Ok(Normalized::default()),
        Value::Array(items) => items,
        other => {
            return Err(ChorusError::invalid_arg(format!(
                "expected an array of series, got {}",
                json_kind(other)
            )));
        }
    };

    let mut report = NormalizeReport::default();
    let series = items
        .iter()
        .map(|item| {
            let Value::Array(points) = item else {
                #[cfg(feature = "tracing")]
                if !item.is_null() {
                    tracing::debug!(
                        kind = json_kind(item),
                        "treating non-array series as absent"
                    );
                }
                return Series::new();
            };
            let mut out: Series = Vec::with_capacity(points.len());
            for raw in points {
                match json_point(raw) {
                    Some((p, coerced)) => {
                        if coerced {
                            report.coerced += 1;
                        }
                        out.push(p);
                    }
                    None => report.dropped += 1,
                }
            }
            if sort {
                sort_by_ts(&mut out);
            }
            out
        })
        .collect();

    log_report(&report);
    Ok(Normalized { series, report })
}

/// Parse one JSON point; the flag reports a value coerced to `None`.
fn json_point(raw: &Value) -> Option<(DataPoint, bool)> {
    let Value::Array(pair) = raw else {
        return None;
    };
    let [ts, value] = pair.as_slice() else {
        return None;
    };
    let ts = ts.as_f64().filter(|t| t.is_finite())?;
    let clean = value.as_f64().filter(|v| v.is_finite());
    let coerced = clean.is_none() && !value.is_null();
    Some((DataPoint::new(ts + 0.0, clean), coerced))
}

fn sort_by_ts(series: &mut Series) {
    series.sort_by(|a, b| a.ts.total_cmp(&b.ts));
}

const fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn log_report(report: &NormalizeReport) {
    #[cfg(feature = "tracing")]
    if !report.is_clean() {
        tracing::debug!(
            dropped = report.dropped,
            coerced = report.coerced,
            "normalized input series"
        );
    }
}
