//! Axis extents of an aligned table.

use serde::{Deserialize, Serialize};

use crate::AlignedTable;

/// Padding rules for [`value_domain`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DomainOptions {
    /// Widen the domain so it contains zero.
    pub include_zero: bool,
    /// Fraction of the span added at each end.
    pub padding_factor: f64,
    /// Absolute padding subtracted from the lower end.
    pub min_padding: f64,
    /// Absolute padding added to the upper end.
    pub max_padding: f64,
}

impl Default for DomainOptions {
    fn default() -> Self {
        Self {
            include_zero: false,
            padding_factor: 0.05,
            min_padding: 0.0,
            max_padding: 0.0,
        }
    }
}

/// First and last timestamp of the table.
#[must_use]
pub fn time_domain(table: &AlignedTable) -> Option<(f64, f64)> {
    let ts = table.timestamps();
    Some((*ts.first()?, *ts.last()?))
}

/// Padded `(min, max)` over every non-null cell of the table.
///
/// - Non-zero span: each end moves outwards by its absolute padding plus
///   `padding_factor * span`.
/// - Zero span: each end moves by the first non-zero of its absolute padding,
///   `|end * padding_factor|`, and `1.0`.
/// - No values: `Some((0.0, 1.0))` with `include_zero`, otherwise `None`.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn value_domain(table: &AlignedTable, options: &DomainOptions) -> Option<(f64, f64)> {
    let extent = (0..table.series_count())
        .filter_map(|col| table.column(col))
        .flatten()
        .flatten()
        .fold(None, |acc: Option<(f64, f64)>, &v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        });

    let Some((mut lo, mut hi)) = extent else {
        return options.include_zero.then_some((0.0, 1.0));
    };

    if options.include_zero {
        lo = lo.min(0.0);
        hi = hi.max(0.0);
    }

    if lo == hi {
        lo -= first_nonzero(options.min_padding, (lo * options.padding_factor).abs());
        hi += first_nonzero(options.max_padding, (hi * options.padding_factor).abs());
    } else {
        let pad = (hi - lo) * options.padding_factor;
        lo -= options.min_padding + pad;
        hi += options.max_padding + pad;
    }
    Some((lo, hi))
}

fn first_nonzero(a: f64, b: f64) -> f64 {
    [a, b]
        .into_iter()
        .find(|x| *x != 0.0 && !x.is_nan())
        .unwrap_or(1.0)
}
