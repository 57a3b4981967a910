#![allow(dead_code, unused_macros)]

use chorus_core::{AlignedRow, AlignedTable, DataPoint, Series};

/// `row![100, -10, null]` → `AlignedRow { ts: 100.0, values: [Some(-10.0), None] }`.
///
/// Cells are munched one at a time so signed literals like `-10` stay whole.
macro_rules! row {
    (@cells [$($out:expr),*]) => {
        vec![$($out),*]
    };
    (@cells [$($out:expr),*] ,) => {
        vec![$($out),*]
    };
    (@cells [$($out:expr),*] , null $($rest:tt)*) => {
        row!(@cells [$($out,)* None] $($rest)*)
    };
    (@cells [$($out:expr),*] , $v:literal $($rest:tt)*) => {
        row!(@cells [$($out,)* Some(f64::from($v))] $($rest)*)
    };
    ($ts:literal $($rest:tt)*) => {
        chorus_core::AlignedRow::new(f64::from($ts), row!(@cells [] $($rest)*))
    };
}

/// Build a series from `(ts, value)` pairs with every value present.
pub fn series(points: &[(i32, f64)]) -> Series {
    points
        .iter()
        .map(|&(ts, v)| DataPoint::new(f64::from(ts), Some(v)))
        .collect()
}

/// Build a series from `(ts, value)` pairs where values may be missing.
pub fn sparse(points: &[(i32, Option<f64>)]) -> Series {
    points
        .iter()
        .map(|&(ts, v)| DataPoint::new(f64::from(ts), v))
        .collect()
}

pub fn rows(table: &AlignedTable) -> Vec<AlignedRow> {
    table.rows().collect()
}
