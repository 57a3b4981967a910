//! Chorus aligns independently sampled numeric series onto one shared timeline.
//!
//! Overview
//! - Every distinct timestamp across all inputs becomes one row; every input
//!   series becomes one column, absent series included.
//! - Malformed points are dropped and non-numeric values become gaps, so
//!   alignment never fails on bad data.
//! - Gaps are filled per column with a configurable interpolation strategy
//!   inside each series and extrapolation strategies on either side of it.
//!
//! Key behaviors and trade-offs
//! - Interpolation:
//!   - `Linear`: smooth line charts; invents values that were never sampled.
//!   - `Previous` / `Next`: step charts; values stay exact but jump at samples.
//!   - `None`: gaps stay visible as nulls.
//! - Extrapolation:
//!   - `Null` / `None`: series start and end where their data does.
//!   - `Nearest`: holds the boundary value, the usual choice for gauges.
//!   - `Linear`: continues the trend of the two outermost samples; can overshoot.
//!   - `Zero`: the only strategy that also fills columns with no data at all.
//! - Sorting: input is keyed by timestamp, so the output never depends on input
//!   order. `sort_input_series` only affects the normalized copies.
//!
//! Examples
//! Building an aligner and aligning two series:
//! ```rust
//! use chorus::{Chorus, DataPoint, Extrapolation, Interpolation};
//!
//! let chorus = Chorus::builder()
//!     .interpolation(Interpolation::Linear)
//!     .extrapolation(Extrapolation::Nearest)
//!     .build();
//!
//! let cpu = vec![DataPoint::new(100.0, Some(10.0)), DataPoint::new(300.0, Some(30.0))];
//! let mem = vec![DataPoint::new(200.0, Some(0.5))];
//! let table = chorus.align(&[Some(cpu), Some(mem)]);
//!
//! assert_eq!(table.timestamps(), &[100.0, 200.0, 300.0]);
//! assert_eq!(table.value(1, 0), Some(20.0));
//! assert_eq!(table.value(0, 1), Some(0.5));
//! ```
//!
//! Aligning host-shaped JSON:
//! ```rust
//! use chorus::{AlignOptions, Chorus};
//! use serde_json::json;
//!
//! let chorus = Chorus::builder().options(AlignOptions::step()).build();
//! let table = chorus.align_json(&json!([[[1, 5], [3, 7]], [[2, 1]]]))?;
//! assert_eq!(table.value(1, 0), Some(5.0));
//! # Ok::<(), chorus::ChorusError>(())
//! ```
//!
//! See `chorus/examples/` for runnable demonstrations.
#![warn(missing_docs)]

pub(crate) mod core;

pub use core::{Chorus, ChorusBuilder};

pub use chorus_types::{
    AlignOptions, AlignedRow, AlignedTable, ChorusError, DataPoint, Extrapolation, Interpolation,
    Series,
};

// Re-export engine building blocks for callers that need finer control
pub use chorus_core::{
    DomainOptions, Extent, NormalizeReport, Normalized, Side, align_json, align_series,
    fill_column, fill_table, normalize_json_series, normalize_series, time_domain,
    unify_timeline, value_domain,
};

#[cfg(feature = "dataframe")]
pub use chorus_core::{ToDataFrame, to_dataframe_with_names};

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct ReadmeDoctests;
