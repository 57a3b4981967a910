//! chorus-core
//!
//! Alignment engine for independently sampled numeric series.
//!
//! - `types`: the shared data model re-exported from `chorus-types`.
//! - `timeseries`: normalization, timeline unification, gap filling, and the
//!   end-to-end `align_*` entry points.
//! - `dataframe` (feature `dataframe`): export to `polars`.
//!
//! Pipeline
//! --------
//! Normalizer → Timeline Unifier → Gap Filler (per column) → `AlignedTable`.
//! Every call is pure and synchronous: no I/O, no global state, inputs are
//! only borrowed. Alignment cannot fail on malformed points; they are dropped
//! or their values coerced to null.
//!
#![warn(missing_docs)]

/// Export of aligned tables to `polars`.
#[cfg(feature = "dataframe")]
pub mod dataframe;
/// Time-series alignment pipeline.
pub mod timeseries;
pub mod types;

#[cfg(feature = "dataframe")]
pub use dataframe::{ToDataFrame, to_dataframe_with_names};
pub use timeseries::align::{align_json, align_present, align_series, align_slices};
pub use timeseries::domain::{DomainOptions, time_domain, value_domain};
pub use timeseries::fill::{Extent, Side, extrapolate, fill_column, fill_table, interpolate};
pub use timeseries::normalize::{
    NormalizeReport, Normalized, normalize_json_series, normalize_point, normalize_series,
};
pub use timeseries::timeline::unify_timeline;
pub use types::*;
