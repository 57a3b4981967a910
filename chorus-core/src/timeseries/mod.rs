//! Time-series alignment pipeline.
//!
//! Modules include:
//! - `normalize`: drop malformed points and coerce bad values to null
//! - `timeline`: build the shared timeline and seed exact values
//! - `fill`: per-column interpolation and extrapolation
//! - `align`: the end-to-end pipeline
//! - `domain`: time and value extents of an aligned table
/// End-to-end alignment entry points.
pub mod align;
/// Time and value extents of aligned tables.
pub mod domain;
/// Gap filling against each column's original known extent.
pub mod fill;
/// Input sanitization for typed and JSON series.
pub mod normalize;
/// Shared timeline construction.
pub mod timeline;
