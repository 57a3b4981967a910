//! Re-export of the shared data model from `chorus-types`.
// Consolidated re-exports so downstream crates can depend on `chorus-core` only

pub use chorus_types::{AlignOptions, ChorusError, Extrapolation, Interpolation};
pub use chorus_types::{AlignedRow, AlignedTable, DataPoint, Series};
