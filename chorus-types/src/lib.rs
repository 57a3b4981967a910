//! Data model, alignment options, and the error type shared across chorus.
#![warn(missing_docs)]

mod config;
mod error;
mod point;
mod table;

pub use config::{AlignOptions, Extrapolation, Interpolation};
pub use error::ChorusError;
pub use point::{DataPoint, Series};
pub use table::{AlignedRow, AlignedTable};
