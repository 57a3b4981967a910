//! Alignment options shared by the engine and the facade.

use core::fmt;
use core::str::FromStr;

use crate::error::ChorusError;
use serde::{Deserialize, Serialize};

/// Strategy for filling gaps strictly inside a series' known extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interpolation {
    /// Leave internal gaps null.
    #[default]
    None,
    /// Forward fill: each gap takes the nearest earlier known value.
    Previous,
    /// Backward fill: each gap takes the nearest later known value.
    Next,
    /// Straight line between the known values bounding each gap.
    Linear,
}

impl Interpolation {
    /// Lowercase name as used in host configuration.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Previous => "previous",
            Self::Next => "next",
            Self::Linear => "linear",
        }
    }
}

/// Strategy for filling rows before the first or after the last known value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Extrapolation {
    /// Leave boundary rows untouched (null).
    #[default]
    None,
    /// Write an explicit null. Observably identical to `None`.
    Null,
    /// Fill with `0.0`. The only strategy that populates an all-null column.
    Zero,
    /// Repeat the closest known boundary value.
    Nearest,
    /// Extend the line through the two known values closest to the boundary,
    /// falling back to `Nearest` when no such line exists.
    ///
    /// Only values present before filling count, so a gap next to the boundary
    /// or a value written by interpolation never bends the line. Hosts that
    /// read the row adjacent to the boundary can give different results.
    Linear,
}

impl Extrapolation {
    /// Lowercase name as used in host configuration.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Null => "null",
            Self::Zero => "zero",
            Self::Nearest => "nearest",
            Self::Linear => "linear",
        }
    }
}

impl fmt::Display for Interpolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Extrapolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Interpolation {
    type Err = ChorusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "previous" => Ok(Self::Previous),
            "next" => Ok(Self::Next),
            "linear" => Ok(Self::Linear),
            other => Err(ChorusError::invalid_arg(format!(
                "unknown interpolation strategy '{other}'"
            ))),
        }
    }
}

impl FromStr for Extrapolation {
    type Err = ChorusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "null" => Ok(Self::Null),
            "zero" => Ok(Self::Zero),
            "nearest" => Ok(Self::Nearest),
            "linear" => Ok(Self::Linear),
            other => Err(ChorusError::invalid_arg(format!(
                "unknown extrapolation strategy '{other}'"
            ))),
        }
    }
}

/// Options for a single alignment call.
///
/// Keys use the host's camelCase spelling when (de)serialized; any key left
/// out takes its value from [`AlignOptions::default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AlignOptions {
    /// Gap filling inside each series' known extent.
    pub interpolation: Interpolation,
    /// Filling of rows before each series' first known value.
    pub extrapolation_before: Extrapolation,
    /// Filling of rows after each series' last known value.
    pub extrapolation_after: Extrapolation,
    /// Sort a private copy of every input series by timestamp first.
    ///
    /// Rows are keyed by timestamp and the sort is stable, so the aligned
    /// output is the same either way: on duplicate timestamps the last point in
    /// input order wins. Sorted copies are what normalization hands back.
    pub sort_input_series: bool,
}

impl Default for AlignOptions {
    /// Conservative defaults: no filling of any kind and no sorting.
    fn default() -> Self {
        Self {
            interpolation: Interpolation::None,
            extrapolation_before: Extrapolation::None,
            extrapolation_after: Extrapolation::None,
            sort_input_series: false,
        }
    }
}

impl AlignOptions {
    /// Line-chart preset: linear interpolation, explicit nulls outside each
    /// series, sorted inputs.
    #[must_use]
    pub const fn linear() -> Self {
        Self {
            interpolation: Interpolation::Linear,
            extrapolation_before: Extrapolation::Null,
            extrapolation_after: Extrapolation::Null,
            sort_input_series: true,
        }
    }

    /// Step-chart preset: forward fill, nulls before a series starts, and the
    /// last value held after it ends.
    #[must_use]
    pub const fn step() -> Self {
        Self {
            interpolation: Interpolation::Previous,
            extrapolation_before: Extrapolation::Null,
            extrapolation_after: Extrapolation::Nearest,
            sort_input_series: false,
        }
    }

    /// Replace the interpolation strategy.
    #[must_use]
    pub const fn with_interpolation(mut self, strategy: Interpolation) -> Self {
        self.interpolation = strategy;
        self
    }

    /// Replace the extrapolation strategy for rows before the known extent.
    #[must_use]
    pub const fn with_extrapolation_before(mut self, strategy: Extrapolation) -> Self {
        self.extrapolation_before = strategy;
        self
    }

    /// Replace the extrapolation strategy for rows after the known extent.
    #[must_use]
    pub const fn with_extrapolation_after(mut self, strategy: Extrapolation) -> Self {
        self.extrapolation_after = strategy;
        self
    }

    /// Toggle sorting of input series.
    #[must_use]
    pub const fn with_sort_input_series(mut self, yes: bool) -> Self {
        self.sort_input_series = yes;
        self
    }
}
