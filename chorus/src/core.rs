use chorus_core::{align_json, align_present, align_series, align_slices};
use chorus_types::{
    AlignOptions, AlignedTable, ChorusError, DataPoint, Extrapolation, Interpolation, Series,
};
use serde_json::Value;

/// Aligner holding one fixed set of [`AlignOptions`].
///
/// Cheap to copy and free of interior state; share it freely across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Chorus {
    pub(crate) options: AlignOptions,
}

/// Builder for constructing a `Chorus` aligner with custom options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChorusBuilder {
    options: AlignOptions,
}

impl Default for ChorusBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ChorusBuilder {
    /// Create a new builder.
    ///
    /// Defaults are conservative: no interpolation, no extrapolation and no
    /// sorting, so the output shows exactly the samples that were provided.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            options: AlignOptions {
                interpolation: Interpolation::None,
                extrapolation_before: Extrapolation::None,
                extrapolation_after: Extrapolation::None,
                sort_input_series: false,
            },
        }
    }

    /// Select how gaps inside each series are filled.
    ///
    /// Behavior and trade-offs:
    /// - `Linear` produces smooth lines but reports values nobody sampled.
    /// - `Previous` and `Next` only ever repeat real samples.
    /// - A series needs at least two known rows for any interpolation to apply.
    #[must_use]
    pub const fn interpolation(mut self, strategy: Interpolation) -> Self {
        self.options.interpolation = strategy;
        self
    }

    /// Select how rows before each series' first known value are filled.
    #[must_use]
    pub const fn extrapolation_before(mut self, strategy: Extrapolation) -> Self {
        self.options.extrapolation_before = strategy;
        self
    }

    /// Select how rows after each series' last known value are filled.
    #[must_use]
    pub const fn extrapolation_after(mut self, strategy: Extrapolation) -> Self {
        self.options.extrapolation_after = strategy;
        self
    }

    /// Use the same extrapolation strategy on both sides.
    ///
    /// Behavior and trade-offs:
    /// - `Linear` falls back to `Nearest` for a series with a single known row.
    /// - `Zero` also fills columns whose series had no values at all.
    #[must_use]
    pub const fn extrapolation(self, strategy: Extrapolation) -> Self {
        self.extrapolation_before(strategy)
            .extrapolation_after(strategy)
    }

    /// Toggle sorting of each input series before alignment.
    ///
    /// The aligned table is the same either way; sorting happens on a private
    /// copy and the caller's data is never reordered.
    #[must_use]
    pub const fn sort_input_series(mut self, yes: bool) -> Self {
        self.options.sort_input_series = yes;
        self
    }

    /// Replace all options at once, e.g. with a preset such as
    /// [`AlignOptions::linear`] or options parsed from host JSON.
    #[must_use]
    pub const fn options(mut self, options: AlignOptions) -> Self {
        self.options = options;
        self
    }

    /// Build the `Chorus` aligner.
    #[must_use]
    pub const fn build(self) -> Chorus {
        Chorus {
            options: self.options,
        }
    }
}

impl Chorus {
    /// Start building a new `Chorus` instance.
    ///
    /// ```rust
    /// use chorus::{Chorus, Extrapolation, Interpolation};
    ///
    /// let chorus = Chorus::builder()
    ///     .interpolation(Interpolation::Previous)
    ///     .extrapolation_after(Extrapolation::Nearest)
    ///     .build();
    /// assert_eq!(chorus.options().interpolation, Interpolation::Previous);
    /// ```
    #[must_use]
    pub const fn builder() -> ChorusBuilder {
        ChorusBuilder::new()
    }

    /// Aligner using `options` directly.
    #[must_use]
    pub const fn with_options(options: AlignOptions) -> Self {
        Self { options }
    }

    /// Options applied by every call on this instance.
    #[must_use]
    pub const fn options(&self) -> &AlignOptions {
        &self.options
    }

    /// Align possibly-absent series; see [`chorus_core::align_series`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "chorus::core::align",
            skip(self, series),
            fields(series = series.len()),
        )
    )]
    #[must_use]
    pub fn align(&self, series: &[Option<Series>]) -> AlignedTable {
        let table = align_series(series, &self.options);
        #[cfg(feature = "tracing")]
        tracing::debug!(rows = table.len(), "chorus aligned");
        table
    }

    /// Align series that are all present.
    #[must_use]
    pub fn align_present(&self, series: &[Series]) -> AlignedTable {
        align_present(series, &self.options)
    }

    /// Align borrowed point slices without copying them into owned series.
    #[must_use]
    pub fn align_slices(&self, series: &[Option<&[DataPoint]>]) -> AlignedTable {
        align_slices(series, &self.options)
    }

    /// Align series given in the host's JSON shape.
    ///
    /// # Errors
    /// Returns `InvalidArg` if `input` is neither an array of series nor `null`.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "chorus::core::align_json", skip(self, input), err)
    )]
    pub fn align_json(&self, input: &Value) -> Result<AlignedTable, ChorusError> {
        align_json(input, &self.options)
    }
}
