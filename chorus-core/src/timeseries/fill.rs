//! Per-column gap filling.
//!
//! Every column is filled on its own, in three phases: extrapolation before
//! the known extent, interpolation inside it, extrapolation after it. All
//! phases read the [`Extent`] captured before any cell was written, so the
//! result does not depend on phase order: extrapolation only writes rows
//! outside the extent, interpolation only writes null rows inside it, and known
//! cells are never overwritten.

use crate::{AlignOptions, AlignedTable, Extrapolation, Interpolation};

/// Known rows of a column right after timeline unification.
///
/// `second` and `penultimate` are the known rows next to each boundary, used
/// as the second reference point for linear extrapolation. With exactly two
/// known rows, `second == Some(last)` and `penultimate == Some(first)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extent {
    /// First row holding a value.
    pub first: usize,
    /// Second row holding a value, if any.
    pub second: Option<usize>,
    /// Row holding a value just before `last`, if any.
    pub penultimate: Option<usize>,
    /// Last row holding a value.
    pub last: usize,
}

impl Extent {
    /// Capture the extent of `cells`. `None` for an all-null column.
    #[must_use]
    pub fn of(cells: &[Option<f64>]) -> Option<Self> {
        let mut known = cells
            .iter()
            .enumerate()
            .filter_map(|(i, c)| c.is_some().then_some(i));
        let first = known.next()?;
        let Some(second) = known.next() else {
            return Some(Self {
                first,
                second: None,
                penultimate: None,
                last: first,
            });
        };
        let (penultimate, last) = known.fold((first, second), |(_, last), i| (last, i));
        Some(Self {
            first,
            second: Some(second),
            penultimate: Some(penultimate),
            last,
        })
    }

    /// True if the column has a single known row.
    #[must_use]
    pub const fn is_single(&self) -> bool {
        self.second.is_none()
    }
}

/// Which boundary of the known extent an extrapolation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Rows strictly before the first known row.
    Before,
    /// Rows strictly after the last known row.
    After,
}

/// Fill every column of `table` according to `options`.
pub fn fill_table(table: &mut AlignedTable, options: &AlignOptions) {
    for col in 0..table.series_count() {
        if let Some((timeline, cells)) = table.split_column_mut(col) {
            fill_column(timeline, cells, options);
        }
    }
}

/// Fill one column in place. `timeline` and `cells` must have equal length.
///
/// Runs extrapolation-before, interpolation, and extrapolation-after against
/// the extent captured on entry.
pub fn fill_column(timeline: &[f64], cells: &mut [Option<f64>], options: &AlignOptions) {
    debug_assert_eq!(timeline.len(), cells.len());
    let extent = Extent::of(cells);
    extrapolate(timeline, cells, options.extrapolation_before, Side::Before, extent);
    if let Some(extent) = extent {
        interpolate(timeline, cells, options.interpolation, extent);
    }
    extrapolate(timeline, cells, options.extrapolation_after, Side::After, extent);
}

/// Fill null rows strictly inside `extent`.
pub fn interpolate(
    timeline: &[f64],
    cells: &mut [Option<f64>],
    strategy: Interpolation,
    extent: Extent,
) {
    if extent.is_single() {
        return;
    }
    match strategy {
        Interpolation::None => {}
        Interpolation::Previous => fill_previous(cells, extent),
        Interpolation::Next => fill_next(cells, extent),
        Interpolation::Linear => fill_linear(timeline, cells, extent),
    }
}

/// Fill rows outside the extent on one side.
///
/// With no extent (all-null column) only [`Extrapolation::Zero`] writes, and
/// it writes every row.
pub fn extrapolate(
    timeline: &[f64],
    cells: &mut [Option<f64>],
    strategy: Extrapolation,
    side: Side,
    extent: Option<Extent>,
) {
    let Some(extent) = extent else {
        if strategy == Extrapolation::Zero {
            cells.fill(Some(0.0));
        }
        return;
    };

    let rows = match side {
        Side::Before => 0..extent.first,
        Side::After => extent.last + 1..cells.len(),
    };
    if rows.is_empty() {
        return;
    }

    match strategy {
        Extrapolation::None => {}
        Extrapolation::Null => cells[rows].fill(None),
        Extrapolation::Zero => cells[rows].fill(Some(0.0)),
        Extrapolation::Nearest => {
            let anchor = cells[boundary_row(side, extent)];
            cells[rows].fill(anchor);
        }
        Extrapolation::Linear => {
            let anchor = cells[boundary_row(side, extent)];
            let line = reference_line(timeline, cells, side, extent);
            for i in rows {
                cells[i] = line
                    .and_then(|(a, b)| lerp(a, b, timeline[i]))
                    .or(anchor);
            }
        }
    }
}

const fn boundary_row(side: Side, extent: Extent) -> usize {
    match side {
        Side::Before => extent.first,
        Side::After => extent.last,
    }
}

/// The two known points closest to `side`, ordered by row.
fn reference_line(
    timeline: &[f64],
    cells: &[Option<f64>],
    side: Side,
    extent: Extent,
) -> Option<((f64, f64), (f64, f64))> {
    let (r1, r2) = match side {
        Side::Before => (extent.first, extent.second?),
        Side::After => (extent.penultimate?, extent.last),
    };
    Some(((timeline[r1], cells[r1]?), (timeline[r2], cells[r2]?)))
}

/// Value at `t` on the line through `(t0, v0)` and `(t1, v1)`.
///
/// `None` when the reference timestamps coincide or the arithmetic leaves the
/// finite range, so callers can substitute their fallback instead of NaN.
#[allow(clippy::float_cmp)]
fn lerp((t0, v0): (f64, f64), (t1, v1): (f64, f64), t: f64) -> Option<f64> {
    if t1 == t0 {
        return None;
    }
    let v = v0 + (v1 - v0) * (t - t0) / (t1 - t0);
    v.is_finite().then_some(v)
}

fn fill_previous(cells: &mut [Option<f64>], extent: Extent) {
    let mut seen = None;
    for cell in &mut cells[extent.first..=extent.last] {
        match *cell {
            Some(v) => seen = Some(v),
            None => *cell = seen,
        }
    }
}

fn fill_next(cells: &mut [Option<f64>], extent: Extent) {
    let mut seen = None;
    for cell in cells[extent.first..=extent.last].iter_mut().rev() {
        match *cell {
            Some(v) => seen = Some(v),
            None => *cell = seen,
        }
    }
}

fn fill_linear(timeline: &[f64], cells: &mut [Option<f64>], extent: Extent) {
    let mut prev: Option<usize> = None;
    for i in extent.first..=extent.last {
        let Some(v1) = cells[i] else {
            continue;
        };
        if let Some(p) = prev
            && i > p + 1
            && let Some(v0) = cells[p]
        {
            let start = (timeline[p], v0);
            let end = (timeline[i], v1);
            for j in p + 1..i {
                // Coinciding bounds (or overflow) hold the left value.
                cells[j] = Some(lerp(start, end, timeline[j]).unwrap_or(v0));
            }
        }
        prev = Some(i);
    }
}
