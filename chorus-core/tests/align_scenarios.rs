#[macro_use]
mod common;

use chorus_core::{AlignOptions, Extrapolation, Interpolation, Series, align_present, align_series};
use common::{rows, series, sparse};

fn series_a() -> Series {
    series(&[(100, 10.0), (200, 20.0), (300, 30.0)])
}

fn series_b() -> Series {
    series(&[(150, 15.0), (250, 25.0), (350, 35.0)])
}

fn opts(
    interpolation: Interpolation,
    before: Extrapolation,
    after: Extrapolation,
) -> AlignOptions {
    AlignOptions {
        interpolation,
        extrapolation_before: before,
        extrapolation_after: after,
        sort_input_series: true,
    }
}

#[test]
fn no_series_yields_empty_table() {
    let table = align_series(&[], &AlignOptions::linear());
    assert!(table.is_empty());
    assert_eq!(table.series_count(), 0);
}

#[test]
fn absent_or_empty_series_yield_empty_table() {
    let cases: [Vec<Option<Series>>; 3] = [
        vec![None, None],
        vec![Some(vec![]), Some(vec![])],
        vec![None, Some(vec![]), None],
    ];
    for input in cases {
        let table = align_series(&input, &AlignOptions::linear());
        assert!(table.is_empty());
        assert_eq!(table.series_count(), input.len());
        assert!(table.rows().next().is_none());
    }
}

#[test]
fn two_series_linear_with_null_extrapolation() {
    let table = align_present(&[series_a(), series_b()], &AlignOptions::linear());
    assert_eq!(
        rows(&table),
        vec![
            row![100, 10, null],
            row![150, 15, 15],
            row![200, 20, 20],
            row![250, 25, 25],
            row![300, 30, 30],
            row![350, null, 35],
        ]
    );
}

#[test]
fn single_series_passes_through() {
    let table = align_present(&[series_a()], &AlignOptions::linear());
    assert_eq!(
        rows(&table),
        vec![row![100, 10], row![200, 20], row![300, 30]]
    );
}

#[test]
fn unsorted_series_align_when_sorting() {
    let unsorted = series(&[(200, 20.0), (100, 10.0), (300, 30.0)]);
    let table = align_present(&[unsorted, series_b()], &AlignOptions::linear());
    assert_eq!(
        rows(&table),
        vec![
            row![100, 10, null],
            row![150, 15, 15],
            row![200, 20, 20],
            row![250, 25, 25],
            row![300, 30, 30],
            row![350, null, 35],
        ]
    );
}

#[test]
fn unsorted_series_align_without_sorting() {
    let unsorted = series(&[(300, 30.0), (100, 10.0), (200, 20.0)]);
    let original = unsorted.clone();
    let options = AlignOptions::linear().with_sort_input_series(false);

    let input = vec![Some(unsorted), Some(series(&[(150, 1.0)]))];
    let table = align_series(&input, &options);

    assert_eq!(input[0].as_ref(), Some(&original));
    assert_eq!(
        rows(&table),
        vec![
            row![100, 10, null],
            row![150, 15, 1],
            row![200, 20, null],
            row![300, 30, null],
        ]
    );
}

mod interpolation {
    use super::*;

    fn gap() -> [Series; 2] {
        [series(&[(100, 10.0), (300, 30.0)]), series(&[(200, 20.0)])]
    }

    fn run(strategy: Interpolation) -> Vec<chorus_core::AlignedRow> {
        let o = opts(strategy, Extrapolation::Null, Extrapolation::Null);
        rows(&align_present(&gap(), &o))
    }

    #[test]
    fn none_leaves_cross_series_gap_null() {
        assert_eq!(
            run(Interpolation::None),
            vec![row![100, 10, null], row![200, null, 20], row![300, 30, null]]
        );
    }

    #[test]
    fn linear_takes_midpoint() {
        assert_eq!(
            run(Interpolation::Linear),
            vec![row![100, 10, null], row![200, 20, 20], row![300, 30, null]]
        );
    }

    #[test]
    fn previous_forward_fills() {
        assert_eq!(
            run(Interpolation::Previous),
            vec![row![100, 10, null], row![200, 10, 20], row![300, 30, null]]
        );
    }

    #[test]
    fn next_backward_fills() {
        assert_eq!(
            run(Interpolation::Next),
            vec![row![100, 10, null], row![200, 30, 20], row![300, 30, null]]
        );
    }

    #[test]
    fn linear_uses_last_duplicate_as_bound() {
        let dup = series(&[(100, 10.0), (200, 20.0), (200, 30.0), (300, 40.0)]);
        let o = opts(Interpolation::Linear, Extrapolation::Null, Extrapolation::Null);
        let table = align_present(&[dup, series(&[(150, 5.0)])], &o);
        assert_eq!(
            rows(&table),
            vec![
                row![100, 10, null],
                row![150, 20, 5],
                row![200, 30, null],
                row![300, 40, null],
            ]
        );
    }

    #[test]
    fn linear_spans_internal_null_samples() {
        let with_null = sparse(&[(100, Some(10.0)), (200, None), (300, Some(30.0))]);
        let ticks = series(&[(150, 1.0), (250, 2.0)]);
        let o = opts(Interpolation::Linear, Extrapolation::Null, Extrapolation::Null);
        let table = align_present(&[with_null, ticks], &o);
        assert_eq!(
            rows(&table),
            vec![
                row![100, 10, null],
                row![150, 15, 1],
                row![200, 20, 1.5],
                row![250, 25, 2],
                row![300, 30, null],
            ]
        );
    }
}

mod extrapolation {
    use super::*;

    fn pair() -> [Series; 2] {
        [
            series(&[(200, 20.0), (300, 30.0)]),
            series(&[(100, 1.0), (400, 4.0)]),
        ]
    }

    fn run(before: Extrapolation, after: Extrapolation) -> Vec<chorus_core::AlignedRow> {
        rows(&align_present(&pair(), &opts(Interpolation::None, before, after)))
    }

    #[test]
    fn none_and_null_leave_boundaries_empty() {
        let expected = vec![
            row![100, null, 1],
            row![200, 20, null],
            row![300, 30, null],
            row![400, null, 4],
        ];
        assert_eq!(run(Extrapolation::None, Extrapolation::None), expected);
        assert_eq!(run(Extrapolation::Null, Extrapolation::Null), expected);
    }

    #[test]
    fn zero_fills_boundaries() {
        assert_eq!(
            run(Extrapolation::Zero, Extrapolation::Zero),
            vec![
                row![100, 0, 1],
                row![200, 20, null],
                row![300, 30, null],
                row![400, 0, 4],
            ]
        );
    }

    #[test]
    fn nearest_repeats_boundary_values() {
        assert_eq!(
            run(Extrapolation::Nearest, Extrapolation::Nearest),
            vec![
                row![100, 20, 1],
                row![200, 20, null],
                row![300, 30, null],
                row![400, 30, 4],
            ]
        );
    }

    #[test]
    fn linear_extends_two_point_line() {
        assert_eq!(
            run(Extrapolation::Linear, Extrapolation::Linear),
            vec![
                row![100, 10, 1],
                row![200, 20, null],
                row![300, 30, null],
                row![400, 40, 4],
            ]
        );
    }

    #[test]
    fn linear_uses_points_nearest_each_boundary() {
        let three = series(&[(200, 20.0), (300, 30.0), (400, 40.0)]);
        let ctx = series(&[(100, 1.0), (500, 5.0)]);
        let o = opts(Interpolation::None, Extrapolation::Linear, Extrapolation::Linear);
        assert_eq!(
            rows(&align_present(&[three, ctx], &o)),
            vec![
                row![100, 10, 1],
                row![200, 20, null],
                row![300, 30, null],
                row![400, 40, null],
                row![500, 50, 5],
            ]
        );
    }

    #[test]
    fn linear_with_single_point_falls_back_to_nearest() {
        let single = series(&[(200, 20.0)]);
        let ctx = series(&[(100, 1.0), (400, 4.0)]);
        let o = opts(Interpolation::None, Extrapolation::Linear, Extrapolation::Linear);
        assert_eq!(
            rows(&align_present(&[single, ctx], &o)),
            vec![row![100, 20, 1], row![200, 20, null], row![400, 20, 4]]
        );
    }

    #[test]
    fn all_null_series_only_filled_by_zero() {
        let all_null = sparse(&[(100, None), (200, None)]);
        let input = [all_null, series_a()];

        let zero = opts(Interpolation::Linear, Extrapolation::Zero, Extrapolation::Zero);
        assert_eq!(
            rows(&align_present(&input, &zero)),
            vec![row![100, 0, 10], row![200, 0, 20], row![300, 0, 30]]
        );

        for strategy in [
            Extrapolation::None,
            Extrapolation::Null,
            Extrapolation::Nearest,
            Extrapolation::Linear,
        ] {
            let o = opts(Interpolation::Linear, strategy, strategy);
            assert_eq!(
                rows(&align_present(&input, &o)),
                vec![row![100, null, 10], row![200, null, 20], row![300, null, 30]],
                "strategy {strategy}"
            );
        }
    }

    #[test]
    fn zero_on_one_side_fills_whole_all_null_column() {
        let all_null = sparse(&[(100, None)]);
        let o = opts(Interpolation::None, Extrapolation::None, Extrapolation::Zero);
        assert_eq!(
            rows(&align_present(&[all_null, series_a()], &o)),
            vec![row![100, 0, 10], row![200, 0, 20], row![300, 0, 30]]
        );
    }
}

#[test]
fn absent_series_keep_their_columns() {
    let input = vec![Some(series_a()), None, Some(series_b()), None, Some(vec![])];
    let table = align_series(&input, &AlignOptions::linear());
    assert_eq!(
        rows(&table),
        vec![
            row![100, 10, null, null, null, null],
            row![150, 15, null, 15, null, null],
            row![200, 20, null, 20, null, null],
            row![250, 25, null, 25, null, null],
            row![300, 30, null, 30, null, null],
            row![350, null, null, 35, null, null],
        ]
    );
}

#[test]
fn previous_interpolation_with_zero_extrapolation() {
    let s1 = series(&[(200, 20.0), (400, 40.0)]);
    let ctx = series(&[(100, 1.0), (300, 3.0), (500, 5.0)]);
    let o = opts(Interpolation::Previous, Extrapolation::Zero, Extrapolation::Zero);
    assert_eq!(
        rows(&align_present(&[s1, ctx], &o)),
        vec![
            row![100, 0, 1],
            row![200, 20, 1],
            row![300, 20, 3],
            row![400, 40, 3],
            row![500, 0, 5],
        ]
    );
}

#[test]
fn single_point_series_with_various_strategies() {
    let single = series(&[(200, 20.0)]);
    let ctx = series(&[(100, 1.0), (300, 3.0)]);

    let nearest = opts(Interpolation::Linear, Extrapolation::Nearest, Extrapolation::Nearest);
    assert_eq!(
        rows(&align_present(&[single.clone(), ctx.clone()], &nearest)),
        vec![row![100, 20, 1], row![200, 20, 2], row![300, 20, 3]]
    );

    let linear = opts(Interpolation::None, Extrapolation::Linear, Extrapolation::Linear);
    assert_eq!(
        rows(&align_present(&[single, ctx], &linear)),
        vec![row![100, 20, 1], row![200, 20, null], row![300, 20, 3]]
    );
}

#[test]
fn inputs_are_not_mutated() {
    let a = series(&[(100, 10.0), (300, 30.0)]);
    let b = series(&[(200, 20.0)]);
    let input = vec![Some(a.clone()), Some(b.clone())];

    let _ = align_series(&input, &AlignOptions::linear().with_sort_input_series(false));
    let _ = align_series(&input, &AlignOptions::linear());

    assert_eq!(input, vec![Some(a), Some(b)]);
}

#[test]
fn sorting_works_on_a_copy() {
    let unsorted = series(&[(300, 30.0), (100, 10.0)]);
    let first_before = unsorted[0];
    let c = series(&[(100, 100.0), (300, 300.0)]);
    let input = [unsorted, c];

    let table = align_present(&input, &AlignOptions::linear());

    assert_eq!(input[0][0], first_before);
    assert_eq!(input[0][0].ts, 300.0);
    assert_eq!(
        rows(&table),
        vec![row![100, 10, 100], row![300, 30, 300]]
    );
}

#[test]
fn later_duplicate_wins() {
    let dup = series(&[(100, 10.0), (200, 20.0), (200, 22.0), (300, 30.0)]);
    for sort in [true, false] {
        let o = AlignOptions::linear().with_sort_input_series(sort);
        assert_eq!(
            rows(&align_present(std::slice::from_ref(&dup), &o)),
            vec![row![100, 10], row![200, 22], row![300, 30]]
        );
    }
}

#[test]
fn later_null_duplicate_clears_earlier_value() {
    let dup = sparse(&[(100, Some(10.0)), (200, Some(20.0)), (200, None), (300, Some(30.0))]);
    let o = opts(Interpolation::Linear, Extrapolation::Null, Extrapolation::Null);
    assert_eq!(
        rows(&align_present(&[dup], &o)),
        vec![row![100, 10], row![200, 20], row![300, 30]]
    );
    let none = opts(Interpolation::None, Extrapolation::Null, Extrapolation::Null);
    let dup = sparse(&[(100, Some(10.0)), (200, Some(20.0)), (200, None), (300, Some(30.0))]);
    assert_eq!(
        rows(&align_present(&[dup], &none)),
        vec![row![100, 10], row![200, null], row![300, 30]]
    );
}
