//! Integration tests for the set operations.

use std::cell::Cell;

use rstest::rstest;
use setwise::prelude::*;

fn collect_all(first: &[i32], second: &[i32]) -> [Vec<i32>; 4] {
    [
        difference(first, second).into_iter().copied().collect(),
        intersection(first, second).into_iter().copied().collect(),
        union(first, second).into_iter().copied().collect(),
        symmetric_difference(first, second).into_iter().copied().collect(),
    ]
}

// =============================================================================
// Worked Examples
// =============================================================================

#[rstest]
fn test_worked_example_on_sets() {
    let [difference, intersection, union, symmetric] = collect_all(&[1, 2, 4, 6], &[2, 3, 4, 5]);
    assert_eq!(difference, vec![1, 6]);
    assert_eq!(intersection, vec![2, 4]);
    assert_eq!(union, vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(symmetric, vec![1, 3, 5, 6]);
}

#[rstest]
fn test_worked_example_with_internal_duplicates() {
    let [difference, intersection, union, symmetric] =
        collect_all(&[1, 2, 2, 4, 6], &[2, 3, 4, 4, 5]);
    assert_eq!(difference, vec![1, 2, 6]);
    assert_eq!(intersection, vec![2, 4]);
    assert_eq!(union, vec![1, 2, 2, 3, 4, 4, 5, 6]);
    assert_eq!(symmetric, vec![1, 2, 3, 4, 5, 6]);
}

// =============================================================================
// Empty Boundaries
// =============================================================================

#[rstest]
#[case::empty_second(&[1, 2, 3], &[], [vec![1, 2, 3], vec![], vec![1, 2, 3], vec![1, 2, 3]])]
#[case::empty_first(&[], &[1, 2, 3], [vec![], vec![], vec![1, 2, 3], vec![1, 2, 3]])]
#[case::both_empty(&[], &[], [vec![], vec![], vec![], vec![]])]
#[case::disjoint(&[1, 3], &[2, 4], [vec![1, 3], vec![], vec![1, 2, 3, 4], vec![1, 2, 3, 4]])]
#[case::second_before_first(&[7, 8], &[1, 2], [vec![7, 8], vec![], vec![1, 2, 7, 8], vec![1, 2, 7, 8]])]
fn test_boundaries(
    #[case] first: &[i32],
    #[case] second: &[i32],
    #[case] expected: [Vec<i32>; 4],
) {
    assert_eq!(collect_all(first, second), expected);
}

// =============================================================================
// Laziness
// =============================================================================

#[rstest]
fn test_view_does_not_pull_until_iterated() {
    let pulls = Cell::new(0);
    let first = (1..=5).inspect(|_| pulls.set(pulls.get() + 1));
    let view = union(first, vec![2, 4]);
    assert_eq!(pulls.get(), 0);

    let mut engine = view.into_iter();
    assert_eq!(pulls.get(), 1);
    assert_eq!(engine.next(), Some(1));
    assert_eq!(pulls.get(), 2);
}

#[rstest]
fn test_only_consumed_prefix_is_pulled() {
    let pulls = Cell::new(0);
    let first = (0..1_000_000).inspect(|_| pulls.set(pulls.get() + 1));
    let second = (0..1_000_000).step_by(2);
    let odd: Vec<i32> = difference(first, second).into_iter().take(3).collect();
    assert_eq!(odd, vec![1, 3, 5]);
    assert_eq!(pulls.get(), 8);
}

#[rstest]
fn test_works_on_unbounded_inputs() {
    let multiples_of_three = (0_u64..).step_by(3);
    let multiples_of_five = (0_u64..).step_by(5);
    let result: Vec<u64> = intersection(multiples_of_three, multiples_of_five)
        .into_iter()
        .skip(1)
        .take(3)
        .collect();
    assert_eq!(result, vec![15, 30, 45]);
}

#[rstest]
fn test_fast_path_stops_comparing() {
    let comparisons = Cell::new(0);
    let counting = |left: &i32, right: &i32| {
        comparisons.set(comparisons.get() + 1);
        left.cmp(right)
    };
    let result: Vec<i32> = symmetric_difference_by([1], 2..100, counting).into_iter().collect();
    assert_eq!(result.len(), 99);
    assert_eq!(comparisons.get(), 1);
}

// =============================================================================
// Restart
// =============================================================================

#[rstest]
fn test_view_restarts_over_borrowed_vectors() {
    let first = vec![1, 2, 3, 5, 8];
    let second = vec![2, 3, 4];
    let view = intersection(&first, &second);
    let once: Vec<&i32> = view.iter().collect();
    let twice: Vec<&i32> = view.iter().collect();
    assert_eq!(once, vec![&2, &3]);
    assert_eq!(once, twice);
}

#[rstest]
fn test_view_restarts_over_cloneable_iterators() {
    let view = difference(1..10, (0..10).step_by(3));
    assert_eq!(view.iter().collect::<Vec<_>>(), vec![1, 2, 4, 5, 7, 8]);
    assert_eq!(view.iter().count(), 6);
}

#[rstest]
fn test_engine_clones_resume_independently() {
    let mut engine = union(vec![1, 3, 5], vec![2, 4]).into_iter();
    engine.advance();
    let snapshot = engine.clone();
    assert_eq!(engine.by_ref().collect::<Vec<_>>(), vec![2, 3, 4, 5]);
    assert_eq!(snapshot.collect::<Vec<_>>(), vec![2, 3, 4, 5]);
}

// =============================================================================
// Positional Interface
// =============================================================================

#[rstest]
fn test_union_sources_follow_merge() {
    let mut engine = union([1, 4], [2, 4, 6]).into_iter();
    let mut trail = Vec::new();
    while !engine.is_end() {
        trail.push((engine.source(), *engine.current().map(Either::into_inner).unwrap()));
        engine.advance();
    }
    assert_eq!(
        trail,
        vec![
            (UnionSource::First, 1),
            (UnionSource::Second, 2),
            (UnionSource::First, 4),
            (UnionSource::Second, 6),
        ]
    );
}

#[rstest]
fn test_symmetric_difference_sources_follow_merge() {
    let mut engine = symmetric_difference([1, 3], [3, 5, 7]).into_iter();
    let mut sources = Vec::new();
    while !engine.is_end() {
        sources.push(engine.source());
        engine.advance();
    }
    assert_eq!(
        sources,
        vec![
            SymmetricSource::First,
            SymmetricSource::OnlySecond,
            SymmetricSource::OnlySecond,
        ]
    );
}

#[rstest]
fn test_positions_compare_by_operation() {
    let first = [1, 2, 3];
    let second = [1, 3];

    let intersection_engine = intersection(&first, &second).into_iter();
    let mut advanced = intersection_engine.clone();
    assert_eq!(intersection_engine.position(), MergePosition { first: 0, second: 0 });
    advanced.advance();
    assert!(intersection_engine != advanced);
    assert_eq!(advanced.position(), MergePosition { first: 2, second: 1 });

    let union_engine = union(&first, &second).into_iter();
    let mut advanced = union_engine.clone();
    advanced.advance();
    assert!(union_engine != advanced);
    assert_eq!(advanced.position(), MergePosition { first: 1, second: 1 });
}

#[rstest]
fn test_try_methods_report_past_the_end() {
    let mut engine = symmetric_difference([1], [1]).into_iter();
    assert!(engine.is_end());
    let error = engine.try_advance().unwrap_err();
    assert_eq!(error.operation(), "SymmetricDifference");
    assert_eq!(
        error.to_string(),
        "SymmetricDifference::advance: position is past the end of the sequence"
    );
    assert!(engine.try_current().is_err());
}

#[rstest]
#[should_panic(expected = "Intersection::advance")]
fn test_advance_past_end_panics() {
    let mut engine = intersection([1, 2], [3]).into_iter();
    engine.advance();
}

// =============================================================================
// Relations and Heterogeneous Inputs
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
struct Account {
    id: u32,
    owner: &'static str,
}

#[rstest]
fn test_heterogeneous_difference_by_closure() {
    let accounts = [
        Account { id: 1, owner: "ann" },
        Account { id: 2, owner: "bob" },
        Account { id: 5, owner: "eve" },
    ];
    let closed = [2_u64, 3];
    let open: Vec<&str> = difference_by(&accounts, &closed, |account: &&Account, id: &&u64| {
        u64::from(account.id).cmp(*id)
    })
    .into_iter()
    .map(|account| account.owner)
    .collect();
    assert_eq!(open, vec!["ann", "eve"]);
}

#[rstest]
fn test_union_either_keeps_both_types() {
    let accounts = [Account { id: 1, owner: "ann" }, Account { id: 4, owner: "dan" }];
    let pending = [2_u32, 4];
    let merged: Vec<Either<u32, u32>> = union_either_by(
        accounts.iter(),
        pending.iter(),
        |account: &&Account, id: &&u32| account.id.cmp(*id),
    )
    .into_iter()
    .map(|element| element.map_left(|account| account.id).map_right(|id| *id))
    .collect();
    assert_eq!(
        merged,
        vec![Either::Left(1), Either::Right(2), Either::Left(4)]
    );
}

#[rstest]
fn test_less_than_predicate_relation() {
    let by_length = ByLess::new(|left: &&str, right: &&str| left.len() < right.len());
    let result: Vec<&str> = union_by(["a", "ccc"], ["bb", "zzz"], by_length)
        .into_iter()
        .collect();
    assert_eq!(result, vec!["a", "bb", "ccc"]);
}

#[rstest]
fn test_natural_order_treats_nan_as_equivalent() {
    let result: Vec<f64> = intersection([1.0, f64::NAN], [f64::NAN]).into_iter().collect();
    assert_eq!(result, vec![1.0]);
}

#[rstest]
fn test_methods_on_iterators() {
    let result: Vec<char> = "acegi"
        .chars()
        .set_symmetric_difference("abc".chars())
        .collect();
    assert_eq!(result, vec!['b', 'e', 'g', 'i']);
}
