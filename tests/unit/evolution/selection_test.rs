use super::*;
use crate::helpers::evolution::{create_natural_collection, natural_comparator};
use crate::helpers::utils::{create_test_random, FakeRandom};
use crate::population::from_total_order;

#[test]
fn can_select_best_and_worst() {
    let collection = create_natural_collection(vec![3, 1, 2]);
    let random = create_test_random();

    assert_eq!(Best.select(&collection, random.as_ref()), vec![1]);
    assert_eq!(Worst.select(&collection, random.as_ref()), vec![3]);
}

#[test]
fn can_select_nothing_from_empty_population() {
    let collection = PartiallyOrderedCollection::new(natural_comparator());
    let random = create_test_random();

    assert!(Best.select(&collection, random.as_ref()).is_empty());
    assert!(Worst.select(&collection, random.as_ref()).is_empty());
    assert!(RandomOne.select(&collection, random.as_ref()).is_empty());
    assert!(Tournament::new(2).select(&collection, random.as_ref()).is_empty());
}

#[test]
fn can_select_random_individual_by_index() {
    let collection = create_natural_collection(vec![3, 1, 2]);
    let random = FakeRandom::new(vec![2], vec![]);

    assert_eq!(RandomOne.select(&collection, &random), vec![2]);
}

#[test]
fn can_pick_tournament_winner_with_comparator() {
    let collection = create_natural_collection(vec![3, 1, 2]);
    // insertion order is [3, 1, 2]: candidates at indices 0 and 2, then 2 beats 3
    let random = FakeRandom::new(vec![0, 2], vec![]);

    assert_eq!(Tournament::new(2).select(&collection, &random), vec![2]);
}

#[test]
fn can_select_whole_population_and_extremes() {
    let collection = create_natural_collection(vec![2, 1, 1, 3]);
    let random = create_test_random();

    assert_eq!(Complete.select(&collection, random.as_ref()).len(), 4);
    assert_eq!(Firsts.select(&collection, random.as_ref()), vec![1, 1]);
    assert_eq!(Lasts.select(&collection, random.as_ref()), vec![3]);
}

parameterized_test! {can_select_fractions, (fraction, expected_top, expected_bottom), {
    can_select_fractions_impl(fraction, expected_top, expected_bottom);
}}

can_select_fractions! {
    case_01_none: (0., vec![], vec![]),
    case_02_quarter: (0.25, vec![1], vec![4]),
    case_03_half: (0.5, vec![1, 2], vec![3, 4]),
    case_04_rounded_up: (0.6, vec![1, 2, 3], vec![2, 3, 4]),
    case_05_all: (1., vec![1, 2, 3, 4], vec![1, 2, 3, 4]),
}

fn can_select_fractions_impl(fraction: Float, expected_top: Vec<i32>, expected_bottom: Vec<i32>) {
    let collection = create_natural_collection(vec![4, 2, 3, 1]);
    let random = create_test_random();
    let order: TotalOrderFn<i32> = Arc::new(|left: &i32, right: &i32| left.cmp(right));

    let top = TopFraction::new(fraction, order.clone()).select(&collection, random.as_ref());
    let bottom = BottomFraction::new(fraction, order).select(&collection, random.as_ref());

    assert_eq!(top, expected_top);
    assert_eq!(bottom, expected_bottom);
}

#[test]
fn can_union_selections_without_duplicates() {
    let comparator: Arc<dyn crate::population::PartialComparator<Arc<i32>>> =
        Arc::new(from_total_order(|left: &Arc<i32>, right: &Arc<i32>| left.cmp(right)));
    let collection = PartiallyOrderedCollection::from(vec![Arc::new(1), Arc::new(2)], comparator);
    let random = create_test_random();

    let union = Union::new(Arc::new(Firsts), Arc::new(Complete));
    let selected = union.select(&collection, random.as_ref());

    assert_eq!(selected.iter().map(|item| **item).collect::<Vec<_>>(), vec![1, 2]);
}
