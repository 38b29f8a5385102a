use super::*;
use crate::utils::compare_floats_refs;
use crate::utils::Float;

fn create_order() -> QualityOrderFn<Float> {
    Arc::new(compare_floats_refs)
}

parameterized_test! {can_aggregate_qualities, (qualities, expected_first, expected_last, expected_median), {
    can_aggregate_qualities_impl(qualities, expected_first, expected_last, expected_median);
}}

can_aggregate_qualities! {
    case_01_single: (vec![5.], 5., 5., 5.),
    case_02_ordered: (vec![1., 2., 3.], 1., 3., 2.),
    case_03_unordered: (vec![3., 1., 2.], 1., 3., 2.),
    case_04_even_lower: (vec![4., 1., 3., 2.], 1., 4., 2.),
    case_05_duplicates: (vec![2., 2., 7.], 2., 7., 2.),
}

fn can_aggregate_qualities_impl(
    qualities: Vec<Float>,
    expected_first: Float,
    expected_last: Float,
    expected_median: Float,
) {
    let order = create_order();

    let first = FirstQuality::new(order.clone()).apply(qualities.clone());
    let last = LastQuality::new(order.clone()).apply(qualities.clone());
    let median = MedianQuality::new(order).apply(qualities);

    assert_eq!(first, Ok(expected_first));
    assert_eq!(last, Ok(expected_last));
    assert_eq!(median, Ok(expected_median));
}

#[test]
fn can_reject_empty_input() {
    let order = create_order();

    assert!(FirstQuality::new(order.clone()).apply(vec![]).is_err());
    assert!(LastQuality::new(order.clone()).apply(vec![]).is_err());
    assert!(MedianQuality::new(order).apply(vec![]).is_err());
}
