use super::*;
use crate::helpers::evolution::create_scalar_state;

parameterized_test! {can_detect_termination, (iterations, limit, expected), {
    can_detect_termination_impl(iterations, limit, expected);
}}

can_detect_termination! {
    case_01_over: (11, 10, true),
    case_02_under: (9, 10, false),
    case_03_exact: (10, 10, true),
    case_04_zero_budget: (0, 0, true),
}

fn can_detect_termination_impl(iterations: usize, limit: usize, expected: bool) {
    let state = create_scalar_state(iterations);

    assert_eq!(MaxIteration::new(limit).is_termination(&state), expected);
}

parameterized_test! {can_estimate_progress, (iterations, limit, expected), {
    can_estimate_progress_impl(iterations, limit, expected);
}}

can_estimate_progress! {
    case_01_start: (0, 10, 0.),
    case_02_half: (5, 10, 0.5),
    case_03_capped: (20, 10, 1.),
    case_04_zero_budget: (0, 0, 1.),
}

fn can_estimate_progress_impl(iterations: usize, limit: usize, expected: Float) {
    let state = create_scalar_state(iterations);

    assert_eq!(MaxIteration::new(limit).estimate(&state), expected);
}
