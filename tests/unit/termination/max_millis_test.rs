use super::*;
use crate::helpers::evolution::create_scalar_state;

#[test]
fn can_terminate_with_zero_budget() {
    let state = create_scalar_state(0);
    let termination = MaxMillis::new(0);

    assert!(termination.is_termination(&state));
    assert_eq!(termination.estimate(&state), 1.);
}

#[test]
fn can_continue_within_generous_budget() {
    let state = create_scalar_state(0);
    let termination = MaxMillis::new(60_000);

    assert!(!termination.is_termination(&state));
    assert!(termination.estimate(&state) < 1.);
}

#[test]
fn can_terminate_once_budget_elapsed() {
    let state = create_scalar_state(0);
    let termination = MaxMillis::new(5);

    std::thread::sleep(std::time::Duration::from_millis(10));

    assert!(termination.is_termination(&state));
}
