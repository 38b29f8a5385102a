use super::*;
use crate::helpers::evolution::*;
use crate::helpers::utils::create_test_environment;
use crate::termination::MaxIteration;
use crate::utils::Float;

#[test]
fn can_build_initial_population() {
    let solver = create_scalar_solver(vec![5., 3., 4.], 3, 3, -1.).expect("cannot build solver");
    let problem = create_scalar_problem(|solution| Ok(*solution));
    let environment = create_test_environment();

    let state = solver.init(problem, &environment).expect("cannot init solver");

    assert_eq!(state.n_of_iterations(), 0);
    assert_eq!(state.n_of_births(), 3);
    assert_eq!(state.n_of_quality_evaluations(), 3);
    assert_eq!(state.population().size(), 3);
    assert_eq!(solver.solutions(&state), vec![3.]);
}

#[test]
fn can_improve_monotonically_with_elitism() {
    let solver = create_scalar_solver(vec![10., 20.], 2, 2, -1.).expect("cannot build solver");
    let problem = create_scalar_problem(|solution| Ok(*solution));
    let environment = create_test_environment();

    let mut best_qualities = Vec::new();
    let solutions = solver
        .solve(problem, &environment, &MaxIteration::new(5), &mut |state| {
            let best = state.population().firsts().next().expect("population is not empty");
            best_qualities.push(*best.quality());
        })
        .expect("cannot solve");

    assert_eq!(best_qualities.len(), 6);
    assert!(best_qualities.windows(2).all(|pair| pair[1] <= pair[0]));
    assert!(solutions.iter().all(|solution| *solution <= 10.));
}

#[test]
fn can_stop_before_first_update_with_zero_budget() {
    let solver = create_scalar_solver(vec![1.], 1, 1, -1.).expect("cannot build solver");
    let problem = create_scalar_problem(|solution| Ok(*solution));
    let environment = create_test_environment();

    let mut snapshots = 0;
    let solutions = solver
        .solve(problem, &environment, &MaxIteration::new(0), &mut |_| snapshots += 1)
        .expect("cannot solve");

    assert_eq!(snapshots, 1);
    assert_eq!(solutions, vec![1.]);
}

#[test]
fn can_propagate_evaluation_failure() {
    let solver = create_scalar_solver(vec![1.], 1, 1, -1.).expect("cannot build solver");
    let problem = create_scalar_problem(|_| Err("evaluation failed".into()));
    let environment = create_test_environment();

    let result = solver.init(problem, &environment);

    assert_eq!(result.err().map(|err| err.to_string()), Some("evaluation failed".to_string()));
}

#[test]
fn can_track_births_across_iterations() {
    let solver = create_scalar_solver(vec![3., 4.], 2, 2, -1.).expect("cannot build solver");
    let problem = create_scalar_problem(|solution| Ok(*solution));
    let environment = create_test_environment();

    let state = solver.init(problem.clone(), &environment).expect("cannot init solver");
    let state = solver.update(problem.clone(), &environment, state).expect("cannot update solver");
    let state = solver.update(problem, &environment, state).expect("cannot update solver");

    assert_eq!(state.n_of_iterations(), 2);
    assert_eq!(state.n_of_births(), 6);
    assert_eq!(state.n_of_quality_evaluations(), 6);
    assert_eq!(state.population().size(), 2);
}

#[test]
fn can_charge_remap_evaluations() {
    let solver = PopulationSolver::builder()
        .with_population_size(2)
        .with_offspring_size(2)
        .with_remap(true)
        .with_factory(Arc::new(create_fixed_factory(vec![3., 4.])))
        .with_mapper(Arc::new(create_identity_mapper()))
        .with_variation(Arc::new(OffsetVariation { offset: -1. }), 1)
        .build()
        .expect("cannot build solver");
    let problem = create_scalar_problem(|solution| Ok(*solution));
    let environment = create_test_environment();

    let state = solver.init(problem.clone(), &environment).expect("cannot init solver");
    let state = solver.update(problem, &environment, state).expect("cannot update solver");

    // two offspring plus two re-evaluated survivors
    assert_eq!(state.n_of_births(), 4);
    assert_eq!(state.n_of_quality_evaluations(), 6);
}

parameterized_test! {can_reject_invalid_configuration, (population_size, with_factory, with_mapper, with_variation, weight), {
    can_reject_invalid_configuration_impl(population_size, with_factory, with_mapper, with_variation, weight);
}}

can_reject_invalid_configuration! {
    case_01_zero_population: (0, true, true, true, 1),
    case_02_no_factory: (2, false, true, true, 1),
    case_03_no_mapper: (2, true, false, true, 1),
    case_04_no_variation: (2, true, true, false, 1),
    case_05_zero_weight: (2, true, true, true, 0),
}

fn can_reject_invalid_configuration_impl(
    population_size: usize,
    with_factory: bool,
    with_mapper: bool,
    with_variation: bool,
    weight: usize,
) {
    let mut builder = PopulationSolver::<Float, Float, Float>::builder().with_population_size(population_size);

    if with_factory {
        builder = builder.with_factory(Arc::new(create_fixed_factory(vec![1.])));
    }
    if with_mapper {
        builder = builder.with_mapper(Arc::new(create_identity_mapper()));
    }
    if with_variation {
        builder = builder.with_variation(Arc::new(OffsetVariation { offset: 0. }), weight);
    }

    assert!(builder.build().is_err());
}
