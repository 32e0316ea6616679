use approx::assert_relative_eq;
use rkck::prelude::*;

mod common;
use common::{Constant, Jittery, SHO, quiet};

#[test]
fn backward_integration_works() {
    let t0 = 2.0 * std::f64::consts::PI as Float;
    let mut integrator = Integrator::new([1.0, 0.0], SHO, t0, -0.1, quiet()).unwrap();
    while integrator.step(Some(0.0)).unwrap() {}

    assert!(integrator.t().abs() < 1e-12);
    assert!(integrator.dt() < 0.0);
    // y(t) = (cos t, -sin t) passes through (1, 0) again at t = 0
    assert!((integrator.y()[0] - 1.0).abs() < 1e-6);
    assert!(integrator.y()[1].abs() < 1e-6);
}

#[test]
fn forward_steps_stop_at_the_limit() {
    let mut integrator = Integrator::new([0.0], Constant(5.2), 1.0, 1.0, quiet()).unwrap();

    assert!(integrator.step(Some(3.0)).unwrap());
    assert_relative_eq!(integrator.t(), 2.0, epsilon = 1e-12);
    assert_relative_eq!(integrator.y()[0], 5.2, epsilon = 1e-10);

    assert!(!integrator.step(Some(3.0)).unwrap());
    assert_relative_eq!(integrator.t(), 3.0, epsilon = 1e-12);
    assert_relative_eq!(integrator.y()[0], 10.4, epsilon = 1e-10);

    // At the limit nothing happens
    let stats = integrator.stats();
    assert!(!integrator.step(Some(3.0)).unwrap());
    assert_eq!(integrator.stats(), stats);
    assert_relative_eq!(integrator.t(), 3.0, epsilon = 1e-12);
}

#[test]
fn backward_steps_stop_at_the_limit() {
    let mut integrator = Integrator::new([0.0], Constant(5.2), 3.0, -1.0, quiet()).unwrap();

    assert!(integrator.step(Some(1.0)).unwrap());
    assert_relative_eq!(integrator.t(), 2.0, epsilon = 1e-12);
    assert_relative_eq!(integrator.y()[0], -5.2, epsilon = 1e-10);

    assert!(!integrator.step(Some(1.0)).unwrap());
    assert_relative_eq!(integrator.t(), 1.0, epsilon = 1e-12);
    assert_relative_eq!(integrator.y()[0], -10.4, epsilon = 1e-10);
}

#[test]
fn without_a_limit_more_steps_are_always_needed() {
    let mut integrator = Integrator::new([0.0], Constant(1.0), 0.0, 1.0, quiet()).unwrap();
    for _ in 0..5 {
        assert!(integrator.step(None).unwrap());
    }
    assert_eq!(integrator.stats().naccpt, 5);
}

#[test]
fn steps_stops_early_at_the_limit() {
    let mut integrator = Integrator::new([0.0], Constant(1.0), 0.0, 1.0, quiet()).unwrap();
    assert!(!integrator.steps(100, Some(3.0)).unwrap());
    assert_relative_eq!(integrator.t(), 3.0, epsilon = 1e-12);

    let mut integrator = Integrator::new([0.0], Constant(1.0), 0.0, 1.0, quiet()).unwrap();
    assert!(integrator.steps(2, None).unwrap());
    assert_eq!(integrator.stats().naccpt, 2);
}

#[test]
fn minimum_step_is_forced_in_both_directions() {
    for dir in [1.0, -1.0] {
        let settings = Settings::builder().dt_min_mag(1e-4).verbose(false).build();
        let mut integrator = Integrator::new([0.0], Jittery, 0.0, dir, settings).unwrap();

        integrator.step(None).unwrap();
        assert_relative_eq!(integrator.t(), dir * 1e-4, epsilon = 1e-12);
        assert_eq!(integrator.status(), Status::MinStepForced);
        assert!(integrator.y()[0].is_finite());
        assert!(integrator.y()[0] != 0.0);

        integrator.step(None).unwrap();
        assert_relative_eq!(integrator.t(), dir * 2e-4, epsilon = 1e-12);
        assert_eq!(integrator.stats().nforced, 2);
    }
}

#[test]
fn maximum_step_is_enforced_in_both_directions() {
    for dir in [1.0, -1.0] {
        let settings = Settings::builder().dt_max_mag(2.0).verbose(false).build();
        let mut integrator = Integrator::new([0.0], Constant(1.0), 0.0, dir * 1e4, settings).unwrap();

        integrator.step(None).unwrap();
        assert_relative_eq!(integrator.t(), dir * 2.0, epsilon = 1e-12);
        assert!(integrator.dt().abs() <= 2.0);
        assert_eq!(integrator.dt().signum(), dir);

        integrator.step(None).unwrap();
        assert_relative_eq!(integrator.t(), dir * 4.0, epsilon = 1e-12);
    }
}

#[test]
fn taken_steps_stay_within_bounds() {
    let settings = Settings::builder()
        .dt_min_mag(1e-5)
        .dt_max_mag(1e-3)
        .verbose(false)
        .build();
    let mut integrator = Integrator::new([0.0], Jittery, 0.0, 1.0, settings).unwrap();

    let mut t = integrator.t();
    for _ in 0..50 {
        integrator.step(None).unwrap();
        let taken = integrator.t() - t;
        assert!(taken >= 1e-5 * (1.0 - 1e-9), "step {} below minimum", taken);
        assert!(taken <= 1e-3 * (1.0 + 1e-9), "step {} above maximum", taken);
        t = integrator.t();
    }
}

#[test]
fn limit_wins_over_minimum_step() {
    let settings = Settings::builder()
        .dt_min_mag(0.3)
        .dt_max_mag(0.3)
        .verbose(false)
        .build();
    let mut integrator = Integrator::new([0.0], Constant(1.0), 0.0, 0.3, settings).unwrap();

    let mut calls = 0;
    while integrator.step(Some(1.0)).unwrap() {
        assert!(integrator.t() <= 1.0 + 1e-12);
        calls += 1;
        assert!(calls < 10);
    }
    assert_eq!(integrator.stats().naccpt, 4);
    assert_relative_eq!(integrator.t(), 1.0, epsilon = 1e-12);
    assert_relative_eq!(integrator.y()[0], 1.0, epsilon = 1e-12);
}
