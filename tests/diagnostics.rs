use rkck::prelude::*;

mod common;
use common::{Constant, Jittery};

const FORCED: &str = "rkck::step(): minimum stepsize reached.";
const SILENCED: &str = "rkck: too many warnings. Silencing further output";

#[test]
fn clamping_to_maximum_is_reported_once() {
    let settings = Settings::builder().dt_max_mag(2.0).build();
    let mut integrator = Integrator::new([0.0], Constant(1.0), 0.0, 1e4, settings)
        .unwrap()
        .with_diagnostics(Vec::<String>::new());
    integrator.steps(3, None).unwrap();

    // The stored step is clamped too, so later steps need no clamping
    assert_eq!(
        integrator.diagnostics(),
        &vec!["rkck::step(): step greater than maximum stepsize requested. dt magnitude has been limited.".to_string()]
    );
}

#[test]
fn clamping_to_minimum_is_reported() {
    let settings = Settings::builder().dt_min_mag(0.5).build();
    let mut integrator = Integrator::new([0.0], Constant(1.0), 0.0, 0.01, settings)
        .unwrap()
        .with_diagnostics(Vec::<String>::new());
    integrator.step(None).unwrap();

    assert_eq!(integrator.t(), 0.5);
    assert_eq!(
        integrator.diagnostics(),
        &vec!["rkck::step(): step smaller than minimum stepsize requested. dt magnitude has been limited.".to_string()]
    );
}

#[test]
fn forced_steps_are_rate_limited() {
    let settings = Settings::builder().dt_min_mag(1e-4).max_logs(3).build();
    let mut integrator = Integrator::new([0.0], Jittery, 0.0, 1.0, settings)
        .unwrap()
        .with_diagnostics(Vec::<String>::new());
    integrator.steps(6, None).unwrap();

    assert_eq!(integrator.stats().nforced, 6);
    assert_eq!(integrator.diagnostics(), &vec![FORCED, FORCED, FORCED, SILENCED]);
}

#[test]
fn quiet_integrator_reports_nothing() {
    let settings = Settings::builder().dt_min_mag(1e-4).verbose(false).build();
    let mut integrator = Integrator::new([0.0], Jittery, 0.0, 1.0, settings)
        .unwrap()
        .with_diagnostics(Vec::<String>::new());
    integrator.steps(6, None).unwrap();

    assert_eq!(integrator.stats().nforced, 6);
    assert!(integrator.diagnostics().is_empty());
}

#[test]
fn each_integrator_has_its_own_budget() {
    let settings = Settings::builder().dt_min_mag(1e-4).max_logs(2).build();
    let run = || {
        let mut integrator = Integrator::new([0.0], Jittery, 0.0, 1.0, settings.clone())
            .unwrap()
            .with_diagnostics(Vec::<String>::new());
        integrator.steps(2, None).unwrap();
        integrator.diagnostics().clone()
    };

    assert_eq!(run(), vec![FORCED, FORCED]);
    assert_eq!(run(), vec![FORCED, FORCED]);
}
