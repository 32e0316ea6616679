//! # Example: Oscillating quadrature
//!
//! Integrate cos(1/t) / t from 0.01 to 1. The integrand oscillates ever
//! faster towards the left end, which makes it a good stress test for the
//! step size controller. The exact value is Ci(100) - Ci(1).
//!

use rkck::prelude::*;

const EXACT: Float = -0.342_552_748_043_592_65;

fn main() -> Result<(), Error> {
    let mut evaluations = 0usize;
    let integrand = |t: Float, _y: &[Float], dydt: &mut [Float]| {
        evaluations += 1;
        dydt[0] = (1.0 / t).cos() / t;
    };
    let settings = Settings::builder()
        .tol(5e-8)
        .max_increase_factor(2.0)
        .build();
    let mut integrator = Integrator::new([0.0], integrand, 0.01, 1e-8, settings)?;

    while integrator.step(Some(1.0))? {}

    let stats = integrator.stats();
    let (t, y) = integrator.into_state();
    println!("Integral up to t = {}: {:.12}", t, y[0]);
    println!("Absolute error: {:e}", (y[0] - EXACT).abs());
    println!(
        "Function evaluations: {} ({} accepted, {} rejected)",
        evaluations, stats.naccpt, stats.nrejct
    );
    Ok(())
}
