//! # Example: Error function
//!
//! Integrate a Gaussian pulse across a wide interval. The step size has to
//! shrink to resolve the pulse and grow again on the flat tails, so the
//! growth rate and maximum step are bounded.
//!
//! Equation:
//! dy/dt = 2 / sqrt(pi) * exp(-t^2)
//!
//! Initial condition: y(-10) = -1, so that y(t) = erf(t)
//!

use rkck::prelude::*;
use std::f64::consts::PI;

fn main() -> Result<(), Error> {
    let gaussian = |t: Float, _y: &[Float], dydt: &mut [Float]| {
        dydt[0] = 2.0 / PI.sqrt() * (-t * t).exp();
    };
    let settings = Settings::builder()
        .tol(1e-5)
        .dt_max_mag(0.8)
        .max_increase_factor(2.0)
        .build();
    let mut integrator = Integrator::new([-1.0], gaussian, -10.0, 1e-4, settings)?;

    let mut samples = vec![(integrator.t(), integrator.y()[0])];
    while integrator.step(Some(10.0))? {
        samples.push((integrator.t(), integrator.y()[0]));
    }
    samples.push((integrator.t(), integrator.y()[0]));

    for (t, y) in &samples {
        println!("t = {:>9.5}, erf(t) = {:>9.6}", t, y);
    }
    println!("erf(10) - erf(-10) = {:.7} (exact 2)", integrator.y()[0] + 1.0);
    println!("Number of function evaluations: {}", integrator.stats().nfev);
    Ok(())
}
