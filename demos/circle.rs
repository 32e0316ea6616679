//! # Example: Circle
//!
//! Rotate a point around the unit circle once, printing every accepted step.
//!
//! Equations:
//! dy0/dt = -y1
//! dy1/dt = y0
//!
//! Initial condition: y(0) = (1, 0)
//!

use rkck::prelude::*;
use std::f64::consts::PI;

fn main() -> Result<(), Error> {
    let circle = |_t: Float, y: &[Float], dydt: &mut [Float]| {
        dydt[0] = -y[1];
        dydt[1] = y[0];
    };
    let settings = Settings::builder().tol(1e-10).build();
    let mut integrator = Integrator::new([1.0, 0.0], circle, 0.0, 0.1, settings)?
        // RMS error over both components instead of the maximum
        .with_norm(RmsNorm::new(2));

    let tend = 2.0 * PI;
    while integrator.step(Some(tend))? {
        let y = integrator.y();
        println!(
            "t = {:>8.5}, y = [{:>9.6}, {:>9.6}], radius - 1 = {:+e}",
            integrator.t(),
            y[0],
            y[1],
            y[0].hypot(y[1]) - 1.0
        );
    }

    let (t, y) = integrator.into_state();
    println!("Final state: t = {:.5}, y = {:?}", t, y);
    Ok(())
}
