//! Example demonstrating step-by-step integration of a harmonic oscillator
//! over one period.

use rkck::prelude::*;
use std::f64::consts::PI;

struct HarmonicOscillator;

impl ODE for HarmonicOscillator {
    fn ode(&mut self, _t: Float, y: &[Float], dydt: &mut [Float]) {
        dydt[0] = y[1];
        dydt[1] = -y[0];
    }
}

fn main() {
    let t0 = 0.0;
    let y0 = [1.0, 0.0];
    let tend = 2.0 * PI;
    let settings = Settings::builder().tol(1e-8).build();

    let mut integrator = match Integrator::new(y0, HarmonicOscillator, t0, 0.1, settings) {
        Ok(integrator) => integrator,
        Err(err) => {
            eprintln!("Invalid setup: {}", err);
            return;
        }
    };

    loop {
        match integrator.step(Some(tend)) {
            Ok(more) => {
                println!(
                    "t = {:>8.5}, dt = {:>8.5}, y = {:?}",
                    integrator.t(),
                    integrator.dt(),
                    integrator.y()
                );
                if !more {
                    break;
                }
            }
            Err(err) => {
                eprintln!("Integration failed: {}", err);
                return;
            }
        }
    }

    let stats = integrator.stats();
    println!("Final status: {:?}", integrator.status());
    println!("Error after one period: {:e}", (integrator.y()[0] - 1.0).abs());
    println!("Number of function evaluations: {}", stats.nfev);
    println!("Number of accepted steps: {}", stats.naccpt);
    println!("Number of rejected steps: {}", stats.nrejct);
}
