#![allow(dead_code)]

use rkck::prelude::*;

/// Rotation in the plane: `y0' = -y1`, `y1' = y0`.
pub struct Circle;

impl ODE for Circle {
    fn ode(&mut self, _t: Float, y: &[Float], dydt: &mut [Float]) {
        dydt[0] = -y[1];
        dydt[1] = y[0];
    }
}

/// Simple harmonic oscillator: `y0' = y1`, `y1' = -y0`.
pub struct SHO;

impl ODE for SHO {
    fn ode(&mut self, _t: Float, y: &[Float], dydt: &mut [Float]) {
        dydt[0] = y[1];
        dydt[1] = -y[0];
    }
}

/// Every component grows at the same constant rate.
pub struct Constant(pub Float);

impl ODE for Constant {
    fn ode(&mut self, _t: Float, _y: &[Float], dydt: &mut [Float]) {
        for d in dydt.iter_mut() {
            *d = self.0;
        }
    }
}

/// Oscillates so fast in `y` that no reasonable step meets a tight tolerance.
pub struct Jittery;

impl ODE for Jittery {
    fn ode(&mut self, _t: Float, y: &[Float], dydt: &mut [Float]) {
        dydt[0] = (1e5 * y[0]).cos();
    }
}

/// `y0' = y0^4`, `y1' = 0`. Blows up in finite time.
pub struct Quartic;

impl ODE for Quartic {
    fn ode(&mut self, _t: Float, y: &[Float], dydt: &mut [Float]) {
        dydt[0] = y[0].powi(4);
        dydt[1] = 0.0;
    }
}

pub fn quiet() -> Settings {
    Settings::builder().verbose(false).build()
}
