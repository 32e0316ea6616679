//! User-supplied ODE system.

use crate::Float;

/// User-supplied ODE system.
///
/// Implement this trait for your problem to provide the right-hand side
/// function y' = f(t, y). The integrator repeatedly calls `ode` with the
/// independent variable `t` and a state `y` and expects you to fill `dydt`
/// with the derivative values. `dydt` is workspace owned by the integrator:
/// write every component and do not hold on to it.
///
/// Closures of the form `FnMut(Float, &[Float], &mut [Float])` implement
/// `ODE` directly.
///
/// # Example
///
/// ```
/// use rkck::{Float, ODE};
///
/// struct VanDerPol { eps: Float }
///
/// impl ODE for VanDerPol {
///     fn ode(&mut self, _t: Float, y: &[Float], dydt: &mut [Float]) {
///         dydt[0] = y[1];
///         dydt[1] = ((1.0 - y[0] * y[0]) * y[1] - y[0]) / self.eps;
///     }
/// }
/// ```
pub trait ODE {
    fn ode(&mut self, t: Float, y: &[Float], dydt: &mut [Float]);
}

impl<F> ODE for F
where
    F: FnMut(Float, &[Float], &mut [Float]),
{
    fn ode(&mut self, t: Float, y: &[Float], dydt: &mut [Float]) {
        self(t, y, dydt)
    }
}
