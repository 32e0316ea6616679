//! Error norms used to reduce the per-component error estimate to a scalar.

use crate::Float;

/// Guards the default error scale against division by zero.
const SCALE_FLOOR: Float = 1e-32;

/// Strategy for turning per-component error estimates into one scalar.
///
/// The integrator calls [`scale`](ErrorNorm::scale) once per component at the
/// start of each step, then folds the scaled estimates of every trial step
/// with [`reduce`](ErrorNorm::reduce) starting from zero, and finally passes
/// the result through [`post`](ErrorNorm::post). The step is accepted when
/// the returned value is below `tol`.
///
/// Every method has a default, so an implementation only overrides what it
/// needs. The defaults give a mixed relative/absolute infinity norm.
///
/// # Example
///
/// ```
/// use rkck::{ErrorNorm, Float};
///
/// /// Pure absolute error.
/// struct Absolute;
///
/// impl ErrorNorm for Absolute {
///     fn scale(&self, _i: usize, _dt: Float, _y: Float, _dydt: Float) -> Float {
///         1.0
///     }
/// }
/// ```
pub trait ErrorNorm {
    /// Normalization of component `i` given the trial step `dt`, the current
    /// state `y` and its derivative `dydt`.
    fn scale(&self, _i: usize, dt: Float, y: Float, dydt: Float) -> Float {
        y.abs() + (dt * dydt).abs() + SCALE_FLOOR
    }

    /// Fold the scaled estimate of component `i` into `accumulated`.
    ///
    /// A NaN estimate must survive the fold so the integrator can detect it.
    fn reduce(&self, _i: usize, accumulated: Float, estimate: Float) -> Float {
        let e = estimate.abs();
        if e > accumulated || e.is_nan() { e } else { accumulated }
    }

    /// Final transformation of the folded error.
    fn post(&self, accumulated: Float) -> Float {
        accumulated
    }
}

/// Maximum of the scaled component errors. This is the default norm.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxNorm;

impl ErrorNorm for MaxNorm {}

/// Root-mean-square of the scaled component errors.
#[derive(Debug, Clone, Copy)]
pub struct RmsNorm {
    n: usize,
}

impl RmsNorm {
    /// Norm for a state of dimension `n`.
    pub fn new(n: usize) -> Self {
        Self { n }
    }
}

impl ErrorNorm for RmsNorm {
    fn reduce(&self, _i: usize, accumulated: Float, estimate: Float) -> Float {
        accumulated + estimate * estimate
    }

    fn post(&self, accumulated: Float) -> Float {
        if self.n == 0 {
            return accumulated;
        }
        (accumulated / self.n as Float).sqrt()
    }
}
