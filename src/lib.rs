//! An adaptive-step Runge-Kutta integrator for systems of first-order
//! ordinary differential equations, built on the embedded Cash-Karp 5(4) pair.
//!
//! The [`Integrator`] owns the solution vector and advances it one accepted
//! step at a time. Each step evaluates six stages, estimates the local
//! truncation error from the difference between the fifth- and fourth-order
//! solutions, and shrinks the trial step until the error falls below the
//! tolerance. The step size proposed for the next call grows or shrinks with
//! a power law of the error ratio.
//!
//! # Example
//!
//! ```
//! use rkck::prelude::*;
//!
//! // Unit circle: y0' = -y1, y1' = y0
//! let circle = |_t: Float, y: &[Float], dydt: &mut [Float]| {
//!     dydt[0] = -y[1];
//!     dydt[1] = y[0];
//! };
//!
//! let settings = Settings::builder().tol(1e-10).build();
//! let mut integrator = Integrator::new(vec![1.0, 0.0], circle, 0.0, 0.1, settings).unwrap();
//!
//! let tau = 2.0 * std::f64::consts::PI as Float;
//! while integrator.step(Some(tau)).unwrap() {}
//!
//! assert!((integrator.t() - tau).abs() < 1e-12);
//! assert!((integrator.y()[0] - 1.0).abs() < 1e-8);
//! ```

mod cash_karp;
mod control;
mod diagnostics;
mod error;
mod integrator;
mod norm;
mod ode;
mod settings;
mod status;
mod workspace;

pub mod prelude;

pub use diagnostics::{Diagnostics, Stderr};
pub use error::Error;
pub use integrator::Integrator;
pub use norm::{ErrorNorm, MaxNorm, RmsNorm};
pub use ode::ODE;
pub use settings::Settings;
pub use status::{Stats, Status};

/// Floating point type used for states, time and step sizes.
///
/// Double precision only: the default tolerance and the embedded error
/// weights need more resolution than `f32` offers.
pub type Float = f64;
