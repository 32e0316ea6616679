//! Errors for the integrator

use thiserror::Error;

use crate::Float;

/// Errors returned by [`Integrator`](crate::Integrator) construction and stepping.
///
/// The first group is returned by [`Integrator::new`](crate::Integrator::new)
/// when the initial conditions or [`Settings`](crate::Settings) are unusable.
/// `NonFiniteError` and `StepSizeUnderflow` are fatal stepping conditions: the
/// step is abandoned and the integrator keeps the state it had before the call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("step size dt must be finite and non-zero (got {0})")]
    InvalidStepSize(Float),
    #[error("initial value of the independent variable must be finite (got {0})")]
    InvalidInitialTime(Float),
    #[error("tol must be finite and positive (got {0})")]
    ToleranceOutOfRange(Float),
    #[error("safety_factor must be in (1e-4, 1.0) (got {0})")]
    SafetyFactorOutOfRange(Float),
    #[error("max_increase_factor must be finite and >= 1 (got {0})")]
    IncreaseFactorOutOfRange(Float),
    #[error("max_decrease_factor must be finite and > 1 (got {0})")]
    DecreaseFactorOutOfRange(Float),
    #[error("step size bounds must satisfy 0 <= dt_min_mag <= dt_max_mag with dt_max_mag > 0 (got {0}, {1})")]
    InvalidStepBounds(Float, Float),
    #[error("non-finite error estimate encountered while integrating at t = {t} with dt = {dt}")]
    NonFiniteError { t: Float, dt: Float },
    #[error("step size {dt} is too small to advance t = {t}")]
    StepSizeUnderflow { t: Float, dt: Float },
}

impl Error {
    /// True for conditions raised while stepping that abandon the step.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::NonFiniteError { .. } | Error::StepSizeUnderflow { .. }
        )
    }
}
