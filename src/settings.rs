//! Settings for the integrator

use bon::Builder;

use crate::{Float, error::Error};

#[derive(Builder, Clone, Debug, PartialEq)]
/// Settings for the integrator
///
/// # Example
///
/// ```
/// use rkck::Settings;
///
/// let settings = Settings::builder()
///     .tol(1e-6)
///     .dt_max_mag(0.5)
///     .max_increase_factor(2.0)
///     .build();
/// assert_eq!(settings.max_decrease_factor, 10.0);
/// ```
pub struct Settings {
    /// Error tolerance. A step is accepted when the reduced error estimate is
    /// strictly below this value. Default is 1e-8.
    #[builder(default = 1e-8)]
    pub tol: Float,
    /// Safety factor in step-size prediction. Default is 0.9.
    #[builder(default = 0.9)]
    pub safety_factor: Float,
    /// Largest factor by which the step size may grow from one step to the next.
    #[builder(default = 10.0)]
    pub max_increase_factor: Float,
    /// Largest factor by which the step size may shrink, per retry and per step.
    /// Must be greater than 1 so that every retry makes progress.
    #[builder(default = 10.0)]
    pub max_decrease_factor: Float,
    /// Minimum step size magnitude. Zero leaves the step size unbounded below.
    #[builder(default = 0.0)]
    pub dt_min_mag: Float,
    /// Maximum step size magnitude. `None` leaves the step size unbounded above.
    pub dt_max_mag: Option<Float>,
    /// Emit diagnostics when the step size is clamped. Default is true.
    #[builder(default = true)]
    pub verbose: bool,
    /// Number of diagnostics emitted before further output is silenced.
    #[builder(default = 10)]
    pub max_logs: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Settings {
    /// Check the settings and normalize the step size bounds to magnitudes.
    pub(crate) fn validated(mut self) -> Result<Self, Error> {
        if !(self.tol.is_finite() && self.tol > 0.0) {
            return Err(Error::ToleranceOutOfRange(self.tol));
        }
        if !(self.safety_factor > 1e-4 && self.safety_factor < 1.0) {
            return Err(Error::SafetyFactorOutOfRange(self.safety_factor));
        }
        if !(self.max_increase_factor.is_finite() && self.max_increase_factor >= 1.0) {
            return Err(Error::IncreaseFactorOutOfRange(self.max_increase_factor));
        }
        if !(self.max_decrease_factor.is_finite() && self.max_decrease_factor > 1.0) {
            return Err(Error::DecreaseFactorOutOfRange(self.max_decrease_factor));
        }

        self.dt_min_mag = self.dt_min_mag.abs();
        self.dt_max_mag = self.dt_max_mag.map(Float::abs);
        let upper = self.dt_max_mag.unwrap_or(Float::INFINITY);
        if !self.dt_min_mag.is_finite() || upper == 0.0 || self.dt_min_mag > upper {
            return Err(Error::InvalidStepBounds(self.dt_min_mag, upper));
        }

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let s = Settings::default();
        assert_eq!(s.tol, 1e-8);
        assert_eq!(s.safety_factor, 0.9);
        assert_eq!(s.max_increase_factor, 10.0);
        assert_eq!(s.max_decrease_factor, 10.0);
        assert_eq!(s.dt_min_mag, 0.0);
        assert_eq!(s.dt_max_mag, None);
        assert!(s.verbose);
        assert_eq!(s.max_logs, 10);
    }

    #[test]
    fn bounds_are_stored_as_magnitudes() {
        let s = Settings::builder()
            .dt_min_mag(-1e-4)
            .dt_max_mag(-2.0)
            .build()
            .validated()
            .unwrap();
        assert_eq!(s.dt_min_mag, 1e-4);
        assert_eq!(s.dt_max_mag, Some(2.0));
    }

    #[test]
    fn rejects_bad_values() {
        let cases = [
            (Settings::builder().tol(0.0).build(), Error::ToleranceOutOfRange(0.0)),
            (Settings::builder().safety_factor(1.5).build(), Error::SafetyFactorOutOfRange(1.5)),
            (Settings::builder().max_increase_factor(0.5).build(), Error::IncreaseFactorOutOfRange(0.5)),
            (Settings::builder().max_decrease_factor(0.0).build(), Error::DecreaseFactorOutOfRange(0.0)),
            (Settings::builder().max_decrease_factor(1.0).build(), Error::DecreaseFactorOutOfRange(1.0)),
            (
                Settings::builder().dt_min_mag(1.0).dt_max_mag(0.5).build(),
                Error::InvalidStepBounds(1.0, 0.5),
            ),
            (Settings::builder().dt_max_mag(0.0).build(), Error::InvalidStepBounds(0.0, 0.0)),
        ];
        for (settings, expected) in cases {
            assert_eq!(settings.validated().unwrap_err(), expected);
        }
    }

    #[test]
    fn nan_tolerance_is_rejected() {
        let err = Settings::builder().tol(Float::NAN).build().validated().unwrap_err();
        assert!(matches!(err, Error::ToleranceOutOfRange(v) if v.is_nan()));
    }
}
