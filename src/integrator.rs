//! The adaptive Cash-Karp integrator.

use crate::{
    Float,
    cash_karp::{self, STAGE_EVALS},
    control,
    diagnostics::{Diagnostics, RateLimited, Stderr},
    error::Error,
    norm::{ErrorNorm, MaxNorm},
    ode::ODE,
    settings::Settings,
    status::{Stats, Status},
    workspace::Workspace,
};

/// Relative distance (in units of `dt`) at which a step request is a no-op.
const AT_LIMIT: Float = 1e-10;
/// Relative distance (in units of `dt`) below which the limit counts as reached.
const NEAR_LIMIT: Float = 1e-8;

/// Adaptive-step integrator for `y' = f(t, y)` using the Cash-Karp 5(4) pair.
///
/// The integrator owns the state vector `y`, the independent variable `t` and
/// the signed step size `dt` proposed for the next step. Each call to
/// [`step`](Integrator::step) takes exactly one accepted step, retrying
/// internally with smaller step sizes until the error estimate meets the
/// tolerance, and then proposes a new `dt`. The sign of `dt` sets the
/// direction of integration.
///
/// # Summary
/// - Implement [`ODE`] for your system or pass a closure.
/// - Configure tolerances and step size bounds through [`Settings`].
/// - Swap the error norm with [`with_norm`](Integrator::with_norm) and the
///   diagnostics destination with [`with_diagnostics`](Integrator::with_diagnostics).
/// - Drive the integration with [`step`](Integrator::step) or
///   [`steps`](Integrator::steps) and read back [`y`](Integrator::y),
///   [`t`](Integrator::t) and [`dt`](Integrator::dt).
///
/// When the step size reaches `dt_min_mag` before the tolerance is met the
/// step is taken anyway, a diagnostic is emitted and [`status`](Integrator::status)
/// reports [`Status::MinStepForced`]. A non-finite error estimate is fatal and
/// leaves the state untouched.
///
/// # Example
/// ```
/// use rkck::prelude::*;
///
/// // y' = -y
/// let decay = |_t: Float, y: &[Float], dydt: &mut [Float]| dydt[0] = -y[0];
///
/// let mut integrator = Integrator::new([1.0], decay, 0.0, 0.01, Settings::default())?;
/// integrator.steps(usize::MAX, Some(1.0))?;
///
/// assert!((integrator.t() - 1.0).abs() < 1e-12);
/// assert!((integrator.y()[0] - (-1.0 as Float).exp()).abs() < 1e-7);
/// # Ok::<(), rkck::Error>(())
/// ```
pub struct Integrator<F, E = MaxNorm, D = Stderr> {
    y: Vec<Float>,
    t: Float,
    dt: Float,
    f: F,
    norm: E,
    settings: Settings,
    ws: Workspace,
    log: RateLimited<D>,
    stats: Stats,
    status: Status,
}

impl<F: ODE> Integrator<F> {
    /// Create an integrator for the initial state `y0` at `t0` with initial
    /// step size `dt0`.
    ///
    /// Uses the default [`MaxNorm`] error norm and writes diagnostics to
    /// standard error.
    ///
    /// # Errors
    /// Returns an error when `dt0` is zero or not finite, `t0` is not finite,
    /// or the settings fail validation.
    pub fn new(
        y0: impl Into<Vec<Float>>,
        f: F,
        t0: Float,
        dt0: Float,
        settings: Settings,
    ) -> Result<Self, Error> {
        if !dt0.is_finite() || dt0 == 0.0 {
            return Err(Error::InvalidStepSize(dt0));
        }
        if !t0.is_finite() {
            return Err(Error::InvalidInitialTime(t0));
        }
        let settings = settings.validated()?;

        let y = y0.into();
        let ws = Workspace::new(y.len());
        let log = RateLimited::new(Stderr, settings.verbose, settings.max_logs);

        Ok(Self {
            y,
            t: t0,
            dt: dt0,
            f,
            norm: MaxNorm,
            settings,
            ws,
            log,
            stats: Stats::default(),
            status: Status::default(),
        })
    }
}

impl<F, E, D> Integrator<F, E, D>
where
    F: ODE,
    E: ErrorNorm,
    D: Diagnostics,
{
    /// Replace the error norm.
    pub fn with_norm<E2: ErrorNorm>(self, norm: E2) -> Integrator<F, E2, D> {
        Integrator {
            y: self.y,
            t: self.t,
            dt: self.dt,
            f: self.f,
            norm,
            settings: self.settings,
            ws: self.ws,
            log: self.log,
            stats: self.stats,
            status: self.status,
        }
    }

    /// Replace the diagnostics sink. The message budget starts over.
    pub fn with_diagnostics<D2: Diagnostics>(self, sink: D2) -> Integrator<F, E, D2> {
        let log = RateLimited::new(sink, self.settings.verbose, self.settings.max_logs);
        Integrator {
            y: self.y,
            t: self.t,
            dt: self.dt,
            f: self.f,
            norm: self.norm,
            settings: self.settings,
            ws: self.ws,
            log,
            stats: self.stats,
            status: self.status,
        }
    }

    /// Current solution vector.
    pub fn y(&self) -> &[Float] {
        &self.y
    }

    /// Current value of the independent variable.
    pub fn t(&self) -> Float {
        self.t
    }

    /// Signed step size proposed for the next step.
    pub fn dt(&self) -> Float {
        self.dt
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    /// Validated settings. Step size bounds are stored as magnitudes.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn diagnostics(&self) -> &D {
        self.log.sink()
    }

    /// Consume the integrator, returning `(t, y)`.
    pub fn into_state(self) -> (Float, Vec<Float>) {
        (self.t, self.y)
    }

    /// Take one accepted step, optionally without passing `t_limit`.
    ///
    /// Returns `Ok(true)` while more steps are needed to reach `t_limit` and
    /// `Ok(false)` once `t` is within numerical tolerance of it. A call made
    /// at the limit does nothing and returns `Ok(false)`. Without a limit the
    /// result is always `Ok(true)`.
    ///
    /// # Errors
    /// [`Error::NonFiniteError`] when the error estimate is NaN or infinite and
    /// [`Error::StepSizeUnderflow`] when retries shrink the step below the
    /// resolution of `t`. In both cases `y`, `t` and `dt` are unchanged.
    pub fn step(&mut self, t_limit: Option<Float>) -> Result<bool, Error> {
        let tol = self.settings.tol;
        let safety = self.settings.safety_factor;
        let dt_min = self.settings.dt_min_mag;

        // Bail out early if we're at the limit
        if let Some(limit) = t_limit {
            if (self.t - limit).abs() < self.dt.abs() * AT_LIMIT {
                return Ok(false);
            }
        }

        let mut h = self.dt;
        if let Some(dt_max) = self.settings.dt_max_mag {
            if h.abs() > dt_max {
                self.log.log(
                    "step",
                    "step greater than maximum stepsize requested. dt magnitude has been limited.",
                );
                h = dt_max.copysign(h);
            }
        }
        if h.abs() < dt_min {
            self.log.log(
                "step",
                "step smaller than minimum stepsize requested. dt magnitude has been limited.",
            );
            h = dt_min.copysign(h);
        }
        // Don't integrate past the limit, even if that means going under dt_min
        if let Some(limit) = t_limit {
            h = control::clip_to_limit(h, self.t, limit);
        }
        let floor = dt_min.min(h.abs());

        self.status = Status::Attempting;
        cash_karp::first_stage(&mut self.f, self.t, &self.y, &mut self.ws);
        cash_karp::error_scale(&self.norm, h, &self.y, &mut self.ws);
        self.stats.nfev += 1;

        let mut forced = false;
        let error = loop {
            cash_karp::stages(&mut self.f, self.t, h, &self.y, &mut self.ws);
            self.stats.nfev += STAGE_EVALS;
            let error = cash_karp::estimate_error(&self.norm, h, &self.ws);

            if !error.is_finite() {
                self.status = Status::Fatal;
                return Err(Error::NonFiniteError { t: self.t, dt: h });
            }
            if error < tol || forced {
                break error;
            }

            let mut retry = control::shrink(h, error, tol, safety, self.settings.max_decrease_factor);
            if retry.abs() < floor {
                self.log.log("step", "minimum stepsize reached.");
                forced = true;
                retry = floor.copysign(retry);
                // Already evaluated at the floor
                if retry == h {
                    break error;
                }
            } else if 0.1 * retry.abs() <= self.t.abs() * Float::EPSILON {
                self.status = Status::Fatal;
                return Err(Error::StepSizeUnderflow { t: self.t, dt: retry });
            }
            self.stats.nrejct += 1;
            h = retry;
        };

        cash_karp::update(h, &mut self.y, &self.ws);
        self.t += h;
        self.stats.naccpt += 1;
        if forced && error >= tol {
            self.stats.nforced += 1;
            self.status = Status::MinStepForced;
        } else {
            self.status = Status::Accepted;
        }

        let next = control::next_step(
            self.dt,
            h,
            error,
            tol,
            safety,
            self.settings.max_increase_factor,
            self.settings.max_decrease_factor,
        );
        self.dt = control::clamp_mag(next, dt_min, self.settings.dt_max_mag);

        Ok(match t_limit {
            Some(limit) => (self.t - limit).abs() > self.dt.abs() * NEAR_LIMIT,
            None => true,
        })
    }

    /// Take up to `n` steps, stopping early once `t_limit` is reached.
    ///
    /// Returns `Ok(false)` if a step reported completion and `Ok(true)` if all
    /// `n` steps were taken.
    pub fn steps(&mut self, n: usize, t_limit: Option<Float>) -> Result<bool, Error> {
        for _ in 0..n {
            if !self.step(t_limit)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}
