//! Status codes and counters for the integrator

/// Outcome of the most recent step request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    /// No step has completed yet.
    #[default]
    Attempting,
    /// The last step met the tolerance.
    Accepted,
    /// The last step was taken at the minimum step size without meeting the tolerance.
    MinStepForced,
    /// The last step was abandoned by a fatal condition.
    Fatal,
}

/// Work counters accumulated over the lifetime of an integrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    /// Number of derivative evaluations
    pub nfev: usize,
    /// Number of steps applied to the solution
    pub naccpt: usize,
    /// Number of trial steps rejected for exceeding the tolerance
    pub nrejct: usize,
    /// Number of steps taken at the minimum step size regardless of the error
    pub nforced: usize,
}
