//! Convenient prelude: import the most commonly used traits and types.
//!
//! Bring this into scope with:
//!
//! ```rust
//! use rkck::prelude::*;
//! ```
//!
//! Re-exports included:
//! - The integrator and its configuration: `Integrator`, `Settings`, `Float`.
//! - Traits for plugging in behavior: `ODE`, `ErrorNorm`, `Diagnostics`.
//! - Outcomes: `Error`, `Status`, `Stats`.

pub use crate::{
    Diagnostics, Error, ErrorNorm, Float, Integrator, MaxNorm, ODE, RmsNorm, Settings, Stats,
    Status, Stderr,
};
