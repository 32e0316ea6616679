//! Cash-Karp 5(4) embedded Runge-Kutta pair.
//!
//! Stage evaluation, the embedded error estimate and the fifth-order update.
//! All functions work on the caller's [`Workspace`] and never allocate.
//!
//! Reference
//! - J. R. Cash and A. H. Karp, "A variable order Runge-Kutta method for
//!   initial value problems with rapidly varying right-hand sides", ACM
//!   Transactions on Mathematical Software 16(3), 201-222 (1990).

use crate::{
    Float,
    norm::ErrorNorm,
    ode::ODE,
    workspace::{StageView, Workspace},
};

/// Derivative evaluations made by [`stages`].
pub(crate) const STAGE_EVALS: usize = 5;

/// Evaluate the first stage at the current state.
///
/// `k1` does not depend on the step size, so it is computed once per step and
/// reused across retries.
pub(crate) fn first_stage<F: ODE>(f: &mut F, t: Float, y: &[Float], ws: &mut Workspace) {
    f.ode(t, y, ws.k1_mut());
}

/// Evaluate stages `k2..k6` for the trial step `h`. Requires `k1`.
pub(crate) fn stages<F: ODE>(f: &mut F, t: Float, h: Float, y: &[Float], ws: &mut Workspace) {
    stage(f, t, h, y, ws, (2, C2, &[A21]));
    stage(f, t, h, y, ws, (3, C3, &[A31, A32]));
    stage(f, t, h, y, ws, (4, C4, &[A41, A42, A43]));
    stage(f, t, h, y, ws, (5, C5, &[A51, A52, A53, A54]));
    stage(f, t, h, y, ws, (6, C6, &[A61, A62, A63, A64, A65]));
}

/// Tableau row: stage index, node and coefficients on the earlier stages.
type Row<'a> = (usize, Float, &'a [Float]);

/// Stage `j`: w = y + h * sum(a[m] * k[m+1]), then kj = f(t + c*h, w).
fn stage<F: ODE>(f: &mut F, t: Float, h: Float, y: &[Float], ws: &mut Workspace, row: Row<'_>) {
    let (j, c, a) = row;
    let n = y.len();
    let StageView { w, prev, k } = ws.stage(j);
    for i in 0..n {
        let mut sum = 0.0;
        for (m, am) in a.iter().enumerate() {
            sum += am * prev[m * n + i];
        }
        w[i] = y[i] + h * sum;
    }
    f.ode(t + c * h, w, k);
}

/// Fill the per-component error scale for the trial step `h`. Requires `k1`.
pub(crate) fn error_scale<E: ErrorNorm>(norm: &E, h: Float, y: &[Float], ws: &mut Workspace) {
    let (scale, k1) = ws.scale_and_k1();
    for i in 0..y.len() {
        scale[i] = norm.scale(i, h, y[i], k1[i]);
    }
}

/// Scaled difference between the fifth- and fourth-order solutions, reduced
/// to a scalar by `norm`.
pub(crate) fn estimate_error<E: ErrorNorm>(norm: &E, h: Float, ws: &Workspace) -> Float {
    let (k1, k3, k4, k5, k6) = (ws.k(1), ws.k(3), ws.k(4), ws.k(5), ws.k(6));
    let scale = ws.scale();

    let mut err = 0.0;
    for i in 0..ws.dim() {
        let est = h * (E1 * k1[i] + E3 * k3[i] + E4 * k4[i] + E5 * k5[i] + E6 * k6[i]);
        err = norm.reduce(i, err, est / scale[i]);
    }
    norm.post(err)
}

/// Advance `y` by the fifth-order solution for step `h`.
pub(crate) fn update(h: Float, y: &mut [Float], ws: &Workspace) {
    let (k1, k3, k4, k6) = (ws.k(1), ws.k(3), ws.k(4), ws.k(6));
    for i in 0..y.len() {
        y[i] += h * (B1 * k1[i] + B3 * k3[i] + B4 * k4[i] + B6 * k6[i]);
    }
}

// Cash-Karp Butcher tableau coefficients
const C2: Float = 0.2;
const C3: Float = 0.3;
const C4: Float = 0.6;
const C5: Float = 1.0;
const C6: Float = 0.875;

const A21: Float = 0.2;
const A31: Float = 0.075;
const A32: Float = 0.225;
const A41: Float = 0.3;
const A42: Float = -0.9;
const A43: Float = 1.2;
const A51: Float = -11.0 / 54.0;
const A52: Float = 2.5;
const A53: Float = -70.0 / 27.0;
const A54: Float = 35.0 / 27.0;
const A61: Float = 1631.0 / 55296.0;
const A62: Float = 175.0 / 512.0;
const A63: Float = 575.0 / 13824.0;
const A64: Float = 44275.0 / 110592.0;
const A65: Float = 253.0 / 4096.0;

// Fifth-order weights (B2 = B5 = 0)
const B1: Float = 37.0 / 378.0;
const B3: Float = 250.0 / 621.0;
const B4: Float = 125.0 / 594.0;
const B6: Float = 512.0 / 1771.0;

// Fourth-order minus fifth-order weights (E2 = 0)
const E1: Float = 2825.0 / 27648.0 - B1;
const E3: Float = 18575.0 / 48384.0 - B3;
const E4: Float = 13525.0 / 55296.0 - B4;
const E5: Float = 277.0 / 14336.0;
const E6: Float = 0.25 - B6;
