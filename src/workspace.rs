//! Scratch memory for one integrator.

use crate::Float;

/// Number of `n`-length segments: trial state, six stages, error scale.
const SEGMENTS: usize = 8;

const SCALE: usize = 7;

/// Contiguous scratch buffer holding the trial state `w`, the stages
/// `k1..k6` and the per-component error scale, each of length `n`.
///
/// Allocated once at construction and never resized.
#[derive(Debug, Clone)]
pub(crate) struct Workspace {
    n: usize,
    buf: Vec<Float>,
}

/// Borrowed view used while evaluating stage `j`.
pub(crate) struct StageView<'a> {
    /// Trial state
    pub w: &'a mut [Float],
    /// Stages `k1..k(j-1)` laid out back to back
    pub prev: &'a [Float],
    /// Output stage `kj`
    pub k: &'a mut [Float],
}

impl Workspace {
    pub fn new(n: usize) -> Self {
        Self {
            n,
            buf: vec![0.0; SEGMENTS * n],
        }
    }

    pub fn dim(&self) -> usize {
        self.n
    }

    fn segment(&self, s: usize) -> &[Float] {
        &self.buf[s * self.n..(s + 1) * self.n]
    }

    fn segment_mut(&mut self, s: usize) -> &mut [Float] {
        &mut self.buf[s * self.n..(s + 1) * self.n]
    }

    /// Stage `j` in `1..=6`.
    pub fn k(&self, j: usize) -> &[Float] {
        debug_assert!((1..=6).contains(&j));
        self.segment(j)
    }

    pub fn k1_mut(&mut self) -> &mut [Float] {
        self.segment_mut(1)
    }

    #[cfg(test)]
    pub fn w(&self) -> &[Float] {
        self.segment(0)
    }

    pub fn scale(&self) -> &[Float] {
        self.segment(SCALE)
    }

    /// Error scale together with read access to `k1`.
    pub fn scale_and_k1(&mut self) -> (&mut [Float], &[Float]) {
        let n = self.n;
        let (head, scale) = self.buf.split_at_mut(SCALE * n);
        (scale, &head[n..2 * n])
    }

    /// Split the buffer for evaluating stage `j` in `2..=6`.
    pub fn stage(&mut self, j: usize) -> StageView<'_> {
        debug_assert!((2..=6).contains(&j));
        let n = self.n;
        let (w, ks) = self.buf.split_at_mut(n);
        let (prev, rest) = ks.split_at_mut((j - 1) * n);
        StageView {
            w,
            prev,
            k: &mut rest[..n],
        }
    }
}
