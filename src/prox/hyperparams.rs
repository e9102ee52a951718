use ndarray::{s, Array1, Array2, ArrayView1, ArrayView2};

use super::error::{ProxError, Result};
use super::{
    check_application_range, check_complete, check_penalty_constant, check_range_fits,
    check_step_size, ProxKernel, ProxKind,
};
use crate::param_guard::ParamGuard;
use crate::traits::ProximalOperator;
use crate::Float;

/// A verified and complete parameter set, ready to be applied
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProxValidParams<F> {
    kind: ProxKind,
    penalty_constant: F,
    start: usize,
    end: usize,
    positive: bool,
}

impl<F: Float> ProxValidParams<F> {
    /// Assembles fields that have each gone through their check already.
    pub(crate) fn from_checked(
        kind: ProxKind,
        penalty_constant: F,
        start: usize,
        end: usize,
        positive: bool,
    ) -> Self {
        ProxValidParams {
            kind,
            penalty_constant,
            start,
            end,
            positive,
        }
    }

    pub fn kind(&self) -> ProxKind {
        self.kind
    }

    pub fn penalty_constant(&self) -> F {
        self.penalty_constant
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn positive(&self) -> bool {
        self.positive
    }
}

impl<F: Float> ProximalOperator<F> for ProxValidParams<F> {
    /// Coordinates outside `[start, end)` are copied verbatim, the kernel only
    /// sees the slice in range.
    fn apply(&self, x: ArrayView1<F>, step_size: F) -> Result<Array1<F>> {
        let step_size = check_step_size(step_size)?;
        check_range_fits(self.end, x.len())?;
        log::trace!(
            "[prox] applying {} on [{}, {}) of {} coordinates, step size {}",
            self.kind.name(),
            self.start,
            self.end,
            x.len(),
            step_size
        );

        let mut y = x.to_owned();
        if self.start < self.end {
            let y_range = self.kind.apply_kernel(
                x.slice(s![self.start..self.end]),
                step_size,
                self.penalty_constant,
                self.positive,
            );
            y.slice_mut(s![self.start..self.end]).assign(&y_range);
        }
        Ok(y)
    }

    fn apply_matrix(&self, x: ArrayView2<F>, step_size: F) -> Result<Array2<F>> {
        let step_size = check_step_size(step_size)?;
        check_range_fits(self.end, x.ncols())?;
        log::trace!(
            "[prox] applying {} on columns [{}, {}) of a {}x{} matrix, step size {}",
            self.kind.name(),
            self.start,
            self.end,
            x.nrows(),
            x.ncols(),
            step_size
        );

        let mut y = x.to_owned();
        if self.start < self.end {
            for (mut y_row, x_row) in y.outer_iter_mut().zip(x.outer_iter()) {
                let y_range = self.kind.apply_kernel(
                    x_row.slice(s![self.start..self.end]),
                    step_size,
                    self.penalty_constant,
                    self.positive,
                );
                y_row.slice_mut(s![self.start..self.end]).assign(&y_range);
            }
        }
        Ok(y)
    }

    fn value(&self, x: ArrayView1<F>) -> Result<F> {
        check_range_fits(self.end, x.len())?;
        Ok(self.kind.value(x.slice(s![self.start..self.end]), self.penalty_constant))
    }
}

/// An operator parameter set during construction
///
/// Configures the proximal operator of
/// ```ignore
/// penalty_constant * ||x[start..end]||_1  (+ indicator of x[start..end] >= 0)
/// ```
/// Nothing is validated until [`ParamGuard::check`] is called, either
/// explicitly or implicitly when the builder is applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ProxParams<F> {
    kind: ProxKind,
    penalty_constant: Option<F>,
    range: Option<(usize, usize)>,
    positive: bool,
}

impl<F: Float> Default for ProxParams<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Configure a soft-thresholding operator
impl<F: Float> ProxParams<F> {
    /// Create default parameters: positivity constraint on, penalty constant
    /// and application range unset.
    pub fn new() -> ProxParams<F> {
        ProxParams {
            kind: ProxKind::L1,
            penalty_constant: None,
            range: None,
            positive: true,
        }
    }

    /// Set the penalty constant. A higher value yields sparser outputs.
    pub fn penalty_constant(mut self, penalty_constant: F) -> Self {
        self.penalty_constant = Some(penalty_constant);
        self
    }

    /// Set the half-open range of coordinates `[start, end)` on which the
    /// operator acts.
    pub fn application_range(mut self, start: usize, end: usize) -> Self {
        self.range = Some((start, end));
        self
    }

    /// Couple the penalty with a projection onto the non-negative orthant.
    ///
    /// Defaults to `true` if not set.
    pub fn positive(mut self, positive: bool) -> Self {
        self.positive = positive;
        self
    }
}

impl<F: Float> ParamGuard for ProxParams<F> {
    type Checked = ProxValidParams<F>;
    type Error = ProxError;

    fn check_ref(&self) -> Result<ProxValidParams<F>> {
        let (penalty_constant, (start, end)) = check_complete(self.penalty_constant, self.range)?;
        let penalty_constant = check_penalty_constant(penalty_constant)?;
        let (start, end) = check_application_range(start, end)?;
        Ok(ProxValidParams::from_checked(self.kind, penalty_constant, start, end, self.positive))
    }
}
