use ndarray::{Array1, ArrayView1};

use crate::helpers::prox::{l1_norm, positive_part, soft_thresholding};
use crate::param_guard::ParamGuard;
use crate::Float;

use self::error::{InvalidParameter, Missing, ProxError, Result};
use self::hyperparams::{ProxParams, ProxValidParams};


pub mod error;
pub mod hyperparams;
mod info;

/// This trait is the single capability every operator family provides: the
/// closed-form proximal map on the slice of coordinates it is applied to.
///
/// Kernels receive already validated inputs and never re-validate them.
pub trait ProxKernel<F: Float> {
    /// Computes the proximal map of `step_size * penalty_constant * pen` on a
    /// slice, optionally composed with the projection onto the non-negative
    /// orthant.
    fn apply_kernel(
        &self,
        x: ArrayView1<F>,
        step_size: F,
        penalty_constant: F,
        positive: bool,
    ) -> Array1<F>;

    /// Evaluates `penalty_constant * pen` on a slice.
    fn value(&self, x: ArrayView1<F>, penalty_constant: F) -> F;
}

/// The L1 kernel
///
/// Its proximal operator is the soft-thresholding function. Coupled with the
/// positivity constraint, the joint proximal map decomposes as
/// threshold-then-clip since the penalty is separable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct L1;

impl<F: Float> ProxKernel<F> for L1 {
    fn apply_kernel(
        &self,
        x: ArrayView1<F>,
        step_size: F,
        penalty_constant: F,
        positive: bool,
    ) -> Array1<F> {
        let threshold = penalty_constant * step_size;
        if positive {
            x.map(|&xi| positive_part(soft_thresholding(xi, threshold)))
        } else {
            x.map(|&xi| soft_thresholding(xi, threshold))
        }
    }

    fn value(&self, x: ArrayView1<F>, penalty_constant: F) -> F {
        penalty_constant * l1_norm(x)
    }
}

/// The family of an operator.
///
/// Only the L1 norm is currently provided; other norms plug in as new
/// variants with their own [`ProxKernel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum ProxKind {
    #[default]
    L1,
}

impl ProxKind {
    /// Name of the operator, as displayed in the diagnostic table
    pub fn name(&self) -> &'static str {
        match self {
            ProxKind::L1 => "Soft-thresholding operator",
        }
    }

    /// Name of the regularized model the operator induces
    pub fn regularization(&self) -> &'static str {
        match self {
            ProxKind::L1 => "Lasso",
        }
    }
}

impl<F: Float> ProxKernel<F> for ProxKind {
    fn apply_kernel(
        &self,
        x: ArrayView1<F>,
        step_size: F,
        penalty_constant: F,
        positive: bool,
    ) -> Array1<F> {
        match self {
            ProxKind::L1 => L1.apply_kernel(x, step_size, penalty_constant, positive),
        }
    }

    fn value(&self, x: ArrayView1<F>, penalty_constant: F) -> F {
        match self {
            ProxKind::L1 => ProxKernel::<F>::value(&L1, x, penalty_constant),
        }
    }
}

/// Proximal operator
///
/// Holds the configuration shared by all operator families: a penalty
/// constant, a half-open application range `[start, end)` over the
/// coordinates, and a positivity flag fixed at construction. Setters validate
/// eagerly and leave the previous value in place when they fail; whether the
/// range fits the input is only known, and checked, when the operator is
/// applied through [`ProximalOperator`](crate::traits::ProximalOperator).
///
/// Setters take `&mut self`, so a configuration can never change under a
/// running `apply`. Share an operator across threads by cloning it, one copy
/// per worker.
#[derive(Debug, Clone, PartialEq)]
pub struct Prox<F> {
    kind: ProxKind,
    penalty_constant: Option<F>,
    range: Option<(usize, usize)>,
    positive: bool,
}

impl<F: Float> Default for Prox<F> {
    fn default() -> Self {
        Self::l1(true)
    }
}

impl<F: Float> Prox<F> {
    /// Creates an unconfigured operator of the given family
    pub fn new(kind: ProxKind, positive: bool) -> Self {
        Prox {
            kind,
            penalty_constant: None,
            range: None,
            positive,
        }
    }

    /// Creates an unconfigured soft-thresholding operator
    pub fn l1(positive: bool) -> Self {
        Self::new(ProxKind::L1, positive)
    }

    /// Creates a soft-thresholding operator builder with default parameters
    pub fn params() -> ProxParams<F> {
        ProxParams::new()
    }

    /// Sets the penalty constant. Must be non-negative and finite.
    pub fn set_penalty_constant(&mut self, penalty_constant: F) -> Result<()> {
        let penalty_constant = check_penalty_constant(penalty_constant)?;
        log::debug!("[prox] penalty constant set to {}", penalty_constant);
        self.penalty_constant = Some(penalty_constant);
        Ok(())
    }

    /// Sets the half-open range `[start, end)` of coordinates the operator
    /// acts on. Coordinates outside of it are left untouched.
    pub fn set_application_range(&mut self, start: usize, end: usize) -> Result<()> {
        let range = check_application_range(start, end)?;
        log::debug!("[prox] application range set to [{}, {})", start, end);
        self.range = Some(range);
        Ok(())
    }

    pub fn kind(&self) -> ProxKind {
        self.kind
    }

    pub fn penalty_constant(&self) -> Option<F> {
        self.penalty_constant
    }

    pub fn start(&self) -> Option<usize> {
        self.range.map(|(start, _)| start)
    }

    pub fn end(&self) -> Option<usize> {
        self.range.map(|(_, end)| end)
    }

    pub fn positive(&self) -> bool {
        self.positive
    }
}

impl<F: Float> ParamGuard for Prox<F> {
    type Checked = ProxValidParams<F>;
    type Error = ProxError;

    /// Setters already validated each field, only completeness is left
    fn check_ref(&self) -> Result<ProxValidParams<F>> {
        let (penalty_constant, (start, end)) = check_complete(self.penalty_constant, self.range)?;
        Ok(ProxValidParams::from_checked(self.kind, penalty_constant, start, end, self.positive))
    }
}

impl<F: Float> From<ProxValidParams<F>> for Prox<F> {
    fn from(params: ProxValidParams<F>) -> Self {
        Prox {
            kind: params.kind(),
            penalty_constant: Some(params.penalty_constant()),
            range: Some((params.start(), params.end())),
            positive: params.positive(),
        }
    }
}

pub(crate) fn check_complete<F>(
    penalty_constant: Option<F>,
    range: Option<(usize, usize)>,
) -> Result<(F, (usize, usize))> {
    match (penalty_constant, range) {
        (Some(penalty_constant), Some(range)) => Ok((penalty_constant, range)),
        (None, Some(_)) => Err(ProxError::NotConfigured(Missing::PenaltyConstant)),
        (Some(_), None) => Err(ProxError::NotConfigured(Missing::ApplicationRange)),
        (None, None) => Err(ProxError::NotConfigured(Missing::Both)),
    }
}

pub(crate) fn check_penalty_constant<F: Float>(penalty_constant: F) -> Result<F> {
    if !penalty_constant.is_finite() {
        return Err(InvalidParameter::NonFinitePenaltyConstant(to_f64(penalty_constant)).into());
    }
    if penalty_constant < F::zero() {
        return Err(InvalidParameter::NegativePenaltyConstant(to_f64(penalty_constant)).into());
    }
    Ok(penalty_constant)
}

pub(crate) fn check_application_range(start: usize, end: usize) -> Result<(usize, usize)> {
    if end < start {
        return Err(InvalidParameter::InvertedRange { start, end }.into());
    }
    Ok((start, end))
}

/// NaN step sizes are rejected along with non-positive ones
pub(crate) fn check_step_size<F: Float>(step_size: F) -> Result<F> {
    if !(step_size > F::zero()) {
        return Err(InvalidParameter::NonPositiveStepSize(to_f64(step_size)).into());
    }
    if step_size.is_infinite() {
        return Err(InvalidParameter::NonFiniteStepSize(to_f64(step_size)).into());
    }
    Ok(step_size)
}

pub(crate) fn check_range_fits(end: usize, len: usize) -> Result<()> {
    if end > len {
        return Err(InvalidParameter::RangeOutOfBounds { end, len }.into());
    }
    Ok(())
}

fn to_f64<F: Float>(x: F) -> f64 {
    x.to_f64().unwrap_or(f64::NAN)
}
