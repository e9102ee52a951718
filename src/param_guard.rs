use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

use super::traits::ProximalOperator;
use crate::prox::error::ProxError;
use crate::Float;
use std::error::Error;

/// A set of operator parameters whose values have not been checked for validity. The checked
/// parameters can only be obtained after checking has completed. If the `ProximalOperator` trait
/// has been implemented on the checked parameters, it will also be implemented on the unchecked
/// parameters with the checking step done automatically.
///
/// Checked parameters are a handful of scalars, so `check_ref()` hands back an owned copy
/// instead of a reference. The validation done in `check_ref()` and `check()` should be
/// identical.
pub trait ParamGuard {
    /// The checked parameters
    type Checked;
    /// Error type resulting from failed parameter checking
    type Error: Error;

    /// Checks the parameters without consuming them and returns the checked parameters if
    /// successful
    fn check_ref(&self) -> Result<Self::Checked, Self::Error>;

    /// Checks the parameters and returns the checked parameters if successful
    fn check(self) -> Result<Self::Checked, Self::Error>
    where
        Self: Sized,
    {
        self.check_ref()
    }

    /// Calls `check()` and unwraps the result
    fn check_unwrap(self) -> Self::Checked
    where
        Self: Sized,
    {
        self.check().unwrap()
    }
}

/// Performs checking step and calls the operator on the checked parameters. If checking failed,
/// the checking error is converted to [`ProxError`] and returned.
impl<F: Float, P: ParamGuard> ProximalOperator<F> for P
where
    P::Checked: ProximalOperator<F>,
    ProxError: From<P::Error>,
{
    fn apply(&self, x: ArrayView1<F>, step_size: F) -> Result<Array1<F>, ProxError> {
        let checked = self.check_ref()?;
        checked.apply(x, step_size)
    }

    fn apply_matrix(&self, x: ArrayView2<F>, step_size: F) -> Result<Array2<F>, ProxError> {
        let checked = self.check_ref()?;
        checked.apply_matrix(x, step_size)
    }

    fn value(&self, x: ArrayView1<F>) -> Result<F, ProxError> {
        let checked = self.check_ref()?;
        checked.value(x)
    }
}
