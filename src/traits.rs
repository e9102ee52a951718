use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

use crate::prox::error::ProxError;
use crate::Float;

/// ProximalOperator trait
///
/// A proximal operator maps a point of the descent to the minimizer of
/// `0.5 * ||z - x||^2 + step_size * penalty(z)`. Solvers call it once per
/// iteration, right after the gradient step on the datafit.
pub trait ProximalOperator<F: Float> {
    /// Applies the operator to a vector, returning a freshly allocated one.
    fn apply(&self, x: ArrayView1<F>, step_size: F) -> Result<Array1<F>, ProxError>;

    /// Applies the operator to every row of a matrix, the application range
    /// being expressed over columns.
    fn apply_matrix(&self, x: ArrayView2<F>, step_size: F) -> Result<Array2<F>, ProxError>;

    /// Evaluates the penalty on the application range.
    fn value(&self, x: ArrayView1<F>) -> Result<F, ProxError>;
}
