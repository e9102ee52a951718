use ndarray::ScalarOperand;

use num_traits::{FromPrimitive, NumAssignOps};

use std::cmp::PartialOrd;
use std::fmt;
use std::iter::Sum;

/// Float point numbers
///
/// This trait bound multiplexes to the most common assumption of floating point
/// number and implement them for 32bit and 64bit float points.
/// Ref: https://github.com/rust-ml/linfa/blob/master/src/dataset/mod.rs#L36
pub trait Float:
    FromPrimitive
    + num_traits::Float
    + PartialOrd
    + Sync
    + Send
    + Default
    + fmt::Display
    + fmt::Debug
    + Sum
    + NumAssignOps
    + ScalarOperand
    + approx::AbsDiffEq<Epsilon = Self>
{
}

impl Float for f32 {}

impl Float for f64 {}

pub mod helpers;
pub mod param_guard;
pub mod prox;
pub mod report;
pub mod traits;

pub use param_guard::ParamGuard;
pub use prox::error::{InvalidParameter, Missing, ProxError, Result};
pub use prox::hyperparams::{ProxParams, ProxValidParams};
pub use prox::{Prox, ProxKernel, ProxKind, L1};
pub use report::Table;
pub use traits::ProximalOperator;
