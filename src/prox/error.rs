use thiserror::Error;

/// Simplified `Result` using [`ProxError`](crate::ProxError) as error type
pub type Result<T> = std::result::Result<T, ProxError>;

/// Error variants from operator configuration or application
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProxError {
    /// A supplied value violates its documented constraint
    #[error("invalid parameter: {0}")]
    InvalidParameter(#[from] InvalidParameter),
    /// `apply` was called before the configuration was complete
    #[error("proximal operator is not configured: {0} never set")]
    NotConfigured(Missing),
}

impl ProxError {
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, ProxError::InvalidParameter(_))
    }

    pub fn is_not_configured(&self) -> bool {
        matches!(self, ProxError::NotConfigured(_))
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidParameter {
    #[error("penalty constant must be non-negative, got {0}")]
    NegativePenaltyConstant(f64),
    #[error("penalty constant must be finite, got {0}")]
    NonFinitePenaltyConstant(f64),
    #[error("application range end {end} is smaller than its start {start}")]
    InvertedRange { start: usize, end: usize },
    #[error("step size must be positive, got {0}")]
    NonPositiveStepSize(f64),
    #[error("step size must be finite, got {0}")]
    NonFiniteStepSize(f64),
    #[error("application range end {end} exceeds input length {len}")]
    RangeOutOfBounds { end: usize, len: usize },
}

/// The part of the configuration that is missing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Missing {
    PenaltyConstant,
    ApplicationRange,
    Both,
}

impl std::fmt::Display for Missing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Missing::PenaltyConstant => write!(f, "penalty constant"),
            Missing::ApplicationRange => write!(f, "application range"),
            Missing::Both => write!(f, "penalty constant and application range"),
        }
    }
}
