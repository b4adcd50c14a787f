use thiserror::Error;

/// Convenience type alias for evaluation results
pub type Result<T> = std::result::Result<T, EvalError>;

/// Ways in which an objective function can break its contract.
/// All of them are fatal for the optimization run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The objective returned a different number of rows than it was given
    #[error(
        "objective function result has different length than parameter matrix \
         (expected {expected} rows, got {returned})"
    )]
    ShapeMismatch {
        /// Rows of the parameter matrix
        expected: usize,
        /// Rows of the objective output
        returned: usize,
    },

    /// The objective returned something that is not a number
    #[error("unsupported objective function return value of type `{kind}`")]
    UnsupportedReturnType {
        /// Name of the offending variant
        kind: &'static str,
    },

    /// At least one candidate evaluated to NaN
    #[error("NaN value of objective function for candidate {index}! \nPerhaps adjust the bounds.")]
    NaNResult {
        /// Row of the first NaN
        index: usize,
    },
}
