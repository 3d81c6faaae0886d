//! Error type shared by the function tree and the solvers built on top of it.
use thiserror::Error;

/// Errors raised by the function library.
///
/// Numeric domain problems (logarithm of a negative number, a vanishing derivative inside a
/// Newton step) are not represented here: they show up as NaN or infinity in the f64 result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FunctionError {
    /// argument of the wrong kind: symbolic function handed to a solver, empty or non-text name...
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// operation that is not defined for the given input
    #[error("Not implemented: {0}")]
    NotImplemented(String),
    /// iteration cap of a solver was hit before the tolerance was met
    #[error("Maximum number of iterations ({0}) reached. No solution found")]
    MaxIterationsReached(usize),
}
