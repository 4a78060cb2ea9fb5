//! Pattern-compilation failures.

use thiserror::Error;

/// Why a pointcut expression failed to compile.
///
/// Neither variant is fatal to a run: each pattern compiles independently,
/// and a failed one leaves its advice inert rather than aborting the batch.
#[derive(Debug, Error)]
pub enum PointcutError {
    /// The expression does not fit the segment grammar.
    #[error("pointcut `{0}` does not match the expression grammar")]
    Malformed(String),

    /// The assembled matcher expression failed to finalize.
    #[error("compiled expression is not valid: {0}")]
    Invalid(#[from] regex::Error),
}
