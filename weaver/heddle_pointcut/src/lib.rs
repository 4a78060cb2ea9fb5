//! Heddle pointcut: compiles pointcut expressions into signature matchers.
//!
//! A pointcut expression is a compact textual pattern selecting a set of
//! fully-qualified function signatures:
//!
//! ```text
//! pkg/sub.*Service.Get*(*,int)(*,error)
//! ```
//!
//! [`compile`] turns one expression into a [`Matcher`]: an immutable,
//! anchored total-match predicate over a canonical signature string. The
//! grammar is fixed and narrow (wildcards in the package, object, and
//! function segments; `*`, `...`, pointer, and nested-function forms in the
//! argument and return lists) and every pattern compiles once, up front.
//! Nothing is interpreted at match time.
//!
//! Compilation failures are never fatal to a batch run: each pattern
//! compiles independently, and callers keep the owning advice inert when
//! its pattern is rejected.

mod argument;
mod error;
mod matcher;
mod scan;
mod signature;

pub use argument::compile_argument;
pub use error::PointcutError;
pub use matcher::Matcher;

/// Compile a pointcut expression into a [`Matcher`].
///
/// Logs the expression-to-matcher mapping for diagnostics.
pub fn compile(pattern: &str) -> Result<Matcher, PointcutError> {
    let matcher = signature::compile_signature(pattern)?;
    tracing::info!("{matcher}");
    Ok(matcher)
}
