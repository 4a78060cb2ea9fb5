//! Heddle advice: the advice model and catalogue.
//!
//! An advice binds a behavior kind (before, returning, or around) and an
//! invocation descriptor to the compiled form of a pointcut expression.
//! Declarations come from an external collaborator that walks program
//! source; this crate owns everything after that hand-off: lowering the
//! target expression, resolving qualified names against imports, compiling
//! the pattern, and keeping the ordered catalogue the match engine
//! consumes.
//!
//! A batch of N declarations always yields a result for all N. A
//! declaration can be discarded (unusable target, truncated pattern
//! literal) or left inert (pattern failed to compile), but no declaration
//! ever aborts the run.

mod expr;
mod imports;
mod invocation;

pub use expr::Expression;
pub use imports::{Import, ImportTable};
pub use invocation::{Invocation, InvocationArg};

use heddle_pointcut::Matcher;

/// When an advice's behavior runs relative to its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdviceKind {
    Around,
    Before,
    Returning,
}

/// A declared advice: its kind, the call it performs, and the compiled
/// form of its pointcut expression.
///
/// Immutable once declared. An advice whose pattern failed to compile is
/// inert: it stays in the catalogue but matches nothing.
#[derive(Debug, Clone)]
pub struct Advice {
    kind: AdviceKind,
    call: Invocation,
    matcher: Option<Matcher>,
}

impl Advice {
    /// Build an advice from an already-lowered invocation and a bare
    /// pointcut expression.
    ///
    /// A pattern that fails to compile leaves the advice inert; the
    /// failure is reported by the pattern compiler.
    pub fn new(kind: AdviceKind, call: Invocation, pattern: &str) -> Self {
        let matcher = heddle_pointcut::compile(pattern).ok();
        Advice {
            kind,
            call,
            matcher,
        }
    }

    /// Process one declaration from the advice-declaration collaborator.
    ///
    /// `raw_literal` is the pattern exactly as written in source, still
    /// wrapped in its quote delimiters. Returns `None` when the
    /// declaration is discarded: the target has no usable function name,
    /// the function is not exported (woven code could not call it), or the
    /// literal is too short to strip its delimiters.
    pub fn declare(
        kind: AdviceKind,
        target: &Expression,
        imports: &ImportTable,
        raw_literal: &str,
    ) -> Option<Self> {
        let call = Invocation::from_expression(target, imports);

        if !is_exported(call.function()) {
            tracing::debug!(
                "discarding advice `{}`: target is not an exported function",
                call.function()
            );
            return None;
        }

        let Some(pattern) = strip_delimiters(raw_literal) else {
            tracing::debug!(
                "discarding advice `{}`: pattern literal {raw_literal} is too short",
                call.function()
            );
            return None;
        };

        Some(Advice::new(kind, call, pattern))
    }

    /// Whether this advice applies to the given canonical signature.
    ///
    /// Inert advice applies to nothing.
    pub fn matches(&self, path: &str) -> bool {
        self.matcher.as_ref().is_some_and(|m| m.is_match(path))
    }

    pub fn kind(&self) -> AdviceKind {
        self.kind
    }

    pub fn call(&self) -> &Invocation {
        &self.call
    }

    pub fn matcher(&self) -> Option<&Matcher> {
        self.matcher.as_ref()
    }
}

/// Advice functions must be exported so the woven output can call them.
fn is_exported(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}

/// Strip the quote delimiters off a pattern literal.
///
/// `None` when the literal is too short, or not sliceable at character
/// boundaries, to strip safely.
fn strip_delimiters(raw: &str) -> Option<&str> {
    if raw.len() < 2 {
        return None;
    }
    raw.get(1..raw.len() - 1)
}

/// The ordered catalogue of declared advice.
///
/// Declaration order is preserved for diagnostics and for stable advice
/// identifiers; it carries no matching semantics. No deduplication.
#[derive(Debug, Clone, Default)]
pub struct Advices {
    items: Vec<Advice>,
}

impl Advices {
    pub fn new() -> Self {
        Advices::default()
    }

    /// Append one advice, preserving declaration order.
    pub fn add(&mut self, advice: Advice) {
        self.items.push(advice);
    }

    pub fn list(&self) -> &[Advice] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
