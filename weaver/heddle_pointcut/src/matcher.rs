//! Opaque compiled form of a pointcut expression.

use std::fmt;

use regex::Regex;

/// A compiled pointcut matcher: an anchored total-match predicate over a
/// canonical signature string.
///
/// Immutable once built and safe to share read-only across concurrent
/// evaluations. The underlying expression text is exposed for diagnostics
/// only, so the matching technology stays an implementation detail.
#[derive(Debug, Clone)]
pub struct Matcher {
    pattern: String,
    compiled: Regex,
}

impl Matcher {
    pub(crate) fn new(pattern: &str, compiled: Regex) -> Self {
        Matcher {
            pattern: pattern.to_owned(),
            compiled,
        }
    }

    /// Test a canonical signature string against this matcher.
    ///
    /// The compiled expression is anchored at both ends; substring matches
    /// never apply.
    pub fn is_match(&self, signature: &str) -> bool {
        self.compiled.is_match(signature)
    }

    /// The pointcut expression this matcher was compiled from.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The compiled expression text, for diagnostics and logging.
    pub fn as_expr(&self) -> &str {
        self.compiled.as_str()
    }
}

impl fmt::Display for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ aspect ] {} => {}", self.pattern, self.compiled.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "tests use unwrap for brevity")]
mod tests {
    use pretty_assertions::assert_eq;

    #[test]
    fn display_reports_pattern_and_expression() {
        let matcher = crate::compile("pkg.Run(...)").unwrap();
        assert_eq!(matcher.pattern(), "pkg.Run(...)");
        assert_eq!(matcher.as_expr(), r"^pkg\.Run\(.*\)$");
        assert_eq!(
            matcher.to_string(),
            r"[ aspect ] pkg.Run(...) => ^pkg\.Run\(.*\)$"
        );
    }

    #[test]
    fn matching_is_anchored_at_both_ends() {
        let matcher = crate::compile("pkg.Run()").unwrap();
        assert!(matcher.is_match("pkg.Run()"));
        assert!(!matcher.is_match("xpkg.Run()"));
        assert!(!matcher.is_match("pkg.Run()x"));
    }
}
