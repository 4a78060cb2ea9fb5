//! Decomposition of a pointcut expression into its signature segments.
//!
//! A pointcut expression has up to five segments: an optional package
//! path, an optional object, a function name, a parenthesized argument
//! list, and an optional return list. A single fixed prefix pattern finds
//! the first four; the argument and return lists are then delimited with a
//! balanced-parenthesis scan, because the prefix pattern cannot see where
//! a nested function type ends.

use std::sync::LazyLock;

use regex::Regex;

use crate::argument::compile_list;
use crate::error::PointcutError;
use crate::matcher::Matcher;
use crate::scan::split_in_out;

/// Character run forming a package segment, terminated by `.`.
const PKG_SEGMENT: &str = r"[a-zA-Z0-9_*\/]+\.";
/// Character run forming an object segment, terminated by `.`.
const OBJ_SEGMENT: &str = r"[a-zA-Z0-9_*]+\.";
/// Character run forming a function-name segment.
const FUNC_SEGMENT: &str = "[a-zA-Z0-9_*]+";
/// Characters allowed in the argument and return lists.
const LIST_CHARS: &str = r"[a-zA-Z0-9_*,.{}()\[\]/]+";

/// Fixed segmentation pattern: initialized once for the whole process,
/// never mutated, read-only shared state.
#[allow(
    clippy::expect_used,
    reason = "the segmentation pattern is assembled from fixed literals"
)]
static SEGMENTS: LazyLock<Regex> = LazyLock::new(|| {
    let expr = format!(
        "^(?P<pkg>{PKG_SEGMENT})?(?P<obj>{OBJ_SEGMENT})?(?P<func>{FUNC_SEGMENT})(?P<args>\\({LIST_CHARS})$"
    );
    Regex::new(&expr).expect("segmentation pattern must compile")
});

/// Compile a pointcut expression into an anchored matcher.
///
/// Fails when the expression does not fit the segment grammar or when the
/// assembled expression does not finalize. Both failures are reported and
/// left to the caller, which degrades the owning advice to inert.
pub(crate) fn compile_signature(text: &str) -> Result<Matcher, PointcutError> {
    let Some(segments) = SEGMENTS.captures(text) else {
        tracing::error!("pointcut `{text}` does not match the expression grammar");
        return Err(PointcutError::Malformed(text.to_owned()));
    };

    let mut expr = String::from("^");

    if let Some(pkg) = segments.name("pkg") {
        expr.push_str(&compile_package(pkg.as_str()));
        expr.push_str(r"\.");
    }

    if let Some(obj) = segments.name("obj") {
        expr.push_str(&compile_object(obj.as_str()));
        expr.push_str(r"\.");
    }

    expr.push_str(&compile_function(&segments["func"]));

    let (input, output) = split_in_out(&segments["args"]);

    let (_, args) = compile_list(input);
    expr.push_str(&format!(r"\({args}\)"));

    let (returns, rets) = compile_list(output);
    if returns <= 1 {
        expr.push_str(&rets);
    } else {
        expr.push_str(&format!(r"\({rets}\)"));
    }

    expr.push('$');

    match Regex::new(&expr) {
        Ok(compiled) => Ok(Matcher::new(text, compiled)),
        Err(err) => {
            tracing::error!("error processing `{text}`: {err}");
            Err(PointcutError::Invalid(err))
        }
    }
}

/// `*` in a package segment matches any run of word or slash characters.
/// Slashes are then escaped for literal matching, including the one inside
/// the class the wildcard replacement just inserted.
fn compile_package(segment: &str) -> String {
    let trimmed = &segment[..segment.len() - 1];
    trimmed.replace('*', "[a-zA-Z0-9_/]*").replace('/', r"\/")
}

/// `*` in an object segment matches any run of word or `*` characters.
fn compile_object(segment: &str) -> String {
    let trimmed = &segment[..segment.len() - 1];
    trimmed.replace('*', "[a-zA-Z0-9_*]*")
}

/// `*` in a function segment matches any run of word characters.
fn compile_function(segment: &str) -> String {
    segment.replace('*', "[a-zA-Z0-9_]*")
}
