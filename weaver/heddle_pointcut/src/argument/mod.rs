//! Compilation of a single argument or return slot.
//!
//! A slot is the text between the top-level commas of an argument or
//! return list. Compilation produces a matcher fragment that, embedded in
//! the enclosing parenthesized group, matches exactly the intended shape.

use crate::scan::split_in_out;

/// Fragment accepted for a bare `*` slot: any run of type-literal
/// characters, or a nested function type with or without declared returns.
const ANY_SLOT: &str = r"([a-zA-Z0-9_*.\[\]{}()\/]+|func\(.*\)\(.*\)|func\(.*\))";

/// Compile one argument or return slot into a matcher fragment.
///
/// Pure and total: unrecognized input falls through to literal escaping.
pub fn compile_argument(slot: &str) -> String {
    if slot.starts_with("func(") {
        return compile_func_type(&slot[4..]);
    }

    if slot == "*" {
        return ANY_SLOT.to_owned();
    }

    if slot.len() > 1 && slot.starts_with('*') {
        return format!(r"\*{}", compile_argument(&slot[1..]));
    }

    if slot == "..." {
        return ".*".to_owned();
    }

    escape_slot(slot)
}

/// Compile a nested function-type slot such as `func(int,*)(bool)`.
///
/// `tail` is the slot text after the `func` keyword, starting at `(`. The
/// body reuses the same balanced scan and comma split as the enclosing
/// signature; the return tuple is parenthesized only when it has more than
/// one element.
fn compile_func_type(tail: &str) -> String {
    let (input, output) = split_in_out(tail);
    let (_, args) = compile_list(input);
    let (returns, rets) = compile_list(output);

    if returns <= 1 {
        format!(r"func\({args}\){rets}")
    } else {
        format!(r"func\({args}\)\({rets}\)")
    }
}

/// Split a list on top-level commas and compile each slot.
///
/// Commas nested inside parens or brackets do not split. Returns the slot
/// count together with the joined fragment; an empty list still counts as
/// one empty slot, which keeps the single-return heuristic intact.
pub(crate) fn compile_list(text: &str) -> (usize, String) {
    let mut depth = 0i32;
    let mut start = 0;
    let mut total = 0;
    let mut out = String::new();

    for (index, c) in text.char_indices() {
        match c {
            '(' | '[' => depth += 1,
            ')' | ']' => depth -= 1,
            ',' if depth == 0 => {
                out.push_str(&compile_argument(&text[start..index]));
                out.push_str(r"\,");
                start = index + 1;
                total += 1;
            }
            _ => {}
        }
    }

    out.push_str(&compile_argument(&text[start..]));
    (total + 1, out)
}

/// Escape the characters that are meta in this grammar (`[`, `]`, `*`,
/// `.`); identifier characters, slashes, braces, and parens pass through.
fn escape_slot(slot: &str) -> String {
    let mut out = String::with_capacity(slot.len());
    for c in slot.chars() {
        if matches!(c, '[' | ']' | '*' | '.') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests;
