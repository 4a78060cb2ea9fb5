use pretty_assertions::assert_eq;

use super::*;

#[test]
fn wildcard_slot_accepts_any_shape() {
    assert_eq!(compile_argument("*"), ANY_SLOT);
}

#[test]
fn pointer_marker_is_literal() {
    assert_eq!(compile_argument("*User"), r"\*User");
}

#[test]
fn pointer_to_wildcard_keeps_the_marker() {
    assert_eq!(compile_argument("**"), format!(r"\*{ANY_SLOT}"));
}

#[test]
fn variadic_matches_any_suffix() {
    assert_eq!(compile_argument("..."), ".*");
}

#[test]
fn plain_type_text_is_escaped() {
    assert_eq!(compile_argument("[]model.User"), r"\[\]model\.User");
    assert_eq!(compile_argument("map[string]int"), r"map\[string\]int");
}

#[test]
fn nested_func_with_single_return_stays_bare() {
    assert_eq!(compile_argument("func(int)(bool)"), r"func\(int\)bool");
    assert_eq!(compile_argument("func(int)bool"), r"func\(int\)bool");
}

#[test]
fn nested_func_with_multiple_returns_is_parenthesized() {
    assert_eq!(
        compile_argument("func(int)(bool,error)"),
        r"func\(int\)\(bool\,error\)"
    );
}

#[test]
fn nested_func_without_returns() {
    assert_eq!(compile_argument("func(int,string)"), r"func\(int\,string\)");
    assert_eq!(compile_argument("func()"), r"func\(\)");
}

#[test]
fn nested_func_accepts_wildcard_slots() {
    assert_eq!(
        compile_argument("func(*)(error)"),
        format!(r"func\({ANY_SLOT}\)error")
    );
}

#[test]
fn commas_inside_nested_groups_do_not_split() {
    let (count, compiled) = compile_list("func(int,int)(bool),string");
    assert_eq!(count, 2);
    assert_eq!(compiled, r"func\(int\,int\)bool\,string");
}

#[test]
fn commas_inside_brackets_do_not_split() {
    let (count, compiled) = compile_list("Pair[int,string],bool");
    assert_eq!(count, 2);
    assert_eq!(compiled, r"Pair\[int,string\]\,bool");
}

#[test]
fn empty_list_is_one_empty_slot() {
    let (count, compiled) = compile_list("");
    assert_eq!(count, 1);
    assert_eq!(compiled, "");
}
