use pretty_assertions::assert_eq;

use super::*;

fn table() -> ImportTable {
    ImportTable::new(vec![
        Import::aliased("m", "github.com/acme/model"),
        Import::new("github.com/acme/http"),
        Import::new("github.com/other/http"),
    ])
}

#[test]
fn alias_wins_outright() {
    assert_eq!(table().resolve("m"), "github.com/acme/model");
}

#[test]
fn last_path_segment_is_the_default_local_name() {
    let imports = ImportTable::new(vec![Import::new("github.com/acme/logging")]);
    assert_eq!(imports.resolve("logging"), "github.com/acme/logging");
}

#[test]
fn suffix_fallback_takes_the_last_match() {
    assert_eq!(table().resolve("http"), "github.com/acme/http");

    let no_local = ImportTable::new(vec![
        Import::aliased("a", "github.com/acme/http"),
        Import::aliased("b", "github.com/other/http"),
    ]);
    assert_eq!(no_local.resolve("http"), "github.com/other/http");
}

#[test]
fn unresolved_qualifier_yields_the_empty_path() {
    assert_eq!(table().resolve("missing"), "");
    assert_eq!(ImportTable::default().resolve("anything"), "");
}
