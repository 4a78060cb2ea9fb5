use pretty_assertions::assert_eq;

use heddle_advice::{Advice, AdviceKind, Expression, ImportTable};

use super::*;

fn declared(raw_literal: &str) -> Advice {
    let imports = ImportTable::default();
    let target = Expression::qualified("logging", "Log");
    Advice::declare(AdviceKind::Before, &target, &imports, raw_literal).unwrap()
}

#[test]
fn only_join_points_with_applicable_advice_produce_a_match() {
    let mut advices = Advices::new();
    advices.add(declared("\"pkg.Run(...)\""));

    let mut join_points = JoinPoints::new();
    join_points.add(JoinPoint::new("pkg.Run(int)"));
    join_points.add(JoinPoint::new("other.Stop()"));

    let found = matches(&join_points, &advices);

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].join_point().path(), "pkg.Run(int)");
    assert_eq!(found[0].advices().len(), 1);

    let (id, advice) = found[0].advices().iter().next().unwrap();
    assert_eq!(id.to_string(), "advice0");
    assert_eq!(advice.kind(), AdviceKind::Before);
}

#[test]
fn every_applicable_advice_is_keyed_by_its_catalogue_position() {
    let mut advices = Advices::new();
    advices.add(declared("\"svc.*Handler.Get*(*)(*,error)\""));
    advices.add(declared("\"other.Stop()\""));
    advices.add(declared("\"svc.*.*(...)\""));

    let mut join_points = JoinPoints::new();
    join_points.add(JoinPoint::new("svc.UserHandler.GetByID(int)(*User,error)"));

    let found = matches(&join_points, &advices);

    assert_eq!(found.len(), 1);
    let ids: Vec<String> = {
        let mut ids: Vec<AdviceId> = found[0].advices().keys().copied().collect();
        ids.sort_unstable();
        ids.iter().map(AdviceId::to_string).collect()
    };
    assert_eq!(ids, ["advice0", "advice2"]);
}

#[test]
fn inert_advice_appears_in_no_match() {
    let inert = declared("\"***broken\"");
    assert!(inert.matcher().is_none());

    let mut advices = Advices::new();
    advices.add(inert);

    let mut join_points = JoinPoints::new();
    join_points.add(JoinPoint::new("pkg.Run()"));

    assert!(matches(&join_points, &advices).is_empty());
}

#[test]
fn empty_inputs_produce_no_matches() {
    assert!(matches(&JoinPoints::new(), &Advices::new()).is_empty());

    let mut join_points = JoinPoints::new();
    join_points.add(JoinPoint::new("pkg.Run()"));
    assert!(matches(&join_points, &Advices::new()).is_empty());
}

#[test]
fn output_preserves_join_point_order() {
    let mut advices = Advices::new();
    advices.add(declared("\"pkg.*(...)\""));

    let mut join_points = JoinPoints::new();
    join_points.add(JoinPoint::new("pkg.C()"));
    join_points.add(JoinPoint::new("pkg.A()"));
    join_points.add(JoinPoint::new("other.X()"));
    join_points.add(JoinPoint::new("pkg.B()"));

    let found = matches(&join_points, &advices);
    let paths: Vec<&str> = found.iter().map(|m| m.join_point().path()).collect();

    assert_eq!(paths, ["pkg.C()", "pkg.A()", "pkg.B()"]);
}
