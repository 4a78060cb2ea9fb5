//! Heddle match: pairs join points with the advice that applies to them.
//!
//! A join point is a candidate symbol identified by its canonical
//! signature string. The engine tests every join point against every
//! declared advice and keeps, per join point, the set of advice whose
//! matcher accepts it. Evaluation is embarrassingly parallel: matchers
//! are read-only and per-join-point results are independent, so join
//! points are tested on the rayon pool and collected back in input order,
//! keeping the output deterministic run to run.

use std::fmt;

use rayon::prelude::*;
use rustc_hash::FxHashMap;

use heddle_advice::{Advice, Advices};

/// A candidate symbol eligible for advice application.
///
/// `path` is the canonical signature string: package-qualified name,
/// argument types, and return types in the pattern grammar's literal
/// conventions. Supplied by the symbol-extraction collaborator and
/// read-only here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinPoint {
    path: String,
}

impl JoinPoint {
    pub fn new(path: impl Into<String>) -> Self {
        JoinPoint { path: path.into() }
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

/// The ordered collection of join points supplied by the
/// symbol-extraction collaborator.
#[derive(Debug, Clone, Default)]
pub struct JoinPoints {
    items: Vec<JoinPoint>,
}

impl JoinPoints {
    pub fn new() -> Self {
        JoinPoints::default()
    }

    pub fn add(&mut self, join_point: JoinPoint) {
        self.items.push(join_point);
    }

    pub fn list(&self) -> &[JoinPoint] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Stable identifier of an advice: its position in the catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AdviceId(usize);

impl AdviceId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for AdviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "advice{}", self.0)
    }
}

/// One join point together with every advice that applies to it.
///
/// Built only when at least one advice applies; the map's iteration order
/// carries no meaning.
#[derive(Debug, Clone)]
pub struct Match<'a> {
    join_point: &'a JoinPoint,
    advices: FxHashMap<AdviceId, &'a Advice>,
}

impl<'a> Match<'a> {
    pub fn join_point(&self) -> &'a JoinPoint {
        self.join_point
    }

    pub fn advices(&self) -> &FxHashMap<AdviceId, &'a Advice> {
        &self.advices
    }
}

/// Evaluate every join point against the advice catalogue.
///
/// Join points are tested in parallel and collected in input order. Inert
/// advice never matches; a join point with no applicable advice produces
/// no [`Match`].
pub fn matches<'a>(join_points: &'a JoinPoints, advices: &'a Advices) -> Vec<Match<'a>> {
    let found: Vec<Match<'a>> = join_points
        .list()
        .par_iter()
        .filter_map(|join_point| {
            let applicable: FxHashMap<AdviceId, &Advice> = advices
                .list()
                .iter()
                .enumerate()
                .filter(|(_, advice)| advice.matches(join_point.path()))
                .map(|(index, advice)| (AdviceId(index), advice))
                .collect();

            if applicable.is_empty() {
                None
            } else {
                Some(Match {
                    join_point,
                    advices: applicable,
                })
            }
        })
        .collect();

    tracing::debug!(
        join_points = join_points.len(),
        advices = advices.len(),
        matched = found.len(),
        "match pass complete"
    );

    found
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "tests use unwrap for brevity")]
mod tests;
