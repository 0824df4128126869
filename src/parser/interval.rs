use chumsky::prelude::*;

use crate::tokens::*;

use super::utils::*;

/// The pieces of a matched interval: qualifier, lower bound, upper bound.
pub type IntervalParts = (Option<String>, Option<u64>, Option<u64>);

/// A numeric range, optionally qualified by a trailing term: `1-2attack`,
/// `-3hp`, `3-`, or a bare number like `151` (which means `151-151`).
///
/// Alternatives are tried most-specific first. A separator form is only
/// given up on when it cannot match, so `3-defense` falls through to the
/// lower-bound-only form and `3*` all the way to the bare-number form.
pub fn interval() -> impl Psr<IntervalParts> {
    let sep = just(INTERVAL_SEPARATOR);

    let bounded_above = bound()
        .or_not()
        .then_ignore(sep)
        .then(bound())
        .then(qualifier())
        .map(|((lower, upper), term)| (term, lower, Some(upper)));

    let bounded_below = bound()
        .then_ignore(sep)
        .then(qualifier())
        .map(|(lower, term)| (term, Some(lower), None));

    // A number with no separator at all still reads as a range; a query
    // like `151` filters on the exact value.
    let exact = bound()
        .then(qualifier())
        .map(|(n, term)| (term, Some(n), Some(n)));

    choice((bounded_above, bounded_below, exact)).labelled("interval")
}

/// The optional trailing term of an interval. Zero-length yields `None`,
/// never an empty string.
fn qualifier() -> impl Psr<Option<String>> {
    term_chars().map(|s| if s.is_empty() { None } else { Some(s) })
}
