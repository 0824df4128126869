use chumsky::prelude::*;

use crate::ast::QueryTree;
use crate::tokens::*;

use super::utils::*;
use super::{interval::interval, term::term};

/// The expression grammar.
///
/// Precedence, tightest first: primary (parentheses, interval, term), then
/// `!`, then AND, then OR. Each level is built from the one above it, and
/// both binary levels fold left, so operator chains come out as left-leaning
/// pairs.
pub fn expr<T: QueryTree>() -> impl Psr<T> {
    recursive(|e| {
        // Ordered choice: interval before term, since interval syntax is
        // the structurally more specific of the two.
        let primary = choice((
            parenthetical(e),
            interval().map(|(qual, lower, upper)| T::interval(qual, lower, upper)),
            term().map(T::term),
        ));

        let prec_not = negation(primary);
        let prec_and = conjunction(prec_not);
        disjunction(prec_and)
    })
}

/// Parentheses group; they add no node of their own.
fn parenthetical<T: QueryTree>(e: impl Psr<T>) -> impl Psr<T> {
    e.padded().delimited_by(just(PAREN_L), just(PAREN_R))
}

/// `!` applies to a single primary expression, so `!!a` needs parentheses.
fn negation<T: QueryTree>(operand: impl Psr<T>) -> impl Psr<T> {
    just(NOT_OPERATOR)
        .ignore_then(operand.clone())
        .map(T::complement)
        .or(operand)
}

fn conjunction<T: QueryTree>(operand: impl Psr<T>) -> impl Psr<T> {
    operand
        .clone()
        .then(
            one_of(AND_OPERATORS)
                .padded()
                .ignore_then(operand)
                .repeated(),
        )
        .foldl(|left, right| T::intersect([left, right]))
}

fn disjunction<T: QueryTree>(operand: impl Psr<T>) -> impl Psr<T> {
    operand
        .clone()
        .then(
            one_of(OR_OPERATORS)
                .padded()
                .ignore_then(operand)
                .repeated(),
        )
        .foldl(|left, right| T::union([left, right]))
}
