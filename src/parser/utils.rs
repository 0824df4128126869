use chumsky::prelude::*;

use crate::tokens::*;

/// Shorthand for the parser type every rule in this crate returns. Named
/// `Psr` so it doesn't collide with chumsky's `Parser` trait in imports.
/// Until trait aliases are stable this needs the empty-trait-plus-blanket-impl
/// spelling.
pub trait Psr<T>: Parser<char, T, Error = Simple<char>> + Clone + 'static {}
impl<S, T> Psr<T> for S where S: Parser<char, T, Error = Simple<char>> + Clone + 'static {}

/// An interval bound: one or more digits, leading zeroes allowed.
pub fn bound() -> impl Psr<u64> {
    filter(char::is_ascii_digit)
        .repeated()
        .at_least(1)
        .collect::<String>()
        .try_map(|digits, span| {
            digits
                .parse()
                .map_err(|_| Simple::custom(span, "interval bound out of range"))
        })
        .labelled("bound")
}

/// A run of term characters. May be empty; callers decide whether that is
/// acceptable at their position.
pub fn term_chars() -> impl Psr<String> {
    filter(|c: &char| c.is_alphanumeric() || TERM_SIGILS.contains(*c))
        .repeated()
        .collect::<String>()
}

/// Zero-width check that the next character is not reserved by an operator.
///
/// Succeeds without consuming anything, including at end of input. This is
/// what stops an empty term from matching directly in front of an operator,
/// so `a,,b` and a dangling `(` fail instead of quietly producing empty
/// operands.
pub fn no_reserved_ahead() -> impl Psr<()> {
    one_of(RESERVED_CHARS)
        .rewind()
        .or_not()
        .try_map(|next, span| match next {
            Some(c) => Err(Simple::custom(
                span,
                format!("a term may not begin with '{}'", c),
            )),
            None => Ok(()),
        })
}
