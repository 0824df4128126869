use chumsky::prelude::*;

use super::utils::*;

/// A bare search token: a maximal run of term characters, guarded so it can
/// never start where an operator or parenthesis is next.
///
/// The run may be empty. That is how a trailing operand position (`shiny,`)
/// or an empty query resolves to an empty term instead of failing the whole
/// parse.
pub fn term() -> impl Psr<String> {
    no_reserved_ahead().ignore_then(term_chars()).labelled("term")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_word() {
        assert_eq!(term().parse("beep"), Ok("beep".to_string()));
    }

    #[test]
    fn keeps_exact_spelling() {
        assert_eq!(term().parse("Mime+Jr@*"), Ok("Mime+Jr@*".to_string()));
        assert_eq!(term().parse("Flabébé"), Ok("Flabébé".to_string()));
    }

    #[test]
    fn empty_at_end_of_input() {
        assert_eq!(term().parse(""), Ok(String::new()));
    }

    #[test]
    fn refuses_to_start_at_an_operator() {
        for input in ["&a", "|a", ",a", ":a", ";a", "!a", "(a", ")a"] {
            assert!(term().parse(input).is_err(), "accepted {:?}", input);
        }
    }

    #[test]
    fn stops_at_the_first_reserved_character() {
        assert_eq!(term().parse("evolve&shiny"), Ok("evolve".to_string()));
    }
}
