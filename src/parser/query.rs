use chumsky::prelude::*;

use crate::ast::QueryTree;

use super::expr::expr;
use super::utils::*;

/// The whole-input rule: one expression with surrounding whitespace allowed
/// and nothing left over. Trailing unconsumed text is a hard failure, never
/// a silently truncated parse.
pub fn query<T: QueryTree>() -> impl Psr<T> {
    expr().padded().then_ignore(end())
}

#[cfg(test)]
mod tests {
    use chumsky::prelude::*;

    use crate::ast::{QueryTree, SearchNode};

    use super::query;

    fn p(input: &str) -> Result<SearchNode, Vec<Simple<char>>> {
        query::<SearchNode>().parse(input)
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(p("  beep  "), Ok(SearchNode::term("beep".to_string())));
    }

    #[test]
    fn empty_input_is_an_empty_term() {
        assert_eq!(p(""), Ok(SearchNode::term(String::new())));
    }

    #[test]
    fn trailing_garbage_is_rejected() {
        assert!(p("a#b").is_err());
        assert!(p("1-2-3").is_err());
        assert!(p("(a").is_err());
        assert!(p("(").is_err());
    }
}
