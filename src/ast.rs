//! Query-tree node kinds and the constructor seam the parser builds through.

/// The five constructors a query-tree node set must provide.
///
/// The parser is generic over this trait and only ever calls these
/// functions; it never inspects the nodes it has built. That keeps the
/// grammar usable with any downstream node representation, including a
/// throwaway one in tests. Implementations must be structurally comparable,
/// so callers can deduplicate and diff parsed queries.
///
/// Binary constructors take an ordered pair. Chains of three or more
/// operands are always delivered as left-leaning pairs, never flattened.
pub trait QueryTree: Sized + PartialEq + 'static {
    /// A bare search token, exactly as spelled in the input.
    fn term(value: String) -> Self;

    /// A numeric range, optionally qualified by a trailing term.
    ///
    /// At least one bound is present for any interval the grammar emits.
    /// A bare number `N` arrives as `lower == upper == N`.
    fn interval(term: Option<String>, lower: Option<u64>, upper: Option<u64>) -> Self;

    /// Logical OR of exactly two operands.
    fn union(pair: [Self; 2]) -> Self;

    /// Logical AND of exactly two operands.
    fn intersect(pair: [Self; 2]) -> Self;

    /// Logical NOT of a single operand.
    fn complement(child: Self) -> Self;
}

/// The node set shipped with this crate, returned by [`crate::parse`].
///
/// Equality is structural, so parse results can be compared, deduplicated,
/// and diffed directly. Nodes are immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchNode {
    Term(String),
    Interval {
        term: Option<String>,
        lower: Option<u64>,
        upper: Option<u64>,
    },
    Union(Box<SearchNode>, Box<SearchNode>),
    Intersect(Box<SearchNode>, Box<SearchNode>),
    Complement(Box<SearchNode>),
}

impl QueryTree for SearchNode {
    fn term(value: String) -> Self {
        SearchNode::Term(value)
    }

    fn interval(term: Option<String>, lower: Option<u64>, upper: Option<u64>) -> Self {
        SearchNode::Interval { term, lower, upper }
    }

    fn union([left, right]: [Self; 2]) -> Self {
        SearchNode::Union(Box::new(left), Box::new(right))
    }

    fn intersect([left, right]: [Self; 2]) -> Self {
        SearchNode::Intersect(Box::new(left), Box::new(right))
    }

    fn complement(child: Self) -> Self {
        SearchNode::Complement(Box::new(child))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Only the trait's own bounds are available here; this is what keeps
    // equality part of the seam rather than a lucky derive.
    fn trees_equal<T: QueryTree>(a: T, b: T) -> bool {
        a == b
    }

    #[test]
    fn node_sets_are_comparable_through_the_trait() {
        assert!(trees_equal(
            SearchNode::term("a".to_string()),
            SearchNode::term("a".to_string()),
        ));
        assert!(!trees_equal(
            SearchNode::term("a".to_string()),
            SearchNode::complement(SearchNode::term("a".to_string())),
        ));
    }
}
