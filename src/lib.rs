//! Parser for sift, a compact query language for filtering a collection of
//! records by name-like terms, numeric ranges, and boolean combinators.
//!
//! - **Terms**: `shiny` - an exact token
//! - **Intervals**: `1-2attack`, `-3hp`, `151` - numeric ranges, optionally
//!   qualified by a trailing term
//! - **AND**: `a&b` (or `a|b`)
//! - **OR**: `a,b` (or `a:b`, `a;b`) - binds looser than AND
//! - **NOT**: `!a` - binds tighter than both
//! - **Grouping**: `!(a,b)`
//!
//! ```
//! use sift_parser::{parse, SearchNode};
//!
//! let tree = parse("!shiny&lucky").unwrap();
//! assert_eq!(
//!     tree,
//!     SearchNode::Intersect(
//!         Box::new(SearchNode::Complement(Box::new(SearchNode::Term(
//!             "shiny".to_string()
//!         )))),
//!         Box::new(SearchNode::Term("lucky".to_string())),
//!     )
//! );
//! ```
//!
//! Parsing is a pure function: no state is held across calls and the
//! grammar is safe to use from any number of threads at once.

mod parser;

pub mod ast;
pub mod error;
pub mod tokens;

pub use ast::{QueryTree, SearchNode};
pub use error::SyntaxError;

use chumsky::Parser;

/// Parses a query into the node set shipped with this crate.
pub fn parse(input: &str) -> Result<SearchNode, SyntaxError> {
    parse_as::<SearchNode>(input)
}

/// Parses a query, building the result through any [`QueryTree`]
/// implementation.
pub fn parse_as<T: QueryTree>(input: &str) -> Result<T, SyntaxError> {
    parser::query::<T>()
        .parse(input)
        .map_err(|errors| SyntaxError::from_engine(input, errors))
}
