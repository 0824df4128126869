//! Characters with a fixed meaning in the sift grammar.

/// Binary AND. Either spelling is accepted; both build the same node.
pub const AND_OPERATORS: &str = "&|";

/// Binary OR. `,` `:` and `;` are interchangeable.
pub const OR_OPERATORS: &str = ",:;";

pub const NOT_OPERATOR: char = '!';

pub const PAREN_L: char = '(';
pub const PAREN_R: char = ')';

/// Separates the lower and upper bounds of an interval.
pub const INTERVAL_SEPARATOR: char = '-';

/// Non-alphanumeric characters allowed inside a term.
pub const TERM_SIGILS: &str = "+@*";

/// Every character claimed by an operator or grouping token. A term may not
/// begin at a position where one of these is next.
pub const RESERVED_CHARS: &str = "&|,:;!()";
