mod expr;
mod interval;
mod query;
mod term;
mod utils;

pub use query::query;
