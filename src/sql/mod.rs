//! SQL DDL parsing and generation.

mod dialect;
mod generator;
mod parser;
mod splitter;
mod types;

pub use dialect::Dialect;
pub use generator::generate_sql;
pub use parser::{infer_relationships, parse_sql, SqlParseError};
