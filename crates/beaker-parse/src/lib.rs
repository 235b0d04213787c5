//! Recursive-descent parser producing a [`Syntax`] tree for a whole file.
//!
//! Expressions and types share one grammar. Whether a leading `(` or `[` opens
//! a type constructor or an ordinary value is decided per [`Dialect`].

use beaker_span::SymbolTable;
use beaker_syntax::Syntax;
use camino::Utf8Path;

mod dialect;
mod error;
mod grammar;
mod parser;

pub use dialect::{Dialect, UnknownDialect};
pub use error::ParseError;
pub use parser::Parser;

/// Reads, lexes and parses the file at `path`, picking the dialect from its
/// extension.
pub fn parse_file(path: &Utf8Path, symbols: &mut SymbolTable) -> Result<Syntax, ParseError> {
    Parser::new(path, symbols)?.parse_file()
}
