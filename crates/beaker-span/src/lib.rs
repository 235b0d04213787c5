//! Interned symbols and line/column source positions shared by every stage of
//! the front end.

mod location;
mod symbol;

pub use location::{SourceLocation, SourceRange};
pub use symbol::{Symbol, SymbolTable};
