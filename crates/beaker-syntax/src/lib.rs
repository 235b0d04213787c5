//! Concrete syntax tree for Beaker source files.
//!
//! Every node is a [`Syntax`]: a kind tag over one of five fixed shapes. Trees
//! are built bottom-up by the parser, never mutated afterwards, and owned
//! outright by their root.

mod display;
mod syntax;
mod syntax_kind;
mod visitor;

pub use display::DisplayTree;
pub use syntax::{Children, Syntax};
pub use syntax_kind::{Shape, SyntaxKind};
pub use visitor::{Visitor, walk_children};
