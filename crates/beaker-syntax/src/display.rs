use std::fmt;

use crate::Syntax;
use crate::SyntaxKind::*;

/// Indented rendering of a tree: one line per present node, each line holding
/// the kind name, its source range when known and a kind-specific attribute.
pub struct DisplayTree<'a> {
    root: &'a Syntax,
}

impl<'a> DisplayTree<'a> {
    pub(crate) fn new(root: &'a Syntax) -> Self {
        Self { root }
    }
}

impl fmt::Display for DisplayTree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(f, self.root, 0)
    }
}

fn write_node(f: &mut fmt::Formatter<'_>, syntax: &Syntax, depth: usize) -> fmt::Result {
    write!(f, "{:indent$}{}", "", syntax.kind(), indent = depth * 2)?;

    let location = syntax.location();
    if location.is_valid() {
        write!(f, " @{location}")?;
    }

    write_attribute(f, syntax)?;
    writeln!(f)?;

    for child in syntax.children().flatten() {
        write_node(f, child, depth + 1)?;
    }

    Ok(())
}

fn write_attribute(f: &mut fmt::Formatter<'_>, syntax: &Syntax) -> fmt::Result {
    let name = match syntax.kind() {
        LITERAL => "value",
        IDENTIFIER => "identifier",
        PREFIX | POSTFIX | INFIX => "operator",
        ARRAY | FUNCTION | TEMPLATE => "constructor",
        CONTROL => "keyword",
        DECLARATION => "introducer",
        ENCLOSURE => {
            let open = syntax.token().map_or("", |token| token.spelling());
            let close = syntax.trailing_token().map_or("", |token| token.spelling());
            return write!(f, " kind='{open}{close}'");
        }
        FILE | CALL | INDEX | CONSTRAINT | CAPTURE | LIST | SEQUENCE => return Ok(()),
    };

    match syntax.token() {
        Some(token) => write!(f, " {name}='{}'", token.spelling()),
        None => Ok(()),
    }
}
