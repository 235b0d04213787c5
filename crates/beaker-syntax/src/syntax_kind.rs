use std::fmt;

/// Structural layout shared by several kinds.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Shape {
    /// A single token.
    Atom,
    /// One operand slot.
    Unary,
    /// Two operand slots.
    Binary,
    /// Three operand slots.
    Ternary,
    /// Any number of terms.
    Multiary,
}

#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SyntaxKind {
    LITERAL,
    IDENTIFIER,

    PREFIX,
    POSTFIX,
    ENCLOSURE,
    FILE,

    INFIX,
    ARRAY,
    FUNCTION,
    TEMPLATE,
    CALL,
    INDEX,
    CONTROL,
    CONSTRAINT,
    CAPTURE,

    DECLARATION,

    LIST,
    SEQUENCE,
}

use SyntaxKind::*;

impl SyntaxKind {
    pub const fn shape(self) -> Shape {
        match self {
            LITERAL | IDENTIFIER => Shape::Atom,
            PREFIX | POSTFIX | ENCLOSURE | FILE => Shape::Unary,
            INFIX | ARRAY | FUNCTION | TEMPLATE | CALL | INDEX | CONTROL | CONSTRAINT
            | CAPTURE => Shape::Binary,
            DECLARATION => Shape::Ternary,
            LIST | SEQUENCE => Shape::Multiary,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            LITERAL => "Literal",
            IDENTIFIER => "Identifier",
            PREFIX => "Prefix",
            POSTFIX => "Postfix",
            ENCLOSURE => "Enclosure",
            FILE => "File",
            INFIX => "Infix",
            ARRAY => "Array",
            FUNCTION => "Function",
            TEMPLATE => "Template",
            CALL => "Call",
            INDEX => "Index",
            CONTROL => "Control",
            CONSTRAINT => "Constraint",
            CAPTURE => "Capture",
            DECLARATION => "Declaration",
            LIST => "List",
            SEQUENCE => "Sequence",
        }
    }

    /// Type constructors: `Array`, `Function` and `Template`.
    pub const fn is_constructor(self) -> bool {
        matches!(self, ARRAY | FUNCTION | TEMPLATE)
    }

    /// Applications of a value to arguments: `Call` and `Index`.
    pub const fn is_application(self) -> bool {
        matches!(self, CALL | INDEX)
    }
}

impl fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
