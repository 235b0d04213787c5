use std::fmt;
use std::str::FromStr;

use beaker_tokenizer::TokenKind::*;
use beaker_tokenizer::TokenSet;
use camino::Utf8Path;
use thiserror::Error;

/// A variant of the surface syntax for type constructors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// Constructors are recognized by looking past the matching closer.
    #[default]
    Standard,
    /// `array [..] T`, `templ [..] T` and `func (..) T`.
    Keyword,
    /// `[..] T`, `[..] => T` and `(..) -> T`.
    Arrow,
    /// `[..] T`, and `(..) T` when the parenthesis opens a parameter list.
    Parameter,
    /// No constructors; pointer operators and implications only.
    Pointer,
}

impl Dialect {
    pub const ALL: [Self; 5] =
        [Self::Standard, Self::Keyword, Self::Arrow, Self::Parameter, Self::Pointer];

    /// Picks the dialect from the file extension. Unknown extensions use the
    /// standard dialect.
    pub fn from_path(path: &Utf8Path) -> Self {
        match path.extension() {
            Some("bkr" | "bkr1") => Self::Keyword,
            Some("bkr2") => Self::Arrow,
            Some("bkr3") => Self::Parameter,
            Some("bkr4") => Self::Pointer,
            _ => Self::Standard,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Keyword => "keyword",
            Self::Arrow => "arrow",
            Self::Parameter => "parameter",
            Self::Pointer => "pointer",
        }
    }

    pub(crate) fn grammar(self) -> &'static Grammar {
        match self {
            Self::Standard => &STANDARD,
            Self::Keyword => &KEYWORD,
            Self::Arrow => &ARROW,
            Self::Parameter => &PARAMETER,
            Self::Pointer => &POINTER,
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown dialect '{0}'")]
pub struct UnknownDialect(pub String);

impl FromStr for Dialect {
    type Err = UnknownDialect;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|dialect| dialect.name() == s)
            .ok_or_else(|| UnknownDialect(s.to_owned()))
    }
}

/// How a leading `(` or `[` in prefix position is told apart from a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Constructors {
    Lookahead,
    Keyword,
    Arrow,
    Parameter,
    Disabled,
}

/// The precedence layer types are parsed at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TypeLayer {
    Prefix,
    Implication,
}

/// Per-dialect parser configuration.
#[derive(Debug)]
pub(crate) struct Grammar {
    pub(crate) constructors: Constructors,
    pub(crate) prefix_operators: TokenSet,
    pub(crate) implication_operators: TokenSet,
    pub(crate) literals: TokenSet,
    /// Tokens after a constructor specifier that make it a constructor.
    pub(crate) operand_start: TokenSet,
    pub(crate) type_layer: TypeLayer,
    pub(crate) postfix_caret: bool,
    pub(crate) control: bool,
}

const INFIX_OPERATORS: TokenSet = TokenSet::new([
    EQ, EQ2, NEQ, LT, LTEQ, GT, GTEQ, PLUS, MINUS, STAR, SLASH, PERCENT, AND_KW, OR_KW, DOT,
    THIN_ARROW, FAT_ARROW,
]);

const LITERALS: TokenSet = TokenSet::new([INT_NUMBER, TRUE_KW, FALSE_KW, INT_KW, BOOL_KW, TYPE_KW]);
const PREFIX_OPERATORS: TokenSet = TokenSet::new([CONST_KW, CARET, PLUS, MINUS, NOT_KW]);
const IMPLICATION: TokenSet = TokenSet::new([THIN_ARROW]);

const fn operand_start(literals: TokenSet, prefix_operators: TokenSet) -> TokenSet {
    TokenSet::new([IDENT, LEFT_PAREN, LEFT_BRACKET])
        .union(&literals)
        .union(&prefix_operators.difference(&INFIX_OPERATORS))
}

const STANDARD: Grammar = Grammar {
    constructors: Constructors::Lookahead,
    prefix_operators: PREFIX_OPERATORS,
    implication_operators: IMPLICATION,
    literals: LITERALS,
    operand_start: operand_start(LITERALS, PREFIX_OPERATORS),
    type_layer: TypeLayer::Prefix,
    postfix_caret: true,
    control: true,
};

const KEYWORD: Grammar = Grammar {
    constructors: Constructors::Keyword,
    control: false,
    ..STANDARD
};

const ARROW: Grammar = Grammar {
    constructors: Constructors::Arrow,
    implication_operators: TokenSet::EMPTY,
    control: false,
    ..STANDARD
};

const PARAMETER: Grammar = Grammar {
    constructors: Constructors::Parameter,
    control: false,
    ..STANDARD
};

const POINTER_LITERALS: TokenSet = LITERALS.union(&TokenSet::new([PTR_KW, ARRAY_KW]));
const POINTER_PREFIX: TokenSet = TokenSet::new([CONST_KW, STAR, AMP, PLUS, MINUS, NOT_KW]);

const POINTER: Grammar = Grammar {
    constructors: Constructors::Disabled,
    prefix_operators: POINTER_PREFIX,
    implication_operators: TokenSet::new([THIN_ARROW, FAT_ARROW]),
    literals: POINTER_LITERALS,
    operand_start: operand_start(POINTER_LITERALS, POINTER_PREFIX),
    type_layer: TypeLayer::Implication,
    postfix_caret: false,
    control: false,
};
