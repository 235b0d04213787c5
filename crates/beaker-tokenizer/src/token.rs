use std::fmt;

use beaker_span::{SourceLocation, SourceRange, Symbol};
use text_size::{TextRange, TextSize};

#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenKind {
    EOF,
    INVALID,
    IDENT,
    INT_NUMBER,

    LEFT_PAREN,
    RIGHT_PAREN,
    LEFT_BRACKET,
    RIGHT_BRACKET,
    LEFT_BRACE,
    RIGHT_BRACE,
    COLON,
    SEMICOLON,
    COMMA,
    DOT,
    EQ,
    EQ2,
    FAT_ARROW,
    NEQ,
    LT,
    LTEQ,
    GT,
    GTEQ,
    PLUS,
    MINUS,
    THIN_ARROW,
    STAR,
    SLASH,
    PERCENT,
    CARET,
    AMP,

    AND_KW,
    ARRAY_KW,
    BOOL_KW,
    CASE_KW,
    CONST_KW,
    DEF_KW,
    DO_KW,
    ELSE_KW,
    FALSE_KW,
    FOR_KW,
    FUNC_KW,
    IF_KW,
    INT_KW,
    IS_KW,
    LAMBDA_KW,
    LET_KW,
    NOT_KW,
    OR_KW,
    PTR_KW,
    TEMPL_KW,
    TRUE_KW,
    TYPE_KW,
    WHILE_KW,
}

use TokenKind::*;

/// Reserved words and the kinds they lex as.
pub const KEYWORDS: [(&str, TokenKind); 23] = [
    ("and", AND_KW),
    ("array", ARRAY_KW),
    ("bool", BOOL_KW),
    ("case", CASE_KW),
    ("const", CONST_KW),
    ("def", DEF_KW),
    ("do", DO_KW),
    ("else", ELSE_KW),
    ("false", FALSE_KW),
    ("for", FOR_KW),
    ("func", FUNC_KW),
    ("if", IF_KW),
    ("int", INT_KW),
    ("is", IS_KW),
    ("lambda", LAMBDA_KW),
    ("let", LET_KW),
    ("not", NOT_KW),
    ("or", OR_KW),
    ("ptr", PTR_KW),
    ("templ", TEMPL_KW),
    ("true", TRUE_KW),
    ("type", TYPE_KW),
    ("while", WHILE_KW),
];

impl TokenKind {
    /// The fixed spelling of the kind, or `None` for kinds that stand for a
    /// class of spellings.
    pub const fn spelling(self) -> Option<&'static str> {
        let spelling = match self {
            EOF | INVALID | IDENT | INT_NUMBER => return None,
            LEFT_PAREN => "(",
            RIGHT_PAREN => ")",
            LEFT_BRACKET => "[",
            RIGHT_BRACKET => "]",
            LEFT_BRACE => "{",
            RIGHT_BRACE => "}",
            COLON => ":",
            SEMICOLON => ";",
            COMMA => ",",
            DOT => ".",
            EQ => "=",
            EQ2 => "==",
            FAT_ARROW => "=>",
            NEQ => "!=",
            LT => "<",
            LTEQ => "<=",
            GT => ">",
            GTEQ => ">=",
            PLUS => "+",
            MINUS => "-",
            THIN_ARROW => "->",
            STAR => "*",
            SLASH => "/",
            PERCENT => "%",
            CARET => "^",
            AMP => "&",
            AND_KW => "and",
            ARRAY_KW => "array",
            BOOL_KW => "bool",
            CASE_KW => "case",
            CONST_KW => "const",
            DEF_KW => "def",
            DO_KW => "do",
            ELSE_KW => "else",
            FALSE_KW => "false",
            FOR_KW => "for",
            FUNC_KW => "func",
            IF_KW => "if",
            INT_KW => "int",
            IS_KW => "is",
            LAMBDA_KW => "lambda",
            LET_KW => "let",
            NOT_KW => "not",
            OR_KW => "or",
            PTR_KW => "ptr",
            TEMPL_KW => "templ",
            TRUE_KW => "true",
            TYPE_KW => "type",
            WHILE_KW => "while",
        };
        Some(spelling)
    }

    /// Human readable name used in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            EOF => "end of file",
            INVALID => "invalid token",
            IDENT => "identifier",
            INT_NUMBER => "integer",
            _ => match self.spelling() {
                Some(spelling) => spelling,
                None => "token",
            },
        }
    }

    pub const fn is_keyword(self) -> bool {
        self as u8 >= AND_KW as u8
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A lexical unit: its kind, interned spelling and where it starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    symbol: Symbol,
    start: SourceLocation,
    offset: TextSize,
}

impl Token {
    pub fn new(kind: TokenKind, symbol: Symbol, start: SourceLocation, offset: TextSize) -> Self {
        Self { kind, symbol, start, offset }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    pub fn spelling(&self) -> &str {
        self.symbol.as_str()
    }

    pub fn is_eof(&self) -> bool {
        self.kind == EOF
    }

    pub fn start_location(&self) -> SourceLocation {
        self.start
    }

    pub fn end_location(&self) -> SourceLocation {
        self.start.advance(self.symbol.len() as u32)
    }

    pub fn range(&self) -> SourceRange {
        SourceRange::new(self.start_location(), self.end_location())
    }

    /// Byte range of the spelling in the source text.
    pub fn text_range(&self) -> TextRange {
        TextRange::at(self.offset, TextSize::new(self.symbol.len() as u32))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_eof() { f.write_str(EOF.name()) } else { f.write_str(self.spelling()) }
    }
}
