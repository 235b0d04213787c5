use std::fs;

use beaker_span::SymbolTable;
use beaker_syntax::Syntax;
use beaker_tokenizer::TokenKind::*;
use beaker_tokenizer::{Token, TokenKind, TokenSet, tokenize};
use camino::Utf8Path;

use crate::dialect::Grammar;
use crate::{Dialect, ParseError, grammar};

const OPENERS: TokenSet = TokenSet::new([LEFT_PAREN, LEFT_BRACKET, LEFT_BRACE]);
const CLOSERS: TokenSet = TokenSet::new([RIGHT_PAREN, RIGHT_BRACKET, RIGHT_BRACE]);

/// Owns the token buffer of one file and a cursor into it.
pub struct Parser {
    text: String,
    tokens: Vec<Token>,
    position: usize,
    dialect: Dialect,
}

impl Parser {
    /// Reads and lexes the file at `path`, picking the dialect from its
    /// extension.
    pub fn new(path: impl AsRef<Utf8Path>, symbols: &mut SymbolTable) -> Result<Self, ParseError> {
        let path = path.as_ref();
        Self::with_dialect(path, symbols, Dialect::from_path(path))
    }

    pub fn with_dialect(
        path: impl AsRef<Utf8Path>,
        symbols: &mut SymbolTable,
        dialect: Dialect,
    ) -> Result<Self, ParseError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|source| ParseError::Io { path: path.to_owned(), source })?;
        Ok(Self::from_source(text, symbols, dialect))
    }

    pub fn from_source(text: impl Into<String>, symbols: &mut SymbolTable, dialect: Dialect) -> Self {
        let text = text.into();
        let tokens = tokenize(symbols, &text);
        Self { text, tokens, position: 0, dialect }
    }

    /// Parses the whole buffer into a `File` node.
    pub fn parse_file(&mut self) -> Result<Syntax, ParseError> {
        grammar::file(self)
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// The source text the tokens were lexed from.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub(crate) fn grammar(&self) -> &'static Grammar {
        self.dialect.grammar()
    }

    /// The token `n` positions ahead. Past the end this is the end-of-file
    /// token.
    pub(crate) fn nth(&self, n: usize) -> &Token {
        let index = (self.position + n).min(self.tokens.len() - 1);
        &self.tokens[index]
    }

    pub(crate) fn nth_kind(&self, n: usize) -> TokenKind {
        self.nth(n).kind()
    }

    pub(crate) fn peek(&self) -> &Token {
        self.nth(0)
    }

    pub(crate) fn peek_kind(&self) -> TokenKind {
        self.nth_kind(0)
    }

    pub(crate) fn at(&self, kind: TokenKind) -> bool {
        self.peek_kind() == kind
    }

    pub(crate) fn at_any(&self, set: TokenSet) -> bool {
        set.contains(self.peek_kind())
    }

    /// Consumes the current token. The end-of-file token is never consumed.
    pub(crate) fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if !token.is_eof() {
            self.position += 1;
        }
        token
    }

    pub(crate) fn eat(&mut self, kind: TokenKind) -> Option<Token> {
        self.at(kind).then(|| self.advance())
    }

    pub(crate) fn eat_any(&mut self, set: TokenSet) -> Option<Token> {
        self.at_any(set).then(|| self.advance())
    }

    pub(crate) fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        self.eat(kind).ok_or_else(|| ParseError::expected_token(kind, self.peek()))
    }

    pub(crate) fn error(&self, construct: &'static str) -> ParseError {
        ParseError::expected_construct(construct, self.peek())
    }

    /// Offset of the closer matching the opener `n` tokens ahead. Openers and
    /// closers of every kind count towards the same depth, so mismatched
    /// pairs still balance. `None` when the file ends first.
    pub(crate) fn find_matching(&self, n: usize) -> Option<usize> {
        debug_assert!(OPENERS.contains(self.nth_kind(n)));

        let mut depth = 0usize;
        let mut offset = n;
        loop {
            match self.nth_kind(offset) {
                EOF => return None,
                kind if OPENERS.contains(kind) => depth += 1,
                kind if CLOSERS.contains(kind) => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(offset);
                    }
                }
                _ => {}
            }
            offset += 1;
        }
    }
}
