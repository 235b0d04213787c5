//! Turns source text into a flat, eagerly built buffer of [`Token`]s.
//!
//! Lexing is total: characters that start no token come out as one
//! character [`TokenKind::INVALID`] tokens, so callers never see a lexical
//! error. Byte-order marks are not recognized and only single-byte encodings
//! get correct columns.

mod cursor;
mod token;
mod token_set;

use beaker_span::{SourceLocation, Symbol, SymbolTable};
use cursor::Cursor;
use rustc_hash::FxHashMap;
use text_size::{TextRange, TextSize};
pub use token::{KEYWORDS, Token, TokenKind};
use token::TokenKind::*;
pub use token_set::TokenSet;

pub struct Lexer<'a> {
    text: &'a str,
    cursor: Cursor<'a>,
    symbols: &'a mut SymbolTable,
    keywords: FxHashMap<Symbol, TokenKind>,
}

impl<'a> Lexer<'a> {
    pub fn new(symbols: &'a mut SymbolTable, text: &'a str) -> Self {
        let keywords = KEYWORDS
            .iter()
            .map(|&(spelling, kind)| (symbols.intern(spelling), kind))
            .collect();

        Self { text, cursor: Cursor::new(text), symbols, keywords }
    }

    fn offset(&self) -> TextSize {
        TextSize::new(self.text.len() as u32) - self.cursor.len()
    }

    /// Interns the text scanned since `start`.
    fn symbol_from(&mut self, start: TextSize) -> Symbol {
        let range = TextRange::new(start, self.offset());
        self.symbols.intern(&self.text[range])
    }

    /// Returns the next token. Once the input is exhausted every call returns
    /// an end-of-file token.
    pub fn next_token(&mut self) -> Token {
        self.trivia();

        let location = self.cursor.location();
        let offset = self.offset();

        if self.cursor.is_eof() {
            let symbol = self.symbols.intern("");
            return Token::new(EOF, symbol, location, offset);
        }

        match self.cursor.peek() {
            'A'..='Z' | 'a'..='z' | '_' => self.word(location, offset),
            '0'..='9' => self.number(location, offset),
            _ => self.punctuator(location, offset),
        }
    }

    /// Lexes the rest of the input. The returned buffer always ends with
    /// exactly one end-of-file token.
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token();
            let eof = token.is_eof();
            tokens.push(token);

            if eof {
                return tokens;
            }
        }
    }

    fn trivia(&mut self) {
        loop {
            match self.cursor.peek() {
                '#' => self.cursor.advance_while(|c| c != '\n'),
                c if c.is_ascii_whitespace() => {
                    self.cursor.advance_while(|c| c.is_ascii_whitespace());
                }
                _ => break,
            }
        }
    }

    fn word(&mut self, location: SourceLocation, offset: TextSize) -> Token {
        self.cursor.advance_while(|c| c.is_ascii_alphanumeric() || c == '_');

        let symbol = self.symbol_from(offset);
        let kind = self.keywords.get(&symbol).copied().unwrap_or(IDENT);
        Token::new(kind, symbol, location, offset)
    }

    fn number(&mut self, location: SourceLocation, offset: TextSize) -> Token {
        self.cursor.advance_while(|c| c.is_ascii_digit());

        let symbol = self.symbol_from(offset);
        Token::new(INT_NUMBER, symbol, location, offset)
    }

    fn punctuator(&mut self, location: SourceLocation, offset: TextSize) -> Token {
        let second = self.cursor.second();

        let (kind, len) = match self.cursor.peek() {
            '(' => (LEFT_PAREN, 1),
            ')' => (RIGHT_PAREN, 1),
            '[' => (LEFT_BRACKET, 1),
            ']' => (RIGHT_BRACKET, 1),
            '{' => (LEFT_BRACE, 1),
            '}' => (RIGHT_BRACE, 1),
            ':' => (COLON, 1),
            ';' => (SEMICOLON, 1),
            ',' => (COMMA, 1),
            '.' => (DOT, 1),
            '+' => (PLUS, 1),
            '*' => (STAR, 1),
            '/' => (SLASH, 1),
            '%' => (PERCENT, 1),
            '^' => (CARET, 1),
            '&' => (AMP, 1),
            '=' => match second {
                '=' => (EQ2, 2),
                '>' => (FAT_ARROW, 2),
                _ => (EQ, 1),
            },
            '!' => match second {
                '=' => (NEQ, 2),
                _ => (INVALID, 1),
            },
            '<' => match second {
                '=' => (LTEQ, 2),
                _ => (LT, 1),
            },
            '>' => match second {
                '=' => (GTEQ, 2),
                _ => (GT, 1),
            },
            '-' => match second {
                '>' => (THIN_ARROW, 2),
                _ => (MINUS, 1),
            },
            _ => (INVALID, 1),
        };

        for _ in 0..len {
            self.cursor.advance();
        }

        let symbol = self.symbol_from(offset);
        Token::new(kind, symbol, location, offset)
    }
}

/// Lexes all of `text` at once.
pub fn tokenize(symbols: &mut SymbolTable, text: &str) -> Vec<Token> {
    Lexer::new(symbols, text).tokenize()
}
