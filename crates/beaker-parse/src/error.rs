use std::io;

use beaker_errors::Diagnostic;
use beaker_span::SourceLocation;
use beaker_tokenizer::{Token, TokenKind};
use camino::Utf8PathBuf;
use thiserror::Error;

/// Why a parse stopped. Syntax errors are fatal: the first one aborts the
/// parse and no partial tree is produced.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{location}: expected '{expected}' but got '{found}'")]
    ExpectedToken { location: SourceLocation, expected: TokenKind, found: Token },

    #[error("{location}: expected '{construct}' but got '{found}'")]
    ExpectedConstruct { location: SourceLocation, construct: &'static str, found: Token },
}

impl ParseError {
    pub(crate) fn expected_token(expected: TokenKind, found: &Token) -> Self {
        Self::ExpectedToken { location: found.start_location(), expected, found: found.clone() }
    }

    pub(crate) fn expected_construct(construct: &'static str, found: &Token) -> Self {
        Self::ExpectedConstruct {
            location: found.start_location(),
            construct,
            found: found.clone(),
        }
    }

    /// The token the parser stopped at, if this is a syntax error.
    pub fn found(&self) -> Option<&Token> {
        match self {
            Self::Io { .. } => None,
            Self::ExpectedToken { found, .. } | Self::ExpectedConstruct { found, .. } => Some(found),
        }
    }

    pub fn location(&self) -> Option<SourceLocation> {
        self.found().map(Token::start_location)
    }

    /// A renderable report highlighting the offending token. `None` for I/O
    /// failures, which have no source text to point into.
    pub fn diagnostic(&self) -> Option<Diagnostic> {
        let found = self.found()?;
        let message = match self {
            Self::Io { .. } => return None,
            Self::ExpectedToken { expected, .. } => format!("expected '{expected}' but got '{found}'"),
            Self::ExpectedConstruct { construct, .. } => {
                format!("expected '{construct}' but got '{found}'")
            }
        };
        Some(Diagnostic::error(message, found.text_range()))
    }
}
