use beaker_syntax::Syntax;
use beaker_tokenizer::TokenKind::{self, *};

use crate::ParseError;
use crate::parser::Parser;

mod control;
mod ctors;
mod decls;
mod exprs;
mod stmts;

pub(crate) use decls::file;

type ParseResult = Result<Syntax, ParseError>;

pub(crate) fn identifier(p: &mut Parser) -> ParseResult {
    Ok(Syntax::identifier(p.expect(IDENT)?))
}

pub(crate) fn paren(p: &mut Parser) -> ParseResult {
    enclosure(p, LEFT_PAREN, RIGHT_PAREN)
}

pub(crate) fn bracket(p: &mut Parser) -> ParseResult {
    enclosure(p, LEFT_BRACKET, RIGHT_BRACKET)
}

fn enclosure(p: &mut Parser, open: TokenKind, close: TokenKind) -> ParseResult {
    let open = p.expect(open)?;
    let term = if p.at(close) { None } else { Some(group(p)?) };
    let close = p.expect(close)?;
    Ok(Syntax::enclosure(open, term, close))
}

/// `list (';' list)*`
fn group(p: &mut Parser) -> ParseResult {
    separated(p, SEMICOLON, list)
}

/// `item (',' item)*`, always a `List`, even around a single item.
fn list(p: &mut Parser) -> ParseResult {
    let mut terms = vec![item(p)?];
    while p.eat(COMMA).is_some() {
        terms.push(item(p)?);
    }
    Ok(Syntax::list(terms))
}

/// Parses one or more `element`s separated by `separator`. A single element is
/// returned as is; several are wrapped in a `List`.
pub(crate) fn separated(
    p: &mut Parser,
    separator: TokenKind,
    element: fn(&mut Parser) -> ParseResult,
) -> ParseResult {
    let first = element(p)?;
    if !p.at(separator) {
        return Ok(first);
    }

    let mut terms = vec![first];
    while p.eat(separator).is_some() {
        terms.push(element(p)?);
    }
    Ok(Syntax::list(terms))
}

fn item(p: &mut Parser) -> ParseResult {
    if starts_parameter(p, 0) { decls::parameter(p) } else { exprs::expression(p) }
}

/// `':'`, or identifiers followed by `':'` or `is`, `n` tokens ahead.
pub(crate) fn starts_parameter(p: &Parser, n: usize) -> bool {
    p.nth_kind(n) == COLON || starts_definition(p, n)
}

/// `identifier (',' identifier)* (':' | 'is')`, `n` tokens ahead.
pub(crate) fn starts_definition(p: &Parser, mut n: usize) -> bool {
    loop {
        if p.nth_kind(n) != IDENT {
            return false;
        }
        n += 1;

        match p.nth_kind(n) {
            COMMA => n += 1,
            COLON | IS_KW => return true,
            _ => return false,
        }
    }
}
