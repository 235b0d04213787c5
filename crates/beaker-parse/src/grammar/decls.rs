use beaker_syntax::Syntax;
use beaker_tokenizer::TokenKind::*;
use beaker_tokenizer::TokenSet;

use super::{ParseResult, exprs, identifier, separated, starts_definition, stmts};
use crate::ParseError;
use crate::parser::Parser;

/// Tokens after `:` that leave the type out.
const NO_TYPE: TokenSet = TokenSet::new([EQ, IS_KW]);

pub(crate) fn file(p: &mut Parser) -> ParseResult {
    let mut declarations = Vec::new();
    while !p.at(EOF) {
        declarations.push(declaration(p)?);
    }

    let declarations = (!declarations.is_empty()).then(|| Syntax::sequence(declarations));
    Ok(Syntax::file(declarations))
}

fn declaration(p: &mut Parser) -> ParseResult {
    if starts_declaration(p) { definition(p) } else { Err(p.error("declaration")) }
}

pub(super) fn starts_declaration(p: &Parser) -> bool {
    p.at(DEF_KW) || starts_definition(p, 0)
}

/// `'def'? declarators (':' type? constraint? | constraint) initializer`
pub(super) fn definition(p: &mut Parser) -> ParseResult {
    let introducer = p.eat(DEF_KW);
    let declarator = if introducer.is_some() {
        separated(p, COMMA, exprs::postfix)?
    } else {
        separated(p, COMMA, identifier)?
    };
    let ty = typing(p)?;

    if ty.is_some()
        && let Some(semicolon) = p.eat(SEMICOLON)
    {
        return Ok(Syntax::declaration(introducer, Some(declarator), ty, None, Some(semicolon)));
    }

    if p.at(LEFT_BRACE) {
        let body = stmts::block(p)?;
        return Ok(Syntax::declaration(introducer, Some(declarator), ty, Some(body), None));
    }

    p.expect(EQ)?;
    let initializer = exprs::expression(p)?;
    let semicolon = p.expect(SEMICOLON)?;
    Ok(Syntax::declaration(introducer, Some(declarator), ty, Some(initializer), Some(semicolon)))
}

/// `':' type? constraint? ('=' expression)?` with an optional list of
/// identifiers in front. Parameters have neither introducer nor terminator.
pub(super) fn parameter(p: &mut Parser) -> ParseResult {
    let declarator = if p.at(COLON) { None } else { Some(separated(p, COMMA, identifier)?) };
    let ty = typing(p)?;
    let initializer = match p.eat(EQ) {
        Some(_) => Some(exprs::expression(p)?),
        None => None,
    };
    Ok(Syntax::declaration(None, declarator, ty, initializer, None))
}

/// `':' type? ('is' type)?` or `'is' type`. A constraint wraps the type, if
/// any, in a `Constraint` node.
fn typing(p: &mut Parser) -> Result<Option<Syntax>, ParseError> {
    let colon = p.eat(COLON);
    let ty = match colon {
        Some(_) if !p.at_any(NO_TYPE) => Some(exprs::ty(p)?),
        _ => None,
    };

    match p.eat(IS_KW) {
        Some(is) => {
            let pattern = exprs::ty(p)?;
            Ok(Some(Syntax::constraint(is, ty, pattern)))
        }
        None if colon.is_none() => Err(ParseError::expected_token(COLON, p.peek())),
        None => Ok(ty),
    }
}
