use beaker_syntax::Syntax;
use beaker_tokenizer::TokenKind::*;
use beaker_tokenizer::TokenSet;

use super::{ParseResult, bracket, control, ctors, identifier, paren};
use crate::dialect::TypeLayer;
use crate::parser::Parser;

const LOGICAL_OR: TokenSet = TokenSet::new([OR_KW]);
const LOGICAL_AND: TokenSet = TokenSet::new([AND_KW]);
const EQUALITY: TokenSet = TokenSet::new([EQ2, NEQ]);
const RELATIONAL: TokenSet = TokenSet::new([LT, GT, LTEQ, GTEQ]);
const ADDITIVE: TokenSet = TokenSet::new([PLUS, MINUS]);
const MULTIPLICATIVE: TokenSet = TokenSet::new([STAR, SLASH, PERCENT]);

pub(crate) fn ty(p: &mut Parser) -> ParseResult {
    match p.grammar().type_layer {
        TypeLayer::Prefix => prefix(p),
        TypeLayer::Implication => implication(p),
    }
}

pub(crate) fn expression(p: &mut Parser) -> ParseResult {
    if control::at_control(p) { control::control(p) } else { assignment(p) }
}

fn assignment(p: &mut Parser) -> ParseResult {
    let lhs = implication(p)?;
    match p.eat(EQ) {
        Some(op) => Ok(Syntax::infix(lhs, op, assignment(p)?)),
        None => Ok(lhs),
    }
}

fn implication(p: &mut Parser) -> ParseResult {
    let lhs = logical_or(p)?;
    match p.eat_any(p.grammar().implication_operators) {
        Some(op) => Ok(Syntax::infix(lhs, op, implication(p)?)),
        None => Ok(lhs),
    }
}

pub(crate) fn logical_or(p: &mut Parser) -> ParseResult {
    left_assoc(p, LOGICAL_OR, logical_and)
}

fn logical_and(p: &mut Parser) -> ParseResult {
    left_assoc(p, LOGICAL_AND, equality)
}

fn equality(p: &mut Parser) -> ParseResult {
    left_assoc(p, EQUALITY, relational)
}

fn relational(p: &mut Parser) -> ParseResult {
    left_assoc(p, RELATIONAL, additive)
}

fn additive(p: &mut Parser) -> ParseResult {
    left_assoc(p, ADDITIVE, multiplicative)
}

fn multiplicative(p: &mut Parser) -> ParseResult {
    left_assoc(p, MULTIPLICATIVE, prefix)
}

fn left_assoc(
    p: &mut Parser,
    operators: TokenSet,
    operand: fn(&mut Parser) -> ParseResult,
) -> ParseResult {
    let mut lhs = operand(p)?;
    while let Some(op) = p.eat_any(operators) {
        let rhs = operand(p)?;
        lhs = Syntax::infix(lhs, op, rhs);
    }
    Ok(lhs)
}

pub(crate) fn prefix(p: &mut Parser) -> ParseResult {
    if let Some(op) = p.eat_any(p.grammar().prefix_operators) {
        let operand = prefix(p)?;
        return Ok(Syntax::prefix(op, operand));
    }

    match ctors::constructor(p)? {
        Some(constructor) => Ok(constructor),
        None => postfix(p),
    }
}

pub(crate) fn postfix(p: &mut Parser) -> ParseResult {
    let mut lhs = primary(p)?;

    loop {
        lhs = match p.peek_kind() {
            LEFT_PAREN => Syntax::call(lhs, paren(p)?),
            LEFT_BRACKET => Syntax::index(lhs, bracket(p)?),
            DOT => {
                let dot = p.advance();
                Syntax::infix(lhs, dot, identifier(p)?)
            }
            CARET if p.grammar().postfix_caret => {
                let op = p.advance();
                Syntax::postfix(lhs, op)
            }
            _ => return Ok(lhs),
        };
    }
}

fn primary(p: &mut Parser) -> ParseResult {
    match p.peek_kind() {
        kind if p.grammar().literals.contains(kind) => Ok(Syntax::literal(p.advance())),
        IDENT => Ok(Syntax::identifier(p.advance())),
        LEFT_PAREN => paren(p),
        LEFT_BRACKET => bracket(p),
        _ => Err(p.error("primary-expression")),
    }
}
