use beaker_syntax::Syntax;
use beaker_tokenizer::TokenKind::*;
use beaker_tokenizer::TokenSet;

use super::{ParseResult, bracket, exprs, paren, stmts::block};
use crate::parser::Parser;

const CONTROL_KEYWORDS: TokenSet =
    TokenSet::new([IF_KW, CASE_KW, FOR_KW, WHILE_KW, DO_KW, LAMBDA_KW, LET_KW]);

pub(super) fn at_control(p: &Parser) -> bool {
    p.grammar().control && p.at_any(CONTROL_KEYWORDS)
}

pub(super) fn control(p: &mut Parser) -> ParseResult {
    match p.peek_kind() {
        IF_KW => if_(p),
        CASE_KW => case(p),
        FOR_KW | WHILE_KW => loop_(p),
        DO_KW => do_(p),
        LAMBDA_KW => lambda(p),
        LET_KW => let_(p),
        _ => Err(p.error("control-expression")),
    }
}

/// `if (c) {..}` is `Control(if, c, then)`; an `else` branch wraps it as
/// `Control(else, Control(if, ..), otherwise)`.
fn if_(p: &mut Parser) -> ParseResult {
    let keyword = p.expect(IF_KW)?;
    let condition = paren(p)?;
    let then = block(p)?;
    let conditional = Syntax::control(keyword, Some(condition), Some(then));

    let Some(else_) = p.eat(ELSE_KW) else {
        return Ok(conditional);
    };
    let otherwise = if p.at(IF_KW) { if_(p)? } else { block(p)? };
    Ok(Syntax::control(else_, Some(conditional), Some(otherwise)))
}

/// `case (e) p => {..} else p => {..}` with the branches in a `Sequence`.
fn case(p: &mut Parser) -> ParseResult {
    let keyword = p.expect(CASE_KW)?;
    let subject = paren(p)?;

    let mut branches = vec![branch(p)?];
    while p.eat(ELSE_KW).is_some() {
        branches.push(branch(p)?);
    }

    Ok(Syntax::control(keyword, Some(subject), Some(Syntax::sequence(branches))))
}

fn branch(p: &mut Parser) -> ParseResult {
    let pattern = exprs::logical_or(p)?;
    let arrow = p.expect(FAT_ARROW)?;
    let body = block(p)?;
    Ok(Syntax::control(arrow, Some(pattern), Some(body)))
}

/// `for (..) {..}` and `while (..) {..}`.
fn loop_(p: &mut Parser) -> ParseResult {
    let keyword = p.advance();
    let head = paren(p)?;
    let body = block(p)?;
    Ok(Syntax::control(keyword, Some(head), Some(body)))
}

/// `do {..}` or `do {..} while (c)`, the latter as
/// `Control(do, body, Control(while, c, _))`. A `while (c) {..}` after the
/// body is a loop of its own.
fn do_(p: &mut Parser) -> ParseResult {
    let keyword = p.expect(DO_KW)?;
    let body = block(p)?;

    let condition = if p.at(WHILE_KW) && !starts_loop(p) {
        let while_ = p.advance();
        Some(Syntax::control(while_, Some(paren(p)?), None))
    } else {
        None
    };
    Ok(Syntax::control(keyword, Some(body), condition))
}

/// `while (..) {`
fn starts_loop(p: &Parser) -> bool {
    p.nth_kind(1) == LEFT_PAREN
        && p.find_matching(1).is_some_and(|close| p.nth_kind(close + 1) == LEFT_BRACE)
}

/// `lambda [captures]? (parameters) {..}`.
fn lambda(p: &mut Parser) -> ParseResult {
    let keyword = p.expect(LAMBDA_KW)?;

    let head = if p.at(LEFT_BRACKET) {
        let captures = bracket(p)?;
        Syntax::capture(captures, paren(p)?)
    } else {
        paren(p)?
    };

    let body = block(p)?;
    Ok(Syntax::control(keyword, Some(head), Some(body)))
}

/// `let (bindings) {..}` or `let (bindings) expression`.
fn let_(p: &mut Parser) -> ParseResult {
    let keyword = p.expect(LET_KW)?;
    let bindings = paren(p)?;
    let body = if p.at(LEFT_BRACE) { block(p)? } else { exprs::expression(p)? };
    Ok(Syntax::control(keyword, Some(bindings), Some(body)))
}
