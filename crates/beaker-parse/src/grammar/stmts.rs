use beaker_syntax::Syntax;
use beaker_tokenizer::TokenKind::*;

use super::{ParseResult, control, decls, exprs};
use crate::parser::Parser;

/// `'{' statement* '}'`, an `Enclosure` around a `Sequence`.
pub(crate) fn block(p: &mut Parser) -> ParseResult {
    let open = p.expect(LEFT_BRACE)?;

    let mut statements = Vec::new();
    while !p.at(RIGHT_BRACE) && !p.at(EOF) {
        statements.push(statement(p)?);
    }

    let close = p.expect(RIGHT_BRACE)?;
    let statements = (!statements.is_empty()).then(|| Syntax::sequence(statements));
    Ok(Syntax::enclosure(open, statements, close))
}

fn statement(p: &mut Parser) -> ParseResult {
    if decls::starts_declaration(p) {
        return decls::definition(p);
    }

    // Control constructs end in a block and need no terminator.
    if control::at_control(p) {
        let control = control::control(p)?;
        p.eat(SEMICOLON);
        return Ok(control);
    }

    let expression = exprs::expression(p)?;
    p.expect(SEMICOLON)?;
    Ok(expression)
}
