use beaker_syntax::Syntax;
use beaker_tokenizer::TokenKind::*;

use super::exprs::prefix;
use super::{bracket, paren, starts_parameter};
use crate::ParseError;
use crate::dialect::Constructors;
use crate::parser::Parser;

/// Parses an array, function or template constructor if one starts here.
/// `Ok(None)` leaves the parser untouched.
pub(super) fn constructor(p: &mut Parser) -> Result<Option<Syntax>, ParseError> {
    match p.grammar().constructors {
        Constructors::Lookahead => lookahead(p),
        Constructors::Keyword => keyword(p),
        Constructors::Arrow => arrow(p),
        Constructors::Parameter => parameter(p),
        Constructors::Disabled => Ok(None),
    }
}

/// Decides by looking at what follows the matching closer:
///
/// * `(..) -> T` and `(..) T` are functions when the parenthesis is empty or
///   opens a parameter;
/// * `[..] => T` is a template, and so is `[..] T` when the bracket opens a
///   parameter. Without a `T`, `[..] =>` is left to a `case` branch;
/// * any other `[..] T` is an array.
///
/// `T` has to start with a token that can begin an operand.
fn lookahead(p: &mut Parser) -> Result<Option<Syntax>, ParseError> {
    let opener = p.peek_kind();
    if !matches!(opener, LEFT_PAREN | LEFT_BRACKET) {
        return Ok(None);
    }

    let Some(close) = p.find_matching(0) else {
        return Ok(None);
    };
    let follower = p.nth_kind(close + 1);
    let operand_follows = p.grammar().operand_start.contains(follower);
    let parameters = starts_parameter(p, 1);
    let empty = close == 1;

    let constructor = match opener {
        LEFT_PAREN if (empty || parameters) && follower == THIN_ARROW => {
            let specifier = paren(p)?;
            let arrow = p.advance();
            Syntax::function(Some(arrow), specifier, prefix(p)?)
        }
        LEFT_PAREN if (empty || parameters) && operand_follows => {
            let specifier = paren(p)?;
            Syntax::function(None, specifier, prefix(p)?)
        }
        LEFT_BRACKET
            if follower == FAT_ARROW
                && p.grammar().operand_start.contains(p.nth_kind(close + 2)) =>
        {
            let specifier = bracket(p)?;
            let arrow = p.advance();
            Syntax::template(Some(arrow), specifier, prefix(p)?)
        }
        LEFT_BRACKET if operand_follows => {
            let specifier = bracket(p)?;
            let result = prefix(p)?;
            if parameters {
                Syntax::template(None, specifier, result)
            } else {
                Syntax::array(None, specifier, result)
            }
        }
        _ => return Ok(None),
    };

    Ok(Some(constructor))
}

/// `array [..] T`, `templ [..] T` and `func (..) T`.
fn keyword(p: &mut Parser) -> Result<Option<Syntax>, ParseError> {
    let constructor = match p.peek_kind() {
        ARRAY_KW => {
            let keyword = p.advance();
            let bound = bracket(p)?;
            Syntax::array(Some(keyword), bound, prefix(p)?)
        }
        TEMPL_KW => {
            let keyword = p.advance();
            let parameters = bracket(p)?;
            Syntax::template(Some(keyword), parameters, prefix(p)?)
        }
        FUNC_KW => {
            let keyword = p.advance();
            let parameters = paren(p)?;
            Syntax::function(Some(keyword), parameters, prefix(p)?)
        }
        _ => return Ok(None),
    };

    Ok(Some(constructor))
}

/// `[..] T`, `[..] => T`, and `(..) -> T` when the matching `)` is followed by
/// `->`. A bracket in prefix position always opens a constructor.
fn arrow(p: &mut Parser) -> Result<Option<Syntax>, ParseError> {
    let constructor = match p.peek_kind() {
        LEFT_BRACKET => {
            let specifier = bracket(p)?;
            match p.eat(FAT_ARROW) {
                Some(arrow) => Syntax::template(Some(arrow), specifier, prefix(p)?),
                None => Syntax::array(None, specifier, prefix(p)?),
            }
        }
        LEFT_PAREN => {
            let arrow_follows =
                p.find_matching(0).is_some_and(|close| p.nth_kind(close + 1) == THIN_ARROW);
            if !arrow_follows {
                return Ok(None);
            }

            let parameters = paren(p)?;
            let arrow = p.expect(THIN_ARROW)?;
            Syntax::function(Some(arrow), parameters, prefix(p)?)
        }
        _ => return Ok(None),
    };

    Ok(Some(constructor))
}

/// `[..] T`, and `(..) T` when the parenthesis is empty or starts with `:` or
/// `identifier :`.
fn parameter(p: &mut Parser) -> Result<Option<Syntax>, ParseError> {
    let constructor = match p.peek_kind() {
        LEFT_BRACKET => {
            let bound = bracket(p)?;
            Syntax::array(None, bound, prefix(p)?)
        }
        LEFT_PAREN if opens_parameters(p) => {
            let parameters = paren(p)?;
            Syntax::function(None, parameters, prefix(p)?)
        }
        _ => return Ok(None),
    };

    Ok(Some(constructor))
}

fn opens_parameters(p: &Parser) -> bool {
    match p.nth_kind(1) {
        RIGHT_PAREN | COLON => true,
        IDENT => p.nth_kind(2) == COLON,
        _ => false,
    }
}
