use std::iter::Peekable;

use crate::{
    ast::{Expr, PrefixOperator},
    error::ParseResult,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{Precedence, parse_expression},
            utils::{pos_of, unexpected},
        },
    },
};

/// Parses `!operand` or `-operand`; the operator token has been consumed.
///
/// The operand binds tighter than every binary operator but looser than
/// member access, indexing and calls: `-a.b` is `-(a.b)` and `-a * b` is
/// `(-a) * b`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned after the operator.
/// - `operator`: The `!` (or `not`) or `-` token.
///
/// # Errors
/// Propagates errors from parsing the operand.
pub fn parse_prefix_operator<'a, I>(tokens: &mut Peekable<I>,
                                    operator: &Token)
                                    -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let op = match operator.kind {
        TokenKind::Bang => PrefixOperator::Not,
        TokenKind::Minus => PrefixOperator::Negate,
        _ => return Err(unexpected("BANG or MINUS", operator)),
    };
    let right = parse_expression(tokens, Precedence::Product)?;

    Ok(Expr::Prefix { op,
                      right: Box::new(right),
                      pos: pos_of(operator) })
}
