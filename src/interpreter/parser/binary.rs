use std::iter::Peekable;

use crate::{
    ast::{Expr, InfixOperator},
    error::ParseResult,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{Precedence, parse_expression},
            utils::{expect, parse_comma_separated, pos_of, unexpected},
        },
    },
};

/// Maps a token kind to its binary operator.
///
/// Word operators arrive here already folded by the lexer, so `and`, `or`
/// and `is` need no entries of their own.
///
/// # Example
/// ```
/// use aegis::{
///     ast::InfixOperator,
///     interpreter::{lexer::TokenKind, parser::binary::token_to_infix_operator},
/// };
///
/// assert_eq!(token_to_infix_operator(TokenKind::Plus), Some(InfixOperator::Add));
/// assert_eq!(token_to_infix_operator(TokenKind::Dot), None);
/// ```
#[must_use]
pub const fn token_to_infix_operator(kind: TokenKind) -> Option<InfixOperator> {
    match kind {
        TokenKind::Plus => Some(InfixOperator::Add),
        TokenKind::Minus => Some(InfixOperator::Sub),
        TokenKind::Asterisk => Some(InfixOperator::Mul),
        TokenKind::Slash => Some(InfixOperator::Div),
        TokenKind::Percent => Some(InfixOperator::Mod),
        TokenKind::Eq => Some(InfixOperator::Equal),
        TokenKind::NotEq => Some(InfixOperator::NotEqual),
        TokenKind::Lt => Some(InfixOperator::Less),
        TokenKind::Gt => Some(InfixOperator::Greater),
        TokenKind::LtEq => Some(InfixOperator::LessEqual),
        TokenKind::GtEq => Some(InfixOperator::GreaterEqual),
        TokenKind::And => Some(InfixOperator::And),
        TokenKind::Or => Some(InfixOperator::Or),
        TokenKind::Nor => Some(InfixOperator::Nor),
        TokenKind::In => Some(InfixOperator::In),
        _ => None,
    }
}

/// Parses whatever follows `left` in infix position; `operator` has been
/// consumed.
///
/// Binary operators are left-associative: the right operand is parsed at the
/// operator's own precedence. `(`, `[` and `.` build calls, index and member
/// expressions.
///
/// # Errors
/// Propagates errors from the right operand, arguments or index.
pub fn parse_infix<'a, I>(tokens: &mut Peekable<I>,
                          left: Expr,
                          operator: &Token)
                          -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let pos = pos_of(operator);

    match operator.kind {
        TokenKind::LParen => {
            let args = parse_comma_separated(tokens,
                                             |t| parse_expression(t, Precedence::Lowest),
                                             TokenKind::RParen)?;
            Ok(Expr::Call { callee: Box::new(left),
                            args,
                            pos })
        },
        TokenKind::LBracket => {
            let index = parse_expression(tokens, Precedence::Lowest)?;
            expect(tokens, TokenKind::RBracket)?;
            Ok(Expr::Index { collection: Box::new(left),
                             index: Box::new(index),
                             pos })
        },
        TokenKind::Dot => parse_member(tokens, left, operator),
        kind => {
            let Some(op) = token_to_infix_operator(kind) else {
                return Err(unexpected("an operator", operator));
            };
            let right = parse_expression(tokens, Precedence::of(kind))?;
            Ok(Expr::Infix { left: Box::new(left),
                             op,
                             right: Box::new(right),
                             pos })
        },
    }
}

/// Parses the property name after a `.`.
///
/// Any word is accepted, keywords included, so `module.load_file` and
/// `data.read` both work.
fn parse_member<'a, I>(tokens: &mut Peekable<I>, object: Expr, dot: &Token) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        Some(name) if name.kind.is_word() => Ok(Expr::Member { object:   Box::new(object),
                                                               property: name.literal.clone(),
                                                               pos:      pos_of(dot), }),
        Some(other) => Err(unexpected(TokenKind::Ident, other)),
        None => Err(unexpected(TokenKind::Ident, dot)),
    }
}
