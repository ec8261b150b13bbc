use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::{ParseError, ParseResult},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            binary::parse_infix,
            block::parse_function_literal,
            unary::parse_prefix_operator,
            utils::{expect, parse_array_literal, parse_object_literal, peek_kind, pos_of},
        },
    },
    util::{num::i64_to_f64_checked, stack::ensure_sufficient_stack},
};

/// Binding strength of operators, weakest first.
///
/// | Level        | Tokens                  |
/// |--------------|-------------------------|
/// | `Or`         | `\|\|` `nor`            |
/// | `And`        | `&&`                    |
/// | `Equality`   | `==` `!=` `in`          |
/// | `Comparison` | `<` `>` `<=` `>=`       |
/// | `Sum`        | `+` `-`                 |
/// | `Product`    | `*` `/` `%`             |
/// | `Postfix`    | `.` `[` `(`             |
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Binds nothing; used to parse a whole expression.
    Lowest,
    /// `||`, `nor`
    Or,
    /// `&&`
    And,
    /// `==`, `!=`, `in`
    Equality,
    /// `<`, `>`, `<=`, `>=`
    Comparison,
    /// `+`, `-`
    Sum,
    /// `*`, `/`, `%`
    Product,
    /// Member access, indexing and calls.
    Postfix,
}

impl Precedence {
    /// Gets the binding strength of a token in infix position.
    ///
    /// Tokens that cannot continue an expression are `Lowest`, which ends
    /// the expression loop.
    ///
    /// # Example
    /// ```
    /// use aegis::interpreter::{lexer::TokenKind, parser::core::Precedence};
    ///
    /// assert!(Precedence::of(TokenKind::Asterisk) > Precedence::of(TokenKind::Plus));
    /// assert_eq!(Precedence::of(TokenKind::Semicolon), Precedence::Lowest);
    /// ```
    #[must_use]
    pub const fn of(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Or | TokenKind::Nor => Self::Or,
            TokenKind::And => Self::And,
            TokenKind::Eq | TokenKind::NotEq | TokenKind::In => Self::Equality,
            TokenKind::Lt | TokenKind::Gt | TokenKind::LtEq | TokenKind::GtEq => Self::Comparison,
            TokenKind::Plus | TokenKind::Minus => Self::Sum,
            TokenKind::Asterisk | TokenKind::Slash | TokenKind::Percent => Self::Product,
            TokenKind::Dot | TokenKind::LBracket | TokenKind::LParen => Self::Postfix,
            _ => Self::Lowest,
        }
    }
}

/// Parses an expression whose operators all bind tighter than `precedence`.
///
/// This is the Pratt loop: one prefix rule for the first token, then infix
/// rules for as long as the next operator binds tighter than the caller.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first token of the
///   expression.
/// - `precedence`: The binding strength of the operator to the left.
///
/// # Errors
/// `ParseError::NoPrefixRule` if the expression cannot start with the next
/// token, or any error from a sub-expression.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>,
                               precedence: Precedence)
                               -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    ensure_sufficient_stack(|| {
        let left = parse_prefix(tokens)?;
        continue_expression(tokens, left, precedence)
    })
}

/// Runs the infix half of the Pratt loop on an already parsed left operand.
///
/// # Errors
/// Propagates errors from the infix rules.
pub fn continue_expression<'a, I>(tokens: &mut Peekable<I>,
                                  mut left: Expr,
                                  precedence: Precedence)
                                  -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    while precedence < Precedence::of(peek_kind(tokens)) {
        let Some(operator) = tokens.next() else {
            break;
        };
        left = parse_infix(tokens, left, operator)?;
    }
    Ok(left)
}

/// Dispatches on the first token of an expression.
fn parse_prefix<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let Some(token) = tokens.next() else {
        return Err(ParseError::NoPrefixRule { found: TokenKind::Eof.to_string(),
                                              line:  0,
                                              col:   0, });
    };
    let pos = pos_of(token);

    match token.kind {
        TokenKind::Ident => Ok(Expr::Identifier { name: token.literal.clone(),
                                                  pos }),
        TokenKind::Number => parse_number(token),
        TokenKind::Str => Ok(Expr::Str { value: token.literal.clone(),
                                         pos }),
        TokenKind::True => Ok(Expr::Boolean { value: true,
                                              pos }),
        TokenKind::False => Ok(Expr::Boolean { value: false,
                                               pos }),
        TokenKind::Null => Ok(Expr::Null { pos }),
        TokenKind::Bang | TokenKind::Minus => parse_prefix_operator(tokens, token),
        TokenKind::LParen => {
            let inner = parse_expression(tokens, Precedence::Lowest)?;
            expect(tokens, TokenKind::RParen)?;
            Ok(inner)
        },
        TokenKind::LBracket => parse_array_literal(tokens, pos),
        TokenKind::LBrace => parse_object_literal(tokens, pos),
        TokenKind::Fn => Ok(Expr::Function(parse_function_literal(tokens, token, None)?)),
        _ => Err(ParseError::NoPrefixRule { found: token.to_string(),
                                            line:  token.line,
                                            col:   token.col, }),
    }
}

/// Converts a number token to a literal.
///
/// Text with a `.` is read as a float; anything else is read as an integer
/// that must be exactly representable as `f64`.
///
/// # Errors
/// `ParseError::InvalidNumber` when the text overflows.
fn parse_number(token: &Token) -> ParseResult<Expr> {
    let invalid = || ParseError::InvalidNumber { literal: token.literal.clone(),
                                                 line:    token.line,
                                                 col:     token.col, };

    let value = if token.literal.contains('.') {
        token.literal
             .parse::<f64>()
             .ok()
             .filter(|v| v.is_finite())
             .ok_or_else(invalid)?
    } else {
        let integer = token.literal.parse::<i64>().map_err(|_| invalid())?;
        i64_to_f64_checked(integer, invalid())?
    };

    Ok(Expr::Number { value,
                      pos: pos_of(token) })
}
