use std::iter::Peekable;

use crate::{
    ast::{Expr, ObjectProperty, Position},
    error::{ParseError, ParseResult},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{Precedence, parse_expression},
    },
};

/// Gets the kind of the next token without consuming it.
///
/// A stream that ran dry reads as end of input.
pub(in crate::interpreter::parser) fn peek_kind<'a, I>(tokens: &mut Peekable<I>) -> TokenKind
    where I: Iterator<Item = &'a Token>
{
    tokens.peek().map_or(TokenKind::Eof, |token| token.kind)
}

/// Consumes the next token if it has the given kind.
///
/// # Returns
/// `true` if a token was consumed.
pub(in crate::interpreter::parser) fn skip_if<'a, I>(tokens: &mut Peekable<I>,
                                                     kind: TokenKind)
                                                     -> bool
    where I: Iterator<Item = &'a Token>
{
    if peek_kind(tokens) == kind {
        tokens.next();
        return true;
    }
    false
}

/// Consumes the next token, which must have the kind `expected`.
///
/// # Errors
/// `ParseError::UnexpectedToken` naming both kinds when it does not.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    expected: TokenKind)
                                                    -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        Some(token) if token.kind == expected => Ok(token),
        Some(token) => Err(unexpected(expected, token)),
        None => Err(ParseError::UnexpectedToken { expected: expected.to_string(),
                                                  found:    TokenKind::Eof.to_string(),
                                                  line:     0,
                                                  col:      0, }),
    }
}

/// Builds the error for finding `found` where `expected` was required.
pub(in crate::interpreter::parser) fn unexpected(expected: impl ToString,
                                                 found: &Token)
                                                 -> ParseError {
    ParseError::UnexpectedToken { expected: expected.to_string(),
                                  found:    found.to_string(),
                                  line:     found.line,
                                  col:      found.col, }
}

/// Gets the source position of a token.
pub(in crate::interpreter::parser) const fn pos_of(token: &Token) -> Position {
    Position::new(token.line, token.col)
}

/// Parses a plain identifier and returns its name.
///
/// # Errors
/// Returns a `ParseError` if the next token is not an identifier.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<String>
    where I: Iterator<Item = &'a Token>
{
    expect(tokens, TokenKind::Ident).map(|token| token.literal.clone())
}

/// Parses a comma-separated list of items until a closing token.
///
/// Shared by array literals, object literals, argument lists and parameter
/// lists. An immediately encountered closing token produces an empty list.
/// Trailing commas are not part of the grammar.
///
/// Grammar (simplified): `list := (item ("," item)*)? closing`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item or closing token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token kind that terminates the list.
///
/// # Errors
/// Returns a `ParseError` if an item fails to parse or something other than
/// a comma or the closing token follows an item.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: TokenKind)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a Token>
{
    let mut items = Vec::new();
    if skip_if(tokens, closing) {
        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        if !skip_if(tokens, TokenKind::Comma) {
            expect(tokens, closing)?;
            return Ok(items);
        }
    }
}

/// Parses an array literal; the `[` has been consumed.
///
/// Grammar: `array := "[" (expression ("," expression)*)? "]"`
pub(in crate::interpreter::parser) fn parse_array_literal<'a, I>(tokens: &mut Peekable<I>,
                                                                 pos: Position)
                                                                 -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let elements = parse_comma_separated(tokens,
                                         |t| parse_expression(t, Precedence::Lowest),
                                         TokenKind::RBracket)?;
    Ok(Expr::Array { elements, pos })
}

/// Parses an object literal; the `{` has been consumed.
///
/// Keys are bare names or strings. Reserved words are accepted as bare keys
/// so that every property reachable with `.` can also be written literally.
///
/// Grammar: `object := "{" (key ":" expression ("," key ":" expression)*)? "}"`
///
/// # Errors
/// `ParseError::InvalidObjectKey` when a key is neither a name nor a string.
pub(in crate::interpreter::parser) fn parse_object_literal<'a, I>(tokens: &mut Peekable<I>,
                                                                  pos: Position)
                                                                  -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let properties = parse_comma_separated(tokens, parse_object_property, TokenKind::RBrace)?;
    Ok(Expr::Object { properties, pos })
}

/// Parses one `key: value` entry.
fn parse_object_property<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<ObjectProperty>
    where I: Iterator<Item = &'a Token>
{
    let key = match tokens.next() {
        Some(token) if token.kind == TokenKind::Str || token.kind.is_word() => token,
        Some(token) => {
            return Err(ParseError::InvalidObjectKey { found: token.to_string(),
                                                      line:  token.line,
                                                      col:   token.col, });
        },
        None => return Err(ParseError::InvalidObjectKey { found: TokenKind::Eof.to_string(),
                                                          line:  0,
                                                          col:   0, }),
    };
    expect(tokens, TokenKind::Colon)?;
    let value = parse_expression(tokens, Precedence::Lowest)?;

    Ok(ObjectProperty { key: key.literal.clone(),
                        value,
                        pos: pos_of(key) })
}
