use std::{iter::Peekable, rc::Rc};

use crate::{
    ast::{Block, FunctionDefinition},
    error::ParseResult,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            statement::parse_statement,
            utils::{expect, parse_comma_separated, parse_identifier, peek_kind, pos_of},
        },
    },
};

/// Parses a `{ ... }` block of statements.
///
/// Grammar: `block := "{" statement* "}"`
///
/// # Errors
/// Returns a `ParseError` if the braces are missing or a statement fails to
/// parse.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Block>
    where I: Iterator<Item = &'a Token>
{
    let open = expect(tokens, TokenKind::LBrace)?;
    let mut statements = Vec::new();

    while !matches!(peek_kind(tokens), TokenKind::RBrace | TokenKind::Eof) {
        statements.push(parse_statement(tokens)?);
    }
    expect(tokens, TokenKind::RBrace)?;

    Ok(Block { statements,
               pos: pos_of(open) })
}

/// Parses the parameter list and body of a function; the `fn` keyword (and
/// the name, for declarations) has been consumed.
///
/// Grammar: `function := "fn" name? "(" (ident ("," ident)*)? ")" block`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `(`.
/// - `keyword`: The `fn` token, whose position the definition takes.
/// - `name`: The declared name, if any.
///
/// # Errors
/// Returns a `ParseError` for a malformed parameter list or body.
pub fn parse_function_literal<'a, I>(tokens: &mut Peekable<I>,
                                     keyword: &Token,
                                     name: Option<String>)
                                     -> ParseResult<Rc<FunctionDefinition>>
    where I: Iterator<Item = &'a Token>
{
    expect(tokens, TokenKind::LParen)?;
    let params = parse_comma_separated(tokens, parse_identifier, TokenKind::RParen)?;
    let body = parse_block(tokens)?;

    Ok(Rc::new(FunctionDefinition { name,
                                    params,
                                    body,
                                    pos: pos_of(keyword) }))
}
