use std::iter::Peekable;

use crate::{
    ast::{AssignTarget, Block, Expr, IfStatement, PrefixOperator, Program, Stmt},
    error::{ParseError, ParseResult},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            block::{parse_block, parse_function_literal},
            core::{Precedence, continue_expression, parse_expression},
            utils::{expect, parse_identifier, peek_kind, pos_of, skip_if},
        },
    },
};

/// Parses statements until the end of input.
///
/// # Errors
/// Returns the first `ParseError` encountered.
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Program>
    where I: Iterator<Item = &'a Token>
{
    let pos = tokens.peek().map(|token| pos_of(token)).unwrap_or_default();
    let mut body = Vec::new();

    while peek_kind(tokens) != TokenKind::Eof {
        body.push(parse_statement(tokens)?);
    }

    Ok(Program { body, pos })
}

/// Parses a single statement, dispatching on its leading keyword.
///
/// A trailing `;` is optional and consumed when present.
///
/// # Errors
/// Returns a `ParseError` if the statement is malformed.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a Token>
{
    let statement = match tokens.peek().map(|token| (token.kind, *token)) {
        Some((TokenKind::Let, keyword)) => {
            tokens.next();
            parse_let(tokens, keyword)?
        },
        Some((TokenKind::Set, keyword)) => {
            tokens.next();
            parse_set(tokens, keyword)?
        },
        Some((TokenKind::Return, keyword)) => {
            tokens.next();
            parse_return(tokens, keyword)?
        },
        Some((TokenKind::If, keyword)) => {
            tokens.next();
            Stmt::If(parse_if(tokens, keyword)?)
        },
        Some((TokenKind::Unless, keyword)) => {
            tokens.next();
            Stmt::If(parse_unless(tokens, keyword)?)
        },
        Some((TokenKind::While | TokenKind::Until, keyword)) => {
            tokens.next();
            parse_loop(tokens, keyword)?
        },
        Some((TokenKind::Fn, keyword)) => {
            tokens.next();
            parse_function_statement(tokens, keyword)?
        },
        _ => {
            let expr = parse_expression(tokens, Precedence::Lowest)?;
            Stmt::Expression { pos: expr.pos(),
                               expr }
        },
    };

    skip_if(tokens, TokenKind::Semicolon);
    Ok(statement)
}

/// `let name = value`
fn parse_let<'a, I>(tokens: &mut Peekable<I>, keyword: &Token) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a Token>
{
    let name = parse_identifier(tokens)?;
    expect(tokens, TokenKind::Assign)?;
    let value = parse_expression(tokens, Precedence::Lowest)?;

    Ok(Stmt::Let { name,
                   value,
                   pos: pos_of(keyword) })
}

/// `set target = value`
///
/// The target is parsed with only postfix operators allowed to bind, then
/// checked to be an identifier, index or member expression.
///
/// # Errors
/// `ParseError::InvalidAssignmentTarget` for any other target.
fn parse_set<'a, I>(tokens: &mut Peekable<I>, keyword: &Token) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a Token>
{
    let target = parse_expression(tokens, Precedence::Product)?;
    let target = AssignTarget::try_from(target).map_err(|expr| {
                     let pos = expr.pos();
                     ParseError::InvalidAssignmentTarget { line: pos.line,
                                                           col:  pos.col, }
                 })?;
    expect(tokens, TokenKind::Assign)?;
    let value = parse_expression(tokens, Precedence::Lowest)?;

    Ok(Stmt::Assign { target,
                      value,
                      pos: pos_of(keyword) })
}

/// `return [value]`
///
/// There is no value when the statement ends right after the keyword.
fn parse_return<'a, I>(tokens: &mut Peekable<I>, keyword: &Token) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a Token>
{
    let value = match peek_kind(tokens) {
        TokenKind::Semicolon | TokenKind::RBrace | TokenKind::Eof => None,
        _ => Some(parse_expression(tokens, Precedence::Lowest)?),
    };

    Ok(Stmt::Return { value,
                      pos: pos_of(keyword) })
}

/// `(test)`, shared by every conditional and loop head.
fn parse_condition<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    expect(tokens, TokenKind::LParen)?;
    let test = parse_expression(tokens, Precedence::Lowest)?;
    expect(tokens, TokenKind::RParen)?;
    Ok(test)
}

/// The optional trailing `else`, `yet` or `otherwise` block.
fn parse_else<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Block>>
    where I: Iterator<Item = &'a Token>
{
    match peek_kind(tokens) {
        TokenKind::Else | TokenKind::Yet | TokenKind::Otherwise => {
            tokens.next();
            Ok(Some(parse_block(tokens)?))
        },
        _ => Ok(None),
    }
}

/// Wraps a condition in `!`.
fn negate(test: Expr, keyword: &Token) -> Expr {
    Expr::Prefix { op:    PrefixOperator::Not,
                   right: Box::new(test),
                   pos:   pos_of(keyword), }
}

/// `if (test) [then] { ... } (however (test) { ... })* [else { ... }]`
///
/// `however` clauses fold from the right into nested `if`s, each one the
/// only statement of the previous alternate block, so exactly one branch
/// runs. The `else` block becomes the innermost alternate.
fn parse_if<'a, I>(tokens: &mut Peekable<I>, keyword: &Token) -> ParseResult<IfStatement>
    where I: Iterator<Item = &'a Token>
{
    let pos = pos_of(keyword);
    let test = parse_condition(tokens)?;
    skip_if(tokens, TokenKind::Then);
    let consequent = parse_block(tokens)?;

    let mut clauses = Vec::new();
    while skip_if(tokens, TokenKind::However) {
        let clause_test = parse_condition(tokens)?;
        let clause_block = parse_block(tokens)?;
        clauses.push((clause_test, clause_block));
    }

    let alternate = clauses.into_iter()
                           .rev()
                           .fold(parse_else(tokens)?, |alternate, (test, consequent)| {
                               let nested = IfStatement { test,
                                                          consequent,
                                                          alternate,
                                                          pos };
                               Some(Block { statements: vec![Stmt::If(nested)],
                                            pos })
                           });

    Ok(IfStatement { test,
                     consequent,
                     alternate,
                     pos })
}

/// `unless (test) [then] { ... } [else { ... }]`, read as `if (!test)`.
fn parse_unless<'a, I>(tokens: &mut Peekable<I>, keyword: &Token) -> ParseResult<IfStatement>
    where I: Iterator<Item = &'a Token>
{
    let test = negate(parse_condition(tokens)?, keyword);
    skip_if(tokens, TokenKind::Then);
    let consequent = parse_block(tokens)?;
    let alternate = parse_else(tokens)?;

    Ok(IfStatement { test,
                     consequent,
                     alternate,
                     pos: pos_of(keyword) })
}

/// `while (test) { ... }` or `until (test) { ... }`, the latter read as
/// `while (!test)`.
fn parse_loop<'a, I>(tokens: &mut Peekable<I>, keyword: &Token) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a Token>
{
    let mut test = parse_condition(tokens)?;
    if keyword.kind == TokenKind::Until {
        test = negate(test, keyword);
    }
    let body = parse_block(tokens)?;

    Ok(Stmt::While { test,
                     body,
                     pos: pos_of(keyword) })
}

/// `fn name(params) { body }` declares `name` by assignment, so a later
/// declaration of the same name replaces it.
///
/// `fn (params) { body }` without a name is an anonymous function used as
/// an expression statement, for example one called on the spot.
fn parse_function_statement<'a, I>(tokens: &mut Peekable<I>,
                                   keyword: &Token)
                                   -> ParseResult<Stmt>
    where I: Iterator<Item = &'a Token>
{
    if peek_kind(tokens) != TokenKind::Ident {
        let literal = Expr::Function(parse_function_literal(tokens, keyword, None)?);
        let expr = continue_expression(tokens, literal, Precedence::Lowest)?;
        return Ok(Stmt::Expression { pos: expr.pos(),
                                     expr });
    }

    let name_token = expect(tokens, TokenKind::Ident)?;
    let name = name_token.literal.clone();
    let definition = parse_function_literal(tokens, keyword, Some(name.clone()))?;

    Ok(Stmt::Assign { target: AssignTarget::Identifier { name,
                                                         pos: pos_of(name_token) },
                      value:  Expr::Function(definition),
                      pos:    pos_of(keyword), })
}
