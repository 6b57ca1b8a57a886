use std::iter::Peekable;

use crate::{
    ast::{DeclarationKind, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - a variable declaration (`let` or `const`),
/// - an expression used as a statement.
///
/// Parsing is attempted in that order; if no declaration keyword is present,
/// the input is parsed as an expression statement.
///
/// Grammar: `statement := declaration | expression`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    if let Some(statement) = parse_declaration(tokens)? {
        return Ok(statement);
    }

    let expr = parse_expression(tokens)?;
    Ok(Statement::Expression { expr })
}

/// Parses a variable declaration statement.
///
/// A declaration has the form `("let" | "const") <identifier> =
/// <expression>`. After the `=` token, a full expression is parsed as the
/// initializer.
///
/// If the next token is neither `let` nor `const`, this function returns
/// `Ok(None)` and does not consume any input.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at a possible declaration keyword.
///
/// # Returns
/// - `Ok(Some(Statement::Declaration))` if a declaration is parsed,
/// - `Ok(None)` if no declaration is present.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the identifier is missing,
/// - `=` is missing,
/// - the initializer expression is malformed,
/// - input ends unexpectedly.
fn parse_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a Token> + Clone
{
    let kind = match tokens.peek() {
        Some(Token::Let) => DeclarationKind::Let,
        Some(Token::Const) => DeclarationKind::Const,
        _ => return Ok(None),
    };
    tokens.next();

    let name = parse_identifier(tokens)?;

    match tokens.next() {
        Some(Token::Equals) => {},
        Some(tok) => {
            return Err(ParseError::ExpectedToken { expected: "'='".to_string(),
                                                   found:    format!("{tok:?}"), });
        },
        None => return Err(ParseError::UnexpectedEndOfInput),
    }

    let value = parse_expression(tokens)?;
    Ok(Some(Statement::Declaration { kind, name, value }))
}

/// Parses a plain identifier and returns its name.
///
/// The next token must be `Token::Identifier`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at an identifier.
///
/// # Returns
/// A `String` containing the identifier.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the next token is not an identifier,
/// - the input ends unexpectedly.
fn parse_identifier<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<String>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        Some(Token::Identifier(s)) => Ok(s.clone()),
        Some(tok) => {
            Err(ParseError::ExpectedToken { expected: "identifier".to_string(),
                                            found:    format!("{tok:?}"), })
        },
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}
