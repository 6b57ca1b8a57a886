use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - numeric literals
/// - variable references
/// - parenthesized expressions
///
/// Grammar:
/// ```text
///     primary := NUMBER
///              | IDENTIFIER
///              | "(" expression ")"
/// ```
/// Any other leading token, including [`Token::Unknown`], is rejected here;
/// the lexer itself never raises.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary
///   expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let peeked = tokens.peek().ok_or(ParseError::UnexpectedEndOfInput)?;

    match peeked {
        Token::Integer(..) | Token::Real(..) => parse_literal(tokens),
        Token::Identifier(_) => parse_variable(tokens),
        Token::LParen => parse_grouping(tokens),
        tok => Err(ParseError::UnexpectedToken { token: format!("{tok:?}") }),
    }
}

/// Parses a numeric literal.
///
/// Integer tokens become integer values and real tokens become real values;
/// the distinction made by the lexer is preserved through evaluation.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at a literal.
///
/// # Returns
/// An [`Expr::Literal`] containing the parsed value.
fn parse_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    match tokens.next() {
        Some(Token::Integer(n)) => Ok(Expr::Literal { value: (*n).into() }),
        Some(Token::Real(r)) => Ok(Expr::Literal { value: (*r).into() }),
        Some(tok) => {
            Err(ParseError::ExpectedToken { expected: "number".to_string(),
                                            found:    format!("{tok:?}"), })
        },
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}

/// Parses a variable reference.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at an identifier.
///
/// # Returns
/// An [`Expr::Variable`] carrying the identifier's name.
fn parse_variable<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    match tokens.next() {
        Some(Token::Identifier(name)) => Ok(Expr::Variable { name: name.clone() }),
        Some(tok) => {
            Err(ParseError::ExpectedToken { expected: "identifier".to_string(),
                                            found:    format!("{tok:?}"), })
        },
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}

/// Parses a parenthesized expression.
///
/// Expected form `( expression )`
///
/// The function consumes the opening parenthesis, parses the enclosed
/// expression, and then requires a closing `)`.
///
/// Grammar: `grouping := "(" expression ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `(`.
///
/// # Returns
/// The inner expression as-is (no wrapper node).
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    tokens.next();
    let expr = parse_expression(tokens)?;
    match tokens.next() {
        Some(Token::RParen) => Ok(expr),
        Some(tok) => {
            Err(ParseError::ExpectedToken { expected: "')'".to_string(),
                                            found:    format!("{tok:?}"), })
        },
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}
