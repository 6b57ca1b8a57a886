use std::iter::Peekable;

use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::{
        lexer::{Token, tokenize},
        parser::{binary::parse_additive, statement::parse_statement},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, addition and subtraction, and
/// recursively descends through the precedence hierarchy.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_additive(tokens)
}

/// Tokenizes and parses a complete source string.
///
/// Equivalent to [`tokenize`] followed by [`parse_tokens`]; the two stages
/// are split so that callers holding a pre-built token sequence can feed it
/// to the parser directly.
///
/// # Parameters
/// - `source`: The raw source text.
///
/// # Returns
/// The parsed [`Program`].
///
/// # Errors
/// Returns a `ParseError` on malformed input; the first error aborts parsing.
///
/// # Example
/// ```
/// use embex::interpreter::parser::core::parse_source;
///
/// assert!(parse_source("1 + 2 * 3").is_ok());
/// assert!(parse_source("1 +").is_err());
/// ```
pub fn parse_source(source: &str) -> ParseResult<Program> {
    let tokens = tokenize(source);
    parse_tokens(&tokens)
}

/// Parses a pre-built token sequence into a [`Program`].
///
/// # Parameters
/// - `tokens`: The token sequence, as produced by [`tokenize`].
///
/// # Returns
/// The parsed [`Program`].
///
/// # Errors
/// Returns a `ParseError` on malformed input.
pub fn parse_tokens(tokens: &[Token]) -> ParseResult<Program> {
    let mut iter = tokens.iter().peekable();
    parse_program(&mut iter)
}

/// Parses a whole program: newline-separated statements with blank lines
/// skipped and the trailing newline optional.
///
/// Grammar: `program := statement (NEWLINE statement)*`
///
/// A single statement is returned directly as [`Program::Statement`];
/// multiple statements become an ordered [`Program::Sequence`]. Empty
/// statements are never produced.
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// The parsed [`Program`].
///
/// # Errors
/// - `UnexpectedEndOfInput` if the input contains no statement at all.
/// - `ExpectedToken` if a statement is followed by anything other than a
///   newline or the end of input.
/// - Propagates any errors from statement parsing.
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Program>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut statements = Vec::new();

    loop {
        while let Some(Token::NewLine) = tokens.peek() {
            tokens.next();
        }
        if tokens.peek().is_none() {
            break;
        }

        statements.push(parse_statement(tokens)?);

        match tokens.peek() {
            Some(Token::NewLine) | None => {},
            Some(tok) => {
                return Err(ParseError::ExpectedToken { expected: "newline".to_string(),
                                                       found:    format!("{tok:?}"), });
            },
        }
    }

    match statements.len() {
        0 => Err(ParseError::UnexpectedEndOfInput),
        1 => Ok(Program::Statement(statements.remove(0))),
        _ => Ok(Program::Sequence(statements)),
    }
}
