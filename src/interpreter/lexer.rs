use logos::Logos;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Real literal tokens, such as `3.14`. At least one digit must follow
    /// the decimal point; `3.` lexes as the integer `3` followed by an
    /// unknown `.` token.
    #[regex(r"[0-9]+\.[0-9]+", parse_real)]
    Real(f64),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// `let`
    #[token("let")]
    Let,
    /// `const`
    #[token("const")]
    Const,
    /// Identifier tokens; variable names such as `x` or `offset_2`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `=`
    #[token("=")]
    Equals,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Statement separator. Only `\n` separates statements; carriage returns
    /// are plain whitespace.
    #[token("\n")]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
    /// Any other single character, including non-ASCII letters. The lexer
    /// never fails; rejecting unknown input is the parser's job.
    #[regex(r".", |lex| lex.slice().to_string(), priority = 0)]
    Unknown(String),
}

/// Converts a source string into its flat token sequence.
///
/// A single left-to-right scan with no backtracking. Every character either
/// becomes part of exactly one token or is absorbed as whitespace, so this
/// function is total: empty input yields an empty sequence and unrecognized
/// characters surface as [`Token::Unknown`].
///
/// # Parameters
/// - `source`: The raw source text.
///
/// # Returns
/// The ordered token sequence.
///
/// # Example
/// ```
/// use embex::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("let x = 2");
/// assert_eq!(tokens,
///            vec![Token::Let,
///                 Token::Identifier("x".to_string()),
///                 Token::Equals,
///                 Token::Integer(2)]);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => tokens.push(tok),
            // Unmatched input (e.g. an integer literal overflowing i64) is
            // still deferred to the parser rather than raised here.
            Err(()) => tokens.push(Token::Unknown(lexer.slice().to_string())),
        }
    }

    tokens
}

/// Parses a real literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed floating-point value if successful.
/// - `None`: If the token slice is not a valid float.
fn parse_real(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}
/// Parses an integer literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if successful.
/// - `None`: If the token slice is not a valid integer.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}
