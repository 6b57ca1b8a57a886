#[derive(Debug, PartialEq)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// Found a token that starts no valid statement or primary expression.
    UnexpectedToken {
        /// The token encountered.
        token: String,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput,
    /// A specific token was expected but something else was found.
    ExpectedToken {
        /// Description of the expected token.
        expected: String,
        /// The token that was actually found.
        found:    String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token } => {
                write!(f, "Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput => write!(f, "Unexpected end of input."),

            Self::ExpectedToken { expected, found } => {
                write!(f, "Expected {expected}, got {found}.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
