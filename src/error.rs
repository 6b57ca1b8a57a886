/// Parsing errors.
///
/// Defines all error types that can occur during parsing of source code.
/// Parse errors include unexpected tokens, mismatched expectations, and
/// premature end of input.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include unresolved identifiers, division by zero, and attempts to
/// rebind constants.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Coarse classification of an error, used by callers that only need to
/// distinguish the failure family rather than the exact variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed source; always raised at parse time.
    Syntax,
    /// An identifier could not be resolved by the script environment, the
    /// injected context, or the resolver.
    Name,
    /// A runtime fault: arithmetic, const reassignment, or a failed resolver.
    Evaluation,
}

/// The unified error type returned by the `evaluate` facade.
#[derive(Debug, PartialEq)]
pub enum Error {
    /// A parse-time failure.
    Parse(ParseError),
    /// An evaluation-time failure.
    Runtime(RuntimeError),
}

impl Error {
    /// Returns the classification of this error.
    ///
    /// # Example
    /// ```
    /// use std::collections::HashMap;
    ///
    /// use embex::{error::ErrorKind, evaluate};
    ///
    /// let err = evaluate("1 +", HashMap::new(), None).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::Syntax);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(_) => ErrorKind::Syntax,
            Self::Runtime(e) => e.kind(),
        }
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {}
