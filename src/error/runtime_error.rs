use crate::error::ErrorKind;

#[derive(Debug, PartialEq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// An identifier was not found in the script environment, the injected
    /// context, or via the resolver.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
    /// Tried to rebind a name that was declared `const`.
    ConstReassignment {
        /// The name of the constant.
        name: String,
    },
    /// Attempted division by zero.
    DivisionByZero,
    /// An integer value was too large to be promoted to a real exactly.
    LiteralTooLarge,
    /// The resolver hook raised a failure of its own.
    ResolverFailed {
        /// Details reported by the resolver.
        message: String,
    },
    /// A statement sequence produced no value. Unreachable through the
    /// parser, which never emits an empty sequence.
    MissingValue,
}

impl RuntimeError {
    /// Returns the classification of this error: [`ErrorKind::Name`] for an
    /// unresolved identifier, [`ErrorKind::Evaluation`] for everything else.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UndefinedVariable { .. } => ErrorKind::Name,
            _ => ErrorKind::Evaluation,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name } => {
                write!(f, "Undefined variable '{name}'.")
            },
            Self::ConstReassignment { name } => {
                write!(f, "Cannot reassign to const '{name}'.")
            },
            Self::DivisionByZero => write!(f, "Division by zero."),
            Self::LiteralTooLarge => write!(f, "Literal is too large."),
            Self::ResolverFailed { message } => {
                write!(f, "Resolver failed: {message}.")
            },
            Self::MissingValue => write!(f, "Value missing."),
        }
    }
}

impl std::error::Error for RuntimeError {}
