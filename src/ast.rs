use crate::interpreter::value::Value;

/// An abstract syntax tree (AST) node representing an expression.
///
/// `Expr` covers the three expression forms of the language: numeric
/// literals, variable references, and binary arithmetic. Each node owns its
/// children exclusively, so an `Expr` is always a tree, never shared or
/// cyclic.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Literal {
        /// The constant value.
        value: Value,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
    },
    /// A binary operation (addition, subtraction, etc.).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
}

/// Represents a top-level statement.
///
/// Statements are the units parsed from input lines.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A variable declaration using `let` or `const`.
    Declaration {
        /// Whether the binding is mutable (`let`) or immutable (`const`).
        kind:  DeclarationKind,
        /// The name being bound.
        name:  String,
        /// The initial value of the binding.
        value: Expr,
    },
    /// A standalone expression evaluated for its result.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
    },
}

/// A full parsed program.
///
/// A source string with a single non-empty line parses to the statement
/// itself; multiple statements are kept as an ordered sequence, one per
/// non-empty source line.
#[derive(Debug, Clone, PartialEq)]
pub enum Program {
    /// A one-statement program.
    Statement(Statement),
    /// Two or more statements in source order.
    Sequence(Vec<Statement>),
}

/// Distinguishes `let` from `const` declarations.
///
/// A `const` binding cannot be rebound by any later declaration within the
/// same evaluation pass.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DeclarationKind {
    /// A rebindable declaration (`let`).
    Let,
    /// An immutable declaration (`const`).
    Const,
}

/// Represents a binary arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let keyword = match self {
            Self::Let => "let",
            Self::Const => "const",
        };
        write!(f, "{keyword}")
    }
}
