/// Binary-operator parsing at the additive and multiplicative precedence
/// levels.
pub mod binary;
/// Top-level parsing entry points and program assembly.
pub mod core;
/// Primary (atomic) expression parsing: literals, variables, and grouping.
pub mod primary;
/// Statement parsing: declarations and expression statements.
pub mod statement;
