/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, performs arithmetic, maintains the
/// layered identifier-resolution environment (script bindings, injected
/// context, resolver hook), enforces constant immutability, and assembles
/// the structured result. It is the core execution engine of the
/// interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Resolves identifiers through script, context, and resolver in order.
/// - Reports runtime errors such as division by zero or const rebinding.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a flat
/// sequence of tokens: numbers, identifiers, keywords, operators,
/// parentheses, and newlines. This is the first stage of interpretation and
/// it never fails; unrecognized input is deferred to the parser.
///
/// # Responsibilities
/// - Converts the input character stream into typed tokens.
/// - Handles numeric literals, identifiers, keywords, and operators.
/// - Emits explicit newline tokens as statement separators.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST using a fixed-precedence recursive-descent grammar.
/// It accepts either a source string or a pre-built token sequence.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates the grammar, aborting on the first error with no recovery.
/// - Assembles newline-separated statements into a program.
pub mod parser;
/// The result module defines the structured evaluation outcome.
///
/// Every successful evaluation returns an `EvaluationResult` carrying the
/// final value, the script environment, the provenance of each binding, and
/// versioned metadata.
pub mod result;
/// The value module defines the runtime data type for evaluation.
///
/// The language is purely numeric; this module declares the `Value` enum
/// with its integer and real variants and the checked promotion between
/// them.
pub mod value;
