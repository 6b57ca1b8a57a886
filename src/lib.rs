//! # embex
//!
//! embex is a minimal embeddable expression language written in Rust.
//! It tokenizes a whitespace-delimited source string, parses it into an
//! abstract syntax tree, and evaluates that tree against a layered
//! identifier-resolution model: a host can inject static values (the
//! `context`) and supply a dynamic fallback hook (the `resolver`) for names
//! the script itself does not define. Every evaluation returns a structured
//! result carrying the value, the final script environment, and the
//! provenance of each binding.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use std::collections::HashMap;

use crate::{
    error::Error,
    interpreter::{
        evaluator::{core::Evaluator, resolve::Resolver},
        parser::core::parse_source,
        result::EvaluationResult,
        value::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr`, `Statement`, and `Program` types that
/// represent the syntactic structure of source code as a tree. The AST is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Keeps each node's fields specific to its kind, so no "unknown field"
///   states are reachable.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during parsing or
/// evaluating code: syntax errors, unresolved names, and runtime faults such
/// as division by zero or const rebinding. Each error carries a
/// human-readable message and a coarse [`error::ErrorKind`] classification.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (parser, evaluator).
/// - Distinguishes syntax, name, and evaluation failures for callers.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representation, and result shaping to provide a complete runtime for
/// source code evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Safely convert between `i64` and `f64` without silent data loss.
pub mod util;

/// Evaluates a source string and returns the structured result.
///
/// This is the single public entry point that strings the three pipeline
/// stages together: the source is tokenized, parsed, and evaluated against
/// an initially empty script environment, the given `context`, and the
/// optional `resolver` hook.
///
/// # Parameters
/// - `source`: The script, with statements separated by newlines.
/// - `context`: Static bindings injected by the host; lower priority than
///   script declarations.
/// - `resolver`: Optional dynamic hook consulted for names neither the
///   script nor the context defines.
///
/// # Errors
/// Returns an [`Error`] if parsing or evaluation fails; the first fault
/// aborts the call with no partial result.
///
/// # Examples
/// ```
/// use std::collections::HashMap;
///
/// use embex::{evaluate, interpreter::value::Value};
///
/// let result = evaluate("let x = 2 + 2", HashMap::new(), None).unwrap();
/// assert_eq!(result.value, Value::Integer(4));
///
/// // 'y' is not defined anywhere, so evaluation fails.
/// let result = evaluate("y + 1", HashMap::new(), None);
/// assert!(result.is_err());
/// ```
pub fn evaluate(source: &str,
                context: HashMap<String, Value>,
                resolver: Option<&Resolver>)
                -> Result<EvaluationResult, Error> {
    evaluate_with_env(source, HashMap::new(), context, resolver)
}

/// Evaluates a source string against a caller-supplied starting environment.
///
/// Identical to [`evaluate`], except that the script environment starts out
/// seeded with `env` instead of empty. This is how a host threads the
/// environment returned by one evaluation into the next.
///
/// # Parameters
/// - `source`: The script, with statements separated by newlines.
/// - `env`: The starting script environment.
/// - `context`: Static bindings injected by the host.
/// - `resolver`: Optional dynamic hook for otherwise-unbound names.
///
/// # Errors
/// Returns an [`Error`] if parsing or evaluation fails.
pub fn evaluate_with_env(source: &str,
                         env: HashMap<String, Value>,
                         context: HashMap<String, Value>,
                         resolver: Option<&Resolver>)
                         -> Result<EvaluationResult, Error> {
    let program = parse_source(source)?;

    let mut evaluator = Evaluator::new().with_env(env).with_context(context);
    if let Some(resolver) = resolver {
        evaluator = evaluator.with_resolver(resolver);
    }

    Ok(evaluator.run(&program)?)
}
