use std::{cell::Cell, collections::HashMap};

use embex::{
    error::{Error, ErrorKind, RuntimeError},
    evaluate, evaluate_with_env,
    interpreter::{
        evaluator::resolve::{Origin, Resolver},
        lexer::{Token, tokenize},
        parser::core::{parse_source, parse_tokens},
        value::Value,
    },
};
use pretty_assertions::assert_eq;

fn eval_value(src: &str) -> Value {
    evaluate(src, HashMap::new(), None).unwrap_or_else(|e| panic!("Script failed: {e}"))
                                       .value
}

fn eval_error(src: &str) -> Error {
    match evaluate(src, HashMap::new(), None) {
        Ok(result) => panic!("Script succeeded with {:?} but was expected to fail", result.value),
        Err(e) => e,
    }
}

fn context_of(pairs: &[(&str, Value)]) -> HashMap<String, Value> {
    pairs.iter().map(|(name, value)| ((*name).to_string(), *value)).collect()
}

#[test]
fn arithmetic_precedence_and_associativity() {
    assert_eq!(eval_value("1 + 2 * 3"), Value::Integer(7));
    assert_eq!(eval_value("(1 + 2) * 3"), Value::Integer(9));
    assert_eq!(eval_value("2 * 3 + 4 * 5"), Value::Integer(26));
    assert_eq!(eval_value("10 - 2 - 3"), Value::Integer(5));
    assert_eq!(eval_value("100 / 5 / 2"), Value::Integer(10));
    assert_eq!(eval_value("7 / 2"), Value::Integer(3));
    assert_eq!(eval_value("1.5 * 2"), Value::Real(3.0));
    assert_eq!(eval_value("0.5 + 0.25"), Value::Real(0.75));
}

#[test]
fn declaration_then_reference_through_starting_env() {
    let first = evaluate("let x = 10", HashMap::new(), None).unwrap();
    assert_eq!(first.value, Value::Integer(10));
    assert_eq!(first.provenance.get("x"), Some(&Origin::Script));

    let second = evaluate_with_env("x * 2", first.env, HashMap::new(), None).unwrap();
    assert_eq!(second.value, Value::Integer(20));
}

#[test]
fn const_cannot_be_rebound() {
    let err = eval_error("const pi = 3\nlet pi = 4");
    assert_eq!(err.kind(), ErrorKind::Evaluation);
    assert!(err.to_string().contains("pi"));

    let err = eval_error("const pi = 3\nconst pi = 4");
    assert_eq!(err.kind(), ErrorKind::Evaluation);

    // A let binding stays rebindable.
    assert_eq!(eval_value("let x = 1\nlet x = 2\nx"), Value::Integer(2));
}

#[test]
fn script_bindings_win_over_context_and_resolver() {
    let resolver: &Resolver = &|_name, _bindings| Ok(Some(Value::Integer(999)));

    let result = evaluate("let x = 10\nx * 2",
                          context_of(&[("x", Value::Integer(100))]),
                          Some(resolver)).unwrap();

    assert_eq!(result.value, Value::Integer(20));
    assert_eq!(result.provenance.get("x"), Some(&Origin::Script));
}

#[test]
fn context_bindings_resolve_and_record_provenance() {
    let result = evaluate("x + 1", context_of(&[("x", Value::Integer(100))]), None).unwrap();

    assert_eq!(result.value, Value::Integer(101));
    assert_eq!(result.provenance.get("x"), Some(&Origin::Context));
    // Context bindings are not script bindings.
    assert!(result.env.is_empty());
}

#[test]
fn division_by_zero_fails() {
    let err = eval_error("10 / 0");
    assert_eq!(err.kind(), ErrorKind::Evaluation);
    assert_eq!(err.to_string(), "Division by zero.");

    let err = eval_error("1.5 / 0");
    assert_eq!(err.kind(), ErrorKind::Evaluation);

    assert_eq!(eval_value("10 / 2"), Value::Integer(5));
}

#[test]
fn resolver_supplies_missing_names() {
    let resolver: &Resolver = &|name, _bindings| {
        if name == "y" {
            Ok(Some(Value::Integer(10)))
        } else {
            Ok(None)
        }
    };

    let result = evaluate("y + 1", HashMap::new(), Some(resolver)).unwrap();
    assert_eq!(result.value, Value::Integer(11));
    assert_eq!(result.provenance.get("y"), Some(&Origin::Resolver));
    // Resolver hits never leak into the script environment.
    assert!(result.env.is_empty());
}

#[test]
fn resolver_miss_is_a_name_error() {
    let resolver: &Resolver = &|_name, _bindings| Ok(None);

    let err = evaluate("y + 1", HashMap::new(), Some(resolver)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Name);
    assert_eq!(err.to_string(), "Undefined variable 'y'.");

    // Without a resolver the same script fails the same way.
    let err = eval_error("y + 1");
    assert_eq!(err.kind(), ErrorKind::Name);
}

#[test]
fn resolver_runs_at_most_once_per_name() {
    let calls = Cell::new(0u32);
    let resolver: &Resolver = &|_name, _bindings| {
        calls.set(calls.get() + 1);
        Ok(Some(Value::Integer(5)))
    };

    let result = evaluate("y + y + y", HashMap::new(), Some(resolver)).unwrap();
    assert_eq!(result.value, Value::Integer(15));
    assert_eq!(calls.get(), 1);
}

#[test]
fn resolver_sees_script_bindings_over_context() {
    let seen = Cell::new(None);
    let resolver: &Resolver = &|name, bindings| {
        if name == "y" {
            seen.set(bindings.get("x").copied());
            Ok(Some(Value::Integer(0)))
        } else {
            Ok(None)
        }
    };

    evaluate("let x = 10\ny",
             context_of(&[("x", Value::Integer(100))]),
             Some(resolver)).unwrap();

    // The merged view hands the resolver the script's value for x.
    assert_eq!(seen.get(), Some(Value::Integer(10)));
}

#[test]
fn resolver_failures_propagate() {
    let resolver: &Resolver = &|_name, _bindings| {
        Err(RuntimeError::ResolverFailed { message: "backend unavailable".to_string() })
    };

    let err = evaluate("y", HashMap::new(), Some(resolver)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Evaluation);
    assert!(err.to_string().contains("backend unavailable"));
}

#[test]
fn multi_line_programs_share_one_environment() {
    let result = evaluate("let a = 1\nlet b = 2\na + b\n", HashMap::new(), None).unwrap();
    assert_eq!(result.value, Value::Integer(3));
    assert_eq!(result.env,
               context_of(&[("a", Value::Integer(1)), ("b", Value::Integer(2))]));

    // Blank lines and a missing trailing newline change nothing.
    let with_blanks = evaluate("\nlet a = 1\n\n\nlet b = 2\na + b", HashMap::new(), None).unwrap();
    assert_eq!(with_blanks.value, Value::Integer(3));
    assert_eq!(with_blanks.env, result.env);
}

#[test]
fn parsing_is_idempotent() {
    let source = "let a = 1\nconst b = a + 2\n(a + b) * 3";
    assert_eq!(parse_source(source).unwrap(), parse_source(source).unwrap());
}

#[test]
fn token_sequence_parses_like_the_source() {
    let source = "let a = 1\n(a + 2.5) * 3";
    let tokens = tokenize(source);
    assert_eq!(parse_tokens(&tokens).unwrap(), parse_source(source).unwrap());
}

#[test]
fn malformed_source_is_a_syntax_error() {
    for source in ["", "\n\n", "let = 5", "1 +", "(1 + 2", "let x 5", "1 @ 2", "x = 5 5"] {
        let err = eval_error(source);
        assert_eq!(err.kind(), ErrorKind::Syntax, "source: {source:?}");
    }
}

#[test]
fn lexer_token_shapes() {
    assert_eq!(tokenize(""), vec![]);
    assert_eq!(tokenize("let x = 1.5"),
               vec![Token::Let,
                    Token::Identifier("x".to_string()),
                    Token::Equals,
                    Token::Real(1.5)]);
    assert_eq!(tokenize("const _y2\n"),
               vec![Token::Const,
                    Token::Identifier("_y2".to_string()),
                    Token::NewLine]);
    // Carriage returns are whitespace, not separators.
    assert_eq!(tokenize("1\r\n2"),
               vec![Token::Integer(1), Token::NewLine, Token::Integer(2)]);
    // Unrecognized input becomes Unknown instead of failing the lexer.
    assert_eq!(tokenize("é"), vec![Token::Unknown("é".to_string())]);
    assert_eq!(tokenize("1 @ 2"),
               vec![Token::Integer(1),
                    Token::Unknown("@".to_string()),
                    Token::Integer(2)]);
}

#[test]
fn result_carries_reserved_slots_and_version() {
    let result = evaluate("1 + 1", HashMap::new(), None).unwrap();
    assert!(result.errors.is_empty());
    assert!(result.diagnostics.is_empty());
    assert_eq!(result.meta.version, env!("CARGO_PKG_VERSION"));
}
