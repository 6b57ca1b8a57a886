use std::collections::{HashMap, HashSet};

use crate::{
    ast::{DeclarationKind, Expr, Program, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::resolve::{Origin, Resolver},
        result::EvaluationResult,
        value::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the state of one evaluation pass.
///
/// The evaluator owns the script environment, the set of `const` names, the
/// provenance map, the injected context, and the optional resolver hook. Its
/// lifetime is exactly one call to [`Evaluator::run`]: nothing is shared
/// across evaluations, so independent passes may run concurrently as long as
/// each owns its own instance.
///
/// ## Usage
///
/// An `Evaluator` is assembled with the builder-style `with_*` methods and
/// consumed by `run`, which returns the structured [`EvaluationResult`].
pub struct Evaluator<'r> {
    /// Script-local bindings, seeded by `with_env` and mutated by
    /// declarations. Returned to the caller in the result.
    pub(crate) env:        HashMap<String, Value>,
    /// Names declared `const`; no later declaration may rebind them.
    pub(crate) consts:     HashSet<String>,
    /// Records which source supplied each name's current value.
    pub(crate) provenance: HashMap<String, Origin>,
    /// Caller-injected static bindings, read-only during evaluation.
    pub(crate) context:    HashMap<String, Value>,
    /// Per-pass memo of resolver hits, so the hook runs at most once per
    /// unresolved identifier. Never part of the returned environment.
    pub(crate) resolved:   HashMap<String, Value>,
    /// Optional dynamic fallback hook for otherwise-unbound names.
    pub(crate) resolver:   Option<&'r Resolver<'r>>,
}

impl Default for Evaluator<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'r> Evaluator<'r> {
    /// Creates a new evaluator with an empty environment, no context, and no
    /// resolver.
    #[must_use]
    pub fn new() -> Self {
        Self { env:        HashMap::new(),
               consts:     HashSet::new(),
               provenance: HashMap::new(),
               context:    HashMap::new(),
               resolved:   HashMap::new(),
               resolver:   None, }
    }

    /// Seeds the script environment with a starting set of bindings.
    ///
    /// Seeded names count as script bindings: they resolve first and their
    /// provenance is `"script"`.
    #[must_use]
    pub fn with_env(mut self, env: HashMap<String, Value>) -> Self {
        for name in env.keys() {
            self.provenance.insert(name.clone(), Origin::Script);
        }
        self.env = env;
        self
    }

    /// Injects the caller's static context bindings.
    ///
    /// Every context key is pre-recorded in provenance as `"context"`, before
    /// any AST node is evaluated.
    #[must_use]
    pub fn with_context(mut self, context: HashMap<String, Value>) -> Self {
        for name in context.keys() {
            self.provenance.entry(name.clone()).or_insert(Origin::Context);
        }
        self.context = context;
        self
    }

    /// Installs the dynamic resolver hook.
    #[must_use]
    pub fn with_resolver(mut self, resolver: &'r Resolver<'r>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// The evaluator dispatches on the expression variant: literals evaluate
    /// to their own value, variables go through the layered resolution
    /// protocol, and binary operations evaluate both operands before
    /// applying the operator. No node is visited more than once per call.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The computed [`Value`].
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value } => Ok(*value),
            Expr::Variable { name } => self.eval_variable(name),
            Expr::BinaryOp { left, op, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, left, right)
            },
        }
    }

    /// Evaluates a single statement.
    ///
    /// Declarations bind a name in the script environment and evaluate to
    /// the stored value; expression statements evaluate to their own result.
    ///
    /// # Parameters
    /// - `statement`: Statement to evaluate.
    ///
    /// # Returns
    /// The statement's value.
    ///
    /// # Errors
    /// - `ConstReassignment` when the name was previously declared `const`,
    ///   regardless of the new declaration's kind.
    /// - Propagates any error from the initializer expression.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<Value> {
        match statement {
            Statement::Declaration { kind, name, value } => {
                if self.consts.contains(name) {
                    return Err(RuntimeError::ConstReassignment { name: name.clone() });
                }

                let value = self.eval(value)?;

                self.env.insert(name.clone(), value);
                self.provenance.insert(name.clone(), Origin::Script);
                if *kind == DeclarationKind::Const {
                    self.consts.insert(name.clone());
                }

                Ok(value)
            },
            Statement::Expression { expr } => self.eval(expr),
        }
    }

    /// Runs a whole program and assembles the structured result.
    ///
    /// A single statement evaluates to its own value; a sequence is
    /// evaluated in source order against this one shared environment, const
    /// set, and provenance map, and the overall value is that of the last
    /// statement. The first fault aborts the pass with no partial result.
    ///
    /// # Parameters
    /// - `program`: The parsed program.
    ///
    /// # Returns
    /// The [`EvaluationResult`] carrying the final value, the script
    /// environment, and the provenance map.
    ///
    /// # Errors
    /// - `MissingValue` for a hand-built empty sequence; the parser never
    ///   produces one.
    /// - Propagates any statement-level error.
    pub fn run(mut self, program: &Program) -> EvalResult<EvaluationResult> {
        let value = match program {
            Program::Statement(statement) => self.eval_statement(statement)?,
            Program::Sequence(statements) => {
                let mut last = None;
                for statement in statements {
                    last = Some(self.eval_statement(statement)?);
                }
                last.ok_or(RuntimeError::MissingValue)?
            },
        };

        Ok(EvaluationResult::new(value, self.env, self.provenance))
    }
}
