use std::collections::HashMap;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::Value,
    },
};

/// The dynamic fallback hook for identifiers the script and the context do
/// not define.
///
/// The hook receives the unresolved name and a merged view of the bindings
/// visible at that moment (the context overlaid by the current script
/// environment). It is a pure boundary call with no access to evaluator
/// internals:
///
/// - `Ok(Some(value))` supplies a value for the name.
/// - `Ok(None)` is the "not found" signal; resolution fails with
///   [`RuntimeError::UndefinedVariable`].
/// - `Err(..)` propagates; [`RuntimeError::ResolverFailed`] is the catch-all
///   variant for hooks wrapping failures of their own.
pub type Resolver<'a> =
    dyn Fn(&str, &HashMap<String, Value>) -> Result<Option<Value>, RuntimeError> + 'a;

/// Records which source supplied a binding's current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Bound by a script declaration or the caller's starting environment.
    Script,
    /// Supplied by the caller's static context.
    Context,
    /// Supplied by the resolver hook.
    Resolver,
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let origin = match self {
            Self::Script => "script",
            Self::Context => "context",
            Self::Resolver => "resolver",
        };
        write!(f, "{origin}")
    }
}

impl Evaluator<'_> {
    /// Resolves a variable reference through the layered protocol.
    ///
    /// Sources are consulted in a fixed order, and the first hit wins:
    ///
    /// 1. the script environment (declarations and the starting environment),
    /// 2. the injected context,
    /// 3. this pass's earlier resolver hits,
    /// 4. the resolver hook, if one is installed.
    ///
    /// A name bound by a script statement is therefore authoritative for the
    /// remainder of the pass, no matter what the context or resolver would
    /// offer for it. Resolver hits are memoized so the hook runs at most
    /// once per name per pass; the memo is discarded with the evaluator and
    /// never carried across `evaluate` calls.
    ///
    /// # Parameters
    /// - `name`: The identifier being resolved.
    ///
    /// # Returns
    /// The resolved [`Value`].
    ///
    /// # Errors
    /// - `UndefinedVariable` when every source misses.
    /// - Propagates any failure raised by the resolver hook.
    pub(crate) fn eval_variable(&mut self, name: &str) -> EvalResult<Value> {
        if let Some(value) = self.env.get(name) {
            return Ok(*value);
        }
        if let Some(value) = self.context.get(name) {
            return Ok(*value);
        }
        if let Some(value) = self.resolved.get(name) {
            return Ok(*value);
        }

        let Some(resolver) = self.resolver else {
            return Err(RuntimeError::UndefinedVariable { name: name.to_string() });
        };

        let merged = self.merged_view();
        match resolver(name, &merged)? {
            Some(value) => {
                self.resolved.insert(name.to_string(), value);
                self.provenance
                    .entry(name.to_string())
                    .or_insert(Origin::Resolver);
                Ok(value)
            },
            None => Err(RuntimeError::UndefinedVariable { name: name.to_string() }),
        }
    }

    /// Builds the binding view handed to the resolver: the injected context
    /// overlaid by the current script environment, so script values shadow
    /// context values of the same name.
    fn merged_view(&self) -> HashMap<String, Value> {
        let mut merged = self.context.clone();
        for (name, value) in &self.env {
            merged.insert(name.clone(), *value);
        }
        merged
    }
}
