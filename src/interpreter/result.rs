use std::collections::HashMap;

use crate::interpreter::{evaluator::resolve::Origin, value::Value};

/// The structured outcome of a successful evaluation.
///
/// Beyond the final value, the result carries the complete script
/// environment and the provenance map, so a host can inspect what the
/// script bound and where each binding's value came from.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationResult {
    /// The value of the last evaluated statement.
    pub value:       Value,
    /// The final script environment: starting bindings plus everything the
    /// script declared. Resolver hits are not part of it.
    pub env:         HashMap<String, Value>,
    /// Which of script, context, or resolver supplied each name.
    pub provenance:  HashMap<String, Origin>,
    /// Reserved for non-fatal errors. Always empty: the first fault aborts
    /// the pass instead.
    pub errors:      Vec<String>,
    /// Reserved for non-fatal diagnostics. Always empty.
    pub diagnostics: Vec<String>,
    /// Evaluation metadata.
    pub meta:        Meta,
}

/// Metadata attached to every [`EvaluationResult`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meta {
    /// The crate version that produced the result.
    pub version: String,
}

impl EvaluationResult {
    pub(crate) fn new(value: Value,
                      env: HashMap<String, Value>,
                      provenance: HashMap<String, Origin>)
                      -> Self {
        Self { value,
               env,
               provenance,
               errors: Vec::new(),
               diagnostics: Vec::new(),
               meta: Meta { version: env!("CARGO_PKG_VERSION").to_string() } }
    }
}
