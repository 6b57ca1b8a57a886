/// Binary arithmetic over runtime values.
pub mod binary;
/// The evaluator state and the statement/expression walk.
pub mod core;
/// The layered identifier-resolution protocol and the resolver hook.
pub mod resolve;
