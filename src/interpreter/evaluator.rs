/// Core evaluation logic and context management.
///
/// Contains the main evaluation engine and the binding context variables are
/// read from.
pub mod core;

/// Transient bindings.
///
/// Lets a function bind a name for the duration of a sub-evaluation and
/// guarantees the binding is released again afterwards, on success or
/// failure.
pub mod scope;

/// Function evaluation.
///
/// Implements the builtin functions: argument checking, evaluation of the
/// raw argument nodes, and their typeset rules.
pub mod function;
