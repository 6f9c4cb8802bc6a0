/// The builtin function table and helpers shared by the builtins.
pub mod core;

/// One-argument numeric builtins.
///
/// Trigonometric functions, rounding, absolute value and roots, together
/// with their typeset rules.
pub mod builtin;
/// The two-argument logarithm `log(base, x)`.
pub mod log;
/// `min` and `max` function implementations.
///
/// Returns the minimum or maximum value from a list of arguments.
pub mod min_max;
/// The `noerr` function, which replaces a failing evaluation with `0`.
pub mod noerr;
/// The `sum` function implementation.
///
/// Iterates an integer range, optionally binding the transient index `#i`
/// for a body expression.
pub mod sum;

pub(crate) use self::core::builtin_functions;
