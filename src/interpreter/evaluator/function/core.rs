use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::EvalResult,
            function::{builtin, log, min_max, noerr, sum},
        },
        registry::function::{Arity, FunctionDef},
    },
};

/// Defines the builtin function table.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the evaluation,
/// - an optional typeset rule.
///
/// The macro produces `builtin_functions()`, which seeds the function
/// registry, and `BUILTIN_FUNCTIONS`, the public list of builtin names.
macro_rules! builtin_table {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                eval: $eval:expr,
                render: $render:expr $(,)?
            }
        ),* $(,)?
    ) => {
        /// The builtin functions, in registration order.
        pub(crate) fn builtin_functions() -> Vec<(&'static str, FunctionDef)> {
            vec![
                $(
                    ($name, FunctionDef { arity: $arity, evaluate: $eval, render: $render }),
                )*
            ]
        }
        /// Names of all builtin functions.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_table! {
    "sin"   => { arity: Arity::Exact(1), eval: builtin::sin,      render: Some(builtin::render_sin) },
    "cos"   => { arity: Arity::Exact(1), eval: builtin::cos,      render: Some(builtin::render_cos) },
    "tan"   => { arity: Arity::Exact(1), eval: builtin::tan,      render: Some(builtin::render_tan) },
    "cot"   => { arity: Arity::Exact(1), eval: builtin::cot,      render: Some(builtin::render_cot) },
    "sec"   => { arity: Arity::Exact(1), eval: builtin::sec,      render: Some(builtin::render_sec) },
    "csc"   => { arity: Arity::Exact(1), eval: builtin::csc,      render: Some(builtin::render_csc) },
    "abs"   => { arity: Arity::Exact(1), eval: builtin::abs,      render: Some(builtin::render_abs) },
    "ceil"  => { arity: Arity::Exact(1), eval: builtin::ceil,     render: Some(builtin::render_ceil) },
    "floor" => { arity: Arity::Exact(1), eval: builtin::floor,    render: Some(builtin::render_floor) },
    "round" => { arity: Arity::Exact(1), eval: builtin::round,    render: Some(builtin::render_round) },
    "sqrt"  => { arity: Arity::Exact(1), eval: builtin::sqrt,     render: Some(builtin::render_sqrt) },
    "cbrt"  => { arity: Arity::Exact(1), eval: builtin::cbrt,     render: Some(builtin::render_cbrt) },
    "noerr" => { arity: Arity::Exact(1), eval: noerr::noerr,      render: None },
    "max"   => { arity: Arity::Variadic, eval: min_max::max,      render: Some(min_max::render_max) },
    "min"   => { arity: Arity::Variadic, eval: min_max::min,      render: Some(min_max::render_min) },
    "sum"   => { arity: Arity::Variadic, eval: sum::sum,          render: Some(sum::render_sum) },
    "log"   => { arity: Arity::Exact(2), eval: log::log,          render: Some(log::render_log) },
}

/// Returns the only argument of a one-argument function.
///
/// # Errors
/// `ArgumentCountMismatch` if `args` does not hold exactly one node.
pub(crate) fn single<'a>(name: &str, args: &'a [Expr]) -> EvalResult<&'a Expr> {
    match args {
        [arg] => Ok(arg),
        _ => Err(RuntimeError::ArgumentCountMismatch { name:     name.to_string(),
                                                       expected: Arity::Exact(1),
                                                       found:    args.len(), }),
    }
}

/// Builds the `Evaluation` error of a builtin.
pub(crate) fn evaluation_error(function: &str, details: impl Into<String>) -> RuntimeError {
    RuntimeError::Evaluation { function: function.to_string(),
                               details:  details.into(), }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::registry::function::function_names;

    #[test]
    fn every_builtin_is_registered() {
        let names = function_names();
        for name in BUILTIN_FUNCTIONS {
            assert!(names.iter().any(|n| n == name), "missing builtin {name}");
        }
        assert_eq!(builtin_functions().len(), BUILTIN_FUNCTIONS.len());
    }

    #[test]
    fn single_rejects_other_counts() {
        let args = [Expr::number(1.0, "1"), Expr::number(2.0, "2")];

        assert!(single("abs", &args[..1]).is_ok());
        assert_eq!(single("abs", &args),
                   Err(RuntimeError::ArgumentCountMismatch { name:     "abs".to_string(),
                                                             expected: Arity::Exact(1),
                                                             found:    2, }));
    }
}
