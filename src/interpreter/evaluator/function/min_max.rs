use crate::{
    ast::Expr,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            function::core::evaluation_error,
        },
        renderer::render_applied,
    },
};

/// Returns the largest of one or more arguments.
///
/// # Errors
/// An `Evaluation` error when called without arguments.
pub fn max(context: &mut Context, args: &[Expr]) -> EvalResult<f64> {
    min_max("max", context, args, f64::max)
}

/// Returns the smallest of one or more arguments.
///
/// # Errors
/// An `Evaluation` error when called without arguments.
pub fn min(context: &mut Context, args: &[Expr]) -> EvalResult<f64> {
    min_max("min", context, args, f64::min)
}

/// Evaluates every argument left to right and folds them with `pick`.
fn min_max(name: &str,
           context: &mut Context,
           args: &[Expr],
           pick: fn(f64, f64) -> f64)
           -> EvalResult<f64> {
    let (first, rest) = args.split_first()
                            .ok_or_else(|| evaluation_error(name, "expects at least one argument"))?;

    let mut result = context.eval(first)?;
    for arg in rest {
        result = pick(result, context.eval(arg)?);
    }
    Ok(result)
}

pub fn render_max(args: &[Expr]) -> String {
    render_applied("\\max", args)
}

pub fn render_min(args: &[Expr]) -> String {
    render_applied("\\min", args)
}
