use crate::{
    ast::Expr,
    interpreter::evaluator::{
        core::{Context, EvalResult},
        function::core::single,
    },
};

/// Evaluates its argument and turns any failure into `0`.
///
/// This is the only builtin that recovers from evaluation errors: anything
/// raised inside the argument, such as a division by zero, yields `0.0`
/// instead of aborting the enclosing evaluation.
///
/// # Example
/// ```
/// use mathtex::{Context, parse_and_evaluate};
///
/// let mut context = Context::new();
/// assert_eq!(parse_and_evaluate("1 + noerr(2.5/(1-1))", &mut context).unwrap(), 1.0);
/// ```
pub fn noerr(context: &mut Context, args: &[Expr]) -> EvalResult<f64> {
    let arg = single("noerr", args)?;

    Ok(context.eval(arg).unwrap_or_else(|err| {
                            let kind = if err.is_arithmetic() { "arithmetic" } else { "evaluation" };
                            log::trace!("noerr suppressed {kind} failure: {err}");
                            0.0
                        }))
}
