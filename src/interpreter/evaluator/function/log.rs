use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        registry::function::Arity,
        renderer::render,
    },
};

/// Computes the logarithm of a value with respect to a given base.
///
/// Accepts exactly two arguments: `base` first, then `value`, and computes
/// `ln(value) / ln(base)`. Degenerate bases follow float semantics: base `1`
/// gives an infinite or NaN result rather than an error.
///
/// # Example
/// ```
/// use mathtex::{Context, ast::Expr, interpreter::evaluator::function::log::log};
///
/// let mut context = Context::new();
/// let args = [Expr::number(2.0, "2"), Expr::number(8.0, "8")];
///
/// assert!((log(&mut context, &args).unwrap() - 3.0).abs() < 1e-12);
/// ```
pub fn log(context: &mut Context, args: &[Expr]) -> EvalResult<f64> {
    let [base, value] = args else {
        return Err(RuntimeError::ArgumentCountMismatch { name:     "log".to_string(),
                                                         expected: Arity::Exact(2),
                                                         found:    args.len(), });
    };

    let base = context.eval(base)?;
    let value = context.eval(value)?;

    Ok(value.ln() / base.ln())
}

/// Renders `log(b, x)` as `\log_{b}\left(x\right)`.
pub fn render_log(args: &[Expr]) -> String {
    match args {
        [base, value] => format!("\\log_{{{}}}\\left({}\\right)", render(base), render(value)),
        _ => String::new(),
    }
}
