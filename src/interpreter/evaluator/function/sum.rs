use crate::{
    ast::Expr,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            function::core::evaluation_error,
        },
        renderer::render,
    },
};

/// Name of the summation index, written `#i` in expressions.
pub const INDEX: &str = "#i";

/// Accumulates a sum over an integer range.
///
/// - `sum(start, end)` adds `start, start + 1, ...` up to `end`.
/// - `sum(start, end, body)` evaluates `body` once per integer index from
///   `start` to `end` inclusive (both truncated toward zero), with `#i`
///   bound to the index, and adds the results. `#i` is removed again (or its
///   outer value restored, for nested sums) when the sum finishes or fails.
///
/// The end bound must be known statically: a number literal, optionally
/// negated.
///
/// # Errors
/// - `Evaluation` if the argument count is not 2 or 3, if `end` is not a
///   literal, or if either bound is not finite.
/// - Any failure of `start` or `body` is propagated.
///
/// # Example
/// ```
/// use mathtex::{Context, parse_and_evaluate};
///
/// let mut context = Context::new();
/// assert_eq!(parse_and_evaluate("sum(1, 5, #i)", &mut context).unwrap(), 15.0);
/// assert_eq!(parse_and_evaluate("sum(1, 4, #i^2)", &mut context).unwrap(), 30.0);
/// assert!(!context.contains("#i"));
/// ```
pub fn sum(context: &mut Context, args: &[Expr]) -> EvalResult<f64> {
    let (start, end, body) = match args {
        [start, end] => (start, end, None),
        [start, end, body] => (start, end, Some(body)),
        _ => {
            return Err(evaluation_error("sum",
                                        format!("expects 2 or 3 arguments, but {} were given",
                                                args.len())));
        },
    };

    let end = static_bound(end).ok_or_else(|| {
                                   evaluation_error("sum",
                                                    "the end bound must be a number literal, \
                                                     cannot iterate symbolically")
                               })?;
    if !end.is_finite() {
        return Err(evaluation_error("sum", "the end bound must be finite"));
    }

    let start = context.eval(start)?;
    if !start.is_finite() {
        return Err(evaluation_error("sum", "the start bound must be finite"));
    }

    let Some(body) = body else {
        return Ok((0..steps(start, end)).map(|k| index(start, k)).sum());
    };

    let first = start.trunc();
    let mut total = 0.0;
    for k in 0..steps(first, end.trunc()) {
        let mut scope = context.bind_transient(INDEX, index(first, k));
        total += scope.eval(body)?;
    }
    Ok(total)
}

/// Number of indices `first, first + 1, ...` not past `last`.
///
/// Past 2^53 adding `1.0` no longer changes an index, so the range is
/// counted rather than stepped.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn steps(first: f64, last: f64) -> u64 {
    if last < first {
        0
    } else {
        ((last - first).floor() as u64).saturating_add(1)
    }
}

#[allow(clippy::cast_precision_loss)]
fn index(first: f64, k: u64) -> f64 {
    first + k as f64
}

/// Reads a bound that is known without evaluation.
fn static_bound(expr: &Expr) -> Option<f64> {
    match expr {
        Expr::Number { value, .. } => Some(*value),
        Expr::Operator { symbol: '-',
                         left,
                         right, } if matches!(left.as_ref(), Expr::Number { text, .. } if text.is_empty()) => {
            static_bound(right).map(|v| -v)
        },
        _ => None,
    }
}

/// Renders `sum(a, b, body)` as `\sum_{i=a}^{b} body`.
pub fn render_sum(args: &[Expr]) -> String {
    match args {
        [start, end] => format!("\\sum_{{i={}}}^{{{}}} i", render(start), render(end)),
        [start, end, body] => {
            format!("\\sum_{{i={}}}^{{{}}} {}", render(start), render(end), render(body))
        },
        _ => String::new(),
    }
}
