use std::collections::HashMap;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::registry::{function::lookup_function, operator::lookup_operator},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The binding context of an evaluation.
///
/// A `Context` maps variable names to values. `$x` in the source reads the
/// binding `x`; names that are not bound evaluate to `0.0`.
///
/// Functions may extend the context for the duration of a sub-evaluation
/// through [`Context::bind_transient`]; such bindings are always gone again
/// when the function returns. Concurrent evaluations must each use their own
/// `Context`.
///
/// ## Example
/// ```
/// use mathtex::{Context, parse_and_evaluate};
///
/// let mut context = Context::from_iter([("x", 3.0)]);
///
/// assert_eq!(parse_and_evaluate("$x^2", &mut context).unwrap(), 9.0);
/// assert_eq!(parse_and_evaluate("$y", &mut context).unwrap(), 0.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Context {
    pub(crate) bindings: HashMap<String, f64>,
}

impl Context {
    /// Creates an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `value`, returning the previous value if any.
    pub fn set(&mut self, name: impl Into<String>, value: f64) -> Option<f64> {
        self.bindings.insert(name.into(), value)
    }

    /// Returns the value bound to `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.bindings.get(name).copied()
    }

    /// Returns `true` if `name` is bound.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns `true` if nothing is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. Operands of
    /// an operator are evaluated left to right before the operator's numeric
    /// rule is applied. Calls hand the unevaluated argument nodes to the
    /// registered function.
    ///
    /// # Errors
    /// Any failure raised below aborts the whole evaluation, unless a
    /// function on the way up (only `noerr` among the builtins) recovers
    /// from it.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<f64> {
        match expr {
            Expr::Number { value, .. } | Expr::Constant { value, .. } => Ok(*value),
            Expr::Variable { name } => Ok(self.get(name).unwrap_or(0.0)),
            Expr::Operator { symbol,
                             left,
                             right, } => self.eval_operator(*symbol, left, right),
            Expr::Call { name, args } => self.eval_call(name, args),
        }
    }

    fn eval_operator(&mut self, symbol: char, left: &Expr, right: &Expr) -> EvalResult<f64> {
        let op = lookup_operator(symbol).ok_or(RuntimeError::UnknownOperator { symbol })?;
        let left = self.eval(left)?;
        let right = self.eval(right)?;
        op.apply(left, right)
    }

    /// Evaluates a function call.
    ///
    /// The function is looked up by name and its arity is checked against
    /// the argument count, since a tree may have been built by hand rather
    /// than by the parser.
    fn eval_call(&mut self, name: &str, args: &[Expr]) -> EvalResult<f64> {
        let function = lookup_function(name).ok_or_else(|| RuntimeError::UnknownFunction { name: name.to_string() })?;

        if !function.arity.check(args.len()) {
            return Err(RuntimeError::ArgumentCountMismatch { name:     name.to_string(),
                                                             expected: function.arity,
                                                             found:    args.len(), });
        }

        (function.evaluate)(self, args)
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for Context {
    fn from_iter<T: IntoIterator<Item = (S, f64)>>(iter: T) -> Self {
        Self { bindings: iter.into_iter()
                             .map(|(name, value)| (name.into(), value))
                             .collect(), }
    }
}

impl From<HashMap<String, f64>> for Context {
    fn from(bindings: HashMap<String, f64>) -> Self {
        Self { bindings }
    }
}

impl From<Context> for HashMap<String, f64> {
    fn from(context: Context) -> Self {
        context.bindings
    }
}
