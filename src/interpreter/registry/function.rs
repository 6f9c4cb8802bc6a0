use std::{collections::HashMap, fmt, sync::RwLock};

use lazy_static::lazy_static;

use crate::{
    ast::Expr,
    error::RegistrationError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            function::builtin_functions,
        },
        registry::validate_name,
    },
};

/// Evaluation rule of a function.
///
/// A function receives the binding context and its *unevaluated* argument
/// nodes. It decides which arguments to evaluate, how often, and under which
/// transient bindings.
pub type FunctionFn = fn(&mut Context, &[Expr]) -> EvalResult<f64>;

/// Typeset rule of a function, applied to its raw argument nodes.
pub type RenderFn = fn(&[Expr]) -> String;

/// Specifies the allowed number of arguments for a function.
///
/// - `Exact(n)` means the function must receive exactly `n` arguments.
/// - `Variadic` accepts any count; the function validates it itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    Variadic,
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity.
    #[must_use]
    pub const fn check(self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == m,
            Self::Variadic => true,
        }
    }
}

/// Converts the numeric arity convention: `-1` is variadic, `n >= 0` exact.
///
/// ## Example
/// ```
/// use mathtex::interpreter::registry::function::Arity;
///
/// assert_eq!(Arity::try_from(-1_i64), Ok(Arity::Variadic));
/// assert_eq!(Arity::try_from(2_i64), Ok(Arity::Exact(2)));
/// assert!(Arity::try_from(-2_i64).is_err());
/// ```
impl TryFrom<i64> for Arity {
    type Error = RegistrationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Self::Variadic),
            n => usize::try_from(n).map(Self::Exact)
                                   .map_err(|_| RegistrationError::InvalidArity { arity: n }),
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(1) => write!(f, "1 argument"),
            Self::Exact(n) => write!(f, "{n} arguments"),
            Self::Variadic => write!(f, "any number of arguments"),
        }
    }
}

/// A registered function.
#[derive(Debug, Clone, Copy)]
pub struct FunctionDef {
    /// Accepted argument count.
    pub arity:    Arity,
    /// Evaluation rule.
    pub evaluate: FunctionFn,
    /// Typeset rule; functions without one render as an empty string.
    pub render:   Option<RenderFn>,
}

lazy_static! {
    static ref FUNCTIONS: RwLock<HashMap<String, FunctionDef>> =
        RwLock::new(builtin_functions().into_iter()
                                       .map(|(name, def)| (name.to_string(), def))
                                       .collect());
}

/// Looks up a function by name.
///
/// The definition is copied out so that no lock is held while the function
/// runs; nested calls look functions up again.
#[must_use]
pub fn lookup_function(name: &str) -> Option<FunctionDef> {
    let functions = FUNCTIONS.read().unwrap_or_else(std::sync::PoisonError::into_inner);
    functions.get(name).copied()
}

/// Registers a new function for use in expressions.
///
/// Registration is meant to happen before evaluation starts; a registered
/// name can never be removed or replaced.
///
/// # Errors
/// - `EmptyName` or `InvalidName` if `name` is not an identifier.
/// - `DuplicateName` if the name is already registered. The existing entry
///   is left unchanged.
///
/// ## Example
/// ```
/// use mathtex::{
///     Context, parse_and_evaluate,
///     interpreter::registry::function::{Arity, register_function},
/// };
///
/// register_function("twice", Arity::Exact(1), |context, args| Ok(2.0 * context.eval(&args[0])?), None)
///     .unwrap();
///
/// let mut context = Context::new();
/// assert_eq!(parse_and_evaluate("twice(21)", &mut context).unwrap(), 42.0);
/// assert!(register_function("twice", Arity::Variadic, |_, _| Ok(0.0), None).is_err());
/// ```
pub fn register_function(name: &str,
                         arity: Arity,
                         evaluate: FunctionFn,
                         render: Option<RenderFn>)
                         -> Result<(), RegistrationError> {
    validate_name(name)?;

    let mut functions = FUNCTIONS.write().unwrap_or_else(std::sync::PoisonError::into_inner);
    if functions.contains_key(name) {
        return Err(RegistrationError::DuplicateName { name: name.to_string() });
    }
    functions.insert(name.to_string(),
                     FunctionDef { arity,
                                   evaluate,
                                   render });
    log::debug!("registered function '{name}' taking {arity}");
    Ok(())
}

/// Returns the names of all registered functions, sorted.
#[must_use]
pub fn function_names() -> Vec<String> {
    let functions = FUNCTIONS.read().unwrap_or_else(std::sync::PoisonError::into_inner);
    let mut names = functions.keys().cloned().collect::<Vec<_>>();
    names.sort();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtins_are_seeded() {
        for name in ["sin", "cos", "tan", "cot", "sec", "csc", "abs", "ceil", "floor", "round",
                     "sqrt", "cbrt", "max", "min", "noerr", "sum", "log"]
        {
            assert!(lookup_function(name).is_some(), "missing builtin {name}");
        }
        assert_eq!(lookup_function("log").unwrap().arity, Arity::Exact(2));
        assert_eq!(lookup_function("max").unwrap().arity, Arity::Variadic);
    }

    #[test]
    fn duplicate_registration_keeps_original() {
        let result = register_function("sqrt", Arity::Exact(2), |_, _| Ok(-1.0), None);

        assert_eq!(result,
                   Err(RegistrationError::DuplicateName { name: "sqrt".to_string() }));
        assert_eq!(lookup_function("sqrt").unwrap().arity, Arity::Exact(1));
    }

    #[test]
    fn invalid_names_are_rejected() {
        assert_eq!(register_function("", Arity::Variadic, |_, _| Ok(0.0), None),
                   Err(RegistrationError::EmptyName));
        assert!(matches!(register_function("2x", Arity::Variadic, |_, _| Ok(0.0), None),
                         Err(RegistrationError::InvalidName { .. })));
    }

    #[test]
    fn arity_checks_counts() {
        assert!(Arity::Exact(0).check(0));
        assert!(!Arity::Exact(2).check(3));
        assert!(Arity::Variadic.check(0));
        assert_eq!(Arity::try_from(-5_i64),
                   Err(RegistrationError::InvalidArity { arity: -5 }));
    }
}
