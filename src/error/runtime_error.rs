use crate::interpreter::registry::function::Arity;

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Attempted division by zero with `/`.
    DivisionByZero {
        /// The left operand of the division.
        dividend: f64,
    },
    /// Attempted a remainder by zero with `%`.
    ModuloByZero {
        /// The left operand of the remainder.
        dividend: f64,
    },
    /// A function refused its arguments, e.g. `sum` over a symbolic bound.
    Evaluation {
        /// Name of the function that failed.
        function: String,
        /// Details about the failure.
        details:  String,
    },
    /// The wrong number of arguments was supplied to a function.
    ArgumentCountMismatch {
        /// Name of the function.
        name:     String,
        /// The declared arity.
        expected: Arity,
        /// Number of arguments supplied.
        found:    usize,
    },
    /// Called a function that is not registered.
    UnknownFunction {
        /// The name of the function.
        name: String,
    },
    /// An operator node whose symbol is not in the operator table.
    UnknownOperator {
        /// The operator symbol.
        symbol: char,
    },
}

impl RuntimeError {
    /// Returns `true` for failures raised by an operator's numeric rule.
    #[must_use]
    pub const fn is_arithmetic(&self) -> bool {
        matches!(self, Self::DivisionByZero { .. } | Self::ModuloByZero { .. })
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { dividend } => {
                write!(f, "Arithmetic error: {dividend} / 0, the divisor cannot be 0.")
            },
            Self::ModuloByZero { dividend } => {
                write!(f, "Arithmetic error: {dividend} % 0, the divisor cannot be 0.")
            },
            Self::Evaluation { function, details } => {
                write!(f, "Evaluation error in '{function}': {details}.")
            },
            Self::ArgumentCountMismatch { name,
                                          expected,
                                          found, } => write!(f,
                                                             "Function '{name}' expects {expected}, but {found} were given."),
            Self::UnknownFunction { name } => write!(f, "Unknown function '{name}'."),
            Self::UnknownOperator { symbol } => write!(f, "Unknown operator '{symbol}'."),
        }
    }
}

impl std::error::Error for RuntimeError {}
