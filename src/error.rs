/// Parsing errors.
///
/// Defines the errors raised while tokenizing and parsing source text,
/// together with [`SyntaxError`], which binds such an error to its source for
/// caret-pointer diagnostics.
pub mod parse_error;
/// Registration errors.
///
/// Errors returned when adding functions or constants to the registries.
pub mod registration_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// division by zero or a function rejecting its arguments.
pub mod runtime_error;

pub use parse_error::{ParseError, SyntaxError};
pub use registration_error::RegistrationError;
pub use runtime_error::RuntimeError;

/// Uniform failure of the composed entry points.
///
/// [`parse_and_evaluate`](crate::parse_and_evaluate) reports syntax, name,
/// arity and runtime failures through this single type.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Tokenizing or parsing failed.
    Syntax(SyntaxError),
    /// Evaluation failed.
    Runtime(RuntimeError),
}

impl From<SyntaxError> for Error {
    fn from(value: SyntaxError) -> Self {
        Self::Syntax(value)
    }
}

impl From<RuntimeError> for Error {
    fn from(value: RuntimeError) -> Self {
        Self::Runtime(value)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Syntax(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Syntax(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
