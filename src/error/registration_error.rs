#[derive(Debug, Clone, PartialEq, Eq)]
/// Errors returned by function and constant registration.
pub enum RegistrationError {
    /// A function or constant with this name already exists.
    DuplicateName {
        /// The rejected name.
        name: String,
    },
    /// The name was empty.
    EmptyName,
    /// The name is not an identifier the tokenizer can produce.
    InvalidName {
        /// The rejected name.
        name: String,
    },
    /// A numeric arity below the variadic sentinel `-1`.
    InvalidArity {
        /// The rejected arity.
        arity: i64,
    },
}

impl std::fmt::Display for RegistrationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateName { name } => write!(f, "Name '{name}' is already registered."),
            Self::EmptyName => write!(f, "A registered name cannot be empty."),
            Self::InvalidName { name } => write!(f,
                                                 "Name '{name}' must start with an ASCII letter and contain only letters and digits."),
            Self::InvalidArity { arity } => write!(f,
                                                   "Arity {arity} is invalid, it should be -1 (variadic), 0, or a positive integer."),
        }
    }
}

impl std::error::Error for RegistrationError {}
