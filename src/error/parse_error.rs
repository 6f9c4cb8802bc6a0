use crate::{interpreter::registry::function::Arity, util::format::error_pointer};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
///
/// Every variant carries the byte offset in the source where the problem was
/// detected.
pub enum ParseError {
    /// A character that starts no token.
    UnknownCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character.
        position:  usize,
    },
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// Text of the token encountered.
        token:    String,
        /// Byte offset of the token.
        position: usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// Byte offset of the end of the source.
        position: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// Byte offset where `)` was expected.
        position: usize,
    },
    /// A literal that does not denote a number, e.g. `1.2.3`.
    InvalidLiteral {
        /// The literal text.
        literal:  String,
        /// Byte offset of the literal.
        position: usize,
    },
    /// A bare identifier that is not a registered constant.
    UnknownName {
        /// The identifier.
        name:     String,
        /// Byte offset of the identifier.
        position: usize,
    },
    /// A call to a function that is not registered.
    UnknownFunction {
        /// The function name.
        name:     String,
        /// Byte offset of the function name.
        position: usize,
    },
    /// A call whose argument count does not satisfy the function's arity.
    ArityMismatch {
        /// The function name.
        name:     String,
        /// The declared arity.
        expected: Arity,
        /// Number of arguments supplied.
        found:    usize,
        /// Byte offset of the function name.
        position: usize,
    },
}

impl ParseError {
    /// Returns the byte offset the error points at.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnknownCharacter { position, .. }
            | Self::UnexpectedToken { position, .. }
            | Self::UnexpectedEndOfInput { position }
            | Self::ExpectedClosingParen { position }
            | Self::InvalidLiteral { position, .. }
            | Self::UnknownName { position, .. }
            | Self::UnknownFunction { position, .. }
            | Self::ArityMismatch { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCharacter { character,
                                     position, } => {
                write!(f, "Error at position {position}: Unknown symbol '{character}'.")
            },
            Self::UnexpectedToken { token, position } => {
                write!(f, "Error at position {position}: Unexpected token: {token}.")
            },
            Self::UnexpectedEndOfInput { position } => {
                write!(f, "Error at position {position}: Unexpected end of input.")
            },
            Self::ExpectedClosingParen { position } => write!(f,
                                                              "Error at position {position}: Expected closing parenthesis ')' but none found."),
            Self::InvalidLiteral { literal, position } => {
                write!(f, "Error at position {position}: Invalid number literal '{literal}'.")
            },
            Self::UnknownName { name, position } => {
                write!(f, "Error at position {position}: Unknown constant '{name}'.")
            },
            Self::UnknownFunction { name, position } => {
                write!(f, "Error at position {position}: Unknown function '{name}'.")
            },
            Self::ArityMismatch { name,
                                  expected,
                                  found,
                                  position, } => write!(f,
                                                        "Error at position {position}: Function '{name}' expects {expected}, but {found} were given."),
        }
    }
}

impl std::error::Error for ParseError {}

/// A [`ParseError`] bound to the source it was raised for.
///
/// Displaying a `SyntaxError` prints the message followed by the source with
/// a caret under the offending position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    /// What went wrong.
    pub kind:   ParseError,
    /// The complete source text.
    pub source: String,
}

impl SyntaxError {
    /// Attaches `source` to a parse error.
    pub fn new(kind: ParseError, source: impl Into<String>) -> Self {
        Self { kind,
               source: source.into() }
    }

    /// Byte offset of the error in the source.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.kind.position()
    }

    /// The caret-pointer rendering of the error position.
    #[must_use]
    pub fn pointer(&self) -> String {
        error_pointer(&self.source, self.position())
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n{}", self.kind, self.pointer())
    }
}

impl std::error::Error for SyntaxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}
