/// Constant registry.
///
/// Process-wide table of named constants (`pi`, `e`, `infty`, and whatever
/// callers register), resolved by the parser.
pub mod constant;
/// Function registry.
///
/// Process-wide table mapping names to arity, evaluation rule and optional
/// typeset rule. Seeded with the builtins on first use and grow-only.
pub mod function;
/// Trigonometric angle mode.
pub mod mode;
/// Operator table.
///
/// The fixed set of binary operators with their precedence, associativity,
/// numeric rule and typeset rule.
pub mod operator;

use crate::error::RegistrationError;

/// Checks that `name` is something the tokenizer reads as one identifier:
/// an ASCII letter followed by ASCII letters and digits.
pub(crate) fn validate_name(name: &str) -> Result<(), RegistrationError> {
    let mut chars = name.chars();
    match chars.next() {
        None => Err(RegistrationError::EmptyName),
        Some(first)
            if first.is_ascii_alphabetic() && chars.all(|c| c.is_ascii_alphanumeric()) =>
        {
            Ok(())
        },
        Some(_) => Err(RegistrationError::InvalidName { name: name.to_string() }),
    }
}
