use std::{collections::HashMap, f64::consts, sync::RwLock};

use lazy_static::lazy_static;

use crate::{error::RegistrationError, interpreter::registry::validate_name};

/// A registered constant.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantDef {
    /// Numeric value.
    pub value:   f64,
    /// Typeset form, e.g. `\pi`.
    pub display: String,
}

lazy_static! {
    /// Seeded with `pi`, `e` and `infty`. `infty` is a true `f64::INFINITY`,
    /// so `1/infty` is `0` and `-infty` is negative infinity.
    static ref CONSTANTS: RwLock<HashMap<String, ConstantDef>> = {
        let builtins = [("pi", consts::PI, "\\pi"),
                        ("e", consts::E, "e"),
                        ("infty", f64::INFINITY, "\\infty")];
        RwLock::new(builtins.into_iter()
                            .map(|(name, value, display)| {
                                (name.to_string(),
                                 ConstantDef { value,
                                               display: display.to_string() })
                            })
                            .collect())
    };
}

/// Looks up a constant by name.
#[must_use]
pub fn lookup_constant(name: &str) -> Option<ConstantDef> {
    let constants = CONSTANTS.read().unwrap_or_else(std::sync::PoisonError::into_inner);
    constants.get(name).cloned()
}

/// Registers a new constant.
///
/// `display` is the typeset form used by the renderer; it defaults to the
/// name itself.
///
/// # Errors
/// - `EmptyName` or `InvalidName` if `name` is not an identifier.
/// - `DuplicateName` if the name is already registered. The existing entry
///   is left unchanged.
///
/// ## Example
/// ```
/// use mathtex::{Context, interpreter::registry::constant::register_constant, parse_and_evaluate};
///
/// register_constant("tau", std::f64::consts::TAU, Some("\\tau")).unwrap();
///
/// let mut context = Context::new();
/// assert_eq!(parse_and_evaluate("tau/2", &mut context).unwrap(), std::f64::consts::PI);
/// ```
pub fn register_constant(name: &str,
                         value: f64,
                         display: Option<&str>)
                         -> Result<(), RegistrationError> {
    validate_name(name)?;

    let mut constants = CONSTANTS.write().unwrap_or_else(std::sync::PoisonError::into_inner);
    if constants.contains_key(name) {
        return Err(RegistrationError::DuplicateName { name: name.to_string() });
    }
    constants.insert(name.to_string(),
                     ConstantDef { value,
                                   display: display.unwrap_or(name).to_string() });
    log::debug!("registered constant '{name}' = {value}");
    Ok(())
}
