use std::ops::{Deref, DerefMut};

use crate::interpreter::evaluator::core::Context;

/// A binding that lives only as long as this guard.
///
/// Created by [`Context::bind_transient`]. While the guard is alive the
/// context (reachable through `Deref`) sees the transient value; dropping the
/// guard restores whatever was bound before, or removes the name. This also
/// happens when evaluation returns early with an error.
pub struct TransientBinding<'a> {
    context:  &'a mut Context,
    name:     String,
    shadowed: Option<f64>,
}

impl Context {
    /// Binds `name` to `value` until the returned guard is dropped.
    ///
    /// ## Example
    /// ```
    /// use mathtex::Context;
    ///
    /// let mut context = Context::from_iter([("#i", 7.0)]);
    /// {
    ///     let scope = context.bind_transient("#i", 1.0);
    ///     assert_eq!(scope.get("#i"), Some(1.0));
    /// }
    /// assert_eq!(context.get("#i"), Some(7.0));
    /// ```
    pub fn bind_transient(&mut self, name: &str, value: f64) -> TransientBinding<'_> {
        let shadowed = self.set(name, value);
        log::trace!("bind transient {name} = {value}");
        TransientBinding { context: self,
                           name: name.to_string(),
                           shadowed }
    }
}

impl Deref for TransientBinding<'_> {
    type Target = Context;

    fn deref(&self) -> &Self::Target {
        self.context
    }
}

impl DerefMut for TransientBinding<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.context
    }
}

impl Drop for TransientBinding<'_> {
    fn drop(&mut self) {
        match self.shadowed.take() {
            Some(previous) => {
                self.context.set(self.name.as_str(), previous);
            },
            None => {
                self.context.bindings.remove(&self.name);
            },
        }
        log::trace!("release transient {}", self.name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ast::Expr, error::RuntimeError};

    #[test]
    fn transient_name_is_removed_after_scope() {
        let mut context = Context::new();
        {
            let mut scope = context.bind_transient("#i", 3.0);
            assert_eq!(scope.eval(&Expr::variable("#i")), Ok(3.0));
        }
        assert!(context.is_empty());
    }

    #[test]
    fn transient_name_is_removed_on_error() {
        fn failing(context: &mut Context) -> Result<f64, RuntimeError> {
            let mut scope = context.bind_transient("#i", 1.0);
            let division = Expr::operator('/', Expr::variable("#i"), Expr::number(0.0, "0"));
            scope.eval(&division)
        }

        let mut context = Context::new();
        assert!(failing(&mut context).is_err());
        assert!(!context.contains("#i"));
    }

    #[test]
    fn nested_scopes_restore_in_order() {
        let mut context = Context::new();
        {
            let mut outer = context.bind_transient("#i", 1.0);
            {
                let inner = outer.bind_transient("#i", 2.0);
                assert_eq!(inner.get("#i"), Some(2.0));
            }
            assert_eq!(outer.get("#i"), Some(1.0));
        }
        assert_eq!(context.get("#i"), None);
    }
}
