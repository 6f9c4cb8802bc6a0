use crate::{
    ast::Expr,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            function::core::single,
        },
        registry::mode::to_radians,
        renderer::{render, render_applied},
    },
};

/// Defines a one-argument builtin over `f64`.
///
/// The generated function evaluates its single argument and applies the
/// numeric rule to it.
///
/// # Example
/// ```
/// use mathtex::{Context, ast::Expr, interpreter::evaluator::function::builtin::sqrt};
///
/// let mut context = Context::new();
/// let r = sqrt(&mut context, &[Expr::number(16.0, "16")]).unwrap();
///
/// assert_eq!(r, 4.0);
/// ```
macro_rules! unary_builtin {
    ($fname:ident, $name:literal, $rule:expr) => {
        #[doc = concat!("Evaluates `", $name, "(x)`.")]
        pub fn $fname(context: &mut Context, args: &[Expr]) -> EvalResult<f64> {
            let rule: fn(f64) -> f64 = $rule;
            let arg = single($name, args)?;
            Ok(rule(context.eval(arg)?))
        }
    };
}

unary_builtin!(sin, "sin", |x| to_radians(x).sin());
unary_builtin!(cos, "cos", |x| to_radians(x).cos());
unary_builtin!(tan, "tan", |x| to_radians(x).tan());
unary_builtin!(cot, "cot", |x| 1.0 / to_radians(x).tan());
unary_builtin!(sec, "sec", |x| 1.0 / to_radians(x).cos());
unary_builtin!(csc, "csc", |x| 1.0 / to_radians(x).sin());
unary_builtin!(abs, "abs", f64::abs);
unary_builtin!(ceil, "ceil", f64::ceil);
unary_builtin!(floor, "floor", f64::floor);
unary_builtin!(round, "round", f64::round);
unary_builtin!(sqrt, "sqrt", f64::sqrt);
unary_builtin!(cbrt, "cbrt", f64::cbrt);

/// Defines the renderer of a one-argument builtin from its LaTeX command.
macro_rules! applied_render {
    ($fname:ident, $command:literal) => {
        pub fn $fname(args: &[Expr]) -> String {
            render_applied($command, args)
        }
    };
}

applied_render!(render_sin, "\\sin");
applied_render!(render_cos, "\\cos");
applied_render!(render_tan, "\\tan");
applied_render!(render_cot, "\\cot");
applied_render!(render_sec, "\\sec");
applied_render!(render_csc, "\\csc");
applied_render!(render_round, "\\operatorname{round}");

/// Defines a renderer that wraps its single argument in delimiters.
macro_rules! delimited_render {
    ($fname:ident, $open:literal, $close:literal) => {
        pub fn $fname(args: &[Expr]) -> String {
            match args {
                [arg] => format!("{}{}{}", $open, render(arg), $close),
                _ => String::new(),
            }
        }
    };
}

delimited_render!(render_abs, "\\left|", "\\right|");
delimited_render!(render_ceil, "\\left\\lceil ", "\\right\\rceil");
delimited_render!(render_floor, "\\left\\lfloor ", "\\right\\rfloor");
delimited_render!(render_sqrt, "\\sqrt{", "}");
delimited_render!(render_cbrt, "\\sqrt[3]{", "}");

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(f: fn(&mut Context, &[Expr]) -> EvalResult<f64>, x: f64) -> f64 {
        f(&mut Context::new(), &[Expr::number(x, x.to_string())]).unwrap()
    }

    #[test]
    fn reciprocal_trigonometry() {
        assert!((eval(cot, std::f64::consts::FRAC_PI_4) - 1.0).abs() < 1e-12);
        assert!((eval(sec, 0.0) - 1.0).abs() < 1e-12);
        assert!((eval(csc, std::f64::consts::FRAC_PI_2) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn rounding_family() {
        assert_eq!(eval(ceil, 4.2), 5.0);
        assert_eq!(eval(floor, 4.8), 4.0);
        assert_eq!(eval(round, 4.5), 5.0);
        assert_eq!(eval(round, -4.5), -5.0);
        assert!((eval(cbrt, 27.0) - 3.0).abs() < 1e-12);
        assert_eq!(eval(abs, -2.0), 2.0);
    }

    #[test]
    fn wrong_argument_count_is_an_error() {
        assert!(sqrt(&mut Context::new(), &[]).is_err());
        assert_eq!(render_abs(&[]), "");
    }

    #[test]
    fn typeset_forms() {
        let x = [Expr::variable("x")];
        assert_eq!(render_sin(&x), "\\sin\\left(x\\right)");
        assert_eq!(render_abs(&x), "\\left|x\\right|");
        assert_eq!(render_cbrt(&x), "\\sqrt[3]{x}");
        assert_eq!(render_floor(&x), "\\left\\lfloor x\\right\\rfloor");
    }
}
