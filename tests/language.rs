use std::f64::consts::{E, FRAC_PI_2, PI};

use mathtex::{
    Arity, Context, Error, Expr,
    error::{ParseError, RegistrationError, RuntimeError},
    evaluate, parse, parse_and_evaluate, parse_and_render, register_constant, register_function,
    render, tokenize,
};

fn value_of(src: &str) -> f64 {
    parse_and_evaluate(src, &mut Context::new()).unwrap_or_else(|e| panic!("'{src}' failed:\n{e}"))
}

fn assert_value(src: &str, expected: f64) {
    let value = value_of(src);
    assert!((value - expected).abs() < 1e-9,
            "'{src}' evaluated to {value}, expected {expected}");
}

fn runtime_error(src: &str) -> RuntimeError {
    match parse_and_evaluate(src, &mut Context::new()) {
        Err(Error::Runtime(e)) => e,
        other => panic!("'{src}' was expected to fail at runtime, got {other:?}"),
    }
}

fn syntax_error(src: &str) -> ParseError {
    match parse_and_evaluate(src, &mut Context::new()) {
        Err(Error::Syntax(e)) => e.kind,
        other => panic!("'{src}' was expected to be rejected, got {other:?}"),
    }
}

#[test]
fn basic_arithmetic() {
    assert_value("1+2-3*4", -9.0);
    assert_value("10 / 4", 2.5);
    assert_value("7 % 4", 3.0);
    assert_value("2^10", 1024.0);
    assert_value("1_000 + 0.5", 1000.5);
    assert_value("1.5e3", 1500.0);
    assert_value("2.5e-1", 0.25);
}

#[test]
fn power_is_right_associative() {
    assert_value("2^3^2", 512.0);
    assert_value("(2^3)^2", 64.0);
}

#[test]
fn unary_minus_binds_tighter_than_power() {
    assert_value("-2^2", 4.0);
    assert_value("-(2^2)", -4.0);
    assert_value("3--2", 5.0);
    assert_value("+3", 3.0);
}

#[test]
fn implicit_multiplication() {
    let mut context = Context::from_iter([("x", FRAC_PI_2)]);

    assert_eq!(parse_and_evaluate("4sin($x)", &mut context), Ok(4.0));
    assert_eq!(parse_and_evaluate("4*sin($x)", &mut context), Ok(4.0));
    assert_eq!(parse_and_evaluate("3*4sin($x)", &mut context), Ok(12.0));
    assert_value("2(3+4)", 14.0);
    assert_value("(1+1)(2+2)", 8.0);
    assert_value("2pi", 2.0 * PI);
    assert_value("2e", 2.0 * E);
    assert_value("8/2(2)", 8.0);
}

#[test]
fn variables_read_the_context() {
    let mut context = Context::from_iter([("x", 3.0), ("y", 4.0)]);

    assert_eq!(parse_and_evaluate("sqrt($x^2 + $y^2)", &mut context), Ok(5.0));
    assert_eq!(parse_and_evaluate("$x$y", &mut context), Ok(12.0));
    assert_eq!(parse_and_evaluate("$z + 1", &mut context), Ok(1.0));
    assert!(!context.contains("z"));
}

#[test]
fn constants() {
    assert_value("pi", PI);
    assert_value("e", E);
    assert!(value_of("infty").is_infinite());
    assert!(value_of("-infty") < 0.0);
    assert_value("1/infty", 0.0);
}

#[test]
fn builtin_functions() {
    assert_value("abs(-5)", 5.0);
    assert_value("ceil(1.2) + floor(1.8)", 3.0);
    assert_value("round(2.5)", 3.0);
    assert_value("sqrt(9)", 3.0);
    assert_value("cbrt(-8)", -2.0);
    assert_value("max(3, 9, 1)", 9.0);
    assert_value("min(3, 9, 1)", 1.0);
    assert_value("max(-1)", -1.0);
    assert_value("log(2, 1024)", 10.0);
    assert_value("log(10, 1000)", 3.0);
    assert_value("cos(pi)", -1.0);
    assert_value("tan(pi/4)", 1.0);
}

#[test]
fn sum_iterates_the_index() {
    assert_value("sum(1, 5, #i)", 15.0);
    assert_value("sum(1, 5)", 15.0);
    assert_value("sum(1, 3, #i^2)", 14.0);
    assert_value("sum(1, 3, #i*sum(1, 2, #i))", 18.0);
    assert_value("sum(1.9, 3.2, #i)", 6.0);
    assert_value("sum(0, -1, #i)", 0.0);
    assert_value("sum(1e17, 1e17)", 1e17);
    assert_value("sum(1e17, 1e17, 2)", 2.0);
}

#[test]
fn sum_rejects_symbolic_end() {
    assert!(matches!(runtime_error("sum(1, $n, #i)"), RuntimeError::Evaluation { .. }));
    assert!(matches!(runtime_error("sum(1, 2+3, #i)"), RuntimeError::Evaluation { .. }));
    assert!(matches!(runtime_error("sum(1, infty, #i)"), RuntimeError::Evaluation { .. }));
    assert!(matches!(runtime_error("sum(-infty, 0)"), RuntimeError::Evaluation { .. }));
    assert!(matches!(runtime_error("sum(-infty, 0, #i)"), RuntimeError::Evaluation { .. }));
    assert!(matches!(runtime_error("sum(1)"), RuntimeError::Evaluation { .. }));
    assert!(matches!(runtime_error("sum(1, 2, 3, 4)"), RuntimeError::Evaluation { .. }));
}

#[test]
fn sum_index_is_transient() {
    let mut context = Context::from_iter([("x", 2.0)]);

    assert_eq!(parse_and_evaluate("sum(1, 3, $x*#i)", &mut context), Ok(12.0));
    assert_eq!(context.get("#i"), None);
    assert_eq!(context.len(), 1);

    assert!(parse_and_evaluate("sum(1, 3, 1/(#i-2))", &mut context).is_err());
    assert_eq!(context.get("#i"), None);
}

#[test]
fn division_by_zero_is_error() {
    assert_eq!(runtime_error("1/0"), RuntimeError::DivisionByZero { dividend: 1.0 });
    assert_eq!(runtime_error("5 % 0"), RuntimeError::ModuloByZero { dividend: 5.0 });
    assert_eq!(runtime_error("2 + 3/(1-1)"),
               RuntimeError::DivisionByZero { dividend: 3.0 });
}

#[test]
fn noerr_absorbs_failures() {
    assert_value("noerr(1/0)", 0.0);
    assert_value("1 + noerr(2.5/(1-1))", 1.0);
    assert_value("noerr(sum(1, $n, #i))", 0.0);
    assert_value("noerr(6/3)", 2.0);
    assert_eq!(runtime_error("noerr(1)/0"),
               RuntimeError::DivisionByZero { dividend: 1.0 });
}

#[test]
fn max_without_arguments_fails_at_runtime() {
    assert!(matches!(runtime_error("max()"), RuntimeError::Evaluation { .. }));
}

#[test]
fn syntax_errors_point_at_the_offender() {
    let err = tokenize("1+@").unwrap_err();
    assert_eq!(err.position(), 2);
    assert_eq!(err.kind,
               ParseError::UnknownCharacter { character: '@',
                                              position:  2, });

    assert_eq!(syntax_error("1+"), ParseError::UnexpectedEndOfInput { position: 2 });
    assert!(matches!(syntax_error("(1+2"), ParseError::ExpectedClosingParen { .. }));
    assert!(matches!(syntax_error("1+2)"), ParseError::UnexpectedToken { position: 3, .. }));
    assert!(matches!(syntax_error("1,2"), ParseError::UnexpectedToken { position: 1, .. }));
    assert!(matches!(syntax_error("1 * * 2"), ParseError::UnexpectedToken { position: 4, .. }));
    assert!(matches!(syntax_error("()"), ParseError::UnexpectedToken { position: 1, .. }));
}

#[test]
fn syntax_error_display_draws_a_pointer() {
    let err = tokenize("1+@").unwrap_err();
    assert_eq!(err.to_string(),
               "Error at position 2: Unknown symbol '@'.\n---\n1+@\n  ^\n---");
}

#[test]
fn names_are_checked_at_parse_time() {
    assert_eq!(syntax_error("1 + foo"),
               ParseError::UnknownName { name:     "foo".to_string(),
                                         position: 4, });
    assert!(matches!(syntax_error("foo(1)"), ParseError::UnknownFunction { position: 0, .. }));
    assert_eq!(syntax_error("2 + sqrt(1, 2)"),
               ParseError::ArityMismatch { name:     "sqrt".to_string(),
                                           expected: Arity::Exact(1),
                                           found:    2,
                                           position: 4, });
    assert!(matches!(syntax_error("log(8)"), ParseError::ArityMismatch { found: 1, .. }));
}

#[test]
fn render_keeps_literal_text() {
    assert_eq!(parse_and_render("0.50 + 1_000").unwrap(), "0.50 + 1000");
    assert_eq!(parse_and_render("4sin($x)").unwrap(), "4 \\cdot \\sin\\left(x\\right)");
    assert_eq!(parse_and_render("-pi/2").unwrap(), "\\frac{-\\pi}{2}");
}

#[test]
fn evaluate_accepts_hand_built_trees() {
    let expr = Expr::call("max", vec![Expr::variable("a"), Expr::number(2.0, "2")]);
    let mut context = Context::from_iter([("a", 5.0)]);

    assert_eq!(evaluate(&expr, &mut context), Ok(5.0));
    assert_eq!(render(&expr), "\\max\\left(a, 2\\right)");
}

#[test]
fn parse_builds_the_expected_tree() {
    let source = "1 + 2 * 3";
    let tokens = tokenize(source).unwrap();
    let tree = parse(&tokens, source).unwrap();

    assert_eq!(tree,
               Expr::operator('+',
                              Expr::number(1.0, "1"),
                              Expr::operator('*', Expr::number(2.0, "2"), Expr::number(3.0, "3"))));
}

#[test]
fn registered_functions_are_usable() {
    register_function("hyp", Arity::Exact(2), |context, args| {
        let a = context.eval(&args[0])?;
        let b = context.eval(&args[1])?;
        Ok(a.hypot(b))
    }, None).unwrap();

    assert_value("hyp(3, 4)", 5.0);
    assert_value("2hyp(3, 4)", 10.0);
    assert_eq!(parse_and_render("1 + hyp(3, 4)").unwrap(), "1 + ");
    assert!(matches!(syntax_error("hyp(3)"), ParseError::ArityMismatch { .. }));
}

#[test]
fn registered_variadic_function_with_renderer() {
    register_function("count",
                      Arity::try_from(-1_i64).unwrap(),
                      |_, args| Ok(args.len() as f64),
                      Some(|args| format!("\\#{}", args.len())))
        .unwrap();

    assert_value("count()", 0.0);
    assert_value("count(1, 1/0, 3)", 3.0);
    assert_eq!(parse_and_render("count(1, 2)").unwrap(), "\\#2");
}

#[test]
fn registered_constants_are_usable() {
    register_constant("phi", 1.618_033_988_749_895, Some("\\varphi")).unwrap();
    register_constant("gee", 9.81, None).unwrap();

    assert_value("2phi", 3.236_067_977_499_79);
    assert_eq!(parse_and_render("phi + gee").unwrap(), "\\varphi + gee");
}

#[test]
fn duplicate_registration_leaves_the_entry_unchanged() {
    assert_eq!(register_constant("pi", 3.0, None),
               Err(RegistrationError::DuplicateName { name: "pi".to_string() }));
    assert_value("pi", PI);

    assert!(register_function("sin", Arity::Exact(1), |_, _| Ok(7.0), None).is_err());
    assert_value("sin(0)", 0.0);
}

#[test]
fn invalid_registrations_are_rejected() {
    assert_eq!(register_constant("", 1.0, None), Err(RegistrationError::EmptyName));
    assert!(matches!(register_constant("a b", 1.0, None),
                     Err(RegistrationError::InvalidName { .. })));
    assert_eq!(Arity::try_from(-3_i64),
               Err(RegistrationError::InvalidArity { arity: -3 }));
}
