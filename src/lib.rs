//! # mathtex
//!
//! mathtex is a small math-expression language written in Rust.
//! It tokenizes an arithmetic string, parses it into an expression tree with
//! correct operator precedence and implicit multiplication, evaluates the tree
//! against a set of variable bindings, and typesets it back as LaTeX.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum, the tree the parser builds and both
/// the evaluator and the renderer consume.
pub mod ast;
/// Provides unified error types for parsing, evaluation and registration.
///
/// This module defines all errors that can be raised while tokenizing,
/// parsing, evaluating or registering. Syntax errors carry the offending
/// byte position and can draw a caret pointer under the source.
///
/// # Responsibilities
/// - Defines error enums for all failure modes.
/// - Implements `Display` and `std::error::Error` for reporting.
/// - Folds syntax and runtime failures into one [`Error`](error::Error) for
///   the composed entry points.
pub mod error;
/// Orchestrates tokenizing, parsing, evaluation and rendering.
///
/// This module ties together the lexer, the parser, the evaluator, the
/// renderer and the registries they all read.
pub mod interpreter;
/// General formatting helpers.
pub mod util;

pub use crate::{
    ast::Expr,
    error::Error,
    interpreter::{
        evaluator::core::Context,
        lexer::tokenize,
        parser::core::parse,
        registry::{
            constant::register_constant,
            function::{Arity, register_function},
            mode::{AngleMode, angle_mode, set_angle_mode},
        },
        renderer::render,
    },
};
use crate::error::RuntimeError;

/// Evaluates an expression tree against a binding context.
///
/// # Parameters
/// - `expr`: The tree to evaluate.
/// - `context`: Variable bindings; names that are not bound read as `0`.
///
/// # Returns
/// The value of the tree, or the first runtime error not absorbed by
/// `noerr`.
///
/// ## Example
/// ```
/// use mathtex::{Context, Expr, evaluate};
///
/// let expr = Expr::operator('*', Expr::number(4.0, "4"), Expr::variable("x"));
/// let mut context = Context::from_iter([("x", 2.5)]);
///
/// assert_eq!(evaluate(&expr, &mut context), Ok(10.0));
/// ```
pub fn evaluate(expr: &Expr, context: &mut Context) -> Result<f64, RuntimeError> {
    context.eval(expr)
}

/// Tokenizes, parses and evaluates `source` in one step.
///
/// Syntax, name, arity and runtime failures all come back through the one
/// [`Error`] type.
///
/// ## Example
/// ```
/// use mathtex::{Context, Error, parse_and_evaluate};
///
/// let mut context = Context::from_iter([("x", std::f64::consts::FRAC_PI_2)]);
///
/// assert_eq!(parse_and_evaluate("4sin($x)", &mut context), Ok(4.0));
/// assert_eq!(parse_and_evaluate("1+2-3*4", &mut context), Ok(-9.0));
/// assert!(matches!(parse_and_evaluate("1/0", &mut context), Err(Error::Runtime(_))));
/// assert!(matches!(parse_and_evaluate("1+", &mut context), Err(Error::Syntax(_))));
/// ```
pub fn parse_and_evaluate(source: &str, context: &mut Context) -> Result<f64, Error> {
    let tokens = tokenize(source)?;
    let expr = parse(&tokens, source)?;
    log::trace!("parsed '{source}' into a tree of depth {}", expr.depth());
    Ok(context.eval(&expr)?)
}

/// Tokenizes and parses `source`, then typesets the tree as LaTeX.
///
/// ## Example
/// ```
/// use mathtex::parse_and_render;
///
/// assert_eq!(parse_and_render("sum(1, 10, #i)").unwrap(), "\\sum_{i=1}^{10} i");
/// ```
pub fn parse_and_render(source: &str) -> Result<String, Error> {
    let tokens = tokenize(source)?;
    let expr = parse(&tokens, source)?;
    Ok(render(&expr))
}
