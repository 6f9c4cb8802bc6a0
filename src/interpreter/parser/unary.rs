use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, TokenStream, parse_expression},
            utils::parse_comma_separated,
        },
        registry::{constant::lookup_constant, function::lookup_function},
    },
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `-`  (negation, built as `0 - operand`)
/// - `+`  (no-op)
///
/// A prefix operator applies to the operand directly after it and binds
/// tighter than any binary operator, so `-2^2` is `(-2)^2`. Prefixes nest:
/// `--x` is `x`.
///
/// Grammar:
/// ```text
///     unary := ("-" | "+") unary
///            | primary
/// ```
pub(crate) fn parse_unary(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    match tokens.peek() {
        Some(token) if token.is_symbol('-') => {
            tokens.next();
            Ok(Expr::negation(parse_unary(tokens)?))
        },
        Some(token) if token.is_symbol('+') => {
            tokens.next();
            parse_unary(tokens)
        },
        _ => parse_primary(tokens),
    }
}

/// Parses a primary (atomic) expression.
///
/// Grammar (simplified):
/// ```text
///     primary := literal
///              | variable
///              | identifier "(" arguments ")"
///              | identifier
///              | "(" expression ")"
/// ```
/// # Errors
/// Any other token here is an empty operand, e.g. the `*` in `1+*2` or the
/// `)` in `()`.
pub(crate) fn parse_primary(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let token = tokens.next().ok_or_else(|| tokens.unexpected_end())?;

    match token.kind {
        TokenKind::Literal => parse_literal(token),
        TokenKind::Variable => Ok(Expr::variable(variable_name(&token.text))),
        TokenKind::Identifier => parse_identifier_or_function(tokens, token),
        TokenKind::Operator if token.is_symbol('(') => parse_grouping(tokens),
        TokenKind::Operator | TokenKind::Comma => {
            Err(ParseError::UnexpectedToken { token:    token.text.clone(),
                                              position: token.position, })
        },
    }
}

/// Maps a variable token to its binding name.
///
/// `$x` reads the caller's binding `x`. Names under the `#` sigil, such as
/// the summation index `#i`, keep the sigil so they never collide with
/// caller bindings.
fn variable_name(text: &str) -> &str {
    text.strip_prefix('$').unwrap_or(text)
}

fn parse_literal(token: &Token) -> ParseResult<Expr> {
    token.text
         .parse::<f64>()
         .map(|value| Expr::number(value, token.text.as_str()))
         .map_err(|_| ParseError::InvalidLiteral { literal:  token.text.clone(),
                                                   position: token.position, })
}

/// Parses a parenthesized expression after its `(`.
///
/// Grammar: `grouping := "(" expression ")"`
fn parse_grouping(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let expr = parse_expression(tokens)?;

    match tokens.next() {
        Some(token) if token.is_symbol(')') => Ok(expr),
        Some(token) => Err(ParseError::UnexpectedToken { token:    token.text.clone(),
                                                         position: token.position, }),
        None => Err(ParseError::ExpectedClosingParen { position: tokens.end() }),
    }
}

/// Parses an identifier as a function call or a constant.
///
/// An identifier directly followed by `(` is a call: the function must be
/// registered and its arity must accept the number of arguments. Otherwise
/// the identifier must name a registered constant, whose value is copied
/// into the tree.
///
/// # Errors
/// - `UnknownFunction` / `UnknownName` for unregistered names.
/// - `ArityMismatch` at the function name when the argument count is wrong.
fn parse_identifier_or_function(tokens: &mut TokenStream<'_>,
                                identifier: &Token)
                                -> ParseResult<Expr> {
    let name = identifier.text.as_str();

    if tokens.peek().is_some_and(|t| t.is_symbol('(')) {
        let function =
            lookup_function(name).ok_or_else(|| ParseError::UnknownFunction { name:     name.to_string(),
                                                                               position: identifier.position, })?;
        tokens.next();

        let args = parse_comma_separated(tokens, parse_expression)?;
        if !function.arity.check(args.len()) {
            return Err(ParseError::ArityMismatch { name:     name.to_string(),
                                                   expected: function.arity,
                                                   found:    args.len(),
                                                   position: identifier.position, });
        }

        return Ok(Expr::call(name, args));
    }

    lookup_constant(name).map(|constant| Expr::Constant { name:  name.to_string(),
                                                           value: constant.value, })
                         .ok_or_else(|| ParseError::UnknownName { name:     name.to_string(),
                                                                  position: identifier.position, })
}
