use crate::{
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, TokenStream},
    },
};

/// Parses a comma-separated argument list up to and including its `)`.
///
/// The opening `(` must already be consumed. It repeatedly calls
/// `parse_item` to parse one element, expecting either:
///
/// - a comma, to continue the list, or
/// - `)`, to end it.
///
/// An immediately encountered `)` produces an empty list.
///
/// Grammar (simplified): `list := item ("," item)*`
///
/// # Errors
/// Returns a `ParseError` if:
/// - an item fails to parse (this includes an empty item as in `f(1,)`),
/// - an unexpected token is encountered,
/// - the stream ends before the closing `)`.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, T>(
    tokens: &mut TokenStream<'a>,
    parse_item: impl Fn(&mut TokenStream<'a>) -> ParseResult<T>)
    -> ParseResult<Vec<T>> {
    let mut items = Vec::new();
    if tokens.peek().is_some_and(|t| t.is_symbol(')')) {
        tokens.next();
        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.next() {
            Some(token) if token.is_symbol(')') => break,
            Some(token) if token.kind == TokenKind::Comma => {},
            Some(token) => {
                return Err(ParseError::UnexpectedToken { token:    token.text.clone(),
                                                         position: token.position, });
            },
            None => return Err(ParseError::ExpectedClosingParen { position: tokens.end() }),
        }
    }
    Ok(items)
}
