use std::{iter::Peekable, slice};

use crate::{
    ast::Expr,
    error::{ParseError, SyntaxError},
    interpreter::{lexer::Token, parser::binary::parse_binary},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Token cursor with one token of lookahead.
///
/// Besides the tokens it remembers where the source ends, so that running
/// out of tokens can be reported at a position.
pub struct TokenStream<'a> {
    tokens: Peekable<slice::Iter<'a, Token>>,
    end:    usize,
}

impl<'a> TokenStream<'a> {
    /// Creates a stream over `tokens` scanned from `source`.
    #[must_use]
    pub fn new(tokens: &'a [Token], source: &str) -> Self {
        Self { tokens: tokens.iter().peekable(),
               end:    source.len(), }
    }

    /// Returns the next token without consuming it.
    pub fn peek(&mut self) -> Option<&'a Token> {
        self.tokens.peek().copied()
    }

    /// The error for a token that should follow but does not.
    #[must_use]
    pub const fn unexpected_end(&self) -> ParseError {
        ParseError::UnexpectedEndOfInput { position: self.end }
    }

    /// Byte offset just past the source.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.end
    }
}

impl<'a> Iterator for TokenStream<'a> {
    type Item = &'a Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.tokens.next()
    }
}

/// Parses a full token sequence into one expression tree.
///
/// The whole input must form a single expression: leftover tokens, such as
/// an unmatched `)` or a comma outside of a call, are errors.
///
/// # Errors
/// Returns a [`SyntaxError`] positioned at the offending token, or at the end
/// of `source` when the input stops early. No partial tree is returned.
///
/// ## Example
/// ```
/// use mathtex::{
///     ast::Expr,
///     interpreter::{lexer::tokenize, parser::core::parse},
/// };
///
/// let source = "1+2*3";
/// let tokens = tokenize(source).unwrap();
/// let tree = parse(&tokens, source).unwrap();
///
/// assert_eq!(tree,
///            Expr::operator('+',
///                           Expr::number(1.0, "1"),
///                           Expr::operator('*', Expr::number(2.0, "2"), Expr::number(3.0, "3"))));
///
/// let err = parse(&tokenize("(1+2").unwrap(), "(1+2").unwrap_err();
/// assert_eq!(err.position(), 4);
/// ```
pub fn parse(tokens: &[Token], source: &str) -> Result<Expr, SyntaxError> {
    let mut stream = TokenStream::new(tokens, source);
    parse_all(&mut stream).map_err(|err| SyntaxError::new(err, source))
}

fn parse_all(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let expr = parse_expression(tokens)?;

    match tokens.next() {
        Some(token) => Err(ParseError::UnexpectedToken { token:    token.text.clone(),
                                                         position: token.position, }),
        None => Ok(expr),
    }
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It starts precedence
/// climbing at the lowest level, so any binary operator may follow.
///
/// Grammar: `expression := unary (operator unary)*`
pub fn parse_expression(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    parse_binary(tokens, 0)
}
