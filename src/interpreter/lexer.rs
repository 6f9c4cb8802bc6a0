use logos::Logos;

use crate::error::{ParseError, SyntaxError};

/// Category of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// An operator-table symbol or a grouping parenthesis.
    Operator,
    /// A numeric literal.
    Literal,
    /// A function or constant name.
    Identifier,
    /// The argument separator `,`.
    Comma,
    /// A sigil (`$` or `#`) followed by a one-character name.
    Variable,
}

/// A lexical token with its source position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Raw text; digit separators are removed from literals.
    pub text:     String,
    /// Token category.
    pub kind:     TokenKind,
    /// Byte offset of the first character in the source.
    pub position: usize,
}

impl Token {
    /// Returns `true` if this is the operator token `symbol`.
    #[must_use]
    pub fn is_symbol(&self, symbol: char) -> bool {
        self.kind == TokenKind::Operator && self.text.len() == 1 && self.text.starts_with(symbol)
    }

    /// The single character of an operator token.
    #[must_use]
    pub fn symbol(&self) -> Option<char> {
        match self.kind {
            TokenKind::Operator => self.text.chars().next(),
            _ => None,
        }
    }
}

/// Raw lexemes recognised by the Logos lexer.
///
/// The single-character symbols are exactly the operator table plus the
/// grouping parentheses.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\n\x0B\x0C\r]+")]
enum Lexeme {
    /// `+ - * / % ^ ( )`
    #[regex(r"[-+*/%^()]")]
    Symbol,
    /// Numeric literal tokens, such as `42`, `1_000.5` or `2.1e-10`.
    #[regex(r"[0-9][0-9_.]*", lex_exponent)]
    Literal,
    /// `,`
    #[token(",")]
    Comma,
    /// Variable tokens, such as `$x` or the summation index `#i`.
    #[token("$", lex_variable)]
    #[token("#", lex_variable)]
    Variable,
    /// Identifier tokens; function or constant names such as `sin` or `pi`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*")]
    Identifier,
}

/// Extends a literal over an exponent such as `e5`, `e+5` or `e-5`.
///
/// The `e` is only taken when digits follow it, so that `2e` stays the
/// literal `2` followed by the constant `e`.
fn lex_exponent(lex: &mut logos::Lexer<Lexeme>) {
    let rest = lex.remainder().as_bytes();
    let digits_at = match rest {
        [b'e', b'+' | b'-', d, ..] if d.is_ascii_digit() => 2,
        [b'e', d, ..] if d.is_ascii_digit() => 1,
        _ => return,
    };
    let len = rest[digits_at..].iter()
                               .take_while(|b| b.is_ascii_digit() || **b == b'_')
                               .count();
    lex.bump(digits_at + len);
}

/// Consumes the one character that names a variable.
///
/// Fails when the sigil is the last character of the source.
fn lex_variable(lex: &mut logos::Lexer<Lexeme>) -> Option<()> {
    let name = lex.remainder().chars().next()?;
    lex.bump(name.len_utf8());
    Some(())
}

/// Scans `source` into tokens.
///
/// Whitespace separates tokens and is never emitted. An empty source yields
/// no tokens.
///
/// # Errors
/// Returns a [`SyntaxError`] positioned at the first character that starts
/// no token.
///
/// ## Example
/// ```
/// use mathtex::interpreter::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize("4sin($x)").unwrap();
/// let kinds = tokens.iter().map(|t| t.kind).collect::<Vec<_>>();
///
/// assert_eq!(kinds,
///            [TokenKind::Literal,
///             TokenKind::Identifier,
///             TokenKind::Operator,
///             TokenKind::Variable,
///             TokenKind::Operator]);
/// assert_eq!(tokens[3].text, "$x");
/// assert_eq!(tokens[3].position, 5);
///
/// let err = tokenize("1+@").unwrap_err();
/// assert_eq!(err.position(), 2);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, SyntaxError> {
    let mut tokens = Vec::new();
    let mut lexer = Lexeme::lexer(source);

    while let Some(lexeme) = lexer.next() {
        let span = lexer.span();
        let slice = lexer.slice();

        let kind = match lexeme {
            Ok(Lexeme::Symbol) => TokenKind::Operator,
            Ok(Lexeme::Literal) => TokenKind::Literal,
            Ok(Lexeme::Comma) => TokenKind::Comma,
            Ok(Lexeme::Variable) => TokenKind::Variable,
            Ok(Lexeme::Identifier) => TokenKind::Identifier,
            Err(()) => {
                let character = source.get(span.start..)
                                      .and_then(|rest| rest.chars().next())
                                      .unwrap_or(char::REPLACEMENT_CHARACTER);
                return Err(SyntaxError::new(ParseError::UnknownCharacter { character,
                                                                           position:
                                                                               span.start, },
                                            source));
            },
        };

        let text = match kind {
            TokenKind::Literal => slice.replace('_', ""),
            _ => slice.to_string(),
        };

        tokens.push(Token { text,
                            kind,
                            position: span.start });
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::registry::operator::OPERATOR_SYMBOLS;

    fn texts(source: &str) -> Vec<String> {
        tokenize(source).unwrap().into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn every_table_operator_is_a_symbol_token() {
        for symbol in OPERATOR_SYMBOLS {
            let tokens = tokenize(&symbol.to_string()).unwrap();
            assert_eq!(tokens.len(), 1);
            assert!(tokens[0].is_symbol(*symbol));
        }
    }

    #[test]
    fn whitespace_is_skipped_and_positions_are_byte_offsets() {
        let tokens = tokenize(" 1 +\t\n2\r\x0B\x0C").unwrap();
        let positions = tokens.iter().map(|t| t.position).collect::<Vec<_>>();

        assert_eq!(positions, [1, 3, 6]);
    }

    #[test]
    fn literal_strips_separators_and_keeps_exponent() {
        assert_eq!(texts("1_000.25"), ["1000.25"]);
        assert_eq!(texts("2.5e-3"), ["2.5e-3"]);
        assert_eq!(texts("6e+2"), ["6e+2"]);
    }

    #[test]
    fn sign_ends_literal_unless_after_exponent() {
        assert_eq!(texts("1+2-3"), ["1", "+", "2", "-", "3"]);
        assert_eq!(texts("1e-2-3"), ["1e-2", "-", "3"]);
    }

    #[test]
    fn bare_e_after_digits_is_an_identifier() {
        let tokens = tokenize("2e").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Literal);
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert_eq!(tokens[1].text, "e");
    }

    #[test]
    fn variables_take_exactly_one_character() {
        let tokens = tokenize("$ab").unwrap();

        assert_eq!(tokens[0].kind, TokenKind::Variable);
        assert_eq!(tokens[0].text, "$a");
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert_eq!(tokens[1].text, "b");
        assert_eq!(texts("#i"), ["#i"]);
    }

    #[test]
    fn sigil_at_end_of_input_is_an_error() {
        let err = tokenize("1+$").unwrap_err();
        assert_eq!(err.position(), 2);
    }

    #[test]
    fn identifiers_and_commas() {
        let tokens = tokenize("log2(8, 2)").unwrap();

        assert_eq!(tokens[0].text, "log2");
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[3].kind, TokenKind::Comma);
    }

    #[test]
    fn unknown_character_reports_its_position() {
        let err = tokenize("1+@").unwrap_err();

        assert_eq!(err.kind,
                   ParseError::UnknownCharacter { character: '@',
                                                  position:  2, });
    }

    #[test]
    fn empty_source_has_no_tokens() {
        assert!(tokenize("").unwrap().is_empty());
        assert!(tokenize("   ").unwrap().is_empty());
    }
}
