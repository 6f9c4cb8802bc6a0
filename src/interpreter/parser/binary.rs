use crate::{
    ast::Expr,
    interpreter::{
        lexer::{TokenKind, Token},
        parser::{
            core::{ParseResult, TokenStream},
            unary::parse_unary,
        },
        registry::operator::{Associativity, MULTIPLICATION, OperatorDef, lookup_operator},
    },
};

/// A binary operator found after a complete operand.
struct Infix {
    op:       &'static OperatorDef,
    /// `false` for a multiplication inserted between adjacent operands.
    explicit: bool,
}

/// Parses binary operator chains by precedence climbing.
///
/// Only operators binding at least as tightly as `min_precedence` are
/// consumed at this level. The right operand of a left-associative operator
/// is parsed one level tighter, so `a - b - c` groups as `(a - b) - c`; a
/// right-associative operator parses its right operand at its own level, so
/// `a ^ b ^ c` groups as `a ^ (b ^ c)`.
///
/// Two adjacent operands with no operator between them (`4sin($x)`,
/// `2(1+1)`, `$a$b`) are joined by an implicit multiplication with the
/// precedence and associativity of `*`. Being left-associative, the inserted
/// multiplication groups with what precedes it: `3*4sin($x)` is
/// `(3*4)*sin($x)`, not `3*(4*sin($x))`. Both readings give the same value.
///
/// Grammar: `binary(p) := unary (op binary(p') )*` where `op` has precedence
/// at least `p`.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the first operand.
/// - `min_precedence`: Weakest operator precedence accepted at this level.
///
/// # Returns
/// The operand, or an `Expr::Operator` tree combining operands.
pub fn parse_binary(tokens: &mut TokenStream<'_>, min_precedence: u8) -> ParseResult<Expr> {
    let mut left = parse_unary(tokens)?;

    while let Some(Infix { op, explicit }) = peek_infix(tokens) {
        if op.precedence < min_precedence {
            break;
        }
        if explicit {
            tokens.next();
        }

        let next_precedence = match op.associativity {
            Associativity::Left => op.precedence + 1,
            Associativity::Right => op.precedence,
        };
        let right = parse_binary(tokens, next_precedence)?;
        left = Expr::operator(op.symbol, left, right);
    }

    Ok(left)
}

/// Looks at the token after a complete operand and decides which operator,
/// if any, continues the expression.
fn peek_infix(tokens: &mut TokenStream<'_>) -> Option<Infix> {
    let token = tokens.peek()?;

    if starts_operand(token) {
        return lookup_operator(MULTIPLICATION).map(|op| Infix { op,
                                                               explicit: false });
    }

    token.symbol()
         .and_then(lookup_operator)
         .map(|op| Infix { op,
                           explicit: true })
}

/// Returns `true` for tokens that begin a value: literals, variables,
/// identifiers and `(`.
fn starts_operand(token: &Token) -> bool {
    match token.kind {
        TokenKind::Literal | TokenKind::Variable | TokenKind::Identifier => true,
        TokenKind::Operator => token.is_symbol('('),
        TokenKind::Comma => false,
    }
}
