use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// How operators of equal precedence group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// `a - b - c` is `(a - b) - c`.
    Left,
    /// `a ^ b ^ c` is `a ^ (b ^ c)`.
    Right,
}

/// Numeric rule of an operator.
type OperatorFn = fn(f64, f64) -> EvalResult<f64>;
/// Typeset rule of an operator, applied to already rendered operands.
type OperatorRenderFn = fn(&str, &str) -> String;

/// A binary operator of the language.
#[derive(Debug, Clone, Copy)]
pub struct OperatorDef {
    /// The single-character symbol.
    pub symbol:        char,
    /// Binding strength; higher binds tighter.
    pub precedence:    u8,
    /// Grouping of a chain of equal-precedence operators.
    pub associativity: Associativity,
    /// Whether the typeset form already delimits both operands (as
    /// `\frac{..}{..}` does), so operands never need parentheses.
    pub delimits:      bool,
    evaluate:          OperatorFn,
    render:            OperatorRenderFn,
}

impl OperatorDef {
    /// Applies the operator's numeric rule.
    ///
    /// # Errors
    /// Returns the operator's arithmetic failure, e.g. division by zero.
    pub fn apply(&self, left: f64, right: f64) -> EvalResult<f64> {
        (self.evaluate)(left, right)
    }

    /// Combines two rendered operands into the operator's typeset form.
    #[must_use]
    pub fn render(&self, left: &str, right: &str) -> String {
        (self.render)(left, right)
    }
}

/// Defines the operator table.
///
/// Each entry provides the symbol, precedence, associativity, the numeric
/// rule and the typeset rule. The macro produces `OPERATOR_TABLE` and
/// `OPERATOR_SYMBOLS`.
macro_rules! operator_table {
    (
        $(
            $symbol:literal => {
                precedence: $precedence:expr,
                associativity: $associativity:expr,
                delimits: $delimits:expr,
                eval: $eval:expr,
                render: $render:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static OPERATOR_TABLE: &[OperatorDef] = &[
            $(
                OperatorDef { symbol:        $symbol,
                              precedence:    $precedence,
                              associativity: $associativity,
                              delimits:      $delimits,
                              evaluate:      $eval,
                              render:        $render, },
            )*
        ];
        /// Every symbol of the operator table.
        pub const OPERATOR_SYMBOLS: &[char] = &[
            $($symbol,)*
        ];
    };
}

operator_table! {
    '+' => {
        precedence: 20, associativity: Associativity::Left, delimits: false,
        eval: |l, r| Ok(l + r),
        render: |l, r| format!("{l} + {r}"),
    },
    '-' => {
        precedence: 20, associativity: Associativity::Left, delimits: false,
        eval: |l, r| Ok(l - r),
        render: render_subtraction,
    },
    '*' => {
        precedence: 40, associativity: Associativity::Left, delimits: false,
        eval: |l, r| Ok(l * r),
        render: |l, r| format!("{l} \\cdot {r}"),
    },
    '/' => {
        precedence: 40, associativity: Associativity::Left, delimits: true,
        eval: divide,
        render: |l, r| format!("\\frac{{{l}}}{{{r}}}"),
    },
    '%' => {
        precedence: 40, associativity: Associativity::Left, delimits: false,
        eval: remainder,
        render: |l, r| format!("{l} \\bmod {r}"),
    },
    '^' => {
        precedence: 60, associativity: Associativity::Right, delimits: false,
        eval: |l, r| Ok(l.powf(r)),
        render: |l, r| format!("{{{l}}}^{{{r}}}"),
    },
}

/// Symbol of the operator inserted by implicit multiplication.
pub const MULTIPLICATION: char = '*';

/// Looks up an operator by symbol.
///
/// ## Example
/// ```
/// use mathtex::interpreter::registry::operator::{Associativity, lookup_operator};
///
/// let pow = lookup_operator('^').unwrap();
/// assert_eq!(pow.associativity, Associativity::Right);
/// assert!(lookup_operator('@').is_none());
/// ```
#[must_use]
pub fn lookup_operator(symbol: char) -> Option<&'static OperatorDef> {
    OPERATOR_TABLE.iter().find(|op| op.symbol == symbol)
}

fn divide(left: f64, right: f64) -> EvalResult<f64> {
    if right == 0.0 {
        return Err(RuntimeError::DivisionByZero { dividend: left });
    }
    Ok(left / right)
}

fn remainder(left: f64, right: f64) -> EvalResult<f64> {
    if right == 0.0 {
        return Err(RuntimeError::ModuloByZero { dividend: left });
    }
    Ok(left % right)
}

// A text-less left operand is the synthetic zero of a unary minus.
fn render_subtraction(left: &str, right: &str) -> String {
    if left.is_empty() {
        format!("-{right}")
    } else {
        format!("{left} - {right}")
    }
}
