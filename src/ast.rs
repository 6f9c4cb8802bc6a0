/// An abstract syntax tree (AST) node representing an expression.
///
/// `Expr` is a closed set of variants: literals, registry constants,
/// variables, binary operator applications and function calls. Every
/// `Operator` and `Call` node owns its children exclusively, so a tree is
/// always acyclic and can be dropped or cloned as a unit.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Number {
        /// The parsed value.
        value: f64,
        /// Source text of the literal (digit separators removed), kept for
        /// exact re-rendering. Empty for the synthetic zero of a negation.
        text:  String,
    },
    /// A constant resolved from the constant registry at parse time.
    Constant {
        /// Registered name of the constant, e.g. `pi`.
        name:  String,
        /// Value of the constant at the time it was resolved.
        value: f64,
    },
    /// Reference to a variable of the binding context.
    Variable {
        /// Name looked up in the [`Context`](crate::interpreter::evaluator::core::Context).
        name: String,
    },
    /// Application of a binary operator from the operator table.
    Operator {
        /// Operator symbol, e.g. `+`.
        symbol: char,
        /// Left operand.
        left:   Box<Self>,
        /// Right operand.
        right:  Box<Self>,
    },
    /// Function call expression (e.g. `sin($x)`).
    Call {
        /// Name of the function being called.
        name: String,
        /// Unevaluated arguments, in source order.
        args: Vec<Self>,
    },
}

impl Expr {
    /// Builds a literal node from its value and source text.
    pub fn number(value: f64, text: impl Into<String>) -> Self {
        Self::Number { value,
                       text: text.into() }
    }

    /// Builds a variable node.
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable { name: name.into() }
    }

    /// Builds a binary operator node.
    #[must_use]
    pub fn operator(symbol: char, left: Self, right: Self) -> Self {
        Self::Operator { symbol,
                         left: Box::new(left),
                         right: Box::new(right) }
    }

    /// Builds a function call node.
    pub fn call(name: impl Into<String>, args: Vec<Self>) -> Self {
        Self::Call { name: name.into(),
                     args }
    }

    /// Expresses unary minus as `0 - operand`.
    ///
    /// The zero carries no source text, which lets the renderer print the
    /// negation as `-operand`.
    #[must_use]
    pub fn negation(operand: Self) -> Self {
        Self::operator('-', Self::number(0.0, String::new()), operand)
    }

    /// Returns the height of the tree, counting a leaf as depth 1.
    ///
    /// Evaluation recurses once per level, so callers accepting untrusted
    /// input can reject overly deep trees before evaluating them.
    ///
    /// ## Example
    /// ```
    /// use mathtex::ast::Expr;
    ///
    /// let leaf = Expr::number(1.0, "1");
    /// assert_eq!(leaf.depth(), 1);
    ///
    /// let sum = Expr::operator('+', leaf.clone(), Expr::negation(leaf));
    /// assert_eq!(sum.depth(), 3);
    /// ```
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Number { .. } | Self::Constant { .. } | Self::Variable { .. } => 1,
            Self::Operator { left, right, .. } => 1 + left.depth().max(right.depth()),
            Self::Call { args, .. } => 1 + args.iter().map(Self::depth).max().unwrap_or(0),
        }
    }
}
