/// The evaluator module computes the value of an expression tree.
///
/// The evaluator walks the tree against a binding context, applies operator
/// rules and dispatches calls to registered functions.
///
/// # Responsibilities
/// - Evaluates every node variant, reading variables from the context.
/// - Hands unevaluated argument nodes to functions, which may bind transient
///   names such as the summation index.
/// - Reports runtime errors such as division by zero or a bad `sum` bound.
pub mod evaluator;
/// The lexer module tokenizes source text for further parsing.
///
/// The lexer reads the raw source text and produces a list of tokens, each
/// carrying its text, its kind and its byte offset in the source. This is the
/// first stage of interpretation.
///
/// # Responsibilities
/// - Recognizes operators, parentheses, literals, identifiers, variables and
///   commas; skips whitespace.
/// - Reports the first character that cannot start a token.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser consumes the tokens produced by the lexer and constructs an
/// expression tree by precedence climbing, inserting implicit
/// multiplications between adjacent operands.
///
/// # Responsibilities
/// - Converts tokens into `Expr` nodes honoring precedence and associativity.
/// - Resolves function and constant names against the registries.
/// - Reports syntax, name and arity errors with the offending position.
pub mod parser;
/// Process-wide tables consulted by every phase.
///
/// Holds the fixed operator table, the grow-only function and constant
/// registries, and the angle mode used by trigonometric functions.
pub mod registry;
/// Typesets expression trees as LaTeX.
pub mod renderer;
