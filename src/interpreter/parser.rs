/// Parser entry points and the token cursor.
///
/// Contains [`core::parse`], which turns a token sequence into one
/// expression tree, and the shared `ParseResult` alias.
pub mod core;

/// Binary operator parsing.
///
/// Precedence climbing over the operator table, including implicit
/// multiplication between adjacent operands.
pub mod binary;

/// Unary and primary expression parsing.
///
/// Handles prefix signs, literals, variables, constants, function calls and
/// parenthesized groups.
pub mod unary;

/// Utility functions for the parser.
pub mod utils;
