/// Text formatting helpers.
///
/// Renders floats as canonical decimal text and draws the caret pointer used
/// by syntax error diagnostics.
pub mod format;
