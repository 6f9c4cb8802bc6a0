/// Formats a float as the shortest decimal text that round-trips.
///
/// No exponent notation is used. Negative zero prints as `0`, infinities as
/// `Inf`/`-Inf` and not-a-number as `NaN`.
///
/// ## Example
/// ```
/// use mathtex::util::format::format_float;
///
/// assert_eq!(format_float(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(format_float(15.0), "15");
/// assert_eq!(format_float(-0.0), "0");
/// assert_eq!(format_float(1e21), "1000000000000000000000");
/// ```
#[must_use]
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Inf" } else { "-Inf" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{value}")
}

/// Draws `source` with a caret under the byte offset `position`.
///
/// The block is framed by dashed rules as wide as the source:
///
/// ```text
/// ---
/// 1+@
///   ^
/// ---
/// ```
///
/// A position at or past the end of the source points just after its last
/// character.
#[must_use]
pub fn error_pointer(source: &str, position: usize) -> String {
    let width = source.chars().count();
    let column = source.get(..position)
                       .map_or(width, |prefix| prefix.chars().count());
    let rule = "-".repeat(width);

    format!("{rule}\n{source}\n{}^\n{rule}", " ".repeat(column))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_counts_characters_not_bytes() {
        assert_eq!(error_pointer("π+@", 3), "---\nπ+@\n  ^\n---");
    }

    #[test]
    fn pointer_past_end_points_after_source() {
        assert_eq!(error_pointer("1+", 2), "--\n1+\n  ^\n--");
    }

    #[test]
    fn special_values_have_stable_text() {
        assert_eq!(format_float(f64::INFINITY), "Inf");
        assert_eq!(format_float(f64::NEG_INFINITY), "-Inf");
        assert_eq!(format_float(f64::NAN), "NaN");
        assert_eq!(format_float(-2.5), "-2.5");
    }
}
