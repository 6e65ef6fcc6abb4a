//! Display formatting for rates and scores

/// Rate with a dollar sign and exactly two fraction digits
///
/// ```
/// use quotecheck_frontend::shared::number_format::format_rate;
/// assert_eq!(format_rate(42.5), "$42.50");
/// ```
pub fn format_rate(value: f64) -> String {
    format!("${:.2}", value)
}

/// Similarity score exactly as the matcher sent it
pub fn format_score(value: f64) -> String {
    format!("{}", value)
}
