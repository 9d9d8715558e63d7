//! Field-level text normalization: whitespace cleanup, regex picks and the
//! numeric, rating, price and date formats that show up on result cards.

use crate::error::{ExtractError, FieldResult};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

static NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+(?:[.,]\d+)?").expect("valid number regex"));
static STARS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d)[-\s]star").expect("valid stars regex"));
static PRICE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([^\d\s.,]*)\s*(\d[\d.,]*)\s*([^\d\s.,]*)").expect("valid price regex")
});

const DATE_FORMATS: &[&str] = &["%b %d, %Y", "%B %d, %Y", "%d %b %Y", "%d %B %Y", "%Y-%m-%d"];

/// Collapse whitespace runs to one space and drop non-breaking spaces,
/// including ones that survived as a literal `&nbsp;` entity.
pub fn clean_text(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// First regex match in `text`, or an empty string.
pub fn first_match(text: &str, re: &Regex) -> String {
    re.find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// First capture group of the first match, or an empty string.
pub fn first_capture(text: &str, re: &Regex) -> String {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Parse counts such as `"(1.8K)"`, `"423"` or `"2,310"`.
///
/// A trailing `K` multiplies by a thousand and `M` by a million, in either
/// case. Parenthesis wrappers are stripped first.
pub fn parse_scaled_number(text: &str) -> FieldResult<u64> {
    let trimmed = text
        .trim()
        .trim_start_matches('(')
        .trim_end_matches(')')
        .trim();

    let (digits, multiplier) = match trimmed.chars().last() {
        Some('k') | Some('K') => (&trimmed[..trimmed.len() - 1], 1_000.0),
        Some('m') | Some('M') => (&trimmed[..trimmed.len() - 1], 1_000_000.0),
        _ => (trimmed, 1.0),
    };

    let digits = digits.trim().replace(',', "");
    let scaled = digits
        .parse::<f64>()
        .map(|n| (n * multiplier).round())
        .map_err(|_| ExtractError::number(text))?;
    if !scaled.is_finite() || scaled < 0.0 || scaled > u64::MAX as f64 {
        return Err(ExtractError::number(text));
    }
    Ok(scaled as u64)
}

/// Keep only the digits of `text`: `"About 1,870,000 results"` -> 1870000.
pub fn parse_integer(text: &str) -> FieldResult<u64> {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().map_err(|_| ExtractError::number(text))
}

/// First decimal number in `text`, accepting `,` as decimal separator.
pub fn parse_decimal(text: &str) -> FieldResult<f64> {
    first_match(text, &NUMBER_RE)
        .replace(',', ".")
        .parse()
        .map_err(|_| ExtractError::number(text))
}

/// Rating out of five, e.g. `"4.3"` or `"Rated 4,5 out of 5"`.
pub fn parse_rating(text: &str) -> FieldResult<f64> {
    let rating = parse_decimal(text)?;
    if (0.0..=5.0).contains(&rating) {
        Ok(rating)
    } else {
        Err(ExtractError::number(text))
    }
}

/// Star class from a `"5-star hotel"` style label.
pub fn parse_stars(text: &str) -> FieldResult<u8> {
    first_capture(text, &STARS_RE)
        .parse()
        .map_err(|_| ExtractError::number(text))
}

/// Split a price label into currency and amount.
///
/// The currency may lead (`"$1,234"`) or trail (`"120 zł"`).
pub fn parse_price(text: &str) -> FieldResult<(String, f64)> {
    let text = clean_text(text);
    let caps = PRICE_RE
        .captures(&text)
        .ok_or_else(|| ExtractError::number(text.as_str()))?;

    let leading = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
    let trailing = caps.get(3).map(|m| m.as_str()).unwrap_or_default();
    let currency = if leading.is_empty() { trailing } else { leading };

    let amount = caps
        .get(2)
        .map(|m| m.as_str().replace(',', ""))
        .unwrap_or_default();
    let amount = amount
        .trim_end_matches('.')
        .parse::<f64>()
        .map_err(|_| ExtractError::number(text.as_str()))?;

    Ok((currency.to_string(), amount))
}

/// Calendar date in one of the formats result cards print.
pub fn parse_date(text: &str) -> FieldResult<NaiveDate> {
    let text = clean_text(text);
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(&text, fmt).ok())
        .ok_or_else(|| ExtractError::number(text.as_str()))
}
