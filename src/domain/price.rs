use once_cell::sync::Lazy;
use regex::Regex;

pub const PRICE_NOT_FOUND: &str = "Price not found";

// Alternation order decides ties at the same offset
static PRICE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$\d+\.\d+|£\d+|\d+\.\d+\s(?:USD|EUR)").expect("price pattern is valid")
});

/// First price-looking substring of `text`, or the sentinel when there is none
pub fn extract_price(text: &str) -> String {
    PRICE_REGEX
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| PRICE_NOT_FOUND.to_string())
}
