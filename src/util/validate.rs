//! Field format checks used by the validation pipeline.

use url::Url;

/// Checks that a string is a plausible email address.
///
/// Requires a non-empty local part and a domain containing a dot, without
/// reaching for a full RFC 5322 parser.
pub fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

/// Checks that a string is a plausible phone number.
///
/// Accepts digits plus common separators and requires at least seven digits.
pub fn is_valid_phone(value: &str) -> bool {
    let digits = value.chars().filter(char::is_ascii_digit).count();

    digits >= 7
        && value
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')' | '.'))
}

/// Checks that a string parses as an absolute http(s) URL.
pub fn is_valid_url(value: &str) -> bool {
    matches!(Url::parse(value), Ok(url) if url.scheme() == "http" || url.scheme() == "https")
}
