//! Shape checks for form field values.
//!
//! Both predicates are pure and total. Required-ness is enforced by the form
//! controller, not here, so the empty string simply fails the shape rules.

/// An address is one or more characters that are neither whitespace nor `@`,
/// then `@`, then a domain that contains an interior dot with at least one
/// such character on each side.
pub fn is_valid_email(text: &str) -> bool {
    if text.chars().any(char::is_whitespace) {
        return false;
    }
    let mut halves = text.split('@');
    let (local, domain) = match (halves.next(), halves.next(), halves.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return false,
    };
    if local.is_empty() {
        return false;
    }
    let chars: Vec<char> = domain.chars().collect();
    chars
        .iter()
        .enumerate()
        .any(|(index, c)| *c == '.' && index > 0 && index + 1 < chars.len())
}

/// Digits and hyphens only, at least one character.
pub fn is_valid_phone(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_digit() || c == '-')
}
