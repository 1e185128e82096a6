//! Account name shape.
//!
//! An account name is a root followed by one or more components, joined by
//! `:` (`Assets:Brokerage`, `Assets:New-Brokerage`, `Liabilities:CC:2024`).
//! The root starts with an uppercase letter; a component starts with an
//! uppercase letter or a digit. Both continue with letters, digits or `-`.

/// Separator between account components.
pub const SEPARATOR: char = ':';

/// Check whether `name` has the shape of an account name.
///
/// This is a syntactic check only: it does not know whether the account
/// was ever opened.
///
/// # Examples
///
/// ```
/// use lotxfer_core::account::is_valid_account;
///
/// assert!(is_valid_account("Assets:New-Brokerage"));
/// assert!(!is_valid_account("Assets"));
/// assert!(!is_valid_account("0"));
/// ```
#[must_use]
pub fn is_valid_account(name: &str) -> bool {
    let mut parts = name.split(SEPARATOR);

    let Some(root) = parts.next() else {
        return false;
    };
    if !is_component(root, char::is_uppercase) {
        return false;
    }

    let mut has_component = false;
    for part in parts {
        if !is_component(part, |c| c.is_uppercase() || c.is_numeric()) {
            return false;
        }
        has_component = true;
    }
    has_component
}

fn is_component(part: &str, first: impl Fn(char) -> bool) -> bool {
    let mut chars = part.chars();
    match chars.next() {
        Some(c) if first(c) => chars.all(|c| c.is_alphanumeric() || c == '-'),
        _ => false,
    }
}
