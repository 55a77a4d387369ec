use crate::domain::text::trim_space;

/// Trims surrounding whitespace and lower-cases the address.
pub fn normalize_email(value: &str) -> String {
    trim_space(value).to_lowercase()
}
