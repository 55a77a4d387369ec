use crate::domain::text::is_space;

/// Strips whitespace, hyphens, `+` and parentheses. Everything else is kept,
/// so the result is only digits-only when the input was well formed.
pub fn normalize_phone(value: &str) -> String {
    value
        .chars()
        .filter(|&ch| !is_space(ch) && !matches!(ch, '-' | '+' | '(' | ')'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::normalize_phone;

    #[test]
    fn normalize_phone_strips_formatting() {
        assert_eq!(normalize_phone("+1 (212) 555-1234"), "12125551234");
    }

    #[test]
    fn normalize_phone_keeps_other_characters() {
        assert_eq!(normalize_phone(" 555-12x4 "), "55512x4");
    }

    #[test]
    fn normalize_phone_handles_tabs_and_repeated_hyphens() {
        assert_eq!(normalize_phone("\t++7--(999)\n123"), "7999123");
    }

    #[test]
    fn normalize_phone_strips_bom_and_keeps_nel() {
        assert_eq!(normalize_phone("\u{FEFF}555\u{85}123"), "555\u{85}123");
    }

    #[test]
    fn normalize_phone_empty() {
        assert_eq!(normalize_phone(""), "");
    }
}
