/// Space separators plus tab, vertical tab, form feed, the line terminators
/// and the byte order mark. NEL (U+0085) is not included, unlike
/// [`char::is_whitespace`].
pub fn is_space(ch: char) -> bool {
    matches!(
        ch,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

pub fn trim_space(value: &str) -> &str {
    value.trim_matches(is_space)
}

#[cfg(test)]
mod tests {
    use super::{is_space, trim_space};

    #[test]
    fn space_set_includes_bom_and_excludes_nel() {
        assert!(is_space('\u{FEFF}'));
        assert!(is_space('\u{2007}'));
        assert!(is_space('\u{0B}'));
        assert!(!is_space('\u{85}'));
        assert!(!is_space('\u{200B}'));
    }

    #[test]
    fn trim_space_uses_same_set() {
        assert_eq!(trim_space("\u{FEFF} a \u{3000}"), "a");
        assert_eq!(trim_space("\u{85}a\u{85}"), "\u{85}a\u{85}");
    }
}
