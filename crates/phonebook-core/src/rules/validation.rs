use crate::domain::text::trim_space;
use once_cell::sync::Lazy;
use regex::Regex;

// Characters never allowed in an unquoted local part or a domain label. The
// whitespace listed here is the set accepted by `is_space`.
const ATOM_EXCLUDED: &str = concat!(
    r#"<>()\[\].,;:@""#,
    r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}",
);

// Local part is either dot-separated atoms or a quoted string; the domain
// needs at least one dot and a final label at least two UTF-16 units long,
// which a single supplementary-plane character satisfies.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    let atom = format!("[^{ATOM_EXCLUDED}]");
    let pattern = format!(
        r#"(?i)^(({atom}+(\.{atom}+)*)|("[^\n\r\x{{2028}}\x{{2029}}]+"))@(({atom}+\.)+({atom}{{2,}}|[\x{{10000}}-\x{{10FFFF}}]))$"#
    );
    Regex::new(&pattern).expect("valid email regex")
});

static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?[0-9]*?[- ]?(\([0-9]{3}\)|[0-9]{3})[- ]?[0-9]{3}[- ]?[0-9]?[- ]?[0-9]{3}$")
        .expect("valid phone regex")
});

/// Surrounding whitespace is ignored; it is removed by normalization anyway.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(trim_space(value))
}

pub fn is_valid_phone(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::{is_valid_email, is_valid_phone};

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("ann@example.com"));
        assert!(is_valid_email("First.Last@Mail.Example.ORG"));
        assert!(is_valid_email(" Ann@Example.com "));
        assert!(is_valid_email("a+b@x.co"));
    }

    #[test]
    fn accepts_quoted_local_part() {
        assert!(is_valid_email("\"john doe\"@example.com"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("ann"));
        assert!(!is_valid_email("ann@example"));
        assert!(!is_valid_email("ann@example.c"));
        assert!(!is_valid_email("a nn@example.com"));
        assert!(!is_valid_email("a..b@example.com"));
        assert!(!is_valid_email("<ann>@example.com"));
        assert!(!is_valid_email("ann@exa[mple.com"));
        assert!(!is_valid_email("ann@@example.com"));
        assert!(!is_valid_email("\"a\nb\"@example.com"));
    }

    #[test]
    fn email_whitespace_set_matches_trim() {
        assert!(!is_valid_email("a\u{FEFF}b@x.com"));
        assert!(!is_valid_email("a\u{3000}b@x.com"));
        assert!(is_valid_email("a\u{85}b@x.com"));
        assert!(is_valid_email("a\u{200B}b@x.com"));
        assert!(is_valid_email("\u{FEFF}ann@example.com\u{FEFF}"));
    }

    #[test]
    fn email_top_level_label_counts_utf16_units() {
        assert!(is_valid_email("a@b.😀"));
        assert!(is_valid_email("a@b.😀😀"));
        assert!(is_valid_email("a@b.é1"));
        assert!(!is_valid_email("a@b.é"));
        assert!(!is_valid_email("a@b.😀."));
    }

    #[test]
    fn accepts_phone_shapes() {
        assert!(is_valid_phone("+12125551234"));
        assert!(is_valid_phone("+1 (212) 555-1234"));
        assert!(is_valid_phone("555-123-4567"));
        assert!(is_valid_phone("5551234567"));
        assert!(is_valid_phone("555 123 567"));
        assert!(is_valid_phone("(212) 555 1234"));
        assert!(is_valid_phone("+7 999 123-4567"));
    }

    #[test]
    fn rejects_other_phone_shapes() {
        assert!(!is_valid_phone(""));
        assert!(!is_valid_phone("12345"));
        assert!(!is_valid_phone("bad"));
        assert!(!is_valid_phone("+7 (999) 123-45-67"));
        assert!(!is_valid_phone(" 555-123-4567"));
        assert!(!is_valid_phone("555-123-4567 "));
        assert!(!is_valid_phone("(212 555 1234"));
        assert!(!is_valid_phone("٥٥٥١٢٣٤٥٦٧"));
    }
}
