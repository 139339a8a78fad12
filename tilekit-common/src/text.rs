/// Transliterates German umlauts and sharp s into their ASCII spelling.
///
/// Capital umlauts become title case (`Ü` -> `Ue`) when followed by a lowercase
/// letter or a space, and upper case (`Ü` -> `UE`) otherwise, so that
/// `"ÜBER"` and `"Über"` both read naturally.
pub fn normalize(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len() + 8);
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            'ü' => normalized.push_str("ue"),
            'ö' => normalized.push_str("oe"),
            'ä' => normalized.push_str("ae"),
            'ß' => normalized.push_str("ss"),
            'Ü' | 'Ö' | 'Ä' => {
                let base = match c {
                    'Ü' => 'U',
                    'Ö' => 'O',
                    _ => 'A',
                };
                normalized.push(base);
                if chars.peek().copied().is_some_and(continues_lowercase) {
                    normalized.push('e');
                } else {
                    normalized.push('E');
                }
            }
            _ => normalized.push(c),
        }
    }
    normalized
}

fn continues_lowercase(c: char) -> bool {
    c.is_ascii_lowercase() || matches!(c, ' ' | 'ü' | 'ö' | 'ä' | 'ß')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_umlauts() {
        assert_eq!(normalize("Grüße"), "Gruesse");
        assert_eq!(normalize("schön"), "schoen");
        assert_eq!(normalize("Bär"), "Baer");
    }

    #[test]
    fn test_capital_umlauts() {
        assert_eq!(normalize("Über"), "Ueber");
        assert_eq!(normalize("ÜBER"), "UEBER");
        assert_eq!(normalize("Ö l"), "Oe l");
        assert_eq!(normalize("Äü"), "Aeue");
        assert_eq!(normalize("Ä"), "AE");
        assert_eq!(normalize("ÄÖÜ"), "AEOEUE");
    }

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(normalize("Zurich 42"), "Zurich 42");
        assert_eq!(normalize(""), "");
    }
}
