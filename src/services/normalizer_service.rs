use once_cell::sync::Lazy;
use regex::Regex;

static EMOJI: Lazy<Regex> = Lazy::new(|| {
    // Pictographs, dingbats, transport symbols, flags, variation selectors
    // and the zero-width joiner used in emoji sequences.
    Regex::new(r"[\u{1F000}-\u{1FAFF}\u{2600}-\u{27BF}\u{2B00}-\u{2BFF}\u{FE00}-\u{FE0F}\u{200D}]")
        .unwrap()
});

static DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d").unwrap());

// The straight apostrophe is deliberately kept so contractions like
// "don't" survive for keyword matching.
static PUNCTUATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"[.,!?;:"()\[\]{}<>/\\|@#$%^&*_+=~`«»“”‘’—–-]"#).unwrap()
});

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Strip emoji, digits and punctuation, collapse whitespace runs to a
/// single space, lowercase and trim. The result may be empty; callers
/// must check the length before classifying.
pub fn normalize(text: &str) -> String {
    let without_emoji = EMOJI.replace_all(text, "");
    let without_digits = DIGITS.replace_all(&without_emoji, "");
    let without_punctuation = PUNCTUATION.replace_all(&without_digits, "");
    let collapsed = WHITESPACE.replace_all(&without_punctuation, " ");

    collapsed.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::normalize;

    #[test]
    fn lowercases_and_trims() {
        assert_eq!(normalize("  Hello World  "), "hello world");
    }

    #[test]
    fn removes_punctuation_and_digits() {
        assert_eq!(normalize("Hello, how are you? 123"), "hello how are you");
    }

    #[test]
    fn removes_curly_quotes_and_em_dash() {
        assert_eq!(normalize("“quoted” — text"), "quoted text");
    }

    #[test]
    fn removes_emoji() {
        assert_eq!(normalize("hello 👋🌍 world"), "hello world");
    }

    #[test]
    fn keeps_apostrophes_for_contractions() {
        assert_eq!(normalize("I don't know"), "i don't know");
    }

    #[test]
    fn collapses_whitespace_runs() {
        assert_eq!(normalize("a\t\tb\n\nc   d"), "a b c d");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("123 !!!"), "");
    }

    #[test]
    fn keeps_arabic_script() {
        assert_eq!(normalize("مرحبا بكم"), "مرحبا بكم");
    }
}
