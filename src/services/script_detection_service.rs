use once_cell::sync::Lazy;
use regex::Regex;

/// Accented Latin characters that are a strong French signal.
const FRENCH_DIACRITICS: &[char] = &[
    'é', 'è', 'ê', 'ë', 'à', 'â', 'ä', 'î', 'ï', 'ô', 'ö', 'ù', 'û', 'ü', 'ç', 'É', 'È', 'Ê', 'Ë',
    'À', 'Â', 'Ä', 'Î', 'Ï', 'Ô', 'Ö', 'Ù', 'Û', 'Ü', 'Ç',
];

/// High-frequency English stop and greeting words. A single exact token
/// match is treated as conclusive for short phrases.
const ENGLISH_KEYWORDS: &[&str] = &[
    "the",
    "and",
    "is",
    "are",
    "i",
    "you",
    "love",
    "how",
    "what",
    "do",
    "does",
    "doesn't",
    "don't",
    "learn",
    "learning",
    "programming",
    "hello",
    "hi",
    "thanks",
];

static LATIN_LETTERS_ONLY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z\s]+$").unwrap());

struct QuickRule {
    code: &'static str,
    matches: fn(&str) -> bool,
}

// Evaluated in order, first match wins. Arabic script outranks French
// diacritics, which outrank English keywords.
const QUICK_RULES: &[QuickRule] = &[
    QuickRule {
        code: "ar",
        matches: contains_arabic_script,
    },
    QuickRule {
        code: "fr",
        matches: contains_french_diacritic,
    },
    QuickRule {
        code: "en",
        matches: contains_english_keyword,
    },
];

/// Fast-path classification from unambiguous script and keyword signals.
/// Returns `None` when no rule fires and the statistical classifier
/// should decide.
pub fn quick_detect(text: &str) -> Option<&'static str> {
    QUICK_RULES
        .iter()
        .find(|rule| (rule.matches)(text))
        .map(|rule| rule.code)
}

/// Reduced script re-check used when the statistical classifier comes
/// back undetermined. Pure ASCII-letter text is assumed English here.
pub fn smart_detect(text: &str) -> &'static str {
    if contains_arabic_script(text) {
        "ar"
    } else if contains_french_diacritic(text) {
        "fr"
    } else if LATIN_LETTERS_ONLY.is_match(text) {
        "en"
    } else {
        "unknown"
    }
}

fn contains_arabic_script(text: &str) -> bool {
    text.chars().any(|c| ('\u{0600}'..='\u{06FF}').contains(&c))
}

fn contains_french_diacritic(text: &str) -> bool {
    text.chars().any(|c| FRENCH_DIACRITICS.contains(&c))
}

fn contains_english_keyword(text: &str) -> bool {
    text.split_whitespace().any(|token| {
        let word = token
            .chars()
            .filter(|c| c.is_alphabetic() || *c == '\'')
            .collect::<String>()
            .to_lowercase();

        ENGLISH_KEYWORDS.contains(&word.as_str())
    })
}
