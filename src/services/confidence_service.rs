use std::collections::HashSet;

const RULE_CERTAINTY_BOOST: f64 = 0.12;

/// Confidence for results produced by the script/keyword rules or the
/// fallback re-check. Longer text scores higher, plus a fixed boost for
/// rule-based certainty. Computed on the trimmed input text.
pub fn heuristic_confidence(text: &str) -> f64 {
    let length = text.trim().chars().count() as f64;
    let length_score = (length / 100.0).max(0.45).min(0.98);

    round_to_2dp((length_score + RULE_CERTAINTY_BOOST).min(0.99))
}

/// Confidence for results produced by the statistical classifier. Blends
/// length adequacy and character diversity as weak proxies for
/// detectability. Computed on the normalized text.
pub fn statistical_confidence(text: &str, language: &str) -> f64 {
    let length = text.chars().count();

    if length < 5 {
        return 0.3;
    }
    if language == "unknown" {
        return 0.2;
    }

    let length_adequacy = (length as f64 / 50.0).min(1.0);
    let distinct_chars = text.chars().collect::<HashSet<char>>().len();
    let unique_char_ratio = distinct_chars as f64 / length as f64;
    let confidence = 0.5 + ((length_adequacy + unique_char_ratio) / 2.0) / 2.0;

    round_to_2dp(confidence.min(0.99))
}

pub fn round_to_2dp(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
