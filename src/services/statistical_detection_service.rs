use crate::utils::code_map;

pub const UNDETERMINED: &str = "und";
pub const UNKNOWN: &str = "unknown";

/// Trigram-frequency language guesser. Injectable so tests can swap the
/// real corpus-backed classifier for a canned one.
pub trait TrigramClassifier: Send + Sync {
    /// Best-guess ISO 639-3 code for the text, or "und" when undetermined.
    fn classify(&self, text: &str) -> String;
}

pub struct WhatlangClassifier;

impl TrigramClassifier for WhatlangClassifier {
    fn classify(&self, text: &str) -> String {
        match whatlang::detect(text) {
            Some(info) => info.lang().code().to_string(),
            None => UNDETERMINED.to_string(),
        }
    }
}

pub struct StatisticalDetection {
    /// The classifier's ISO 639-3 answer, or "und".
    pub raw_code: String,
    /// Two-letter code where a mapping exists, otherwise the raw code
    /// passed through; "und" becomes "unknown".
    pub language: String,
}

pub fn statistical_detect(classifier: &dyn TrigramClassifier, text: &str) -> StatisticalDetection {
    let raw_code = classifier.classify(text);

    let language = if raw_code == UNDETERMINED {
        UNKNOWN.to_string()
    } else {
        code_map::to_iso_639_1(&raw_code)
            .map(str::to_string)
            .unwrap_or_else(|| raw_code.clone())
    };

    StatisticalDetection { raw_code, language }
}
