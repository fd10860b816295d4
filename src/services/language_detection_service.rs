use std::sync::Arc;

use log::{debug, warn};
use thiserror::Error;

use crate::models::detection::{BatchEntry, DetectionResult};
use crate::services::confidence_service;
use crate::services::normalizer_service;
use crate::services::script_detection_service;
use crate::services::statistical_detection_service::{
    self, TrigramClassifier, WhatlangClassifier, UNKNOWN,
};

const MIN_TRIMMED_CHARS: usize = 3;
const MIN_NORMALIZED_CHARS: usize = 2;

// The trigram classifier mistakes short Latin-script English for Urdu,
// so an "ur" answer triggers the same script re-check as "unknown".
// Kept as a named exception, not generalized to other codes.
const URDU_OVERRIDE_CODE: &str = "ur";

#[derive(Debug, Error)]
pub enum DetectionError {
    #[error("{0}")]
    Validation(String),
    #[error("language detection failed")]
    Internal(#[from] anyhow::Error),
}

pub struct LanguageDetectionService {
    classifier: Arc<dyn TrigramClassifier>,
}

impl LanguageDetectionService {
    pub fn new(classifier: Arc<dyn TrigramClassifier>) -> LanguageDetectionService {
        LanguageDetectionService { classifier }
    }

    pub fn with_default_classifier() -> LanguageDetectionService {
        LanguageDetectionService::new(Arc::new(WhatlangClassifier))
    }

    /// Run the full detection pipeline on one text: validate, normalize,
    /// try the fast-path rules, fall back to the statistical classifier
    /// and re-check scripts when it comes back uncertain.
    pub fn detect(&self, text: &str) -> Result<DetectionResult, DetectionError> {
        let trimmed = text.trim();

        if trimmed.is_empty() {
            return Err(DetectionError::Validation("Text is required".to_string()));
        }
        if trimmed.chars().count() < MIN_TRIMMED_CHARS {
            return Ok(DetectionResult::unknown());
        }

        let normalized = normalizer_service::normalize(text);
        if normalized.chars().count() < MIN_NORMALIZED_CHARS {
            return Ok(DetectionResult::unknown());
        }

        if let Some(code) = script_detection_service::quick_detect(&normalized) {
            debug!("Fast path matched {} for text of length {}", code, trimmed.len());

            return Ok(DetectionResult {
                language: code.to_string(),
                confidence: confidence_service::heuristic_confidence(trimmed),
            });
        }

        let detection =
            statistical_detection_service::statistical_detect(self.classifier.as_ref(), &normalized);

        if detection.language == UNKNOWN || detection.language == URDU_OVERRIDE_CODE {
            let fallback_code = script_detection_service::smart_detect(&normalized);
            if fallback_code != UNKNOWN {
                debug!(
                    "Fallback re-check overrode {} with {}",
                    detection.raw_code, fallback_code
                );

                return Ok(DetectionResult {
                    language: fallback_code.to_string(),
                    confidence: confidence_service::heuristic_confidence(trimmed),
                });
            }
        }

        let confidence =
            confidence_service::statistical_confidence(&normalized, &detection.language);

        Ok(DetectionResult {
            language: detection.language,
            confidence,
        })
    }

    /// Detect each text independently, in order. A bad element degrades
    /// to an error marker or an unknown result; it never aborts the batch.
    pub fn detect_batch(&self, texts: &[String]) -> Vec<BatchEntry> {
        texts
            .iter()
            .map(|text| {
                if text.trim().is_empty() {
                    return BatchEntry::Failed {
                        text: text.clone(),
                        error: "Empty text provided".to_string(),
                    };
                }

                match self.detect(text) {
                    Ok(result) => BatchEntry::Detected {
                        text: text.clone(),
                        language: result.language,
                        confidence: result.confidence,
                    },
                    Err(err) => {
                        warn!("Batch element degraded to unknown: {}", err);

                        BatchEntry::Detected {
                            text: text.clone(),
                            language: UNKNOWN.to_string(),
                            confidence: 0.0,
                        }
                    }
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::{DetectionError, LanguageDetectionService};
    use crate::models::detection::BatchEntry;
    use crate::services::statistical_detection_service::TrigramClassifier;

    struct FixedClassifier(&'static str);

    impl TrigramClassifier for FixedClassifier {
        fn classify(&self, _text: &str) -> String {
            self.0.to_string()
        }
    }

    fn service_with(code: &'static str) -> LanguageDetectionService {
        LanguageDetectionService::new(Arc::new(FixedClassifier(code)))
    }

    fn default_service() -> LanguageDetectionService {
        LanguageDetectionService::with_default_classifier()
    }

    #[test]
    fn empty_text_is_a_validation_error() {
        for text in ["", "   ", "\t\n"] {
            let err = default_service().detect(text).unwrap_err();
            assert!(matches!(err, DetectionError::Validation(_)));
        }
    }

    #[test]
    fn short_text_is_unknown_with_zero_confidence() {
        let result = default_service().detect("ab").unwrap();
        assert_eq!(result.language, "unknown");
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn text_that_normalizes_away_is_unknown() {
        // Digits are stripped, leaving nothing to classify.
        let result = default_service().detect("12345").unwrap();
        assert_eq!(result.language, "unknown");
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn english_greeting_takes_the_fast_path() {
        let result = default_service().detect("Hello, how are you?").unwrap();
        assert_eq!(result.language, "en");
        assert_eq!(result.confidence, 0.57);
    }

    #[test]
    fn arabic_script_takes_the_fast_path() {
        let result = default_service().detect("مرحبا بكم").unwrap();
        assert_eq!(result.language, "ar");
        assert!(result.confidence >= 0.45 && result.confidence <= 0.99);
    }

    #[test]
    fn french_diacritics_take_the_fast_path() {
        let result = default_service().detect("je suis très fatigué").unwrap();
        assert_eq!(result.language, "fr");
    }

    #[test]
    fn statistical_result_is_mapped_to_two_letters() {
        let result = service_with("spa")
            .detect("esto parece un texto bastante normal")
            .unwrap();
        assert_eq!(result.language, "es");
        assert!(result.confidence > 0.2);
    }

    #[test]
    fn unmapped_statistical_code_passes_through() {
        let result = service_with("xyz")
            .detect("qwrt zpfl mnbv qwrt zpfl")
            .unwrap();
        assert_eq!(result.language, "xyz");
    }

    #[test]
    fn undetermined_latin_text_falls_back_to_english() {
        let result = service_with("und").detect("zzzz qqqq vvvv").unwrap();
        assert_eq!(result.language, "en");
        // Fallback hits use the heuristic formula.
        assert_eq!(result.confidence, 0.57);
    }

    #[test]
    fn urdu_answer_on_latin_text_is_overridden() {
        let result = service_with("urd").detect("zzzz qqqq vvvv").unwrap();
        assert_eq!(result.language, "en");
    }

    #[test]
    fn urdu_answer_on_unmatched_script_survives() {
        let result = service_with("urd").detect("κείμενο εδώ τώρα").unwrap();
        assert_eq!(result.language, "ur");
    }

    #[test]
    fn undetermined_unmatched_script_stays_unknown() {
        let result = service_with("und").detect("κείμενο εδώ τώρα").unwrap();
        assert_eq!(result.language, "unknown");
        assert_eq!(result.confidence, 0.2);
    }

    #[test]
    fn detect_is_deterministic() {
        let service = default_service();
        let first = service.detect("Hello, how are you?").unwrap();
        let second = service.detect("Hello, how are you?").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn batch_preserves_order_and_length() {
        let texts = vec![
            "Hello world".to_string(),
            "".to_string(),
            "مرحبا بكم".to_string(),
        ];
        let results = default_service().detect_batch(&texts);

        assert_eq!(results.len(), texts.len());
        assert!(matches!(
            &results[0],
            BatchEntry::Detected { language, .. } if language == "en"
        ));
        assert!(matches!(
            &results[1],
            BatchEntry::Failed { error, .. } if error == "Empty text provided"
        ));
        assert!(matches!(
            &results[2],
            BatchEntry::Detected { language, .. } if language == "ar"
        ));
    }

    #[test]
    fn batch_entries_match_single_detection() {
        let service = default_service();
        let texts = vec!["Hello world".to_string(), "je suis très fatigué".to_string()];
        let results = service.detect_batch(&texts);

        for (text, entry) in texts.iter().zip(results) {
            let single = service.detect(text).unwrap();
            match entry {
                BatchEntry::Detected {
                    language,
                    confidence,
                    ..
                } => {
                    assert_eq!(language, single.language);
                    assert_eq!(confidence, single.confidence);
                }
                BatchEntry::Failed { .. } => panic!("unexpected batch failure"),
            }
        }
    }

    #[test]
    fn empty_batch_yields_empty_results() {
        assert!(default_service().detect_batch(&[]).is_empty());
    }
}
