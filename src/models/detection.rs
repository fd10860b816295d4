use serde::Serialize;

/// Outcome of one detection run. `language` is either a two-letter ISO
/// 639-1 code, an unmapped three-letter passthrough, or "unknown".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetectionResult {
    pub language: String,
    pub confidence: f64,
}

impl DetectionResult {
    pub fn unknown() -> DetectionResult {
        DetectionResult {
            language: "unknown".to_string(),
            confidence: 0.0,
        }
    }
}

/// One slot of a batch response. Failures are per-element markers, never
/// batch-level errors.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum BatchEntry {
    Detected {
        text: String,
        language: String,
        confidence: f64,
    },
    Failed {
        text: String,
        error: String,
    },
}

#[derive(Debug, Serialize)]
pub struct DetectResponse {
    pub language: String,
    pub confidence: f64,
    #[serde(rename = "detectedText")]
    pub detected_text: String,
}

#[derive(Debug, Serialize)]
pub struct DetectBatchResponse {
    pub results: Vec<BatchEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LanguageEntry {
    pub code: &'static str,
    pub name: &'static str,
}

/// Languages advertised via the API. Independent of what the classifiers
/// can actually detect.
pub const SUPPORTED_LANGUAGES: &[LanguageEntry] = &[
    LanguageEntry {
        code: "en",
        name: "English",
    },
    LanguageEntry {
        code: "ar",
        name: "Arabic",
    },
    LanguageEntry {
        code: "fr",
        name: "French",
    },
    LanguageEntry {
        code: "es",
        name: "Spanish",
    },
    LanguageEntry {
        code: "de",
        name: "German",
    },
];
