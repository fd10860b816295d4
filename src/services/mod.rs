pub mod confidence_service;
pub mod language_detection_service;
pub mod normalizer_service;
pub mod script_detection_service;
pub mod statistical_detection_service;
