use serde::Deserialize;
use shared::PredictionSource;

#[derive(Debug, Clone, PartialEq)]
pub struct PredictionResult {
    pub class_id: String,
    /// Always within 0.0..=1.0.
    pub confidence: f64,
    pub class_idx: Option<usize>,
    pub source: PredictionSource,
}

impl PredictionResult {
    pub fn confidence_percent(&self) -> u8 {
        (self.confidence.clamp(0.0, 1.0) * 100.0).round() as u8
    }
}

/// Body returned by the plant disease model service.
#[derive(Debug, Deserialize)]
pub struct RemotePrediction {
    pub success: bool,
    #[serde(rename = "class")]
    pub class_id: Option<String>,
    pub confidence: Option<f64>,
    pub class_idx: Option<usize>,
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(confidence: f64) -> PredictionResult {
        PredictionResult {
            class_id: "Potato_healthy".to_string(),
            confidence,
            class_idx: None,
            source: PredictionSource::ExternalModel,
        }
    }

    #[test]
    fn percent_is_rounded_and_bounded() {
        assert_eq!(result(0.914).confidence_percent(), 91);
        assert_eq!(result(0.915).confidence_percent(), 92);
        assert_eq!(result(0.0).confidence_percent(), 0);
        assert_eq!(result(1.0).confidence_percent(), 100);
        assert_eq!(result(1.7).confidence_percent(), 100);
    }

    #[test]
    fn remote_body_uses_class_key() {
        let body: RemotePrediction = serde_json::from_str(
            r#"{"success": true, "class": "Tomato_Late_blight", "confidence": 0.91, "class_idx": 30}"#,
        )
        .expect("decode");
        assert!(body.success);
        assert_eq!(body.class_id.as_deref(), Some("Tomato_Late_blight"));
        assert_eq!(body.class_idx, Some(30));
        assert!(body.error.is_none());
    }
}
