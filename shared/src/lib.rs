use serde::{Deserialize, Deserializer, Serialize};
use strum_macros::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
pub enum Severity {
    None,
    Low,
    Medium,
    High,
    #[serde(rename = "Very High")]
    #[strum(serialize = "Very High")]
    VeryHigh,
}

/// Which path produced a prediction. The fallback is synthetic and must be
/// shown as such.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "kebab-case")]
pub enum PredictionSource {
    #[strum(serialize = "external-model")]
    ExternalModel,
    #[strum(serialize = "fallback-simulation")]
    FallbackSimulation,
}

impl PredictionSource {
    pub fn model_used(&self) -> &'static str {
        match self {
            PredictionSource::ExternalModel => "CNN",
            PredictionSource::FallbackSimulation => "enhanced_simulation",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiseaseDetails {
    pub disease: String,
    pub confidence: u8,
    pub description: String,
    pub treatment: String,
    pub severity: Severity,
    pub prevention: String,
    pub class_idx: Option<usize>,
    pub original_class: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResponse {
    pub success: bool,
    pub prediction: DiseaseDetails,
    pub image_url: String,
    pub timestamp: String,
    pub model_used: String,
    pub source: PredictionSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiseaseSummary {
    pub id: String,
    pub name: String,
    pub severity: Severity,
}

// Form posts frequently send numbers as strings.
fn deserialize_lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(f64),
        Text(String),
    }

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(value) => Ok(value),
        NumberOrString::Text(text) => text.trim().parse().map_err(|_| {
            serde::de::Error::custom(format!("Invalid number: {}", text))
        }),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropRecommendationRequest {
    #[serde(rename = "N", deserialize_with = "deserialize_lenient_f64")]
    pub n: f64,
    #[serde(rename = "P", deserialize_with = "deserialize_lenient_f64")]
    pub p: f64,
    #[serde(rename = "K", deserialize_with = "deserialize_lenient_f64")]
    pub k: f64,
    #[serde(deserialize_with = "deserialize_lenient_f64")]
    pub temperature: f64,
    #[serde(deserialize_with = "deserialize_lenient_f64")]
    pub humidity: f64,
    #[serde(deserialize_with = "deserialize_lenient_f64")]
    pub ph: f64,
    #[serde(deserialize_with = "deserialize_lenient_f64")]
    pub rainfall: f64,
    pub ph_category: String,
    pub rainfall_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropRecommendationResponse {
    pub success: bool,
    pub prediction: String,
    pub confidence: u8,
    pub model_used: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn severity_uses_display_names() {
        assert_eq!(Severity::VeryHigh.to_string(), "Very High");
        assert_eq!(Severity::from_str("Very High").unwrap(), Severity::VeryHigh);
        assert_eq!(
            serde_json::to_string(&Severity::VeryHigh).unwrap(),
            "\"Very High\""
        );
        assert_eq!(serde_json::to_string(&Severity::None).unwrap(), "\"None\"");
    }

    #[test]
    fn prediction_source_tags() {
        assert_eq!(
            serde_json::to_string(&PredictionSource::FallbackSimulation).unwrap(),
            "\"fallback-simulation\""
        );
        assert_eq!(PredictionSource::ExternalModel.to_string(), "external-model");
        assert_eq!(PredictionSource::ExternalModel.model_used(), "CNN");
    }

    #[test]
    fn crop_request_accepts_numeric_strings() {
        let request: CropRecommendationRequest = serde_json::from_str(
            r#"{"N": "90", "P": 42, "K": 43.5, "temperature": "20.8", "humidity": 82,
                "ph": "6.5", "rainfall": 202.9, "ph_category": "Acidic", "rainfall_level": "High"}"#,
        )
        .expect("decode");
        assert_eq!(request.n, 90.0);
        assert_eq!(request.p, 42.0);
        assert_eq!(request.ph, 6.5);

        let bad = serde_json::from_str::<CropRecommendationRequest>(
            r#"{"N": "lots", "P": 42, "K": 43, "temperature": 20, "humidity": 82,
                "ph": 6.5, "rainfall": 202, "ph_category": "Acidic", "rainfall_level": "High"}"#,
        );
        assert!(bad.is_err());
    }
}
