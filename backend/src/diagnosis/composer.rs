use chrono::{SecondsFormat, Utc};
use shared::{DiseaseDetails, PredictionResponse, PredictionSource, Severity};
use std::sync::Arc;

use crate::catalog::{DiseaseCatalog, DiseaseRecord};
use crate::inference::PredictionResult;
use crate::inference::fallback::PLANT_FALLBACK_NOTE;

const GENERIC_DESCRIPTION: &str =
    "AI-detected plant condition. Please consult with a plant pathologist for confirmation.";
const GENERIC_TREATMENT: &str =
    "Consult with a plant pathologist for proper diagnosis and treatment.";
const GENERIC_PREVENTION: &str = "Maintain good plant health practices and monitor regularly.";

/// `Tomato_Late_blight` -> `Tomato Late Blight`.
pub fn humanize_class_id(class_id: &str) -> String {
    let words: Vec<String> = class_id
        .split(|c: char| c == '_' || c == '-' || c == '(' || c == ')' || c == ',' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect();

    if words.is_empty() {
        "Unknown Condition".to_string()
    } else {
        words.join(" ")
    }
}

/// Used only for classes missing from the catalog; known classes keep the
/// catalog's severity.
pub fn severity_for_confidence(confidence: f64) -> Severity {
    if confidence > 0.8 {
        Severity::High
    } else if confidence > 0.6 {
        Severity::Medium
    } else {
        Severity::Low
    }
}

pub fn synthesize_record(prediction: &PredictionResult) -> DiseaseRecord {
    DiseaseRecord {
        id: prediction.class_id.clone(),
        name: humanize_class_id(&prediction.class_id),
        description: GENERIC_DESCRIPTION.to_string(),
        treatment: GENERIC_TREATMENT.to_string(),
        severity: severity_for_confidence(prediction.confidence),
        prevention: GENERIC_PREVENTION.to_string(),
    }
}

#[derive(Clone)]
pub struct ResponseComposer {
    catalog: Arc<DiseaseCatalog>,
}

impl ResponseComposer {
    pub fn new(catalog: Arc<DiseaseCatalog>) -> Self {
        Self { catalog }
    }

    /// Never fails: an unknown class gets a synthesized record.
    pub fn compose(&self, prediction: &PredictionResult, image_url: String) -> PredictionResponse {
        let record = match self.catalog.get(&prediction.class_id) {
            Some(record) => record.clone(),
            None => {
                log::warn!(
                    "Class {} not in disease catalog, synthesizing record",
                    prediction.class_id
                );
                synthesize_record(prediction)
            }
        };

        let note = match prediction.source {
            PredictionSource::ExternalModel => None,
            PredictionSource::FallbackSimulation => Some(PLANT_FALLBACK_NOTE.to_string()),
        };

        PredictionResponse {
            success: true,
            prediction: DiseaseDetails {
                disease: record.name,
                confidence: prediction.confidence_percent(),
                description: record.description,
                treatment: record.treatment,
                severity: record.severity,
                prevention: record.prevention,
                class_idx: prediction.class_idx,
                original_class: prediction.class_id.clone(),
            },
            image_url,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            model_used: prediction.source.model_used().to_string(),
            source: prediction.source,
            note,
        }
    }
}
