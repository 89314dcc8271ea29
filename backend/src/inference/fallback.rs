use sha2::{Digest, Sha256};
use shared::{CropRecommendationRequest, CropRecommendationResponse, PredictionSource};
use std::path::Path;
use std::sync::Arc;
use std::time::UNIX_EPOCH;

use super::models::PredictionResult;
use crate::catalog::DiseaseCatalog;
use crate::catalog::crops::CROP_LABELS;

pub const PLANT_FALLBACK_NOTE: &str =
    "Using enhanced simulation mode - CNN model temporarily unavailable";
pub const CROP_FALLBACK_NOTE: &str =
    "Using enhanced simulation mode - Python model temporarily unavailable";

const UNKNOWN_CLASS: &str = "Unknown_condition";

/// Stand-in predictions for when the model service is down. Not a classifier:
/// the output is a pure function of file size and modification time, so the
/// same stored file always gets the same answer.
#[derive(Clone)]
pub struct FallbackPredictor {
    catalog: Arc<DiseaseCatalog>,
}

/// Two independent 32-bit slices of a SHA-256 digest: one selects, one spreads
/// the confidence.
fn digest_slices(input: &[u8]) -> (u32, u32) {
    let digest = Sha256::digest(input);
    let selector = u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]]);
    let spread = u32::from_be_bytes([digest[4], digest[5], digest[6], digest[7]]);
    log::debug!("Fallback digest prefix {}", hex::encode(&digest[..8]));
    (selector, spread)
}

impl FallbackPredictor {
    pub fn new(catalog: Arc<DiseaseCatalog>) -> Self {
        Self { catalog }
    }

    pub async fn predict_plant(&self, path: &Path) -> std::io::Result<PredictionResult> {
        let metadata = tokio::fs::metadata(path).await?;
        let modified_ms = metadata
            .modified()?
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis())
            .unwrap_or(0);
        Ok(self.predict_from_stats(metadata.len(), modified_ms))
    }

    pub fn predict_from_stats(&self, file_size: u64, modified_ms: u128) -> PredictionResult {
        let (selector, spread) = digest_slices(format!("{}_{}", file_size, modified_ms).as_bytes());

        let class_idx = (selector as usize).checked_rem(self.catalog.len());
        let class_id = class_idx
            .and_then(|position| self.catalog.entry_at(position))
            .map(|record| record.id.clone())
            .unwrap_or_else(|| UNKNOWN_CLASS.to_string());

        // 0.65..=0.94
        let confidence = 0.65 + f64::from(spread % 30) / 100.0;

        log::info!(
            "Fallback prediction for size={} mtime={}: {} ({:.2})",
            file_size,
            modified_ms,
            class_id,
            confidence
        );

        PredictionResult {
            class_id,
            confidence,
            class_idx,
            source: PredictionSource::FallbackSimulation,
        }
    }

    pub fn recommend_crop(&self, request: &CropRecommendationRequest) -> CropRecommendationResponse {
        let canonical = serde_json::to_vec(request).unwrap_or_default();
        let (selector, spread) = digest_slices(&canonical);

        let crop = CROP_LABELS[selector as usize % CROP_LABELS.len()];
        // 0.75..=0.94
        let confidence = 0.75 + f64::from(spread % 20) / 100.0;

        log::info!("Fallback crop recommendation: {} ({:.2})", crop, confidence);

        CropRecommendationResponse {
            success: true,
            prediction: crop.to_string(),
            confidence: (confidence * 100.0).round() as u8,
            model_used: PredictionSource::FallbackSimulation.model_used().to_string(),
            note: Some(CROP_FALLBACK_NOTE.to_string()),
        }
    }
}
