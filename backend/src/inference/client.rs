use reqwest::multipart::{Form, Part};
use reqwest::Client as HttpClient;
use shared::{CropRecommendationRequest, PredictionSource};
use std::time::Duration;
use thiserror::Error;
use url::Url;

use super::models::{PredictionResult, RemotePrediction};
use crate::storage::models::UploadedImage;

const PLANT_DISEASE_PATH: &str = "api/plant-disease/predict";
const CROP_RECOMMENDATION_PATH: &str = "api/crop-recommendation/predict";

/// Any reason the model service could not give a usable answer. Callers treat
/// every variant the same way: switch to the fallback predictor.
#[derive(Error, Debug)]
pub enum InferenceError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Model service returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Model service reported failure: {0}")]
    Rejected(String),
    #[error("Malformed model response: {0}")]
    Malformed(String),
    #[error("Failed to read stored image: {0}")]
    Io(#[from] std::io::Error),
    #[error("URL parsing failed: {0}")]
    Url(#[from] url::ParseError),
}

#[derive(Clone)]
pub struct InferenceClient {
    http_client: HttpClient,
    base_url: Url,
}

impl InferenceClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, InferenceError> {
        let mut base_url = Url::parse(base_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, InferenceError> {
        Ok(self.base_url.join(path)?)
    }

    /// Sends the stored image to the plant disease model. One attempt, no
    /// retries.
    pub async fn classify_plant_image(
        &self,
        image: &UploadedImage,
    ) -> Result<PredictionResult, InferenceError> {
        let url = self.endpoint(PLANT_DISEASE_PATH)?;
        let data = tokio::fs::read(&image.path).await?;

        let part = Part::bytes(data)
            .file_name(image.file_name.clone())
            .mime_str(&image.mime_type)?;
        let form = Form::new().part("image", part);

        log::debug!("Calling model service at {} for {}", url, image.file_name);

        let response = self.http_client.post(url).multipart(form).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(InferenceError::Status { status, body });
        }

        let remote: RemotePrediction = response
            .json()
            .await
            .map_err(|e| InferenceError::Malformed(e.to_string()))?;

        Self::interpret_plant_prediction(remote)
    }

    fn interpret_plant_prediction(
        remote: RemotePrediction,
    ) -> Result<PredictionResult, InferenceError> {
        if !remote.success {
            return Err(InferenceError::Rejected(
                remote
                    .error
                    .unwrap_or_else(|| "CNN model prediction failed".to_string()),
            ));
        }

        let class_id = remote
            .class_id
            .filter(|class_id| !class_id.trim().is_empty())
            .ok_or_else(|| InferenceError::Malformed("missing class".to_string()))?;

        let confidence = remote
            .confidence
            .filter(|confidence| confidence.is_finite())
            .ok_or_else(|| InferenceError::Malformed("missing confidence".to_string()))?;

        Ok(PredictionResult {
            class_id,
            confidence: confidence.clamp(0.0, 1.0),
            class_idx: remote.class_idx,
            source: PredictionSource::ExternalModel,
        })
    }

    /// Forwards soil and climate measurements to the crop model. A successful
    /// body is returned untouched so the caller can relay it.
    pub async fn recommend_crop(
        &self,
        request: &CropRecommendationRequest,
    ) -> Result<serde_json::Value, InferenceError> {
        let url = self.endpoint(CROP_RECOMMENDATION_PATH)?;
        log::debug!("Calling crop model at {}", url);

        let response = self.http_client.post(url).json(request).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(InferenceError::Status { status, body });
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| InferenceError::Malformed(e.to_string()))?;

        match body.get("success").and_then(|success| success.as_bool()) {
            Some(true) => Ok(body),
            _ => Err(InferenceError::Rejected(
                body.get("error")
                    .and_then(|error| error.as_str())
                    .unwrap_or("Python model prediction failed")
                    .to_string(),
            )),
        }
    }
}
