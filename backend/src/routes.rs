use actix_files::Files;
use actix_multipart::Multipart;
use actix_web::{HttpResponse, web};
use chrono::{SecondsFormat, Utc};
use log::{error, info, warn};
use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;

use crate::catalog::DiseaseCatalog;
use crate::config::AppConfig;
use crate::diagnosis::ResponseComposer;
use crate::errors::ApiError;
use crate::inference::{FallbackPredictor, InferenceClient, InferenceError};
use crate::recommendation;
use crate::storage::multipart::read_single_image;
use crate::storage::upload_service::UploadService;

/// Everything the handlers share. Built once at startup; each worker gets
/// cheap clones.
#[derive(Clone)]
pub struct AppServices {
    pub catalog: Arc<DiseaseCatalog>,
    pub uploads: UploadService,
    pub inference: InferenceClient,
    pub fallback: FallbackPredictor,
    pub composer: ResponseComposer,
}

impl AppServices {
    pub fn from_config(config: &AppConfig) -> Result<Self, InferenceError> {
        let catalog = Arc::new(DiseaseCatalog::plant_diseases());
        let uploads = UploadService::new(
            config.uploads.dir.clone(),
            config.uploads.public_path.clone(),
            config.uploads.max_bytes,
        );
        let inference =
            InferenceClient::new(&config.inference.base_url, config.inference_timeout())?;

        Ok(Self {
            fallback: FallbackPredictor::new(catalog.clone()),
            composer: ResponseComposer::new(catalog.clone()),
            catalog,
            uploads,
            inference,
        })
    }
}

pub fn configure_routes(
    cfg: &mut web::ServiceConfig,
    services: &AppServices,
    upload_dir: PathBuf,
    public_path: String,
) {
    cfg.app_data(web::Data::from(services.catalog.clone()))
        .app_data(web::Data::new(services.uploads.clone()))
        .app_data(web::Data::new(services.inference.clone()))
        .app_data(web::Data::new(services.fallback.clone()))
        .app_data(web::Data::new(services.composer.clone()))
        .service(
            web::scope("/api/plant-disease")
                .route("/predict", web::post().to(predict))
                .route("/disease/{disease_id}", web::get().to(get_disease))
                .route("/diseases", web::get().to(list_diseases))
                .route("/health", web::get().to(health)),
        )
        .service(web::scope("/api/crop-recommendation").configure(recommendation::routes::configure))
        .service(Files::new(&public_path, upload_dir));
}

async fn predict(
    payload: Multipart,
    uploads: web::Data<UploadService>,
    inference: web::Data<InferenceClient>,
    fallback: web::Data<FallbackPredictor>,
    composer: web::Data<ResponseComposer>,
) -> Result<HttpResponse, ApiError> {
    info!("Plant disease prediction request received");

    let incoming = read_single_image(payload, uploads.max_bytes())
        .await
        .inspect_err(|e| warn!("Rejected plant image upload: {}", e))?;
    let stored = uploads.store(incoming).await.inspect_err(|e| {
        if !e.is_validation() {
            error!("Failed to store plant image: {}", e);
        }
    })?;

    let prediction = match inference.classify_plant_image(&stored).await {
        Ok(prediction) => {
            info!(
                "Model prediction for {}: {} ({:.2})",
                stored.file_name, prediction.class_id, prediction.confidence
            );
            prediction
        }
        Err(e) => {
            warn!(
                "Model service unavailable for {}, using fallback: {}",
                stored.file_name, e
            );
            fallback.predict_plant(&stored.path).await.map_err(|e| {
                error!("Fallback prediction failed for {}: {}", stored.file_name, e);
                ApiError::internal("Failed to process plant disease prediction", e)
            })?
        }
    };

    let response = composer.compose(&prediction, uploads.public_url(&stored.file_name));
    Ok(HttpResponse::Ok().json(response))
}

async fn get_disease(
    catalog: web::Data<DiseaseCatalog>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let disease_id = path.into_inner();
    match catalog.get(&disease_id) {
        Some(record) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "disease": record,
        }))),
        None => {
            info!("Disease information not found: {}", disease_id);
            Err(ApiError::NotFound("Disease information not found".to_string()))
        }
    }
}

async fn list_diseases(catalog: web::Data<DiseaseCatalog>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "success": true,
        "diseases": catalog.summaries(),
    }))
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Plant Disease Detection API is running",
        "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }))
}
