use actix_web::{HttpResponse, web};
use chrono::{SecondsFormat, Utc};
use log::{info, warn};
use serde_json::{Value, json};

use super::validation::parse_crop_request;
use crate::catalog::crops::{CROP_LABELS, PH_CATEGORIES, RAINFALL_LEVELS};
use crate::errors::ApiError;
use crate::inference::{FallbackPredictor, InferenceClient};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| ApiError::InvalidRequest(err.to_string()).into()),
    )
    .route("/predict", web::post().to(recommend_crop))
    .route("/test", web::get().to(test_connection))
    .route("/health", web::get().to(health));
}

async fn recommend_crop(
    body: web::Json<Value>,
    inference: web::Data<InferenceClient>,
    fallback: web::Data<FallbackPredictor>,
) -> Result<HttpResponse, ApiError> {
    info!("Crop recommendation request received");
    let request = parse_crop_request(body.into_inner())?;

    match inference.recommend_crop(&request).await {
        Ok(prediction) => {
            info!("Crop model prediction: {}", prediction);
            Ok(HttpResponse::Ok().json(prediction))
        }
        Err(e) => {
            warn!("Crop model unavailable, using fallback: {}", e);
            Ok(HttpResponse::Ok().json(fallback.recommend_crop(&request)))
        }
    }
}

async fn test_connection() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Crop Recommendation API is running",
        "supported_crops": CROP_LABELS,
        "ph_options": PH_CATEGORIES,
        "rainfall_options": RAINFALL_LEVELS,
        "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }))
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Crop Recommendation API is running",
        "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{StubReply, UNREACHABLE_BASE_URL, spawn_stub_inference, test_services};
    use actix_web::http::StatusCode;
    use actix_web::{App, test};

    fn measurements() -> Value {
        json!({
            "N": 90, "P": 42, "K": 43,
            "temperature": 20.87, "humidity": 82.0, "ph": 6.5, "rainfall": 202.93,
            "ph_category": "Acidic", "rainfall_level": "High"
        })
    }

    macro_rules! init_app {
        ($base_url:expr, $tmp:expr) => {{
            let services = test_services($tmp, $base_url);
            test::init_service(
                App::new()
                    .app_data(web::Data::new(services.inference.clone()))
                    .app_data(web::Data::new(services.fallback.clone()))
                    .service(web::scope("/api/crop-recommendation").configure(configure)),
            )
            .await
        }};
    }

    #[actix_web::test]
    async fn relays_model_result() {
        let base_url = spawn_stub_inference(
            StubReply::status(500),
            StubReply::ok(json!({"success": true, "prediction": "rice", "confidence": 97})),
        )
        .await;
        let tmp = tempfile::tempdir().expect("tmpdir");
        let app = init_app!(&base_url, tmp.path());

        let req = test::TestRequest::post()
            .uri("/api/crop-recommendation/predict")
            .set_json(measurements())
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["prediction"], "rice");
        assert_eq!(body["confidence"], 97);
    }

    #[actix_web::test]
    async fn falls_back_deterministically() {
        let tmp = tempfile::tempdir().expect("tmpdir");
        let app = init_app!(UNREACHABLE_BASE_URL, tmp.path());

        let mut answers = Vec::new();
        for _ in 0..3 {
            let req = test::TestRequest::post()
                .uri("/api/crop-recommendation/predict")
                .set_json(measurements())
                .to_request();
            let body: Value = test::call_and_read_body_json(&app, req).await;
            assert_eq!(body["success"], true);
            assert_eq!(body["modelUsed"], "enhanced_simulation");
            let crop = body["prediction"].as_str().expect("crop").to_string();
            assert!(CROP_LABELS.contains(&crop.as_str()));
            answers.push((crop, body["confidence"].as_u64().expect("confidence")));
        }
        assert!(answers.windows(2).all(|pair| pair[0] == pair[1]));
    }

    #[actix_web::test]
    async fn missing_field_is_bad_request() {
        let tmp = tempfile::tempdir().expect("tmpdir");
        let app = init_app!(UNREACHABLE_BASE_URL, tmp.path());

        let mut body = measurements();
        body.as_object_mut().expect("object").remove("rainfall_level");
        let req = test::TestRequest::post()
            .uri("/api/crop-recommendation/predict")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Missing required field: rainfall_level");
    }

    #[actix_web::test]
    async fn non_json_body_is_bad_request() {
        let tmp = tempfile::tempdir().expect("tmpdir");
        let app = init_app!(UNREACHABLE_BASE_URL, tmp.path());

        let req = test::TestRequest::post()
            .uri("/api/crop-recommendation/predict")
            .insert_header(("Content-Type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_endpoint_lists_options() {
        let tmp = tempfile::tempdir().expect("tmpdir");
        let app = init_app!(UNREACHABLE_BASE_URL, tmp.path());

        let req = test::TestRequest::get()
            .uri("/api/crop-recommendation/test")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["supported_crops"].as_array().expect("crops").len(), 22);
        assert_eq!(body["ph_options"].as_array().expect("ph").len(), 3);
        assert_eq!(body["rainfall_options"].as_array().expect("rain").len(), 4);
    }
}
