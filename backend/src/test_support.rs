use actix_web::http::StatusCode;
use actix_web::http::header::CONTENT_TYPE;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use serde_json::Value;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::config::AppConfig;
use crate::routes::AppServices;

/// Nothing listens on the discard port, so connections are refused at once.
pub const UNREACHABLE_BASE_URL: &str = "http://127.0.0.1:9";

pub const TEST_MAX_UPLOAD_BYTES: usize = 256 * 1024;

pub fn test_services(root: &Path, inference_base_url: &str) -> AppServices {
    test_services_with_timeout(root, inference_base_url, 5)
}

pub fn test_services_with_timeout(
    root: &Path,
    inference_base_url: &str,
    timeout_secs: u64,
) -> AppServices {
    let mut config = AppConfig::default();
    config.uploads.dir = root.join("plant-disease");
    config.uploads.max_bytes = TEST_MAX_UPLOAD_BYTES;
    config.inference.base_url = inference_base_url.to_string();
    config.inference.timeout_secs = timeout_secs;

    std::fs::create_dir_all(&config.uploads.dir).expect("create upload dir");
    AppServices::from_config(&config).expect("services")
}

pub fn jpeg_bytes(len: usize) -> Vec<u8> {
    with_magic(&[0xFF, 0xD8, 0xFF, 0xE0], len)
}

pub fn png_bytes(len: usize) -> Vec<u8> {
    with_magic(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A], len)
}

pub fn gif_bytes(len: usize) -> Vec<u8> {
    with_magic(b"GIF89a", len)
}

fn with_magic(magic: &[u8], len: usize) -> Vec<u8> {
    let mut data = magic.to_vec();
    data.extend((0..len.saturating_sub(magic.len())).map(|i| (i % 251) as u8));
    data
}

pub struct FilePart {
    name: String,
    file_name: Option<String>,
    content_type: Option<String>,
    data: Vec<u8>,
}

impl FilePart {
    pub fn file(name: &str, file_name: &str, content_type: &str, data: Vec<u8>) -> Self {
        Self {
            name: name.to_string(),
            file_name: Some(file_name.to_string()),
            content_type: Some(content_type.to_string()),
            data,
        }
    }

    pub fn text(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            file_name: None,
            content_type: None,
            data: value.as_bytes().to_vec(),
        }
    }
}

/// Returns the `Content-Type` header value and the encoded body.
pub fn multipart_body(parts: &[FilePart]) -> (String, Vec<u8>) {
    const BOUNDARY: &str = "----plantdiseaseboundary7MA4YWxkTrZu0gW";
    let mut body = Vec::new();

    for part in parts {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        let mut disposition = format!("Content-Disposition: form-data; name=\"{}\"", part.name);
        if let Some(file_name) = &part.file_name {
            disposition.push_str(&format!("; filename=\"{}\"", file_name));
        }
        body.extend_from_slice(disposition.as_bytes());
        body.extend_from_slice(b"\r\n");
        if let Some(content_type) = &part.content_type {
            body.extend_from_slice(format!("Content-Type: {}\r\n", content_type).as_bytes());
        }
        body.extend_from_slice(b"\r\n");
        body.extend_from_slice(&part.data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());

    (format!("multipart/form-data; boundary={}", BOUNDARY), body)
}

#[derive(Clone)]
pub struct StubReply {
    status: u16,
    body: Value,
    delay: Duration,
}

impl StubReply {
    pub fn ok(body: Value) -> Self {
        Self {
            status: 200,
            body,
            delay: Duration::ZERO,
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            body: serde_json::json!({"error": "stub failure"}),
            delay: Duration::ZERO,
        }
    }

    /// Holds the reply back, for exercising client timeouts.
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    async fn respond(&self) -> HttpResponse {
        if !self.delay.is_zero() {
            actix_web::rt::time::sleep(self.delay).await;
        }
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        HttpResponse::build(status).json(&self.body)
    }
}

/// A request as the stub model service received it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub content_type: String,
    pub body: Vec<u8>,
}

pub type RequestLog = Arc<Mutex<Vec<RecordedRequest>>>;

/// Starts a stand-in model service on an ephemeral port and returns its base
/// URL. The request body is read in full before replying.
pub async fn spawn_stub_inference(plant: StubReply, crop: StubReply) -> String {
    spawn_recording_stub(plant, crop).await.0
}

/// Like [`spawn_stub_inference`], and also keeps every request it receives.
pub async fn spawn_recording_stub(plant: StubReply, crop: StubReply) -> (String, RequestLog) {
    let log: RequestLog = Arc::new(Mutex::new(Vec::new()));
    let server_log = log.clone();

    let server = HttpServer::new(move || {
        let plant = plant.clone();
        let crop = crop.clone();
        let plant_log = server_log.clone();
        let crop_log = server_log.clone();
        App::new()
            .app_data(web::PayloadConfig::new(16 * 1024 * 1024))
            .route(
                "/api/plant-disease/predict",
                web::post().to(move |req: HttpRequest, body: web::Bytes| {
                    record(&plant_log, &req, &body);
                    let plant = plant.clone();
                    async move { plant.respond().await }
                }),
            )
            .route(
                "/api/crop-recommendation/predict",
                web::post().to(move |req: HttpRequest, body: web::Bytes| {
                    record(&crop_log, &req, &body);
                    let crop = crop.clone();
                    async move { crop.respond().await }
                }),
            )
    })
    .workers(1)
    .disable_signals()
    .bind(("127.0.0.1", 0))
    .expect("bind stub inference server");

    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    (format!("http://{}", addr), log)
}

fn record(log: &RequestLog, req: &HttpRequest, body: &web::Bytes) {
    let content_type = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    log.lock().expect("request log").push(RecordedRequest {
        path: req.path().to_string(),
        content_type,
        body: body.to_vec(),
    });
}
