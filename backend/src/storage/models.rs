use chrono::{DateTime, Utc};
use std::path::PathBuf;
use uuid::Uuid;

/// Image bytes received from a multipart field, not yet validated or stored.
#[derive(Debug, Clone)]
pub struct IncomingImage {
    pub original_name: String,
    pub mime_type: String,
    pub data: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub id: Uuid,
    pub file_name: String,
    pub original_name: String,
    pub mime_type: String,
    pub file_size: u64,
    pub path: PathBuf,
    pub created_at: DateTime<Utc>,
}

impl UploadedImage {
    pub fn new(
        file_name: String,
        original_name: String,
        mime_type: String,
        file_size: u64,
        path: PathBuf,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            file_name,
            original_name,
            mime_type,
            file_size,
            path,
            created_at: Utc::now(),
        }
    }
}
