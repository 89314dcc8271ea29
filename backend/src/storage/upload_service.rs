use chrono::Utc;
use image::ImageFormat;
use rand::Rng;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use tokio::io::AsyncWriteExt;

use super::models::{IncomingImage, UploadedImage};

const ALLOWED_EXTENSIONS: [&str; 4] = ["jpeg", "jpg", "png", "gif"];
const ALLOWED_MIME_TYPES: [&str; 4] = ["image/jpeg", "image/jpg", "image/png", "image/gif"];
const MAX_NAME_ATTEMPTS: usize = 5;

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("No image file provided")]
    MissingImage,
    #[error("Only one image file may be uploaded per request")]
    MultipleImages,
    #[error("Only image files are allowed (jpeg, jpg, png, gif), got {0}")]
    UnsupportedType(String),
    #[error("File too large, the limit is {limit} bytes")]
    FileTooLarge { limit: usize },
    #[error("Uploaded file is empty")]
    EmptyFile,
    #[error("File content is not a jpeg, png or gif image")]
    UnrecognizedContent,
    #[error("Malformed multipart body: {0}")]
    Malformed(String),
    #[error("Storage error: {0}")]
    Io(#[from] std::io::Error),
}

impl UploadError {
    /// Everything except disk failures is the client's fault.
    pub fn is_validation(&self) -> bool {
        !matches!(self, UploadError::Io(_))
    }
}

#[derive(Clone)]
pub struct UploadService {
    upload_dir: PathBuf,
    public_path: String,
    max_bytes: usize,
}

impl UploadService {
    pub fn new(upload_dir: PathBuf, public_path: String, max_bytes: usize) -> Self {
        Self {
            upload_dir,
            public_path,
            max_bytes,
        }
    }

    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }

    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    pub fn extract_file_extension(original_name: &str) -> Result<String, UploadError> {
        let extension = Path::new(original_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .unwrap_or_default();

        if ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
            Ok(extension)
        } else {
            Err(UploadError::UnsupportedType(format!(
                "file name '{}'",
                original_name
            )))
        }
    }

    pub fn validate_mime_type(mime_type: &str) -> Result<(), UploadError> {
        let normalized = mime_type.to_ascii_lowercase();
        if ALLOWED_MIME_TYPES.contains(&normalized.as_str()) {
            Ok(())
        } else {
            Err(UploadError::UnsupportedType(format!(
                "content type '{}'",
                mime_type
            )))
        }
    }

    pub fn validate_image_size(&self, size: usize) -> Result<(), UploadError> {
        if size == 0 {
            return Err(UploadError::EmptyFile);
        }
        if size > self.max_bytes {
            return Err(UploadError::FileTooLarge {
                limit: self.max_bytes,
            });
        }
        Ok(())
    }

    fn validate_content(data: &[u8]) -> Result<(), UploadError> {
        match image::guess_format(data) {
            Ok(ImageFormat::Jpeg | ImageFormat::Png | ImageFormat::Gif) => Ok(()),
            _ => Err(UploadError::UnrecognizedContent),
        }
    }

    /// Returns the normalized extension the stored file will carry.
    pub fn validate(&self, image: &IncomingImage) -> Result<String, UploadError> {
        let extension = Self::extract_file_extension(&image.original_name)?;
        Self::validate_mime_type(&image.mime_type)?;
        self.validate_image_size(image.data.len())?;
        Self::validate_content(&image.data)?;
        Ok(extension)
    }

    pub fn generate_file_name(extension: &str) -> String {
        let suffix: u32 = rand::rng().random_range(0..1_000_000_000);
        format!(
            "plant-{}-{}.{}",
            Utc::now().timestamp_millis(),
            suffix,
            extension
        )
    }

    pub fn public_url(&self, file_name: &str) -> String {
        format!(
            "{}/{}",
            self.public_path.trim_end_matches('/'),
            urlencoding::encode(file_name)
        )
    }

    /// Validates and writes the image. Nothing touches the disk unless
    /// validation passes.
    pub async fn store(&self, image: IncomingImage) -> Result<UploadedImage, UploadError> {
        let extension = self.validate(&image)?;

        tokio::fs::create_dir_all(&self.upload_dir).await?;

        for _ in 0..MAX_NAME_ATTEMPTS {
            let file_name = Self::generate_file_name(&extension);
            let path = self.upload_dir.join(&file_name);

            let mut file = match tokio::fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
                .await
            {
                Ok(file) => file,
                Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                    log::debug!("Upload name collision on {}, regenerating", file_name);
                    continue;
                }
                Err(e) => return Err(e.into()),
            };

            let mut written = file.write_all(&image.data).await;
            if written.is_ok() {
                written = file.flush().await;
            }

            if let Err(e) = written {
                log::error!("Failed to write upload {}: {}", path.display(), e);
                tokio::fs::remove_file(&path).await.ok();
                return Err(e.into());
            }

            let stored = UploadedImage::new(
                file_name,
                image.original_name,
                image.mime_type,
                image.data.len() as u64,
                path,
            );
            log::info!(
                "Stored upload {} as {} ({} bytes, {}) at {}",
                stored.id,
                stored.file_name,
                stored.file_size,
                stored.mime_type,
                stored.created_at.to_rfc3339()
            );

            return Ok(stored);
        }

        Err(std::io::Error::new(
            ErrorKind::AlreadyExists,
            "could not generate a unique upload file name",
        )
        .into())
    }

    /// Deletes regular files in the upload directory last modified more than
    /// `max_age` ago. Returns how many were removed.
    pub async fn sweep_expired(&self, max_age: Duration) -> Result<usize, UploadError> {
        let Some(cutoff) = SystemTime::now().checked_sub(max_age) else {
            return Ok(0);
        };

        let mut entries = match tokio::fs::read_dir(&self.upload_dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(e.into()),
        };

        let mut removed = 0;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            match remove_if_expired(&path, cutoff).await {
                Ok(true) => {
                    log::debug!("Removed expired upload {}", path.display());
                    removed += 1;
                }
                Ok(false) => {}
                Err(e) => log::warn!("Skipping upload {} during sweep: {}", path.display(), e),
            }
        }

        Ok(removed)
    }
}

/// Removes `path` if it is a regular file older than `cutoff`. A file that
/// disappears in the meantime counts as not removed.
async fn remove_if_expired(path: &Path, cutoff: SystemTime) -> std::io::Result<bool> {
    let metadata = match tokio::fs::symlink_metadata(path).await {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e),
    };
    if !metadata.is_file() || metadata.modified()? >= cutoff {
        return Ok(false);
    }

    match tokio::fs::remove_file(path).await {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}
