use actix_multipart::Multipart;
use futures::TryStreamExt;

use super::models::IncomingImage;
use super::upload_service::{UploadError, UploadService};

pub const IMAGE_FIELD: &str = "image";

fn malformed(err: actix_multipart::MultipartError) -> UploadError {
    UploadError::Malformed(err.to_string())
}

/// Pulls exactly one `image` field out of the form. Type and size are checked
/// while streaming so an oversized or mistyped upload is never buffered whole.
pub async fn read_single_image(
    mut payload: Multipart,
    max_bytes: usize,
) -> Result<IncomingImage, UploadError> {
    let mut image: Option<IncomingImage> = None;

    while let Some(mut field) = payload.try_next().await.map_err(malformed)? {
        if field.name() != Some(IMAGE_FIELD) {
            while field.try_next().await.map_err(malformed)?.is_some() {}
            continue;
        }

        if image.is_some() {
            return Err(UploadError::MultipleImages);
        }

        let original_name = field
            .content_disposition()
            .and_then(|disposition| disposition.get_filename())
            .map(str::to_string)
            .unwrap_or_default();
        let mime_type = field
            .content_type()
            .map(|mime| mime.essence_str().to_string())
            .unwrap_or_default();

        UploadService::extract_file_extension(&original_name)?;
        UploadService::validate_mime_type(&mime_type)?;

        let mut data = Vec::new();
        while let Some(chunk) = field.try_next().await.map_err(malformed)? {
            if data.len() + chunk.len() > max_bytes {
                return Err(UploadError::FileTooLarge { limit: max_bytes });
            }
            data.extend_from_slice(&chunk);
        }

        log::debug!(
            "Received image field: {} ({} bytes, {})",
            original_name,
            data.len(),
            mime_type
        );

        image = Some(IncomingImage {
            original_name,
            mime_type,
            data,
        });
    }

    image.ok_or(UploadError::MissingImage)
}
