use crate::api::{ApiClient, ApiError};
use classroom_shared::models::UploadResponse;
use reqwest::multipart::{Form, Part};

const UPLOAD_PATH: &str = "/upload";
const FALLBACK_MIME: &str = "application/octet-stream";

/// Uploads an image and returns the URL the backend stored it under.
pub async fn upload_image(
    client: &ApiClient,
    file_name: &str,
    mime_type: &str,
    bytes: Vec<u8>,
) -> Result<String, ApiError> {
    let mime_type = if mime_type.is_empty() { FALLBACK_MIME } else { mime_type };
    let part = Part::bytes(bytes)
        .file_name(file_name.to_string())
        .mime_str(mime_type)?;
    let response: UploadResponse = client
        .upload(UPLOAD_PATH, Form::new().part("file", part))
        .await?;
    log::debug!("uploaded {file_name} to {}", response.url);
    Ok(response.url)
}
