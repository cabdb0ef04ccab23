//! Cloudinary unsigned-upload [`MediaUploadService`].

use platform_host::{MediaUploadFuture, MediaUploadService, UploadFile, UploadedAsset};
use serde::Deserialize;
use serde_json::Value;

use crate::bridge;

/// Account settings for unsigned uploads.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CloudinaryConfig {
    /// Cloud name segment of the upload endpoint.
    pub cloud_name: String,
    /// Unsigned upload preset configured in the Cloudinary console.
    pub upload_preset: String,
}

impl CloudinaryConfig {
    /// Image upload endpoint for this cloud.
    pub fn upload_url(&self) -> String {
        format!(
            "https://api.cloudinary.com/v1_1/{}/image/upload",
            self.cloud_name
        )
    }
}

#[derive(Debug, Clone)]
/// Upload service posting multipart forms to Cloudinary.
pub struct CloudinaryUploadService {
    config: CloudinaryConfig,
}

impl CloudinaryUploadService {
    /// Creates a service for `config`.
    pub fn new(config: CloudinaryConfig) -> Self {
        Self { config }
    }
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: Option<String>,
    public_id: Option<String>,
    error: Option<Value>,
}

/// Parses an upload response body into an asset, preferring the provider's error message.
pub(crate) fn parse_upload_response(status: u16, body: &str) -> Result<UploadedAsset, String> {
    let parsed: UploadResponse = serde_json::from_str(body)
        .map_err(|err| format!("HTTP {status}: unreadable upload response: {err}"))?;
    if let Some(error) = parsed.error {
        let message = error
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("upload failed");
        return Err(format!("HTTP {status}: {message}"));
    }
    match parsed.secure_url {
        Some(url) if (200..300).contains(&status) => Ok(UploadedAsset {
            url,
            public_id: parsed.public_id,
        }),
        _ => Err(format!("HTTP {status}: upload response without secure_url")),
    }
}

impl MediaUploadService for CloudinaryUploadService {
    fn upload<'a>(
        &'a self,
        file: &'a UploadFile,
        folder: &'a str,
    ) -> MediaUploadFuture<'a, Result<UploadedAsset, String>> {
        Box::pin(async move {
            let fields = [
                ("upload_preset", self.config.upload_preset.as_str()),
                ("folder", folder),
            ];
            let response =
                bridge::post_file_form(&self.config.upload_url(), file, &fields).await?;
            parse_upload_response(response.status, &response.body)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_url_targets_the_image_endpoint() {
        let config = CloudinaryConfig {
            cloud_name: "demo".to_string(),
            upload_preset: "fabric-store-preset".to_string(),
        };
        assert_eq!(
            config.upload_url(),
            "https://api.cloudinary.com/v1_1/demo/image/upload"
        );
    }

    #[test]
    fn successful_response_yields_secure_url() {
        let asset = parse_upload_response(
            200,
            r#"{"secure_url": "https://res.cloudinary.com/demo/a.jpg", "public_id": "fabric-store/a"}"#,
        )
        .expect("parse");
        assert_eq!(asset.url, "https://res.cloudinary.com/demo/a.jpg");
        assert_eq!(asset.public_id.as_deref(), Some("fabric-store/a"));
    }

    #[test]
    fn provider_errors_are_surfaced() {
        let err = parse_upload_response(400, r#"{"error": {"message": "Invalid image file"}}"#)
            .expect_err("error");
        assert_eq!(err, "HTTP 400: Invalid image file");
    }
}
