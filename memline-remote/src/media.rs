//! Media upload adapter for S3-compatible object storage.

use chrono::Utc;
use memline_core::config::MemlineConfig;
use memline_core::{MemlineError, MemlineResult};

use crate::sign::{SigningParams, authorization_header, sha256_hex, uri_encode_path};

/// Key prefix for uploaded timeline images.
const KEY_PREFIX: &str = "timeline_images";

const SERVICE: &str = "s3";

/// Uploads images with public-read visibility and returns their public URL.
pub struct MediaStore {
    client: reqwest::Client,
    access_key: String,
    secret_key: String,
    bucket: String,
    region: String,
}

impl MediaStore {
    pub fn new(config: &MemlineConfig) -> Self {
        MediaStore {
            client: reqwest::Client::new(),
            access_key: config.aws_access_key.clone(),
            secret_key: config.aws_secret_key.clone(),
            bucket: config.bucket.clone(),
            region: config.region.clone(),
        }
    }

    /// Upload an image and return its public URL.
    ///
    /// The object key is derived from the filename alone, so a same-named
    /// upload silently overwrites the previous object. No retry on failure;
    /// the user resubmits manually.
    pub async fn upload(
        &self,
        bytes: Vec<u8>,
        filename: &str,
        content_type: &str,
    ) -> MemlineResult<String> {
        if self.access_key.trim().is_empty() || self.secret_key.trim().is_empty() {
            return Err(MemlineError::CredentialsMissing);
        }

        // The request URL and the canonical request share one encoding, so
        // the signed path always matches the path the client sends
        let path = object_path(filename);
        let host = format!("{}.s3.{}.amazonaws.com", self.bucket, self.region);
        let url = format!("https://{host}{path}");

        let now = Utc::now();
        let amz_date = now.format("%Y%m%dT%H%M%SZ").to_string();
        let payload_hash = sha256_hex(&bytes);

        // Headers participating in the signature: lowercase, sorted by name,
        // matching exactly what goes on the request below.
        let headers = vec![
            ("content-type".to_string(), content_type.to_string()),
            ("host".to_string(), host.clone()),
            ("x-amz-acl".to_string(), "public-read".to_string()),
            ("x-amz-content-sha256".to_string(), payload_hash.clone()),
            ("x-amz-date".to_string(), amz_date.clone()),
        ];

        let auth = authorization_header(
            &SigningParams {
                access_key: &self.access_key,
                secret_key: &self.secret_key,
                region: &self.region,
                service: SERVICE,
            },
            "PUT",
            &path,
            &headers,
            &payload_hash,
            now,
        );

        let response = self
            .client
            .put(&url)
            .header("Authorization", auth)
            .header("Content-Type", content_type)
            .header("x-amz-acl", "public-read")
            .header("x-amz-content-sha256", &payload_hash)
            .header("x-amz-date", &amz_date)
            .body(bytes)
            .send()
            .await
            .map_err(|e| MemlineError::UploadFailed(e.to_string()))?;

        let status = response.status();

        // Rejected credentials are reported distinctly from other failures
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(MemlineError::CredentialsMissing);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MemlineError::UploadFailed(format!("{status}: {body}")));
        }

        Ok(url)
    }
}

/// Percent-encoded object path for a filename, shared by the request URL
/// and the signed canonical request.
fn object_path(filename: &str) -> String {
    uri_encode_path(&format!("/{KEY_PREFIX}/{filename}"))
}
