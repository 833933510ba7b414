//! Image ingestion: uploaded file to embeddable data URL.
//!
//! Each pending upload yields exactly one success-or-failure outcome. No
//! size limit is enforced here beyond the multipart field cap; oversized
//! files are passed through as-is.

use actix_multipart::form::tempfile::TempFile;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::services::{ServiceError, ServiceResult};

const FALLBACK_MIME: &str = "application/octet-stream";

/// Whether a multipart file slot actually carries an upload. Browsers submit
/// an empty part for untouched file inputs.
pub fn has_upload(file: &TempFile) -> bool {
    file.size > 0
}

/// Reads the uploaded bytes and encodes them as a `data:` URL suitable for
/// storage and direct display.
pub async fn read_data_url(file: &TempFile) -> ServiceResult<String> {
    let bytes = tokio::fs::read(file.file.path())
        .await
        .map_err(|e| ServiceError::FileRead(e.to_string()))?;

    let mime = file
        .content_type
        .as_ref()
        .map(|m| m.essence_str().to_string())
        .unwrap_or_else(|| FALLBACK_MIME.to_string());

    Ok(format!("data:{mime};base64,{}", BASE64.encode(bytes)))
}

/// Ingests an optional upload slot: `Ok(None)` when nothing was selected.
pub async fn ingest_slot(file: Option<&TempFile>) -> ServiceResult<Option<String>> {
    match file.filter(|f| has_upload(f)) {
        Some(file) => Ok(Some(read_data_url(file).await?)),
        None => Ok(None),
    }
}
