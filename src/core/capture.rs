//! Turning a local picture into a self-contained `data:` URI.

use crate::errors::{AppError, AppResult};
use base64::{Engine as _, engine::general_purpose};
use std::fs;
use std::path::Path;

/// Picture read from disk and embedded as a `data:` URI.
#[derive(Debug, Clone)]
pub struct CapturedImage {
    pub data_uri: String,
    pub mime: &'static str,
    pub size: usize,
}

/// Encode raw image bytes. The format is sniffed from the magic bytes,
/// never from the file extension.
pub fn encode_data_uri(bytes: &[u8]) -> Result<CapturedImage, String> {
    if bytes.is_empty() {
        return Err("file is empty".to_string());
    }

    let format = image::guess_format(bytes).map_err(|_| "not a recognised image format")?;
    let mime = format.to_mime_type();
    let encoded = general_purpose::STANDARD.encode(bytes);

    Ok(CapturedImage {
        data_uri: format!("data:{};base64,{}", mime, encoded),
        mime,
        size: bytes.len(),
    })
}

/// Read one image file. This is the blocking step of a capture: the slot
/// is only filled once it returns.
pub fn capture_image(path: &Path, max_bytes: u64) -> AppResult<CapturedImage> {
    let invalid = |reason: String| AppError::InvalidImage {
        path: path.display().to_string(),
        reason,
    };

    let meta = fs::metadata(path).map_err(|e| invalid(e.to_string()))?;
    if !meta.is_file() {
        return Err(invalid("not a regular file".to_string()));
    }
    if max_bytes > 0 && meta.len() > max_bytes {
        return Err(invalid(format!(
            "{} bytes exceeds the limit of {} bytes",
            meta.len(),
            max_bytes
        )));
    }

    let bytes = fs::read(path)?;
    encode_data_uri(&bytes).map_err(invalid)
}
