//! Image intake — data-URL parsing and payload validation.
//!
//! The webview hands every image over as a base64 data URL, whether it came
//! from the camera canvas or the file picker. This module owns the boundary:
//! strip the `data:image/...;base64,` header, keep the declared media type,
//! and check the payload actually decodes as an image before it goes
//! anywhere near the analysis service.

use base64::Engine;
use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("image payload is not valid base64: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
    #[error("image payload could not be decoded: {0}")]
    InvalidImage(#[from] image::ImageError),
    #[error("could not read image file: {0}")]
    Io(#[from] std::io::Error),
}

/// A base64 image ready to send to the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    /// Media type from the data-URL header, e.g. "image/png".
    pub media_type: String,
    /// Raw base64 payload, header stripped.
    pub data: String,
}

fn data_url_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^data:(image/[a-zA-Z0-9.+-]+);base64,").expect("static pattern compiles")
    })
}

impl ImagePayload {
    /// Parse a (possibly prefixed) base64 image string.
    ///
    /// Strings without a data-URL header pass through untouched and are
    /// assumed to be JPEG — the camera canvas default.
    pub fn from_data_url(src: &str) -> Self {
        match data_url_pattern().captures(src) {
            Some(caps) => {
                let header_len = caps.get(0).map(|m| m.end()).unwrap_or(0);
                ImagePayload {
                    media_type: caps[1].to_string(),
                    data: src[header_len..].to_string(),
                }
            }
            None => ImagePayload {
                media_type: "image/jpeg".to_string(),
                data: src.to_string(),
            },
        }
    }

    /// Decode the base64 payload to raw bytes.
    pub fn decode(&self) -> Result<Vec<u8>, CaptureError> {
        Ok(base64::engine::general_purpose::STANDARD.decode(&self.data)?)
    }

    /// Check the payload decodes and sniffs as a real image.
    ///
    /// Returns the pixel dimensions, read from the header without a full
    /// decode.
    pub fn validate(&self) -> Result<(u32, u32), CaptureError> {
        let bytes = self.decode()?;
        let reader = image::ImageReader::new(std::io::Cursor::new(bytes)).with_guessed_format()?;
        Ok(reader.into_dimensions()?)
    }
}

/// Read an image file from disk and normalize it to a data URL.
///
/// Used by the native file-picker path; the webview receives the same shape
/// it would have produced itself with a FileReader.
pub fn file_to_data_url(path: &std::path::Path) -> Result<String, CaptureError> {
    let bytes = std::fs::read(path)?;
    let format = image::guess_format(&bytes)?;
    let encoded = base64::engine::general_purpose::STANDARD.encode(&bytes);
    Ok(format!("data:{};base64,{}", format.to_mime_type(), encoded))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_data_url_prefix() {
        let payload = ImagePayload::from_data_url("data:image/png;base64,AAAA");
        assert_eq!(payload.media_type, "image/png");
        assert_eq!(payload.data, "AAAA");
    }

    #[test]
    fn jpeg_prefix_is_recognized() {
        let payload = ImagePayload::from_data_url("data:image/jpeg;base64,/9j/4AAQ");
        assert_eq!(payload.media_type, "image/jpeg");
        assert_eq!(payload.data, "/9j/4AAQ");
    }

    #[test]
    fn raw_base64_passes_through_as_jpeg() {
        let payload = ImagePayload::from_data_url("AAAA");
        assert_eq!(payload.media_type, "image/jpeg");
        assert_eq!(payload.data, "AAAA");
    }

    #[test]
    fn garbage_payload_fails_validation() {
        let payload = ImagePayload::from_data_url("data:image/png;base64,not-base64!!!");
        assert!(payload.validate().is_err());
    }

    #[test]
    fn tiny_png_validates_with_dimensions() {
        // 1x1 transparent PNG.
        let png_b64 = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";
        let payload = ImagePayload::from_data_url(&format!("data:image/png;base64,{}", png_b64));
        assert_eq!(payload.validate().unwrap(), (1, 1));
    }
}
