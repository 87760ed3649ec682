use base64::{Engine as _, engine::general_purpose};

use crate::domain::common::entities::app_errors::CoreError;

/// Largest original image accepted for recipe generation (4 MiB).
pub const MAX_IMAGE_SIZE: usize = 4 * 1024 * 1024;

/// A still image ready for transport: base64 payload plus its MIME type.
///
/// Construction always goes through the size check, so an `EncodedImage`
/// never holds more than [`MAX_IMAGE_SIZE`] bytes of original data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    mime_type: String,
    payload: String,
    original_size: usize,
}

impl EncodedImage {
    /// Rejects sizes over the limit before any encoding work happens.
    pub fn check_size(size: usize) -> Result<(), CoreError> {
        if size == 0 {
            return Err(CoreError::EmptyImage);
        }

        if size > MAX_IMAGE_SIZE {
            return Err(CoreError::ImageTooLarge {
                size,
                max_bytes: MAX_IMAGE_SIZE,
            });
        }

        Ok(())
    }

    pub fn from_bytes(bytes: &[u8], mime_type: &str) -> Result<Self, CoreError> {
        Self::check_size(bytes.len())?;
        let mime_type = normalize_image_mime(mime_type)?;

        Ok(Self {
            mime_type,
            payload: general_purpose::STANDARD.encode(bytes),
            original_size: bytes.len(),
        })
    }

    /// Parses `data:<mime>;base64,<payload>`.
    pub fn from_data_uri(uri: &str) -> Result<Self, CoreError> {
        let rest = uri
            .trim()
            .strip_prefix("data:")
            .ok_or(CoreError::InvalidImageEncoding)?;
        let (header, payload) = rest
            .split_once(',')
            .ok_or(CoreError::InvalidImageEncoding)?;
        let header = header
            .strip_suffix(";base64")
            .ok_or(CoreError::InvalidImageEncoding)?;

        let mime_type = normalize_image_mime(header)?;

        // Checked on the declared length so oversized payloads are never decoded.
        Self::check_size(decoded_len(payload))?;

        let bytes = general_purpose::STANDARD
            .decode(payload)
            .map_err(|_| CoreError::InvalidImageEncoding)?;
        Self::check_size(bytes.len())?;

        Ok(Self {
            mime_type,
            payload: payload.to_string(),
            original_size: bytes.len(),
        })
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }

    pub fn original_size(&self) -> usize {
        self.original_size
    }

    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.payload)
    }
}

fn normalize_image_mime(mime_type: &str) -> Result<String, CoreError> {
    let essence = mime_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    match essence.strip_prefix("image/") {
        Some(subtype) if !subtype.is_empty() => Ok(essence),
        _ => Err(CoreError::UnsupportedMediaType(mime_type.to_string())),
    }
}

fn decoded_len(payload: &str) -> usize {
    let padding = payload
        .bytes()
        .rev()
        .take(2)
        .filter(|b| *b == b'=')
        .count();
    (payload.len() / 4 * 3).saturating_sub(padding)
}
