use crate::error::ResourceError;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;

/// An image reference, classified once before resolution.
///
/// A reference starting with `data:` carries its bytes inline as base64;
/// anything else is treated as a remote URL, matching what the dashboard
/// frontend sends in either case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Decoded bytes of a `data:` URI.
    Inline(Vec<u8>),
    /// A URL to fetch.
    Remote(String),
}

impl ImageSource {
    pub fn parse(reference: &str) -> Result<Self, ResourceError> {
        if let Some(rest) = reference.strip_prefix("data:") {
            let payload = rest.split_once(',').ok_or_else(|| {
                ResourceError::InvalidDataUri("missing ',' separator".to_string())
            })?;
            let (header, data) = payload;
            if !header.ends_with(";base64") {
                return Err(ResourceError::InvalidDataUri(format!(
                    "unsupported encoding in '{}'",
                    header
                )));
            }
            let bytes = BASE64
                .decode(data.trim())
                .map_err(|e| ResourceError::InvalidDataUri(e.to_string()))?;
            Ok(ImageSource::Inline(bytes))
        } else {
            Ok(ImageSource::Remote(reference.to_string()))
        }
    }
}
