use crate::GspApiError;

/// Secure-serving bodies travel as URL-safe base64 without padding.
pub fn encode_base64url(data: impl AsRef<[u8]>) -> String {
    base64::encode_config(data.as_ref(), base64::URL_SAFE_NO_PAD)
}

/// Decodes a URL-safe base64 body. Padding and surrounding whitespace are tolerated, since not every
/// producer strips them.
pub fn decode_base64url(data: &str) -> Result<Vec<u8>, GspApiError> {
    let trimmed = data.trim().trim_end_matches('=');
    base64::decode_config(trimmed, base64::URL_SAFE_NO_PAD)
        .map_err(|e| GspApiError::EncodingError(format!("Invalid base64url payload. {e}")))
}
