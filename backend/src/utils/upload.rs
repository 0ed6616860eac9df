use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::api::gemini_dtos::InlineData;
use crate::error::GatewayError;

/// Re-checks an uploaded image before it is forwarded to the model.
/// Type comes before size, matching what the browser reports.
pub fn validate_inline_image(
    image: &InlineData,
    mime_prefix: &str,
    max_bytes: u64,
) -> Result<(), GatewayError> {
    if !image.mime_type.starts_with(mime_prefix) {
        return Err(GatewayError::BadRequest(format!(
            "unsupported file type {:?}",
            image.mime_type
        )));
    }

    // Cheap upper bound first so an oversized payload is never decoded.
    let estimated = (image.data.len() as u64 / 4) * 3;
    if estimated > max_bytes + 2 {
        return Err(too_large(max_bytes));
    }

    let decoded = STANDARD
        .decode(image.data.trim())
        .map_err(|e| GatewayError::BadRequest(format!("image data is not valid base64: {}", e)))?;

    if decoded.is_empty() {
        return Err(GatewayError::BadRequest("image is empty".to_string()));
    }
    if decoded.len() as u64 > max_bytes {
        return Err(too_large(max_bytes));
    }
    Ok(())
}

fn too_large(max_bytes: u64) -> GatewayError {
    GatewayError::BadRequest(format!("image exceeds {} bytes", max_bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(mime: &str, bytes: &[u8]) -> InlineData {
        InlineData {
            mime_type: mime.to_string(),
            data: STANDARD.encode(bytes),
        }
    }

    #[test]
    fn accepts_images_up_to_the_limit() {
        assert!(validate_inline_image(&image("image/png", &[7u8; 1024]), "image/", 1024).is_ok());
    }

    #[test]
    fn one_byte_over_is_rejected() {
        let err = validate_inline_image(&image("image/png", &[7u8; 1025]), "image/", 1024).unwrap_err();
        assert!(err.to_string().contains("exceeds 1024"));
    }

    #[test]
    fn type_is_checked_before_size() {
        let err = validate_inline_image(&image("application/pdf", &[0u8; 4096]), "image/", 1024)
            .unwrap_err();
        assert!(err.to_string().contains("unsupported file type"));
    }

    #[test]
    fn garbage_and_empty_payloads_are_rejected() {
        let garbage = InlineData {
            mime_type: "image/jpeg".to_string(),
            data: "not base64!!".to_string(),
        };
        assert!(matches!(
            validate_inline_image(&garbage, "image/", 1024),
            Err(GatewayError::BadRequest(_))
        ));
        assert!(validate_inline_image(&image("image/jpeg", &[]), "image/", 1024).is_err());
    }
}
