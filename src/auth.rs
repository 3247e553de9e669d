//! API key verification for the secured endpoint.

use crate::error::AppError;

/// Header carrying the caller's API key
pub const API_KEY_HEADER: &str = "x-api-key";

/// Check a presented API key against the configured one.
///
/// A missing server-side key is an infrastructure fault (the secret has not
/// been synced), reported separately from a bad or missing client key.
pub fn verify_api_key(configured: Option<&str>, presented: Option<&str>) -> Result<(), AppError> {
    let expected = configured.ok_or(AppError::ApiKeyNotConfigured)?;
    match presented {
        Some(key) if constant_time_eq(expected.as_bytes(), key.as_bytes()) => Ok(()),
        _ => Err(AppError::Unauthorized),
    }
}

/// Compare two byte strings without short-circuiting on the first difference.
///
/// Lengths are compared first, so the key length is observable through timing.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_time_eq() {
        assert!(constant_time_eq(b"secret", b"secret"));
        assert!(constant_time_eq(b"", b""));
        assert!(!constant_time_eq(b"secret", b"secreT"));
        assert!(!constant_time_eq(b"secret", b"Secret"));
        assert!(!constant_time_eq(b"secret", b"secret2"));
        assert!(!constant_time_eq(b"secret", b""));
    }

    #[test]
    fn test_not_configured() {
        assert!(matches!(
            verify_api_key(None, Some("anything")),
            Err(AppError::ApiKeyNotConfigured)
        ));
        assert!(matches!(
            verify_api_key(None, None),
            Err(AppError::ApiKeyNotConfigured)
        ));
    }

    #[test]
    fn test_missing_or_wrong_key() {
        assert!(matches!(
            verify_api_key(Some("s3cret"), None),
            Err(AppError::Unauthorized)
        ));
        assert!(matches!(
            verify_api_key(Some("s3cret"), Some("wrong!")),
            Err(AppError::Unauthorized)
        ));
        assert!(matches!(
            verify_api_key(Some("s3cret"), Some("")),
            Err(AppError::Unauthorized)
        ));
    }

    #[test]
    fn test_matching_key() {
        assert!(verify_api_key(Some("s3cret"), Some("s3cret")).is_ok());
    }
}
