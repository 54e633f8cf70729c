//! Classified errors of the LimePay API.
//!
//! The API reports failures as a JSON body of the form
//! `{"errorName": "...", "code": 1111, "message": "..."}`. The same triple is
//! used for the handful of errors the SDK raises itself before any request
//! is made (see [`ClassifiedError::signing_error`] and friends).

use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnError, serde_as};

/// Code of [`ClassifiedError::signing_error`].
pub const SIGNING_ERROR_CODE: i64 = 1011;

/// Code of [`ClassifiedError::invalid_token_and_wei_amount`].
pub const INVALID_TOKEN_AND_WEI_AMOUNT_CODE: i64 = 1017;

/// Code of [`ClassifiedError::invalid_wei_amount`].
pub const INVALID_WEI_AMOUNT_CODE: i64 = 1018;

/// Code of [`ClassifiedError::no_vendor`].
pub const NO_VENDOR_CODE: i64 = 1019;

/// A structured failure with a machine-readable name, a numeric code, and a
/// human-readable message.
///
/// Every field defaults to its zero value when absent, `null`, or of the
/// wrong type, so the fields that do decode are kept.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(default)]
#[error("{message}")]
pub struct ClassifiedError {
    /// Machine-readable error name, e.g. `AUTHORIZATION_ERROR`.
    #[serde(rename = "errorName")]
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub name: String,
    /// Numeric error code.
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub code: i64,
    /// Human-readable description.
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub message: String,
}

impl ClassifiedError {
    /// Creates a new classified error.
    #[must_use]
    pub fn new(name: impl Into<String>, code: i64, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code,
            message: message.into(),
        }
    }

    /// Decodes an error body returned by the API.
    ///
    /// Malformed or unexpected bodies yield a zero-valued error instead of a
    /// decode failure, so the caller still learns that the request failed.
    #[must_use]
    pub fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }

    /// The authorization signature could not be computed.
    #[must_use]
    pub fn signing_error() -> Self {
        Self::new(
            "SIGNING_ERROR",
            SIGNING_ERROR_CODE,
            "Could not sign authorization signature. Invalid parameters provided.",
        )
    }

    /// A fiat payment was submitted without a wei amount.
    #[must_use]
    pub fn invalid_token_and_wei_amount() -> Self {
        Self::new(
            "VALIDATION_ERROR",
            INVALID_TOKEN_AND_WEI_AMOUNT_CODE,
            "Invalid fundTxData object provided. tokenAmount or weiAmount cannot be undefined",
        )
    }

    /// A relayed payment was submitted without a wei amount.
    #[must_use]
    pub fn invalid_wei_amount() -> Self {
        Self::new(
            "VALIDATION_ERROR",
            INVALID_WEI_AMOUNT_CODE,
            "Invalid fundTxData object provided. weiAmount cannot be undefined",
        )
    }

    /// A shopper was created without a vendor and the account has none.
    #[must_use]
    pub fn no_vendor() -> Self {
        Self::new(
            "NO_VENDOR_ERROR",
            NO_VENDOR_CODE,
            "You are required to have vendor in order to perform this operation",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_body_reads_wire_names() {
        let body = br#"{"errorName":"AUTHORIZATION_ERROR","code":1111,"message":"Unauthorized request"}"#;
        let err = ClassifiedError::from_body(body);
        assert_eq!(err.name, "AUTHORIZATION_ERROR");
        assert_eq!(err.code, 1111);
        assert_eq!(err.message, "Unauthorized request");
    }

    #[test]
    fn test_from_body_tolerates_malformed_json() {
        assert_eq!(ClassifiedError::from_body(b"<html>"), ClassifiedError::default());
        assert_eq!(
            ClassifiedError::from_body(br#""Unauthorized request""#),
            ClassifiedError::default()
        );
        assert_eq!(ClassifiedError::from_body(b""), ClassifiedError::default());
    }

    #[test]
    fn test_from_body_partial_fields() {
        let err = ClassifiedError::from_body(br#"{"code":5001}"#);
        assert_eq!(err.code, 5001);
        assert!(err.name.is_empty());
        assert!(err.message.is_empty());
    }

    #[test]
    fn test_from_body_keeps_fields_beside_null_code() {
        let err = ClassifiedError::from_body(
            br#"{"errorName":"NOT_FOUND","code":null,"message":"Shopper not found"}"#,
        );
        assert_eq!(err.name, "NOT_FOUND");
        assert_eq!(err.code, 0);
        assert_eq!(err.message, "Shopper not found");
    }

    #[test]
    fn test_from_body_keeps_fields_beside_mistyped_values() {
        let err = ClassifiedError::from_body(
            br#"{"errorName":"NOT_FOUND","code":"404","message":["Shopper not found"]}"#,
        );
        assert_eq!(err.name, "NOT_FOUND");
        assert_eq!(err.code, 0);
        assert!(err.message.is_empty());
    }

    #[test]
    fn test_display_is_message() {
        assert_eq!(
            ClassifiedError::no_vendor().to_string(),
            "You are required to have vendor in order to perform this operation"
        );
    }

    #[test]
    fn test_builtin_codes() {
        assert_eq!(ClassifiedError::signing_error().code, 1011);
        assert_eq!(ClassifiedError::invalid_token_and_wei_amount().code, 1017);
        assert_eq!(ClassifiedError::invalid_wei_amount().code, 1018);
        assert_eq!(ClassifiedError::no_vendor().code, 1019);
        assert_eq!(ClassifiedError::invalid_wei_amount().name, "VALIDATION_ERROR");
    }

    #[test]
    fn test_serialize_uses_error_name() {
        let json = serde_json::to_value(ClassifiedError::signing_error()).unwrap();
        assert_eq!(json["errorName"], "SIGNING_ERROR");
        assert_eq!(json["code"], 1011);
    }
}
