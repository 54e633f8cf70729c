//! Authorization signatures for funding a payment.
//!
//! A payment's [`FundTxData`] must carry a signature proving that the payer
//! authorized the escrow to fund the shopper's wallet. The signed parameters
//! depend on the payment flavor:
//!
//! | Flavor  | Types                                          | Values                                                     |
//! |---------|------------------------------------------------|------------------------------------------------------------|
//! | Fiat    | `uint256, address, address, uint256, uint256`  | `nonce, escrow, shopper, tokenAmount (or "0"), weiAmount`  |
//! | Relayed | `uint256, address, address, uint256`           | `nonce, escrow, shopper, "", weiAmount`                    |
//!
//! The relayed flavor declares four types but passes five values with an
//! empty fourth slot. The verifying service expects exactly this input.

use limepay::ClassifiedError;
use limepay::types::{FundTxData, SignatureMetadata};

use crate::signer::{SignError, sign};

/// Parameter types signed for a fiat payment.
pub const FIAT_SIGNATURE_TYPES: [&str; 5] = ["uint256", "address", "address", "uint256", "uint256"];

/// Parameter types signed for a relayed payment.
pub const RELAYED_SIGNATURE_TYPES: [&str; 4] = ["uint256", "address", "address", "uint256"];

/// Token amount signed for a fiat payment that carries none.
pub const DEFAULT_TOKEN_AMOUNT: &str = "0";

/// Errors that can occur while computing an authorization signature.
#[derive(Debug, thiserror::Error)]
pub enum AuthorizationError {
    /// The funding data is incomplete. Raised before any signing.
    #[error("{0}")]
    Validation(ClassifiedError),

    /// The signature could not be computed.
    #[error("{}", ClassifiedError::signing_error().message)]
    Signing(#[source] SignError),
}

impl AuthorizationError {
    /// Returns the classified error reported for this failure.
    ///
    /// All signing failures collapse to `SIGNING_ERROR` (1011).
    #[must_use]
    pub fn classified(&self) -> ClassifiedError {
        match self {
            Self::Validation(err) => err.clone(),
            Self::Signing(_) => ClassifiedError::signing_error(),
        }
    }
}

/// Computes the authorization signature of a payment flavor.
pub trait Authorizer: Send + Sync {
    /// Signs `fund_tx` against the server-issued `metadata` with `private_key`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthorizationError::Validation`] if `fund_tx` lacks a wei
    /// amount, or [`AuthorizationError::Signing`] if signing fails.
    fn authorize(
        &self,
        private_key: &str,
        metadata: &SignatureMetadata,
        fund_tx: &FundTxData,
    ) -> Result<String, AuthorizationError>;
}

/// [`Authorizer`] for fiat payments.
#[derive(Debug, Clone, Copy, Default)]
pub struct FiatAuthorizer;

impl Authorizer for FiatAuthorizer {
    fn authorize(
        &self,
        private_key: &str,
        metadata: &SignatureMetadata,
        fund_tx: &FundTxData,
    ) -> Result<String, AuthorizationError> {
        if fund_tx.wei_amount.is_empty() {
            return Err(AuthorizationError::Validation(
                ClassifiedError::invalid_token_and_wei_amount(),
            ));
        }
        let token_amount = if fund_tx.token_amount.is_empty() {
            DEFAULT_TOKEN_AMOUNT
        } else {
            fund_tx.token_amount.as_str()
        };
        let values = [
            metadata.nonce.as_str(),
            metadata.escrow_address.as_str(),
            metadata.shopper_address.as_str(),
            token_amount,
            fund_tx.wei_amount.as_str(),
        ];
        sign(private_key, &FIAT_SIGNATURE_TYPES, &values).map_err(AuthorizationError::Signing)
    }
}

/// [`Authorizer`] for relayed payments.
#[derive(Debug, Clone, Copy, Default)]
pub struct RelayedAuthorizer;

impl Authorizer for RelayedAuthorizer {
    fn authorize(
        &self,
        private_key: &str,
        metadata: &SignatureMetadata,
        fund_tx: &FundTxData,
    ) -> Result<String, AuthorizationError> {
        if fund_tx.wei_amount.is_empty() {
            return Err(AuthorizationError::Validation(
                ClassifiedError::invalid_wei_amount(),
            ));
        }
        let values = [
            metadata.nonce.as_str(),
            metadata.escrow_address.as_str(),
            metadata.shopper_address.as_str(),
            "",
            fund_tx.wei_amount.as_str(),
        ];
        sign(private_key, &RELAYED_SIGNATURE_TYPES, &values).map_err(AuthorizationError::Signing)
    }
}
