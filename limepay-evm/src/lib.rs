#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! secp256k1 authorization signatures for LimePay payments.
//!
//! Before a payment is submitted, the payer signs the funding parameters
//! (nonce, escrow and shopper addresses, token and wei amounts) with an
//! Ethereum private key. The escrow contract and the API verify that
//! signature, so the signing input has to be reproduced byte for byte.
//!
//! # Modules
//!
//! - [`signer`] - Keccak-256 over concatenated parameters, signed with a
//!   deterministic recoverable ECDSA signature
//! - [`authorization`] - Fiat and relayed parameter shapes behind the
//!   [`Authorizer`] trait

pub mod authorization;
pub mod signer;

pub use authorization::{AuthorizationError, Authorizer, FiatAuthorizer, RelayedAuthorizer};
pub use signer::{SignError, sign};
