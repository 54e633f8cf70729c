#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Core types for the LimePay payments API.
//!
//! This crate holds the transport-agnostic pieces shared by the signer
//! (`limepay-evm`) and the HTTP client (`limepay-http`).
//!
//! # Modules
//!
//! - [`error`] - [`ClassifiedError`], the `{errorName, code, message}` triple
//!   returned by the API, plus the built-in errors raised locally
//! - [`routes`] - Static table of HTTP methods and route templates
//! - [`types`] - Wire models for shoppers, vendors, payments, and signature metadata

pub mod error;
pub mod routes;
// Model fields mirror the wire format one-to-one.
#[allow(missing_docs)]
pub mod types;

pub use error::ClassifiedError;
pub use routes::Endpoint;
