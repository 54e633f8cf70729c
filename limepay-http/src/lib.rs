#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! HTTP client for the LimePay payments API.
//!
//! Every request goes through one [`Requester`], which authenticates with
//! HTTP Basic credentials, appends the route to the configured base endpoint,
//! and maps responses with a status of 400 or above to a classified
//! [`Error`]. Resource clients sit on top of it and [`LimePay`] bundles them.
//!
//! # Modules
//!
//! - [`requester`] - Request executor and response target shapes
//! - [`shoppers`] - Shopper creation, lookup, updates, and wallet tokens
//! - [`payments`] - Payment lookup and signed payment creation (fiat and relayed)
//! - [`connection`] - Connectivity self-test
//! - [`config`] - Endpoint, credentials, and timeout settings
//! - [`sdk`] - The [`LimePay`] facade
//!
//! # Feature Flags
//!
//! - `telemetry` - Emits a `tracing` span per request with its outcome

pub mod config;
pub mod connection;
pub mod error;
pub mod payments;
pub mod requester;
pub mod sdk;
pub mod shoppers;

pub use config::{ConfigError, RequesterConfig};
pub use connection::ConnectionClient;
pub use error::Error;
pub use payments::{
    FiatPaymentsClient, PaymentBackend, PaymentsClient, RelayedPaymentsClient, create_payment,
};
pub use requester::{HttpRequester, Json, JsonList, NO_BODY, Requester, ResponseTarget};
pub use sdk::LimePay;
pub use shoppers::ShoppersClient;
