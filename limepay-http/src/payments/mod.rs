//! Payment retrieval and creation.
//!
//! Creating a payment needs an authorization signature over server-issued
//! metadata. [`create_payment`] drives that flow:
//!
//! 1. If `fundTxData.authorizationSignature` is already set, the payment is
//!    submitted as is.
//! 2. Otherwise the signature metadata of the payment's shopper is fetched,
//! 3. the flavor's [`Authorizer`] signs it with the caller's private key,
//! 4. and the nonce and signature are written into `fundTxData` before the
//!    payment is submitted.
//!
//! The first failure ends the flow and no payment is returned.
//!
//! [`FiatPaymentsClient`] and [`RelayedPaymentsClient`] wrap this flow with
//! their flavor's authorizer and creation route.

mod fiat;
mod relayed;

pub use fiat::FiatPaymentsClient;
pub use relayed::RelayedPaymentsClient;

use std::future::Future;

use limepay::Endpoint;
use limepay::routes;
use limepay::types::{Payment, SignatureMetadata};
use limepay_evm::Authorizer;

use crate::error::Error;
use crate::requester::{Json, JsonList, NO_BODY, Requester};

/// Remote operations payment creation depends on.
pub trait PaymentBackend: Send + Sync {
    /// Fetches the values to sign for `shopper_id`.
    fn signature_metadata(
        &self,
        shopper_id: &str,
    ) -> impl Future<Output = Result<SignatureMetadata, Error>> + Send;

    /// Posts `payment` to `endpoint` and returns the created payment.
    fn submit(
        &self,
        endpoint: Endpoint,
        payment: &Payment,
    ) -> impl Future<Output = Result<Payment, Error>> + Send;
}

/// Signs `payment` if needed and submits it to `endpoint`.
///
/// An existing authorization signature is left untouched, along with the
/// nonce, and no metadata is fetched.
///
/// # Errors
///
/// Returns the first error of the metadata fetch, the authorizer (see
/// [`Error::Validation`] and [`Error::Signing`]), or the submission.
pub async fn create_payment<P, A>(
    backend: &P,
    authorizer: &A,
    endpoint: Endpoint,
    mut payment: Payment,
    private_key: &str,
) -> Result<Payment, Error>
where
    P: PaymentBackend,
    A: Authorizer,
{
    if payment.fund_tx_data.authorization_signature.is_empty() {
        let metadata = backend.signature_metadata(&payment.shopper).await?;
        let signature = authorizer.authorize(private_key, &metadata, &payment.fund_tx_data)?;
        payment.fund_tx_data.nonce = metadata.nonce;
        payment.fund_tx_data.authorization_signature = signature;
    }
    backend.submit(endpoint, &payment).await
}

/// Client for the `/payments` resource, shared by both payment flavors.
#[derive(Debug, Clone)]
pub struct PaymentsClient<R> {
    requester: R,
}

impl<R: Requester> PaymentsClient<R> {
    /// Creates a client over `requester`.
    #[must_use]
    pub const fn new(requester: R) -> Self {
        Self { requester }
    }

    pub(crate) const fn requester(&self) -> &R {
        &self.requester
    }

    /// Fetches a payment by id.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails.
    pub async fn get(&self, payment_id: &str) -> Result<Payment, Error> {
        let route = routes::GET_PAYMENT.path_for(payment_id);
        let Json(payment): Json<Payment> = self
            .requester
            .execute(routes::GET_PAYMENT.method, &route, NO_BODY)
            .await?;
        Ok(payment)
    }

    /// Lists every payment of the account.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails.
    pub async fn list(&self) -> Result<Vec<Payment>, Error> {
        let JsonList(payments): JsonList<Payment> = self
            .requester
            .execute(routes::GET_ALL_PAYMENTS.method, routes::GET_ALL_PAYMENTS.path, NO_BODY)
            .await?;
        Ok(payments)
    }

    /// Fetches the nonce and addresses a payment of `shopper_id` must sign.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails.
    pub async fn signature_metadata(&self, shopper_id: &str) -> Result<SignatureMetadata, Error> {
        let route = routes::GET_SIGNATURE_METADATA.path_for(shopper_id);
        let Json(metadata): Json<SignatureMetadata> = self
            .requester
            .execute(routes::GET_SIGNATURE_METADATA.method, &route, NO_BODY)
            .await?;
        Ok(metadata)
    }

    /// Posts a fully signed payment to `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails.
    pub async fn submit(&self, endpoint: Endpoint, payment: &Payment) -> Result<Payment, Error> {
        let Json(created): Json<Payment> = self
            .requester
            .execute(endpoint.method, endpoint.path, Some(payment))
            .await?;
        Ok(created)
    }
}

impl<R: Requester> PaymentBackend for PaymentsClient<R> {
    async fn signature_metadata(&self, shopper_id: &str) -> Result<SignatureMetadata, Error> {
        PaymentsClient::signature_metadata(self, shopper_id).await
    }

    async fn submit(&self, endpoint: Endpoint, payment: &Payment) -> Result<Payment, Error> {
        PaymentsClient::submit(self, endpoint, payment).await
    }
}
