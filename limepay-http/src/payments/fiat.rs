use limepay::routes;
use limepay::types::Payment;
use limepay_evm::FiatAuthorizer;

use super::{PaymentsClient, create_payment};
use crate::error::Error;
use crate::requester::{NO_BODY, Requester};

/// Client for card-funded payments and their documents.
#[derive(Debug, Clone)]
pub struct FiatPaymentsClient<R> {
    payments: PaymentsClient<R>,
}

impl<R: Requester> FiatPaymentsClient<R> {
    /// Creates a client over `requester`.
    #[must_use]
    pub const fn new(requester: R) -> Self {
        Self {
            payments: PaymentsClient::new(requester),
        }
    }

    /// Fetches a payment by id.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails.
    pub async fn get(&self, payment_id: &str) -> Result<Payment, Error> {
        self.payments.get(payment_id).await
    }

    /// Lists every payment of the account.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails.
    pub async fn list(&self) -> Result<Vec<Payment>, Error> {
        self.payments.list().await
    }

    /// Signs `payment` with `private_key` if it carries no authorization
    /// signature yet, then creates it.
    ///
    /// The signed token amount defaults to `"0"` when empty.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] with code 1017 if the wei amount is
    /// empty, [`Error::Signing`] if the key is unusable, or any request error.
    pub async fn create(&self, payment: Payment, private_key: &str) -> Result<Payment, Error> {
        create_payment(
            &self.payments,
            &FiatAuthorizer,
            routes::CREATE_FIAT_PAYMENT,
            payment,
            private_key,
        )
        .await
    }

    /// Renders the invoice of a payment as HTML without sending it.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails.
    pub async fn invoice(&self, payment_id: &str) -> Result<String, Error> {
        let route = routes::GET_INVOICE.path_for(payment_id);
        self.payments
            .requester()
            .execute(routes::GET_INVOICE.method, &route, NO_BODY)
            .await
    }

    /// Emails the invoice of a payment to its shopper.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails.
    pub async fn send_invoice(&self, payment_id: &str) -> Result<(), Error> {
        let route = routes::SEND_INVOICE.path_for(payment_id);
        self.payments
            .requester()
            .execute(routes::SEND_INVOICE.method, &route, NO_BODY)
            .await
    }

    /// Renders the receipt of a payment as HTML.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails.
    pub async fn receipt(&self, payment_id: &str) -> Result<String, Error> {
        let route = routes::GET_RECEIPT.path_for(payment_id);
        self.payments
            .requester()
            .execute(routes::GET_RECEIPT.method, &route, NO_BODY)
            .await
    }
}
