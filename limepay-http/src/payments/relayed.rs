use limepay::routes;
use limepay::types::Payment;
use limepay_evm::RelayedAuthorizer;

use super::{PaymentsClient, create_payment};
use crate::error::Error;
use crate::requester::Requester;

/// Client for payments relayed on behalf of the shopper.
#[derive(Debug, Clone)]
pub struct RelayedPaymentsClient<R> {
    payments: PaymentsClient<R>,
}

impl<R: Requester> RelayedPaymentsClient<R> {
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
    /// # Errors
    ///
    /// Returns [`Error::Validation`] with code 1018 if the wei amount is
    /// empty, [`Error::Signing`] if the key is unusable, or any request error.
    pub async fn create(&self, payment: Payment, private_key: &str) -> Result<Payment, Error> {
        create_payment(
            &self.payments,
            &RelayedAuthorizer,
            routes::CREATE_RELAYED_PAYMENT,
            payment,
            private_key,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HttpRequester, RequesterConfig};
    use limepay::types::FundTxData;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const PRIVATE_KEY: &str = "d723d3cdf932464de15845c0719ca13ce15e64c83625d86ddbfc217bd2ac5f5a";

    fn client(server: &MockServer) -> RelayedPaymentsClient<HttpRequester> {
        let requester =
            HttpRequester::new(RequesterConfig::new(server.uri(), "key", "secret")).unwrap();
        RelayedPaymentsClient::new(requester)
    }

    fn payment(wei_amount: &str) -> Payment {
        Payment {
            shopper: "shopper1".into(),
            fund_tx_data: FundTxData {
                wei_amount: wei_amount.into(),
                ..FundTxData::default()
            },
            ..Payment::default()
        }
    }

    async fn mount_metadata(server: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/payments/metadata"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "nonce": "3",
                "shopperAddress": "0x123",
                "escrowAddress": "0x321"
            })))
            .expect(1)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_create_posts_to_relayed_route() {
        let server = MockServer::start().await;
        mount_metadata(&server).await;
        let expected = limepay_evm::sign(
            PRIVATE_KEY,
            &limepay_evm::authorization::RELAYED_SIGNATURE_TYPES,
            &["3", "0x321", "0x123", "", "60000000000000000"],
        )
        .unwrap();
        Mock::given(method("POST"))
            .and(path("/payments/relayed"))
            .and(body_partial_json(json!({
                "fundTxData": { "nonce": "3", "authorizationSignature": expected }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "_id": "relayed1",
                "type": "RELAYED_PAYMENT"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let created = client(&server)
            .create(payment("60000000000000000"), PRIVATE_KEY)
            .await
            .unwrap();
        assert_eq!(created.id, "relayed1");
        assert_eq!(created.kind, "RELAYED_PAYMENT");
    }

    #[tokio::test]
    async fn test_create_without_wei_amount() {
        let server = MockServer::start().await;
        mount_metadata(&server).await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let err = client(&server)
            .create(payment(""), PRIVATE_KEY)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(err.classified().map(|e| e.code), Some(1018));
    }

    #[tokio::test]
    async fn test_get_delegates_to_payments() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/payments/relayed1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "_id": "relayed1" })))
            .mount(&server)
            .await;

        let payment = client(&server).get("relayed1").await.unwrap();
        assert_eq!(payment.id, "relayed1");
    }
}
