//! The [`LimePay`] facade.

use crate::config::RequesterConfig;
use crate::connection::ConnectionClient;
use crate::error::Error;
use crate::payments::{FiatPaymentsClient, PaymentsClient, RelayedPaymentsClient};
use crate::requester::{HttpRequester, Requester};
use crate::shoppers::ShoppersClient;

/// Entry point bundling every resource client over one shared requester.
///
/// ```no_run
/// # async fn run() -> Result<(), limepay_http::Error> {
/// use limepay_http::{LimePay, RequesterConfig};
///
/// let sdk = LimePay::connect(RequesterConfig::new(
///     "https://api.limepay.io/v1",
///     "api-key",
///     "api-secret",
/// ))
/// .await?;
/// let shoppers = sdk.shoppers.list().await?;
/// # let _ = shoppers;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct LimePay<R = HttpRequester> {
    /// Connectivity self-test.
    pub connection: ConnectionClient<R>,
    /// Shopper management.
    pub shoppers: ShoppersClient<R>,
    /// Payment retrieval.
    pub payments: PaymentsClient<R>,
    /// Card-funded payments, invoices, and receipts.
    pub fiat_payments: FiatPaymentsClient<R>,
    /// Relayed payments.
    pub relayed_payments: RelayedPaymentsClient<R>,
}

impl LimePay<HttpRequester> {
    /// Builds the HTTP requester from `config` and checks the connection
    /// before returning the facade.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the requester cannot be built or the self-test
    /// (`GET /ping`) fails. No facade is returned in that case.
    pub async fn connect(config: RequesterConfig) -> Result<Self, Error> {
        let requester = HttpRequester::new(config)?;
        ConnectionClient::new(requester.clone()).test().await?;
        Ok(Self::with_requester(requester))
    }
}

impl<R: Requester + Clone> LimePay<R> {
    /// Wires every client to `requester` without checking the connection.
    #[must_use]
    pub fn with_requester(requester: R) -> Self {
        Self {
            connection: ConnectionClient::new(requester.clone()),
            shoppers: ShoppersClient::new(requester.clone()),
            payments: PaymentsClient::new(requester.clone()),
            fiat_payments: FiatPaymentsClient::new(requester.clone()),
            relayed_payments: RelayedPaymentsClient::new(requester),
        }
    }
}
