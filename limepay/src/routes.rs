//! Route table of the LimePay API.
//!
//! Each [`Endpoint`] pairs an HTTP method with a route template relative to
//! the environment base URL. Templates may carry a single `{id}` placeholder
//! which is substituted literally by [`Endpoint::path_for`].

/// HTTP method names used by the route table.
pub mod method {
    /// `GET`
    pub const GET: &str = "GET";
    /// `POST`
    pub const POST: &str = "POST";
    /// `PUT`
    pub const PUT: &str = "PUT";
    /// `PATCH`
    pub const PATCH: &str = "PATCH";
    /// `DELETE`
    pub const DELETE: &str = "DELETE";
}

/// Placeholder substituted by [`Endpoint::path_for`].
pub const ID_PLACEHOLDER: &str = "{id}";

/// A method and route template pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Endpoint {
    /// HTTP method name.
    pub method: &'static str,
    /// Route template, relative to the base URL.
    pub path: &'static str,
}

impl Endpoint {
    /// Creates an endpoint from a method name and a route template.
    #[must_use]
    pub const fn new(method: &'static str, path: &'static str) -> Self {
        Self { method, path }
    }

    /// Returns the route with `{id}` replaced by `id`.
    ///
    /// No escaping is applied; the id is inserted as given.
    #[must_use]
    pub fn path_for(&self, id: &str) -> String {
        self.path.replace(ID_PLACEHOLDER, id)
    }
}

/// Connectivity self-test.
pub const PING: Endpoint = Endpoint::new(method::GET, "/ping");

/// List all vendors of the account.
pub const GET_ALL_VENDORS: Endpoint = Endpoint::new(method::GET, "/vendors");

/// Register a shopper.
pub const CREATE_SHOPPER: Endpoint = Endpoint::new(method::POST, "/shoppers");
/// Fetch one shopper.
pub const GET_SHOPPER: Endpoint = Endpoint::new(method::GET, "/shoppers/{id}");
/// List all shoppers.
pub const GET_ALL_SHOPPERS: Endpoint = Endpoint::new(method::GET, "/shoppers");
/// Update a shopper.
pub const PATCH_SHOPPER: Endpoint = Endpoint::new(method::PATCH, "/shoppers/{id}");
/// Fetch the JSON wallet token generated for a shopper.
pub const GET_WALLET_TOKEN: Endpoint = Endpoint::new(method::GET, "/shoppers/{id}/walletToken");

/// Create a fiat payment.
pub const CREATE_FIAT_PAYMENT: Endpoint = Endpoint::new(method::POST, "/payments");
/// Create a relayed payment.
pub const CREATE_RELAYED_PAYMENT: Endpoint = Endpoint::new(method::POST, "/payments/relayed");
/// Fetch one payment.
pub const GET_PAYMENT: Endpoint = Endpoint::new(method::GET, "/payments/{id}");
/// List all payments.
pub const GET_ALL_PAYMENTS: Endpoint = Endpoint::new(method::GET, "/payments");
/// Email the invoice of a payment to the shopper.
pub const SEND_INVOICE: Endpoint = Endpoint::new(method::GET, "/payments/{id}/invoice");
/// Render the invoice of a payment.
pub const GET_INVOICE: Endpoint = Endpoint::new(method::GET, "/payments/{id}/invoice/preview");
/// Render the receipt of a payment.
pub const GET_RECEIPT: Endpoint = Endpoint::new(method::GET, "/payments/{id}/receipt");
/// Fetch nonce and addresses needed to sign a payment for a shopper.
pub const GET_SIGNATURE_METADATA: Endpoint =
    Endpoint::new(method::GET, "/payments/metadata?shopperId={id}");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_for_substitutes_placeholder() {
        assert_eq!(GET_SHOPPER.path_for("12345"), "/shoppers/12345");
        assert_eq!(GET_INVOICE.path_for("0"), "/payments/0/invoice/preview");
        assert_eq!(
            GET_SIGNATURE_METADATA.path_for("abc"),
            "/payments/metadata?shopperId=abc"
        );
    }

    #[test]
    fn test_path_for_without_placeholder_is_identity() {
        assert_eq!(GET_ALL_PAYMENTS.path_for("ignored"), "/payments");
    }

    #[test]
    fn test_path_for_is_literal() {
        assert_eq!(GET_PAYMENT.path_for("a b/c"), "/payments/a b/c");
    }

    #[test]
    fn test_send_invoice_is_get() {
        assert_eq!(SEND_INVOICE.method, method::GET);
        assert_eq!(CREATE_RELAYED_PAYMENT.method, method::POST);
        assert_eq!(PATCH_SHOPPER.method, method::PATCH);
    }
}
