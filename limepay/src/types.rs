//! Wire models of the LimePay API.
//!
//! All types serialize to JSON using camelCase field names, with resource
//! ids under `_id`. Every field defaults to its zero value when missing from
//! a response or sent as `null`, so partially populated objects still decode.
//!
//! Monetary amounts (`weiAmount`, `tokenAmount`, `gasPrice`) are carried as
//! decimal strings exactly as the API returns them.

use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};

/// Response of the connectivity self-test.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ping {
    /// `"ok"` when the API is reachable and the credentials are accepted.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub status: String,
}

/// A merchant account that shoppers and payments belong to.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Vendor {
    #[serde(rename = "_id")]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub id: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub name: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub email: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub country: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub city: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub first_name: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub last_name: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub address: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub phone: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub zip: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub state: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub vat_id: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub tax_id: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub payout_info: Vec<PayoutInfo>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub vendor_principal: VendorPrincipal,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub receipt_email: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub email_setup: EmailSetup,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub default_payout_currency: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub auto_receipt: bool,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub auto_invoice: bool,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub frequency: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub raw_logo: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub document_number_format: DocumentNumberFormat,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub invoice: InvoiceSettings,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub creation_date: String,
}

/// Legal representative of a vendor.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VendorPrincipal {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub first_name: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub last_name: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub address: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub city: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub country: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub zip: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub dob: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub personal_identification_number: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub driver_license_number: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub passport_number: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub email: String,
}

/// Numbering scheme of vendor documents (invoices, receipts).
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentNumberFormat {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub prefix: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub placeholder: String,
}

/// Vendor-wide invoice settings.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InvoiceSettings {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub document_footer: String,
}

/// Templates of the emails sent to shoppers.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailSetup {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub invoice: EmailTemplate,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub receipt: EmailTemplate,
}

/// Subject and header of one email template.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmailTemplate {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub subject: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub body_header_text: String,
}

/// Bank account a vendor is paid out to.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PayoutInfo {
    #[serde(rename = "_id")]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub id: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub bank_id: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub bank_name: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub country: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub city: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub address: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub zip: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub bank_account_id: i64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub iban: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub bank_account_type: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub bank_account_class: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub name_on_account: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub payout_type: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub base_currency: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub minimal_payout_amount: i64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub state: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub swift_bic: String,
}

/// A buyer registered under a vendor.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Shopper {
    /// Server-assigned id.
    #[serde(rename = "_id")]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub id: String,
    /// Id of the owning vendor. Filled in automatically on creation when empty.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub vendor: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub first_name: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub last_name: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub email: String,
    /// Ethereum address of the shopper's wallet.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub wallet_address: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub malicious_attempts: i64,
    #[serde(rename = "useLimePayWallet")]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub use_limepay_wallet: bool,
}

/// JSON wallet token generated for a shopper using the hosted wallet.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WalletToken {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub wallet_token: String,
}

/// A fiat or relayed payment.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Payment {
    #[serde(rename = "_id")]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub id: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub status: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub date: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub currency: String,
    /// Id of the paying shopper; keys the signature metadata lookup.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub shopper: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub vendor: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub items: Vec<Item>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub fund_tx_data: FundTxData,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub generic_transactions: Vec<GenericTransaction>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub payment_details: PaymentDetails,
    /// `FIAT_PAYMENT` or `RELAYED_PAYMENT`.
    #[serde(rename = "type")]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub kind: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub lime_token: String,
}

/// A line item of a payment.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Item {
    #[serde(rename = "_id")]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub id: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub description: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub line_amount: f32,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub quantity: i64,
}

/// Funding transaction of a payment.
///
/// `nonce` and `authorization_signature` are filled in by the SDK right
/// before submission, unless a signature is already present.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FundTxData {
    /// Amount of wei to fund the shopper's wallet with.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub wei_amount: String,
    /// Amount of tokens to fund the shopper's wallet with.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub token_amount: String,
    /// `0x`-prefixed hex signature authorizing the funding.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub authorization_signature: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub transaction_hash: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub status: String,
    /// Nonce the authorization signature was computed over.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub nonce: String,
}

/// A transaction relayed on behalf of the shopper after funding.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenericTransaction {
    #[serde(rename = "_id")]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub id: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub to: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub function_name: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub gas_price: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub gas_limit: i64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub signed_transaction: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub status: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub transaction_hash: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub function_params: Vec<FunctionParam>,
}

/// One argument of a [`GenericTransaction`] call.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FunctionParam {
    #[serde(rename = "_id")]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub id: String,
    /// Solidity type name, e.g. `uint256`.
    #[serde(rename = "type")]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub kind: String,
    pub value: serde_json::Value,
}

/// Amounts and card holder of a fiat payment.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PaymentDetails {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub tax_rate: f32,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub tax_amount: f32,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub base_amount: f32,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub total_amount: f32,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub card_holder: CardHolder,
}

/// Billing identity of the card used for a fiat payment.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CardHolder {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub vat_number: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub name: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub is_company: bool,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub country: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub zip: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub street: String,
}

/// Server-issued values an authorization signature is computed over.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SignatureMetadata {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub nonce: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub shopper_address: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub escrow_address: String,
}
