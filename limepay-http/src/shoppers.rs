//! Shopper management.

use limepay::ClassifiedError;
use limepay::routes;
use limepay::types::{Shopper, Vendor, WalletToken};

use crate::error::Error;
use crate::requester::{Json, JsonList, NO_BODY, Requester};

/// Client for the `/shoppers` resource.
#[derive(Debug, Clone)]
pub struct ShoppersClient<R> {
    requester: R,
}

impl<R: Requester> ShoppersClient<R> {
    /// Creates a client over `requester`.
    #[must_use]
    pub const fn new(requester: R) -> Self {
        Self { requester }
    }

    /// Registers a shopper.
    ///
    /// When `shopper.vendor` is empty it is set to the first vendor of the
    /// account before the shopper is posted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] with `NO_VENDOR_ERROR` (1019) if the
    /// vendor must be looked up and the account has none; nothing is posted
    /// in that case. Otherwise returns any request error.
    pub async fn create(&self, mut shopper: Shopper) -> Result<Shopper, Error> {
        if shopper.vendor.is_empty() {
            let vendor = self
                .vendors()
                .await?
                .into_iter()
                .next()
                .ok_or_else(|| Error::Validation(ClassifiedError::no_vendor()))?;
            shopper.vendor = vendor.id;
        }
        let Json(created): Json<Shopper> = self
            .requester
            .execute(
                routes::CREATE_SHOPPER.method,
                routes::CREATE_SHOPPER.path,
                Some(&shopper),
            )
            .await?;
        Ok(created)
    }

    /// Fetches a shopper by id.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails.
    pub async fn get(&self, shopper_id: &str) -> Result<Shopper, Error> {
        let route = routes::GET_SHOPPER.path_for(shopper_id);
        let Json(shopper): Json<Shopper> = self
            .requester
            .execute(routes::GET_SHOPPER.method, &route, NO_BODY)
            .await?;
        Ok(shopper)
    }

    /// Lists every shopper of the account.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails.
    pub async fn list(&self) -> Result<Vec<Shopper>, Error> {
        let JsonList(shoppers): JsonList<Shopper> = self
            .requester
            .execute(routes::GET_ALL_SHOPPERS.method, routes::GET_ALL_SHOPPERS.path, NO_BODY)
            .await?;
        Ok(shoppers)
    }

    /// Applies the fields of `shopper` to an existing shopper.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails.
    pub async fn update(&self, shopper_id: &str, shopper: &Shopper) -> Result<Shopper, Error> {
        let route = routes::PATCH_SHOPPER.path_for(shopper_id);
        let Json(updated): Json<Shopper> = self
            .requester
            .execute(routes::PATCH_SHOPPER.method, &route, Some(shopper))
            .await?;
        Ok(updated)
    }

    /// Generates a wallet token for a shopper using the hosted wallet.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails.
    pub async fn wallet_token(&self, shopper_id: &str) -> Result<WalletToken, Error> {
        let route = routes::GET_WALLET_TOKEN.path_for(shopper_id);
        let Json(token): Json<WalletToken> = self
            .requester
            .execute(routes::GET_WALLET_TOKEN.method, &route, NO_BODY)
            .await?;
        Ok(token)
    }

    async fn vendors(&self) -> Result<Vec<Vendor>, Error> {
        let JsonList(vendors): JsonList<Vendor> = self
            .requester
            .execute(routes::GET_ALL_VENDORS.method, routes::GET_ALL_VENDORS.path, NO_BODY)
            .await?;
        Ok(vendors)
    }
}
