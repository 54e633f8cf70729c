//! Connectivity self-test.

use limepay::routes;
use limepay::types::Ping;

use crate::error::Error;
use crate::requester::{Json, NO_BODY, Requester};

/// Client for `GET /ping`.
#[derive(Debug, Clone)]
pub struct ConnectionClient<R> {
    requester: R,
}

impl<R: Requester> ConnectionClient<R> {
    /// Creates a client over `requester`.
    #[must_use]
    pub const fn new(requester: R) -> Self {
        Self { requester }
    }

    /// Checks that the API is reachable and accepts the credentials.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails or the credentials are rejected.
    pub async fn test(&self) -> Result<Ping, Error> {
        let Json(ping): Json<Ping> = self
            .requester
            .execute(routes::PING.method, routes::PING.path, NO_BODY)
            .await?;
        Ok(ping)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HttpRequester, RequesterConfig};
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_ping() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ping"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "ok" })))
            .expect(1)
            .mount(&server)
            .await;

        let requester =
            HttpRequester::new(RequesterConfig::new(server.uri(), "key", "secret")).unwrap();
        let ping = ConnectionClient::new(requester).test().await.unwrap();
        assert_eq!(ping.status, "ok");
    }
}
