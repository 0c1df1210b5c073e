//! The HTTP layer used to fetch inventories.

use std::future::Future;
use bytes::Bytes;
use reqwest::StatusCode;
use reqwest_middleware::ClientWithMiddleware;

/// A response to a GET request.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// The HTTP status.
    pub status: StatusCode,
    /// The response body.
    pub body: Bytes,
}

/// Performs GET requests. Timeouts, retries and rate limiting are left to the implementation.
pub trait Transport {
    /// Sends a GET request to `url`. Errors are for failures to complete the request; responses
    /// with error statuses are returned as responses.
    fn get_url(&self, url: &str) -> impl Future<Output = Result<HttpResponse, anyhow::Error>> + Send;
}

impl Transport for ClientWithMiddleware {
    async fn get_url(&self, url: &str) -> Result<HttpResponse, anyhow::Error> {
        let response = ClientWithMiddleware::get(self, url)
            .send()
            .await?;
        let status = response.status();
        let body = response.bytes().await?;
        
        Ok(HttpResponse {
            status,
            body,
        })
    }
}

impl Transport for reqwest::Client {
    async fn get_url(&self, url: &str) -> Result<HttpResponse, anyhow::Error> {
        let response = reqwest::Client::get(self, url)
            .send()
            .await?;
        let status = response.status();
        let body = response.bytes().await?;
        
        Ok(HttpResponse {
            status,
            body,
        })
    }
}
