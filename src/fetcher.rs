//! Fetching of inventories.

use crate::error::{Error, FetchError};
use crate::request::InventoryRequest;
use crate::response::InventoryResponse;
use crate::transport::Transport;

/// The default host inventories are fetched from.
pub const HOSTNAME: &str = "https://steamcommunity.com";

/// The body of a successful fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchedInventory {
    /// The body was an object and was decoded as an inventory.
    Inventory(InventoryResponse),
    /// The body was valid JSON but not an object e.g. `null`, which is sent for private
    /// inventories.
    Unexpected(serde_json::Value),
}

/// Fetches inventories over a [`Transport`]. Nothing is cached here.
#[derive(Debug, Clone)]
pub struct InventoryFetcher<T> {
    transport: T,
    hostname: String,
}

impl<T: Transport> InventoryFetcher<T> {
    /// Creates a new [`InventoryFetcher`] requesting inventories from `hostname`.
    pub fn new(transport: T, hostname: String) -> Self {
        Self {
            transport,
            hostname,
        }
    }
    
    /// The host inventories are fetched from.
    pub fn hostname(&self) -> &str {
        &self.hostname
    }
    
    /// Fetches an inventory.
    ///
    /// Fails with [`Error::Parameter`] if the app or context ID is zero, and with
    /// [`Error::Fetch`] if the request fails, the response has an error status, or the body
    /// cannot be decoded.
    pub async fn fetch(
        &self,
        request: &InventoryRequest,
    ) -> Result<FetchedInventory, Error> {
        request.validate()?;
        
        let url = request.url(&self.hostname)?;
        
        log::debug!("Fetching inventory {url}");
        
        let response = self.transport.get_url(url.as_str())
            .await
            .map_err(FetchError::Transport)?;
        
        if !response.status.is_success() {
            log::warn!("Inventory request for {} failed with status {}", request.identifier, response.status);
            return Err(FetchError::Http(response.status).into());
        }
        
        let fetched = parse_body(&response.body)?;
        
        if let FetchedInventory::Unexpected(value) = &fetched {
            log::debug!("Unexpected inventory body for {}: {value}", request.identifier);
        }
        
        Ok(fetched)
    }
}

/// Decodes a response body. Anything that is not a JSON object is returned as-is.
pub(crate) fn parse_body(body: &[u8]) -> Result<FetchedInventory, FetchError> {
    let value = serde_json::from_slice::<serde_json::Value>(body)?;
    
    if !value.is_object() {
        return Ok(FetchedInventory::Unexpected(value));
    }
    
    Ok(FetchedInventory::Inventory(serde_json::from_value(value)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize;
    use crate::transport::HttpResponse;
    use std::sync::Mutex;
    use bytes::Bytes;
    use reqwest::StatusCode;
    
    /// Responds with a fixed response and records requested URLs.
    struct FixedTransport {
        status: StatusCode,
        body: &'static str,
        urls: Mutex<Vec<String>>,
    }
    
    impl FixedTransport {
        fn new(status: StatusCode, body: &'static str) -> Self {
            Self {
                status,
                body,
                urls: Mutex::new(Vec::new()),
            }
        }
    }
    
    impl Transport for FixedTransport {
        async fn get_url(&self, url: &str) -> Result<HttpResponse, anyhow::Error> {
            self.urls.lock().unwrap().push(url.to_string());
            
            Ok(HttpResponse {
                status: self.status,
                body: Bytes::from_static(self.body.as_bytes()),
            })
        }
    }
    
    struct FailingTransport;
    
    impl Transport for FailingTransport {
        async fn get_url(&self, _url: &str) -> Result<HttpResponse, anyhow::Error> {
            Err(anyhow::anyhow!("connection refused"))
        }
    }
    
    fn request() -> InventoryRequest {
        InventoryRequest::new(normalize("STEAM_0:1:5").unwrap())
    }
    
    #[tokio::test]
    async fn fetches_inventory() {
        let transport = FixedTransport::new(StatusCode::OK, include_str!("response/fixtures/inventory_730.json"));
        let fetcher = InventoryFetcher::new(transport, HOSTNAME.into());
        let fetched = fetcher.fetch(&request()).await.unwrap();
        
        assert!(matches!(fetched, FetchedInventory::Inventory(ref inventory) if inventory.assets.len() == 4));
        assert_eq!(
            fetcher.transport.urls.lock().unwrap().as_slice(),
            ["https://steamcommunity.com/inventory/76561197960265735/730/2?l=english&tradable=1"],
        );
    }
    
    #[tokio::test]
    async fn non_object_body_is_unexpected() {
        let fetcher = InventoryFetcher::new(FixedTransport::new(StatusCode::OK, "null"), HOSTNAME.into());
        let fetched = fetcher.fetch(&request()).await.unwrap();
        
        assert_eq!(fetched, FetchedInventory::Unexpected(serde_json::Value::Null));
    }
    
    #[tokio::test]
    async fn invalid_body_is_decode_error() {
        let fetcher = InventoryFetcher::new(FixedTransport::new(StatusCode::OK, "<html>"), HOSTNAME.into());
        let error = fetcher.fetch(&request()).await.unwrap_err();
        
        assert!(matches!(error, Error::Fetch(ref error) if error.is_decode()));
    }
    
    #[tokio::test]
    async fn mistyped_body_is_decode_error() {
        let fetcher = InventoryFetcher::new(FixedTransport::new(StatusCode::OK, r#"{"assets":5}"#), HOSTNAME.into());
        let error = fetcher.fetch(&request()).await.unwrap_err();
        
        assert!(matches!(error, Error::Fetch(FetchError::Decode(_))));
    }
    
    #[tokio::test]
    async fn malformed_nested_fields_do_not_fail_the_fetch() {
        let body = r#"{"success":1,"assets":[],"descriptions":[{"classid":"1","instanceid":"2","tags":5,"descriptions":["junk"]},{"classid":"3","instanceid":"4","tags":[null]}]}"#;
        let fetcher = InventoryFetcher::new(FixedTransport::new(StatusCode::OK, body), HOSTNAME.into());
        let fetched = fetcher.fetch(&request()).await.unwrap();
        
        assert!(matches!(fetched, FetchedInventory::Inventory(ref inventory) if inventory.descriptions.len() == 2));
    }
    
    #[tokio::test]
    async fn error_status_is_transport_error() {
        let fetcher = InventoryFetcher::new(FixedTransport::new(StatusCode::FORBIDDEN, "null"), HOSTNAME.into());
        let error = fetcher.fetch(&request()).await.unwrap_err();
        
        assert!(matches!(error, Error::Fetch(FetchError::Http(StatusCode::FORBIDDEN))));
    }
    
    #[tokio::test]
    async fn transport_failure_is_transport_error() {
        let fetcher = InventoryFetcher::new(FailingTransport, HOSTNAME.into());
        let error = fetcher.fetch(&request()).await.unwrap_err();
        
        assert!(matches!(error, Error::Fetch(ref error) if error.is_transport()));
    }
    
    #[tokio::test]
    async fn invalid_parameters_skip_the_request() {
        let transport = FixedTransport::new(StatusCode::OK, "{}");
        let fetcher = InventoryFetcher::new(transport, HOSTNAME.into());
        let error = fetcher.fetch(&request().app(730, 0)).await.unwrap_err();
        
        assert!(matches!(error, Error::Parameter(_)));
        assert!(fetcher.transport.urls.lock().unwrap().is_empty());
    }
}
