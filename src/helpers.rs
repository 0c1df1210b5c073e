use reqwest::header;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};

pub const USER_AGENT_STRING: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/97.0.4692.71 Safari/537.36";

/// Builds the default client. No middleware is attached.
pub fn get_default_middleware(user_agent_string: &'static str) -> ClientWithMiddleware {
    let mut headers = header::HeaderMap::new();
    
    headers.insert(header::USER_AGENT, header::HeaderValue::from_static(user_agent_string));
    
    let client = reqwest::ClientBuilder::new()
        .default_headers(headers)
        .build()
        .unwrap_or_else(|error| {
            log::warn!("Error building client, falling back to defaults: {error}");
            reqwest::Client::new()
        });
    
    ClientBuilder::new(client).build()
}
