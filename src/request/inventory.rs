use crate::identifier::Identifier;
use crate::enums::Language;
use crate::error::Error;
use crate::types::{AppId, ContextId, DEFAULT_APPID, DEFAULT_CONTEXTID};
use url::Url;

/// Parameters for fetching a user's inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryRequest {
    /// The owner of the inventory.
    pub identifier: Identifier,
    /// App ID of inventory.
    pub appid: AppId,
    /// Context ID of inventory.
    pub contextid: ContextId,
    /// The language to use for descriptions.
    pub language: Language,
}

impl InventoryRequest {
    /// Creates a new [`InventoryRequest`] for the default app (730) and context (2) with
    /// descriptions in English.
    pub fn new(identifier: Identifier) -> Self {
        Self {
            identifier,
            appid: DEFAULT_APPID,
            contextid: DEFAULT_CONTEXTID,
            language: Language::English,
        }
    }
    
    /// Sets the app and context.
    pub fn app(mut self, appid: AppId, contextid: ContextId) -> Self {
        self.appid = appid;
        self.contextid = contextid;
        self
    }
    
    /// Sets the language for descriptions.
    pub fn language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }
    
    /// Checks that the app and context IDs are positive.
    pub fn validate(&self) -> Result<(), Error> {
        if self.appid == 0 {
            return Err(Error::Parameter("appid must be a positive number"));
        }
        
        if self.contextid == 0 {
            return Err(Error::Parameter("contextid must be a positive number"));
        }
        
        Ok(())
    }
    
    /// Builds the URL for this request against `hostname` e.g. `https://steamcommunity.com`.
    pub fn url(&self, hostname: &str) -> Result<Url, Error> {
        let mut url = Url::parse(hostname)?;
        let appid = self.appid.to_string();
        let contextid = self.contextid.to_string();
        
        url.path_segments_mut()
            .map_err(|_| Error::Parameter("hostname cannot be a base URL"))?
            .pop_if_empty()
            .extend(&[
                "inventory",
                self.identifier.as_str(),
                appid.as_str(),
                contextid.as_str(),
            ]);
        url.query_pairs_mut()
            .append_pair("l", self.language.api_language_code())
            .append_pair("tradable", "1");
        
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize;
    
    fn request() -> InventoryRequest {
        InventoryRequest::new(normalize("76561198233097000").unwrap())
    }
    
    #[test]
    fn builds_url() {
        let url = request().url("https://steamcommunity.com").unwrap();
        
        assert_eq!(
            url.as_str(),
            "https://steamcommunity.com/inventory/76561198233097000/730/2?l=english&tradable=1",
        );
    }
    
    #[test]
    fn builds_url_with_app_and_language() {
        let url = request()
            .app(440, 2)
            .language(Language::German)
            .url("http://127.0.0.1:8080/")
            .unwrap();
        
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:8080/inventory/76561198233097000/440/2?l=german&tradable=1",
        );
    }
    
    #[test]
    fn rejects_zero_ids() {
        assert!(request().validate().is_ok());
        assert!(matches!(request().app(0, 2).validate(), Err(Error::Parameter(_))));
        assert!(matches!(request().app(730, 0).validate(), Err(Error::Parameter(_))));
    }
    
    #[test]
    fn rejects_invalid_hostname() {
        assert!(matches!(request().url("not a url"), Err(Error::Url(_))));
    }
}
