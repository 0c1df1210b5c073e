use reqwest::StatusCode;

/// Any error that can occur while loading an inventory.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{}", .0)]
    Identifier(#[from] IdentifierError),
    #[error("Invalid parameter: {}", .0)]
    Parameter(&'static str),
    #[error("{}", .0)]
    Fetch(#[from] FetchError),
    #[error("Error building request URL: {}", .0)]
    Url(#[from] url::ParseError),
}

/// The broad category of an [`Error`].
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ErrorKind {
    /// The identifier could not be converted into its canonical form.
    MalformedIdentifier,
    /// A request parameter was invalid. This is a caller error.
    InvalidParameter,
    /// The inventory could not be fetched or decoded.
    FetchFailed,
}

impl Error {
    /// The category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Identifier(_) => ErrorKind::MalformedIdentifier,
            Self::Parameter(_) |
            Self::Url(_) => ErrorKind::InvalidParameter,
            Self::Fetch(_) => ErrorKind::FetchFailed,
        }
    }
}

/// An error converting an identifier into its canonical form.
#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone)]
pub enum IdentifierError {
    #[error("Malformed identifier: empty")]
    Empty,
    #[error("Malformed identifier: expected 3 parts separated by `:`, got {}", .0)]
    WrongPartCount(usize),
    #[error("Malformed identifier: `{}` is not a number", .0)]
    InvalidPart(String),
    #[error("Malformed identifier: value does not fit in 64 bits")]
    Overflow,
}

/// An error fetching an inventory.
#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("Request error: {}", .0)]
    Transport(anyhow::Error),
    #[error("Error {}", .0)]
    Http(StatusCode),
    #[error("Error parsing response: {}", .0)]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// Whether the request itself failed. These are usually worth retrying.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Http(_))
    }
    
    /// Whether the response body could not be decoded.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn categorizes_errors() {
        let error = Error::from(IdentifierError::WrongPartCount(2));
        
        assert_eq!(error.kind(), ErrorKind::MalformedIdentifier);
        assert_eq!(Error::Parameter("appid").kind(), ErrorKind::InvalidParameter);
        
        let error = Error::from(FetchError::Http(StatusCode::FORBIDDEN));
        
        assert_eq!(error.kind(), ErrorKind::FetchFailed);
    }
    
    #[test]
    fn distinguishes_transport_from_decode() {
        let decode = FetchError::from(serde_json::from_str::<u32>("{").unwrap_err());
        let transport = FetchError::Transport(anyhow::anyhow!("connection reset"));
        
        assert!(decode.is_decode());
        assert!(!decode.is_transport());
        assert!(transport.is_transport());
        assert!(FetchError::Http(StatusCode::TOO_MANY_REQUESTS).is_transport());
    }
}
