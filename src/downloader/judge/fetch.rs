extern crate async_trait;
extern crate reqwest;

use async_trait::async_trait;
use reqwest::StatusCode;
use std::{error::Error as StdError, fmt, result::Result as StdResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Class {
    Client,
    Server,
    /// A final status outside 2xx, 4xx and 5xx, such as an unfollowed redirect.
    Unexpected,
    Transport,
}

#[derive(Debug)]
pub enum Error {
    Status(String, StatusCode),
    Transport(String, reqwest::Error),
}
pub type Result<T> = StdResult<T, Error>;

impl Error {
    pub fn class(&self) -> Class {
        match self {
            Error::Status(_, code) if code.is_client_error() => Class::Client,
            Error::Status(_, code) if code.is_server_error() => Class::Server,
            Error::Status(_, _) => Class::Unexpected,
            Error::Transport(_, _) => Class::Transport,
        }
    }
    pub fn url(&self) -> &str {
        match self {
            Error::Status(url, _) | Error::Transport(url, _) => url,
        }
    }
}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Status(url, code) => write!(f, "GET {} returned {}", url, code),
            Error::Transport(url, err) => write!(f, "Error sending request to {}: {}", url, err),
        }
    }
}
impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Status(_, _) => None,
            Error::Transport(_, err) => Some(err),
        }
    }
}

/// The HTTP side of sample retrieval: one GET, raw body back.
///
/// Retries and timeouts are the implementor's business.
#[async_trait]
pub trait Fetch: Send + Sync {
    async fn get(&self, url: &str) -> Result<Vec<u8>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_status() {
        let url = String::from("https://open.kattis.com/problems/hello");
        assert_eq!(
            Error::Status(url.clone(), StatusCode::NOT_FOUND).class(),
            Class::Client
        );
        assert_eq!(
            Error::Status(url.clone(), StatusCode::BAD_GATEWAY).class(),
            Class::Server
        );
        assert_eq!(
            Error::Status(url.clone(), StatusCode::PERMANENT_REDIRECT).class(),
            Class::Unexpected
        );
        assert_eq!(
            Error::Status(url.clone(), StatusCode::NOT_MODIFIED).class(),
            Class::Unexpected
        );
        assert_eq!(Error::Status(url.clone(), StatusCode::GONE).url(), url);
    }
}
