extern crate async_trait;
extern crate log;
extern crate reqwest;

use super::fetch::{Error, Fetch, Result};
use crate::config::session::{TIMEOUT, USER_AGENT, VERBOSE};
use async_trait::async_trait;
use log::debug;
use reqwest::{Client, ClientBuilder, Proxy};

pub struct Session {
    client: Client,
}
impl Session {
    fn from_client(builder: ClientBuilder) -> reqwest::Result<Self> {
        Ok(Session {
            client: builder
                .user_agent(USER_AGENT)
                .cookie_store(true)
                .connection_verbose(VERBOSE)
                .timeout(TIMEOUT)
                .build()?,
        })
    }
    pub fn new() -> reqwest::Result<Self> {
        Self::from_client(Client::builder())
    }
    pub fn with_proxy(proxy: Option<String>) -> reqwest::Result<Self> {
        match proxy {
            Some(p) => Self::from_client(Client::builder().proxy(Proxy::all(p)?)),
            None => Self::new(),
        }
    }
}

#[async_trait]
impl Fetch for Session {
    async fn get(&self, url: &str) -> Result<Vec<u8>> {
        debug!("GET {}", url);
        let transport = |e: reqwest::Error| Error::Transport(url.to_owned(), e);
        let response = self.client.get(url).send().await.map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status(url.to_owned(), status));
        }
        Ok(response.bytes().await.map_err(transport)?.to_vec())
    }
}
