extern crate async_trait;

pub mod error;
pub mod fetch;
pub mod kattis;
pub mod sample;
pub mod session;

pub use error::{Error, FormatError, Result};
pub use fetch::Fetch;
pub use session::Session;

use crate::types::TestCase;
use async_trait::async_trait;
use std::fmt;

/// A judge site.
pub trait Service: fmt::Debug + Send + Sync {
    fn url(&self) -> &str;
    fn name(&self) -> &str;
}
impl PartialEq for dyn Service {
    fn eq(&self, other: &Self) -> bool {
        self.url() == other.url() && self.name() == other.name()
    }
}
impl Eq for dyn Service {}

/// One problem on a judge, possibly scoped to a contest.
#[async_trait]
pub trait Problem: fmt::Debug + fmt::Display + Send + Sync {
    fn id(&self) -> &str;
    fn contest(&self) -> Option<&str>;
    fn domain(&self) -> &str;
    fn url(&self, contests: bool) -> String;
    fn service(&self) -> Box<dyn Service>;
    async fn download_sample_cases(&self, session: &dyn Fetch) -> Result<Vec<TestCase>>;
}
