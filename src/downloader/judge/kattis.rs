extern crate async_trait;
extern crate log;
extern crate regex;

use super::{sample, Fetch, Problem, Result, Service};
use crate::{
    config::kattis::{DEFAULT_DOMAIN, HOST_SUFFIX, NAME, SAMPLE_ARCHIVE, SERVICE_URL},
    dispatch::{ParsedUrl, RecognizeProblem, RecognizeService, Registry},
    types::TestCase,
};
use async_trait::async_trait;
use log::info;
use regex::Regex;
use std::{
    fmt,
    hash::{Hash, Hasher},
    sync::Arc,
};

/// Adds Kattis to both recognizer lists.
pub fn register(registry: &mut Registry) {
    let kattis = Arc::new(Kattis::new());
    registry.register_service(kattis.clone());
    registry.register_problem(kattis);
}

/// Every Kattis sub-domain is the same judge; this strips the sub-domain.
fn canonical_domain(domain: &str) -> String {
    let lower = domain.to_ascii_lowercase();
    if lower.ends_with(HOST_SUFFIX) {
        HOST_SUFFIX[1..].to_owned()
    } else {
        lower
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct KattisService;
impl Service for KattisService {
    fn url(&self) -> &str {
        SERVICE_URL
    }
    fn name(&self) -> &str {
        NAME
    }
}

#[derive(Debug, Clone)]
pub struct KattisProblem {
    pub problem_id: String,
    pub contest: Option<String>,
    pub domain: String,
}
impl KattisProblem {
    pub fn new(problem_id: String, contest: Option<String>) -> Self {
        Self::with_domain(problem_id, contest, DEFAULT_DOMAIN.to_owned())
    }
    pub fn with_domain(problem_id: String, contest: Option<String>, domain: String) -> Self {
        KattisProblem {
            problem_id,
            contest,
            domain,
        }
    }
}
impl PartialEq for KattisProblem {
    fn eq(&self, other: &Self) -> bool {
        self.problem_id == other.problem_id
            && self.contest == other.contest
            && canonical_domain(&self.domain) == canonical_domain(&other.domain)
    }
}
impl Eq for KattisProblem {}
impl Hash for KattisProblem {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.problem_id.hash(state);
        self.contest.hash(state);
        canonical_domain(&self.domain).hash(state);
    }
}
impl fmt::Display for KattisProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.contest {
            Some(c) => write!(f, "{} {}/{}", NAME, c, self.problem_id),
            None => write!(f, "{} {}", NAME, self.problem_id),
        }
    }
}

#[async_trait]
impl Problem for KattisProblem {
    fn id(&self) -> &str {
        &self.problem_id
    }
    fn contest(&self) -> Option<&str> {
        self.contest.as_deref()
    }
    fn domain(&self) -> &str {
        &self.domain
    }
    fn url(&self, contests: bool) -> String {
        match &self.contest {
            Some(c) if contests => format!(
                "https://{}/contests/{}/problems/{}",
                self.domain, c, self.problem_id
            ),
            _ => format!("https://{}/problems/{}", self.domain, self.problem_id),
        }
    }
    fn service(&self) -> Box<dyn Service> {
        Box::new(KattisService)
    }
    async fn download_sample_cases(&self, session: &dyn Fetch) -> Result<Vec<TestCase>> {
        // the archive lives under the contest-less url
        let url = format!("{}{}", self.url(false), SAMPLE_ARCHIVE);
        let content = session.get(&url).await?;
        let samples = sample::decode(&content)?;
        info!("{}: got {} sample cases", self, samples.len());
        Ok(samples)
    }
}

pub struct Kattis {
    path: Regex,
}
impl Kattis {
    pub fn new() -> Self {
        Kattis {
            path: Regex::new(
                r"^(?:/contests/([0-9A-Z_a-z-]+))?/problems/([0-9A-Z_a-z-]+)/?$",
            )
            .unwrap(),
        }
    }
    fn accepts(url: &ParsedUrl) -> bool {
        url.is_web() && url.host_ends_with(HOST_SUFFIX)
    }
}
impl Default for Kattis {
    fn default() -> Self {
        Self::new()
    }
}
impl RecognizeService for Kattis {
    fn service_from_url(&self, url: &ParsedUrl) -> Option<Box<dyn Service>> {
        if Self::accepts(url) {
            Some(Box::new(KattisService))
        } else {
            None
        }
    }
}
impl RecognizeProblem for Kattis {
    fn problem_from_url(&self, url: &ParsedUrl) -> Option<Box<dyn Problem>> {
        if !Self::accepts(url) {
            return None;
        }
        let m = self.path.captures(&url.path)?;
        Some(Box::new(KattisProblem::with_domain(
            m.get(2)?.as_str().to_owned(),
            m.get(1).map(|v| v.as_str().to_owned()),
            url.host.clone(),
        )))
    }
}
