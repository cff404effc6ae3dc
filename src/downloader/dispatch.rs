extern crate log;

pub mod registry;
pub mod url;

pub use registry::{RecognizeProblem, RecognizeService, Registry};
pub use url::ParsedUrl;

use crate::judge::{Problem, Service};
use log::debug;

/// Resolves raw URLs against a [`Registry`], first registered match wins.
pub struct Dispatcher {
    registry: Registry,
}
impl Dispatcher {
    pub fn new(registry: Registry) -> Self {
        Dispatcher { registry }
    }
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn resolve_problem(&self, raw: &str) -> Option<Box<dyn Problem>> {
        let url = ParsedUrl::parse(raw);
        let ret = self
            .registry
            .problems
            .iter()
            .find_map(|r| r.problem_from_url(&url));
        match &ret {
            Some(p) => debug!("{} resolved to problem {}", raw, p),
            None => debug!("{} is not a known problem url", raw),
        }
        ret
    }
    pub fn resolve_service(&self, raw: &str) -> Option<Box<dyn Service>> {
        let url = ParsedUrl::parse(raw);
        let ret = self
            .registry
            .services
            .iter()
            .find_map(|r| r.service_from_url(&url));
        if let Some(s) = &ret {
            debug!("{} resolved to service {}", raw, s.name());
        }
        ret
    }
}
impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(Registry::with_builtin())
    }
}
