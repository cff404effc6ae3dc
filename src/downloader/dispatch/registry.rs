use super::url::ParsedUrl;
use crate::judge::{kattis, Problem, Service};
use std::sync::Arc;

pub trait RecognizeService: Send + Sync {
    fn service_from_url(&self, url: &ParsedUrl) -> Option<Box<dyn Service>>;
}
pub trait RecognizeProblem: Send + Sync {
    fn problem_from_url(&self, url: &ParsedUrl) -> Option<Box<dyn Problem>>;
}

/// Recognizers in the order they were registered.
///
/// Nothing is deduplicated: registering the same recognizer twice means it
/// is tried twice.
#[derive(Default, Clone)]
pub struct Registry {
    pub(super) services: Vec<Arc<dyn RecognizeService>>,
    pub(super) problems: Vec<Arc<dyn RecognizeProblem>>,
}
impl Registry {
    pub fn new() -> Self {
        Self::default()
    }
    /// Every judge this crate knows about.
    pub fn with_builtin() -> Self {
        let mut ret = Self::new();
        kattis::register(&mut ret);
        ret
    }
    pub fn register_service(&mut self, recognizer: Arc<dyn RecognizeService>) {
        self.services.push(recognizer);
    }
    pub fn register_problem(&mut self, recognizer: Arc<dyn RecognizeProblem>) {
        self.problems.push(recognizer);
    }
    pub fn service_count(&self) -> usize {
        self.services.len()
    }
    pub fn problem_count(&self) -> usize {
        self.problems.len()
    }
}
