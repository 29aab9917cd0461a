// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::traits::Processor;

/// Builds a fresh processor instance
pub type ProcessorFactoryFn = Arc<dyn Fn() -> Arc<dyn Processor> + Send + Sync>;

/// Registry of processor factories keyed by identifier.
///
/// Unlike a [`ComponentContainer`](super::ComponentContainer), every resolution
/// builds a new instance.
#[derive(Clone, Default)]
pub struct ProcessorRegistry {
    factories: HashMap<String, ProcessorFactoryFn>,
}

impl ProcessorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory; a later registration under the same identifier wins
    pub fn register<F>(&mut self, identifier: impl Into<String>, factory: F)
    where
        F: Fn() -> Arc<dyn Processor> + Send + Sync + 'static,
    {
        self.factories.insert(identifier.into(), Arc::new(factory));
    }

    pub fn resolve_by_identifier(&self, identifier: &str) -> Option<Arc<dyn Processor>> {
        self.factories.get(identifier).map(|factory| factory())
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.factories.contains_key(identifier)
    }

    pub fn identifiers(&self) -> Vec<&str> {
        let mut identifiers: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        identifiers.sort_unstable();
        identifiers
    }
}

impl fmt::Debug for ProcessorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProcessorRegistry")
            .field("identifiers", &self.identifiers())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::stub::{FailingProcessor, StubProcessor};

    #[test]
    fn test_each_resolution_builds_a_new_instance() {
        let mut registry = ProcessorRegistry::new();
        registry.register("stub", || Arc::new(StubProcessor::new("stub".to_string())));

        let first = registry.resolve_by_identifier("stub").unwrap();
        let second = registry.resolve_by_identifier("stub").unwrap();
        assert!(!Arc::ptr_eq(&first, &second));
        assert!(registry.resolve_by_identifier("missing").is_none());
    }

    #[test]
    fn test_later_registration_replaces_earlier() {
        let mut registry = ProcessorRegistry::new();
        registry.register("p", || Arc::new(StubProcessor::new("p".to_string())));
        registry.register("p", || Arc::new(FailingProcessor::new("p".to_string())));

        assert_eq!(registry.resolve_by_identifier("p").unwrap().name(), "failing");
        assert_eq!(registry.identifiers(), vec!["p"]);
        assert!(registry.contains("p"));
    }
}
