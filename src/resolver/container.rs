// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::errors::WorkerError;
use crate::traits::Processor;

/// A host-managed container of named, shared processor components.
///
/// Components come out of the container already built; every lookup of the
/// same name may return the same instance.
pub trait ComponentContainer: Send + Sync {
    fn resolve_by_name(&self, name: &str) -> Result<Arc<dyn Processor>, WorkerError>;
}

/// A type-safe container mapping component names to shared processor instances.
///
/// # Examples
///
/// ```ignore
/// use std::sync::Arc;
/// use the_taskrunner::resolver::{ComponentContainer, ComponentMap};
/// use the_taskrunner::backends::local::EchoProcessor;
///
/// let mut components = ComponentMap::new();
/// components.insert("echoBean", Arc::new(EchoProcessor::new()));
///
/// assert!(components.contains_key("echoBean"));
/// assert!(components.resolve_by_name("missing").is_err());
/// ```
#[derive(Clone, Default)]
pub struct ComponentMap(HashMap<String, Arc<dyn Processor>>);

impl ComponentMap {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    pub fn insert(&mut self, name: impl Into<String>, processor: Arc<dyn Processor>) -> Option<Arc<dyn Processor>> {
        self.0.insert(name.into(), processor)
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn Processor>> {
        self.0.get(name)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }
}

impl From<HashMap<String, Arc<dyn Processor>>> for ComponentMap {
    fn from(map: HashMap<String, Arc<dyn Processor>>) -> Self {
        Self(map)
    }
}

impl ComponentContainer for ComponentMap {
    fn resolve_by_name(&self, name: &str) -> Result<Arc<dyn Processor>, WorkerError> {
        self.get(name)
            .cloned()
            .ok_or_else(|| WorkerError::ComponentLookup {
                name: name.to_string(),
                reason: "no component registered under this name".to_string(),
            })
    }
}

impl fmt::Debug for ComponentMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&String> = self.keys().collect();
        names.sort();
        f.debug_struct("ComponentMap")
            .field("components", &names)
            .finish()
    }
}
