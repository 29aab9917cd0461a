// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use crate::observability::messages::processor::{
    ComponentLookupFailed, ProcessorNotResolved, ProcessorResolved,
};
use crate::observability::messages::StructuredLog;
use crate::resolver::{ComponentContainer, ProcessorRegistry};
use crate::task::ProcessorType;
use crate::traits::Processor;

/// Turns a processor type and identifier into a processor instance.
pub trait ProcessorResolver: Send + Sync {
    fn resolve(&self, processor_type: ProcessorType, processor_info: &str) -> Option<Arc<dyn Processor>>;
}

/// Container first, then registry.
#[derive(Clone)]
pub struct ChainedProcessorResolver {
    container: Option<Arc<dyn ComponentContainer>>,
    registry: ProcessorRegistry,
}

impl ChainedProcessorResolver {
    pub fn new(registry: ProcessorRegistry) -> Self {
        Self {
            container: None,
            registry,
        }
    }

    pub fn with_container(mut self, container: Arc<dyn ComponentContainer>) -> Self {
        self.container = Some(container);
        self
    }

    fn from_container(&self, processor_info: &str) -> Option<Arc<dyn Processor>> {
        let container = self.container.as_ref()?;
        match container.resolve_by_name(processor_info) {
            Ok(processor) => {
                ProcessorResolved {
                    processor_info,
                    processor: processor.name(),
                    source: "component container",
                }
                .log();
                Some(processor)
            }
            Err(e) => {
                ComponentLookupFailed {
                    processor_info,
                    error: &e,
                }
                .log();
                None
            }
        }
    }

    fn from_registry(&self, processor_info: &str) -> Option<Arc<dyn Processor>> {
        let processor = self.registry.resolve_by_identifier(processor_info)?;
        ProcessorResolved {
            processor_info,
            processor: processor.name(),
            source: "registry",
        }
        .log();
        Some(processor)
    }
}

impl ProcessorResolver for ChainedProcessorResolver {
    fn resolve(&self, processor_type: ProcessorType, processor_info: &str) -> Option<Arc<dyn Processor>> {
        let resolved = self
            .from_container(processor_info)
            .or_else(|| self.from_registry(processor_info));

        if resolved.is_none() {
            ProcessorNotResolved {
                processor_info,
                processor_type,
            }
            .log();
        }
        resolved
    }
}
