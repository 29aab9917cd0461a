// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use crate::config::WorkerConfig;
use crate::engine::{TaskDispatcher, WorkerRuntime};
use crate::persistence::TaskPersistence;
use crate::reporting::ReportSink;
use crate::resolver::{ChainedProcessorResolver, ComponentContainer, ProcessorRegistry};

/// Worker runtime builder - wires configuration and collaborators into a dispatcher.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use the_taskrunner::backends::local::LocalProcessorFactory;
/// use the_taskrunner::config::{RuntimeBuilder, WorkerConfig};
/// use the_taskrunner::persistence::InMemoryTaskStore;
/// use the_taskrunner::reporting::ChannelReportSink;
/// use the_taskrunner::resolver::ProcessorRegistry;
///
/// # #[tokio::main]
/// # async fn main() {
/// let mut registry = ProcessorRegistry::new();
/// LocalProcessorFactory::register_builtins(&mut registry);
/// let (sink, _tracker) = ChannelReportSink::channel();
///
/// let dispatcher = RuntimeBuilder::from_config(
///     &WorkerConfig::default(),
///     registry,
///     None,
///     Arc::new(InMemoryTaskStore::new()),
///     Arc::new(sink),
/// );
/// dispatcher.shutdown().await;
/// # }
/// ```
pub struct RuntimeBuilder;

impl RuntimeBuilder {
    /// Build the dispatcher for a worker.
    ///
    /// The container is only consulted when `enable_component_container` is set.
    pub fn from_config(
        cfg: &WorkerConfig,
        registry: ProcessorRegistry,
        container: Option<Arc<dyn ComponentContainer>>,
        persistence: Arc<dyn TaskPersistence>,
        sink: Arc<dyn ReportSink>,
    ) -> TaskDispatcher {
        let runtime = Self::worker_runtime(cfg, registry, container, persistence, sink);
        TaskDispatcher::new(runtime, cfg.max_concurrency)
    }

    /// The shared collaborators alone, for callers that drive runners themselves
    pub fn worker_runtime(
        cfg: &WorkerConfig,
        registry: ProcessorRegistry,
        container: Option<Arc<dyn ComponentContainer>>,
        persistence: Arc<dyn TaskPersistence>,
        sink: Arc<dyn ReportSink>,
    ) -> WorkerRuntime {
        let mut resolver = ChainedProcessorResolver::new(registry);
        if cfg.enable_component_container {
            if let Some(container) = container {
                resolver = resolver.with_container(container);
            }
        }

        WorkerRuntime::new(Arc::new(resolver), persistence, sink)
            .with_persistence_retry(cfg.persistence_retry())
    }
}
