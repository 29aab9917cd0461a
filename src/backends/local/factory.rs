// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use super::processors::*;
use crate::resolver::ProcessorRegistry;
use crate::traits::Processor;

type Constructor = fn() -> Arc<dyn Processor>;

/// Every built-in implementation, keyed by the name it registers under
///
/// - "echo" -> EchoProcessor
/// - "word_count" -> WordCountProcessor (map-reduce)
/// - "host_probe" -> HostProbeProcessor (broadcast)
const BUILTINS: [(&str, Constructor); 3] = [
    ("echo", echo),
    ("word_count", word_count),
    ("host_probe", host_probe),
];

fn echo() -> Arc<dyn Processor> {
    Arc::new(EchoProcessor::new())
}

fn word_count() -> Arc<dyn Processor> {
    Arc::new(WordCountProcessor::new())
}

fn host_probe() -> Arc<dyn Processor> {
    Arc::new(HostProbeProcessor::new())
}

/// Factory for creating local (in-process) processor instances
pub struct LocalProcessorFactory;

impl LocalProcessorFactory {
    /// Register every built-in implementation under its own name
    pub fn register_builtins(registry: &mut ProcessorRegistry) {
        for (name, constructor) in BUILTINS {
            registry.register(name, constructor);
        }
    }

    /// List all available local processor implementations
    pub fn list_available_implementations() -> Vec<&'static str> {
        BUILTINS.iter().map(|(name, _)| *name).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_builtins_covers_every_implementation() {
        let mut registry = ProcessorRegistry::new();
        LocalProcessorFactory::register_builtins(&mut registry);

        for impl_name in LocalProcessorFactory::list_available_implementations() {
            let processor = registry
                .resolve_by_identifier(impl_name)
                .unwrap_or_else(|| panic!("{} not registered", impl_name));
            assert_eq!(processor.name(), impl_name);
        }
    }

    #[test]
    fn test_builtins_expose_their_capabilities() {
        let test_cases = vec![
            ("echo", false, false),
            ("word_count", false, true),
            ("host_probe", true, false),
        ];

        let mut registry = ProcessorRegistry::new();
        LocalProcessorFactory::register_builtins(&mut registry);

        for (impl_name, broadcast, map_reduce) in test_cases {
            let processor = registry
                .resolve_by_identifier(impl_name)
                .unwrap_or_else(|| panic!("{} not registered", impl_name));

            assert_eq!(processor.as_broadcast().is_some(), broadcast, "{}", impl_name);
            assert_eq!(processor.as_map_reduce().is_some(), map_reduce, "{}", impl_name);
        }
    }

    #[test]
    fn test_unknown_implementation_is_not_registered() {
        let mut registry = ProcessorRegistry::new();
        LocalProcessorFactory::register_builtins(&mut registry);

        assert!(registry.resolve_by_identifier("nonexistent_processor").is_none());
        assert!(!LocalProcessorFactory::list_available_implementations().contains(&"nonexistent_processor"));
    }
}
