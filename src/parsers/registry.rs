use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::{debug, warn};

use crate::error::RegistryError;
use crate::parsers::{self, Extractor};

/// Name-keyed lookup of extractors, safe to share between threads
#[derive(Default)]
pub struct Registry {
    extractors: RwLock<HashMap<String, Arc<dyn Extractor>>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with every built-in extractor
    pub fn with_builtins() -> Self {
        let registry = Self::new();
        for extractor in parsers::all_extractors() {
            if let Err(e) = registry.register(Arc::from(extractor)) {
                warn!("Skipping built-in parser: {}", e);
            }
        }
        registry
    }

    pub fn register(&self, extractor: Arc<dyn Extractor>) -> Result<(), RegistryError> {
        let mut extractors = self
            .extractors
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        let name = extractor.name();
        if extractors.contains_key(name) {
            return Err(RegistryError::AlreadyRegistered(name.to_string()));
        }

        debug!("Registered parser {}", name);
        extractors.insert(name.to_string(), extractor);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<Arc<dyn Extractor>, RegistryError> {
        self.extractors
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .extractors
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        names.sort();
        names
    }
}
