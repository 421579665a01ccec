//! Provider lookup by identifier or ISO 3166 code.

use std::sync::Arc;

use almanac_core::error::{AlmanacError, AlmanacResult};
use once_cell::sync::Lazy;

use crate::countries::{Argentina, Bavaria, Germany, Greece, Japan, Scotland, UnitedKingdom, Usa};
use crate::provider::Provider;

static BUILTIN: Lazy<ProviderRegistry> = Lazy::new(ProviderRegistry::builtin);

/// A set of providers.
///
/// # Example
///
/// ```rust
/// use almanac_providers::registry::ProviderRegistry;
///
/// let registry = ProviderRegistry::global();
/// assert_eq!(registry.get("GB-SCT").unwrap().id(), "UnitedKingdom/Scotland");
/// assert!(registry.get("Atlantis").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProviderRegistry {
    providers: Vec<Arc<dyn Provider>>,
}

impl ProviderRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every built-in provider.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(Argentina);
        registry.register(Germany);
        registry.register(Bavaria);
        registry.register(Greece);
        registry.register(Japan);
        registry.register(UnitedKingdom);
        registry.register(Scotland);
        registry.register(Usa);
        registry
    }

    /// The process-wide built-in registry.
    pub fn global() -> &'static ProviderRegistry {
        &BUILTIN
    }

    /// Adds a provider, replacing one with the same identifier.
    pub fn register(&mut self, provider: impl Provider + 'static) {
        self.register_arc(Arc::new(provider));
    }

    /// Adds a shared provider, replacing one with the same identifier.
    pub fn register_arc(&mut self, provider: Arc<dyn Provider>) {
        self.providers.retain(|p| p.id() != provider.id());
        self.providers.push(provider);
    }

    /// Looks up a provider by identifier, or by ISO code ignoring case.
    pub fn find(&self, id: &str) -> Option<&Arc<dyn Provider>> {
        self.providers
            .iter()
            .find(|p| p.id() == id)
            .or_else(|| {
                self.providers
                    .iter()
                    .find(|p| p.iso_code().eq_ignore_ascii_case(id))
            })
    }

    /// Looks up a provider that must exist.
    ///
    /// # Errors
    ///
    /// Returns `AlmanacError::UnknownProvider` if nothing matches.
    pub fn get(&self, id: &str) -> AlmanacResult<Arc<dyn Provider>> {
        self.find(id)
            .cloned()
            .ok_or_else(|| AlmanacError::unknown_provider(id))
    }

    /// Registered identifiers, sorted.
    pub fn ids(&self) -> Vec<&'static str> {
        let mut ids: Vec<&'static str> = self.providers.iter().map(|p| p.id()).collect();
        ids.sort_unstable();
        ids
    }

    /// Iterates the providers in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Provider>> {
        self.providers.iter()
    }

    /// Number of providers.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Returns true if no provider is registered.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}
