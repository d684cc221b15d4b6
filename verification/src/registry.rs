//! Strategy registry — exact-match lookup by verification method.

use crate::{PhotoStrategy, ProximityStrategy, TapTokenStrategy, VerificationStrategy};
use manhunt_types::VerificationMethod;
use std::collections::HashMap;

/// Maps each verification method to the strategy that adjudicates it.
///
/// An unregistered method is a configuration error surfaced to the caller,
/// never a silent accept.
pub struct StrategyRegistry {
    strategies: HashMap<VerificationMethod, Box<dyn VerificationStrategy>>,
}

impl StrategyRegistry {
    /// An empty registry. Deployments with custom strategies start here.
    pub fn empty() -> Self {
        Self {
            strategies: HashMap::new(),
        }
    }

    /// A registry with the stock strategies for every method.
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(ProximityStrategy::default()));
        registry.register(Box::new(TapTokenStrategy));
        registry.register(Box::new(PhotoStrategy));
        registry
    }

    /// Register a strategy under its declared method, replacing any previous
    /// entry for that method.
    pub fn register(&mut self, strategy: Box<dyn VerificationStrategy>) {
        self.strategies.insert(strategy.method(), strategy);
    }

    pub fn get(&self, method: VerificationMethod) -> Option<&dyn VerificationStrategy> {
        self.strategies.get(&method).map(|s| s.as_ref())
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
