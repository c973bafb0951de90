use crate::{Engine, EngineKind, EngineTier};

/// Abstract factory for the engines of one quality tier.
///
/// Every call builds a fresh [`Engine`]; implementations never cache.
pub trait EngineFactory: Send + Sync {
    fn create_electric_engine(&self) -> Engine;

    fn create_gas_engine(&self) -> Engine;

    fn tier(&self) -> EngineTier;

    fn create_engine(&self, kind: EngineKind) -> Engine {
        match kind {
            EngineKind::Electric => self.create_electric_engine(),
            EngineKind::Gas => self.create_gas_engine(),
        }
    }
}

impl<F: EngineFactory + ?Sized> EngineFactory for Box<F> {
    fn create_electric_engine(&self) -> Engine {
        (**self).create_electric_engine()
    }

    fn create_gas_engine(&self) -> Engine {
        (**self).create_gas_engine()
    }

    fn tier(&self) -> EngineTier {
        (**self).tier()
    }
}
