// src/factories/engine_factory.rs

use crate::{Engine, EngineTier, Stability, ports::EngineFactory};

/// Concrete factory for the expensive engine versions.
#[derive(Debug, Clone, Copy, Default)]
pub struct HighEngineFactory;

impl EngineFactory for HighEngineFactory {
    fn create_electric_engine(&self) -> Engine {
        Engine::electric(180.0, 300.0, "200x200x200", 200.0, Stability::High, 100.9)
    }

    fn create_gas_engine(&self) -> Engine {
        Engine::gas(210.0, 400.0, "210x200x250", 250.0, Stability::Medium, 120.5)
    }

    fn tier(&self) -> EngineTier {
        EngineTier::High
    }
}

/// Concrete factory for the cheap engine versions.
#[derive(Debug, Clone, Copy, Default)]
pub struct PoorEngineFactory;

impl EngineFactory for PoorEngineFactory {
    fn create_electric_engine(&self) -> Engine {
        Engine::electric(90.0, 100.0, "100x100x100", 50.0, Stability::Low, 63.4)
    }

    fn create_gas_engine(&self) -> Engine {
        Engine::gas(100.0, 150.0, "110x100x150", 100.0, Stability::Low, 80.5)
    }

    fn tier(&self) -> EngineTier {
        EngineTier::Low
    }
}
