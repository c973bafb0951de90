// src/ports/mod.rs

pub use engine_factory::EngineFactory;
pub use gas_consumption::GasConsumption;

pub mod engine_factory;
pub mod gas_consumption;
