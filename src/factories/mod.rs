// src/factories/mod.rs

mod engine_factory;
mod vehicle_factory;

pub use engine_factory::{HighEngineFactory, PoorEngineFactory};
pub use vehicle_factory::VehicleFactory;
