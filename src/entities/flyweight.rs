use crate::{Engine, EngineKind};
use std::fmt;

/// Cache key of a [`VehicleFlyweight`].
///
/// Fields are kept apart rather than joined into one string, so a make
/// or model containing a separator cannot collide with another key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VehicleKey {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub engine_type: EngineKind,
}

impl VehicleKey {
    pub fn new<S: Into<String>>(make: S, model: S, year: i32, engine_type: EngineKind) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
            year,
            engine_type,
        }
    }
}

impl fmt::Display for VehicleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.make, self.model, self.year, self.engine_type
        )
    }
}

/// Intrinsic, shareable part of a vehicle.
///
/// Instances are handed out by the vehicle factory behind an `Arc`; every
/// vehicle with the same make, model, year and engine type points at the
/// same one.
#[derive(Debug, PartialEq)]
pub struct VehicleFlyweight {
    make: String,
    model: String,
    year: i32,
    engine: Engine,
}

impl VehicleFlyweight {
    pub fn new(make: String, model: String, year: i32, engine: Engine) -> Self {
        Self {
            make,
            model,
            year,
            engine,
        }
    }

    pub fn make(&self) -> &str {
        &self.make
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn key(&self) -> VehicleKey {
        VehicleKey {
            make: self.make.clone(),
            model: self.model.clone(),
            year: self.year,
            engine_type: self.engine.kind(),
        }
    }
}
