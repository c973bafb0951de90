// src/factories/vehicle_factory.rs

use crate::{CatalogError, EngineKind, VehicleFlyweight, VehicleKey, ports::EngineFactory};
use log::{debug, warn};
use std::collections::HashMap;
use std::sync::Arc;

/// Builds shared vehicle descriptors and caches them by [`VehicleKey`].
///
/// For a given key at most one descriptor exists for the lifetime of the
/// factory. Repeated requests return the same `Arc`, and the engine
/// factory is consulted only on the first one.
pub struct VehicleFactory<F>
where
    F: EngineFactory,
{
    engine_factory: F,
    vehicles: HashMap<VehicleKey, Arc<VehicleFlyweight>>,
}

impl<F> VehicleFactory<F>
where
    F: EngineFactory,
{
    pub fn new(engine_factory: F) -> Self {
        Self {
            engine_factory,
            vehicles: HashMap::new(),
        }
    }

    /// Returns the descriptor for the given vehicle, creating it on first use.
    ///
    /// # Arguments
    /// * `make` - Vehicle make
    /// * `model` - Vehicle model
    /// * `year` - Model year
    /// * `engine_type` - `"electric"` or `"gas"`
    ///
    /// # Returns
    /// * `Ok(Arc<VehicleFlyweight>)` - Cached or freshly built descriptor
    /// * `Err(CatalogError::InvalidEngineType)` - Unknown engine type; nothing is cached
    pub fn get_vehicle(
        &mut self,
        make: &str,
        model: &str,
        year: i32,
        engine_type: &str,
    ) -> Result<Arc<VehicleFlyweight>, CatalogError> {
        let engine_type = EngineKind::try_from(engine_type).inspect_err(|_| {
            warn!(
                "Rejected engine type `{}` for {} {} {}",
                engine_type, make, model, year
            );
        })?;

        Ok(self.get_vehicle_by_key(VehicleKey::new(make, model, year, engine_type)))
    }

    /// Same as [`get_vehicle`](Self::get_vehicle) with an already parsed key.
    pub fn get_vehicle_by_key(&mut self, key: VehicleKey) -> Arc<VehicleFlyweight> {
        if let Some(vehicle) = self.vehicles.get(&key) {
            debug!("Vehicle cache hit for {}", key);
            return Arc::clone(vehicle);
        }

        debug!("Vehicle cache miss for {}, building descriptor", key);
        let engine = self.engine_factory.create_engine(key.engine_type);
        let vehicle = Arc::new(VehicleFlyweight::new(
            key.make.clone(),
            key.model.clone(),
            key.year,
            engine,
        ));
        self.vehicles.insert(key, Arc::clone(&vehicle));

        vehicle
    }

    pub fn contains(&self, key: &VehicleKey) -> bool {
        self.vehicles.contains_key(key)
    }

    /// Number of distinct descriptors built so far.
    pub fn cached_count(&self) -> usize {
        self.vehicles.len()
    }

    pub fn engine_factory(&self) -> &F {
        &self.engine_factory
    }
}
