use crate::{CatalogError, VehicleFlyweight, ports::GasConsumption};
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VehicleId(Uuid);

impl VehicleId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for VehicleId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for VehicleId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl TryFrom<&str> for VehicleId {
    type Error = CatalogError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let uuid = Uuid::parse_str(value)
            .map_err(|e| CatalogError::config(format!("Invalid vehicle ID: {}", e)))?;
        Ok(Self(uuid))
    }
}

/// Extrinsic, per-vehicle state supplied when a vehicle is listed.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleListing {
    chassis: String,
    price: f64,
    consumption: f64,
}

impl VehicleListing {
    pub fn new<S: Into<String>>(chassis: S, price: f64, consumption: f64) -> Self {
        Self {
            chassis: chassis.into(),
            price,
            consumption,
        }
    }

    pub fn chassis(&self) -> &str {
        &self.chassis
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn consumption(&self) -> f64 {
        self.consumption
    }
}

/// Body kind of a listed vehicle; selects its consumption policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleKind {
    Standard,
    Truck,
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => write!(f, "Vehicle"),
            Self::Truck => write!(f, "Truck"),
        }
    }
}

/// A concrete vehicle: a shared descriptor plus its own listing data.
#[derive(Debug, Clone)]
pub struct Vehicle {
    id: VehicleId,
    kind: VehicleKind,
    flyweight: Arc<VehicleFlyweight>,
    chassis: String,
    price: f64,
    consumption: f64,
}

impl Vehicle {
    pub fn new(flyweight: Arc<VehicleFlyweight>, listing: VehicleListing) -> Self {
        Self::with_kind(VehicleKind::Standard, flyweight, listing)
    }

    pub fn truck(flyweight: Arc<VehicleFlyweight>, listing: VehicleListing) -> Self {
        Self::with_kind(VehicleKind::Truck, flyweight, listing)
    }

    pub fn with_kind(
        kind: VehicleKind,
        flyweight: Arc<VehicleFlyweight>,
        listing: VehicleListing,
    ) -> Self {
        Self {
            id: VehicleId::new(),
            kind,
            flyweight,
            chassis: listing.chassis,
            price: listing.price,
            consumption: listing.consumption,
        }
    }

    pub fn id(&self) -> VehicleId {
        self.id
    }

    pub fn kind(&self) -> VehicleKind {
        self.kind
    }

    pub fn is_truck(&self) -> bool {
        matches!(self.kind, VehicleKind::Truck)
    }

    pub fn flyweight(&self) -> &Arc<VehicleFlyweight> {
        &self.flyweight
    }

    pub fn chassis(&self) -> &str {
        &self.chassis
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    /// Consumption as listed, independent of the vehicle kind.
    pub fn consumption(&self) -> f64 {
        self.consumption
    }

    /// Checks whether both vehicles point at the same shared descriptor.
    pub fn shares_flyweight_with(&self, other: &Vehicle) -> bool {
        Arc::ptr_eq(&self.flyweight, &other.flyweight)
    }
}

impl GasConsumption for Vehicle {
    /// Trucks derive fuel use from engine and chassis; other vehicles report
    /// their listed consumption.
    fn calculate_gas_consumption(&self) -> f64 {
        match self.kind {
            VehicleKind::Standard => self.consumption,
            VehicleKind::Truck => {
                let engine = self.flyweight.engine();
                let chassis_factor = if self.chassis == "A" { 0.3 } else { 0.5 };

                1.1 * engine.power() + 0.2 * engine.weight() + chassis_factor
            }
        }
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} - {} - {} - {} - {} - {}",
            self.kind,
            self.flyweight.model(),
            self.flyweight.year(),
            self.price,
            self.consumption,
            self.flyweight.engine(),
            self.chassis
        )
    }
}
