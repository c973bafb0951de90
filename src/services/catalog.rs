use crate::{
    CatalogConfig, CatalogError, Vehicle, VehicleId, VehicleKind, VehicleListing,
    factories::VehicleFactory, ports::EngineFactory,
};
use log::info;

/// Ordered collection of vehicles built through a [`VehicleFactory`].
///
/// Insertion order is kept and duplicates are allowed. Entries are never
/// changed once stored.
pub struct Catalog<F>
where
    F: EngineFactory,
{
    vehicles: Vec<Vehicle>,
    vehicle_factory: VehicleFactory<F>,
}

impl<F> Catalog<F>
where
    F: EngineFactory,
{
    pub fn new(vehicle_factory: VehicleFactory<F>) -> Self {
        Self {
            vehicles: Vec::new(),
            vehicle_factory,
        }
    }

    /// Lists a vehicle, reusing the shared descriptor when one exists.
    ///
    /// On error the catalog is left unchanged.
    pub fn add_vehicle(
        &mut self,
        make: &str,
        model: &str,
        year: i32,
        engine_type: &str,
        listing: VehicleListing,
    ) -> Result<&Vehicle, CatalogError> {
        self.add_with_kind(
            VehicleKind::Standard,
            make,
            model,
            year,
            engine_type,
            listing,
        )
    }

    /// Lists a truck; the stored entry derives its consumption from engine
    /// and chassis.
    pub fn add_truck(
        &mut self,
        make: &str,
        model: &str,
        year: i32,
        engine_type: &str,
        listing: VehicleListing,
    ) -> Result<&Vehicle, CatalogError> {
        self.add_with_kind(VehicleKind::Truck, make, model, year, engine_type, listing)
    }

    pub fn get_all_vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Vehicles with `min_price <= price <= max_price`, in catalog order.
    pub fn get_price_by_range(&self, min_price: f64, max_price: f64) -> Vec<&Vehicle> {
        self.vehicles
            .iter()
            .filter(|vehicle| min_price <= vehicle.price() && vehicle.price() <= max_price)
            .collect()
    }

    pub fn get_by_id(&self, id: VehicleId) -> Option<&Vehicle> {
        self.vehicles.iter().find(|vehicle| vehicle.id() == id)
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    pub fn vehicle_factory(&self) -> &VehicleFactory<F> {
        &self.vehicle_factory
    }

    fn add_with_kind(
        &mut self,
        kind: VehicleKind,
        make: &str,
        model: &str,
        year: i32,
        engine_type: &str,
        listing: VehicleListing,
    ) -> Result<&Vehicle, CatalogError> {
        let flyweight = self
            .vehicle_factory
            .get_vehicle(make, model, year, engine_type)?;

        Ok(self.push(Vehicle::with_kind(kind, flyweight, listing)))
    }

    fn push(&mut self, vehicle: Vehicle) -> &Vehicle {
        info!("Added to catalog: {}", vehicle);
        self.vehicles.push(vehicle);
        &self.vehicles[self.vehicles.len() - 1]
    }
}

impl Catalog<Box<dyn EngineFactory>> {
    /// Builds a catalog for the configured tier and lists every configured
    /// vehicle in document order. Stops at the first invalid entry.
    pub fn from_config(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let mut catalog = Self::new(VehicleFactory::new(config.engine_tier.factory()));

        for entry in &config.vehicles {
            catalog.add_vehicle(
                &entry.make,
                &entry.model,
                entry.year,
                &entry.engine_type,
                entry.listing(),
            )?;
        }

        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        EngineTier,
        factories::{HighEngineFactory, PoorEngineFactory},
        ports::GasConsumption,
    };

    fn priced_catalog() -> Catalog<HighEngineFactory> {
        let mut catalog = Catalog::new(VehicleFactory::new(HighEngineFactory));
        for price in [10000.0, 20000.0, 30000.0] {
            let listing = VehicleListing::new("A", price, 9.0);
            catalog
                .add_vehicle("Ford", "F150", 2020, "gas", listing)
                .unwrap();
        }
        catalog
    }

    #[test]
    fn test_price_range_is_inclusive_and_ordered() {
        let catalog = priced_catalog();

        let mid = catalog.get_price_by_range(15000.0, 25000.0);
        assert_eq!(mid.len(), 1);
        assert_eq!(mid[0].price(), 20000.0);

        let bounds = catalog.get_price_by_range(10000.0, 30000.0);
        let prices: Vec<f64> = bounds.iter().map(|v| v.price()).collect();
        assert_eq!(prices, vec![10000.0, 20000.0, 30000.0]);

        assert!(catalog.get_price_by_range(0.0, 0.0).is_empty());
    }

    #[test]
    fn test_duplicates_share_one_descriptor() {
        let catalog = priced_catalog();
        let all = catalog.get_all_vehicles();

        assert_eq!(all.len(), 3);
        assert!(all[0].shares_flyweight_with(&all[1]));
        assert!(all[1].shares_flyweight_with(&all[2]));
        assert_eq!(catalog.vehicle_factory().cached_count(), 1);
    }

    #[test]
    fn test_invalid_engine_leaves_catalog_unchanged() {
        let mut catalog = priced_catalog();

        let listing = VehicleListing::new("A", 1.0, 1.0);
        let result = catalog.add_vehicle("Ford", "F150", 2020, "nuclear", listing);

        assert!(matches!(result, Err(CatalogError::InvalidEngineType(_))));
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.vehicle_factory().cached_count(), 1);
    }

    #[test]
    fn test_get_all_vehicles_keeps_insertion_order() {
        let mut catalog = Catalog::new(VehicleFactory::new(PoorEngineFactory));
        let leaf = VehicleListing::new("B", 25000.0, 0.0);
        catalog
            .add_vehicle("Nissan", "Leaf", 2019, "electric", leaf)
            .unwrap();
        let f150 = VehicleListing::new("A", 5.0, 14.0);
        catalog
            .add_vehicle("Ford", "F150", 2020, "gas", f150)
            .unwrap();

        let models: Vec<&str> = catalog
            .get_all_vehicles()
            .iter()
            .map(|v| v.flyweight().model())
            .collect();
        assert_eq!(models, vec!["Leaf", "F150"]);
    }

    #[test]
    fn test_stored_trucks_keep_consumption_policy() {
        let mut catalog = Catalog::new(VehicleFactory::new(HighEngineFactory));

        let listing_a = VehicleListing::new("A", 120000.0, 0.0);
        let truck_a = catalog
            .add_truck("Volvo", "FH", 2022, "electric", listing_a)
            .unwrap()
            .id();
        let listing_b = VehicleListing::new("B", 125000.0, 0.0);
        let truck_b = catalog
            .add_truck("Volvo", "FH", 2022, "electric", listing_b)
            .unwrap()
            .id();
        let listing_car = VehicleListing::new("A", 90000.0, 4.2);
        let car = catalog
            .add_vehicle("Volvo", "FH", 2022, "electric", listing_car)
            .unwrap()
            .id();

        let stored_a = catalog.get_by_id(truck_a).unwrap();
        assert!(stored_a.is_truck());
        assert!((stored_a.calculate_gas_consumption() - 240.48).abs() < 1e-9);

        let stored_b = catalog.get_by_id(truck_b).unwrap();
        assert!((stored_b.calculate_gas_consumption() - 240.68).abs() < 1e-9);

        let stored_car = catalog.get_by_id(car).unwrap();
        assert_eq!(stored_car.kind(), VehicleKind::Standard);
        assert_eq!(stored_car.calculate_gas_consumption(), 4.2);

        let trucks = catalog.get_all_vehicles().iter().filter(|v| v.is_truck());
        assert_eq!(trucks.count(), 2);
        assert_eq!(catalog.vehicle_factory().cached_count(), 1);
    }

    #[test]
    fn test_from_config_seeds_catalog() {
        let config = CatalogConfig::from_toml_str(
            r#"
engine_tier = "low"

[[vehicles]]
make = "Ford"
model = "F150"
year = 2020
engine_type = "gas"
chassis = "A"
price = 30000.0

[[vehicles]]
make = "Ford"
model = "F150"
year = 2020
engine_type = "gas"
chassis = "B"
price = 31000.0
"#,
        )
        .unwrap();

        let catalog = Catalog::from_config(&config).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.vehicle_factory().cached_count(), 1);
        let tier = catalog.vehicle_factory().engine_factory().tier();
        assert_eq!(tier, EngineTier::Low);
        let engine = catalog.get_all_vehicles()[0].flyweight().engine();
        assert_eq!(engine.power(), 100.0);
    }

    #[test]
    fn test_from_config_rejects_unknown_engine() {
        let mut config = CatalogConfig::default();
        config.vehicles.push(crate::VehicleConfig {
            make: "Ford".into(),
            model: "F150".into(),
            year: 2020,
            engine_type: "nuclear".into(),
            chassis: "A".into(),
            price: 1.0,
            consumption: 0.0,
        });

        assert!(matches!(
            Catalog::from_config(&config),
            Err(CatalogError::InvalidEngineType(_))
        ));
    }
}
