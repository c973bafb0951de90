/// Vehicle kinds that derive their fuel use from engine and chassis.
pub trait GasConsumption {
    fn calculate_gas_consumption(&self) -> f64;
}
