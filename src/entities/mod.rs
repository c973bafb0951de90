pub mod flyweight;
pub mod vehicle;

pub use flyweight::*;
pub use vehicle::*;
