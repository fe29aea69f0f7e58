// Domain layer: core models and ports (interfaces). No external dependencies beyond serde and the store's value type.

pub mod model;
pub mod ports;
