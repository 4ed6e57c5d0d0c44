// Domain layer: world data model and the ports the generator depends on.

pub mod model;
pub mod ports;
