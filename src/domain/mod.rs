// Domain layer: operation model and the ports the engine depends on.

pub mod model;
pub mod ports;
