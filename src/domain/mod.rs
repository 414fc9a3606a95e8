// Domain layer: lookup models and the ports the controller talks through.

pub mod model;
pub mod ports;
