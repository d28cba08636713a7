// Domain layer: catalog models, selection state and ports (interfaces).
// No I/O here.

pub mod model;
pub mod ports;
