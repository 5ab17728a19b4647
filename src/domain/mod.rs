// Domain layer: parking models and ports (interfaces). No I/O lives here.

pub mod model;
pub mod ports;
