// Domain layer: game model and ports. No I/O here.

pub mod model;
pub mod ports;
