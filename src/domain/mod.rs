// Domain layer: the name record and the pipeline port. No I/O here.

pub mod model;
pub mod ports;
