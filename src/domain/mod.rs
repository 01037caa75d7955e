// Domain layer: the greeting itself and the sink port it is written through.

pub mod model;
pub mod ports;
