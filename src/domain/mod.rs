// Domain layer: entry model and the rendering port.

pub mod model;
pub mod ports;
