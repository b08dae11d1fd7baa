// Domain layer: the classification model and the predicate port.

pub mod model;
pub mod ports;
