// Domain layer: record shapes and ports. Only serde/serde_json beyond std.

pub mod model;
pub mod ports;
