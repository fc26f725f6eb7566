// Domain layer: record models, filter vocabulary and ports. No storage details here.

pub mod filters;
pub mod model;
pub mod ports;
