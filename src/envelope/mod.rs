pub(crate) mod generator;
pub(crate) mod plan;
pub(crate) mod ramp;
