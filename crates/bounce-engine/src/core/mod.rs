pub mod bounds;
pub mod particle;
pub mod policy;
pub mod rng;
pub mod stage;
pub mod time;
