pub mod config;
pub mod error;
pub mod options;
pub mod simulation;
