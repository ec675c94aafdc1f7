pub mod analysis;
pub mod error;
pub mod logger;
pub mod simulation;
