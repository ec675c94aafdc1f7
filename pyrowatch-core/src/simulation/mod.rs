pub mod builder;
pub mod engine;
pub mod state;
pub mod telemetry;
