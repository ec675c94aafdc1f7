pub mod command;
pub mod file_formats;
pub mod pathway;
pub mod process;
pub mod safety;
pub mod scenario;
pub mod telemetry;
