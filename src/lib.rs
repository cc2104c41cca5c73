pub mod configuration;
pub mod console;
pub mod db;
pub mod helpers;
pub mod models;
pub mod store;
pub mod telemetry;
