pub mod app;
pub mod callback;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod integration_routes;
pub mod monitor;
pub mod payload;
pub mod weather;
