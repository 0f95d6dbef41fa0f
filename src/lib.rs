pub mod app;
pub mod client;
pub mod config;
pub mod error;
pub mod interface;
pub mod model;
