pub mod config;
pub mod csrf;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod session;
pub mod templates_structs;
pub mod views;
