pub mod config;
pub mod engine;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod services;
pub mod state;
pub mod widget;
