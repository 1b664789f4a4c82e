pub mod cli;
pub mod config;
pub mod defaults;
pub mod handlers;
pub mod models;
pub mod service;
pub mod store;
pub mod tasks;
