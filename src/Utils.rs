//! different utility modules used throughout the project
/// settings read from TOML
pub mod config;
/// simplelog initialisation
pub mod logger;
