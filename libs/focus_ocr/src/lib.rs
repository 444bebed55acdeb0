pub mod capture;
pub mod common;
pub mod host;
pub mod languages;
pub mod logger;
pub mod plugin;
pub mod recognize;
pub mod settings;
