pub mod analyzers;
pub mod config;
pub mod error;
pub mod fetch;
pub mod format;
pub mod infra;
pub mod model;
pub mod normalize;
pub mod output;
pub mod services;
pub mod session;
