// src/config/mod.rs
// DOCUMENTATION: Configuration module organization
// PURPOSE: Re-export configuration components

pub mod api_key;
pub mod env;

pub use api_key::ApiKey;
pub use env::Config;
