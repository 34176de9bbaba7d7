pub mod config;
pub mod http;
pub mod observability;
pub mod providers;
