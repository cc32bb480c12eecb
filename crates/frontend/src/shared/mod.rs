pub mod config;
pub mod date_utils;
pub mod latency;
pub mod list_state;
pub mod list_store;
pub mod list_utils;
