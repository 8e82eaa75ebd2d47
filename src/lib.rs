pub mod api;
pub mod cmd;
pub mod config;
pub mod constants;
pub mod shared_types;
pub mod utils;
