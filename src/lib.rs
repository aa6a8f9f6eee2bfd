pub mod complaints_core;
pub mod config;
