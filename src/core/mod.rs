pub mod alphabet;
pub mod boundary;
pub mod cache;
pub mod config;
