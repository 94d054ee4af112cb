pub mod auction;
pub mod config;
pub mod server;
