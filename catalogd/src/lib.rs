pub mod catalog;
pub mod config;
pub mod proto;
pub mod router;
pub mod server;
pub mod services;
pub mod startup;
