pub mod config;
pub mod controller;
pub mod page;
pub mod server;
pub mod session;
