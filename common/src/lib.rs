pub mod amount;
pub mod config;
pub mod frame;
