pub mod config;
pub mod error;
pub mod server;

pub use config::ServerConfig;
pub use server::{router, serve, Server};
