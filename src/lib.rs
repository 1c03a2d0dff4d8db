pub mod config;
pub mod error;
pub mod inference;
pub mod llm;
pub mod qr;
pub mod server;

pub use error::{Error, Result};
