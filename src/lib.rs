//! minehut library: blocking client for the Minehut public server API.

pub mod client;
pub mod error;
pub mod model;

pub use client::MinehutClient;
pub use error::Error;
pub use model::{ServerInfo, ServerRecord};
