//! Infrastructure adapters implementing the outbound ports

pub mod http;
pub mod session_store;

pub use http::{ClientConfig, HttpApi};
pub use session_store::MemorySessionStore;
