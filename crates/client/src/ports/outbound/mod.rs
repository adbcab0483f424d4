//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must
//! implement, allowing application services to interact with external systems
//! without depending on concrete implementations.

pub mod api_port;
pub mod platform;
pub mod raw_api_port;
pub mod shell_port;
pub mod testing;

pub use api_port::{ApiError, ApiPort};
pub use platform::{storage_keys, StorageProvider};
pub use raw_api_port::RawApiPort;
pub use shell_port::ShellPort;

// Re-export the shell mock for convenience
#[cfg(any(test, feature = "testing"))]
pub use shell_port::MockShellPort;
