//! LoreKeepr Client - the campaign manager's client core
//!
//! Hexagonal layout:
//! - `ports` - outbound interfaces (HTTP boundary, shell, storage)
//! - `infrastructure` - adapters implementing the ports (reqwest, session
//!   storage)
//! - `application` - typed API wrapper, per-resource services, the
//!   generalized entity editor, the content browser, and the character vault
//! - `routes` - navigation targets the shell is asked to visit
//!
//! Presentation (views, styling, routing chrome) lives outside this crate;
//! everything here is headless and driven through the `ShellPort`.

pub mod application;
pub mod infrastructure;
pub mod ports;
pub mod routes;

pub use application::api::Api;
pub use application::error::ServiceError;
pub use infrastructure::http::{ClientConfig, HttpApi};
pub use ports::outbound::{ApiError, ApiPort, RawApiPort, ShellPort, StorageProvider};
pub use routes::{Route, Section};
