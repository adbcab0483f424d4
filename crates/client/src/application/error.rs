//! Application-level error type
//!
//! Funnels HTTP-boundary, domain-conversion, and storage failures into one
//! type the editors can surface as a single user-facing alert.

use thiserror::Error;

use lorekeepr_domain::DomainError;

use crate::ports::outbound::ApiError;

#[derive(Debug, Error, Clone)]
pub enum ServiceError {
    /// The HTTP boundary failed; carries the response body text as detail.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The payload violated the data model (blank name, bad color, ...).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A record the caller asked for does not exist locally.
    #[error("Entity not found: {0}")]
    NotFound(String),

    /// The session store rejected a read or write.
    #[error("Storage error: {0}")]
    Storage(String),
}
