//! Auth service - session login/register/logout
//!
//! The engine answers login/register with the user record and a session
//! cookie; the cookie store on the HTTP adapter keeps it flowing afterwards.
//! Logout is addressed under the same `/api/users` prefix as its siblings
//! (see DESIGN.md).

use lorekeepr_protocol::{LoginRequest, RegisterRequest, UserDto};

use crate::application::error::ServiceError;
use crate::ports::outbound::ApiPort;

#[derive(Clone)]
pub struct AuthService<A: ApiPort> {
    api: A,
}

impl<A: ApiPort> AuthService<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<UserDto, ServiceError> {
        Ok(self.api.post("/api/users/login", request).await?)
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<UserDto, ServiceError> {
        Ok(self.api.post("/api/users/register", request).await?)
    }

    pub async fn logout(&self) -> Result<(), ServiceError> {
        Ok(self.api.post_empty("/api/users/logout").await?)
    }
}
