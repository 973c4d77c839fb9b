//! Authenticated portal session

use crate::api::{ApiError, PortalClient};
use crate::models::{LoginCredentials, RegisterData, User};

/// The authenticated user. The bearer token itself lives in the client;
/// nothing is persisted beyond the process.
pub struct Session {
    user: User,
}

impl Session {
    /// Log in with credentials and store the bearer token into the client
    pub async fn login(
        client: &PortalClient,
        credentials: &LoginCredentials,
    ) -> Result<Self, ApiError> {
        let payload = client.login(credentials).await?;
        client.set_token(payload.token).await;
        Ok(Self { user: payload.user })
    }

    /// Self-register a new account; the returned token is stored so the
    /// session is immediately usable
    pub async fn create_account(
        client: &PortalClient,
        data: &RegisterData,
    ) -> Result<Self, ApiError> {
        let payload = client.create_account(data).await?;
        client.set_token(payload.token).await;
        Ok(Self { user: payload.user })
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    /// The acting user's role, feeding the role gate
    pub fn role(&self) -> &str {
        &self.user.role
    }

    /// Replace the cached user after a profile update
    pub fn replace_user(&mut self, user: User) {
        self.user = user;
    }
}
