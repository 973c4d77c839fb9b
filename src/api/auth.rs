//! Authentication and profile API endpoints

use super::{ApiError, PortalClient};
use crate::models::{AuthPayload, LoginCredentials, ProfileUpdate, RegisterData, User};

impl PortalClient {
    /// Exchange credentials for a token pair and the authenticated user
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<AuthPayload, ApiError> {
        self.post_json("auth/login", credentials).await
    }

    /// Register a user (admin-created account)
    pub async fn register(&self, data: &RegisterData) -> Result<AuthPayload, ApiError> {
        self.post_json("auth/register", data).await
    }

    /// Self-registration
    pub async fn create_account(&self, data: &RegisterData) -> Result<AuthPayload, ApiError> {
        self.post_json("auth/create-account", data).await
    }

    /// Get the authenticated user's profile
    pub async fn get_profile(&self) -> Result<User, ApiError> {
        self.get_json("users/profile").await
    }

    /// Update the authenticated user's profile
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<User, ApiError> {
        self.put_json("users/profile", update).await
    }
}
