//! Admin user API endpoints

use serde_json::json;

use super::{ApiError, PortalClient};
use crate::models::{User, UserPage, UserQuery};

impl PortalClient {
    /// Get the paginated user list. Older portal versions return the page
    /// unwrapped (`{data, pagination}`) instead of the standard envelope;
    /// both shapes decode into [`UserPage`].
    pub async fn list_users(&self, query: &UserQuery) -> Result<UserPage, ApiError> {
        let endpoint = format!("admin/users?{}", query.to_query_string());
        self.get_raw(&endpoint).await
    }

    /// Get a user by id
    pub async fn get_user(&self, id: &str) -> Result<User, ApiError> {
        self.get_json(&format!("admin/users/{}", id)).await
    }

    /// Update a user's account status
    pub async fn update_user_status(&self, id: &str, status: &str) -> Result<User, ApiError> {
        self.put_json(
            &format!("admin/users/{}/status", id),
            &json!({ "status": status }),
        )
        .await
    }
}
