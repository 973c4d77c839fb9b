//! Training API endpoints

use serde_json::json;

use super::{ApiError, PortalClient};
use crate::models::{NewTraining, Training};

impl PortalClient {
    /// Get all trainings
    pub async fn list_trainings(&self) -> Result<Vec<Training>, ApiError> {
        self.get_json("trainings").await
    }

    /// Get a training by id
    pub async fn get_training(&self, id: &str) -> Result<Training, ApiError> {
        self.get_json(&format!("trainings/{}", id)).await
    }

    /// Create a training
    pub async fn create_training(&self, body: &NewTraining) -> Result<Training, ApiError> {
        self.post_json("trainings", body).await
    }

    /// Update a training
    pub async fn update_training(&self, id: &str, body: &NewTraining) -> Result<Training, ApiError> {
        self.put_json(&format!("trainings/{}", id), body).await
    }

    /// Assign users to a training. Duplicate ids are allowed here; the
    /// server deduplicates and returns the authoritative assignment list.
    pub async fn assign_users(&self, id: &str, user_ids: &[String]) -> Result<Training, ApiError> {
        self.post_json(
            &format!("trainings/{}/assign", id),
            &json!({ "userIds": user_ids }),
        )
        .await
    }

    /// Delete a training
    pub async fn delete_training(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("trainings/{}", id)).await
    }
}
