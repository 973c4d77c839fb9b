//! Assignment-progress and compliance dashboard endpoints

use serde_json::json;

use super::{ApiError, PortalClient};
use crate::models::{ComplianceDashboard, UserTraining};

impl PortalClient {
    /// Get the authenticated user's own training assignments
    pub async fn my_trainings(&self) -> Result<Vec<UserTraining>, ApiError> {
        self.get_json("user-trainings/my-trainings").await
    }

    /// Get all training assignments
    pub async fn list_user_trainings(&self) -> Result<Vec<UserTraining>, ApiError> {
        self.get_json("user-trainings").await
    }

    /// Update an assignment's progress status
    pub async fn update_user_training_status(
        &self,
        id: &str,
        status: &str,
    ) -> Result<UserTraining, ApiError> {
        self.put_json(
            &format!("user-trainings/{}/status", id),
            &json!({ "status": status }),
        )
        .await
    }

    /// Get aggregate compliance figures, optionally scoped to a department
    pub async fn compliance_dashboard(
        &self,
        department_id: Option<&str>,
    ) -> Result<ComplianceDashboard, ApiError> {
        let endpoint = match department_id {
            Some(id) => format!(
                "user-trainings/compliance-dashboard?departmentId={}",
                urlencoding::encode(id)
            ),
            None => "user-trainings/compliance-dashboard".to_string(),
        };
        self.get_json(&endpoint).await
    }
}
