//! Department API endpoints

use super::{ApiError, PortalClient};
use crate::models::{Department, NewDepartment};

impl PortalClient {
    /// Get all departments
    pub async fn list_departments(&self) -> Result<Vec<Department>, ApiError> {
        self.get_json("departments").await
    }

    /// Get a department by id
    pub async fn get_department(&self, id: &str) -> Result<Department, ApiError> {
        self.get_json(&format!("departments/{}", id)).await
    }

    /// Create a department
    pub async fn create_department(&self, body: &NewDepartment) -> Result<Department, ApiError> {
        self.post_json("departments", body).await
    }

    /// Update a department
    pub async fn update_department(
        &self,
        id: &str,
        body: &NewDepartment,
    ) -> Result<Department, ApiError> {
        self.put_json(&format!("departments/{}", id), body).await
    }

    /// Delete a department
    pub async fn delete_department(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("departments/{}", id)).await
    }
}
