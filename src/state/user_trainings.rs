//! Assignment-progress store (read-mostly) and compliance dashboard

use super::cache::EntityCache;
use crate::api::PortalClient;
use crate::models::{ComplianceDashboard, UserTraining};

#[derive(Debug, Default)]
pub struct UserTrainingStore {
    cache: EntityCache<UserTraining>,
    dashboard: Option<ComplianceDashboard>,
}

impl UserTrainingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[UserTraining] {
        self.cache.items()
    }

    pub fn is_pending(&self) -> bool {
        self.cache.is_pending()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.cache.last_error()
    }

    pub fn dashboard(&self) -> Option<&ComplianceDashboard> {
        self.dashboard.as_ref()
    }

    /// Fetch the authenticated user's own assignments
    pub async fn load_mine(&mut self, client: &PortalClient) {
        self.cache.begin();
        match client.my_trainings().await {
            Ok(records) => self.cache.set_items(records),
            Err(e) => self.cache.fail(e.user_message("Failed to fetch my trainings")),
        }
    }

    /// Fetch every assignment record (manager/admin views)
    pub async fn load_all(&mut self, client: &PortalClient) {
        self.cache.begin();
        match client.list_user_trainings().await {
            Ok(records) => self.cache.set_items(records),
            Err(e) => self.cache.fail(e.user_message("Failed to fetch training records")),
        }
    }

    /// Update one assignment's progress status
    pub async fn set_status(&mut self, client: &PortalClient, id: &str, status: &str) -> bool {
        self.cache.begin();
        match client.update_user_training_status(id, status).await {
            Ok(record) => {
                self.cache.upsert(record);
                true
            }
            Err(e) => {
                self.cache.fail(e.user_message("Failed to update training status"));
                false
            }
        }
    }

    /// Fetch the aggregate compliance dashboard
    pub async fn load_dashboard(&mut self, client: &PortalClient, department_id: Option<&str>) {
        self.cache.begin();
        match client.compliance_dashboard(department_id).await {
            Ok(dashboard) => {
                self.dashboard = Some(dashboard);
                self.cache.settle();
            }
            Err(e) => self
                .cache
                .fail(e.user_message("Failed to load compliance dashboard")),
        }
    }

    pub fn clear_error(&mut self) {
        self.cache.clear_error();
    }
}
