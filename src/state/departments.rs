//! Department store: cache plus synchronization operations

use super::cache::EntityCache;
use crate::api::PortalClient;
use crate::models::{Department, NewDepartment};

/// Department cache and its operations. Each operation pairs one portal
/// call with the matching cache transition; failures reduce to a display
/// string and leave cached data untouched.
#[derive(Debug, Default)]
pub struct DepartmentStore {
    cache: EntityCache<Department>,
}

impl DepartmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Department] {
        self.cache.items()
    }

    pub fn focus(&self) -> Option<&Department> {
        self.cache.focus()
    }

    pub fn is_pending(&self) -> bool {
        self.cache.is_pending()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.cache.last_error()
    }

    /// Fetch all departments, replacing the cached list
    pub async fn load(&mut self, client: &PortalClient) {
        self.cache.begin();
        match client.list_departments().await {
            Ok(departments) => self.cache.set_items(departments),
            Err(e) => self.cache.fail(e.user_message("Failed to fetch departments")),
        }
    }

    /// Fetch one department into focus. A miss leaves the focus empty so
    /// the detail view renders its not-found state instead of a banner.
    pub async fn load_one(&mut self, client: &PortalClient, id: &str) {
        self.cache.begin();
        match client.get_department(id).await {
            Ok(department) => self.cache.set_focus(department),
            Err(e) if e.is_not_found() => {
                self.cache.clear_focus();
                self.cache.settle();
            }
            Err(e) => self.cache.fail(e.user_message("Failed to fetch department")),
        }
    }

    /// Create a department; returns whether the call succeeded
    pub async fn create(&mut self, client: &PortalClient, body: &NewDepartment) -> bool {
        self.cache.begin();
        match client.create_department(body).await {
            Ok(department) => {
                self.cache.insert_front(department);
                true
            }
            Err(e) => {
                self.cache.fail(e.user_message("Failed to create department"));
                false
            }
        }
    }

    /// Update a department; the server copy replaces the cached one
    pub async fn update(&mut self, client: &PortalClient, id: &str, body: &NewDepartment) -> bool {
        self.cache.begin();
        match client.update_department(id, body).await {
            Ok(department) => {
                self.cache.upsert(department);
                true
            }
            Err(e) => {
                self.cache.fail(e.user_message("Failed to update department"));
                false
            }
        }
    }

    /// Delete a department; removed from the cache only after confirmation
    pub async fn delete(&mut self, client: &PortalClient, id: &str) -> bool {
        self.cache.begin();
        match client.delete_department(id).await {
            Ok(()) => {
                self.cache.remove(id);
                true
            }
            Err(e) => {
                self.cache.fail(e.user_message("Failed to delete department"));
                false
            }
        }
    }

    pub fn clear_error(&mut self) {
        self.cache.clear_error();
    }

    pub fn clear_focus(&mut self) {
        self.cache.clear_focus();
    }
}
