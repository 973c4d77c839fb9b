//! Training store: cache plus synchronization operations

use super::cache::EntityCache;
use crate::api::PortalClient;
use crate::models::{NewTraining, Training};

#[derive(Debug, Default)]
pub struct TrainingStore {
    cache: EntityCache<Training>,
}

impl TrainingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Training] {
        self.cache.items()
    }

    pub fn focus(&self) -> Option<&Training> {
        self.cache.focus()
    }

    pub fn is_pending(&self) -> bool {
        self.cache.is_pending()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.cache.last_error()
    }

    /// Fetch all trainings, replacing the cached list
    pub async fn load(&mut self, client: &PortalClient) {
        self.cache.begin();
        match client.list_trainings().await {
            Ok(trainings) => self.cache.set_items(trainings),
            Err(e) => self.cache.fail(e.user_message("Failed to fetch trainings")),
        }
    }

    /// Fetch one training into focus. A miss leaves the focus empty so the
    /// detail view renders its not-found state instead of a banner.
    pub async fn load_one(&mut self, client: &PortalClient, id: &str) {
        self.cache.begin();
        match client.get_training(id).await {
            Ok(training) => self.cache.set_focus(training),
            Err(e) if e.is_not_found() => {
                self.cache.clear_focus();
                self.cache.settle();
            }
            Err(e) => self.cache.fail(e.user_message("Failed to fetch training")),
        }
    }

    /// Create a training; the new entity surfaces at the front of the list
    pub async fn create(&mut self, client: &PortalClient, body: &NewTraining) -> bool {
        self.cache.begin();
        match client.create_training(body).await {
            Ok(training) => {
                self.cache.insert_front(training);
                true
            }
            Err(e) => {
                self.cache.fail(e.user_message("Failed to create training"));
                false
            }
        }
    }

    /// Update a training
    pub async fn update(&mut self, client: &PortalClient, id: &str, body: &NewTraining) -> bool {
        self.cache.begin();
        match client.update_training(id, body).await {
            Ok(training) => {
                self.cache.upsert(training);
                true
            }
            Err(e) => {
                self.cache.fail(e.user_message("Failed to update training"));
                false
            }
        }
    }

    /// Replace a training's assignments. The cached `users` list becomes the
    /// server's response, never a locally computed union.
    pub async fn assign_users(
        &mut self,
        client: &PortalClient,
        id: &str,
        user_ids: Vec<String>,
    ) -> bool {
        self.cache.begin();
        match client.assign_users(id, &user_ids).await {
            Ok(training) => {
                self.cache.upsert(training);
                true
            }
            Err(e) => {
                self.cache.fail(e.user_message("Failed to assign users"));
                false
            }
        }
    }

    /// Delete a training
    pub async fn delete(&mut self, client: &PortalClient, id: &str) -> bool {
        self.cache.begin();
        match client.delete_training(id).await {
            Ok(()) => {
                self.cache.remove(id);
                true
            }
            Err(e) => {
                self.cache.fail(e.user_message("Failed to delete training"));
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
