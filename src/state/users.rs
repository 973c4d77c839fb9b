//! Admin user store: paginated cache plus synchronization operations

use super::cache::EntityCache;
use crate::api::PortalClient;
use crate::models::{Pagination, RegisterData, User, UserQuery};

/// User cache with the server-side list filters and pagination metadata
/// stored alongside the items.
#[derive(Debug)]
pub struct UserDirectory {
    cache: EntityCache<User>,
    pagination: Option<Pagination>,
    filters: UserQuery,
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self {
            cache: EntityCache::new(),
            pagination: None,
            filters: UserQuery::default(),
        }
    }
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[User] {
        self.cache.items()
    }

    pub fn focus(&self) -> Option<&User> {
        self.cache.focus()
    }

    pub fn is_pending(&self) -> bool {
        self.cache.is_pending()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.cache.last_error()
    }

    pub fn pagination(&self) -> Option<&Pagination> {
        self.pagination.as_ref()
    }

    pub fn filters(&self) -> &UserQuery {
        &self.filters
    }

    /// Merge new filter values; any change resets to the first page
    pub fn set_filters(&mut self, status: Option<String>, role: Option<String>, search: Option<String>) {
        self.filters.status = status;
        self.filters.role = role;
        self.filters.search = search;
        self.filters.page = 1;
    }

    pub fn reset_filters(&mut self) {
        self.filters = UserQuery::default();
    }

    /// Move to the next page if the server reported one
    pub fn next_page(&mut self) -> bool {
        if self.pagination.as_ref().is_some_and(|p| p.has_next_page) {
            self.filters.page += 1;
            true
        } else {
            false
        }
    }

    /// Move to the previous page if there is one
    pub fn prev_page(&mut self) -> bool {
        if self.filters.page > 1 {
            self.filters.page -= 1;
            true
        } else {
            false
        }
    }

    /// Fetch the user list for the current filters, replacing the cached
    /// page and its pagination metadata
    pub async fn load(&mut self, client: &PortalClient) {
        self.cache.begin();
        match client.list_users(&self.filters).await {
            Ok(page) => {
                self.pagination = page.pagination;
                self.cache.set_items(page.data);
            }
            Err(e) => self.cache.fail(e.user_message("Failed to fetch users")),
        }
    }

    /// Fetch one user into focus. A miss leaves the focus empty so the
    /// detail view renders its not-found state instead of a banner.
    pub async fn load_one(&mut self, client: &PortalClient, id: &str) {
        self.cache.begin();
        match client.get_user(id).await {
            Ok(user) => self.cache.set_focus(user),
            Err(e) if e.is_not_found() => {
                self.cache.clear_focus();
                self.cache.settle();
            }
            Err(e) => self.cache.fail(e.user_message("Failed to fetch user")),
        }
    }

    /// Create a user through admin registration; the created account is
    /// inserted at the front of the current page
    pub async fn create(&mut self, client: &PortalClient, data: &RegisterData) -> bool {
        self.cache.begin();
        match client.register(data).await {
            Ok(payload) => {
                self.cache.insert_front(payload.user);
                true
            }
            Err(e) => {
                self.cache.fail(e.user_message("Failed to create user"));
                false
            }
        }
    }

    /// Update a user's account status; the server's copy replaces the
    /// cached one (status field included, everything else as returned)
    pub async fn set_status(&mut self, client: &PortalClient, id: &str, status: &str) -> bool {
        self.cache.begin();
        match client.update_user_status(id, status).await {
            Ok(user) => {
                self.cache.upsert(user);
                true
            }
            Err(e) => {
                self.cache.fail(e.user_message("Failed to update user status"));
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_change_resets_page() {
        let mut directory = UserDirectory::new();
        directory.filters.page = 4;
        directory.set_filters(Some("active".to_string()), None, Some("nina".to_string()));
        assert_eq!(directory.filters().page, 1);
        assert_eq!(directory.filters().status.as_deref(), Some("active"));
    }

    #[test]
    fn test_prev_page_stops_at_first() {
        let mut directory = UserDirectory::new();
        assert!(!directory.prev_page());
        directory.filters.page = 3;
        assert!(directory.prev_page());
        assert_eq!(directory.filters().page, 2);
    }

    #[test]
    fn test_next_page_requires_server_metadata() {
        let mut directory = UserDirectory::new();
        // No pagination fetched yet: cannot page forward
        assert!(!directory.next_page());
        assert_eq!(directory.filters().page, 1);
    }
}
