//! Client-side entity cache with a pending/fulfilled/rejected lifecycle
//!
//! One cache instance exists per entity type. All mutation goes through the
//! named transitions below; callers never touch fields directly. Operations
//! on the same entity type share the single pending/error pair, so a second
//! in-flight call overwrites the first's bookkeeping when it resolves
//! (last-write-wins, not a queued-request guarantee).

/// Cached entity types expose their server-assigned id.
pub trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for crate::models::User {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for crate::models::Department {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for crate::models::Training {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for crate::models::UserTraining {
    fn key(&self) -> &str {
        &self.id
    }
}

/// The server-derived copy of one entity collection plus the single entity
/// currently in detail focus.
#[derive(Debug)]
pub struct EntityCache<T> {
    items: Vec<T>,
    focus: Option<T>,
    pending: bool,
    last_error: Option<String>,
}

impl<T> Default for EntityCache<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            focus: None,
            pending: false,
            last_error: None,
        }
    }
}

impl<T: Keyed> EntityCache<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn focus(&self) -> Option<&T> {
        self.focus.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// An operation was issued: enter the pending window.
    pub fn begin(&mut self) {
        self.pending = true;
        self.last_error = None;
    }

    /// An operation failed: items and focus stay untouched.
    pub fn fail(&mut self, message: String) {
        self.pending = false;
        self.last_error = Some(message);
    }

    /// List fetch succeeded: replace the collection wholesale.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.pending = false;
        self.items = items;
    }

    /// Fetch-by-id succeeded: the response becomes the focus entity.
    pub fn set_focus(&mut self, item: T) {
        self.pending = false;
        self.focus = Some(item);
    }

    /// Create succeeded: insert the server-returned entity at the front
    /// (newest first). Any stale copy with the same id is dropped so the
    /// entity appears exactly once.
    pub fn insert_front(&mut self, item: T) {
        self.pending = false;
        self.items.retain(|existing| existing.key() != item.key());
        self.items.insert(0, item);
    }

    /// Update succeeded: replace the matching item, and the focus when it
    /// carries the same id. An item absent from the list is not inserted.
    pub fn upsert(&mut self, item: T)
    where
        T: Clone,
    {
        self.pending = false;
        if let Some(existing) = self.items.iter_mut().find(|e| e.key() == item.key()) {
            *existing = item.clone();
        }
        if self.focus.as_ref().is_some_and(|f| f.key() == item.key()) {
            self.focus = Some(item);
        }
    }

    /// Delete succeeded: drop the entity, clearing a matching focus.
    pub fn remove(&mut self, id: &str) {
        self.pending = false;
        self.items.retain(|existing| existing.key() != id);
        if self.focus.as_ref().is_some_and(|f| f.key() == id) {
            self.focus = None;
        }
    }

    /// An operation succeeded without touching the collection (payloads
    /// stored outside the cache, e.g. dashboard aggregates).
    pub fn settle(&mut self) {
        self.pending = false;
    }

    /// Dismiss the error banner without a network call.
    pub fn clear_error(&mut self) {
        self.last_error = None;
    }

    /// Detail view teardown: never let a later navigation show the
    /// previous entity.
    pub fn clear_focus(&mut self) {
        self.focus = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: String,
        value: u32,
    }

    impl Keyed for Item {
        fn key(&self) -> &str {
            &self.id
        }
    }

    fn item(id: &str, value: u32) -> Item {
        Item {
            id: id.to_string(),
            value,
        }
    }

    fn seeded() -> EntityCache<Item> {
        let mut cache = EntityCache::new();
        cache.begin();
        cache.set_items(vec![item("a", 1), item("b", 2)]);
        cache
    }

    #[test]
    fn test_list_fulfilled_replaces_wholesale() {
        let mut cache = seeded();
        cache.begin();
        assert!(cache.is_pending());
        cache.set_items(vec![item("c", 3)]);

        assert!(!cache.is_pending());
        assert_eq!(cache.items().len(), 1);
        assert_eq!(cache.items()[0].id, "c");
        assert_eq!(cache.last_error(), None);
    }

    #[test]
    fn test_failed_operation_leaves_data_untouched() {
        let mut cache = seeded();
        cache.begin();
        cache.set_focus(item("a", 1));
        let before_items = cache.items().to_vec();

        cache.begin();
        cache.fail("Failed to fetch".to_string());

        assert_eq!(cache.items(), &before_items[..]);
        assert_eq!(cache.focus(), Some(&item("a", 1)));
        assert!(!cache.is_pending());
        assert_eq!(cache.last_error(), Some("Failed to fetch"));
    }

    #[test]
    fn test_begin_clears_previous_error() {
        let mut cache = seeded();
        cache.fail("boom".to_string());
        cache.begin();
        assert_eq!(cache.last_error(), None);
        assert!(cache.is_pending());
    }

    #[test]
    fn test_insert_front_appears_exactly_once() {
        let mut cache = seeded();
        cache.begin();
        cache.insert_front(item("c", 3));
        assert_eq!(cache.items()[0].id, "c");
        assert_eq!(cache.items().len(), 3);

        // A second create response with the same id does not duplicate
        cache.begin();
        cache.insert_front(item("c", 4));
        let count = cache.items().iter().filter(|i| i.id == "c").count();
        assert_eq!(count, 1);
        assert_eq!(cache.items()[0].value, 4);
    }

    #[test]
    fn test_upsert_replaces_item_and_matching_focus() {
        let mut cache = seeded();
        cache.begin();
        cache.set_focus(item("b", 2));

        cache.begin();
        cache.upsert(item("b", 20));

        assert_eq!(cache.items()[1].value, 20);
        assert_eq!(cache.focus().unwrap().value, 20);
    }

    #[test]
    fn test_upsert_ignores_unknown_id_and_other_focus() {
        let mut cache = seeded();
        cache.begin();
        cache.set_focus(item("a", 1));

        cache.begin();
        cache.upsert(item("zz", 9));

        assert_eq!(cache.items().len(), 2);
        assert_eq!(cache.focus().unwrap().id, "a");
    }

    #[test]
    fn test_remove_clears_matching_focus() {
        let mut cache = seeded();
        cache.begin();
        cache.set_focus(item("a", 1));

        cache.begin();
        cache.remove("a");

        assert_eq!(cache.items().len(), 1);
        assert_eq!(cache.items()[0].id, "b");
        assert!(cache.focus().is_none());
    }

    #[test]
    fn test_remove_keeps_unrelated_focus() {
        let mut cache = seeded();
        cache.begin();
        cache.set_focus(item("b", 2));

        cache.begin();
        cache.remove("a");

        assert_eq!(cache.focus().unwrap().id, "b");
    }

    #[test]
    fn test_clear_error_is_local() {
        let mut cache = seeded();
        cache.fail("transient".to_string());
        cache.clear_error();
        assert_eq!(cache.last_error(), None);
        assert_eq!(cache.items().len(), 2);
    }

    #[test]
    fn test_clear_focus_on_teardown() {
        let mut cache = seeded();
        cache.begin();
        cache.set_focus(item("a", 1));
        cache.clear_focus();
        assert!(cache.focus().is_none());
        // The list is not affected by focus teardown
        assert_eq!(cache.items().len(), 2);
    }

    #[test]
    fn test_last_write_wins_on_flags() {
        let mut cache = seeded();
        // Two operations issued back to back; the second resolution
        // overwrites the first's bookkeeping.
        cache.begin();
        cache.begin();
        cache.fail("first".to_string());
        cache.set_items(vec![item("z", 0)]);
        assert!(!cache.is_pending());
        // fail() set the error, set_items() does not clear it; only the
        // next begin() or clear_error() does.
        assert_eq!(cache.last_error(), Some("first"));
        assert_eq!(cache.items()[0].id, "z");
    }
}
