//! # Entity Cache
//!
//! Local mirror of a server-owned collection, mutated only through
//! explicit transitions.
//!
//! ## Cache Transitions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Entity Cache Transitions                        │
//! │                                                                     │
//! │  Fetch succeeds ─────────► set_all(items)      replace wholesale    │
//! │                                                                     │
//! │  Create succeeds ────────► apply_created(item) append               │
//! │                                                                     │
//! │  Update succeeds ────────► apply_updated(item) replace by id        │
//! │                                                                     │
//! │  Delete succeeds ────────► apply_deleted(id)   remove by id         │
//! │                                                                     │
//! │  INVARIANT: cache mirrors server state modulo in-flight requests.   │
//! │  Transitions run only after the server confirmed the mutation.      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

/// Anything the cache can address by server-issued id.
pub trait Entity {
    fn entity_id(&self) -> &str;
}

impl Entity for atlas_core::Customer {
    fn entity_id(&self) -> &str {
        &self.id
    }
}

impl Entity for atlas_core::Product {
    fn entity_id(&self) -> &str {
        &self.id
    }
}

/// Ordered collection of cached entities.
#[derive(Debug, Clone)]
pub struct EntityCache<T> {
    items: Vec<T>,
}

impl<T> Default for EntityCache<T> {
    fn default() -> Self {
        EntityCache { items: Vec::new() }
    }
}

impl<T: Entity> EntityCache<T> {
    pub fn new() -> Self {
        EntityCache { items: Vec::new() }
    }

    /// Replaces the whole cache after a list fetch.
    pub fn set_all(&mut self, items: Vec<T>) {
        self.items = items;
    }

    /// Appends a server-confirmed new entity.
    pub fn apply_created(&mut self, item: T) {
        self.items.push(item);
    }

    /// Replaces the entity with the same id. Unknown ids are ignored:
    /// the server confirmed an entity this cache never held, so there is
    /// nothing to patch.
    pub fn apply_updated(&mut self, item: T) {
        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|i| i.entity_id() == item.entity_id())
        {
            *existing = item;
        }
    }

    /// Removes the entity with the given id, if cached.
    pub fn apply_deleted(&mut self, id: &str) {
        self.items.retain(|i| i.entity_id() != id);
    }

    /// Looks up one entity by id.
    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|i| i.entity_id() == id)
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atlas_core::Customer;

    fn customer(id: &str, name: &str) -> Customer {
        Customer {
            id: id.to_string(),
            name: name.to_string(),
            address: "12 Market Road".to_string(),
            phone: "9876543210".to_string(),
        }
    }

    #[test]
    fn test_set_all_replaces_wholesale() {
        let mut cache = EntityCache::new();
        cache.set_all(vec![customer("1", "Asha")]);
        cache.set_all(vec![customer("2", "Bob"), customer("3", "Chandra")]);

        assert_eq!(cache.len(), 2);
        assert!(cache.get("1").is_none());
    }

    #[test]
    fn test_created_appends_in_order() {
        let mut cache = EntityCache::new();
        cache.set_all(vec![customer("1", "Asha")]);
        cache.apply_created(customer("2", "Bob"));

        assert_eq!(cache.items()[1].name, "Bob");
    }

    #[test]
    fn test_updated_replaces_by_id() {
        let mut cache = EntityCache::new();
        cache.set_all(vec![customer("1", "Asha"), customer("2", "Bob")]);

        cache.apply_updated(customer("2", "Robert"));
        assert_eq!(cache.get("2").unwrap().name, "Robert");
        assert_eq!(cache.len(), 2);

        // Unknown id leaves the cache untouched.
        cache.apply_updated(customer("9", "Ghost"));
        assert_eq!(cache.len(), 2);
        assert!(cache.get("9").is_none());
    }

    #[test]
    fn test_deleted_removes_by_id() {
        let mut cache = EntityCache::new();
        cache.set_all(vec![customer("1", "Asha"), customer("2", "Bob")]);

        cache.apply_deleted("1");
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.items()[0].id, "2");

        cache.apply_deleted("1");
        assert_eq!(cache.len(), 1);
    }
}
