//! Repository Tests
//!
//! GoalRepository over the in-memory backend.

#[cfg(test)]
mod tests {
    use crate::domain::Category;
    use crate::error::{StoreError, StoreResult};
    use crate::repository::{GoalRepository, KeyValueStore, MemoryStore};
    use crate::store::GoalStore;
    use crate::TrackerConfig;

    /// Backend whose every call fails
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> StoreResult<Option<String>> {
            Err(StoreError::Backend("SecurityError".to_string()))
        }

        fn set(&self, _key: &str, _value: &str) -> StoreResult<()> {
            Err(StoreError::Backend("QuotaExceededError".to_string()))
        }
    }

    fn setup_repo() -> GoalRepository<MemoryStore> {
        GoalRepository::with_config(MemoryStore::new(), &TrackerConfig::default())
    }

    #[test]
    fn test_load_missing_slot() {
        let repo = setup_repo();
        assert!(repo.load().is_empty());
    }

    #[test]
    fn test_load_malformed_slot() {
        for raw in ["not json", "{\"id\": 1}", "[{\"title\": \"x\"}]", ""] {
            let repo = GoalRepository::new(MemoryStore::with_slot("goals", raw), "goals");
            assert!(repo.load().is_empty(), "expected empty store for {:?}", raw);
        }
    }

    #[test]
    fn test_load_empty_array() {
        let repo = GoalRepository::new(MemoryStore::with_slot("goals", "[]"), "goals");
        assert!(repo.load().is_empty());
    }

    #[test]
    fn test_persist_then_load_roundtrip() {
        let repo = setup_repo();
        let mut store = GoalStore::new();
        let a = store.create("Read more", "two books a month", Category::Learning).unwrap();
        let b = store.create("Run", "", Category::Health).unwrap();
        store.adjust_progress(&a, 30);
        store.toggle_complete(&b);
        store.toggle_complete(&b);

        repo.persist(store.goals()).expect("persist failed");
        let loaded = repo.load();

        assert_eq!(loaded, store);
    }

    #[test]
    fn test_load_repairs_out_of_range_progress() {
        let raw = r#"[{
            "id": "1712345678901",
            "title": "Overshoot",
            "description": "",
            "category": "health",
            "progress": 150,
            "completed": false,
            "createdAt": "2024-04-05T19:34:38.901Z"
        }]"#;
        let repo = GoalRepository::new(MemoryStore::with_slot("goals", raw), "goals");
        let mut store = repo.load();
        let id = store.goals()[0].id.clone();
        assert_eq!(store.goals()[0].progress, 100);
        assert!(!store.goals()[0].completed);

        store.adjust_progress(&id, -10);
        let goal = store.get(&id).unwrap();
        assert_eq!(goal.progress, 90);
        assert!(!goal.completed);
    }

    #[test]
    fn test_load_keeps_records_with_unknown_category() {
        let raw = r#"[
            {"id": "1", "title": "Paint", "description": "", "category": "Hobby",
             "progress": 10, "completed": false, "createdAt": "2024-04-05T19:34:38.901Z"},
            {"id": "2", "title": "Budget", "description": "", "category": "finance",
             "progress": 0, "completed": false, "createdAt": "2024-04-05T19:35:00Z"}
        ]"#;
        let repo = GoalRepository::new(MemoryStore::with_slot("goals", raw), "goals");
        let store = repo.load();

        assert_eq!(store.len(), 2);
        assert_eq!(store.goals()[0].category, Category::Other);
        assert_eq!(store.goals()[1].category, Category::Finance);
    }

    #[test]
    fn test_persist_writes_configured_key() {
        let repo = GoalRepository::new(MemoryStore::new(), "my-goals");
        repo.persist(&[]).unwrap();

        assert_eq!(repo.backend().get("my-goals").unwrap().as_deref(), Some("[]"));
        assert_eq!(repo.backend().get("goals").unwrap(), None);
    }

    #[test]
    fn test_broken_backend() {
        let repo = GoalRepository::new(BrokenStore, "goals");
        assert!(repo.load().is_empty());
        assert!(matches!(repo.persist(&[]), Err(StoreError::Backend(_))));
    }
}
