use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde_json::Value;

use crate::query::{Query, Row, StoreError, TableStore};

/// In-memory TableStore for testing and native fallback.
///
/// Evaluates filters and ordering with the same semantics as the hosted
/// service's REST dialect (see [`crate::Filter::matches`]).
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<HashMap<String, Vec<Row>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TableStore for MemoryStore {
    async fn select(&self, table: &str, query: Query) -> Result<Vec<Row>, StoreError> {
        let tables = self.tables.lock().unwrap();
        let mut rows: Vec<Row> = tables
            .get(table)
            .map(|rows| rows.iter().filter(|r| query.matches(r)).cloned().collect())
            .unwrap_or_default();

        if let Some(ref order) = query.order {
            rows.sort_by(|a, b| {
                let ordering = cmp_columns(a.get(&order.column), b.get(&order.column));
                if order.descending {
                    ordering.reverse()
                } else {
                    ordering
                }
            });
        }

        if !query.columns.is_empty() {
            for row in &mut rows {
                row.retain(|key, _| query.columns.iter().any(|c| c == key));
            }
        }

        Ok(rows)
    }

    async fn insert(&self, table: &str, row: Row) -> Result<Row, StoreError> {
        let mut tables = self.tables.lock().unwrap();
        tables.entry(table.to_string()).or_default().push(row.clone());
        Ok(row)
    }

    async fn update(&self, table: &str, patch: Row, query: Query) -> Result<Row, StoreError> {
        let mut tables = self.tables.lock().unwrap();
        let rows = tables.entry(table.to_string()).or_default();

        let mut updated = None;
        for row in rows.iter_mut().filter(|r| query.matches(r)) {
            for (key, value) in &patch {
                row.insert(key.clone(), value.clone());
            }
            updated.get_or_insert_with(|| row.clone());
        }

        updated.ok_or_else(|| StoreError::NotFound(table.to_string()))
    }

    async fn delete(&self, table: &str, query: Query) -> Result<(), StoreError> {
        let mut tables = self.tables.lock().unwrap();
        if let Some(rows) = tables.get_mut(table) {
            rows.retain(|r| !query.matches(r));
        }
        Ok(())
    }
}

fn cmp_columns(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::Number(x)), Some(Value::Number(y))) => x
            .as_f64()
            .unwrap_or(0.0)
            .partial_cmp(&y.as_f64().unwrap_or(0.0))
            .unwrap_or(Ordering::Equal),
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        _ => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matches_query;
    use crate::models::ProfileUpdate;
    use crate::service::DataService;
    use serde_json::json;

    fn row(value: Value) -> Row {
        value.as_object().unwrap().clone()
    }

    async fn seed_catalog(store: &MemoryStore) {
        let courses = [
            json!({
                "id": 1,
                "title": "Intro to Go",
                "description": "Concurrency from first principles",
                "price": 29.0,
                "thumbnail": null,
                "category_id": 1,
                "created_at": "2024-01-01T00:00:00Z",
            }),
            json!({
                "id": 2,
                "title": "Advanced Rust",
                "description": "Ownership, lifetimes, unsafe",
                "price": 49.0,
                "thumbnail": "https://img.example/rust.png",
                "category_id": 1,
                "created_at": "2024-02-01T00:00:00Z",
            }),
            json!({
                "id": 7,
                "title": "Watercolor Basics",
                "description": "Paint your first landscape",
                "price": 19.0,
                "thumbnail": null,
                "category_id": null,
                "created_at": "2024-03-01T00:00:00Z",
            }),
        ];
        for course in courses {
            store.insert("courses", row(course)).await.unwrap();
        }
        store
            .insert("categories", row(json!({"id": 1, "name": "Programming"})))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_search_returns_matching_subset() {
        let store = MemoryStore::new();
        seed_catalog(&store).await;
        let service = DataService::new(store);

        let hits = service.search_courses("go").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Intro to Go");

        // The visible list is exactly the subset the reference predicate accepts
        let catalog = service.list_courses().await.unwrap();
        for term in ["go", "RUST", "paint", "first", "nothing-matches-this"] {
            let visible = service.search_courses(term).await.unwrap();
            let expected: Vec<_> = catalog
                .iter()
                .filter(|c| matches_query(c, term))
                .cloned()
                .collect();
            assert_eq!(visible, expected, "term {term:?}");
        }
    }

    #[tokio::test]
    async fn test_empty_search_is_full_catalog_newest_first() {
        let store = MemoryStore::new();
        seed_catalog(&store).await;
        let service = DataService::new(store);

        let all = service.search_courses("").await.unwrap();
        let ids: Vec<i64> = all.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![7, 2, 1]);

        assert_eq!(service.list_courses().await.unwrap(), all);
    }

    #[tokio::test]
    async fn test_list_categories() {
        let store = MemoryStore::new();
        seed_catalog(&store).await;
        let service = DataService::new(store);

        let categories = service.list_categories().await.unwrap();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].name, "Programming");
    }

    #[tokio::test]
    async fn test_save_then_resolve_saved_courses() {
        let store = MemoryStore::new();
        seed_catalog(&store).await;
        let service = DataService::new(store);

        service.save_course("u1", 7).await.unwrap();

        assert!(service.is_saved("u1", 7).await.unwrap());
        assert_eq!(service.saved_course_ids("u1").await.unwrap(), vec![7]);

        let saved = service.saved_courses("u1").await.unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].id, 7);

        // Another user's view is unaffected
        assert!(!service.is_saved("u2", 7).await.unwrap());
    }

    #[tokio::test]
    async fn test_duplicate_save_keeps_a_single_row() {
        let store = MemoryStore::new();
        seed_catalog(&store).await;
        let service = DataService::new(store.clone());

        service.save_course("u1", 2).await.unwrap();
        service.save_course("u1", 2).await.unwrap();

        let rows = store
            .select("user_saved_courses", Query::new())
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[tokio::test]
    async fn test_unsave_is_idempotent() {
        let store = MemoryStore::new();
        seed_catalog(&store).await;
        let service = DataService::new(store);

        service.save_course("u1", 1).await.unwrap();
        service.unsave_course("u1", 1).await.unwrap();
        assert!(!service.is_saved("u1", 1).await.unwrap());

        // Deleting an absent pair is still Ok
        service.unsave_course("u1", 1).await.unwrap();
    }

    #[tokio::test]
    async fn test_even_toggles_restore_membership() {
        let store = MemoryStore::new();
        seed_catalog(&store).await;
        let service = DataService::new(store);

        for _ in 0..2 {
            service.save_course("u1", 2).await.unwrap();
            service.unsave_course("u1", 2).await.unwrap();
        }
        assert!(!service.is_saved("u1", 2).await.unwrap());

        service.save_course("u1", 2).await.unwrap();
        assert!(service.is_saved("u1", 2).await.unwrap());
    }

    /// TableStore wrapper counting select calls, to pin down the dependent
    /// fetch short-circuit.
    #[derive(Clone)]
    struct CountingStore {
        inner: MemoryStore,
        selects: Arc<Mutex<usize>>,
    }

    impl TableStore for CountingStore {
        async fn select(&self, table: &str, query: Query) -> Result<Vec<Row>, StoreError> {
            *self.selects.lock().unwrap() += 1;
            self.inner.select(table, query).await
        }

        async fn insert(&self, table: &str, row: Row) -> Result<Row, StoreError> {
            self.inner.insert(table, row).await
        }

        async fn update(&self, table: &str, patch: Row, query: Query) -> Result<Row, StoreError> {
            self.inner.update(table, patch, query).await
        }

        async fn delete(&self, table: &str, query: Query) -> Result<(), StoreError> {
            self.inner.delete(table, query).await
        }
    }

    #[tokio::test]
    async fn test_no_saved_courses_is_empty_without_second_query() {
        let counting = CountingStore {
            inner: MemoryStore::new(),
            selects: Arc::new(Mutex::new(0)),
        };
        let selects = counting.selects.clone();
        let service = DataService::new(counting);

        let saved = service.saved_courses("nobody").await.unwrap();
        assert!(saved.is_empty());
        assert_eq!(*selects.lock().unwrap(), 1, "only the ID query ran");
    }

    #[tokio::test]
    async fn test_profile_round_trip() {
        let store = MemoryStore::new();
        store
            .insert(
                "profiles",
                row(json!({"user_id": "u1", "full_name": "Ada", "bio": null})),
            )
            .await
            .unwrap();
        let service = DataService::new(store);

        let profile = service.profile("u1").await.unwrap();
        assert_eq!(profile.full_name.as_deref(), Some("Ada"));
        assert_eq!(profile.bio, None);

        assert_eq!(
            service.profile("u2").await,
            Err(StoreError::NotFound("profiles".to_string()))
        );
    }

    #[tokio::test]
    async fn test_bio_only_update_preserves_full_name() {
        let store = MemoryStore::new();
        store
            .insert(
                "profiles",
                row(json!({"user_id": "u1", "full_name": "Ada", "bio": "old"})),
            )
            .await
            .unwrap();
        let service = DataService::new(store);

        let update = ProfileUpdate {
            full_name: None,
            bio: Some("Course collector".to_string()),
        };
        let stored = service.update_profile("u1", &update).await.unwrap();
        assert_eq!(stored.full_name.as_deref(), Some("Ada"));
        assert_eq!(stored.bio.as_deref(), Some("Course collector"));

        // The remote row agrees with what was returned
        let fetched = service.profile("u1").await.unwrap();
        assert_eq!(fetched, stored);
    }

    #[tokio::test]
    async fn test_update_of_missing_profile_is_not_found() {
        let service = DataService::new(MemoryStore::new());
        let update = ProfileUpdate {
            full_name: Some("Ghost".to_string()),
            bio: None,
        };
        assert_eq!(
            service.update_profile("nobody", &update).await,
            Err(StoreError::NotFound("profiles".to_string()))
        );
    }
}
