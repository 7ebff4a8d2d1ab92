//! # DataService — typed operations on the remote tables
//!
//! This module is the core of the data plane. [`DataService`] turns the raw
//! row interface of a [`TableStore`] into the typed operations the views
//! need. All reads and writes go through the trait, so the same logic works
//! against the hosted service's REST dialect in production and against
//! [`crate::MemoryStore`] in tests.
//!
//! ## Read path
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`search_courses`](DataService::search_courses) | Catalog query: case-insensitive substring filter on title/description, newest first. An empty term returns the full catalog through the same path. |
//! | [`list_courses`](DataService::list_courses) | The full catalog — `search_courses("")`. |
//! | [`list_categories`](DataService::list_categories) | All categories, for client-side label resolution. |
//! | [`saved_course_ids`](DataService::saved_course_ids) | The set of course IDs a user has saved. |
//! | [`is_saved`](DataService::is_saved) | Membership test for one `(user, course)` pair. |
//! | [`saved_courses`](DataService::saved_courses) | Two-step dependent fetch: IDs first, then the course rows for exactly that set. An empty set is a valid result and issues no second query. |
//! | [`profile`](DataService::profile) | The single profile row of a user; empty result is [`StoreError::NotFound`]. |
//!
//! ## Write path
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`save_course`](DataService::save_course) | Insert the membership pair. Membership is a set, so saving an already-saved pair is a no-op, never a duplicate row. |
//! | [`unsave_course`](DataService::unsave_course) | Delete the membership pair; deleting an absent pair is `Ok`. |
//! | [`update_profile`](DataService::update_profile) | Patch the profile row and return the row as the service stored it, so callers merge confirmed state only. |

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::models::{Category, Course, Profile, ProfileUpdate, SavedCourse};
use crate::query::{Filter, Order, Query, Row, StoreError, TableStore};

/// Typed gateway over a [`TableStore`] backend.
pub struct DataService<S: TableStore> {
    store: S,
}

impl<S: TableStore> DataService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The full catalog, newest first.
    pub async fn list_courses(&self) -> Result<Vec<Course>, StoreError> {
        self.search_courses("").await
    }

    /// Courses whose title or description contains `term`
    /// case-insensitively, newest first.
    pub async fn search_courses(&self, term: &str) -> Result<Vec<Course>, StoreError> {
        let mut query = Query::new().order_by(Order::desc("created_at"));
        let term = term.trim();
        if !term.is_empty() {
            query = query.filter(Filter::any(vec![
                Filter::ilike("title", term),
                Filter::ilike("description", term),
            ]));
        }
        let rows = self.store.select("courses", query).await?;
        rows.into_iter().map(|r| decode(r, "courses")).collect()
    }

    pub async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        let rows = self.store.select("categories", Query::new()).await?;
        rows.into_iter().map(|r| decode(r, "categories")).collect()
    }

    /// IDs of every course the user has saved.
    pub async fn saved_course_ids(&self, user_id: &str) -> Result<Vec<i64>, StoreError> {
        let rows = self
            .store
            .select(
                "user_saved_courses",
                Query::new()
                    .columns(&["course_id"])
                    .filter(Filter::eq("user_id", user_id)),
            )
            .await?;

        Ok(rows
            .iter()
            .filter_map(|row| row.get("course_id").and_then(Value::as_i64))
            .collect())
    }

    /// Whether the user has saved this course.
    pub async fn is_saved(&self, user_id: &str, course_id: i64) -> Result<bool, StoreError> {
        let ids = self.saved_course_ids(user_id).await?;
        Ok(ids.contains(&course_id))
    }

    /// Insert the membership pair. Saving an already-saved pair leaves the
    /// single existing row in place.
    pub async fn save_course(&self, user_id: &str, course_id: i64) -> Result<(), StoreError> {
        let existing = self
            .store
            .select("user_saved_courses", pair_query(user_id, course_id))
            .await?;
        if !existing.is_empty() {
            return Ok(());
        }

        let pair = SavedCourse {
            user_id: user_id.to_string(),
            course_id,
        };
        self.store
            .insert("user_saved_courses", encode(&pair))
            .await?;
        Ok(())
    }

    /// Delete the membership pair. Deleting an absent pair is `Ok`.
    pub async fn unsave_course(&self, user_id: &str, course_id: i64) -> Result<(), StoreError> {
        self.store
            .delete("user_saved_courses", pair_query(user_id, course_id))
            .await
    }

    /// Resolve the user's saved courses: IDs first, then the course rows for
    /// exactly that set. Zero saved entries yields an empty list without a
    /// second query.
    pub async fn saved_courses(&self, user_id: &str) -> Result<Vec<Course>, StoreError> {
        let ids = self.saved_course_ids(user_id).await?;
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = self
            .store
            .select("courses", Query::new().filter(Filter::is_in("id", ids)))
            .await?;
        rows.into_iter().map(|r| decode(r, "courses")).collect()
    }

    /// The user's single profile row.
    pub async fn profile(&self, user_id: &str) -> Result<Profile, StoreError> {
        let rows = self
            .store
            .select(
                "profiles",
                Query::new().filter(Filter::eq("user_id", user_id)),
            )
            .await?;

        let row = rows
            .into_iter()
            .next()
            .ok_or_else(|| StoreError::NotFound("profiles".to_string()))?;
        decode(row, "profiles")
    }

    /// Patch the profile row and return the stored result.
    pub async fn update_profile(
        &self,
        user_id: &str,
        update: &ProfileUpdate,
    ) -> Result<Profile, StoreError> {
        let row = self
            .store
            .update(
                "profiles",
                encode(update),
                Query::new().filter(Filter::eq("user_id", user_id)),
            )
            .await?;
        decode(row, "profiles")
    }
}

fn pair_query(user_id: &str, course_id: i64) -> Query {
    Query::new()
        .filter(Filter::eq("user_id", user_id))
        .filter(Filter::eq("course_id", course_id))
}

fn decode<T: DeserializeOwned>(row: Row, table: &str) -> Result<T, StoreError> {
    serde_json::from_value(Value::Object(row))
        .map_err(|e| StoreError::Service(format!("malformed `{table}` row: {e}")))
}

fn encode<T: serde::Serialize>(value: &T) -> Row {
    match serde_json::to_value(value) {
        Ok(Value::Object(map)) => map,
        _ => Row::new(),
    }
}
