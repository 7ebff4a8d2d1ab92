//! # Domain models for the course catalog
//!
//! Defines the data structures returned by [`crate::DataService`] when reading
//! the remote tables. These types are `Serialize + Deserialize` so they map
//! directly onto the JSON rows the Remote Data Service speaks.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Course`] | A row of the `courses` table. Immutable from the client's perspective; carries the optional `category_id` resolved client-side via [`category_name`]. |
//! | [`Category`] | A row of the `categories` table, fetched once per catalog view and used as the lookup for category labels. |
//! | [`Profile`] | The single `profiles` row owned by a signed-in user. |
//! | [`ProfileUpdate`] | A partial patch of a profile. Fields left as `None` are omitted from the serialized payload, so the remote row keeps its current value for them. |
//! | [`SavedCourse`] | One `(user_id, course_id)` membership pair from the `user_saved_courses` join table. Membership is a set: a pair appears at most once. |

use serde::{Deserialize, Serialize};

/// A course row from the catalog table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub title: String,
    pub description: String,
    /// Listed price in whole currency units.
    pub price: f64,
    /// URL of the card image, if any.
    pub thumbnail: Option<String>,
    pub category_id: Option<i64>,
}

/// A category row, referenced by [`Course::category_id`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// The profile row of a signed-in user. One-to-one with the identity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub user_id: String,
    pub full_name: Option<String>,
    pub bio: Option<String>,
}

/// Partial profile patch. `None` fields are left untouched remotely.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

/// One membership pair in the `user_saved_courses` join table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavedCourse {
    pub user_id: String,
    pub course_id: i64,
}

/// Label shown when a course has no resolvable category.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Resolve a course's category label from the fetched category list,
/// falling back to [`UNCATEGORIZED`].
pub fn category_name(categories: &[Category], category_id: Option<i64>) -> String {
    category_id
        .and_then(|id| categories.iter().find(|c| c.id == id))
        .map(|c| c.name.clone())
        .unwrap_or_else(|| UNCATEGORIZED.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_name_resolution() {
        let categories = vec![
            Category { id: 1, name: "Programming".to_string() },
            Category { id: 2, name: "Design".to_string() },
        ];

        assert_eq!(category_name(&categories, Some(2)), "Design");
        assert_eq!(category_name(&categories, Some(99)), UNCATEGORIZED);
        assert_eq!(category_name(&categories, None), UNCATEGORIZED);
    }

    #[test]
    fn test_profile_update_skips_absent_fields() {
        let update = ProfileUpdate {
            full_name: None,
            bio: Some("Systems tinkerer".to_string()),
        };

        let json = serde_json::to_value(&update).unwrap();
        let obj = json.as_object().unwrap();
        assert!(!obj.contains_key("full_name"));
        assert_eq!(obj["bio"], "Systems tinkerer");
    }
}
