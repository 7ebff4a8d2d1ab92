//! Free-text course matching.

use crate::models::Course;

/// Case-insensitive substring containment on title and description.
///
/// This is the reference predicate for the catalog search: the remote query
/// (`ilike` on both columns) and the in-memory backend implement the same
/// semantics, so for any query string the visible list is exactly the subset
/// of the catalog this function accepts. An empty query matches everything.
pub fn matches_query(course: &Course, query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    course.title.to_lowercase().contains(&query)
        || course.description.to_lowercase().contains(&query)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(title: &str, description: &str) -> Course {
        Course {
            id: 1,
            title: title.to_string(),
            description: description.to_string(),
            price: 0.0,
            thumbnail: None,
            category_id: None,
        }
    }

    #[test]
    fn test_matches_title_case_insensitively() {
        let c = course("Intro to Go", "Start from zero");
        assert!(matches_query(&c, "go"));
        assert!(matches_query(&c, "INTRO"));
        assert!(!matches_query(&c, "rust"));
    }

    #[test]
    fn test_matches_description() {
        let c = course("Advanced Rust", "Ownership and borrowing");
        assert!(matches_query(&c, "borrow"));
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let c = course("Anything", "at all");
        assert!(matches_query(&c, ""));
        assert!(matches_query(&c, "   "));
    }
}
