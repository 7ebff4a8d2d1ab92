//! Data plane for the CourseHub workspace: domain models, the generic
//! table-query interface, the typed gateway over it, and the pure state
//! logic (enrollment toggle, search predicate) the UI drives.

pub mod models;
pub use models::{category_name, Category, Course, Profile, ProfileUpdate, SavedCourse};

pub mod query;
pub use query::{Filter, Order, Query, Row, StoreError, TableStore};

mod memory;
pub use memory::MemoryStore;

mod service;
pub use service::DataService;

pub mod enrollment;
pub use enrollment::{SaveState, ToggleIntent};

pub mod search;
pub use search::matches_query;
