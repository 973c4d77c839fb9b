//! Client-side domain state: one cache per entity type
//!
//! Caches are mutually independent; no store mutates another's entries,
//! even when an operation's side effects are logically cross-entity.

mod cache;
mod departments;
mod trainings;
mod user_trainings;
mod users;

pub use cache::{EntityCache, Keyed};
pub use departments::DepartmentStore;
pub use trainings::TrainingStore;
pub use user_trainings::UserTrainingStore;
pub use users::UserDirectory;
