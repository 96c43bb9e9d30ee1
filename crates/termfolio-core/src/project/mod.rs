//! Project domain: models and the in-memory store.

pub mod model;
pub mod store;

pub use model::{Project, ProjectDraft, ProjectPatch, slugify};
pub use store::{NullProjectCache, ProjectCache, ProjectStore};
