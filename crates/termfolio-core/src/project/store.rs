//! In-memory project store with best-effort cache persistence.

use chrono::Utc;
use rand::Rng;

use crate::error::Result;
use crate::portfolio;

use super::model::{Project, ProjectDraft, ProjectPatch, slugify};

/// Durable cache for the project collection.
///
/// The cache is a convenience across restarts, not a source of truth: the
/// store seeds from static data when the cache is absent, and write
/// failures are swallowed.
pub trait ProjectCache: Send + Sync {
    /// Returns the cached collection, or `None` when nothing was cached.
    fn load(&self) -> Result<Option<Vec<Project>>>;

    /// Replaces the cached collection.
    fn save(&self, projects: &[Project]) -> Result<()>;
}

/// Cache that never stores anything. Used by tests and ephemeral sessions.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullProjectCache;

impl ProjectCache for NullProjectCache {
    fn load(&self) -> Result<Option<Vec<Project>>> {
        Ok(None)
    }

    fn save(&self, _projects: &[Project]) -> Result<()> {
        Ok(())
    }
}

/// The project collection, kept in insertion order.
pub struct ProjectStore {
    projects: Vec<Project>,
    cache: Box<dyn ProjectCache>,
}

impl ProjectStore {
    /// Creates a store seeded from the static portfolio data, overlaid by
    /// the cached collection when one exists.
    pub fn new(cache: Box<dyn ProjectCache>) -> Self {
        let projects = match cache.load() {
            Ok(Some(cached)) => cached,
            Ok(None) => portfolio::seed_projects(),
            Err(err) => {
                tracing::warn!(error = %err, "project cache unreadable, using seed data");
                portfolio::seed_projects()
            }
        };
        Self { projects, cache }
    }

    /// Creates a store with no persistence.
    pub fn in_memory() -> Self {
        Self::new(Box::new(NullProjectCache))
    }

    /// Adds a project, generating its id from the draft name.
    ///
    /// There is no uniqueness retry on the random suffix; for a data set
    /// this size the collision odds are accepted.
    pub fn add(&mut self, draft: ProjectDraft) -> Project {
        let id = generate_id(&draft.name);
        let project = Project {
            id,
            name: draft.name,
            description: draft.description,
            technologies: draft.technologies,
            source_url: draft.source_url,
            demo_url: draft.demo_url,
            image: draft.image,
            date: Utc::now().format("%Y-%m-%d").to_string(),
        };
        self.projects.push(project.clone());
        self.persist();
        project
    }

    /// Merges `patch` into the project with `id`, keeping its position.
    /// Returns `None` when the id is absent.
    pub fn update(&mut self, id: &str, patch: ProjectPatch) -> Option<Project> {
        let updated = {
            let project = self.projects.iter_mut().find(|p| p.id == id)?;
            patch.apply(project);
            project.clone()
        };
        self.persist();
        Some(updated)
    }

    /// Removes the project with `id`. Returns `false` when absent.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.projects.len();
        self.projects.retain(|p| p.id != id);
        let removed = self.projects.len() != before;
        if removed {
            self.persist();
        }
        removed
    }

    pub fn get(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// All projects in insertion order.
    pub fn list(&self) -> &[Project] {
        &self.projects
    }

    pub fn ids(&self) -> Vec<String> {
        self.projects.iter().map(|p| p.id.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    fn persist(&self) {
        if let Err(err) = self.cache.save(&self.projects) {
            tracing::warn!(error = %err, "project cache write failed");
        }
    }
}

fn generate_id(name: &str) -> String {
    let suffix: u32 = rand::thread_rng().gen_range(0..10_000);
    format!("{}-{}", slugify(name), suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str) -> ProjectDraft {
        ProjectDraft {
            name: name.to_string(),
            description: "desc".to_string(),
            technologies: vec!["Rust".to_string()],
            source_url: "https://src".to_string(),
            demo_url: "https://demo".to_string(),
            image: "/img.png".to_string(),
        }
    }

    #[test]
    fn test_new_seeds_from_portfolio() {
        let store = ProjectStore::in_memory();
        assert!(!store.is_empty());
        assert_eq!(store.len(), portfolio::seed_projects().len());
    }

    #[test]
    fn test_add_then_get_roundtrip() {
        let mut store = ProjectStore::in_memory();
        let added = store.add(draft("My New App"));

        assert!(added.id.starts_with("my-new-app-"));
        let fetched = store.get(&added.id).expect("added project must exist");
        assert_eq!(fetched, &added);
        assert_eq!(fetched.description, "desc");
        assert_eq!(fetched.technologies, vec!["Rust".to_string()]);
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut store = ProjectStore::in_memory();
        let a = store.add(draft("Alpha"));
        let b = store.add(draft("Beta"));

        let ids = store.ids();
        let pos_a = ids.iter().position(|i| i == &a.id).unwrap();
        let pos_b = ids.iter().position(|i| i == &b.id).unwrap();
        assert!(pos_a < pos_b);
    }

    #[test]
    fn test_update_merges_and_keeps_position() {
        let mut store = ProjectStore::in_memory();
        let added = store.add(draft("Gamma"));
        let position = store.ids().iter().position(|i| i == &added.id).unwrap();

        let updated = store
            .update(
                &added.id,
                ProjectPatch {
                    description: Some("better desc".to_string()),
                    ..Default::default()
                },
            )
            .expect("update must find the project");

        assert_eq!(updated.description, "better desc");
        assert_eq!(updated.name, "Gamma");
        assert_eq!(
            store.ids().iter().position(|i| i == &added.id).unwrap(),
            position
        );
    }

    #[test]
    fn test_update_missing_returns_none() {
        let mut store = ProjectStore::in_memory();
        assert!(store.update("nope", ProjectPatch::default()).is_none());
    }

    #[test]
    fn test_delete_then_get_returns_none() {
        let mut store = ProjectStore::in_memory();
        let added = store.add(draft("Doomed"));

        assert!(store.delete(&added.id));
        assert!(store.get(&added.id).is_none());
        // second delete of the same id reports absence
        assert!(!store.delete(&added.id));
    }

    #[test]
    fn test_generated_ids_carry_numeric_suffix() {
        let id = generate_id("Hello World");
        let suffix = id.strip_prefix("hello-world-").expect("slug prefix");
        let n: u32 = suffix.parse().expect("numeric suffix");
        assert!(n < 10_000);
    }
}
