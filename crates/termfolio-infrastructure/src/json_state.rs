//! JSON file implementations of the core cache traits.
//!
//! Each cache owns one file under the state directory. A missing file is
//! not an error, it means nothing was persisted yet; the core falls back
//! to its defaults. Writers create the directory on first save.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use termfolio_core::auth::{Session, SessionCache};
use termfolio_core::project::{Project, ProjectCache};
use termfolio_core::theme::{Theme, ThemeCache};
use termfolio_core::Result;

use crate::paths::TermfolioPaths;

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = fs::read_to_string(path)?;
    Ok(Some(serde_json::from_str(&contents)?))
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let contents = serde_json::to_string_pretty(value)?;
    fs::write(path, contents)?;
    Ok(())
}

fn remove_if_exists(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path)?;
    }
    Ok(())
}

/// The state directory with one constructor per cache.
pub struct JsonStateDir {
    dir: PathBuf,
}

impl JsonStateDir {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The per-user state directory resolved by [`TermfolioPaths`].
    pub fn default_location() -> Result<Self> {
        Ok(Self::new(TermfolioPaths::state_dir()?))
    }

    pub fn project_cache(&self) -> JsonProjectCache {
        JsonProjectCache {
            path: self.dir.join(TermfolioPaths::PROJECTS_FILE),
        }
    }

    pub fn session_cache(&self) -> JsonSessionCache {
        JsonSessionCache {
            path: self.dir.join(TermfolioPaths::SESSION_FILE),
        }
    }

    pub fn theme_cache(&self) -> JsonThemeCache {
        JsonThemeCache {
            path: self.dir.join(TermfolioPaths::THEME_FILE),
        }
    }
}

/// Project records persisted as a JSON array, camelCase keys.
pub struct JsonProjectCache {
    path: PathBuf,
}

impl ProjectCache for JsonProjectCache {
    fn load(&self) -> Result<Option<Vec<Project>>> {
        read_json(&self.path)
    }

    fn save(&self, projects: &[Project]) -> Result<()> {
        write_json(&self.path, &projects)
    }
}

/// The auth session; clearing the session removes the file.
pub struct JsonSessionCache {
    path: PathBuf,
}

impl SessionCache for JsonSessionCache {
    fn load(&self) -> Result<Option<Session>> {
        read_json(&self.path)
    }

    fn save(&self, session: Option<&Session>) -> Result<()> {
        match session {
            Some(session) => write_json(&self.path, session),
            None => remove_if_exists(&self.path),
        }
    }
}

/// The selected theme, persisted as its lowercase name.
pub struct JsonThemeCache {
    path: PathBuf,
}

impl ThemeCache for JsonThemeCache {
    fn load(&self) -> Result<Option<Theme>> {
        read_json(&self.path)
    }

    fn save(&self, theme: Theme) -> Result<()> {
        write_json(&self.path, &theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use termfolio_core::auth::{Role, User};
    use termfolio_core::project::{ProjectDraft, ProjectStore};

    fn state_dir(dir: &tempfile::TempDir) -> JsonStateDir {
        JsonStateDir::new(dir.path())
    }

    #[test]
    fn test_missing_files_load_as_none() {
        let tmp = tempfile::tempdir().unwrap();
        let state = state_dir(&tmp);
        assert!(state.project_cache().load().unwrap().is_none());
        assert!(state.session_cache().load().unwrap().is_none());
        assert!(state.theme_cache().load().unwrap().is_none());
    }

    #[test]
    fn test_project_store_changes_survive_reload() {
        let tmp = tempfile::tempdir().unwrap();

        let added_id = {
            let mut store =
                ProjectStore::new(Box::new(state_dir(&tmp).project_cache()));
            let added = store.add(ProjectDraft {
                name: "Persisted".to_string(),
                ..Default::default()
            });
            added.id
        };

        let store = ProjectStore::new(Box::new(state_dir(&tmp).project_cache()));
        assert!(store.get(&added_id).is_some());
    }

    #[test]
    fn test_cached_projects_use_camel_case_keys() {
        let tmp = tempfile::tempdir().unwrap();
        let cache = state_dir(&tmp).project_cache();
        let mut store = ProjectStore::new(Box::new(state_dir(&tmp).project_cache()));
        store.add(ProjectDraft {
            name: "Shape Check".to_string(),
            source_url: "https://example.com".to_string(),
            ..Default::default()
        });

        let raw = std::fs::read_to_string(tmp.path().join("projects.json")).unwrap();
        assert!(raw.contains("\"sourceUrl\""));
        assert!(cache.load().unwrap().is_some());
    }

    #[test]
    fn test_session_save_none_clears_file() {
        let tmp = tempfile::tempdir().unwrap();
        let cache = state_dir(&tmp).session_cache();

        let session = Session {
            user: User {
                id: "admin-1".to_string(),
                name: "Admin User".to_string(),
                email: "admin@example.com".to_string(),
                role: Role::Admin,
            },
            expires: Utc::now() + Duration::days(7),
        };
        cache.save(Some(&session)).unwrap();
        assert_eq!(cache.load().unwrap(), Some(session));

        cache.save(None).unwrap();
        assert!(cache.load().unwrap().is_none());
        assert!(!tmp.path().join("session.json").exists());
    }

    #[test]
    fn test_caches_write_under_the_declared_file_names() {
        let tmp = tempfile::tempdir().unwrap();
        let state = state_dir(&tmp);

        state.project_cache().save(&[]).unwrap();
        state.theme_cache().save(Theme::Dark).unwrap();

        assert!(tmp.path().join(TermfolioPaths::PROJECTS_FILE).exists());
        assert!(tmp.path().join(TermfolioPaths::THEME_FILE).exists());
    }

    #[test]
    fn test_theme_round_trip() {
        let tmp = tempfile::tempdir().unwrap();
        let cache = state_dir(&tmp).theme_cache();
        cache.save(Theme::Nord).unwrap();
        assert_eq!(cache.load().unwrap(), Some(Theme::Nord));
    }
}
