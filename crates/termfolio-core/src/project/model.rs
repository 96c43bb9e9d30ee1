//! Project domain models.

use serde::{Deserialize, Serialize};

/// A portfolio project record.
///
/// Serialized with camelCase keys, the shape the cached JSON file uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Unique id, `slug-of-name` plus a random numeric suffix for records
    /// created at runtime. Immutable after creation.
    pub id: String,
    pub name: String,
    pub description: String,
    /// Ordered technology tags.
    pub technologies: Vec<String>,
    pub source_url: String,
    pub demo_url: String,
    pub image: String,
    /// Creation date, `YYYY-MM-DD`.
    #[serde(default)]
    pub date: String,
}

/// Scratch project data accumulated by the interactive flows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDraft {
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub source_url: String,
    pub demo_url: String,
    pub image: String,
}

/// A partial update; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub source_url: Option<String>,
    pub demo_url: Option<String>,
    pub image: Option<String>,
}

impl ProjectPatch {
    /// Merges the set fields of this patch into `project`.
    pub fn apply(self, project: &mut Project) {
        if let Some(name) = self.name {
            project.name = name;
        }
        if let Some(description) = self.description {
            project.description = description;
        }
        if let Some(technologies) = self.technologies {
            project.technologies = technologies;
        }
        if let Some(source_url) = self.source_url {
            project.source_url = source_url;
        }
        if let Some(demo_url) = self.demo_url {
            project.demo_url = demo_url;
        }
        if let Some(image) = self.image {
            project.image = image;
        }
    }
}

/// Lowercases `name` and collapses every non-alphanumeric run into a
/// single `-`, trimming leading and trailing dashes.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_dash = true;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.extend(ch.to_lowercase());
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("My Project"), "my-project");
        assert_eq!(slugify("  Foo!! Bar  "), "foo-bar");
        assert_eq!(slugify("already-slugged"), "already-slugged");
        assert_eq!(slugify("C++ Tools"), "c-tools");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn test_patch_apply_merges_only_set_fields() {
        let mut project = Project {
            id: "p-1".to_string(),
            name: "Old".to_string(),
            description: "Old desc".to_string(),
            technologies: vec!["Rust".to_string()],
            source_url: "src".to_string(),
            demo_url: "demo".to_string(),
            image: "img".to_string(),
            date: "2024-01-01".to_string(),
        };

        ProjectPatch {
            name: Some("New".to_string()),
            ..Default::default()
        }
        .apply(&mut project);

        assert_eq!(project.name, "New");
        assert_eq!(project.description, "Old desc");
        assert_eq!(project.technologies, vec!["Rust".to_string()]);
    }

    #[test]
    fn test_project_serializes_camel_case() {
        let project = Project {
            id: "p".to_string(),
            name: "P".to_string(),
            description: String::new(),
            technologies: vec![],
            source_url: "s".to_string(),
            demo_url: "d".to_string(),
            image: "i".to_string(),
            date: String::new(),
        };
        let json = serde_json::to_string(&project).unwrap();
        assert!(json.contains("\"sourceUrl\""));
        assert!(json.contains("\"demoUrl\""));
    }
}
