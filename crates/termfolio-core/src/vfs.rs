//! Virtual filesystem over the portfolio sections.
//!
//! The hierarchy is fixed: `/`, `/about`, `/projects`, `/projects/<id>`,
//! `/skills`, `/contact`. Path resolution is a pure string transformation;
//! validity depends on the project store because `/projects/<id>` is only
//! real while `<id>` exists.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TermError};
use crate::project::ProjectStore;

/// The virtual root.
pub const ROOT: &str = "/";

const SECTIONS: [&str; 4] = ["about", "projects", "skills", "contact"];

/// What a directory entry is, so a renderer can pick an icon for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Dir,
    File,
    Link,
}

/// One entry in a virtual directory listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub name: String,
    pub kind: EntryKind,
}

impl Entry {
    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Dir,
        }
    }

    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::File,
        }
    }

    pub fn link(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Link,
        }
    }
}

/// Strips a trailing slash, except for the root itself.
pub fn normalize_path(path: &str) -> String {
    if path == ROOT {
        return ROOT.to_string();
    }
    path.trim_end_matches('/').to_string()
}

/// Resolves `target` against `current`.
///
/// Absolute targets replace the current path; `..` pops one segment and
/// never underflows past the root; `.` and empty segments are no-ops.
/// The result is syntactically well formed but not necessarily valid;
/// callers check with [`is_valid_path`].
pub fn resolve_path(current: &str, target: &str) -> String {
    if target.is_empty() {
        return normalize_path(current);
    }

    let mut segments: Vec<&str> = if target.starts_with('/') {
        Vec::new()
    } else {
        current.split('/').filter(|s| !s.is_empty()).collect()
    };

    for segment in target.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }

    if segments.is_empty() {
        ROOT.to_string()
    } else {
        format!("/{}", segments.join("/"))
    }
}

/// Extracts `<id>` from `/projects/<id>`.
pub fn project_id_of(path: &str) -> Option<&str> {
    let rest = path.strip_prefix("/projects/")?;
    if rest.is_empty() || rest.contains('/') {
        return None;
    }
    Some(rest)
}

/// True for the root, a known section, or `/projects/<id>` where `<id>`
/// currently exists in the store.
pub fn is_valid_path(path: &str, store: &ProjectStore) -> bool {
    if path == ROOT {
        return true;
    }
    if SECTIONS.iter().any(|s| path == format!("/{s}")) {
        return true;
    }
    match project_id_of(path) {
        Some(id) => store.get(id).is_some(),
        None => false,
    }
}

/// Lists the entries of a virtual directory.
///
/// Section contents are fixed; `/projects` lists the live records.
pub fn list_entries(path: &str, store: &ProjectStore) -> Result<Vec<Entry>> {
    match path {
        ROOT => Ok(SECTIONS.iter().copied().map(Entry::dir).collect()),
        "/about" => Ok(vec![
            Entry::file("info.txt"),
            Entry::file("experience.txt"),
            Entry::file("education.txt"),
        ]),
        "/projects" => Ok(store.list().iter().map(|p| Entry::dir(&p.id)).collect()),
        "/skills" => Ok(vec![
            Entry::file("technical.txt"),
            Entry::file("soft.txt"),
            Entry::file("tools.txt"),
        ]),
        "/contact" => Ok(vec![
            Entry::file("email.txt"),
            Entry::file("social.txt"),
            Entry::link("form.link"),
        ]),
        other => match project_id_of(other) {
            Some(id) if store.get(id).is_some() => Ok(vec![
                Entry::file("info.txt"),
                Entry::link("demo.link"),
                Entry::link("source.link"),
                Entry::file("image.jpg"),
            ]),
            _ => Err(TermError::no_such_directory(other)),
        },
    }
}
