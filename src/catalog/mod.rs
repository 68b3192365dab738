//! Content catalog - the projects and posts shown on the page
//!
//! Both lists are ordered: catalog order is display order. A catalog is built
//! once and only read afterwards.

mod builtin;
mod icon;

pub use icon::Icon;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Data file that replaces the built-in catalog, relative to the source dir
pub const CATALOG_FILE: &str = "_data/catalog.yml";

/// Catalog loading errors
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog data: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Unknown icon: {0}")]
    UnknownIcon(String),
}

/// A featured project card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub icon: Icon,
    pub title: String,
    pub description: String,
    /// Tag chips, rendered in this exact order
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A roadmap or guide summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub icon: Icon,
    pub title: String,
    pub description: String,
}

/// Ordered, read-only collections of projects and posts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    projects: Vec<Project>,
    posts: Vec<Post>,
}

impl Catalog {
    pub fn new(projects: Vec<Project>, posts: Vec<Post>) -> Self {
        Self { projects, posts }
    }

    /// The catalog compiled into the binary
    pub fn builtin() -> Self {
        builtin::catalog()
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Parse a catalog from YAML text
    pub fn from_yaml(content: &str) -> Result<Self, CatalogError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load a catalog data file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    /// Use `<source_dir>/_data/catalog.yml` when present, the built-in catalog otherwise
    pub fn resolve<P: AsRef<Path>>(source_dir: P) -> Result<Self, CatalogError> {
        let data_file = source_dir.as_ref().join(CATALOG_FILE);
        if data_file.exists() {
            tracing::debug!("Loading catalog from {:?}", data_file);
            Self::load(&data_file)
        } else {
            tracing::debug!("No catalog data file, using built-in catalog");
            Ok(Self::builtin())
        }
    }

    /// Serialize to the data file format
    pub fn to_yaml(&self) -> Result<String, CatalogError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Titles that appear more than once within the same section
    ///
    /// Duplicates are allowed, but titles double as card identity, so the
    /// generator reports them.
    pub fn duplicate_titles(&self) -> Vec<String> {
        let mut duplicates = repeated(self.projects.iter().map(|p| p.title.as_str()));
        for title in repeated(self.posts.iter().map(|p| p.title.as_str())) {
            if !duplicates.contains(&title) {
                duplicates.push(title);
            }
        }
        duplicates
    }
}

fn repeated<'a>(titles: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out: Vec<String> = Vec::new();
    for title in titles {
        if !seen.insert(title) && !out.iter().any(|t| t == title) {
            out.push(title.to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_builtin_catalog() {
        let catalog = Catalog::builtin();
        let titles: Vec<_> = catalog.projects().iter().map(|p| p.title.as_str()).collect();
        assert_eq!(
            titles,
            ["YouTube Niche App", "Task Manager", "bolt.new", "slides.ai", "Dev Blog"]
        );
        assert_eq!(catalog.posts().len(), 3);
        assert_eq!(catalog.posts()[1].title, "React Design Patterns");
        assert!(catalog.duplicate_titles().is_empty());
    }

    #[test]
    fn test_parse_catalog_yaml() {
        let yaml = r#"
projects:
  - icon: youtube
    title: YouTube Niche App
    description: Curated niche videos.
    tags: [Next.js, YouTube API, Next.js]
posts:
  - icon: brain
    title: React Design Patterns
    description: Patterns.
"#;
        let catalog = Catalog::from_yaml(yaml).unwrap();
        assert_eq!(catalog.projects()[0].icon, Icon::Youtube);
        assert_eq!(
            catalog.projects()[0].tags,
            ["Next.js", "YouTube API", "Next.js"]
        );
        assert_eq!(catalog.posts()[0].icon, Icon::Brain);
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let catalog = Catalog::from_yaml("posts: []").unwrap();
        assert!(catalog.projects().is_empty());
        assert!(catalog.posts().is_empty());
    }

    #[test]
    fn test_unknown_icon_is_a_parse_error() {
        let yaml = r#"
projects:
  - icon: sparkles
    title: Broken
    description: ""
"#;
        assert!(matches!(
            Catalog::from_yaml(yaml),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_duplicate_titles() {
        let project = |title: &str| Project {
            icon: Icon::Rocket,
            title: title.to_string(),
            description: String::new(),
            tags: Vec::new(),
        };
        let catalog = Catalog::new(
            vec![project("A"), project("B"), project("A"), project("A")],
            Vec::new(),
        );
        assert_eq!(catalog.duplicate_titles(), ["A"]);
    }

    #[test]
    fn test_resolve_prefers_data_file() {
        let dir = TempDir::new().unwrap();
        assert_eq!(Catalog::resolve(dir.path()).unwrap(), Catalog::builtin());

        let data_file = dir.path().join(CATALOG_FILE);
        fs::create_dir_all(data_file.parent().unwrap()).unwrap();
        fs::write(
            &data_file,
            "projects:\n  - icon: layout\n    title: Task Manager\n    description: Tasks.\n",
        )
        .unwrap();

        let catalog = Catalog::resolve(dir.path()).unwrap();
        assert_eq!(catalog.projects().len(), 1);
        assert!(catalog.posts().is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = Catalog::load(dir.path().join("nope.yml")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[test]
    fn test_yaml_round_trip_of_builtin() {
        let builtin = Catalog::builtin();
        let yaml = builtin.to_yaml().unwrap();
        assert_eq!(Catalog::from_yaml(&yaml).unwrap(), builtin);
    }
}
