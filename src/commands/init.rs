//! Initialize a new portfolio site

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::catalog::{Catalog, CATALOG_FILE};
use crate::{Portfolio, CONFIG_FILE};

const DEFAULT_CONFIG: &str = r#"# Portfolio Configuration

# Site
title: Portfolio
description: ''
author: Your Name
language: en
# IANA name, e.g. Europe/Berlin; empty means local time
timezone: ''

# URL
url: http://example.com
root: /

# Directory
source_dir: source
public_dir: public

# Hero
hero:
  title: Building the Future, One Project at a Time
  subtitle: Exploring the intersection of code, design, and innovation through hands-on projects and comprehensive guides.

# Call-to-action links
links:
  profile_url: https://github.com/yourusername
  profile_label: GitHub
  contact_email: your-email@example.com
  contact_label: Contact

# Section headings
sections:
  projects_heading: Featured Projects
  posts_heading: Project Roadmaps & Guides

# Footer
footer:
  # Set to pin the copyright year; leave empty to use the current year
  year:
  notice: All rights reserved.
"#;

/// Initialize a new site in the given directory
///
/// Existing files are left untouched.
pub fn init_site(target_dir: &Path) -> Result<()> {
    fs::create_dir_all(target_dir.join("source/_data"))?;

    write_if_missing(&target_dir.join(CONFIG_FILE), DEFAULT_CONFIG)?;

    let catalog = Catalog::builtin().to_yaml()?;
    write_if_missing(&target_dir.join("source").join(CATALOG_FILE), &catalog)?;

    Ok(())
}

fn write_if_missing(path: &Path, contents: &str) -> Result<()> {
    if path.exists() {
        tracing::warn!("Skipping existing file {:?}", path);
        return Ok(());
    }
    fs::write(path, contents)?;
    tracing::debug!("Created: {:?}", path);
    Ok(())
}

/// Run the init command with an existing instance
pub fn run(site: &Portfolio) -> Result<()> {
    init_site(&site.base_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use tempfile::TempDir;

    #[test]
    fn test_init_site() {
        let dir = TempDir::new().unwrap();
        init_site(dir.path()).unwrap();

        let config = SiteConfig::load(dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config.author, "Your Name");
        assert_eq!(config.footer.year, None);
        assert_eq!(config.sections.posts_heading, "Project Roadmaps & Guides");

        let site = Portfolio::new(dir.path()).unwrap();
        assert_eq!(site.catalog().unwrap(), Catalog::builtin());
    }

    #[test]
    fn test_init_keeps_existing_config() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "title: Mine\n").unwrap();
        init_site(dir.path()).unwrap();

        let config = SiteConfig::load(dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config.title, "Mine");
    }
}
