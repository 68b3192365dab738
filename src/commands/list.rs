//! List catalog content

use anyhow::Result;
use indexmap::IndexMap;

use crate::catalog::Catalog;
use crate::Portfolio;

/// List catalog content by type
pub fn run(site: &Portfolio, content_type: &str) -> Result<()> {
    let catalog = site.catalog()?;
    for line in listing(&catalog, content_type)? {
        println!("{}", line);
    }
    Ok(())
}

/// Lines printed by `list`
pub fn listing(catalog: &Catalog, content_type: &str) -> Result<Vec<String>> {
    let mut lines = Vec::new();

    match content_type {
        "project" | "projects" => {
            lines.push(format!("Projects ({}):", catalog.projects().len()));
            for project in catalog.projects() {
                lines.push(format!(
                    "  {} [{}] ({})",
                    project.title,
                    project.icon,
                    project.tags.join(", ")
                ));
            }
        }
        "post" | "posts" => {
            lines.push(format!("Posts ({}):", catalog.posts().len()));
            for post in catalog.posts() {
                lines.push(format!("  {} [{}]", post.title, post.icon));
            }
        }
        "tag" | "tags" => {
            let tags = tag_counts(catalog);
            lines.push(format!("Tags ({}):", tags.len()));
            for (tag, count) in tags {
                lines.push(format!("  {} ({})", tag, count));
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: projects, posts, tags",
                content_type
            );
        }
    }

    Ok(lines)
}

/// Tag usage across projects, most used first; ties keep first-seen order
pub fn tag_counts(catalog: &Catalog) -> Vec<(String, usize)> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for project in catalog.projects() {
        for tag in &project.tags {
            *counts.entry(tag.as_str()).or_insert(0) += 1;
        }
    }

    let mut tags: Vec<_> = counts
        .into_iter()
        .map(|(tag, count)| (tag.to_string(), count))
        .collect();
    tags.sort_by(|a, b| b.1.cmp(&a.1));
    tags
}
