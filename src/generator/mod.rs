//! Generator module - writes the rendered page and its assets

use anyhow::Result;
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::catalog::Catalog;
use crate::render::PageRenderer;
use crate::templates::{TemplateRenderer, MOTION_SCRIPT};
use crate::Portfolio;

/// Static site generator using Tera templates
pub struct Generator {
    site: Portfolio,
    renderer: TemplateRenderer,
}

impl Generator {
    /// Create a new generator
    pub fn new(site: &Portfolio) -> Result<Self> {
        let renderer = TemplateRenderer::new()?;

        Ok(Self {
            site: site.clone(),
            renderer,
        })
    }

    /// Generate the site with the footer year taken from the wall clock
    pub fn generate(&self, catalog: &Catalog) -> Result<()> {
        self.generate_at(catalog, Utc::now())
    }

    /// Generate the site as of `now`
    pub fn generate_at(&self, catalog: &Catalog, now: DateTime<Utc>) -> Result<()> {
        for title in catalog.duplicate_titles() {
            tracing::warn!("Duplicate card title {:?}; titles should be unique", title);
        }

        fs::create_dir_all(&self.site.public_dir)?;

        // Copy source assets (favicons, images, etc.)
        self.copy_source_assets()?;

        let view = PageRenderer::new(&self.site.config).render_at(catalog, now);

        let html = self.renderer.render_page(&view)?;
        self.write_output("index.html", &html)?;

        let css = self.renderer.render_stylesheet()?;
        self.write_output("css/style.css", &css)?;

        self.write_output("js/motion.js", MOTION_SCRIPT)?;

        self.generate_catalog_json(catalog)?;

        tracing::info!(
            "Rendered {} project cards and {} post cards",
            view.projects.cards.len(),
            view.posts.cards.len()
        );

        Ok(())
    }

    /// Write the catalog as JSON next to the page
    fn generate_catalog_json(&self, catalog: &Catalog) -> Result<()> {
        let json = serde_json::to_string_pretty(catalog)?;
        self.write_output("catalog.json", &json)?;
        Ok(())
    }

    fn write_output(&self, relative: &str, contents: &str) -> Result<PathBuf> {
        let output_path = self.site.public_dir.join(relative);
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| anyhow::anyhow!("Failed to create dir {:?}: {}", parent, e))?;
        }
        fs::write(&output_path, contents)
            .map_err(|e| anyhow::anyhow!("Failed to write {:?}: {}", output_path, e))?;
        tracing::debug!("Generated: {:?}", output_path);
        Ok(output_path)
    }

    /// Copy source assets to the public directory
    ///
    /// Entries whose name starts with `_` or `.` (such as `_data/`) are
    /// inputs, not assets, and are skipped.
    fn copy_source_assets(&self) -> Result<()> {
        let source_dir = &self.site.source_dir;
        if !source_dir.exists() {
            return Ok(());
        }

        for entry in WalkDir::new(source_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let relative = path.strip_prefix(source_dir)?;
            if is_hidden(relative) {
                continue;
            }

            let dest = self.site.public_dir.join(relative);
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(path, &dest)?;
            tracing::debug!("Copied: {:?} -> {:?}", path, dest);
        }

        Ok(())
    }
}

fn is_hidden(relative: &Path) -> bool {
    relative.components().any(|c| {
        c.as_os_str()
            .to_str()
            .map(|s| s.starts_with('_') || s.starts_with('.'))
            .unwrap_or(false)
    })
}
