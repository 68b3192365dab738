//! Site configuration (_config.yml)

use anyhow::Result;
use chrono::{DateTime, Datelike, Local, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,
    pub language: String,
    pub timezone: String,

    // URL
    pub url: String,
    pub root: String,

    // Directory
    pub source_dir: String,
    pub public_dir: String,

    // Page content
    #[serde(default)]
    pub hero: HeroConfig,
    #[serde(default)]
    pub links: LinksConfig,
    #[serde(default)]
    pub sections: SectionsConfig,
    #[serde(default)]
    pub footer: FooterConfig,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            description: String::new(),
            author: "Your Name".to_string(),
            language: "en".to_string(),
            timezone: String::new(),

            url: "http://example.com".to_string(),
            root: "/".to_string(),

            source_dir: "source".to_string(),
            public_dir: "public".to_string(),

            hero: HeroConfig::default(),
            links: LinksConfig::default(),
            sections: SectionsConfig::default(),
            footer: FooterConfig::default(),

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Calendar year of `now` in the configured timezone
    ///
    /// An empty timezone means local time. Unknown names fall back to local
    /// time with a warning.
    pub fn year_at(&self, now: DateTime<Utc>) -> i32 {
        if self.timezone.is_empty() {
            return now.with_timezone(&Local).year();
        }
        match self.timezone.parse::<chrono_tz::Tz>() {
            Ok(tz) => now.with_timezone(&tz).year(),
            Err(_) => {
                tracing::warn!("Unknown timezone {:?}, using local time", self.timezone);
                now.with_timezone(&Local).year()
            }
        }
    }

    /// Year printed in the footer: the pinned year if set, else the year of `now`
    pub fn copyright_year(&self, now: DateTime<Utc>) -> i32 {
        self.footer.year.unwrap_or_else(|| self.year_at(now))
    }
}

/// Hero block copy
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    pub title: String,
    pub subtitle: String,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            title: "Building the Future, One Project at a Time".to_string(),
            subtitle: "Exploring the intersection of code, design, and innovation through hands-on projects and comprehensive guides.".to_string(),
        }
    }
}

/// Call-to-action link targets
///
/// Both are opaque strings; nothing here validates or fetches them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LinksConfig {
    pub profile_url: String,
    pub profile_label: String,
    pub contact_email: String,
    pub contact_label: String,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            profile_url: "https://github.com/yourusername".to_string(),
            profile_label: "GitHub".to_string(),
            contact_email: "your-email@example.com".to_string(),
            contact_label: "Contact".to_string(),
        }
    }
}

impl LinksConfig {
    /// `mailto:` target for the contact button
    pub fn contact_href(&self) -> String {
        if self.contact_email.starts_with("mailto:") {
            self.contact_email.clone()
        } else {
            format!("mailto:{}", self.contact_email)
        }
    }
}

/// Section headings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionsConfig {
    pub projects_heading: String,
    pub posts_heading: String,
}

impl Default for SectionsConfig {
    fn default() -> Self {
        Self {
            projects_heading: "Featured Projects".to_string(),
            posts_heading: "Project Roadmaps & Guides".to_string(),
        }
    }
}

/// Footer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
    /// Pin the copyright year instead of using the year at render time
    pub year: Option<i32>,
    pub notice: String,
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            year: None,
            notice: "All rights reserved.".to_string(),
        }
    }
}
