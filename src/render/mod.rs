//! Page renderer - turns the catalog into a view tree
//!
//! The view is plain data: hero, project grid, post list, footer. HTML is
//! produced from it by [`crate::templates::TemplateRenderer`].

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashSet;

use crate::catalog::{Catalog, Icon, Post, Project};
use crate::config::SiteConfig;
use crate::motion::{HeroMotion, HoverEffect, Phase, SectionMotion, Transition};

/// Anchor id of the project section
pub const PROJECTS_SECTION: &str = "projects";
/// Anchor id of the post section
pub const POSTS_SECTION: &str = "guides";

/// The whole page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct View {
    pub meta: MetaView,
    pub hero: HeroView,
    pub projects: SectionView<ProjectCard>,
    pub posts: SectionView<PostCard>,
    pub footer: FooterView,
}

impl View {
    /// Card titles of a section, in display order
    pub fn project_titles(&self) -> Vec<&str> {
        self.projects.cards.iter().map(|c| c.title.as_str()).collect()
    }

    pub fn post_titles(&self) -> Vec<&str> {
        self.posts.cards.iter().map(|c| c.title.as_str()).collect()
    }
}

/// Document-level data for `<head>`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetaView {
    pub title: String,
    pub description: String,
    pub author: String,
    pub language: String,
    pub canonical_url: String,
    pub stylesheet_href: String,
    pub script_href: String,
}

/// Milliseconds, as the markup consumes them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Timing {
    pub delay_ms: u64,
    pub duration_ms: u64,
}

impl From<Transition> for Timing {
    fn from(t: Transition) -> Self {
        Self {
            delay_ms: t.delay.as_millis() as u64,
            duration_ms: t.duration.as_millis() as u64,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkView {
    pub label: String,
    pub href: String,
    pub icon: Icon,
    pub external: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeroView {
    pub title: String,
    pub subtitle: String,
    pub profile: LinkView,
    pub contact: LinkView,
    pub container: Timing,
    pub title_motion: Timing,
    pub subtitle_motion: Timing,
    pub actions_motion: Timing,
}

/// A card section that animates on first viewport entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionView<C> {
    pub id: String,
    pub heading: String,
    pub cards: Vec<C>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectCard {
    /// Identity key; the title
    pub key: String,
    pub anchor: String,
    pub icon: Icon,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub motion: Timing,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostCard {
    pub key: String,
    pub anchor: String,
    pub icon: Icon,
    pub title: String,
    pub description: String,
    pub motion: Timing,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FooterView {
    pub year: i32,
    pub author: String,
    pub notice: String,
}

/// Resting style of an entrance phase, written into the stylesheet
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PhaseStyle {
    pub opacity: f32,
    pub offset_px: u32,
}

impl From<Phase> for PhaseStyle {
    fn from(phase: Phase) -> Self {
        Self {
            opacity: phase.opacity(),
            offset_px: phase.offset_px(),
        }
    }
}

/// Hover transforms written into the stylesheet
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoverStyles {
    pub project_card: String,
    pub project_icon: String,
    pub post_card: String,
    pub post_icon: String,
}

impl Default for HoverStyles {
    fn default() -> Self {
        Self {
            project_card: HoverEffect::PROJECT_CARD.css_transform(),
            project_icon: HoverEffect::PROJECT_ICON.css_transform(),
            post_card: HoverEffect::POST_CARD.css_transform(),
            post_icon: HoverEffect::POST_ICON.css_transform(),
        }
    }
}

/// Builds [`View`]s for a site
pub struct PageRenderer<'a> {
    config: &'a SiteConfig,
}

impl<'a> PageRenderer<'a> {
    pub fn new(config: &'a SiteConfig) -> Self {
        Self { config }
    }

    /// Build the view with the footer year taken from the wall clock
    pub fn render(&self, catalog: &Catalog) -> View {
        self.render_at(catalog, Utc::now())
    }

    /// Build the view as of `now`
    ///
    /// Apart from the footer year the result depends only on the catalog and
    /// the configuration.
    pub fn render_at(&self, catalog: &Catalog, now: DateTime<Utc>) -> View {
        View {
            meta: self.meta(),
            hero: self.hero(),
            projects: SectionView {
                id: PROJECTS_SECTION.to_string(),
                heading: self.config.sections.projects_heading.clone(),
                cards: project_cards(catalog.projects()),
            },
            posts: SectionView {
                id: POSTS_SECTION.to_string(),
                heading: self.config.sections.posts_heading.clone(),
                cards: post_cards(catalog.posts()),
            },
            footer: FooterView {
                year: self.config.copyright_year(now),
                author: self.config.author.clone(),
                notice: self.config.footer.notice.clone(),
            },
        }
    }

    fn meta(&self) -> MetaView {
        MetaView {
            title: self.config.title.clone(),
            description: self.config.description.clone(),
            author: self.config.author.clone(),
            language: self.config.language.clone(),
            canonical_url: full_url_for(self.config, ""),
            stylesheet_href: url_for(&self.config.root, "css/style.css"),
            script_href: url_for(&self.config.root, "js/motion.js"),
        }
    }

    fn hero(&self) -> HeroView {
        let motion = HeroMotion::default();
        let links = &self.config.links;
        HeroView {
            title: self.config.hero.title.clone(),
            subtitle: self.config.hero.subtitle.clone(),
            profile: LinkView {
                label: links.profile_label.clone(),
                href: links.profile_url.clone(),
                icon: Icon::Github,
                external: true,
            },
            contact: LinkView {
                label: links.contact_label.clone(),
                href: links.contact_href(),
                icon: Icon::Mail,
                external: false,
            },
            container: motion.container.into(),
            title_motion: motion.title.into(),
            subtitle_motion: motion.subtitle.into(),
            actions_motion: motion.actions.into(),
        }
    }
}

fn project_cards(projects: &[Project]) -> Vec<ProjectCard> {
    let schedule = SectionMotion::new(projects.len()).schedule();
    let mut anchors = Anchors::new("project");
    projects
        .iter()
        .zip(schedule)
        .map(|(project, transition)| ProjectCard {
            key: project.title.clone(),
            anchor: anchors.next(&project.title),
            icon: project.icon,
            title: project.title.clone(),
            description: project.description.clone(),
            tags: project.tags.clone(),
            motion: transition.into(),
        })
        .collect()
}

fn post_cards(posts: &[Post]) -> Vec<PostCard> {
    let schedule = SectionMotion::new(posts.len()).schedule();
    let mut anchors = Anchors::new("post");
    posts
        .iter()
        .zip(schedule)
        .map(|(post, transition)| PostCard {
            key: post.title.clone(),
            anchor: anchors.next(&post.title),
            icon: post.icon,
            title: post.title.clone(),
            description: post.description.clone(),
            motion: transition.into(),
        })
        .collect()
}

/// Hands out card anchors that are unique within one section
///
/// Titles that slugify alike get `-2`, `-3`, ... in catalog order.
struct Anchors<'a> {
    prefix: &'a str,
    used: HashSet<String>,
}

impl<'a> Anchors<'a> {
    fn new(prefix: &'a str) -> Self {
        Self {
            prefix,
            used: HashSet::new(),
        }
    }

    fn next(&mut self, title: &str) -> String {
        let base = anchor(self.prefix, title);
        let mut candidate = base.clone();
        let mut n = 2;
        while self.used.contains(&candidate) {
            candidate = format!("{}-{}", base, n);
            n += 1;
        }
        self.used.insert(candidate.clone());
        candidate
    }
}

fn anchor(prefix: &str, title: &str) -> String {
    let slug = slug::slugify(title);
    if slug.is_empty() {
        prefix.to_string()
    } else {
        format!("{}-{}", prefix, slug)
    }
}

/// Join `path` onto the site root
fn url_for(root: &str, path: &str) -> String {
    let root = root.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Absolute URL of `path` on the configured site
fn full_url_for(config: &SiteConfig, path: &str) -> String {
    format!(
        "{}{}",
        config.url.trim_end_matches('/'),
        url_for(&config.root, path)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone};

    fn project(icon: Icon, title: &str, description: &str, tags: &[&str]) -> Project {
        Project {
            icon,
            title: title.to_string(),
            description: description.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn two_projects() -> Catalog {
        Catalog::new(
            vec![
                project(
                    Icon::Youtube,
                    "YouTube Niche App",
                    "Niche videos.",
                    &["Next.js", "YouTube API", "Tailwind"],
                ),
                project(Icon::Layout, "Task Manager", "Tasks.", &["React", "React"]),
            ],
            Vec::new(),
        )
    }

    #[test]
    fn test_cards_follow_catalog_order() {
        let config = SiteConfig::default();
        let view = PageRenderer::new(&config).render(&two_projects());

        assert_eq!(view.project_titles(), ["YouTube Niche App", "Task Manager"]);
        assert_eq!(view.projects.cards[0].description, "Niche videos.");
        assert_eq!(
            view.projects.cards[0].tags,
            ["Next.js", "YouTube API", "Tailwind"]
        );
        // Tags are neither deduplicated nor reordered
        assert_eq!(view.projects.cards[1].tags, ["React", "React"]);
        assert!(view.posts.cards.is_empty());
    }

    #[test]
    fn test_builtin_counts() {
        let config = SiteConfig::default();
        let catalog = Catalog::builtin();
        let view = PageRenderer::new(&config).render(&catalog);
        assert_eq!(view.projects.cards.len(), catalog.projects().len());
        assert_eq!(view.posts.cards.len(), catalog.posts().len());
        assert_eq!(view.posts.cards[2].icon, Icon::PenTool);
    }

    #[test]
    fn test_render_is_stable() {
        let config = SiteConfig::default();
        let renderer = PageRenderer::new(&config);
        let catalog = Catalog::builtin();
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();

        let first = renderer.render_at(&catalog, now);
        let second = renderer.render_at(&catalog, now);
        assert_eq!(first, second);

        let mut keys: Vec<_> = first.projects.cards.iter().map(|c| &c.key).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), first.projects.cards.len());
    }

    #[test]
    fn test_stagger_in_view() {
        let config = SiteConfig::default();
        let view = PageRenderer::new(&config).render(&Catalog::builtin());
        for (i, card) in view.projects.cards.iter().enumerate() {
            assert_eq!(card.motion.delay_ms, 100 * i as u64);
            assert_eq!(card.motion.duration_ms, 500);
        }
        assert_eq!(view.posts.cards[2].motion.delay_ms, 200);
    }

    #[test]
    fn test_footer_year() {
        let mut config = SiteConfig::default();
        config.timezone = "UTC".to_string();
        let renderer = PageRenderer::new(&config);

        let now = Utc.with_ymd_and_hms(2025, 7, 4, 9, 0, 0).unwrap();
        assert_eq!(renderer.render_at(&Catalog::builtin(), now).footer.year, 2025);

        let view = renderer.render(&Catalog::builtin());
        assert_eq!(view.footer.year, Utc::now().year());
    }

    #[test]
    fn test_hero_links() {
        let config = SiteConfig::default();
        let hero = PageRenderer::new(&config).hero();
        assert_eq!(hero.profile.href, "https://github.com/yourusername");
        assert!(hero.profile.external);
        assert_eq!(hero.contact.href, "mailto:your-email@example.com");
        assert_eq!(hero.title_motion.delay_ms, 200);
        assert_eq!(hero.subtitle_motion.delay_ms, 400);
        assert_eq!(hero.actions_motion.delay_ms, 600);
    }

    #[test]
    fn test_anchor() {
        assert_eq!(anchor("project", "YouTube Niche App"), "project-youtube-niche-app");
        assert_eq!(anchor("project", "bolt.new"), "project-bolt-new");
        assert_eq!(anchor("post", "!!!"), "post");
    }

    #[test]
    fn test_anchors_unique_within_section() {
        let catalog = Catalog::new(
            ["bolt.new", "Bolt New", "bolt-new-2", "Bolt  New"]
                .iter()
                .map(|title| Project {
                    icon: Icon::Rocket,
                    title: title.to_string(),
                    description: String::new(),
                    tags: Vec::new(),
                })
                .collect(),
            vec![
                Post {
                    icon: Icon::Brain,
                    title: "???".to_string(),
                    description: String::new(),
                },
                Post {
                    icon: Icon::Brain,
                    title: "!!!".to_string(),
                    description: String::new(),
                },
            ],
        );
        let view = PageRenderer::new(&SiteConfig::default()).render(&catalog);

        let anchors: Vec<&str> = view.projects.cards.iter().map(|c| c.anchor.as_str()).collect();
        assert_eq!(
            anchors,
            [
                "project-bolt-new",
                "project-bolt-new-2",
                "project-bolt-new-2-2",
                "project-bolt-new-3"
            ]
        );
        let anchors: Vec<&str> = view.posts.cards.iter().map(|c| c.anchor.as_str()).collect();
        assert_eq!(anchors, ["post", "post-2"]);
    }

    #[test]
    fn test_phase_styles() {
        let initial = PhaseStyle::from(Phase::Initial);
        assert_eq!(initial.opacity, 0.0);
        assert_eq!(initial.offset_px, 20);
        assert_eq!(PhaseStyle::from(Phase::Animate).offset_px, 0);
    }

    #[test]
    fn test_urls() {
        let mut config = SiteConfig::default();
        config.url = "https://example.com/".to_string();
        config.root = "/me/".to_string();
        let meta = PageRenderer::new(&config).meta();
        assert_eq!(meta.stylesheet_href, "/me/css/style.css");
        assert_eq!(meta.script_href, "/me/js/motion.js");
        assert_eq!(meta.canonical_url, "https://example.com/me/");
    }
}
