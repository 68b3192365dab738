//! Built-in portfolio templates using the Tera template engine
//!
//! The page, its stylesheet and the motion script are embedded in the
//! binary, so a site needs no theme directory.

use anyhow::Result;
use std::collections::HashMap;
use tera::{Context, Tera};

use crate::catalog::Icon;
use crate::motion::{Phase, CARD_DURATION};
use crate::render::{HoverStyles, PhaseStyle, View};

/// Browser side of the entrance latch
pub const MOTION_SCRIPT: &str = include_str!("portfolio/motion.js");

/// Template renderer with the embedded portfolio theme
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        // Escaping is explicit: `escape` for text, `attr` for attribute
        // values, nothing for inline SVG
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("portfolio/layout.html")),
            ("index.html", include_str!("portfolio/index.html")),
            (
                "partials/hero.html",
                include_str!("portfolio/partials/hero.html"),
            ),
            (
                "partials/projects.html",
                include_str!("portfolio/partials/projects.html"),
            ),
            (
                "partials/posts.html",
                include_str!("portfolio/partials/posts.html"),
            ),
            (
                "partials/footer.html",
                include_str!("portfolio/partials/footer.html"),
            ),
            ("style.css", include_str!("portfolio/style.css")),
        ])?;

        tera.register_filter("icon", icon_filter);
        tera.register_filter("attr", attr_filter);

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }

    /// Render the page for a view
    pub fn render_page(&self, view: &View) -> Result<String> {
        let mut context = Context::new();
        context.insert("meta", &view.meta);
        context.insert("hero", &view.hero);
        context.insert("projects", &view.projects);
        context.insert("posts", &view.posts);
        context.insert("footer", &view.footer);
        self.render("index.html", &context)
    }

    /// Render the stylesheet with the motion constants filled in
    pub fn render_stylesheet(&self) -> Result<String> {
        let mut context = Context::new();
        context.insert("card_duration_ms", &(CARD_DURATION.as_millis() as u64));
        context.insert("initial", &PhaseStyle::from(Phase::Initial));
        context.insert("animate", &PhaseStyle::from(Phase::Animate));
        context.insert("hover", &HoverStyles::default());
        self.render("style.css", &context)
    }
}

/// Tera filter: escape a value for a double-quoted attribute
///
/// Unlike `escape`, slashes stay readable so URLs come out as written.
fn attr_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("attr", "value", String, value);
    Ok(tera::Value::String(escape_attr(&s)))
}

fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Tera filter: resolve an icon name to inline SVG
///
/// `{{ card.icon | icon(size=48, class="card-icon") }}`
fn icon_filter(
    value: &tera::Value,
    args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let name = tera::try_get_value!("icon", "value", String, value);
    let icon: Icon = name
        .parse()
        .map_err(|e: crate::catalog::CatalogError| tera::Error::msg(e.to_string()))?;
    let size = match args.get("size") {
        Some(val) => tera::try_get_value!("icon", "size", u32, val),
        None => 24,
    };
    let class = match args.get("class") {
        Some(val) => tera::try_get_value!("icon", "class", String, val),
        None => String::new(),
    };
    Ok(tera::Value::String(icon.svg(size, &class)))
}
