//! Symbolic glyph references
//!
//! Catalog entries only name an icon. The SVG markup is produced at render
//! time, so the catalog stays plain data.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::CatalogError;

/// Glyphs available to the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Github,
    Youtube,
    Mail,
    Rocket,
    Brain,
    Layout,
    FileCode,
    Presentation,
    PenTool,
    Newspaper,
}

impl Icon {
    /// Every icon, in declaration order
    pub const ALL: [Icon; 10] = [
        Icon::Github,
        Icon::Youtube,
        Icon::Mail,
        Icon::Rocket,
        Icon::Brain,
        Icon::Layout,
        Icon::FileCode,
        Icon::Presentation,
        Icon::PenTool,
        Icon::Newspaper,
    ];

    /// Kebab-case name used in data files and templates
    pub fn name(self) -> &'static str {
        match self {
            Icon::Github => "github",
            Icon::Youtube => "youtube",
            Icon::Mail => "mail",
            Icon::Rocket => "rocket",
            Icon::Brain => "brain",
            Icon::Layout => "layout",
            Icon::FileCode => "file-code",
            Icon::Presentation => "presentation",
            Icon::PenTool => "pen-tool",
            Icon::Newspaper => "newspaper",
        }
    }

    /// Inner SVG elements on a 24x24 stroke grid
    fn body(self) -> &'static str {
        match self {
            Icon::Github => concat!(
                r#"<path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4"/>"#,
                r#"<path d="M9 18c-4.51 2-5-2-7-2"/>"#
            ),
            Icon::Youtube => concat!(
                r#"<path d="M2.5 17a24.12 24.12 0 0 1 0-10 2 2 0 0 1 1.4-1.4 49.56 49.56 0 0 1 16.2 0A2 2 0 0 1 21.5 7a24.12 24.12 0 0 1 0 10 2 2 0 0 1-1.4 1.4 49.55 49.55 0 0 1-16.2 0A2 2 0 0 1 2.5 17"/>"#,
                r#"<path d="m10 15 5-3-5-3z"/>"#
            ),
            Icon::Mail => concat!(
                r#"<rect width="20" height="16" x="2" y="4" rx="2"/>"#,
                r#"<path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>"#
            ),
            Icon::Rocket => concat!(
                r#"<path d="M4.5 16.5c-1.5 1.26-2 5-2 5s3.74-.5 5-2c.71-.84.7-2.13-.09-2.91a2.18 2.18 0 0 0-2.91-.09z"/>"#,
                r#"<path d="m12 15-3-3a22 22 0 0 1 2-3.95A12.88 12.88 0 0 1 22 2c0 2.72-.78 7.5-6 11a22.35 22.35 0 0 1-4 2z"/>"#,
                r#"<path d="M9 12H4s.55-3.03 2-4c1.62-1.08 5 0 5 0"/>"#,
                r#"<path d="M12 15v5s3.03-.55 4-2c1.08-1.62 0-5 0-5"/>"#
            ),
            Icon::Brain => concat!(
                r#"<path d="M12 5a3 3 0 1 0-5.997.125 4 4 0 0 0-2.526 5.77 4 4 0 0 0 .556 6.588A4 4 0 1 0 12 18Z"/>"#,
                r#"<path d="M12 5a3 3 0 1 1 5.997.125 4 4 0 0 1 2.526 5.77 4 4 0 0 1-.556 6.588A4 4 0 1 1 12 18Z"/>"#,
                r#"<path d="M12 5v13"/>"#
            ),
            Icon::Layout => concat!(
                r#"<rect width="18" height="7" x="3" y="3" rx="1"/>"#,
                r#"<rect width="9" height="7" x="3" y="14" rx="1"/>"#,
                r#"<rect width="5" height="7" x="16" y="14" rx="1"/>"#
            ),
            Icon::FileCode => concat!(
                r#"<path d="M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7Z"/>"#,
                r#"<path d="M14 2v4a2 2 0 0 0 2 2h4"/>"#,
                r#"<path d="m10 13-2 2 2 2"/>"#,
                r#"<path d="m14 17 2-2-2-2"/>"#
            ),
            Icon::Presentation => concat!(
                r#"<path d="M2 3h20"/>"#,
                r#"<path d="M21 3v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V3"/>"#,
                r#"<path d="m7 21 5-5 5 5"/>"#
            ),
            Icon::PenTool => concat!(
                r#"<path d="M15.707 21.293a1 1 0 0 1-1.414 0l-1.586-1.586a1 1 0 0 1 0-1.414l5.586-5.586a1 1 0 0 1 1.414 0l1.586 1.586a1 1 0 0 1 0 1.414z"/>"#,
                r#"<path d="m18 13-1.375-6.874a1 1 0 0 0-.746-.776L3.235 2.028a1 1 0 0 0-1.207 1.207L5.35 15.879a1 1 0 0 0 .776.746L13 18"/>"#,
                r#"<path d="m2.3 2.3 7.286 7.286"/>"#,
                r#"<circle cx="11" cy="11" r="2"/>"#
            ),
            Icon::Newspaper => concat!(
                r#"<path d="M4 22h16a2 2 0 0 0 2-2V4a2 2 0 0 0-2-2H8a2 2 0 0 0-2 2v16a2 2 0 0 1-2 2Zm0 0a2 2 0 0 1-2-2v-9c0-1.1.9-2 2-2h2"/>"#,
                r#"<path d="M18 14h-8"/>"#,
                r#"<path d="M15 18h-5"/>"#,
                r#"<path d="M10 6h8v4h-8V6Z"/>"#
            ),
        }
    }

    /// Resolve the glyph to inline SVG markup
    ///
    /// `size` is the rendered width and height in pixels; `class` is added
    /// verbatim to the `<svg>` element so the stylesheet can color it.
    pub fn svg(self, size: u32, class: &str) -> String {
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="icon icon-{name} {class}" aria-hidden="true">{body}</svg>"#,
            size = size,
            name = self.name(),
            class = class,
            body = self.body(),
        )
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Icon {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Icon::ALL
            .into_iter()
            .find(|icon| icon.name() == s)
            .ok_or_else(|| CatalogError::UnknownIcon(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trips_through_from_str() {
        for icon in Icon::ALL {
            assert_eq!(icon.name().parse::<Icon>().unwrap(), icon);
        }
    }

    #[test]
    fn test_unknown_icon() {
        let err = "sparkles".parse::<Icon>().unwrap_err();
        assert!(matches!(err, CatalogError::UnknownIcon(ref name) if name == "sparkles"));
    }

    #[test]
    fn test_svg_carries_size_and_class() {
        let svg = Icon::Rocket.svg(48, "card-icon");
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains(r#"width="48""#));
        assert!(svg.contains("icon-rocket card-icon"));
    }

    #[test]
    fn test_serde_uses_kebab_case() {
        let icon: Icon = serde_yaml::from_str("file-code").unwrap();
        assert_eq!(icon, Icon::FileCode);
        assert_eq!(serde_yaml::to_string(&Icon::PenTool).unwrap().trim(), "pen-tool");
    }
}
