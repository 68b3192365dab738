//! Configuration module

mod site;

pub use site::FooterConfig;
pub use site::HeroConfig;
pub use site::LinksConfig;
pub use site::SectionsConfig;
pub use site::SiteConfig;
