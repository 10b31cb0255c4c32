//! Configuration module

mod site;

pub use site::ProfileLink;
pub use site::ShowcaseItem;
pub use site::SiteConfig;
