//! Configuration module

mod site;

pub use site::BannerConfig;
pub use site::SiteConfig;
