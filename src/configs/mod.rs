mod site;

pub use site::{ContactChannel, NavItem, SiteConfig, SocialLink, SITE};
