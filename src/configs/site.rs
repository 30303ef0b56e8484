pub struct NavItem {
    pub label: &'static str,
    pub anchor: &'static str,
}

pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
}

pub struct ContactChannel {
    pub title: &'static str,
    pub href: &'static str,
}

pub struct SiteConfig {
    pub owner_first: &'static str,
    pub owner_last: &'static str,
    pub role: &'static str,
    pub tagline: &'static str,
    pub location: &'static str,
    pub languages: &'static str,
    pub nav: Vec<NavItem>,
    pub socials: Vec<SocialLink>,
    pub contact: Vec<ContactChannel>,
}

impl SiteConfig {
    fn seeded() -> Self {
        Self {
            owner_first: "Ajay",
            owner_last: "Gupta",
            role: "Full-Stack Developer",
            tagline: "A passionate full-stack developer specializing in React, Node.js, \
                      MongoDB, PHP, Python, and Java. I create modern, responsive, and \
                      user-friendly web applications.",
            location: "Jamshedpur, Jharkhand",
            languages: "English (Intermediate), Hindi (Fluent)",
            nav: vec![
                NavItem { label: "Home", anchor: "#home" },
                NavItem { label: "About", anchor: "#about" },
                NavItem { label: "Skills", anchor: "#skills" },
                NavItem { label: "Projects", anchor: "#projects" },
                NavItem { label: "Contact", anchor: "#contact" },
            ],
            socials: vec![
                SocialLink {
                    name: "Github",
                    url: "https://github.com/ajaygupta899",
                },
                SocialLink {
                    name: "LinkedIn",
                    url: "https://www.linkedin.com/in/ajay-gupta-47a88b92",
                },
                SocialLink {
                    name: "Email",
                    url: "mailto:ajaygupta.gupta899@gmail.com",
                },
            ],
            contact: vec![
                ContactChannel {
                    title: "Location",
                    href: "https://www.google.com/maps/place/Jamshedpur,+Jharkhand",
                },
                ContactChannel {
                    title: "Email",
                    href: "mailto:ajaygupta.gupta899@gmail.com",
                },
                ContactChannel {
                    title: "Phone",
                    href: "tel:9162899535",
                },
            ],
        }
    }
}

lazy_static::lazy_static! {
    pub static ref SITE: SiteConfig = SiteConfig::seeded();
}
