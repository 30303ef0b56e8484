mod about;
mod blog;
mod contact;
mod download_button;
mod footer;
mod header;
mod hero;
mod projects;
mod skills;
mod theme_toggle;

pub use about::About;
pub use blog::Blog;
pub use contact::Contact;
pub use download_button::DownloadButton;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use projects::Projects;
pub use skills::Skills;
pub use theme_toggle::ThemeToggle;
