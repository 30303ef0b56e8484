use dioxus::prelude::*;

use crate::views::{BlogPost, Home, PageShell, ProjectDetails};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[layout(PageShell)]
    #[route("/")]
    Home,
    #[route("/blog/:id")] BlogPost {
        id: u32,
    },
    #[route("/project/:id")] ProjectDetails {
        id: u32,
    },
}
