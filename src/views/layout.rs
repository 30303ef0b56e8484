use dioxus::prelude::*;

use crate::components::{Footer, Header};
use crate::routes::Route;

#[component]
pub fn PageShell() -> Element {
    rsx! {
        div {
            class: "min-h-screen flex flex-col bg-background text-foreground",
            Header {}
            Outlet::<Route> {}
            Footer {}
        }
    }
}
