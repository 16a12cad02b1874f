#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::Level;

mod common;

mod components;
use components::theme::{apply_document_theme, resolved_dark, THEME_SIGNAL};

mod nav;
use nav::SiteNav;

mod pages;
use pages::{About, Contact, Home, NotFound, Schedule, ServiceDetail};

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[layout(SiteNav)]
        #[route("/")]
        Home {},
        #[route("/about")]
        About {},
        #[route("/services/:slug")]
        ServiceDetail { slug: String },
        #[route("/schedule")]
        Schedule {},
        #[route("/contact")]
        Contact {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    // Re-applied whenever the switcher writes a new preference.
    use_effect(|| apply_document_theme(resolved_dark(*THEME_SIGNAL.read())));

    rsx! {
        style { "{common::style::SITE_STYLES}" }
        Router::<Route> { config: RouterConfig::default }
    }
}
