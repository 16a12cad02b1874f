use dioxus::prelude::*;

use crate::components::about::AboutSection;
use crate::components::contact::ContactSection;
use crate::components::hero::HeroSection;
use crate::components::services::ServicesSection;

/// One-page brochure: every section is reachable by anchor from the
/// navigation as well as by route.
#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "home-page",
            HeroSection {}
            AboutSection {}
            ServicesSection {}
            ContactSection {}
        }
    }
}
