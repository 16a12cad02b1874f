use dioxus::prelude::*;

use crate::components::reveal::Reveal;

#[component]
pub fn HeroSection() -> Element {
    rsx! {
        section { id: "home", class: "hero",
            div { class: "container",
                Reveal {
                    div { class: "hero-content",
                        h1 { class: "hero-title",
                            "Make your work "
                            span { class: "hero-highlight", "look the part" }
                        }
                        p { class: "hero-subtitle",
                            "Brightfold is a one-person design studio for brands, \
                             sites, and decks that need to feel finished."
                        }
                        div { class: "hero-actions",
                            a {
                                href: "#services-section",
                                class: "btn btn-primary btn-lg",
                                "See services"
                            }
                            a {
                                href: "#contact-section",
                                class: "btn btn-secondary btn-lg",
                                "Start a project"
                            }
                        }
                    }
                }
            }
        }
    }
}
