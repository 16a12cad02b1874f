use dioxus::prelude::*;
use dioxus_router::prelude::*;

mod home;
pub use home::Home;

mod service;
pub use service::ServiceDetail;

use crate::components::contact::ContactSection;
use crate::components::reveal::Reveal;
use crate::Route;

#[derive(Clone, PartialEq, Props)]
pub struct PageLayoutProps {
    #[props(default)]
    title: Option<String>,
    children: Element,
}

#[component]
pub fn PageLayout(props: PageLayoutProps) -> Element {
    rsx! {
        div { class: "page-layout",
            if let Some(title) = &props.title {
                h1 { class: "page-title", "{title}" }
            }
            {props.children}
        }
    }
}

#[component]
pub fn About() -> Element {
    rsx! {
        PageLayout {
            crate::components::about::AboutSection {}
        }
    }
}

#[component]
pub fn Schedule() -> Element {
    rsx! {
        PageLayout { title: "Schedule",
            Reveal {
                p { class: "section-subheading",
                    "Book a consultation to talk through scope, timelines, \
                     and what finished should look like for you."
                }
                div { class: "hero-actions",
                    Link {
                        to: Route::Contact {},
                        class: "btn btn-primary btn-lg",
                        "Request a slot"
                    }
                }
            }
        }
    }
}

#[component]
pub fn Contact() -> Element {
    rsx! {
        ContactSection {}
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        main { class: "not-found",
            div {
                p { class: "not-found-code", "404" }
                h1 { class: "not-found-title", "Page not found" }
                p { class: "not-found-text",
                    "Sorry, there is nothing at /{path}."
                }
                div { class: "not-found-actions",
                    Link { to: Route::Home {}, class: "btn btn-primary", "Go back home" }
                }
            }
        }
    }
}
