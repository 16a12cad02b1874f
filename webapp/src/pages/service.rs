use dioxus::prelude::*;
use dioxus_router::prelude::*;

use super::PageLayout;
use crate::components::reveal::Reveal;
use crate::components::services::service_by_slug;
use crate::Route;

#[component]
pub fn ServiceDetail(slug: String) -> Element {
    let Some(service) = service_by_slug(&slug) else {
        // Unknown slug is a dead link, not a crash.
        return rsx! {
            super::NotFound { segments: vec![String::from("services"), slug.clone()] }
        };
    };

    rsx! {
        PageLayout { title: "{service.title}",
            Reveal {
                p { class: "service-detail-tagline", "{service.tagline}" }
                p { "{service.blurb}" }
                div { class: "hero-actions",
                    Link {
                        to: Route::Contact {},
                        class: "btn btn-primary btn-lg",
                        "Start this project"
                    }
                }
            }
        }
    }
}
