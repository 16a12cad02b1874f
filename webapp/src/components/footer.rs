use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::Route;

#[component]
pub fn SiteFooter() -> Element {
    rsx! {
        footer { class: "site-footer",
            div { class: "container footer-inner",
                span { class: "footer-brand", "Brightfold Studio" }
                nav { class: "footer-links",
                    Link { to: Route::About {}, "About" }
                    Link { to: Route::Schedule {}, "Schedule" }
                    Link { to: Route::Contact {}, "Contact" }
                }
                span { class: "footer-note", "Design that carries your story." }
            }
        }
    }
}
