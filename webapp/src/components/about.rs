use dioxus::prelude::*;

use crate::components::reveal::Reveal;

struct AboutCard {
    heading: &'static str,
    body: &'static str,
    accent: &'static str,
}

static ABOUT_CARDS: &[AboutCard] = &[
    AboutCard {
        heading: "The Story",
        body: "Brightfold started as the side desk where colleagues brought \
               slides that needed rescuing. An engineering habit of precision \
               met a designer's eye, and the rescues became the job.",
        accent: "accent-primary",
    },
    AboutCard {
        heading: "The Philosophy",
        body: "Good design is not decoration; it is the shortest path between \
               your idea and the person reading it. Every choice on the page \
               has to earn its place.",
        accent: "accent-secondary",
    },
    AboutCard {
        heading: "The Work",
        body: "Brand identities, marketing sites, campaign assets, and the \
               occasional deck that has to land a room. One pair of hands, \
               start to finish.",
        accent: "accent-tertiary",
    },
];

#[component]
pub fn AboutSection() -> Element {
    rsx! {
        section { id: "aboutus-section", class: "about-section",
            div { class: "container",
                Reveal {
                    h2 { class: "section-heading", "About" }
                    p { class: "section-subheading",
                        "A studio built on one promise: whatever it is, \
                         it will look deliberate."
                    }
                }
                div { class: "about-grid",
                    for (index, card) in ABOUT_CARDS.iter().enumerate() {
                        Reveal { delay_ms: (index as u32) * 150,
                            div { class: "about-card",
                                div { class: "about-card-accent {card.accent}" }
                                div { class: "about-card-body",
                                    h3 { class: "about-card-heading", "{card.heading}" }
                                    p { class: "about-card-text", "{card.body}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
