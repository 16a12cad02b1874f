//! Service catalogue: the static card data and the grid section.

use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::components::reveal::Reveal;

pub struct Service {
    pub slug: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub blurb: &'static str,
    pub accent: &'static str,
}

pub static SERVICES: &[Service] = &[
    Service {
        slug: "branding",
        title: "Branding & Identity",
        tagline: "Your story, visually told",
        blurb: "Marks, palettes, and guidelines that capture what your \
                business stands for and keep every touchpoint consistent.",
        accent: "accent-primary",
    },
    Service {
        slug: "web-design",
        title: "Digital & Web Design",
        tagline: "Where ideas become interfaces",
        blurb: "Responsive sites and product surfaces designed to read well, \
                load fast, and hold up on any screen.",
        accent: "accent-secondary",
    },
    Service {
        slug: "photography",
        title: "Video & Photography",
        tagline: "Visual storytelling in motion",
        blurb: "Production and editing that turns launches, spaces, and \
                people into material you can actually publish.",
        accent: "accent-tertiary",
    },
    Service {
        slug: "print",
        title: "Presentation & Print",
        tagline: "Polished pages, sharp decks",
        blurb: "Brochures, decks, and print collateral laid out with the \
                same care as the pixels.",
        accent: "accent-primary",
    },
    Service {
        slug: "social",
        title: "Social Media Content",
        tagline: "Content that starts conversations",
        blurb: "Post templates, campaign visuals, and copy support that keep \
                a feed coherent week after week.",
        accent: "accent-secondary",
    },
];

pub fn service_by_slug(slug: &str) -> Option<&'static Service> {
    SERVICES.iter().find(|service| service.slug == slug)
}

pub fn service_href(slug: &str) -> String {
    format!("/services/{slug}")
}

#[component]
pub fn ServicesSection() -> Element {
    rsx! {
        section { id: "services-section", class: "services-section",
            div { class: "container",
                Reveal {
                    h2 { class: "section-heading", "Services" }
                    p { class: "section-subheading",
                        "Versatile expertise for every creative need."
                    }
                }
                div { class: "services-grid",
                    for (index, service) in SERVICES.iter().enumerate() {
                        Reveal { delay_ms: (index as u32) * 100,
                            div { class: "service-card",
                                div { class: "service-card-accent {service.accent}" }
                                div { class: "service-card-body",
                                    h3 { class: "service-card-title", "{service.title}" }
                                    p { class: "service-card-tagline", "{service.tagline}" }
                                    p { class: "service-card-blurb", "{service.blurb}" }
                                    Link {
                                        to: service_href(service.slug),
                                        class: "service-card-link",
                                        "Learn more"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn slugs_are_unique() {
        let slugs: HashSet<&str> = SERVICES.iter().map(|service| service.slug).collect();
        assert_eq!(slugs.len(), SERVICES.len());
    }

    #[test]
    fn lookup_by_slug() {
        let service = service_by_slug("web-design").expect("known slug");
        assert_eq!(service.title, "Digital & Web Design");
        assert!(service_by_slug("carpentry").is_none());
    }

    #[test]
    fn hrefs_point_under_services() {
        for service in SERVICES {
            assert_eq!(
                service_href(service.slug),
                format!("/services/{}", service.slug)
            );
        }
    }
}
