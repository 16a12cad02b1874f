//! Navigation item model and the site's navigation source.
//!
//! The bar itself never computes route matching; `site_navigation` is the
//! upstream source that rebuilds the item sequence with fresh `current`
//! flags whenever the active route changes.

use crate::components::services;
use crate::nav::icons::{self, IconRender};
use crate::Route;

#[derive(Clone, PartialEq)]
pub struct NavItem {
    pub name: String,
    /// Target path or fragment anchor.  Inert on disabled items and on
    /// items that carry children.
    pub href: String,
    /// Owned by the caller, derived from the active route.  Read for style
    /// selection only.
    pub current: bool,
    pub disabled: bool,
    pub children: Vec<NavItem>,
    pub icon: Option<IconRender>,
    pub description: Option<String>,
}

impl NavItem {
    pub fn link(name: &str, href: &str, current: bool) -> Self {
        Self {
            name: name.to_owned(),
            href: href.to_owned(),
            current,
            disabled: false,
            children: Vec::new(),
            icon: None,
            description: None,
        }
    }

    pub fn icon(mut self, icon: IconRender) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_owned());
        self
    }

    pub fn children(mut self, children: Vec<NavItem>) -> Self {
        self.children = children;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Active for style purposes when the item itself or any child is
    /// current.
    pub fn is_active(&self) -> bool {
        self.current || self.children.iter().any(|child| child.current)
    }
}

#[derive(Clone, PartialEq)]
pub struct NavConfig {
    pub items: Vec<NavItem>,
    pub show_navigation: bool,
}

#[derive(Clone, PartialEq)]
pub struct LogoConfig {
    pub light: String,
    pub dark: String,
    pub width: u32,
    pub height: u32,
}

impl LogoConfig {
    /// A default (empty) config means no logo artwork was supplied; the
    /// bar falls back to its wordmark.
    pub fn is_configured(&self) -> bool {
        !self.light.is_empty() || !self.dark.is_empty()
    }
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            light: String::new(),
            dark: String::new(),
            width: 130,
            height: 40,
        }
    }
}

/// The asset keys are deliberately inverted: a dark page needs the light
/// artwork for contrast.
pub fn logo_asset(logo: &LogoConfig, is_dark: bool) -> &str {
    if is_dark { &logo.light } else { &logo.dark }
}

#[derive(Clone, Default, PartialEq)]
pub struct CtaConfig {
    pub show: bool,
    pub text: Option<String>,
    pub href: Option<String>,
    pub phone_number: Option<String>,
}

/// Explicit href wins, then a telephone link, then a dead anchor.
pub fn cta_target(cta: &CtaConfig) -> String {
    if let Some(href) = &cta.href {
        return href.clone();
    }
    if let Some(phone) = &cta.phone_number {
        return format!("tel:{phone}");
    }
    String::from("#")
}

/// Item sequence for the site header, recomputed per route.
pub fn site_navigation(route: &Route) -> NavConfig {
    let service_children = services::SERVICES
        .iter()
        .map(|service| {
            NavItem::link(
                service.title,
                &services::service_href(service.slug),
                matches!(route, Route::ServiceDetail { slug } if slug == service.slug),
            )
            .icon(icons::file)
            .description(service.tagline)
        })
        .collect();

    NavConfig {
        items: vec![
            NavItem::link("Home", "/", matches!(route, Route::Home {}))
                .icon(icons::house)
                .description("Back to the front page"),
            NavItem::link("About", "/about", matches!(route, Route::About {}))
                .icon(icons::info)
                .description("The studio and how it works"),
            NavItem::link(
                "Services",
                "#",
                matches!(route, Route::ServiceDetail { .. }),
            )
            .icon(icons::file)
            .description("Everything the studio offers")
            .children(service_children),
            NavItem::link("Schedule", "/schedule", matches!(route, Route::Schedule {}))
                .icon(icons::calendar)
                .description("Book a consultation"),
            NavItem::link("Contact", "/contact", matches!(route, Route::Contact {}))
                .icon(icons::phone)
                .description("Get in touch"),
        ],
        show_navigation: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cta_resolution_order() {
        let full = CtaConfig {
            show: true,
            text: None,
            href: Some(String::from("/contact")),
            phone_number: Some(String::from("0123456789")),
        };
        assert_eq!(cta_target(&full), "/contact");

        let phone_only = CtaConfig {
            show: true,
            phone_number: Some(String::from("0123456789")),
            ..CtaConfig::default()
        };
        assert_eq!(cta_target(&phone_only), "tel:0123456789");

        assert_eq!(cta_target(&CtaConfig::default()), "#");
    }

    #[test]
    fn logo_assets_are_inverted() {
        let logo = LogoConfig {
            light: String::from("/images/logo-light.svg"),
            dark: String::from("/images/logo-dark.svg"),
            ..LogoConfig::default()
        };
        assert_eq!(logo_asset(&logo, true), "/images/logo-light.svg");
        assert_eq!(logo_asset(&logo, false), "/images/logo-dark.svg");

        assert!(logo.is_configured());
        assert!(!LogoConfig::default().is_configured());
    }

    #[test]
    fn parent_is_active_when_a_child_is_current() {
        let parent = NavItem::link("Services", "#", false).children(vec![
            NavItem::link("Web", "/services/web", false),
            NavItem::link("Design", "/services/design", true),
        ]);
        assert!(parent.is_active());

        let idle = NavItem::link("Services", "#", false)
            .children(vec![NavItem::link("Web", "/services/web", false)]);
        assert!(!idle.is_active());
    }

    #[test]
    fn one_current_item_per_route() {
        let config = site_navigation(&Route::About {});
        assert!(config.show_navigation);

        let current: Vec<&str> = config
            .items
            .iter()
            .filter(|item| item.current)
            .map(|item| item.name.as_str())
            .collect();
        assert_eq!(current, ["About"]);
    }

    #[test]
    fn service_route_marks_parent_and_child() {
        let slug = services::SERVICES[0].slug;
        let config = site_navigation(&Route::ServiceDetail {
            slug: slug.to_owned(),
        });

        let parent = &config.items[2];
        assert_eq!(parent.name, "Services");
        assert!(parent.current);
        assert!(parent.children[0].current);
        assert!(parent.children.iter().skip(1).all(|child| !child.current));
    }
}
