//! Configurable site navigation: fixed top bar or left rail, desktop
//! dropdowns, mobile drawer, variant theming.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_router::prelude::*;

pub mod config;
pub mod icons;
pub mod scroll_lock;
pub mod state;
pub mod style;

use config::{cta_target, logo_asset, site_navigation, CtaConfig, LogoConfig, NavConfig, NavItem};
use scroll_lock::ScrollLock;
use state::NavState;
use style::{NavPosition, NavStyles, NavVariant};

use crate::components::footer::SiteFooter;
use crate::components::theme::{self, ThemePref, ThemeSwitcher};
use crate::Route;

/// Router layout: header, routed page content, footer.
#[component]
pub fn SiteNav() -> Element {
    let route = use_route::<Route>();
    let nav_config = site_navigation(&route);

    rsx! {
        ConfigurableNav {
            config: nav_config,
            variant: NavVariant::Glass,
            glass_morphism: true,
            show_theme_switcher: true,
            mobile_full_screen: true,
            logo: LogoConfig {
                light: String::from("/assets/logo-light.svg"),
                dark: String::from("/assets/logo-dark.svg"),
                ..LogoConfig::default()
            },
            cta: CtaConfig {
                show: true,
                text: Some(String::from("Get in touch")),
                href: None,
                phone_number: Some(String::from("+442079460118")),
            },
        }
        main { class: "site-main", Outlet::<Route> {} }
        SiteFooter {}
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct NavProps {
    config: NavConfig,
    #[props(default)]
    variant: NavVariant,
    #[props(default)]
    position: NavPosition,
    #[props(default)]
    theme: ThemePref,
    #[props(default)]
    logo: LogoConfig,
    #[props(default)]
    cta: CtaConfig,
    #[props(default)]
    show_theme_switcher: bool,
    #[props(default)]
    mobile_full_screen: bool,
    #[props(default)]
    transparent: bool,
    #[props(default)]
    glass_morphism: bool,
    #[props(default)]
    class: String,
}

/// Guard shell: when the config hides navigation entirely, nothing below
/// this point runs, so no UI state or scroll-lock is ever set up.
#[component]
pub fn ConfigurableNav(props: NavProps) -> Element {
    if !props.config.show_navigation {
        return rsx! {};
    }

    rsx! {
        NavBarInner {
            config: props.config,
            variant: props.variant,
            position: props.position,
            theme: props.theme,
            logo: props.logo,
            cta: props.cta,
            show_theme_switcher: props.show_theme_switcher,
            mobile_full_screen: props.mobile_full_screen,
            transparent: props.transparent,
            glass_morphism: props.glass_morphism,
            class: props.class,
        }
    }
}

#[component]
fn NavBarInner(props: NavProps) -> Element {
    let mut state = use_signal(NavState::default);

    // Dropdown panels are absolutely positioned; hold them back until the
    // first paint has committed so their geometry is stable.
    let mut mounted = use_signal(|| false);
    use_effect(move || mounted.set(true));

    // Scroll-lock follows (mobile drawer open && full-screen drawer); the
    // drop hook releases it on every unmount path.
    let mobile_full_screen = props.mobile_full_screen;
    let lock = use_hook(|| Rc::new(RefCell::new(ScrollLock::new())));
    use_effect({
        let lock = lock.clone();
        move || {
            lock.borrow_mut()
                .set(state.read().mobile_open() && mobile_full_screen)
        }
    });
    use_drop({
        let lock = lock.clone();
        move || lock.borrow_mut().set(false)
    });

    let is_dark = match props.theme {
        ThemePref::Light => false,
        ThemePref::Dark => true,
        ThemePref::Auto => theme::resolved_dark(*theme::THEME_SIGNAL.read()),
    };

    // Recomputed every render; nothing may depend on bundle identity.
    let styles = style::resolve(
        props.variant,
        props.position,
        props.transparent,
        props.glass_morphism,
    );

    let mobile_container = if mobile_full_screen {
        format!("{} nav-mobile-fullscreen", styles.mobile_container)
    } else {
        styles.mobile_container.to_owned()
    };

    rsx! {
        div { class: "{styles.wrapper} {props.class}",
            header { class: "{styles.container}",
                div { class: "nav-inner",
                    Link { to: Route::Home {}, class: "nav-logo",
                        if props.logo.is_configured() {
                            img {
                                src: "{logo_asset(&props.logo, is_dark)}",
                                alt: "Logo",
                                width: "{props.logo.width}",
                                height: "{props.logo.height}",
                            }
                        } else {
                            span { class: "nav-logo-text", "Brightfold" }
                        }
                    }

                    div { class: "nav-desktop",
                        nav { class: "nav-items",
                            for (index, item) in props.config.items.iter().enumerate() {
                                DesktopNavItem {
                                    index,
                                    item: item.clone(),
                                    styles: styles.clone(),
                                    state,
                                    mounted,
                                }
                            }
                        }
                        div { class: "nav-actions",
                            if props.show_theme_switcher {
                                ThemeSwitcher {}
                            }
                            CtaButton { cta: props.cta.clone(), state }
                        }
                    }

                    div { class: "nav-mobile-controls",
                        if props.show_theme_switcher {
                            ThemeSwitcher {}
                        }
                        CtaButton { cta: props.cta.clone(), state }
                        button {
                            class: "nav-hamburger",
                            aria_label: "Toggle menu",
                            onclick: move |_| state.write().toggle_mobile(),
                            if state.read().mobile_open() {
                                {icons::close("nav-hamburger-icon")}
                            } else {
                                {icons::menu("nav-hamburger-icon")}
                            }
                        }
                    }
                }

                if state.read().mobile_open() {
                    div { class: "{mobile_container}",
                        div { class: "nav-mobile-items",
                            for (index, item) in props.config.items.iter().enumerate() {
                                MobileNavItem {
                                    index,
                                    item: item.clone(),
                                    styles: styles.clone(),
                                    state,
                                    mounted,
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct NavItemProps {
    index: usize,
    item: NavItem,
    styles: NavStyles,
    state: Signal<NavState>,
    mounted: Signal<bool>,
}

#[component]
fn DesktopNavItem(props: NavItemProps) -> Element {
    let mut state = props.state;
    let item = props.item;
    let styles = props.styles;
    let index = props.index;

    if item.disabled {
        return rsx! {
            span {
                class: "{styles.item_base} {styles.item_disabled}",
                aria_disabled: "true",
                "{item.name}"
            }
        };
    }

    if !item.children.is_empty() {
        let open = state.read().dropdown_open(index);
        let item_class = if item.is_active() {
            styles.item_active
        } else {
            styles.item_inactive
        };
        let chevron = if open {
            "nav-chevron nav-chevron-open"
        } else {
            "nav-chevron"
        };

        return rsx! {
            div { class: "nav-parent",
                button {
                    class: "{styles.item_base} {item_class}",
                    onclick: move |_| state.write().toggle_dropdown(index),
                    "{item.name}"
                    {icons::chevron_down(chevron)}
                }

                if open && *props.mounted.read() {
                    div { class: "nav-dropdown-anchor",
                        div { class: "{styles.dropdown_panel}",
                            for child in item.children.iter() {
                                DropdownRow {
                                    child: child.clone(),
                                    row_class: styles.dropdown_row,
                                    state,
                                }
                            }
                        }
                    }
                }
            }
        };
    }

    let item_class = if item.current {
        styles.item_active
    } else {
        styles.item_inactive
    };
    rsx! {
        Link {
            to: item.href.clone(),
            class: "{styles.item_base} {item_class}",
            onclick: move |_| state.write().close_menu(),
            "{item.name}"
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct DropdownRowProps {
    child: NavItem,
    row_class: &'static str,
    state: Signal<NavState>,
}

#[component]
fn DropdownRow(props: DropdownRowProps) -> Element {
    let mut state = props.state;
    let child = props.child;

    let row_state = if child.disabled {
        "nav-dropdown-row-disabled"
    } else if child.current {
        "nav-dropdown-row-current"
    } else {
        ""
    };

    rsx! {
        div { class: "{props.row_class} {row_state}",
            if let Some(icon) = child.icon {
                div { class: "nav-dropdown-glyph", {icon("nav-dropdown-icon")} }
            }
            div { class: "nav-dropdown-copy",
                p { class: "nav-dropdown-name", "{child.name}" }
                if let Some(description) = &child.description {
                    p { class: "nav-dropdown-description", "{description}" }
                }
            }
            if !child.disabled {
                // Invisible full-row overlay; the row stays one click target.
                Link {
                    to: child.href.clone(),
                    class: "nav-dropdown-overlay",
                    aria_label: "{child.name}",
                    onclick: move |_| state.write().follow_child(),
                }
            }
        }
    }
}

#[component]
fn MobileNavItem(props: NavItemProps) -> Element {
    let mut state = props.state;
    let item = props.item;
    let styles = props.styles;
    let index = props.index;

    if item.disabled {
        return rsx! {
            span {
                class: "{styles.mobile_item_base} {styles.item_disabled}",
                aria_disabled: "true",
                "{item.name}"
            }
        };
    }

    if !item.children.is_empty() {
        let open = state.read().dropdown_open(index);
        let item_class = if open {
            styles.item_active
        } else {
            styles.item_inactive
        };
        let chevron = if open {
            "nav-chevron nav-chevron-open"
        } else {
            "nav-chevron"
        };

        return rsx! {
            div { class: "nav-accordion",
                button {
                    class: "nav-accordion-toggle {item_class}",
                    onclick: move |_| state.write().toggle_dropdown(index),
                    "{item.name}"
                    {icons::chevron_down(chevron)}
                }
                if open {
                    div { class: "nav-accordion-children",
                        for child in item.children.iter() {
                            MobileChildLink { child: child.clone(), styles: styles.clone(), state }
                        }
                    }
                }
            }
        };
    }

    let item_class = if item.current {
        styles.item_active
    } else {
        styles.item_inactive
    };
    rsx! {
        Link {
            to: item.href.clone(),
            class: "{styles.mobile_item_base} {item_class}",
            onclick: move |_| state.write().close_menu(),
            "{item.name}"
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct MobileChildLinkProps {
    child: NavItem,
    styles: NavStyles,
    state: Signal<NavState>,
}

#[component]
fn MobileChildLink(props: MobileChildLinkProps) -> Element {
    let mut state = props.state;
    let child = props.child;
    let styles = props.styles;

    if child.disabled {
        return rsx! {
            span {
                class: "{styles.mobile_item_base} nav-accordion-child {styles.item_disabled}",
                aria_disabled: "true",
                "{child.name}"
            }
        };
    }

    let item_class = if child.current {
        styles.item_active
    } else {
        styles.item_inactive
    };
    rsx! {
        Link {
            to: child.href.clone(),
            class: "{styles.mobile_item_base} nav-accordion-child {item_class}",
            onclick: move |_| state.write().close_menu(),
            "{child.name}"
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct CtaButtonProps {
    cta: CtaConfig,
    state: Signal<NavState>,
}

#[component]
fn CtaButton(props: CtaButtonProps) -> Element {
    let mut state = props.state;
    let cta = props.cta;

    if !cta.show {
        return rsx! {};
    }

    let target = cta_target(&cta);
    let label = cta.text.unwrap_or_else(|| String::from("Contact Us"));

    rsx! {
        Link {
            to: target,
            class: "nav-cta",
            onclick: move |_| state.write().close_menu(),
            if cta.phone_number.is_some() {
                {icons::phone("nav-cta-icon")}
            }
            "{label}"
        }
    }
}
