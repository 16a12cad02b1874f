//! Theme preference, resolution, and the header switcher button.
//!
//! The preference persists in local storage and is applied to the document
//! as a `data-theme` attribute; `Auto` defers to the OS color scheme.

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use crate::common::storage::{get_local_storage, set_local_storage};

const THEME_STORAGE_KEY: &str = "theme";

pub static THEME_SIGNAL: GlobalSignal<ThemePref> =
    Signal::global(|| get_local_storage(THEME_STORAGE_KEY).unwrap_or_default());

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum ThemePref {
    Light,
    Dark,
    #[default]
    Auto,
}

impl ThemePref {
    pub fn next(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Auto,
            Self::Auto => Self::Light,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::Auto => "Auto",
        }
    }
}

pub fn resolved_dark(pref: ThemePref) -> bool {
    match pref {
        ThemePref::Light => false,
        ThemePref::Dark => true,
        ThemePref::Auto => system_prefers_dark(),
    }
}

#[cfg(target_arch = "wasm32")]
fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media("(prefers-color-scheme: dark)").ok())
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false)
}

#[cfg(not(target_arch = "wasm32"))]
fn system_prefers_dark() -> bool {
    false
}

#[cfg(target_arch = "wasm32")]
pub fn apply_document_theme(is_dark: bool) {
    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element());

    if let Some(root) = root {
        let value = if is_dark { "dark" } else { "light" };
        if let Err(err) = root.set_attribute("data-theme", value) {
            gloo_console::error!(format!("failed to set document theme: {err:?}"));
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn apply_document_theme(_is_dark: bool) {}

/// Cycles light, dark, auto.  The document attribute is applied by the
/// app-level effect watching [`THEME_SIGNAL`].
#[component]
pub fn ThemeSwitcher() -> Element {
    let pref = *THEME_SIGNAL.read();

    rsx! {
        button {
            class: "theme-switcher",
            aria_label: "Switch theme",
            onclick: move |_| {
                let next = THEME_SIGNAL.read().next();
                *THEME_SIGNAL.write() = next;
                set_local_storage(THEME_STORAGE_KEY, next);
            },
            "{pref.label()}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preference_cycle() {
        assert_eq!(ThemePref::Light.next(), ThemePref::Dark);
        assert_eq!(ThemePref::Dark.next(), ThemePref::Auto);
        assert_eq!(ThemePref::Auto.next(), ThemePref::Light);
    }

    #[test]
    fn explicit_preferences_resolve_directly() {
        assert!(!resolved_dark(ThemePref::Light));
        assert!(resolved_dark(ThemePref::Dark));
    }

    #[test]
    fn preference_round_trips_through_serde() {
        let json = serde_json::to_string(&ThemePref::Dark).unwrap();
        let back: ThemePref = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ThemePref::Dark);
    }
}
