//! Style resolution for the configurable navigation bar.
//!
//! A render picks one class bundle as a pure function of variant, position,
//! and the presentation flags.  The bundle is rebuilt every render; nothing
//! downstream may rely on identity of the resolved strings.

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum NavVariant {
    #[default]
    Standard,
    Glass,
    Solid,
}

impl NavVariant {
    /// Variant names arriving from configuration data; anything
    /// unrecognized falls back to the standard bundle.
    pub fn from_name(name: &str) -> Self {
        match name {
            "glass" => Self::Glass,
            "solid" => Self::Solid,
            _ => Self::Standard,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum NavPosition {
    #[default]
    Top,
    Left,
}

/// Resolved class bundle for one render of the bar.
#[derive(Clone, Debug, PartialEq)]
pub struct NavStyles {
    pub wrapper: &'static str,
    pub container: String,
    pub item_base: String,
    pub item_active: &'static str,
    pub item_inactive: &'static str,
    pub item_disabled: &'static str,
    pub dropdown_panel: &'static str,
    pub dropdown_row: &'static str,
    pub mobile_container: &'static str,
    pub mobile_item_base: &'static str,
}

pub fn resolve(
    variant: NavVariant,
    position: NavPosition,
    transparent: bool,
    glass_morphism: bool,
) -> NavStyles {
    // Step 1: shared base bundle.
    let mut styles = NavStyles {
        wrapper: "",
        container: String::new(),
        item_base: String::from("nav-item"),
        item_active: "",
        item_inactive: "",
        item_disabled: "nav-item-disabled",
        dropdown_panel: "nav-dropdown-panel",
        dropdown_row: "nav-dropdown-row",
        mobile_container: "",
        mobile_item_base: "nav-mobile-item",
    };

    // Step 2: variant overlay.
    match variant {
        NavVariant::Glass => {
            styles.container = if glass_morphism {
                String::from("nav-shell nav-shell-glass nav-shell-glass-morphic")
            } else {
                String::from("nav-shell nav-shell-glass")
            };
            styles.item_active = "nav-item-glass-active";
            styles.item_inactive = "nav-item-glass-inactive";
            styles.mobile_container = "nav-mobile nav-mobile-glass";
        }
        NavVariant::Solid => {
            styles.container = String::from("nav-shell nav-shell-solid");
            styles.item_active = "nav-item-solid-active";
            styles.item_inactive = "nav-item-solid-inactive";
            styles.mobile_container = "nav-mobile nav-mobile-solid";
        }
        NavVariant::Standard => {
            styles.container = if transparent {
                String::from("nav-shell nav-shell-transparent")
            } else {
                String::from("nav-shell nav-shell-standard")
            };
            styles.item_active = "nav-item-standard-active";
            styles.item_inactive = "nav-item-standard-inactive";
            styles.mobile_container = "nav-mobile nav-mobile-standard";
        }
    }

    // Step 3: position overlay.  Top bars carry a bottom-border accent on
    // items, left bars a left-border accent.
    match position {
        NavPosition::Top => {
            styles.wrapper = if variant == NavVariant::Glass {
                "nav-wrapper nav-wrapper-top nav-wrapper-floating"
            } else {
                "nav-wrapper nav-wrapper-top"
            };
            styles.item_base.push_str(" nav-item-underline");
        }
        NavPosition::Left => {
            styles.wrapper = "nav-wrapper nav-wrapper-left";
            styles.item_base.push_str(" nav-item-sidebar");
        }
    }

    styles
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_variant_falls_back_to_standard() {
        assert_eq!(NavVariant::from_name("glass"), NavVariant::Glass);
        assert_eq!(NavVariant::from_name("solid"), NavVariant::Solid);
        assert_eq!(NavVariant::from_name("frosted"), NavVariant::Standard);
        assert_eq!(NavVariant::from_name(""), NavVariant::Standard);

        let fallback = resolve(
            NavVariant::from_name("frosted"),
            NavPosition::Top,
            false,
            false,
        );
        let standard = resolve(NavVariant::Standard, NavPosition::Top, false, false);
        assert_eq!(fallback, standard);
    }

    #[test]
    fn position_selects_border_accent() {
        let top = resolve(NavVariant::Standard, NavPosition::Top, false, false);
        assert!(top.item_base.contains("nav-item-underline"));
        assert!(top.wrapper.contains("nav-wrapper-top"));

        let left = resolve(NavVariant::Standard, NavPosition::Left, false, false);
        assert!(left.item_base.contains("nav-item-sidebar"));
        assert!(left.wrapper.contains("nav-wrapper-left"));
    }

    #[test]
    fn flags_only_touch_their_variant() {
        let transparent = resolve(NavVariant::Standard, NavPosition::Top, true, false);
        assert!(transparent.container.contains("nav-shell-transparent"));

        // transparent has no effect on solid
        let solid = resolve(NavVariant::Solid, NavPosition::Top, true, false);
        assert!(solid.container.contains("nav-shell-solid"));

        let morphic = resolve(NavVariant::Glass, NavPosition::Top, false, true);
        assert!(morphic.container.contains("nav-shell-glass-morphic"));
    }

    #[test]
    fn resolution_is_deterministic() {
        let a = resolve(NavVariant::Glass, NavPosition::Left, false, true);
        let b = resolve(NavVariant::Glass, NavPosition::Left, false, true);
        assert_eq!(a, b);
    }
}
