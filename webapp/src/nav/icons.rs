//! Inline SVG glyphs used by the navigation bar and its configuration.
//!
//! An icon is any `fn(class) -> Element`, so items stay decoupled from a
//! particular icon set; these are the stroke glyphs the site ships with.

use dioxus::prelude::*;

/// Render capability for an optional item glyph: given a size/placement
/// class, produce the visual element.
pub type IconRender = fn(&'static str) -> Element;

fn stroke_icon(class: &'static str, paths: &'static [&'static str]) -> Element {
    rsx! {
        svg {
            class,
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            for d in paths.iter() {
                path { d: *d }
            }
        }
    }
}

pub fn chevron_down(class: &'static str) -> Element {
    stroke_icon(class, &["M6 9l6 6 6-6"])
}

pub fn menu(class: &'static str) -> Element {
    stroke_icon(class, &["M4 6h16", "M4 12h16", "M4 18h16"])
}

pub fn close(class: &'static str) -> Element {
    stroke_icon(class, &["M18 6L6 18", "M6 6l12 12"])
}

pub fn phone(class: &'static str) -> Element {
    stroke_icon(
        class,
        &["M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72c.13.96.36 1.9.7 2.81a2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45c.91.34 1.85.57 2.81.7A2 2 0 0 1 22 16.92z"],
    )
}

pub fn house(class: &'static str) -> Element {
    stroke_icon(class, &["M3 9l9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z", "M9 22V12h6v10"])
}

pub fn info(class: &'static str) -> Element {
    stroke_icon(
        class,
        &["M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20z", "M12 16v-4", "M12 8h.01"],
    )
}

pub fn file(class: &'static str) -> Element {
    stroke_icon(
        class,
        &["M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z", "M14 2v6h6"],
    )
}

pub fn calendar(class: &'static str) -> Element {
    stroke_icon(
        class,
        &[
            "M8 2v4",
            "M16 2v4",
            "M3 6a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z",
            "M3 10h18",
        ],
    )
}
