use dioxus::prelude::*;
use gloo_timers::callback::Timeout;

#[derive(Clone, PartialEq, Props)]
pub struct RevealProps {
    /// Stagger offset before the section fades in.
    #[props(default)]
    delay_ms: u32,
    children: Element,
}

/// Fade-and-rise wrapper for page sections.  The visible class lands one
/// timer tick after first paint so the CSS transition actually runs.
#[component]
pub fn Reveal(props: RevealProps) -> Element {
    let mut shown = use_signal(|| false);
    let delay_ms = props.delay_ms;

    use_effect(move || {
        Timeout::new(delay_ms, move || shown.set(true)).forget();
    });

    rsx! {
        div {
            class: if shown() { "reveal reveal-visible" } else { "reveal" },
            {props.children}
        }
    }
}
