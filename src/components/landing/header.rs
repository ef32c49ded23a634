//! Landing page header.

use leptos::ev;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::config::{APP_NAME, SCROLL_THRESHOLD_PX};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/landing/header.module.css");

/// Header compacts once the page has scrolled past the threshold.
fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLL_THRESHOLD_PX
}

#[component]
pub fn LandingHeader() -> impl IntoView {
    let scrolled = RwSignal::new(is_scrolled(dom::scroll_y()));

    let handle = window_event_listener(ev::scroll, move |_| {
        let next = is_scrolled(dom::scroll_y());
        if scrolled.get_untracked() != next {
            scrolled.set(next);
        }
    });
    on_cleanup(move || handle.remove());

    view! {
        <header class=move || {
            if scrolled.get() {
                format!("{} {}", css::header, css::compact)
            } else {
                css::header.to_string()
            }
        }>
            <a class=css::brand href="/">
                <Icon icon=ic::HOME />
                <span>{APP_NAME}</span>
            </a>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_scrolled_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
        assert!(is_scrolled(400.0));
    }
}
