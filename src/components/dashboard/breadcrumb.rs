//! Breadcrumb bar for the current view.

use leptos::ev;
use leptos::prelude::*;
use leptos_icons::Icon;
use readboard_core::{BreadcrumbTrail, Crumb, NavigationState};

use crate::components::icons as ic;
use crate::core::NavigationContext;

stylance::import_crate_style!(css, "src/components/dashboard/breadcrumb.module.css");

/// Plain left clicks stay in the app; modified clicks open a new tab as usual.
fn is_plain_click(ev: &ev::MouseEvent) -> bool {
    ev.button() == 0 && !(ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.alt_key())
}

#[component]
pub fn Breadcrumb(trail: Memo<BreadcrumbTrail>, nav: NavigationContext) -> impl IntoView {
    view! {
        <nav class=css::breadcrumb aria-label="Breadcrumb">
            <ol class=css::list>
                {move || {
                    trail
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(i, crumb)| view! { <CrumbItem crumb=crumb first={i == 0} nav=nav /> })
                        .collect_view()
                }}
            </ol>
        </nav>
    }
}

#[component]
fn CrumbItem(crumb: Crumb, first: bool, nav: NavigationContext) -> impl IntoView {
    let Crumb { label, href } = crumb;

    let separator = (!first).then(|| {
        view! {
            <span class=css::separator aria-hidden="true">
                <Icon icon=ic::CHEVRON_RIGHT />
            </span>
        }
    });

    let body = match href {
        Some(href) => {
            let target = NavigationState::from_href(&href);
            view! {
                <a
                    class=css::link
                    href=href
                    on:click=move |ev: ev::MouseEvent| {
                        if is_plain_click(&ev) {
                            ev.prevent_default();
                            nav.navigate(&target);
                        }
                    }
                >
                    {label}
                </a>
            }
            .into_any()
        }
        None => view! { <span class=css::current aria-current="page">{label}</span> }.into_any(),
    };

    view! {
        <li class=css::item>
            {separator}
            {body}
        </li>
    }
}
