//! Pages outside the dashboard.

mod header;

use leptos::prelude::*;

pub use header::LandingHeader;

stylance::import_crate_style!(css, "src/components/landing/landing.module.css");

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <LandingHeader />
        <section class=css::hero>
            <h1 class=css::headline>"Your feeds, in one place."</h1>
            <a class=css::cta href="/">"Open dashboard"</a>
        </section>
    }
}
