//! Dashboard page.

use leptos::prelude::*;

use super::{ActiveScope, ArticleList, Breadcrumb, FilterTabs, ReaderOverlay, ScopePicker};
use crate::app::AppContext;
use crate::core::{use_auto_refresh, use_navigation_controller};

stylance::import_crate_style!(css, "src/components/dashboard/dashboard.module.css");

/// Header with breadcrumb, filter tabs, the article list and the reader.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let ctl = use_navigation_controller();

    let policy = ctx.config.with_value(|c| c.refresh.clone());
    use_auto_refresh(ctl.client, policy);

    view! {
        <div class=css::dashboard>
            <header class=css::header>
                <Breadcrumb trail=ctl.breadcrumb nav=ctl.nav />
            </header>
            <FilterTabs ctl=ctl />
            <ScopePicker ctl=ctl />
            <ActiveScope ctl=ctl />
            <main class=css::main tabindex="-1">
                <ArticleList ctl=ctl />
            </main>
            <ReaderOverlay ctl=ctl />
        </div>
    }
}
