//! Root application module.
//!
//! Contains the App component, the [`AppContext`] shared with every page,
//! and the path-based page switch.

use leptos::prelude::*;
use readboard_core::DashboardConfig;

use crate::components::{DashboardPage, LandingPage};
use crate::config::dashboard_config;
use crate::core::{NavigationContext, QueryClient};
use crate::utils::dom;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide context, provided at the root.
///
/// This struct is `Copy` because every field is an arena handle.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// URL-backed navigation state.
    pub nav: NavigationContext,

    /// Feed API client and query bookkeeping.
    pub client: QueryClient,

    /// Configuration loaded at startup.
    pub config: StoredValue<DashboardConfig>,
}

impl AppContext {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            nav: NavigationContext::new(config.navigation.history),
            client: QueryClient::new(config.api.clone()),
            config: StoredValue::new(config),
        }
    }
}

// ============================================================================
// Pages
// ============================================================================

/// Top-level page, chosen by path. Query state never affects this.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Landing,
}

impl Page {
    pub fn from_pathname(pathname: &str) -> Self {
        match pathname {
            "" | "/" => Self::Dashboard,
            _ => Self::Landing,
        }
    }
}

/// Root application component with error boundary.
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new(dashboard_config());
    provide_context(ctx);

    // Back/forward changes only the query; the page stays mounted.
    ctx.nav.listen_history();

    let page = Page::from_pathname(&dom::location_pathname());

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #0b0c0f;
                    color: #e6e6e6;
                    font-family: system-ui, sans-serif;
                ">
                    <h1 style="color: #ff6b6b; margin-bottom: 1rem;">
                        "Something went wrong"
                    </h1>
                    <ul style="color: #a0a0a0;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                        style="
                            background: #4a90e2;
                            color: white;
                            border: none;
                            padding: 0.75rem 2rem;
                            border-radius: 4px;
                            cursor: pointer;
                        "
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            {match page {
                Page::Dashboard => view! { <DashboardPage /> }.into_any(),
                Page::Landing => view! { <LandingPage /> }.into_any(),
            }}
        </ErrorBoundary>
    }
}
