//! Reader overlay: inline side panel on wide viewports, bottom sheet on
//! narrow ones.
//!
//! The overlay holds no open/closed state of its own. It renders while the
//! URL selects an article and every way of closing it (close button,
//! backdrop, Escape) clears `article` through the navigation context.

use leptos::ev;
use leptos::prelude::*;
use leptos_icons::Icon;
use readboard_core::overlay::{self, OverlayTransition};
use readboard_core::{Article, OverlayState, ReaderLayout};

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{LIST_FOCUS_SELECTOR, READER_TITLE};
use crate::core::NavigationController;
use crate::utils::{dom, log, sanitize_article_html};

stylance::import_crate_style!(css, "src/components/dashboard/reader.module.css");
stylance::import_crate_style!(md_css, "src/components/dashboard/article.module.css");

#[component]
pub fn ReaderOverlay(ctl: NavigationController) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let overlay = ctl.overlay;

    // Forward the widget's open-state changes; only closing writes.
    let on_open_change = move |open: bool| {
        if let Some(patch) = overlay::on_open_change(open) {
            ctl.nav.commit(&patch);
        }
    };

    Effect::new(move |prev: Option<OverlayState>| {
        let next = overlay.get();
        if let Some(prev) = prev {
            match OverlayTransition::between(prev, next) {
                Some(OverlayTransition::Closed) => {
                    dom::focus_element(LIST_FOCUS_SELECTOR);
                }
                Some(OverlayTransition::Opened(layout)) => {
                    log::debug(&format!("reader: opened ({})", layout.side()));
                }
                Some(OverlayTransition::Relayout(layout)) => {
                    log::debug(&format!("reader: moved to {}", layout.side()));
                }
                None => {}
            }
        }
        next
    });

    let escape = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && overlay.get_untracked().is_open() {
            ev.prevent_default();
            on_open_change(false);
        }
    });
    on_cleanup(move || escape.remove());

    let layout = Memo::new(move |_| overlay.get().layout().unwrap_or(ReaderLayout::Inline));
    let panel_class = move || match layout.get() {
        ReaderLayout::Inline => format!("{} {}", css::panel, css::inline),
        ReaderLayout::Sheet => format!("{} {}", css::panel, css::sheet),
    };
    let panel_style = move || ctx.config.with_value(|c| layout.get().panel_style(&c.layout));

    view! {
        <Show when=move || overlay.get().is_open()>
            <div class=css::backdrop on:click=move |_| ctl.close_overlay() />
            <aside
                class=panel_class
                style=panel_style
                role="dialog"
                aria-modal="true"
                aria-label=READER_TITLE
                data-side=move || layout.get().side()
            >
                <header class=css::header>
                    <span class=css::title>{READER_TITLE}</span>
                    <button
                        class=css::closeButton
                        on:click=move |_| on_open_change(false)
                        title="Close reader (Esc)"
                        aria-label="Close reader"
                    >
                        <Icon icon=ic::CLOSE />
                    </button>
                </header>
                <div class=css::content>
                    <ArticleReader ctl=ctl />
                </div>
            </aside>
        </Show>
    }
}

/// Content of the article selected in the URL.
#[component]
fn ArticleReader(ctl: NavigationController) -> impl IntoView {
    view! {
        <Suspense fallback=|| view! { <p class=css::status>"Loading article..."</p> }>
            {move || Suspend::new(async move {
                match ctl.article.await {
                    Some(Ok(article)) => view! { <ArticleBody article=article /> }.into_any(),
                    Some(Err(err)) => view! {
                        <p class=css::error>{format!("Could not load article: {}", err)}</p>
                    }
                    .into_any(),
                    None => ().into_any(),
                }
            })}
        </Suspense>
    }
}

#[component]
fn ArticleBody(article: Article) -> impl IntoView {
    let Article {
        title,
        link,
        content,
        ..
    } = article;
    let html = sanitize_article_html(&content);

    view! {
        <article class=css::article>
            <h1 class=css::articleTitle>{title}</h1>
            {link.map(|href| view! {
                <a
                    class=css::source
                    href=href
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    <Icon icon=ic::EXTERNAL_LINK />
                    "Open original"
                </a>
            })}
            <div class=md_css::markdown inner_html=html />
        </article>
    }
}
