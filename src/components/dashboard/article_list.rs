//! Filter tabs and the article list.

use leptos::prelude::*;
use leptos_icons::Icon;
use readboard_core::{ArticleSummary, Feed, FilterKind, Tag};

use crate::components::icons as ic;
use crate::config::SKELETON_ROWS;
use crate::core::NavigationController;

stylance::import_crate_style!(css, "src/components/dashboard/article_list.module.css");

/// One tab per filter. Switching filter leaves the reader alone.
#[component]
pub fn FilterTabs(ctl: NavigationController) -> impl IntoView {
    let active = Memo::new(move |_| ctl.nav.with(|s| s.filter));

    view! {
        <div class=css::tabs role="tablist">
            {FilterKind::ALL
                .iter()
                .map(|&filter| {
                    let is_active = move || active.get() == filter;
                    view! {
                        <button
                            role="tab"
                            class=move || {
                                if is_active() {
                                    format!("{} {}", css::tab, css::active)
                                } else {
                                    css::tab.to_string()
                                }
                            }
                            aria-selected=move || is_active().to_string()
                            on:click=move |_| ctl.nav.set_filter(filter)
                        >
                            {filter.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Feed and tag pickers over the loaded collections.
///
/// Tag options use the canonical id, so picking a tag also rewrites a legacy
/// name in the URL.
#[component]
pub fn ScopePicker(ctl: NavigationController) -> impl IntoView {
    let feeds = ctl.feeds;
    let tags = ctl.tags;
    let current_feed = Memo::new(move |_| ctl.nav.with(|s| s.feed_slug.clone()));
    let current_tag = Memo::new(move |_| ctl.selection.with(|s| s.tag.as_ref().map(|t| t.id.clone())));

    view! {
        <div class=css::pickers>
            <select
                class=css::picker
                aria-label="Feed"
                on:change=move |ev| ctl.nav.set_feed(event_target_value(&ev))
            >
                <option value="" selected=move || current_feed.with(String::is_empty)>
                    "All feeds"
                </option>
                {move || {
                    feeds
                        .get()
                        .unwrap_or_default()
                        .into_iter()
                        .map(|Feed { slug, title }| {
                            let is_current = slug.clone();
                            view! {
                                <option
                                    value=slug
                                    selected=move || current_feed.with(|c| *c == is_current)
                                >
                                    {title}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>
            <select
                class=css::picker
                aria-label="Tag"
                on:change=move |ev| ctl.nav.set_tag(Some(event_target_value(&ev)))
            >
                <option value="" selected=move || current_tag.with(Option::is_none)>
                    "All tags"
                </option>
                {move || {
                    tags.get()
                        .unwrap_or_default()
                        .into_iter()
                        .map(|Tag { id, name }| {
                            let is_current = id.clone();
                            view! {
                                <option
                                    value=id
                                    selected=move || {
                                        current_tag.with(|c| c.as_deref() == Some(is_current.as_str()))
                                    }
                                >
                                    {name}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>
        </div>
    }
}

/// Removable chips for the feed and tag the list is narrowed to.
///
/// Shown only for keys that resolved; an unknown key still filters the list
/// but has nothing to label it with.
#[component]
pub fn ActiveScope(ctl: NavigationController) -> impl IntoView {
    let selection = ctl.selection;

    view! {
        <div class=css::scope>
            {move || selection.with(|s| s.tag.as_ref().map(|tag| tag.name.clone())).map(|name| view! {
                <ScopeChip label=name on_clear=move || ctl.nav.set_tag(None::<String>) />
            })}
            {move || selection.with(|s| s.feed.as_ref().map(|feed| feed.title.clone())).map(|title| view! {
                <ScopeChip label=title on_clear=move || ctl.nav.set_feed("") />
            })}
        </div>
    }
}

#[component]
fn ScopeChip(label: String, on_clear: impl Fn() + 'static) -> impl IntoView {
    let aria = format!("Clear {}", label);
    view! {
        <span class=css::chip>
            {label}
            <button class=css::chipClear on:click=move |_| on_clear() aria-label=aria>
                <Icon icon=ic::CLOSE />
            </button>
        </span>
    }
}

/// Articles for the current filter, feed and tag.
#[component]
pub fn ArticleList(ctl: NavigationController) -> impl IntoView {
    let selected = Memo::new(move |_| ctl.nav.with(|s| s.selected_article_id.clone()));

    view! {
        // Transition keeps the current rows on screen while a refresh or a
        // filter change refetches; the skeleton is for the first load only.
        <Transition fallback=|| view! { <LoadingSkeleton /> }>
            {move || Suspend::new(async move {
                match ctl.articles.await {
                    Ok(articles) if articles.is_empty() => view! { <EmptyList /> }.into_any(),
                    Ok(articles) => view! {
                        <ul class=css::list>
                            {articles
                                .into_iter()
                                .map(|article| view! {
                                    <ArticleRow article=article selected=selected ctl=ctl />
                                })
                                .collect_view()}
                        </ul>
                    }
                    .into_any(),
                    Err(err) => view! {
                        <p class=css::error>{format!("Could not load articles: {}", err)}</p>
                    }
                    .into_any(),
                }
            })}
        </Transition>
    }
}

#[component]
fn ArticleRow(
    article: ArticleSummary,
    selected: Memo<Option<String>>,
    ctl: NavigationController,
) -> impl IntoView {
    let ArticleSummary {
        id,
        title,
        feed_title,
        published_at,
    } = article;

    let row_id = id.clone();
    let is_selected = move || selected.with(|s| s.as_deref() == Some(row_id.as_str()));
    let meta = [feed_title, published_at]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" · ");

    view! {
        <li>
            <button
                class=move || {
                    if is_selected() {
                        format!("{} {}", css::row, css::selected)
                    } else {
                        css::row.to_string()
                    }
                }
                on:click=move |_| ctl.nav.set_selected_article(Some(id.clone()))
            >
                <span class=css::title>{title}</span>
                {(!meta.is_empty()).then(|| view! { <span class=css::meta>{meta}</span> })}
            </button>
        </li>
    }
}

#[component]
fn EmptyList() -> impl IntoView {
    view! {
        <div class=css::empty>
            <Icon icon=ic::INBOX />
            <p>"No articles here."</p>
        </div>
    }
}

/// Placeholder rows while the list loads.
#[component]
fn LoadingSkeleton() -> impl IntoView {
    view! {
        <ul class=css::list aria-busy="true" aria-label="Loading articles">
            {(0..SKELETON_ROWS)
                .map(|_| view! {
                    <li class=css::skeletonRow>
                        <span class=css::skeletonTitle />
                        <span class=css::skeletonMeta />
                    </li>
                })
                .collect_view()}
        </ul>
    }
}
