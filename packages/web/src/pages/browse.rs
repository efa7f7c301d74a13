//! Browse page: category tabs, filters and the resource grid

use dioxus::prelude::*;

use hub_client::{Category, HubClient};

use crate::components::{LoadingDots, ResourceCard, ResourceCardSkeleton};
use crate::state::{use_resource_browser, BrowserMsg};

/// Browse page listing the resources of the active category
#[component]
pub fn Browse() -> Element {
    let browser = use_resource_browser();
    let snapshot = browser.current();

    let client = use_context::<HubClient>();
    let base_url = client.base_url().to_string();

    rsx! {
        main {
            class: "mx-auto max-w-6xl px-6 py-8",

            // Category tabs
            nav {
                class: "inline-flex gap-1 bg-gray-100 p-1 rounded-lg mb-6",
                for category in Category::variants() {
                    {
                        let category = *category;
                        let is_active = snapshot.category() == category;
                        rsx! {
                            button {
                                key: "{category}",
                                class: if is_active {
                                    "px-3 py-1.5 text-sm rounded-md transition-colors bg-white shadow text-gray-900"
                                } else {
                                    "px-3 py-1.5 text-sm rounded-md transition-colors text-gray-600 hover:text-gray-900"
                                },
                                onclick: move |_| browser.dispatch(BrowserMsg::CategorySelected(category)),
                                "{category.label()}"
                            }
                        }
                    }
                }
            }

            // Filters
            div {
                class: "mb-6 flex flex-wrap items-center gap-3",
                input {
                    r#type: "text",
                    value: "{snapshot.query()}",
                    oninput: move |e| browser.dispatch(BrowserMsg::QueryChanged(e.value())),
                    placeholder: "Search {snapshot.category()}...",
                    class: "flex-1 min-w-48 rounded-lg border border-gray-300 bg-white px-3 py-2 text-sm shadow-sm focus:outline-none focus:ring-2 focus:ring-indigo-500",
                }
                input {
                    r#type: "text",
                    value: "{snapshot.tag()}",
                    oninput: move |e| browser.dispatch(BrowserMsg::TagChanged(e.value())),
                    placeholder: "Filter by tag",
                    class: "w-44 rounded-lg border border-gray-300 bg-white px-3 py-2 text-sm shadow-sm focus:outline-none focus:ring-2 focus:ring-indigo-500",
                }
            }

            if snapshot.is_loading() {
                div {
                    class: "mb-4 flex items-center gap-3 text-sm text-gray-500",
                    LoadingDots {}
                    "Loading {snapshot.category()}..."
                }
                div {
                    class: "grid gap-3 sm:grid-cols-2 md:grid-cols-3",
                    for _ in 0..6 {
                        ResourceCardSkeleton {}
                    }
                }
            } else if let Some(message) = snapshot.error() {
                div {
                    class: "rounded-lg border border-red-200 bg-red-50 p-6 text-center",
                    p { class: "text-red-600 font-medium mb-1", "Could not load resources" }
                    p { class: "text-sm text-red-500", "{message}" }
                    p {
                        class: "mt-3 text-sm text-gray-500",
                        "Pick the category again to retry."
                    }
                }
            } else if snapshot.items().is_empty() {
                div {
                    class: "py-16 text-center text-gray-600",
                    if snapshot.has_filters() {
                        p { class: "mb-4", "Nothing matches the current filters." }
                        button {
                            class: "px-4 py-2 bg-gray-100 text-gray-700 rounded-lg hover:bg-gray-200 transition-colors",
                            onclick: move |_| browser.dispatch(BrowserMsg::FiltersCleared),
                            "Clear Filters"
                        }
                    } else {
                        p {
                            "Nothing here yet. Be the first to share a resource using the API endpoints."
                        }
                    }
                }
            } else {
                p {
                    class: "mb-4 text-sm text-gray-500",
                    "Showing "
                    span { class: "font-medium text-gray-900", "{snapshot.items().len()}" }
                    " result"
                    if snapshot.items().len() != 1 { "s" }
                    if !snapshot.query().is_empty() {
                        " for \""
                        span { class: "font-medium text-gray-900", "{snapshot.query()}" }
                        "\""
                    }
                }
                div {
                    class: "grid gap-3 sm:grid-cols-2 md:grid-cols-3",
                    for resource in snapshot.items() {
                        ResourceCard {
                            key: "{resource.id}",
                            category: snapshot.category(),
                            resource: resource.clone(),
                        }
                    }
                }
            }

            // Contribute hint
            section {
                class: "mt-12 rounded-xl border border-gray-200 bg-white p-6 shadow-sm",
                h2 { class: "text-lg font-semibold text-gray-900", "How to contribute" }
                p {
                    class: "mt-2 text-sm text-gray-600",
                    "Use these endpoints to add new items:"
                }
                ul {
                    class: "mt-3 list-disc pl-5 text-sm text-gray-700 space-y-1",
                    for category in Category::variants() {
                        li { key: "{category}", "POST {base_url}/api/{category}" }
                    }
                }
                p {
                    class: "mt-3 text-sm text-gray-600",
                    "Each request should be a JSON body matching the schema. See the schema at {base_url}/schema"
                }
            }
        }

        footer {
            class: "border-t border-black/5 bg-white",
            div {
                class: "mx-auto max-w-6xl px-6 py-6 text-sm text-gray-500 flex flex-col sm:flex-row items-center justify-between gap-2",
                span { "Built for the open source community" }
                span { "Backend: {base_url}" }
            }
        }
    }
}
