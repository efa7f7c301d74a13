//! Resource card component

use dioxus::prelude::*;

use hub_client::{Category, Resource};
use url::Url;

/// Props for ResourceCard
#[derive(Props, Clone, PartialEq)]
pub struct ResourceCardProps {
    pub category: Category,
    pub resource: Resource,
}

/// Resource card displaying a single record
#[component]
pub fn ResourceCard(props: ResourceCardProps) -> Element {
    let resource = &props.resource;
    let links = resource_links(resource);

    rsx! {
        div {
            class: "rounded-xl border border-gray-200 bg-white p-5 hover:shadow-lg transition-all duration-200 flex flex-col h-full",

            // Header: name + language badge for snippets
            div {
                class: "flex items-start justify-between gap-2 mb-1",
                h3 {
                    class: "text-lg font-semibold text-gray-900 line-clamp-2",
                    "{resource.display_name()}"
                }
                if props.category == Category::Snippets {
                    if let Some(language) = &resource.language {
                        span {
                            class: "shrink-0 px-2 py-0.5 rounded-full text-xs font-medium bg-indigo-100 text-indigo-700",
                            "{language}"
                        }
                    }
                }
            }

            // Description
            if let Some(description) = &resource.description {
                p {
                    class: "text-gray-700 text-sm mb-3 line-clamp-3",
                    "{description}"
                }
            }

            // Tags
            if let Some(tags) = &resource.tags {
                div {
                    class: "flex flex-wrap gap-1.5 mb-3",
                    for tag in tags {
                        span {
                            key: "{tag}",
                            class: "inline-flex items-center bg-gray-100 text-gray-600 px-2 py-0.5 rounded text-xs",
                            "{tag}"
                        }
                    }
                }
            }

            // External links: shortened text, untouched target
            if !links.is_empty() {
                div {
                    class: "flex flex-col gap-1 mb-3 text-sm",
                    for link in &links {
                        a {
                            key: "{link.label}",
                            href: "{link.href}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            class: "text-indigo-600 hover:text-indigo-800 hover:underline break-all",
                            "{link.label}: {format_url(&link.href)}"
                        }
                    }
                }
            }

            // Snippet body, collapsed by default
            if props.category == Category::Snippets {
                if let Some(code) = &resource.code {
                    details {
                        class: "mt-auto",
                        summary {
                            class: "cursor-pointer text-sm text-gray-600 hover:text-gray-900 select-none",
                            "View code"
                        }
                        pre {
                            class: "mt-2 rounded-lg bg-gray-900 text-gray-100 p-3 text-xs overflow-x-auto whitespace-pre-wrap",
                            "{code}"
                        }
                    }
                }
            }
        }
    }
}

/// Skeleton loader for resource cards
#[component]
pub fn ResourceCardSkeleton() -> Element {
    rsx! {
        div {
            class: "rounded-xl border border-gray-200 bg-white p-5 animate-pulse",
            div { class: "h-6 w-3/4 bg-gray-200 rounded mb-3" }
            div {
                class: "space-y-2 mb-4",
                div { class: "h-4 w-full bg-gray-200 rounded" }
                div { class: "h-4 w-5/6 bg-gray-200 rounded" }
            }
            div {
                class: "flex gap-2",
                div { class: "h-5 w-16 bg-gray-200 rounded" }
                div { class: "h-5 w-24 bg-gray-200 rounded" }
            }
        }
    }
}

/// A labeled external link on a card.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceLink {
    pub label: &'static str,
    pub href: String,
}

/// Collect the external links a record carries, in display order.
pub fn resource_links(resource: &Resource) -> Vec<ResourceLink> {
    [
        ("Dataset", resource.url.as_deref()),
        ("Repo", resource.repo_url.as_deref()),
        ("Site", resource.homepage_url.as_deref()),
    ]
    .into_iter()
    .filter_map(|(label, href)| match href {
        Some(href) if !href.is_empty() => Some(ResourceLink {
            label,
            href: href.to_string(),
        }),
        _ => None,
    })
    .collect()
}

/// Shorten an address for display: host (with any explicit port) plus path,
/// dropping scheme, query and fragment. Hostless schemes like `mailto:`
/// keep only their path; anything that does not parse is shown as stored.
pub fn format_url(raw: &str) -> String {
    match Url::parse(raw) {
        Ok(parsed) => match parsed.host_str() {
            Some(host) => match parsed.port() {
                Some(port) => format!("{host}:{port}{}", parsed.path()),
                None => format!("{host}{}", parsed.path()),
            },
            None => parsed.path().to_string(),
        },
        Err(_) => raw.to_string(),
    }
}
