//! Landing page: hero, feature highlights and the contribution guide

use dioxus::prelude::*;

use hub_client::{Category, HubClient};

use crate::routes::Route;

const SNIPPET_EXAMPLE: &str = r#"{
  "title": "Quick sort in JS",
  "description": "A compact, readable quicksort.",
  "language": "javascript",
  "code": "function q(a){if(a.length<2)return a;const p=a[0];return [...q(a.slice(1).filter(x=>x<=p)),p,...q(a.slice(1).filter(x=>x>p))]}"
}"#;

/// Marketing landing page
#[component]
pub fn Landing() -> Element {
    let client = use_context::<HubClient>();
    let base_url = client.base_url().to_string();

    rsx! {
        // Hero
        section {
            class: "relative overflow-hidden bg-gradient-to-b from-indigo-50 via-sky-50 to-white",
            div {
                class: "mx-auto max-w-6xl px-6 py-20 grid md:grid-cols-2 gap-12 items-center",
                div {
                    h1 {
                        class: "text-4xl md:text-5xl font-extrabold tracking-tight text-gray-900",
                        "Share and discover datasets, tools and code snippets."
                    }
                    p {
                        class: "mt-4 text-lg text-gray-700",
                        "An open platform for collaboration. Find useful resources, share your projects and help free software grow."
                    }
                    div {
                        class: "mt-8 flex flex-wrap gap-3",
                        Link {
                            to: Route::Browse {},
                            class: "inline-flex items-center rounded-lg bg-indigo-600 px-5 py-3 text-white font-medium shadow hover:bg-indigo-700",
                            "Explore resources"
                        }
                        a {
                            href: "#contribute",
                            class: "inline-flex items-center rounded-lg border border-gray-300 bg-white px-5 py-3 text-gray-900 font-medium hover:bg-gray-50",
                            "Start contributing"
                        }
                    }
                    p { class: "mt-4 text-sm text-gray-500", "Backend: {base_url}" }
                }
                div {
                    class: "rounded-2xl border border-gray-200 bg-white p-4 shadow-sm",
                    div {
                        class: "rounded-xl bg-gray-900 text-gray-100 p-4 text-sm font-mono",
                        div {
                            class: "text-xs text-gray-400",
                            "$ curl -X POST {base_url}/api/snippets"
                        }
                        pre { class: "mt-2 whitespace-pre-wrap", "{SNIPPET_EXAMPLE}" }
                    }
                }
            }
        }

        // Highlights strip
        section {
            class: "py-10 border-t border-black/5 bg-white",
            div {
                class: "mx-auto max-w-6xl px-6 grid grid-cols-2 md:grid-cols-4 gap-6 text-center",
                StatCard { title: "Open", caption: "Free code and data" }
                StatCard { title: "Collaborative", caption: "Community first" }
                StatCard { title: "Durable", caption: "Real database" }
                StatCard { title: "Scalable", caption: "Modern API" }
            }
        }

        // Features
        section {
            id: "features",
            class: "py-16 bg-gradient-to-b from-white to-slate-50",
            div {
                class: "mx-auto max-w-6xl px-6 grid md:grid-cols-3 gap-8",
                FeatureCard {
                    title: "Explore by category",
                    body: "Filter by tag, search by text and switch between datasets, tools and code.",
                }
                FeatureCard {
                    title: "Contribute with a POST",
                    body: "Publish new resources through the API, with schema validation on the backend.",
                }
                FeatureCard {
                    title: "Code in focus",
                    body: "Preview snippets with their language and original formatting.",
                }
            }
        }

        // Contribute
        section {
            id: "contribute",
            class: "py-16 border-t border-black/5",
            div {
                class: "mx-auto max-w-4xl px-6",
                h2 { class: "text-2xl font-bold text-gray-900", "How to contribute" }
                p {
                    class: "mt-2 text-gray-700",
                    "Send a JSON body to one of these endpoints. Submissions are validated against a schema and stored durably."
                }
                div {
                    class: "mt-6 grid md:grid-cols-3 gap-4",
                    for category in Category::variants() {
                        div {
                            key: "{category}",
                            class: "rounded-lg border border-gray-200 bg-white p-4",
                            p { class: "text-sm font-semibold text-gray-900", "{category.label()}" }
                            code {
                                class: "mt-2 block text-xs bg-gray-900 text-gray-100 rounded p-2",
                                "POST {base_url}/api/{category}"
                            }
                        }
                    }
                }
                p {
                    class: "mt-6 text-sm text-gray-600",
                    "Schemas live at "
                    span { class: "font-mono", "{base_url}/schema" }
                    "."
                }
                div {
                    class: "mt-8",
                    Link {
                        to: Route::Browse {},
                        class: "inline-flex items-center rounded-lg bg-indigo-600 px-5 py-3 text-white font-medium hover:bg-indigo-700",
                        "Go to the app"
                    }
                }
            }
        }

        // Footer
        footer {
            class: "border-t border-black/5 bg-white",
            div {
                class: "mx-auto max-w-6xl px-6 py-8 text-sm text-gray-600 flex flex-col md:flex-row items-center justify-between gap-4",
                p { "Built for the open source community." }
                div {
                    class: "flex items-center gap-4",
                    Link { to: Route::Browse {}, class: "text-gray-700 hover:text-gray-900", "Explore" }
                    a { href: "#contribute", class: "text-gray-700 hover:text-gray-900", "Contribute" }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct StatCardProps {
    title: &'static str,
    caption: &'static str,
}

#[component]
fn StatCard(props: StatCardProps) -> Element {
    rsx! {
        div {
            class: "p-4 rounded-lg bg-gray-50",
            p { class: "text-2xl font-bold text-gray-900", "{props.title}" }
            p { class: "text-xs text-gray-600", "{props.caption}" }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct FeatureCardProps {
    title: &'static str,
    body: &'static str,
}

#[component]
fn FeatureCard(props: FeatureCardProps) -> Element {
    rsx! {
        div {
            class: "rounded-xl border border-gray-200 bg-white p-6 shadow-sm",
            h3 { class: "text-lg font-semibold text-gray-900", "{props.title}" }
            p { class: "mt-2 text-sm text-gray-600", "{props.body}" }
        }
    }
}
