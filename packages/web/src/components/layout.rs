//! Application shell: top navigation wrapped around every page

use dioxus::prelude::*;

use crate::routes::Route;

/// Layout component providing the site header and the routed page body
#[component]
pub fn AppShell() -> Element {
    rsx! {
        div {
            class: "min-h-screen bg-gray-50 text-gray-900",

            header {
                class: "sticky top-0 z-10 border-b border-black/5 bg-white/80 backdrop-blur",
                div {
                    class: "mx-auto max-w-6xl px-6 py-3 flex items-center justify-between",

                    // Brand
                    Link {
                        to: Route::Landing {},
                        class: "flex items-center gap-3",
                        div {
                            class: "h-9 w-9 rounded-xl bg-indigo-600 text-white flex items-center justify-center font-bold",
                            "OS"
                        }
                        div {
                            p { class: "font-semibold leading-tight", "OpenSource Hub" }
                            p {
                                class: "text-xs text-gray-500 leading-tight",
                                "Share datasets, tools and code"
                            }
                        }
                    }

                    // Nav links
                    nav {
                        class: "flex items-center gap-1",
                        NavLink { to: Route::Landing {}, label: "Home" }
                        NavLink { to: Route::Browse {}, label: "App" }
                    }
                }
            }

            // Routed page body
            Outlet::<Route> {}
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct NavLinkProps {
    to: Route,
    label: &'static str,
}

#[component]
fn NavLink(props: NavLinkProps) -> Element {
    let route = use_route::<Route>();
    let is_active = route == props.to;

    rsx! {
        Link {
            to: props.to.clone(),
            class: if is_active {
                "px-3 py-2 rounded-md text-sm font-medium bg-indigo-50 text-indigo-700"
            } else {
                "px-3 py-2 rounded-md text-sm font-medium text-gray-600 hover:bg-gray-100 hover:text-gray-900"
            },
            "{props.label}"
        }
    }
}
