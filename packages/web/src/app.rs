//! Root application component

use dioxus::prelude::*;

use hub_client::{BackendConfig, HubClient};

use crate::routes::Route;

/// Root application component
#[component]
pub fn App() -> Element {
    // One API client for the whole tree, configured once at startup
    use_context_provider(|| HubClient::new(BackendConfig::from_env()));

    rsx! {
        // Global styles
        document::Stylesheet { href: asset!("/assets/main.css") }

        Router::<Route> {}
    }
}
