//! Dioxus plumbing around the pure browser state machine.
//!
//! [`use_resource_browser`] owns the state and executes its effects:
//! spawning fetch tasks, cancelling superseded ones, and feeding
//! settlements back in tagged with the generation they belong to.

use dioxus::prelude::*;

use hub_client::HubClient;

use super::browser::{update, BrowserEffect, BrowserMsg, BrowserState};

/// Handle the browse page uses to read state and push messages.
#[derive(Clone, Copy)]
pub struct ResourceBrowser {
    state: Signal<BrowserState>,
    inflight: Signal<Option<Task>>,
    client: Signal<HubClient>,
}

impl ResourceBrowser {
    /// Snapshot of the current state; subscribes the caller to changes.
    pub fn current(&self) -> BrowserState {
        self.state.read().clone()
    }

    /// Run one message through the state machine and execute its effects.
    pub fn dispatch(mut self, msg: BrowserMsg) {
        let current = self.state.peek().clone();

        if let BrowserMsg::FetchResolved { generation, .. }
        | BrowserMsg::FetchRejected { generation, .. } = &msg
        {
            if *generation != current.generation() {
                tracing::debug!(
                    generation,
                    current = current.generation(),
                    "Discarding stale settlement"
                );
            }
        }

        let (next, effects) = update(current, msg);
        self.state.set(next);
        for effect in effects {
            self.run(effect);
        }
    }

    fn run(mut self, effect: BrowserEffect) {
        match effect {
            BrowserEffect::Fetch { generation, query } => {
                // Newest request wins: drop the superseded future before
                // spawning, so its settlement is never dispatched.
                if let Some(stale) = self.inflight.take() {
                    stale.cancel();
                    tracing::debug!(generation, "Cancelled superseded fetch");
                }

                tracing::debug!(generation, category = %query.category, "Fetching resources");
                let client = self.client.peek().clone();
                let task = spawn(async move {
                    match client.resources(&query).await {
                        Ok(items) => {
                            tracing::debug!(generation, count = items.len(), "Fetch resolved");
                            self.dispatch(BrowserMsg::FetchResolved { generation, items });
                        }
                        Err(err) => {
                            tracing::debug!(generation, error = %err, "Fetch rejected");
                            self.dispatch(BrowserMsg::FetchRejected {
                                generation,
                                message: err.to_string(),
                            });
                        }
                    }
                    self.inflight.set(None);
                });
                self.inflight.set(Some(task));
            }
        }
    }
}

/// Create the resource browser for this component tree and issue the
/// initial load.
pub fn use_resource_browser() -> ResourceBrowser {
    let client = use_context::<HubClient>();
    let client = use_signal(move || client.clone());
    let state = use_signal(BrowserState::new);
    let inflight = use_signal(|| None);
    let browser = ResourceBrowser {
        state,
        inflight,
        client,
    };

    // Initial load, with filters seeded from the page address
    use_effect(move || {
        let (query, tag) = initial_filters();
        browser.dispatch(BrowserMsg::Opened { query, tag });
    });

    browser
}

/// Filter seeds from the browser location, when there is one.
fn initial_filters() -> (String, String) {
    #[cfg(feature = "web")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(search) = window.location().search() {
                return parse_search_filters(&search);
            }
        }
    }
    (String::new(), String::new())
}

/// Pull `q` and `tag` out of a location search string like `?q=iris&tag=csv`.
#[cfg_attr(not(feature = "web"), allow(dead_code))]
fn parse_search_filters(search: &str) -> (String, String) {
    let mut query = String::new();
    let mut tag = String::new();
    for pair in search.trim_start_matches('?').split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        let decoded = urlencoding::decode(value).unwrap_or_default().to_string();
        match key {
            "q" => query = decoded,
            "tag" => tag = decoded,
            _ => {}
        }
    }
    (query, tag)
}
