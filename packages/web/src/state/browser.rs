//! Pure state machine for the resource browser.
//!
//! Every message goes through [`update`], which returns the next state and
//! the effects to execute. Each issued fetch gets a fresh generation number;
//! a settlement only applies while its generation is the one loading, so
//! responses from superseded requests can never overwrite newer state, no
//! matter the order they arrive in.

use hub_client::{Category, Resource, ResourceQuery};

/// Identifier for one fetch cycle.
pub type Generation = u64;

/// Messages fed into [`update`].
#[derive(Debug, Clone, PartialEq)]
pub enum BrowserMsg {
    /// View mounted, with filters seeded from the page address.
    Opened { query: String, tag: String },
    /// A category tab was picked. Re-selecting the active one refetches.
    CategorySelected(Category),
    /// Search input changed.
    QueryChanged(String),
    /// Tag filter input changed.
    TagChanged(String),
    /// Both filters dismissed from the empty state.
    FiltersCleared,
    /// A fetch settled successfully.
    FetchResolved {
        generation: Generation,
        items: Vec<Resource>,
    },
    /// A fetch settled with an error.
    FetchRejected {
        generation: Generation,
        message: String,
    },
}

/// Side effects requested by [`update`]; the caller executes them.
#[derive(Debug, Clone, PartialEq)]
pub enum BrowserEffect {
    /// Issue the request for `query`, superseding any in-flight fetch.
    Fetch {
        generation: Generation,
        query: ResourceQuery,
    },
}

/// Outcome of the current fetch cycle.
///
/// `Failure` carries no items, so an error is never rendered next to a
/// stale result list.
#[derive(Debug, Clone, PartialEq, Default)]
enum FetchState {
    #[default]
    Idle,
    Loading {
        generation: Generation,
    },
    Success {
        generation: Generation,
        items: Vec<Resource>,
    },
    Failure {
        generation: Generation,
        message: String,
    },
}

/// Resource browser state: the active selection plus the fetch lifecycle.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BrowserState {
    selection: ResourceQuery,
    generation: Generation,
    fetch: FetchState,
}

impl BrowserState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(&self) -> Category {
        self.selection.category
    }

    pub fn query(&self) -> &str {
        &self.selection.query
    }

    pub fn tag(&self) -> &str {
        &self.selection.tag
    }

    /// Whether any text filter is set.
    pub fn has_filters(&self) -> bool {
        self.selection.has_filters()
    }

    /// Generation of the most recently issued fetch.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.fetch, FetchState::Loading { .. })
    }

    /// Message of the current cycle's failure, if that is how it ended.
    pub fn error(&self) -> Option<&str> {
        match &self.fetch {
            FetchState::Failure { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Items of the latest settled fetch; empty while loading or failed.
    pub fn items(&self) -> &[Resource] {
        match &self.fetch {
            FetchState::Success { items, .. } => items,
            _ => &[],
        }
    }

    fn issue_fetch(&mut self) -> Vec<BrowserEffect> {
        self.generation += 1;
        self.fetch = FetchState::Loading {
            generation: self.generation,
        };
        vec![BrowserEffect::Fetch {
            generation: self.generation,
            query: self.selection.clone(),
        }]
    }
}

/// Apply one message to the state, returning the effects to run.
pub fn update(mut state: BrowserState, msg: BrowserMsg) -> (BrowserState, Vec<BrowserEffect>) {
    let effects = match msg {
        BrowserMsg::Opened { query, tag } => {
            state.selection.query = query;
            state.selection.tag = tag;
            state.issue_fetch()
        }
        BrowserMsg::CategorySelected(category) => {
            // Unconditional: picking the active tab again is the retry path
            state.selection.category = category;
            state.issue_fetch()
        }
        BrowserMsg::QueryChanged(query) => {
            if state.selection.query == query {
                Vec::new()
            } else {
                state.selection.query = query;
                state.issue_fetch()
            }
        }
        BrowserMsg::TagChanged(tag) => {
            if state.selection.tag == tag {
                Vec::new()
            } else {
                state.selection.tag = tag;
                state.issue_fetch()
            }
        }
        BrowserMsg::FiltersCleared => {
            if state.has_filters() {
                state.selection.query.clear();
                state.selection.tag.clear();
                state.issue_fetch()
            } else {
                Vec::new()
            }
        }
        BrowserMsg::FetchResolved { generation, items } => {
            if matches!(state.fetch, FetchState::Loading { generation: current } if current == generation)
            {
                state.fetch = FetchState::Success { generation, items };
            }
            Vec::new()
        }
        BrowserMsg::FetchRejected {
            generation,
            message,
        } => {
            if matches!(state.fetch, FetchState::Loading { generation: current } if current == generation)
            {
                state.fetch = FetchState::Failure {
                    generation,
                    message,
                };
            }
            Vec::new()
        }
    };

    (state, effects)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opened() -> (BrowserState, Vec<BrowserEffect>) {
        update(
            BrowserState::new(),
            BrowserMsg::Opened {
                query: String::new(),
                tag: String::new(),
            },
        )
    }

    fn resource(id: &str) -> Resource {
        Resource {
            id: id.to_string(),
            name: Some(format!("Resource {id}")),
            title: None,
            description: None,
            tags: None,
            url: None,
            repo_url: None,
            homepage_url: None,
            language: None,
            code: None,
        }
    }

    #[test]
    fn test_opened_starts_loading_and_fetches() {
        let (state, effects) = opened();

        assert!(state.is_loading());
        assert!(state.error().is_none());
        assert!(state.items().is_empty());
        assert_eq!(state.generation(), 1);
        assert_eq!(
            effects,
            vec![BrowserEffect::Fetch {
                generation: 1,
                query: ResourceQuery::new(Category::Datasets),
            }]
        );
    }

    #[test]
    fn test_opened_seeds_filters_into_the_request() {
        let (state, effects) = update(
            BrowserState::new(),
            BrowserMsg::Opened {
                query: "iris".to_string(),
                tag: "csv".to_string(),
            },
        );

        assert_eq!(state.query(), "iris");
        assert_eq!(state.tag(), "csv");
        assert_eq!(
            effects,
            vec![BrowserEffect::Fetch {
                generation: 1,
                query: ResourceQuery {
                    category: Category::Datasets,
                    query: "iris".to_string(),
                    tag: "csv".to_string(),
                },
            }]
        );
    }

    #[test]
    fn test_resolution_of_the_current_generation_applies() {
        let (state, _) = opened();
        let items = vec![resource("a"), resource("b")];

        let (state, effects) = update(
            state,
            BrowserMsg::FetchResolved {
                generation: 1,
                items: items.clone(),
            },
        );

        assert!(!state.is_loading());
        assert!(state.error().is_none());
        assert_eq!(state.items(), &items[..]);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_empty_resolution_is_not_an_error() {
        let (state, _) = opened();
        let (state, _) = update(
            state,
            BrowserMsg::FetchResolved {
                generation: 1,
                items: Vec::new(),
            },
        );

        assert!(!state.is_loading());
        assert!(state.error().is_none());
        assert!(state.items().is_empty());
    }

    #[test]
    fn test_rejection_replaces_previous_items() {
        let (state, _) = opened();
        let (state, _) = update(
            state,
            BrowserMsg::FetchResolved {
                generation: 1,
                items: vec![resource("a")],
            },
        );

        let (state, _) = update(state, BrowserMsg::CategorySelected(Category::Snippets));
        let (state, _) = update(
            state,
            BrowserMsg::FetchRejected {
                generation: 2,
                message: "Request failed: 500".to_string(),
            },
        );

        assert!(!state.is_loading());
        assert_eq!(state.error(), Some("Request failed: 500"));
        assert!(state.items().is_empty());
    }

    #[test]
    fn test_stale_resolution_is_discarded() {
        let (state, _) = opened();
        let (state, effects) = update(state, BrowserMsg::QueryChanged("iris".to_string()));
        assert_eq!(effects.len(), 1);

        // The superseded request settles after the newer one was issued
        let (state, _) = update(
            state,
            BrowserMsg::FetchResolved {
                generation: 1,
                items: vec![resource("stale")],
            },
        );
        assert!(state.is_loading(), "stale settlement must not end loading");
        assert!(state.items().is_empty());

        let (state, _) = update(
            state,
            BrowserMsg::FetchResolved {
                generation: 2,
                items: vec![resource("fresh")],
            },
        );
        assert_eq!(state.items().len(), 1);
        assert_eq!(state.items()[0].id, "fresh");
    }

    #[test]
    fn test_stale_resolution_after_the_current_one_is_discarded() {
        // Settlements arriving out of order: newest first, stale afterwards
        let (state, _) = opened();
        let (state, _) = update(state, BrowserMsg::QueryChanged("iris".to_string()));
        let (state, _) = update(
            state,
            BrowserMsg::FetchResolved {
                generation: 2,
                items: vec![resource("fresh")],
            },
        );
        let (state, _) = update(
            state,
            BrowserMsg::FetchResolved {
                generation: 1,
                items: vec![resource("stale")],
            },
        );

        assert_eq!(state.items().len(), 1);
        assert_eq!(state.items()[0].id, "fresh");
    }

    #[test]
    fn test_stale_rejection_is_discarded() {
        // An aborted request's failure must never surface for a newer one
        let (state, _) = opened();
        let (state, _) = update(state, BrowserMsg::TagChanged("ml".to_string()));
        let (state, _) = update(
            state,
            BrowserMsg::FetchRejected {
                generation: 1,
                message: "request cancelled".to_string(),
            },
        );

        assert!(state.is_loading());
        assert!(state.error().is_none());
    }

    #[test]
    fn test_reselecting_the_category_retries() {
        let (state, _) = opened();
        let (state, _) = update(
            state,
            BrowserMsg::FetchRejected {
                generation: 1,
                message: "Request failed: 502".to_string(),
            },
        );

        let (state, effects) = update(state, BrowserMsg::CategorySelected(Category::Datasets));

        assert!(state.is_loading());
        assert!(state.error().is_none(), "a new fetch clears the error");
        assert_eq!(
            effects,
            vec![BrowserEffect::Fetch {
                generation: 2,
                query: ResourceQuery::new(Category::Datasets),
            }]
        );
    }

    #[test]
    fn test_unchanged_query_is_a_noop() {
        let (state, _) = opened();
        let (state, _) = update(state, BrowserMsg::QueryChanged("iris".to_string()));
        let before = state.clone();

        let (state, effects) = update(state, BrowserMsg::QueryChanged("iris".to_string()));

        assert_eq!(state, before);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_unchanged_tag_is_a_noop() {
        let (state, _) = opened();
        let (state, _) = update(state, BrowserMsg::TagChanged("csv".to_string()));
        let before = state.clone();

        let (state, effects) = update(state, BrowserMsg::TagChanged("csv".to_string()));

        assert_eq!(state, before);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_clearing_filters_resets_and_refetches() {
        let (state, _) = opened();
        let (state, _) = update(state, BrowserMsg::QueryChanged("iris".to_string()));
        let (state, _) = update(state, BrowserMsg::TagChanged("csv".to_string()));

        let (state, effects) = update(state, BrowserMsg::FiltersCleared);

        assert!(!state.has_filters());
        assert_eq!(
            effects,
            vec![BrowserEffect::Fetch {
                generation: 4,
                query: ResourceQuery::new(Category::Datasets),
            }]
        );
    }

    #[test]
    fn test_clearing_absent_filters_is_a_noop() {
        let (state, _) = opened();
        let before = state.clone();

        let (state, effects) = update(state, BrowserMsg::FiltersCleared);

        assert_eq!(state, before);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_generations_increase_monotonically() {
        let msgs = vec![
            BrowserMsg::Opened {
                query: String::new(),
                tag: String::new(),
            },
            BrowserMsg::CategorySelected(Category::Tools),
            BrowserMsg::QueryChanged("sort".to_string()),
            BrowserMsg::TagChanged("rust".to_string()),
            BrowserMsg::FiltersCleared,
            BrowserMsg::CategorySelected(Category::Tools),
        ];

        let mut state = BrowserState::new();
        let mut last = state.generation();
        for msg in msgs {
            let (next, effects) = update(state, msg);
            assert!(next.generation() > last);
            for effect in &effects {
                let BrowserEffect::Fetch { generation, .. } = effect;
                assert_eq!(*generation, next.generation());
            }
            last = next.generation();
            state = next;
        }
    }

    #[test]
    fn test_same_selection_yields_the_same_items() {
        let items = vec![resource("a"), resource("b")];
        let (state, _) = opened();
        let (state, _) = update(
            state,
            BrowserMsg::FetchResolved {
                generation: 1,
                items: items.clone(),
            },
        );
        let first = state.items().to_vec();

        // Refetch the identical selection; an unchanged backend answer
        // must render the identical list.
        let (state, effects) = update(state, BrowserMsg::CategorySelected(Category::Datasets));
        let generation = match effects.as_slice() {
            [BrowserEffect::Fetch { generation, .. }] => *generation,
            other => panic!("expected one fetch effect, got {other:?}"),
        };
        let (state, _) = update(state, BrowserMsg::FetchResolved { generation, items });

        assert_eq!(state.items(), &first[..]);
    }

    #[test]
    fn test_loading_hides_previous_items() {
        let (state, _) = opened();
        let (state, _) = update(
            state,
            BrowserMsg::FetchResolved {
                generation: 1,
                items: vec![resource("a")],
            },
        );

        let (state, _) = update(state, BrowserMsg::QueryChanged("iris".to_string()));

        assert!(state.is_loading());
        assert!(state.items().is_empty());
    }
}
