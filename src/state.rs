use leptos::prelude::*;

use crate::models::UserRecord;
use crate::query::QueryState;
use crate::requests::RequestSeq;

#[derive(Debug, Clone)]
pub(crate) struct AppState {
    pub(crate) query: RwSignal<QueryState>,
    pub(crate) users: RwSignal<Vec<UserRecord>>,
    pub(crate) total: RwSignal<u64>,
    pub(crate) pages_count: RwSignal<u32>,
    pub(crate) loading: RwSignal<bool>,
    pub(crate) error: RwSignal<Option<String>>,
    // Рендер от счётчика не зависит, поэтому он читается и пишется
    // только untracked-доступом.
    requests: RwSignal<RequestSeq>,
}

impl AppState {
    pub(crate) fn new() -> Self {
        Self {
            query: RwSignal::new(QueryState::default()),
            users: RwSignal::new(Vec::new()),
            total: RwSignal::new(0),
            pages_count: RwSignal::new(0),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            requests: RwSignal::new(RequestSeq::default()),
        }
    }

    pub(crate) fn set_error(&self, message: impl Into<String>) {
        self.error.set(Some(message.into()));
    }

    pub(crate) fn clear_error(&self) {
        self.error.set(None);
    }

    pub(crate) fn begin_request(&self) -> u64 {
        let mut seq = self.requests.get_untracked();
        let id = seq.begin();
        self.requests.set(seq);
        id
    }

    pub(crate) fn is_latest(&self, id: u64) -> bool {
        self.requests.get_untracked().is_current(id)
    }
}
