//! Page-owned filter state and its single dispatch handle.

use common::filter_state::{FilterCommand, FilterState};
use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterControl {
    pub filters: ReadSignal<FilterState>,
    pub dispatch: Callback<FilterCommand>,
}

/// Creates a fresh [`FilterState`] for the calling component. All writes go
/// through the returned `dispatch`.
pub fn use_filter_state() -> FilterControl {
    let mut filters = use_signal(FilterState::default);
    let dispatch = use_callback(move |command: FilterCommand| {
        dioxus::logger::tracing::debug!("filter command: {:?}", command);
        let next = filters.peek().clone().apply(command);
        filters.set(next);
    });
    FilterControl { filters: filters.into(), dispatch }
}
