//! Reusable reactive hooks.
//!
//! - [`use_mount_flag`] - one-shot flag set after the first render commits
//! - [`use_visibility_latch`] - viewport latch for scroll-triggered sections
//! - [`use_query`] - query client binding with loading/error states

use std::future::Future;

use leptos::html;
use leptos::prelude::*;
use leptos_use::use_intersection_observer;
use serde::{Serialize, de::DeserializeOwned};
use wasm_bindgen_futures::spawn_local;

use crate::app::use_app;
use crate::core::QueryKey;
use crate::core::error::{FetchError, QueryError};
use crate::models::{MountFlag, VisibilityLatch};

/// `false` during the first synchronous render, `true` from the first frame
/// after it and for as long as the view stays mounted.
pub fn use_mount_flag() -> Signal<bool> {
    let flag = RwSignal::new(MountFlag::new());

    Effect::new(move || {
        // Two frames so the entry pose is painted before the transition starts.
        request_animation_frame(move || {
            request_animation_frame(move || {
                flag.try_update(|f| f.settle());
            });
        });
    });

    Signal::derive(move || flag.with(|f| f.is_mounted()))
}

/// Whether the element behind `target` should be at its rest pose.
///
/// Driven by an `IntersectionObserver`; see [`VisibilityLatch`] for the
/// once/repeat semantics.
pub fn use_visibility_latch(target: NodeRef<html::Section>, once: bool) -> Signal<bool> {
    let latch = RwSignal::new(VisibilityLatch::new(once));

    use_intersection_observer(target, move |entries, _| {
        for entry in entries {
            latch.try_update(|l| l.observe(entry.is_intersecting()));
        }
    });

    Signal::derive(move || latch.with(|l| l.is_shown()))
}

/// Observable state of a query owned by a view.
#[derive(Clone, Debug, PartialEq)]
pub enum QueryStatus<T> {
    Loading,
    Success(T),
    Error(QueryError),
}

impl<T> QueryStatus<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

impl<T> From<Result<T, QueryError>> for QueryStatus<T> {
    fn from(result: Result<T, QueryError>) -> Self {
        match result {
            Ok(data) => Self::Success(data),
            Err(e) => Self::Error(e),
        }
    }
}

/// Bind a query to the calling view.
///
/// Starts with cached data when the client has any, otherwise `Loading`,
/// then fetches under the client's default policy. Refetches when a window
/// focus invalidates `key`. A result arriving after the view unmounted is
/// dropped.
pub fn use_query<T, F, Fut>(key: QueryKey, fetcher: F) -> Signal<QueryStatus<T>>
where
    T: Clone + Serialize + DeserializeOwned + Send + Sync + 'static,
    F: Fn() -> Fut + Clone + 'static,
    Fut: Future<Output = Result<T, FetchError>> + 'static,
{
    let app = use_app();
    let initial = app
        .queries
        .get_query_data::<T>(&key)
        .map_or(QueryStatus::Loading, QueryStatus::Success);
    let status = RwSignal::new(initial);

    let run = {
        let client = app.queries.clone();
        let key = key.clone();
        move || {
            let client = client.clone();
            let key = key.clone();
            let fetcher = fetcher.clone();
            spawn_local(async move {
                let result = client.fetch_query(&key, fetcher).await;
                status.try_set(result.into());
            });
        }
    };
    run();

    Effect::watch(
        move || app.refetch.get(),
        move |keys: &Vec<QueryKey>, _, _| {
            if keys.contains(&key) {
                run();
            }
        },
        false,
    );

    status.into()
}
