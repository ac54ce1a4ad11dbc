//! Observable country state
//!
//! [`CountriesStore`] sits between a presentation layer and a
//! [`CountriesFetcher`]. It exposes two independent slots: `countries`, the
//! last list that was fetched successfully, and `last_error`, the failure of
//! the most recently completed refresh (cleared again by the next success).
//!
//! `refresh()` spawns the fetch and returns at once. Overlapping refreshes are
//! neither coalesced nor cancelled: each completion publishes its own outcome,
//! so observers end up seeing whichever fetch finished last.

use crate::errors::FetchError;
use crate::models::Country;
use crate::service::CountriesFetcher;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Snapshot of the country list as published by the store.
pub type CountryList = Arc<Vec<Country>>;

/// A current value plus a subscription to subsequent changes.
pub struct Observable<T> {
    sender: watch::Sender<T>,
}

impl<T: Clone> Observable<T> {
    pub fn new(initial: T) -> Self {
        let (sender, _) = watch::channel(initial);
        Self { sender }
    }

    /// Get the current value.
    pub fn get(&self) -> T {
        self.sender.borrow().clone()
    }

    /// Subscribe to changes published after this call.
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.sender.subscribe()
    }

    /// Replace the value and notify subscribers, if any.
    pub(crate) fn publish(&self, value: T) {
        self.sender.send_replace(value);
    }
}

struct StoreInner {
    fetcher: Arc<dyn CountriesFetcher>,
    countries: Observable<CountryList>,
    last_error: Observable<Option<FetchError>>,
    publish_lock: Mutex<()>,
    runtime: Handle,
}

impl StoreInner {
    fn publish(&self, outcome: Result<Vec<Country>, FetchError>) {
        // Both slot writes of one completion land together.
        let _guard = self
            .publish_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        match outcome {
            Ok(countries) => {
                log::info!("Publishing {} countries", countries.len());
                self.last_error.publish(None);
                self.countries.publish(Arc::new(countries));
            }
            Err(e) => {
                log::warn!("Refresh failed, keeping previous countries: {}", e);
                self.last_error.publish(Some(e));
            }
        }
    }
}

#[derive(Clone)]
pub struct CountriesStore {
    inner: Arc<StoreInner>,
}

impl CountriesStore {
    /// Create a store that runs refreshes on the current Tokio runtime.
    ///
    /// Panics when called outside a runtime; use [`Self::with_runtime`] there.
    pub fn new(fetcher: Arc<dyn CountriesFetcher>) -> Self {
        Self::with_runtime(fetcher, Handle::current())
    }

    /// Create a store that runs refreshes on `runtime`.
    ///
    /// `refresh()` may then be called from any thread, including ones that
    /// are not part of a runtime.
    pub fn with_runtime(fetcher: Arc<dyn CountriesFetcher>, runtime: Handle) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                fetcher,
                countries: Observable::new(Arc::new(Vec::new())),
                last_error: Observable::new(None),
                publish_lock: Mutex::new(()),
                runtime,
            }),
        }
    }

    /// Start one asynchronous fetch and publish its outcome on completion.
    ///
    /// The returned handle can be dropped; awaiting it only waits for the
    /// publish step.
    pub fn refresh(&self) -> JoinHandle<()> {
        let inner = self.inner.clone();
        log::debug!("Refresh requested");
        self.inner.runtime.spawn(async move {
            let outcome = inner.fetcher.fetch_countries().await;
            inner.publish(outcome);
        })
    }

    pub fn countries(&self) -> CountryList {
        self.inner.countries.get()
    }

    pub fn last_error(&self) -> Option<FetchError> {
        self.inner.last_error.get()
    }

    pub fn subscribe_countries(&self) -> watch::Receiver<CountryList> {
        self.inner.countries.subscribe()
    }

    pub fn subscribe_errors(&self) -> watch::Receiver<Option<FetchError>> {
        self.inner.last_error.subscribe()
    }

    /// Countries from the current snapshot whose name or capital match `query`.
    pub fn search(&self, query: &str) -> Vec<Country> {
        self.countries()
            .iter()
            .filter(|country| country.matches(query))
            .cloned()
            .collect()
    }
}
