use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use contracts::shared::list::{self, FetchSequence, PageQuery, Paged};
use leptos::prelude::*;

type FetchFuture<T> = Pin<Box<dyn Future<Output = Result<Paged<T>, String>>>>;

/// The list-management workflow shared by the CRUD screens: one query
/// value driving fetches, a cached page of records, and an explicit
/// `refresh()` used after every successful mutation.
///
/// Every fetch takes a `FetchSequence` ticket; a response is dropped
/// unless its ticket is still the latest issued, so a slow earlier
/// request can never overwrite fresher results. On failure the
/// previous records stay visible and only the error callback fires.
pub struct ListManager<Q, T>
where
    Q: PageQuery + Clone + Send + Sync + 'static,
    T: Clone + Send + Sync + 'static,
{
    pub query: RwSignal<Q>,
    pub items: RwSignal<Vec<T>>,
    pub total: RwSignal<u64>,
    pub loading: RwSignal<bool>,
    seq: StoredValue<FetchSequence>,
    fetcher: Arc<dyn Fn(Q) -> FetchFuture<T> + Send + Sync>,
    on_error: Arc<dyn Fn(String) + Send + Sync>,
    on_loaded: Arc<dyn Fn() + Send + Sync>,
}

impl<Q, T> Clone for ListManager<Q, T>
where
    Q: PageQuery + Clone + Send + Sync + 'static,
    T: Clone + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            query: self.query,
            items: self.items,
            total: self.total,
            loading: self.loading,
            seq: self.seq,
            fetcher: self.fetcher.clone(),
            on_error: self.on_error.clone(),
            on_loaded: self.on_loaded.clone(),
        }
    }
}

impl<Q, T> ListManager<Q, T>
where
    Q: PageQuery + Clone + Send + Sync + 'static,
    T: Clone + Send + Sync + 'static,
{
    pub fn new<F, Fut>(
        query: Q,
        fetch_fn: F,
        on_error: impl Fn(String) + Send + Sync + 'static,
        on_loaded: impl Fn() + Send + Sync + 'static,
    ) -> Self
    where
        F: Fn(Q) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Paged<T>, String>> + 'static,
    {
        Self {
            query: RwSignal::new(query),
            items: RwSignal::new(Vec::new()),
            total: RwSignal::new(0),
            loading: RwSignal::new(false),
            seq: StoredValue::new(FetchSequence::default()),
            fetcher: Arc::new(move |q| Box::pin(fetch_fn(q)) as FetchFuture<T>),
            on_error: Arc::new(on_error),
            on_loaded: Arc::new(on_loaded),
        }
    }

    /// Re-fetch with the current query, unchanged.
    pub fn refresh(&self) {
        self.fetch();
    }

    /// Apply a search/filter change; the page resets to 1.
    pub fn search(&self, apply: impl FnOnce(&mut Q)) {
        self.query.update(|q| list::apply_filter_change(q, apply));
        self.fetch();
    }

    /// Change only the page number; filters stay intact.
    pub fn go_to_page(&self, page: u32) {
        self.query.update(|q| q.set_page(page));
        self.fetch();
    }

    pub fn set_page_size(&self, size: u32) {
        self.query.update(|q| {
            q.set_page_size(size);
            q.set_page(1);
        });
        self.fetch();
    }

    pub fn page(&self) -> Signal<u32> {
        let query = self.query;
        Signal::derive(move || query.with(|q| q.page()))
    }

    pub fn page_size(&self) -> Signal<u32> {
        let query = self.query;
        Signal::derive(move || query.with(|q| q.page_size()))
    }

    pub fn total_pages(&self) -> Signal<u32> {
        let total = self.total;
        let query = self.query;
        Signal::derive(move || list::total_pages(total.get(), query.with(|q| q.page_size())))
    }

    pub fn fetch(&self) {
        let ticket = {
            let mut ticket = 0;
            self.seq.update_value(|seq| ticket = seq.issue());
            ticket
        };
        self.loading.set(true);

        let future = (self.fetcher)(self.query.get_untracked());
        let seq = self.seq;
        let items = self.items;
        let total = self.total;
        let loading = self.loading;
        let on_error = self.on_error.clone();
        let on_loaded = self.on_loaded.clone();

        wasm_bindgen_futures::spawn_local(async move {
            let result = future.await;
            if !seq.with_value(|s| s.is_current(ticket)) {
                // stale response, a newer fetch is already in flight
                return;
            }
            loading.set(false);
            match result {
                Ok(page) => {
                    items.set(page.records);
                    total.set(page.total);
                    on_loaded();
                }
                Err(e) => {
                    log::error!("list fetch failed: {}", e);
                    on_error(e);
                }
            }
        });
    }
}
