//
//  profilescout
//  api/common/pagination.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Lazy Pagination over Offset/Token Paged Endpoints
//!
//! The search endpoint pages with an `offset`/`limit` pair and hands back a
//! continuation token (`search_id`) that must accompany follow-up requests
//! so the server can serve later pages from the same result set.
//! [`Paginator`] hides that bookkeeping and yields items one at a time.
//!
//! # Termination
//!
//! After each page the sequence ends when either:
//!
//! - the page held fewer items than the requested `limit`, or
//! - `offset + items` reached the `total` the server reported.
//!
//! Otherwise the offset advances by the number of items just received and
//! the next page is requested only once the current one has been consumed.
//!
//! # Example
//!
//! ```rust
//! use profilescout::api::common::{Page, Paginator};
//!
//! # tokio_test::block_on(async {
//! let mut pages = Paginator::new(2, |req| async move {
//!     let items: Vec<u64> = (req.offset..(req.offset + 2).min(3)).collect();
//!     Ok::<_, profilescout::api::ApiError>(Page {
//!         items,
//!         total: Some(3),
//!         continuation: Some("token".to_string()),
//!     })
//! });
//!
//! let mut seen = Vec::new();
//! while let Some(n) = pages.next().await? {
//!     seen.push(n);
//! }
//! assert_eq!(seen, vec![0, 1, 2]);
//! # Ok::<(), profilescout::api::ApiError>(())
//! # }).unwrap();
//! ```

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;

use super::ApiError;

/// Default number of items requested per page.
pub const DEFAULT_PAGE_SIZE: u32 = 30;

/// Cursor handed to the page-fetch function for each request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Number of items already yielded by earlier pages.
    pub offset: u64,
    /// Maximum number of items to request.
    pub limit: u32,
    /// Server-issued token from the previous page, absent for the first one.
    pub continuation: Option<String>,
}

/// One page as returned by the page-fetch function.
#[derive(Debug, Clone)]
pub struct Page<T> {
    /// Items in server order.
    pub items: Vec<T>,
    /// Total item count reported by the server, if any.
    pub total: Option<u64>,
    /// Token to send with the next request.
    pub continuation: Option<String>,
}

/// Boxed future produced by a page-fetch function.
pub type PageFuture<T> = Pin<Box<dyn Future<Output = Result<Page<T>, ApiError>> + Send>>;

type FetchFn<T> = Box<dyn FnMut(PageRequest) -> PageFuture<T> + Send>;

/// A forward-only sequence of items fetched page by page.
///
/// Nothing is requested until the first call to [`next`](Self::next) or
/// [`next_page`](Self::next_page). Dropping the paginator stops it; no
/// request is ever issued ahead of consumption. Once the sequence ends, or
/// a page fetch fails, it stays finished.
pub struct Paginator<T> {
    fetch: FetchFn<T>,
    limit: u32,
    offset: u64,
    continuation: Option<String>,
    buffer: VecDeque<T>,
    done: bool,
    remaining: Option<usize>,
    pages_fetched: usize,
}

impl<T: Send + 'static> Paginator<T> {
    /// Creates a paginator that requests `limit` items per page from `fetch`.
    ///
    /// A `limit` of zero is treated as one.
    pub fn new<F, Fut>(limit: u32, mut fetch: F) -> Self
    where
        F: FnMut(PageRequest) -> Fut + Send + 'static,
        Fut: Future<Output = Result<Page<T>, ApiError>> + Send + 'static,
    {
        Self {
            fetch: Box::new(move |request| Box::pin(fetch(request))),
            limit: limit.max(1),
            offset: 0,
            continuation: None,
            buffer: VecDeque::new(),
            done: false,
            remaining: None,
            pages_fetched: 0,
        }
    }

    /// Stops the sequence after `max` items, without fetching further pages.
    pub fn with_max_results(mut self, max: usize) -> Self {
        self.remaining = Some(max);
        self
    }

    /// Returns `true` while more items may be yielded.
    pub fn has_more(&self) -> bool {
        if self.remaining == Some(0) {
            return false;
        }
        !self.buffer.is_empty() || !self.done
    }

    /// Number of page requests issued so far.
    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }

    /// Returns the next item, fetching a new page when the buffer is empty.
    ///
    /// Returns `Ok(None)` once the sequence is exhausted.
    pub async fn next(&mut self) -> Result<Option<T>, ApiError> {
        if self.remaining == Some(0) {
            return Ok(None);
        }

        if self.buffer.is_empty() {
            if self.done {
                return Ok(None);
            }
            self.fetch_page().await?;
        }

        let item = self.buffer.pop_front();
        if item.is_some() {
            if let Some(remaining) = self.remaining.as_mut() {
                *remaining -= 1;
            }
        }
        Ok(item)
    }

    /// Returns the rest of the current page, or the next page if the
    /// current one has been fully consumed.
    ///
    /// Returns `Ok(None)` once the sequence is exhausted.
    pub async fn next_page(&mut self) -> Result<Option<Vec<T>>, ApiError> {
        if !self.has_more() {
            return Ok(None);
        }

        if self.buffer.is_empty() {
            self.fetch_page().await?;
        }

        let take = match self.remaining {
            Some(remaining) => remaining.min(self.buffer.len()),
            None => self.buffer.len(),
        };
        if take == 0 {
            return Ok(None);
        }

        let items: Vec<T> = self.buffer.drain(..take).collect();
        if let Some(remaining) = self.remaining.as_mut() {
            *remaining -= items.len();
        }
        Ok(Some(items))
    }

    /// Collects every remaining item into a `Vec`.
    pub async fn collect(mut self) -> Result<Vec<T>, ApiError> {
        let mut all = Vec::new();
        while let Some(item) = self.next().await? {
            all.push(item);
        }
        Ok(all)
    }

    async fn fetch_page(&mut self) -> Result<(), ApiError> {
        let request = PageRequest {
            offset: self.offset,
            limit: self.limit,
            continuation: self.continuation.clone(),
        };

        self.pages_fetched += 1;
        tracing::debug!(
            offset = request.offset,
            limit = request.limit,
            page = self.pages_fetched,
            "fetching page"
        );

        let page = match (self.fetch)(request).await {
            Ok(page) => page,
            Err(e) => {
                self.done = true;
                return Err(e);
            }
        };

        let count = page.items.len() as u64;
        let short_page = count < u64::from(self.limit);
        let reached_total = page.total.is_some_and(|total| self.offset + count >= total);

        if short_page || reached_total {
            self.done = true;
        } else {
            if page.continuation.is_some() {
                self.continuation = page.continuation;
            }
            self.offset += count;
        }

        self.buffer.extend(page.items);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    /// Serves `0..total` in pages and records each request.
    fn numbered(
        total: u64,
        calls: Arc<AtomicUsize>,
        seen: Arc<Mutex<Vec<PageRequest>>>,
    ) -> impl FnMut(PageRequest) -> PageFuture<u64> + Send + 'static {
        move |req: PageRequest| {
            calls.fetch_add(1, Ordering::SeqCst);
            seen.lock().unwrap().push(req.clone());
            Box::pin(async move {
                let end = (req.offset + u64::from(req.limit)).min(total);
                Ok(Page {
                    items: (req.offset..end).collect(),
                    total: Some(total),
                    continuation: Some(format!("search-{}", end)),
                })
            })
        }
    }

    #[tokio::test]
    async fn test_thirty_one_items_take_two_fetches() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::new(Mutex::new(Vec::new()));
        let pages = Paginator::new(30, numbered(31, calls.clone(), seen.clone()));

        let items = pages.collect().await.unwrap();

        assert_eq!(items, (0..31).collect::<Vec<u64>>());
        assert_eq!(calls.load(Ordering::SeqCst), 2);

        let seen = seen.lock().unwrap();
        assert_eq!(seen[0].offset, 0);
        assert_eq!(seen[0].continuation, None);
        assert_eq!(seen[1].offset, 30);
        assert_eq!(seen[1].continuation.as_deref(), Some("search-30"));
    }

    #[tokio::test]
    async fn test_exact_total_stops_without_extra_fetch() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::new(Mutex::new(Vec::new()));
        let pages = Paginator::new(10, numbered(20, calls.clone(), seen));

        let items = pages.collect().await.unwrap();

        assert_eq!(items.len(), 20);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_short_page_without_total_ends() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let pages = Paginator::new(5, move |req: PageRequest| {
            counter.fetch_add(1, Ordering::SeqCst);
            async move {
                let items = if req.offset == 0 { vec![1, 2, 3, 4, 5] } else { vec![6] };
                Ok::<_, ApiError>(Page { items, total: None, continuation: None })
            }
        });

        let items = pages.collect().await.unwrap();

        assert_eq!(items, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_early_termination_issues_no_more_requests() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut pages = Paginator::new(30, numbered(100, calls.clone(), seen));

        for _ in 0..5 {
            assert!(pages.next().await.unwrap().is_some());
        }
        drop(pages);

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_nothing_fetched_before_first_next() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::new(Mutex::new(Vec::new()));
        let pages = Paginator::new(30, numbered(100, calls.clone(), seen));

        assert!(pages.has_more());
        assert_eq!(pages.pages_fetched(), 0);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_max_results_caps_items_and_fetches() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::new(Mutex::new(Vec::new()));
        let pages = Paginator::new(10, numbered(100, calls.clone(), seen)).with_max_results(15);

        let items = pages.collect().await.unwrap();

        assert_eq!(items.len(), 15);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_next_page_returns_whole_pages() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut pages = Paginator::new(30, numbered(31, calls, seen));

        assert_eq!(pages.next_page().await.unwrap().map(|p| p.len()), Some(30));
        assert_eq!(pages.next_page().await.unwrap().map(|p| p.len()), Some(1));
        assert!(pages.next_page().await.unwrap().is_none());
        assert!(!pages.has_more());
    }

    #[tokio::test]
    async fn test_fetch_error_finishes_sequence() {
        let mut pages: Paginator<u64> = Paginator::new(10, |_req: PageRequest| async {
            Err::<Page<u64>, _>(ApiError::generic(503, "unavailable"))
        });

        let err = pages.next().await.unwrap_err();

        assert_eq!(err.status(), 503);
        assert!(pages.next().await.unwrap().is_none());
    }
}
