//! Lazy pagination over numbered TMDB list pages

use std::collections::HashSet;
use std::future::Future;

use futures::stream::{self, BoxStream, StreamExt};

use crate::error::ApiResult;

use super::types::{Page, VideoKind, VideoThumbnail};

/// Stream of pages, each already stripped of items seen on earlier pages
pub type VideoStream = BoxStream<'static, ApiResult<Vec<VideoThumbnail>>>;

struct Cursor<F> {
    fetch: F,
    next_page: u32,
    seen: HashSet<(VideoKind, u32)>,
    done: bool,
}

/// Turn a page fetcher into a lazy stream starting at page 1.
///
/// Nothing is fetched until the stream is polled. A failed page is yielded as
/// `Err` and the same page is requested again on the next poll. The stream ends
/// after the last page or an empty one. Dropping it abandons any in-flight fetch.
pub fn paginate<F, Fut>(fetch: F) -> VideoStream
where
    F: Fn(u32) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ApiResult<Page<VideoThumbnail>>> + Send + 'static,
{
    let cursor = Cursor {
        fetch,
        next_page: 1,
        seen: HashSet::new(),
        done: false,
    };

    stream::unfold(cursor, |mut cursor| async move {
        if cursor.done {
            return None;
        }

        let request = (cursor.fetch)(cursor.next_page);
        match request.await {
            Ok(page) => {
                tracing::trace!(page = page.page, total_pages = page.total_pages, "Fetched list page");
                cursor.done = page.is_last();
                cursor.next_page = page.page.max(cursor.next_page) + 1;
                let seen = &mut cursor.seen;
                let fresh: Vec<VideoThumbnail> = page
                    .results
                    .into_iter()
                    .filter(|item| match item.identity() {
                        Some(key) => seen.insert(key),
                        None => true,
                    })
                    .collect();
                Some((Ok(fresh), cursor))
            }
            Err(e) => Some((Err(e), cursor)),
        }
    })
    .boxed()
}
