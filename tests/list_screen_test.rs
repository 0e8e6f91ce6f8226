//! List screen paging against an in-memory catalogue

mod common;

use common::{FakeCatalog, FakeHistory, FakeStreams, fixture_with, settle};
use filmtime::controller::ListScreen;
use filmtime::error::GeneralError;
use filmtime::model::{ListType, ShowListType, VideoKind};

fn two_page_catalog() -> FakeCatalog {
    FakeCatalog { total_pages: 2, ..FakeCatalog::default() }
}

#[tokio::test]
async fn test_pages_accumulate_until_end() {
    let fx = fixture_with(two_page_catalog(), FakeHistory::default(), FakeStreams::default());
    let screen = ListScreen::mount(
        ListType::Shows(ShowListType::Popular),
        fx.use_cases.observe_list.clone(),
    );
    let mut rx = screen.subscribe();

    let first = settle(&mut rx, |s| !s.screen.is_loading).await;
    assert_eq!(first.items().len(), 3);
    assert!(first.items().iter().all(|i| i.kind == VideoKind::Show));
    assert!(!first.end_reached);

    screen.load_next_page();
    let second = settle(&mut rx, |s| !s.screen.is_loading).await;
    assert_eq!(second.items().len(), 6);
    assert_eq!(second.items()[3].title, "Title 2-0");

    screen.load_next_page();
    let done = settle(&mut rx, |s| s.end_reached).await;
    assert_eq!(done.items().len(), 6);
    assert!(!done.screen.is_loading);

    // Exhausted lists ignore further requests
    screen.load_next_page();
    assert!(!screen.state().screen.is_loading);
}

#[tokio::test]
async fn test_refresh_restarts_from_first_page() {
    let fx = fixture_with(two_page_catalog(), FakeHistory::default(), FakeStreams::default());
    let screen = ListScreen::mount(
        ListType::Shows(ShowListType::Trending),
        fx.use_cases.observe_list.clone(),
    );
    let mut rx = screen.subscribe();
    settle(&mut rx, |s| !s.screen.is_loading).await;
    screen.load_next_page();
    settle(&mut rx, |s| !s.screen.is_loading && s.items().len() == 6).await;

    screen.refresh();
    let refreshing = screen.state();
    assert!(refreshing.screen.is_loading);
    // Stale items stay visible until page 1 lands
    assert_eq!(refreshing.items().len(), 6);

    let refreshed = settle(&mut rx, |s| !s.screen.is_loading).await;
    assert_eq!(refreshed.items().len(), 3);
    assert_eq!(refreshed.items()[0].title, "Title 1-0");
    assert!(!refreshed.end_reached);
}

#[tokio::test]
async fn test_selection_near_end_prefetches() {
    let fx = fixture_with(FakeCatalog::default(), FakeHistory::default(), FakeStreams::default());
    let screen = ListScreen::mount(
        ListType::Shows(ShowListType::OnTheAir),
        fx.use_cases.observe_list.clone(),
    );
    let mut rx = screen.subscribe();
    settle(&mut rx, |s| !s.screen.is_loading).await;

    screen.on_selection(1);
    let more = settle(&mut rx, |s| !s.screen.is_loading && s.items().len() > 3).await;
    assert_eq!(more.items().len(), 6);
}

#[tokio::test]
async fn test_unmount_stops_paging() {
    let fx = fixture_with(two_page_catalog(), FakeHistory::default(), FakeStreams::default());
    let screen = ListScreen::mount(
        ListType::Shows(ShowListType::TopRated),
        fx.use_cases.observe_list.clone(),
    );
    screen.unmount();
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    assert!(screen.state().items().is_empty());
}

#[tokio::test]
async fn test_failed_page_keeps_rows_and_retry_requests_it_again() {
    let fx = fixture_with(two_page_catalog(), FakeHistory::default(), FakeStreams::default());
    let screen = ListScreen::mount(
        ListType::Shows(ShowListType::Popular),
        fx.use_cases.observe_list.clone(),
    );
    let mut rx = screen.subscribe();
    settle(&mut rx, |s| !s.screen.is_loading).await;

    fx.catalog.fail_page(2);
    assert!(screen.load_next_page());
    let failed = settle(&mut rx, |s| !s.screen.is_loading).await;
    assert_eq!(failed.screen.error(), Some(&GeneralError::NetworkError));
    assert_eq!(failed.items().len(), 3);

    // Selection does not prefetch over a failed page
    screen.on_selection(2);
    assert!(!screen.state().screen.is_loading);

    fx.catalog.heal_page(2);
    assert!(screen.retry());
    let recovered = settle(&mut rx, |s| !s.screen.is_loading).await;
    assert!(recovered.screen.error().is_none());
    assert_eq!(recovered.items().len(), 6);
    assert_eq!(recovered.items()[3].title, "Title 2-0");
    assert_eq!(fx.catalog.stream_opens(), 1);
}

#[tokio::test]
async fn test_failed_refresh_keeps_stale_rows() {
    let fx = fixture_with(two_page_catalog(), FakeHistory::default(), FakeStreams::default());
    let screen = ListScreen::mount(
        ListType::Shows(ShowListType::Popular),
        fx.use_cases.observe_list.clone(),
    );
    let mut rx = screen.subscribe();
    settle(&mut rx, |s| !s.screen.is_loading).await;
    screen.load_next_page();
    settle(&mut rx, |s| !s.screen.is_loading && s.items().len() == 6).await;

    fx.catalog.fail_page(1);
    screen.refresh();
    let failed = settle(&mut rx, |s| !s.screen.is_loading).await;
    assert_eq!(failed.screen.error(), Some(&GeneralError::NetworkError));
    assert_eq!(failed.items().len(), 6);
    assert_eq!(failed.items()[0].title, "Title 1-0");
}

#[tokio::test]
async fn test_retry_after_failed_refresh_of_exhausted_list() {
    let catalog = FakeCatalog { total_pages: 1, ..FakeCatalog::default() };
    let fx = fixture_with(catalog, FakeHistory::default(), FakeStreams::default());
    let screen = ListScreen::mount(
        ListType::Shows(ShowListType::Trending),
        fx.use_cases.observe_list.clone(),
    );
    let mut rx = screen.subscribe();
    settle(&mut rx, |s| !s.screen.is_loading).await;
    screen.load_next_page();
    settle(&mut rx, |s| s.end_reached).await;

    fx.catalog.fail_page(1);
    screen.refresh();
    let failed = settle(&mut rx, |s| !s.screen.is_loading).await;
    assert!(failed.screen.error().is_some());
    assert!(!failed.end_reached);

    fx.catalog.heal_page(1);
    assert!(screen.retry());
    assert!(screen.state().screen.is_loading);
    let recovered = settle(&mut rx, |s| !s.screen.is_loading).await;
    assert!(recovered.screen.error().is_none());
    assert_eq!(recovered.items().len(), 3);
    assert_eq!(fx.catalog.stream_opens(), 2);
}
