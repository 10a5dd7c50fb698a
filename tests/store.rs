//! Loading events, and what happens when the source is not available

use std::path::PathBuf;

use month_calendar::client::Client;
use month_calendar::grid;
use month_calendar::local::LocalFile;
use month_calendar::mock_behaviour::{MockBehaviour, MockSource};
use month_calendar::{CalendarView, Event, EventStore, LoadOutcome, Month};

const EVENTS_JSON: &str = r##"[
    {"date": "2024-03-05", "title": "A", "startTime": "09:00", "endTime": "10:00", "color": "#f59e0b"},
    {"date": "2024-03-05", "title": "B", "startTime": "11:00", "endTime": "12:00"},
    {"date": "2024-04-01", "title": "C", "startTime": "14:00", "endTime": "15:00"}
]"##;

fn temp_file(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("month-calendar-{}-{}.json", name, std::process::id()));
    std::fs::write(&path, content).unwrap();
    path
}

#[tokio::test]
async fn test_simulated_network_failure() {
    let _ = env_logger::builder().is_test(true).try_init();

    let source = MockSource::unreachable();
    let (store, outcome) = EventStore::initialize(&source).await;

    assert!(matches!(outcome, LoadOutcome::Failed(_)));
    assert!(store.events().is_empty());
    assert!(store.last_error().is_some());
    assert_eq!(source.fetch_count(), 1);

    let map = grid::events_by_date(store.events(), Month::new(2024, 3).unwrap());
    assert!(map.is_empty());

    // The calendar remains usable
    let view = CalendarView::new(chrono::NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
    let snapshot = view.snapshot(store.events());
    assert_eq!(snapshot.days.len(), 42);
    assert!(snapshot.days.iter().all(|d| d.events.is_empty()));
}

#[tokio::test]
async fn test_unreachable_server() {
    let _ = env_logger::builder().is_test(true).try_init();

    // Nothing listens on this port
    let client = Client::new("http://127.0.0.1:9/events.json").unwrap();
    let (store, outcome) = EventStore::initialize(&client).await;

    assert!(outcome.is_success() == false);
    assert!(store.events().is_empty());
}

#[tokio::test]
async fn test_load_from_file() {
    let _ = env_logger::builder().is_test(true).try_init();

    let path = temp_file("valid", EVENTS_JSON);
    let (store, outcome) = EventStore::initialize(&LocalFile::new(&path)).await;
    std::fs::remove_file(&path).unwrap();

    assert_eq!(outcome, LoadOutcome::Loaded(3));
    assert_eq!(store.events()[0].color().to_hex_string(), "#f59e0b");

    let map = grid::events_by_date(store.events(), Month::new(2024, 3).unwrap());
    assert_eq!(map.len(), 1);
    let titles: Vec<&str> = map.values().next().unwrap().iter().map(|e| e.title()).collect();
    assert_eq!(titles, vec!["A", "B"]);

    let map = grid::events_by_date(store.events(), Month::new(2024, 4).unwrap());
    assert_eq!(map.len(), 1);
}

#[tokio::test]
async fn test_malformed_resource() {
    let _ = env_logger::builder().is_test(true).try_init();

    let path = temp_file("malformed", r#"{"events": "not an array"}"#);
    let mut store = EventStore::with_events(vec![Event::new("2024-03-05", "kept")]);
    let outcome = store.load(&LocalFile::new(&path)).await;
    std::fs::remove_file(&path).unwrap();

    assert!(matches!(outcome, LoadOutcome::Failed(_)));
    assert_eq!(store.events().len(), 1);
    assert_eq!(store.events()[0].title(), "kept");
}

#[tokio::test]
async fn test_recovers_after_failures() {
    let _ = env_logger::builder().is_test(true).try_init();

    let source = MockSource::new(vec![Event::new("2024-03-05", "A")], MockBehaviour::fail_now(2));
    let mut store = EventStore::new();

    assert!(store.load(&source).await.is_success() == false);
    assert!(store.load(&source).await.is_success() == false);
    assert!(store.events().is_empty());
    assert_eq!(store.load(&source).await, LoadOutcome::Loaded(1));
    assert_eq!(store.events().len(), 1);
    assert_eq!(source.fetch_count(), 3);
}
