//! Scenarios of a calendar that loads its events from a mocked source

use chrono::NaiveDate;

use events_calendar::Calendar;
use events_calendar::Event;
use events_calendar::calendar::load_progress::{feedback_channel, LoadEvent};
use events_calendar::clock::{Clock, FixedClock};
use events_calendar::error::{FetchError, MalformedEventError};
use events_calendar::mock_source::{MockBehaviour, MockSource};


fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn clock() -> FixedClock {
    FixedClock::new(date("2018-07-16"))
}

fn events() -> Vec<Event> {
    vec![
        Event::parse("Event 1", "2018-07-14", "2018-07-17").unwrap(),
        Event::parse("Event 2", "2018-07-16", "2018-07-18").unwrap(),
    ]
}


#[tokio::test]
async fn test_derivations_after_load() {
    let _ = env_logger::builder().is_test(true).try_init();

    let calendar = Calendar::mount(MockSource::with_events(events()), clock()).await;

    assert_eq!(calendar.events(), &events()[..]);
    assert!(calendar.has_fetch_error() == false);
    assert_eq!(calendar.first_day(), Some(date("2018-07-14")));
    assert_eq!(calendar.last_day(), Some(date("2018-07-18")));
    assert_eq!(calendar.days_count(), 5);
    assert_eq!(calendar.days_count(), calendar.days().len());

    let days = calendar.days();
    for event in events() {
        assert!(days.contains(&event.start_date()));
        assert!(days.contains(&event.end_date()));
    }

    assert_eq!(calendar.source().request_count(), 1);
}

#[tokio::test]
async fn test_fetch_error() {
    let _ = env_logger::builder().is_test(true).try_init();

    let calendar = Calendar::mount(MockSource::with_status(404), clock()).await;

    assert!(calendar.has_fetch_error());
    assert!(calendar.events().is_empty());
    assert!(calendar.render().contains("error while fetching the events"));
}

#[test]
fn test_initially_empty() {
    let calendar = Calendar::new(MockSource::with_events(events()), clock());

    assert!(calendar.events().is_empty());
    assert_eq!(calendar.first_day(), None);
    assert!(calendar.days().is_empty());
    assert!(calendar.has_fetch_error() == false);
    assert_eq!(calendar.source().request_count(), 0);
}

#[test]
fn test_add_event_before_load() {
    let mut calendar = Calendar::new(MockSource::with_events(events()), clock());
    let event = Event::parse("Event", "2018-07-20", "2018-07-20").unwrap();

    calendar.add_event(event.clone());

    assert_eq!(calendar.events().len(), 1);
    assert!(calendar.events().contains(&event));
}

#[tokio::test]
async fn test_add_event_appends() {
    let mut calendar = Calendar::mount(MockSource::with_events(events()), clock()).await;
    let before = calendar.events().to_vec();
    let event = Event::parse("Event 3", "2018-07-01", "2018-07-02").unwrap();

    calendar.add_event(event.clone());

    assert_eq!(calendar.events().len(), before.len() + 1);
    assert_eq!(&calendar.events()[..before.len()], &before[..]);
    assert_eq!(calendar.events().last(), Some(&event));
    assert_eq!(calendar.first_day(), Some(date("2018-07-01")));
    assert_eq!(calendar.days_count(), 18);
}

#[test]
fn test_today() {
    let calendar = Calendar::new(MockSource::with_events(Vec::new()), clock());
    assert_eq!(calendar.today(), date("2018-07-16"));
    assert_eq!(calendar.today().to_string(), "2018-07-16");

    // The clock is only read at creation, any clock can be used
    let boxed: Box<dyn Clock> = Box::new(FixedClock::new(date("2019-01-01")));
    let calendar = Calendar::new(MockSource::with_events(Vec::new()), boxed);
    assert_eq!(calendar.today(), date("2019-01-01"));
}

#[tokio::test]
async fn test_failed_reload_keeps_events() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut calendar = Calendar::mount(MockSource::with_events(events()), clock()).await;
    assert_eq!(calendar.events().len(), 2);

    calendar.source().set_behaviour(MockBehaviour::fail_now(1));
    let result = calendar.load().await;
    assert!(matches!(result, Err(FetchError::Mocked(_))));
    assert!(calendar.has_fetch_error());
    assert_eq!(calendar.events(), &events()[..]);

    // The next successful load clears the error, and replaces the events
    calendar.add_event(Event::parse("Local", "2018-08-01", "2018-08-01").unwrap());
    calendar.load().await.unwrap();
    assert!(calendar.has_fetch_error() == false);
    assert_eq!(calendar.events(), &events()[..]);
    assert_eq!(calendar.source().request_count(), 3);
}

#[tokio::test]
async fn test_load_feedback() {
    let (sender, receiver) = feedback_channel();

    let mut calendar = Calendar::new(MockSource::with_events(events()), clock());
    calendar.load_with_feedback(sender).await.unwrap();
    assert_eq!(*receiver.borrow(), LoadEvent::Finished{ success: true, events: 2 });

    let (sender, receiver) = feedback_channel();
    let mut failing = Calendar::new(MockSource::with_status(500), clock());
    assert!(matches!(failing.load_with_feedback(sender).await, Err(FetchError::Status(500))));
    assert_eq!(*receiver.borrow(), LoadEvent::Finished{ success: false, events: 0 });
}

#[tokio::test]
async fn test_new_event_form() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut calendar = Calendar::mount(MockSource::with_events(events()), clock()).await;
    assert!(calendar.is_new_event_open() == false);
    assert!(calendar.render().contains("Title:") == false);

    calendar.toggle_new_event();
    assert!(calendar.is_new_event_open());
    assert!(calendar.render().contains("Title:"));

    // An invalid form is rejected and stays open
    if let Some(form) = calendar.new_event_form_mut() {
        form.title = "Concert".to_string();
        form.start_date = "2018-07-21".to_string();
        form.end_date = "2018-07-19".to_string();
    }
    assert!(matches!(calendar.submit_new_event(), Err(MalformedEventError::InvertedRange{ .. })));
    assert!(calendar.is_new_event_open());
    assert_eq!(calendar.events().len(), 2);

    if let Some(form) = calendar.new_event_form_mut() {
        form.end_date = "2018-07-22".to_string();
    }
    calendar.submit_new_event().unwrap();
    assert!(calendar.is_new_event_open() == false);
    assert_eq!(calendar.events().len(), 3);
    assert_eq!(calendar.last_day(), Some(date("2018-07-22")));

    // Nothing to submit
    calendar.submit_new_event().unwrap();
    assert_eq!(calendar.events().len(), 3);

    // Toggling twice discards what was typed in
    calendar.toggle_new_event();
    if let Some(form) = calendar.new_event_form_mut() {
        form.title = "Draft".to_string();
    }
    calendar.toggle_new_event();
    calendar.toggle_new_event();
    assert_eq!(calendar.new_event_form().map(|form| form.title.as_str()), Some(""));
}

#[tokio::test]
async fn test_render_cells() {
    let calendar = Calendar::mount(MockSource::with_events(events()), clock()).await;
    let text = calendar.render();

    assert!(text.starts_with("Events Calendar\n"));
    // Day cells, today being marked
    assert!(text.contains("14  15  16* 17  18"));
    // Event cells
    assert!(text.contains("Event 1"));
    assert!(text.contains("Event 2"));
    assert!(text.contains("error while fetching the events") == false);
}
