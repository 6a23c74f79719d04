mod support;

use billit_client::reminder::{RecordingNotifier, relay_reminders};
use billit_client::{BillStore, ClientError, ClientResult, Notifier, NotificationPreference, Reminder};
use support::bill_testkit::{day, draft, insert_all};

struct FailingNotifier;

impl Notifier for FailingNotifier {
    fn notify(&mut self, _reminder: &Reminder) -> ClientResult<()> {
        Err(ClientError::notifier_failed("display unavailable"))
    }
}

fn seeded_store() -> Option<BillStore> {
    let store = BillStore::open_in_memory();
    assert!(store.is_ok());
    let mut store = store.ok()?;
    insert_all(
        &mut store,
        &[
            draft(
                "Rent",
                "1200",
                "2024-03-15",
                NotificationPreference::OneWeekBefore,
            ),
            draft(
                "Phone",
                "45.99",
                "2024-03-11",
                NotificationPreference::ThreeDaysBefore,
            ),
            draft(
                "Gym",
                "30",
                "2024-03-15",
                NotificationPreference::None,
            ),
        ],
    );
    Some(store)
}

#[test]
fn rent_reminder_fires_exactly_one_week_ahead() {
    let store = seeded_store();
    assert!(store.is_some());
    if let Some(store) = store {
        for (today, expected) in [("2024-03-07", 0), ("2024-03-08", 2), ("2024-03-09", 0)] {
            let mut notifier = RecordingNotifier::default();
            let delivered = relay_reminders(&store, day(today), &mut notifier);
            assert!(matches!(delivered, Ok(count) if count == expected), "day {today}");
            assert_eq!(notifier.delivered.len(), expected);
        }
    }
}

#[test]
fn reminders_arrive_in_due_date_order_with_message_text() {
    let store = seeded_store();
    assert!(store.is_some());
    if let Some(store) = store {
        let mut notifier = RecordingNotifier::default();
        let delivered = relay_reminders(&store, day("2024-03-08"), &mut notifier);
        assert!(matches!(delivered, Ok(2)));

        let titles = notifier
            .delivered
            .iter()
            .map(|reminder| reminder.title.as_str())
            .collect::<Vec<&str>>();
        assert_eq!(titles, vec!["Phone", "Rent"]);
        assert_eq!(
            notifier.delivered[1].message(),
            "Amount : $1200 for Rent by 2024-03-15"
        );
    }
}

#[test]
fn missed_reminder_day_is_not_caught_up() {
    let store = seeded_store();
    assert!(store.is_some());
    if let Some(store) = store {
        let mut notifier = RecordingNotifier::default();
        let delivered = relay_reminders(&store, day("2024-03-10"), &mut notifier);
        assert!(matches!(delivered, Ok(0)));
    }
}

#[test]
fn notifier_failure_propagates_to_the_caller() {
    let store = seeded_store();
    assert!(store.is_some());
    if let Some(store) = store {
        let mut notifier = FailingNotifier;
        let result = relay_reminders(&store, day("2024-03-08"), &mut notifier);
        assert!(result.is_err());
        if let Err(error) = result {
            assert_eq!(error.code, "notifier_failed");
        }
    }
}
