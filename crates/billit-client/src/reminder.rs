//! Due-date reminders.
//!
//! A reminder fires only on the single day where `today + offset` equals the
//! bill's due date. A day on which nobody runs the check is simply missed;
//! there is no catch-up for reminders whose day has already passed.

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::ClientResult;
use crate::bill::{Amount, BillRecord, NotificationPreference};
use crate::date::{add_days, format_iso_date};
use crate::store::BillStore;

pub const REMINDER_HEADING: &str = "You Have A Bill Due";

/// What gets handed to the notifier for one bill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    pub bill_id: i64,
    pub title: String,
    pub amount: Amount,
    pub due_date: NaiveDate,
}

impl Reminder {
    pub fn from_bill(bill: &BillRecord) -> Self {
        Self {
            bill_id: bill.id,
            title: bill.title.clone(),
            amount: bill.amount,
            due_date: bill.due_date,
        }
    }

    pub fn message(&self) -> String {
        format!(
            "Amount : ${} for {} by {}",
            self.amount,
            self.title,
            format_iso_date(&self.due_date)
        )
    }
}

/// Delivers reminders somewhere a person will see them.
pub trait Notifier {
    fn notify(&mut self, reminder: &Reminder) -> ClientResult<()>;
}

/// Collects reminders in memory.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub delivered: Vec<Reminder>,
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, reminder: &Reminder) -> ClientResult<()> {
        self.delivered.push(reminder.clone());
        Ok(())
    }
}

/// The day whose due bills should be announced today, if any.
pub fn reminder_date(today: NaiveDate, preference: NotificationPreference) -> Option<NaiveDate> {
    preference
        .offset_days()
        .map(|offset| add_days(today, offset))
}

pub fn should_notify(today: NaiveDate, bill: &BillRecord) -> bool {
    reminder_date(today, bill.notification) == Some(bill.due_date)
}

pub fn due_reminders(today: NaiveDate, bills: &[BillRecord]) -> Vec<Reminder> {
    bills
        .iter()
        .filter(|bill| should_notify(today, bill))
        .map(Reminder::from_bill)
        .collect()
}

/// One pass over every stored bill, handing each due reminder to `notifier`.
/// Returns how many reminders were delivered.
pub fn relay_reminders(
    store: &BillStore,
    today: NaiveDate,
    notifier: &mut dyn Notifier,
) -> ClientResult<usize> {
    let bills = store.get_all()?;
    let reminders = due_reminders(today, &bills);
    for reminder in &reminders {
        debug!(bill_id = reminder.bill_id, due_date = %reminder.due_date, "relaying reminder");
        notifier.notify(reminder)?;
    }
    info!(
        today = %today,
        scanned = bills.len(),
        delivered = reminders.len(),
        "reminder pass complete"
    );
    Ok(reminders.len())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{Reminder, due_reminders, reminder_date, should_notify};
    use crate::bill::{Amount, BillRecord, NotificationPreference};

    fn bill(due: &str, notification: NotificationPreference) -> Option<BillRecord> {
        Some(BillRecord {
            id: 1,
            title: "Rent".to_string(),
            amount: Amount::parse("1200")?,
            due_date: NaiveDate::parse_from_str(due, "%Y-%m-%d").ok()?,
            notification,
        })
    }

    fn day(value: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
    }

    #[test]
    fn fires_only_on_exact_offset_day() {
        let today = day("2024-03-01");
        let on_day = bill("2024-03-04", NotificationPreference::ThreeDaysBefore);
        let day_late = bill("2024-03-05", NotificationPreference::ThreeDaysBefore);
        let already_passed = bill("2024-03-03", NotificationPreference::ThreeDaysBefore);
        assert!(today.is_some() && on_day.is_some() && day_late.is_some());
        if let (Some(today), Some(on_day), Some(day_late), Some(already_passed)) =
            (today, on_day, day_late, already_passed)
        {
            assert!(should_notify(today, &on_day));
            assert!(!should_notify(today, &day_late));
            assert!(!should_notify(today, &already_passed));
        }
    }

    #[test]
    fn no_notification_preference_never_fires() {
        let bill_due_today = bill("2024-03-01", NotificationPreference::None);
        assert!(bill_due_today.is_some());
        if let Some(record) = bill_due_today {
            for offset in 0..30 {
                let today = record.due_date - chrono::Duration::days(offset);
                assert!(!should_notify(today, &record));
            }
        }
        let today = day("2024-03-01");
        assert!(today.is_some());
        if let Some(today) = today {
            assert_eq!(reminder_date(today, NotificationPreference::None), None);
        }
    }

    #[test]
    fn week_before_rent_fires_on_the_eighth_only() {
        let rent = bill("2024-03-15", NotificationPreference::OneWeekBefore);
        let days = (day("2024-03-07"), day("2024-03-08"), day("2024-03-09"));
        assert!(rent.is_some());
        if let (Some(rent), (Some(seventh), Some(eighth), Some(ninth))) = (rent, days) {
            assert!(!should_notify(seventh, &rent));
            assert!(should_notify(eighth, &rent));
            assert!(!should_notify(ninth, &rent));
        }
    }

    #[test]
    fn two_week_offset_crosses_month_boundary() {
        let record = bill("2024-02-05", NotificationPreference::TwoWeeksBefore);
        let today = day("2024-01-22");
        if let (Some(record), Some(today)) = (record, today) {
            assert!(should_notify(today, &record));
        }
    }

    #[test]
    fn due_reminders_keep_input_order_and_render_message() {
        let first = bill("2024-03-06", NotificationPreference::FiveDaysBefore);
        let skipped = bill("2024-03-20", NotificationPreference::FiveDaysBefore);
        let today = day("2024-03-01");
        assert!(first.is_some() && skipped.is_some() && today.is_some());
        if let (Some(first), Some(skipped), Some(today)) = (first, skipped, today) {
            let reminders = due_reminders(today, &[first.clone(), skipped]);
            assert_eq!(reminders, vec![Reminder::from_bill(&first)]);
            assert_eq!(
                reminders[0].message(),
                "Amount : $1200 for Rent by 2024-03-06"
            );
        }
    }
}
