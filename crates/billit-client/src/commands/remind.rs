use std::path::Path;

use chrono::NaiveDate;

use crate::ClientResult;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{ReminderRow, RemindData};
use crate::date::format_iso_date;
use crate::reminder::{RecordingNotifier, relay_reminders};
use crate::setup::open_store;

pub fn run(today: NaiveDate) -> ClientResult<SuccessEnvelope> {
    run_with_home_override(today, None)
}

/// The front end is the notifier here: reminders are collected and returned
/// in the envelope for it to display.
#[doc(hidden)]
pub fn run_with_home_override(
    today: NaiveDate,
    home_override: Option<&Path>,
) -> ClientResult<SuccessEnvelope> {
    let store = open_store(home_override)?;
    let mut notifier = RecordingNotifier::default();
    let delivered = relay_reminders(&store, today, &mut notifier)?;

    success(
        "remind",
        RemindData {
            today: format_iso_date(&today),
            delivered,
            reminders: notifier.delivered.iter().map(ReminderRow::from).collect(),
        },
    )
}
