use serde::Serialize;

use crate::bill::BillRecord;
use crate::date::format_iso_date;
use crate::reminder::{REMINDER_HEADING, Reminder};

#[derive(Debug, Clone, Serialize)]
pub struct BillRow {
    pub id: i64,
    pub title: String,
    pub amount: String,
    pub due_date: String,
    pub notification: String,
    pub notification_key: String,
}

impl From<&BillRecord> for BillRow {
    fn from(bill: &BillRecord) -> Self {
        Self {
            id: bill.id,
            title: bill.title.clone(),
            amount: bill.amount.to_string(),
            due_date: bill.due_date_text(),
            notification: bill.notification.as_label().to_string(),
            notification_key: bill.notification.as_key().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BillWriteData {
    pub message: String,
    pub bill: BillRow,
}

#[derive(Debug, Clone, Serialize)]
pub struct BillDeleteData {
    pub bill_id: i64,
    pub deleted: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct BillClearData {
    pub deleted: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct BillShowData {
    pub bill: BillRow,
}

#[derive(Debug, Clone, Serialize)]
pub struct BillListData {
    pub range: String,
    pub title: String,
    pub today: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    pub rows: Vec<BillRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BillCountData {
    pub count: u64,
    pub message: String,
    pub titles: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReminderRow {
    pub bill_id: i64,
    pub title: String,
    pub amount: String,
    pub due_date: String,
    pub heading: String,
    pub message: String,
}

impl From<&Reminder> for ReminderRow {
    fn from(reminder: &Reminder) -> Self {
        Self {
            bill_id: reminder.bill_id,
            title: reminder.title.clone(),
            amount: reminder.amount.to_string(),
            due_date: format_iso_date(&reminder.due_date),
            heading: REMINDER_HEADING.to_string(),
            message: reminder.message(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RemindData {
    pub today: String,
    pub delivered: usize,
    pub reminders: Vec<ReminderRow>,
}
