#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use billit_client::{Amount, BillDraft, BillStore, NotificationPreference};
use chrono::NaiveDate;
use tempfile::{Builder, TempDir};

pub fn temp_home_in_tmp(prefix: &str) -> std::io::Result<(TempDir, PathBuf)> {
    let dir = Builder::new().prefix(prefix).tempdir()?;
    let home = dir.path().join("billit-home");
    fs::create_dir_all(&home)?;
    Ok((dir, home))
}

pub fn day(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap_or_default()
}

pub fn draft(
    title: &str,
    amount: &str,
    due_date: &str,
    notification: NotificationPreference,
) -> BillDraft {
    BillDraft {
        title: title.to_string(),
        amount: Amount::parse(amount).unwrap_or_default(),
        due_date: day(due_date),
        notification,
    }
}

pub fn plain(title: &str, due_date: &str) -> BillDraft {
    draft(title, "10.00", due_date, NotificationPreference::None)
}

pub fn insert_all(store: &mut BillStore, drafts: &[BillDraft]) -> Vec<i64> {
    let mut ids = Vec::new();
    for item in drafts {
        let created = store.create(item);
        assert!(created.is_ok());
        if let Ok(id) = created {
            ids.push(id);
        }
    }
    ids
}

pub fn due_dates(store: &BillStore) -> Vec<String> {
    let bills = store.get_all();
    assert!(bills.is_ok());
    bills
        .map(|rows| rows.iter().map(|bill| bill.due_date_text()).collect())
        .unwrap_or_default()
}
