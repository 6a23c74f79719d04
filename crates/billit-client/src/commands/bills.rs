use std::path::Path;

use chrono::NaiveDate;
use tracing::info;

use crate::bill::BillRange;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{
    BillClearData, BillCountData, BillDeleteData, BillListData, BillRow, BillShowData,
    BillWriteData,
};
use crate::date::format_iso_date;
use crate::setup::open_store;
use crate::validate::{BillFieldsInput, validate_bill_fields};
use crate::{ClientError, ClientResult};

pub fn add(fields: BillFieldsInput<'_>) -> ClientResult<SuccessEnvelope> {
    add_with_home_override(fields, None)
}

#[doc(hidden)]
pub fn add_with_home_override(
    fields: BillFieldsInput<'_>,
    home_override: Option<&Path>,
) -> ClientResult<SuccessEnvelope> {
    let draft = validate_bill_fields(fields)?;
    let mut store = open_store(home_override)?;
    let bill_id = store.create(&draft)?;
    let bill = store
        .get(bill_id)?
        .ok_or_else(|| ClientError::bill_not_found(bill_id))?;
    info!(bill_id, "bill added");

    success(
        "bill add",
        BillWriteData {
            message: format!("Bill `{}` saved.", bill.title),
            bill: BillRow::from(&bill),
        },
    )
}

pub fn edit(bill_id: i64, fields: BillFieldsInput<'_>) -> ClientResult<SuccessEnvelope> {
    edit_with_home_override(bill_id, fields, None)
}

#[doc(hidden)]
pub fn edit_with_home_override(
    bill_id: i64,
    fields: BillFieldsInput<'_>,
    home_override: Option<&Path>,
) -> ClientResult<SuccessEnvelope> {
    let draft = validate_bill_fields(fields)?;
    let mut store = open_store(home_override)?;
    if store.update(bill_id, &draft)? == 0 {
        return Err(ClientError::bill_not_found(bill_id));
    }
    let bill = store
        .get(bill_id)?
        .ok_or_else(|| ClientError::bill_not_found(bill_id))?;

    success(
        "bill edit",
        BillWriteData {
            message: format!("Bill `{}` updated.", bill.title),
            bill: BillRow::from(&bill),
        },
    )
}

pub fn delete(bill_id: i64) -> ClientResult<SuccessEnvelope> {
    delete_with_home_override(bill_id, None)
}

#[doc(hidden)]
pub fn delete_with_home_override(
    bill_id: i64,
    home_override: Option<&Path>,
) -> ClientResult<SuccessEnvelope> {
    let mut store = open_store(home_override)?;
    let deleted = store.delete(bill_id)?;
    if deleted == 0 {
        return Err(ClientError::bill_not_found(bill_id));
    }
    success("bill delete", BillDeleteData { bill_id, deleted })
}

pub fn clear() -> ClientResult<SuccessEnvelope> {
    clear_with_home_override(None)
}

#[doc(hidden)]
pub fn clear_with_home_override(home_override: Option<&Path>) -> ClientResult<SuccessEnvelope> {
    let mut store = open_store(home_override)?;
    let deleted = store.delete_all()?;
    success("bill clear", BillClearData { deleted })
}

pub fn show(bill_id: i64) -> ClientResult<SuccessEnvelope> {
    show_with_home_override(bill_id, None)
}

#[doc(hidden)]
pub fn show_with_home_override(
    bill_id: i64,
    home_override: Option<&Path>,
) -> ClientResult<SuccessEnvelope> {
    let store = open_store(home_override)?;
    let bill = store
        .get(bill_id)?
        .ok_or_else(|| ClientError::bill_not_found(bill_id))?;
    success(
        "bill show",
        BillShowData {
            bill: BillRow::from(&bill),
        },
    )
}

pub fn list(range: BillRange, today: NaiveDate) -> ClientResult<SuccessEnvelope> {
    list_with_home_override(range, today, None)
}

#[doc(hidden)]
pub fn list_with_home_override(
    range: BillRange,
    today: NaiveDate,
    home_override: Option<&Path>,
) -> ClientResult<SuccessEnvelope> {
    let store = open_store(home_override)?;
    let bills = store.get_for(range, today)?;
    let window = range.window(today);

    success(
        "bill list",
        BillListData {
            range: range.as_str().to_string(),
            title: range.title().to_string(),
            today: format_iso_date(&today),
            from: window.map(|(start, _)| format_iso_date(&start)),
            to: window.map(|(_, end)| format_iso_date(&end)),
            rows: bills.iter().map(BillRow::from).collect(),
        },
    )
}

pub fn count() -> ClientResult<SuccessEnvelope> {
    count_with_home_override(None)
}

#[doc(hidden)]
pub fn count_with_home_override(home_override: Option<&Path>) -> ClientResult<SuccessEnvelope> {
    let store = open_store(home_override)?;
    let count = store.count()?;
    let titles = store.titles()?;
    success(
        "bill count",
        BillCountData {
            count,
            message: format!("You Have {count} Bills On Your List"),
            titles,
        },
    )
}
