use std::io;

use serde_json::Value;

use super::format::{Align, Column, key_value_rows, render_table};

const LIST_COLUMNS: [Column<'static>; 5] = [
    Column {
        name: "ID",
        align: Align::Right,
    },
    Column {
        name: "Due",
        align: Align::Left,
    },
    Column {
        name: "Amount",
        align: Align::Right,
    },
    Column {
        name: "Title",
        align: Align::Left,
    },
    Column {
        name: "Reminder",
        align: Align::Left,
    },
];

pub fn render_bill_write(data: &Value) -> io::Result<String> {
    let message = text_field(data, "message");
    let bill = data.get("bill").unwrap_or(&Value::Null);

    let mut lines = vec![message, String::new()];
    lines.extend(bill_detail_rows(bill));
    Ok(lines.join("\n"))
}

pub fn render_bill_show(data: &Value) -> io::Result<String> {
    let bill = data.get("bill").unwrap_or(&Value::Null);
    let mut lines = vec![format!("Bill {}", number_field(bill, "id")), String::new()];
    lines.extend(bill_detail_rows(bill));
    Ok(lines.join("\n"))
}

pub fn render_bill_delete(data: &Value) -> io::Result<String> {
    Ok(format!("Deleted bill {}.", number_field(data, "bill_id")))
}

pub fn render_bill_clear(data: &Value) -> io::Result<String> {
    let deleted = number_field(data, "deleted");
    Ok(format!("Deleted {deleted} bills. Your list is empty."))
}

pub fn render_bill_count(data: &Value) -> io::Result<String> {
    let mut lines = vec![text_field(data, "message")];
    let titles = data
        .get("titles")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();
    for title in titles.iter().filter_map(Value::as_str) {
        lines.push(format!("  {title}"));
    }
    Ok(lines.join("\n"))
}

pub fn render_bill_list(data: &Value) -> io::Result<String> {
    let title = text_field(data, "title");
    let rows = data
        .get("rows")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();

    let mut lines = vec![title];
    if let (Some(from), Some(to)) = (
        data.get("from").and_then(Value::as_str),
        data.get("to").and_then(Value::as_str),
    ) {
        lines.push(format!("  {from} to {to}"));
    }
    lines.push(String::new());

    if rows.is_empty() {
        lines.push("  No bills found.".to_string());
        lines.push(String::new());
        lines.push("Add one with `billit add --help`.".to_string());
        return Ok(lines.join("\n"));
    }

    let cells = rows
        .iter()
        .map(|row| {
            vec![
                number_field(row, "id"),
                text_field(row, "due_date"),
                format!("${}", text_field(row, "amount")),
                text_field(row, "title"),
                text_field(row, "notification"),
            ]
        })
        .collect::<Vec<Vec<String>>>();
    lines.extend(render_table(&LIST_COLUMNS, &cells));
    Ok(lines.join("\n"))
}

fn bill_detail_rows(bill: &Value) -> Vec<String> {
    key_value_rows(
        &[
            ("Title", text_field(bill, "title")),
            ("Amount", format!("${}", text_field(bill, "amount"))),
            ("Due date", text_field(bill, "due_date")),
            ("Reminder", text_field(bill, "notification")),
        ],
        2,
    )
}

fn text_field(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string()
}

fn number_field(value: &Value, key: &str) -> String {
    value
        .get(key)
        .map(|field| match field {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{render_bill_count, render_bill_list, render_bill_write};

    fn rent_row() -> serde_json::Value {
        json!({
            "id": 3,
            "title": "Rent",
            "amount": "1200",
            "due_date": "2024-03-15",
            "notification": "1 Week Before Due",
            "notification_key": "1-week"
        })
    }

    #[test]
    fn list_renders_title_window_and_table() {
        let data = json!({
            "range": "week",
            "title": "Bills Due In A Week",
            "today": "2024-03-08",
            "from": "2024-03-08",
            "to": "2024-03-15",
            "rows": [rent_row()]
        });

        let rendered = render_bill_list(&data);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            let lines = text.lines().collect::<Vec<&str>>();
            assert_eq!(lines[0], "Bills Due In A Week");
            assert_eq!(lines[1], "  2024-03-08 to 2024-03-15");
            assert!(lines[3].starts_with("  ID"));
            assert!(lines[4].contains("$1200"));
            assert!(lines[4].contains("Rent"));
        }
    }

    #[test]
    fn empty_list_points_to_add() {
        let data = json!({
            "range": "all",
            "title": "All Entered Bills",
            "today": "2024-03-08",
            "rows": []
        });

        let rendered = render_bill_list(&data);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.starts_with("All Entered Bills\n\n"));
            assert!(text.contains("No bills found."));
        }
    }

    #[test]
    fn write_renders_message_then_details() {
        let data = json!({"message": "Bill `Rent` saved.", "bill": rent_row()});
        let rendered = render_bill_write(&data);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.starts_with("Bill `Rent` saved."));
            assert!(text.contains("  Due date  2024-03-15"));
        }
    }

    #[test]
    fn count_renders_message_then_titles() {
        let data = json!({
            "count": 2,
            "message": "You Have 2 Bills On Your List",
            "titles": ["Rent", "Gym"]
        });
        let rendered = render_bill_count(&data);
        assert!(matches!(
            rendered,
            Ok(ref text) if text == "You Have 2 Bills On Your List\n  Rent\n  Gym"
        ));
    }
}
