use std::io;

use serde_json::Value;

pub fn render_remind(data: &Value) -> io::Result<String> {
    let today = data.get("today").and_then(Value::as_str).unwrap_or("");
    let reminders = data
        .get("reminders")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();

    if reminders.is_empty() {
        return Ok(format!("No reminders for {today}."));
    }

    let mut blocks = Vec::with_capacity(reminders.len());
    for reminder in &reminders {
        let heading = reminder.get("heading").and_then(Value::as_str).unwrap_or("");
        let message = reminder.get("message").and_then(Value::as_str).unwrap_or("");
        blocks.push(format!("{heading}\n  {message}"));
    }
    Ok(blocks.join("\n\n"))
}
