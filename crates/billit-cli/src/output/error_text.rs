use billit_client::ClientError;
use serde_json::Value;

pub fn render_error(error: &ClientError) -> String {
    let mut lines = vec![
        "Something went wrong, but it's easy to fix.".to_string(),
        String::new(),
        format!("  Error:    {}", error.code),
        format!("  Details:  {}", error.message),
    ];

    let missing = missing_fields(error);
    if !missing.is_empty() {
        lines.push(format!("  Missing:  {}", missing.join(", ")));
    }

    lines.push(String::new());
    lines.push("What to do next:".to_string());
    if error.recovery_steps.is_empty() {
        lines.push("  1. Retry the command.".to_string());
    } else {
        for (index, step) in error.recovery_steps.iter().enumerate() {
            lines.push(format!("  {}. {step}", index + 1));
        }
    }

    lines.join("\n")
}

fn missing_fields(error: &ClientError) -> Vec<&str> {
    error
        .data
        .as_ref()
        .and_then(|data| data.get("missing_fields"))
        .and_then(Value::as_array)
        .map(|fields| fields.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use billit_client::ClientError;

    use super::render_error;

    #[test]
    fn renders_standard_error_layout() {
        let error = ClientError::invalid_argument_with_recovery(
            "bad input",
            vec!["run billit --help".to_string()],
        );

        let rendered = render_error(&error);
        assert!(rendered.starts_with("Something went wrong, but it's easy to fix."));
        assert!(rendered.contains("  Error:    invalid_argument"));
        assert!(rendered.contains("  Details:  bad input"));
        assert!(rendered.contains("What to do next:"));
        assert!(rendered.contains("  1. run billit --help"));
        assert!(!rendered.contains("Missing:"));
    }

    #[test]
    fn validation_errors_list_missing_fields() {
        let error = ClientError::validation_failed(&["title", "notification"]);
        let rendered = render_error(&error);
        assert!(rendered.contains("  Error:    validation_failed"));
        assert!(rendered.contains("  Missing:  title, notification"));
    }
}
