use std::path::Path;

use serde_json::{Value, json};
use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ClientError {
    pub code: String,
    pub message: String,
    pub recovery_steps: Vec<String>,
    pub data: Option<Value>,
}

impl ClientError {
    pub fn new(code: &str, message: &str, recovery_steps: Vec<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            recovery_steps,
            data: None,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn invalid_argument(message: &str) -> Self {
        Self::invalid_argument_for_command(message, None)
    }

    pub fn invalid_argument_for_command(message: &str, command: Option<&str>) -> Self {
        let help_hint = match command {
            Some(cmd) => format!("Run `billit {cmd} --help` for usage."),
            None => "Run `billit --help` for usage.".to_string(),
        };
        let error = Self::new("invalid_argument", message, vec![help_hint]);
        if let Some(cmd) = command {
            return error.with_data(json!({
                "command_hint": cmd,
            }));
        }
        error
    }

    pub fn invalid_argument_with_recovery(message: &str, recovery_steps: Vec<String>) -> Self {
        Self::new("invalid_argument", message, recovery_steps)
    }

    /// Raised before any write when one or more form fields are blank.
    pub fn validation_failed(missing_fields: &[&str]) -> Self {
        Self::new(
            "validation_failed",
            &format!(
                "Please fill in all fields before saving the bill (missing: {}).",
                missing_fields.join(", ")
            ),
            vec![
                "Provide a title, an amount, a due date, and a notification choice.".to_string(),
                "Run `billit add --help` to see the expected formats.".to_string(),
            ],
        )
        .with_data(json!({
            "missing_fields": missing_fields,
        }))
    }

    pub fn bill_not_found(bill_id: i64) -> Self {
        Self::new(
            "bill_not_found",
            &format!("Bill id `{bill_id}` was not found."),
            vec![
                "Run `billit list` to find a valid bill id.".to_string(),
                "Retry the command with that id.".to_string(),
            ],
        )
        .with_data(json!({
            "bill_id": bill_id,
        }))
    }

    pub fn internal_serialization(message: &str) -> Self {
        Self::new("internal_serialization_error", message, Vec::new())
    }

    pub fn store_permission_denied(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "store_permission_denied",
            &format!("Cannot open bill store at `{location}`: {detail}"),
            vec![format!(
                "Grant write access to `{location}` or set `BILLIT_HOME` to a writable directory."
            )],
        )
    }

    pub fn store_locked(path: &Path) -> Self {
        let location = path.display().to_string();
        Self::new(
            "store_locked",
            &format!("Bill store is locked at `{location}`."),
            vec![format!(
                "Close other processes using `{location}` so the lock is released."
            )],
        )
    }

    pub fn store_corrupt(path: &Path) -> Self {
        let location = path.display().to_string();
        Self::new(
            "store_corrupt",
            &format!("Bill store appears corrupt at `{location}`."),
            vec![format!(
                "Replace `{location}` with a valid bill database or restore from backup."
            )],
        )
    }

    pub fn store_row_corrupt(path: &Path, bill_id: i64, detail: &str) -> Self {
        Self::store_corrupt(path).with_data(json!({
            "bill_id": bill_id,
            "detail": detail,
        }))
    }

    pub fn migration_failed(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "migration_failed",
            &format!("Bill store migration failed at `{location}`: {detail}"),
            vec!["Resolve conflicting schema objects referenced in the error details.".to_string()],
        )
    }

    pub fn store_init_failed(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "store_init_failed",
            &format!("Bill store operation failed at `{location}`: {detail}"),
            Vec::new(),
        )
    }

    pub fn notifier_failed(detail: &str) -> Self {
        Self::new(
            "notifier_failed",
            &format!("Reminder could not be delivered: {detail}"),
            vec!["Retry `billit remind` once the notifier is available.".to_string()],
        )
    }

    /// Storage-layer failures are fatal to the operation; everything else is
    /// something the user can fix and retry.
    pub fn is_storage_failure(&self) -> bool {
        self.code.starts_with("internal_")
            || matches!(
                self.code.as_str(),
                "store_permission_denied"
                    | "store_locked"
                    | "store_corrupt"
                    | "migration_failed"
                    | "store_init_failed"
            )
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
