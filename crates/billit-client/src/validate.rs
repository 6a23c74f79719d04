use crate::bill::{Amount, BillDraft, NotificationPreference};
use crate::date::parse_iso_date_strict;
use crate::{ClientError, ClientResult};

/// Raw form values as the user typed them.
#[derive(Debug, Clone, Copy, Default)]
pub struct BillFieldsInput<'a> {
    pub title: &'a str,
    pub amount: &'a str,
    pub due_date: &'a str,
    pub notification: &'a str,
}

/// Gatekeeper for every write: blank fields are rejected as a group before
/// any typed parsing happens, and the store is never reached on failure.
pub fn validate_bill_fields(input: BillFieldsInput<'_>) -> ClientResult<BillDraft> {
    let title = input.title.trim();
    let amount = input.amount.trim();
    let due_date = input.due_date.trim();
    let notification = input.notification.trim();

    let missing_fields = [
        ("title", title),
        ("amount", amount),
        ("due_date", due_date),
        ("notification", notification),
    ]
    .into_iter()
    .filter(|(_, value)| value.is_empty())
    .map(|(name, _)| name)
    .collect::<Vec<&str>>();

    if !missing_fields.is_empty() {
        return Err(ClientError::validation_failed(&missing_fields));
    }

    let parsed_amount = Amount::parse(amount).ok_or_else(|| {
        ClientError::invalid_argument_with_recovery(
            &format!("`amount` must be a non-negative number, got `{amount}`."),
            vec!["Use a plain number such as `1200` or `45.99`.".to_string()],
        )
    })?;
    let parsed_due_date = parse_iso_date_strict(due_date, "due_date")?;
    let parsed_notification = NotificationPreference::parse(notification).ok_or_else(|| {
        ClientError::invalid_argument_with_recovery(
            &format!("`notification` must be a known reminder choice, got `{notification}`."),
            vec![format!(
                "Use one of: {}.",
                NotificationPreference::accepted_keys().join(", ")
            )],
        )
    })?;

    Ok(BillDraft {
        title: title.to_string(),
        amount: parsed_amount,
        due_date: parsed_due_date,
        notification: parsed_notification,
    })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{BillFieldsInput, validate_bill_fields};
    use crate::bill::NotificationPreference;

    fn rent_input<'a>() -> BillFieldsInput<'a> {
        BillFieldsInput {
            title: "Rent",
            amount: "1200",
            due_date: "2024-03-15",
            notification: "1 Week Before Due",
        }
    }

    #[test]
    fn complete_input_becomes_typed_draft() {
        let draft = validate_bill_fields(rent_input());
        assert!(draft.is_ok());
        if let Ok(draft) = draft {
            assert_eq!(draft.title, "Rent");
            assert_eq!(draft.amount.to_string(), "1200");
            assert_eq!(Some(draft.due_date), NaiveDate::from_ymd_opt(2024, 3, 15));
            assert_eq!(draft.notification, NotificationPreference::OneWeekBefore);
        }
    }

    #[test]
    fn every_blank_field_is_reported_together() {
        let result = validate_bill_fields(BillFieldsInput {
            title: "  ",
            amount: "",
            due_date: "2024-03-15",
            notification: "",
        });
        assert!(result.is_err());
        if let Err(error) = result {
            assert_eq!(error.code, "validation_failed");
            let missing = error
                .data
                .as_ref()
                .and_then(|data| data.get("missing_fields"))
                .cloned();
            assert_eq!(
                missing,
                Some(serde_json::json!(["title", "amount", "notification"]))
            );
        }
    }

    #[test]
    fn blank_check_runs_before_format_checks() {
        let result = validate_bill_fields(BillFieldsInput {
            title: "",
            amount: "not money",
            due_date: "soon",
            notification: "whenever",
        });
        assert!(matches!(result, Err(error) if error.code == "validation_failed"));
    }

    #[test]
    fn malformed_fields_are_invalid_arguments() {
        let bad_amount = validate_bill_fields(BillFieldsInput {
            amount: "a lot",
            ..rent_input()
        });
        assert!(matches!(bad_amount, Err(ref error) if error.message.contains("amount")));

        let bad_date = validate_bill_fields(BillFieldsInput {
            due_date: "2024-3-15",
            ..rent_input()
        });
        assert!(matches!(bad_date, Err(ref error) if error.message.contains("due_date")));

        let bad_choice = validate_bill_fields(BillFieldsInput {
            notification: "4 Days Before Due",
            ..rent_input()
        });
        assert!(matches!(bad_choice, Err(ref error) if error.code == "invalid_argument"));
    }

    #[test]
    fn amounts_that_would_be_rewritten_never_reach_a_draft() {
        for amount in ["-0.00", "1e3", "1_000", "0.00000000000000000000000000001"] {
            let result = validate_bill_fields(BillFieldsInput {
                amount,
                ..rent_input()
            });
            assert!(
                matches!(result, Err(ref error) if error.code == "invalid_argument"),
                "{amount}"
            );
        }
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let draft = validate_bill_fields(BillFieldsInput {
            title: "  Water  ",
            amount: " 45.99 ",
            due_date: " 2024-04-01 ",
            notification: " none ",
        });
        assert!(draft.is_ok());
        if let Ok(draft) = draft {
            assert_eq!(draft.title, "Water");
            assert_eq!(draft.notification, NotificationPreference::None);
        }
    }
}
