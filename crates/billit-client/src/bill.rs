use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::date::{format_iso_date, month_window, week_window};

/// Money owed on a bill. Kept as a decimal in memory and as its canonical
/// text on disk, so `12.50` round-trips as `12.50`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(Decimal);

impl Amount {
    pub const fn new(value: Decimal) -> Self {
        Self(value)
    }

    pub const fn value(self) -> Decimal {
        self.0
    }

    /// Accepts plain decimals (digits with at most one `.`) and an optional
    /// leading `$`. Signs, exponents, separators and values that would lose
    /// precision are rejected rather than rewritten.
    pub fn parse(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        let digits = trimmed.strip_prefix('$').unwrap_or(trimmed).trim();
        if !is_plain_decimal(digits) {
            return None;
        }
        Decimal::from_str_exact(digits).ok().map(Self)
    }
}

fn is_plain_decimal(text: &str) -> bool {
    let mut seen_digit = false;
    let mut seen_point = false;
    for byte in text.bytes() {
        match byte {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_point => seen_point = true,
            _ => return false,
        }
    }
    seen_digit
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How many days ahead of the due date a reminder should fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationPreference {
    None,
    ThreeDaysBefore,
    FiveDaysBefore,
    OneWeekBefore,
    TwoWeeksBefore,
}

impl NotificationPreference {
    pub const ALL: [Self; 5] = [
        Self::None,
        Self::ThreeDaysBefore,
        Self::FiveDaysBefore,
        Self::OneWeekBefore,
        Self::TwoWeeksBefore,
    ];

    /// Label written to the `notification` column.
    pub const fn as_label(self) -> &'static str {
        match self {
            Self::None => "No Notifications",
            Self::ThreeDaysBefore => "3 Days Before Due",
            Self::FiveDaysBefore => "5 Days Before Due",
            Self::OneWeekBefore => "1 Week Before Due",
            Self::TwoWeeksBefore => "2 Weeks Before Due",
        }
    }

    /// Short key accepted on the command line and emitted in JSON.
    pub const fn as_key(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::ThreeDaysBefore => "3-days",
            Self::FiveDaysBefore => "5-days",
            Self::OneWeekBefore => "1-week",
            Self::TwoWeeksBefore => "2-weeks",
        }
    }

    pub const fn offset_days(self) -> Option<i64> {
        match self {
            Self::None => None,
            Self::ThreeDaysBefore => Some(3),
            Self::FiveDaysBefore => Some(5),
            Self::OneWeekBefore => Some(7),
            Self::TwoWeeksBefore => Some(14),
        }
    }

    /// Exact match against the persisted label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|preference| preference.as_label() == label)
    }

    /// Case-insensitive match against either the label or the short key.
    pub fn parse(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        Self::ALL.into_iter().find(|preference| {
            preference.as_label().eq_ignore_ascii_case(trimmed)
                || preference.as_key().eq_ignore_ascii_case(trimmed)
        })
    }

    pub fn accepted_keys() -> Vec<&'static str> {
        Self::ALL.iter().map(|preference| preference.as_key()).collect()
    }
}

impl fmt::Display for NotificationPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}

/// Validated field values for a create or update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillDraft {
    pub title: String,
    pub amount: Amount,
    pub due_date: NaiveDate,
    pub notification: NotificationPreference,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillRecord {
    pub id: i64,
    pub title: String,
    pub amount: Amount,
    pub due_date: NaiveDate,
    pub notification: NotificationPreference,
}

impl BillRecord {
    pub fn due_date_text(&self) -> String {
        format_iso_date(&self.due_date)
    }
}

/// Which slice of the bill list to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BillRange {
    #[default]
    All,
    ThisWeek,
    ThisMonth,
}

impl BillRange {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::ThisWeek => "week",
            Self::ThisMonth => "month",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::All => "All Entered Bills",
            Self::ThisWeek => "Bills Due In A Week",
            Self::ThisMonth => "Bills Due In A Month",
        }
    }

    /// Inclusive due-date bounds, or `None` for the unfiltered list.
    pub fn window(self, today: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
        match self {
            Self::All => None,
            Self::ThisWeek => Some(week_window(today)),
            Self::ThisMonth => Some(month_window(today)),
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Some(Self::All),
            "week" | "this-week" => Some(Self::ThisWeek),
            "month" | "this-month" => Some(Self::ThisMonth),
            _ => None,
        }
    }
}
