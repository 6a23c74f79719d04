use billit_client::BillRange;
use billit_client::date::parse_iso_date_strict;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IsoDate(pub NaiveDate);

impl IsoDate {
    pub fn date(self) -> NaiveDate {
        self.0
    }
}

/// Date flags share the client's `YYYY-MM-DD` rule.
pub fn parse_iso_date(value: &str) -> Result<IsoDate, String> {
    parse_iso_date_strict(value, "--today")
        .map(IsoDate)
        .map_err(|error| error.message)
}

pub fn parse_bill_range(value: &str) -> Result<BillRange, String> {
    BillRange::parse(value).ok_or_else(|| "range must be one of: all, week, month".to_string())
}

/// Extended help shown after `billit add --help` and `billit edit --help`.
pub const BILL_FIELDS_AFTER_HELP: &str = "\
Field rules:
  --title     Any non-empty text. Example: `Rent`
  --amount    A non-negative decimal, optional leading `$`. Example: `$1200.00`
  --due       Date only, exactly `YYYY-MM-DD`. Example: `2024-03-15`
  --notify    When to be reminded before the due date:
                none, 3-days, 5-days, 1-week, 2-weeks
              The full labels (`1 Week Before Due`) are accepted too.

Every field is required. Missing fields are reported together.
";

#[derive(Debug, Parser)]
#[command(
    name = "billit",
    version,
    about = "track bills and get reminded before they are due",
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Bill fields shared by `add` and `edit`. Empty values are left for the
/// client to report so every missing field shows up in one error.
#[derive(Debug, Clone, Args)]
pub struct BillFieldArgs {
    /// Bill title
    #[arg(long, default_value = "")]
    pub title: String,
    /// Amount owed, e.g. 45.99
    #[arg(long, default_value = "")]
    pub amount: String,
    /// Due date (YYYY-MM-DD)
    #[arg(long, default_value = "")]
    pub due: String,
    /// Reminder preference: none, 3-days, 5-days, 1-week, 2-weeks
    #[arg(long, default_value = "")]
    pub notify: String,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Add a bill
    #[command(after_help = BILL_FIELDS_AFTER_HELP)]
    Add {
        #[command(flatten)]
        fields: BillFieldArgs,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Replace every field of an existing bill
    #[command(after_help = BILL_FIELDS_AFTER_HELP)]
    Edit {
        /// Bill id (see `billit list`)
        id: i64,
        #[command(flatten)]
        fields: BillFieldArgs,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete one bill
    Delete {
        /// Bill id (see `billit list`)
        id: i64,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete every bill
    Clear {
        /// Confirm deleting every bill
        #[arg(long)]
        yes: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one bill
    Show {
        /// Bill id (see `billit list`)
        id: i64,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List bills ordered by due date
    List {
        /// Which bills to list: all, week, month
        #[arg(value_parser = parse_bill_range, default_value = "all")]
        range: BillRange,
        /// Evaluate the range as of this date (YYYY-MM-DD, default: today)
        #[arg(long, value_parser = parse_iso_date)]
        today: Option<IsoDate>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Count stored bills and list their titles
    Count {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show reminders that fall due today
    Remind {
        /// Evaluate reminders as of this date (YYYY-MM-DD, default: today)
        #[arg(long, value_parser = parse_iso_date)]
        today: Option<IsoDate>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
pub fn parse_from<I, T>(itr: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(itr)
}
