use billit_client::commands::{bills, remind};
use billit_client::{BillFieldsInput, ClientError, ClientResult, SuccessEnvelope};
use chrono::{Local, NaiveDate};

use crate::cli::{BillFieldArgs, Cli, Commands, IsoDate};

pub fn dispatch(cli: &Cli) -> ClientResult<SuccessEnvelope> {
    match &cli.command {
        Commands::Add { fields, .. } => bills::add(field_input(fields)),
        Commands::Edit { id, fields, .. } => bills::edit(*id, field_input(fields)),
        Commands::Delete { id, .. } => bills::delete(*id),
        Commands::Clear { yes, .. } => {
            if !*yes {
                return Err(clear_requires_confirmation());
            }
            bills::clear()
        }
        Commands::Show { id, .. } => bills::show(*id),
        Commands::List { range, today, .. } => bills::list(*range, resolve_today(*today)),
        Commands::Count { .. } => bills::count(),
        Commands::Remind { today, .. } => remind::run(resolve_today(*today)),
    }
}

fn field_input(fields: &BillFieldArgs) -> BillFieldsInput<'_> {
    BillFieldsInput {
        title: &fields.title,
        amount: &fields.amount,
        due_date: &fields.due,
        notification: &fields.notify,
    }
}

/// Reminders and ranges are evaluated against the local calendar date.
fn resolve_today(today: Option<IsoDate>) -> NaiveDate {
    today
        .map(IsoDate::date)
        .unwrap_or_else(|| Local::now().date_naive())
}

fn clear_requires_confirmation() -> ClientError {
    ClientError::invalid_argument_with_recovery(
        "`billit clear` deletes every bill and needs confirmation.",
        vec![
            "Run `billit clear --yes` to delete every bill.".to_string(),
            "Run `billit delete <id>` to remove a single bill.".to_string(),
        ],
    )
}
