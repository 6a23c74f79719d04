pub mod bill;
pub mod commands;
pub mod contracts;
pub mod date;
pub mod error;
pub mod migrations;
pub mod reminder;
pub mod setup;
pub mod state;
pub mod store;
pub mod validate;

pub use bill::{Amount, BillDraft, BillRange, BillRecord, NotificationPreference};
pub use contracts::envelope::SuccessEnvelope;
pub use error::{ClientError, ClientResult};
pub use reminder::{Notifier, Reminder, should_notify};
pub use store::BillStore;
pub use validate::{BillFieldsInput, validate_bill_fields};

pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");
