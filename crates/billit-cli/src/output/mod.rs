mod bills_text;
mod error_text;
mod format;
mod json;
mod mode;
mod remind_text;

use std::io;

use billit_client::{ClientError, SuccessEnvelope};

use crate::stdout_io::write_stdout_line;

pub use mode::{OutputMode, mode_for_command};

pub fn print_success(success: &SuccessEnvelope, mode: OutputMode) -> io::Result<()> {
    let body = match mode {
        OutputMode::Text => render_text_success(success)?,
        OutputMode::Json => json::render_success_json(success)?,
    };
    write_stdout_line(&body)
}

pub fn print_failure(error: &ClientError, mode: OutputMode) -> io::Result<()> {
    let body = match mode {
        OutputMode::Json => json::render_error_json(error)?,
        OutputMode::Text => error_text::render_error(error),
    };
    write_stdout_line(&body)
}

fn render_text_success(success: &SuccessEnvelope) -> io::Result<String> {
    match success.command.as_str() {
        "bill add" | "bill edit" => bills_text::render_bill_write(&success.data),
        "bill delete" => bills_text::render_bill_delete(&success.data),
        "bill clear" => bills_text::render_bill_clear(&success.data),
        "bill show" => bills_text::render_bill_show(&success.data),
        "bill list" => bills_text::render_bill_list(&success.data),
        "bill count" => bills_text::render_bill_count(&success.data),
        "remind" => remind_text::render_remind(&success.data),
        _ => Err(io::Error::other(format!(
            "unsupported text output command `{}`",
            success.command
        ))),
    }
}
