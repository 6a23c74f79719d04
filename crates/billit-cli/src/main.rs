mod cli;
mod dispatch;
mod logging;
mod output;
mod stdout_io;

use std::process::ExitCode;

use billit_client::ClientError;
use clap::{Parser, error::ErrorKind};
use stdout_io::write_stdout_text;
use tracing::debug;

const ROOT_HELP: &str = "Billit - track bills and get reminded before they are due

Usage:
  billit <command>

Start here:
  billit add --help
  billit list
  billit remind
";

const TOP_LEVEL_HELP: &str = "Billit - track bills and get reminded before they are due

USAGE: billit <command>

Keep your list:
  billit add --title Rent --amount 1200 --due 2024-03-15 --notify 1-week
  billit edit <id> --title ... --amount ... --due ... --notify ...
  billit delete <id>                                      Remove one bill
  billit clear --yes                                      Remove every bill

Look at it:
  billit list [all|week|month]                            Bills ordered by due date
  billit show <id>                                        One bill in detail
  billit count                                            How many bills you track

Get reminded:
  billit remind                                           Reminders that fall due today

Every command accepts --json for machine-readable output.
Set BILLIT_HOME to keep bills somewhere other than ~/.billit.
Run `billit <command> --help` for command usage.
";

fn main() -> ExitCode {
    logging::init();
    match run() {
        Ok(code) => code,
        Err(code) => code,
    }
}

fn run() -> Result<ExitCode, ExitCode> {
    let raw_args = std::env::args().collect::<Vec<String>>();
    if raw_args.len() == 1 {
        if write_stdout_text(ROOT_HELP).is_err() {
            return Err(ExitCode::from(2));
        }
        return Ok(ExitCode::SUCCESS);
    }
    let parsed = cli::Cli::try_parse();
    let cli = match parsed {
        Ok(value) => value,
        Err(err) => return handle_parse_error(&err, &raw_args),
    };
    let mode = output::mode_for_command(&cli.command);
    debug!(?mode, "dispatching command");

    match dispatch::dispatch(&cli) {
        Ok(success) => {
            if output::print_success(&success, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            if output::print_failure(&error, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            Err(exit_code_for_error(&error))
        }
    }
}

fn handle_parse_error(err: &clap::Error, raw_args: &[String]) -> Result<ExitCode, ExitCode> {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            let text = if is_top_level_help_request(raw_args) {
                TOP_LEVEL_HELP.to_string()
            } else {
                err.to_string()
            };
            if write_stdout_text(&text).is_err() {
                return Err(ExitCode::from(2));
            }
            Ok(ExitCode::SUCCESS)
        }
        ErrorKind::DisplayVersion => {
            if write_stdout_text(&err.to_string()).is_err() {
                return Err(ExitCode::from(2));
            }
            Ok(ExitCode::SUCCESS)
        }
        _ => {
            let clean_message = strip_clap_boilerplate(&err.to_string());
            let command_hint = command_path_from_args(raw_args);
            let parse_error =
                ClientError::invalid_argument_for_command(&clean_message, command_hint.as_deref());
            let mode = infer_requested_output_mode(raw_args);
            if output::print_failure(&parse_error, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            Err(ExitCode::from(1))
        }
    }
}

fn is_top_level_help_request(raw_args: &[String]) -> bool {
    raw_args.len() == 2 && matches!(raw_args[1].as_str(), "--help" | "-h")
}

/// Strips clap's trailing boilerplate (Usage line, "For more information" hint)
/// so our "What to do next" section is the single source of guidance.
fn strip_clap_boilerplate(message: &str) -> String {
    let trimmed = if let Some(pos) = message.find("\n\nUsage:") {
        &message[..pos]
    } else if let Some(pos) = message.find("\nFor more information") {
        &message[..pos]
    } else {
        message
    };
    trimmed.trim_end().to_string()
}

/// The first non-flag argument names the subcommand, when it is a known one.
fn command_path_from_args(raw_args: &[String]) -> Option<String> {
    let first = raw_args
        .iter()
        .skip(1)
        .find(|value| !value.starts_with('-'))?;
    match first.as_str() {
        "add" | "edit" | "delete" | "clear" | "show" | "list" | "count" | "remind" => {
            Some(first.clone())
        }
        _ => None,
    }
}

fn exit_code_for_error(error: &ClientError) -> ExitCode {
    if error.is_storage_failure() {
        ExitCode::from(2)
    } else {
        ExitCode::from(1)
    }
}

fn infer_requested_output_mode(raw_args: &[String]) -> output::OutputMode {
    if raw_args.iter().skip(1).any(|value| value == "--json") {
        return output::OutputMode::Json;
    }
    output::OutputMode::Text
}

#[cfg(test)]
mod tests {
    use super::{command_path_from_args, infer_requested_output_mode, strip_clap_boilerplate};
    use crate::output::OutputMode;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn command_hint_uses_first_known_subcommand() {
        assert_eq!(
            command_path_from_args(&args(&["billit", "--json", "show", "x"])),
            Some("show".to_string())
        );
        assert_eq!(command_path_from_args(&args(&["billit", "bogus"])), None);
    }

    #[test]
    fn clap_boilerplate_is_removed() {
        let message = "error: invalid value 'x' for '<ID>'\n\nUsage: billit show <ID>\n\nFor more information, try '--help'.\n";
        assert_eq!(
            strip_clap_boilerplate(message),
            "error: invalid value 'x' for '<ID>'"
        );
    }

    #[test]
    fn json_flag_anywhere_selects_json_errors() {
        assert_eq!(
            infer_requested_output_mode(&args(&["billit", "show", "x", "--json"])),
            OutputMode::Json
        );
        assert_eq!(
            infer_requested_output_mode(&args(&["billit", "show", "x"])),
            OutputMode::Text
        );
    }
}
