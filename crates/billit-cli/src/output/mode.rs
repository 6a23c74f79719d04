use crate::cli::Commands;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutputMode {
    Text,
    Json,
}

pub fn mode_for_command(command: &Commands) -> OutputMode {
    let json = match command {
        Commands::Add { json, .. }
        | Commands::Edit { json, .. }
        | Commands::Delete { json, .. }
        | Commands::Clear { json, .. }
        | Commands::Show { json, .. }
        | Commands::List { json, .. }
        | Commands::Count { json }
        | Commands::Remind { json, .. } => *json,
    };

    if json {
        OutputMode::Json
    } else {
        OutputMode::Text
    }
}
