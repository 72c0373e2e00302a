use icon_builder_core::Trigger;

/// Commands sent from the console input to the main application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    /// Forward a user trigger to the orchestrator.
    Trigger(Trigger),
    /// Print the command list.
    Help,
    /// Input that matched no command.
    Unknown(String),
    /// Request application shutdown.
    Shutdown,
}

impl AppCommand {
    /// Map one line of console input to a command. Blank lines map to `None`.
    pub fn parse(line: &str) -> Option<Self> {
        let input = line.trim();
        if input.is_empty() {
            return None;
        }

        let command = match input.to_ascii_lowercase().as_str() {
            "source" | "s" => AppCommand::Trigger(Trigger::PickSource),
            "dest" | "destination" | "d" => AppCommand::Trigger(Trigger::PickDestination),
            "generate" | "g" => AppCommand::Trigger(Trigger::Generate),
            "help" | "h" | "?" => AppCommand::Help,
            "quit" | "exit" | "q" => AppCommand::Shutdown,
            _ => AppCommand::Unknown(input.to_string()),
        };

        Some(command)
    }
}
