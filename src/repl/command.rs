use crate::app::AppEvent;

/// Console commands with their help text, in `help` listing order.
pub const COMMAND_TABLE: &[(&str, &str)] = &[
    ("help", "Display informations about all supported commands"),
    ("q", "Exit the monitor"),
    ("info", "info r: display the register status"),
    ("p", "p EXPR: evaluate EXPR and print the result"),
    (
        "x",
        "x N EXPR: evaluate EXPR as a start address and dump N four-byte words in hex",
    ),
];

/// Looks up the help line for `name`.
pub fn describe(name: &str) -> Option<&'static str> {
    COMMAND_TABLE
        .iter()
        .find(|(command, _)| *command == name)
        .map(|(_, description)| *description)
}

/// Commands that can be parsed from REPL input
///
/// These commands map to AppEvent for handling in App core.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplCommand {
    /// Blank line
    Empty,

    /// List all commands, or describe one
    Help(Option<String>),

    Quit,

    /// Dump the register file
    InfoRegisters,

    /// Evaluate and print an expression
    Print(String),

    /// Dump `count` words starting at the address `expr` evaluates to
    Examine { count: u32, expr: String },

    /// Known command with bad arguments; holds the usage line
    Usage(&'static str),

    /// Unknown/invalid command
    Unknown(String),
}

/// Convert a parsed REPL command into an AppEvent
///
/// This is the translation layer between REPL input and App core.
pub fn command_to_app_event(command: ReplCommand) -> AppEvent {
    match command {
        ReplCommand::Empty => AppEvent::None,
        ReplCommand::Help(topic) => AppEvent::Help(topic),
        ReplCommand::Quit => AppEvent::Quit,
        ReplCommand::InfoRegisters => AppEvent::InfoRegisters,
        ReplCommand::Print(expr) => AppEvent::Print(expr),
        ReplCommand::Examine { count, expr } => AppEvent::Examine { count, expr },
        ReplCommand::Usage(usage) => AppEvent::Warning(format!("Usage: {}", usage)),
        ReplCommand::Unknown(input) => AppEvent::InvalidCommand(input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_known_command() {
        assert_eq!(describe("p"), Some("p EXPR: evaluate EXPR and print the result"));
        assert_eq!(describe("si"), None);
    }

    #[test]
    fn test_command_to_app_event_quit() {
        let event = command_to_app_event(ReplCommand::Quit);
        assert_eq!(event, AppEvent::Quit);
    }

    #[test]
    fn test_command_to_app_event_print() {
        let event = command_to_app_event(ReplCommand::Print("$eax".to_string()));
        assert_eq!(event, AppEvent::Print("$eax".to_string()));
    }

    #[test]
    fn test_command_to_app_event_examine() {
        let event = command_to_app_event(ReplCommand::Examine {
            count: 4,
            expr: "$esp".to_string(),
        });
        assert_eq!(
            event,
            AppEvent::Examine {
                count: 4,
                expr: "$esp".to_string()
            }
        );
    }

    #[test]
    fn test_command_to_app_event_usage() {
        let event = command_to_app_event(ReplCommand::Usage("p EXPR"));
        assert_eq!(event, AppEvent::Warning("Usage: p EXPR".to_string()));
    }

    #[test]
    fn test_command_to_app_event_empty() {
        assert_eq!(command_to_app_event(ReplCommand::Empty), AppEvent::None);
    }

    #[test]
    fn test_command_to_app_event_unknown() {
        let event = command_to_app_event(ReplCommand::Unknown("invalid".to_string()));
        assert!(matches!(event, AppEvent::InvalidCommand(_)));
    }
}
