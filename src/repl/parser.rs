use super::ReplCommand;

/// Parse REPL input string into a command
///
/// Supports:
/// - `help [CMD]` → Help command
/// - `q` → Quit command
/// - `info r` → Register dump
/// - `p EXPR` → Print expression
/// - `x N EXPR` → Examine memory
/// - Unknown command → Error message
pub fn parse_repl_input(input: &str) -> ReplCommand {
    let input = input.trim();

    if input.is_empty() {
        return ReplCommand::Empty;
    }

    let (command, args) = match input.split_once(char::is_whitespace) {
        Some((command, args)) => (command, args.trim()),
        None => (input, ""),
    };

    match command {
        "help" => ReplCommand::Help(args.split_whitespace().next().map(str::to_string)),
        "q" => ReplCommand::Quit,
        "info" => {
            if args.starts_with('r') {
                ReplCommand::InfoRegisters
            } else {
                ReplCommand::Usage("info r")
            }
        }
        "p" => {
            if args.is_empty() {
                ReplCommand::Usage("p EXPR")
            } else {
                ReplCommand::Print(args.to_string())
            }
        }
        "x" => parse_examine(args),
        _ => ReplCommand::Unknown(command.to_string()),
    }
}

fn parse_examine(args: &str) -> ReplCommand {
    let Some((count, expr)) = args.split_once(char::is_whitespace) else {
        return ReplCommand::Usage("x N EXPR");
    };
    let expr = expr.trim();
    match count.parse::<u32>() {
        Ok(count) if !expr.is_empty() => ReplCommand::Examine {
            count,
            expr: expr.to_string(),
        },
        _ => ReplCommand::Usage("x N EXPR"),
    }
}
