use cpumon::app::{App, AppMode};
use cpumon::config::{Config, LogConfig};
use cpumon::logging;
use cpumon::repl::ReplInput;
use rustyline::error::ReadlineError;
use std::io;
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config {
        log: LogConfig::from_env(),
        ..Config::default()
    };
    logging::init(&config.log);

    let mut repl = ReplInput::new(&config.console.prompt)?;
    let mut app = App::with_config(config);
    let stdout = io::stdout();
    info!(eip = app.machine.registers.eip, "monitor ready");

    // Run the console loop until `q`, Ctrl-C or end of input
    while app.mode != AppMode::Quit {
        let line = match repl.readline() {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        };
        repl.add_history_entry(&line)?;

        app.handle_event(repl.to_app_event(&line), &mut stdout.lock())?;
    }

    Ok(())
}
