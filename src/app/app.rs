use super::event::AppEvent;
use super::mode::AppMode;
use crate::config::Config;
use crate::expr::{self, ExprError, DEREF_WIDTH};
use crate::machine::Machine;
use crate::repl::command::{describe, COMMAND_TABLE};
use std::io::{self, Write};
use tracing::debug;

pub struct App {
    pub mode: AppMode,
    pub machine: Machine,
    config: Config,
}

impl App {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            mode: AppMode::Command,
            machine: Machine::new(config.console.memory_size, config.console.entry),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Runs one event, writing output lines to `out` as they are produced.
    pub fn handle_event<W: Write>(&mut self, event: AppEvent, out: &mut W) -> io::Result<()> {
        debug!(?event, "handling event");
        match event {
            AppEvent::Help(topic) => self.help(topic.as_deref(), out),
            AppEvent::Quit => {
                self.mode = AppMode::Quit;
                Ok(())
            }
            AppEvent::InfoRegisters => {
                for (name, value) in self.machine.registers.iter() {
                    writeln!(out, "${}\t0x{:08x}\t{}", name, value, value)?;
                }
                Ok(())
            }
            AppEvent::Print(input) => match self.evaluate(&input) {
                Ok(value) => writeln!(out, "0x{:08x}\t{}", value, value),
                Err(err) => report(&err, out),
            },
            AppEvent::Examine { count, expr } => match self.evaluate(&expr) {
                Ok(start) => self.examine(start, count, out),
                Err(err) => report(&err, out),
            },
            AppEvent::Warning(message) => writeln!(out, "{}", message),
            AppEvent::InvalidCommand(command) => writeln!(out, "Unknown command '{}'", command),
            AppEvent::None => Ok(()),
        }
    }

    pub fn evaluate(&self, input: &str) -> Result<u32, ExprError> {
        expr::evaluate_with(input, &self.machine, &self.config.expr)
    }

    fn help<W: Write>(&self, topic: Option<&str>, out: &mut W) -> io::Result<()> {
        match topic {
            None => {
                for (name, description) in COMMAND_TABLE {
                    writeln!(out, "{} - {}", name, description)?;
                }
                Ok(())
            }
            Some(name) => match describe(name) {
                Some(description) => writeln!(out, "{} - {}", name, description),
                None => writeln!(out, "Unknown command '{}'", name),
            },
        }
    }

    /// Dumps up to `count` words from `start`, one row at a time.
    ///
    /// Stops at the end of physical memory and says so, rather than dumping
    /// zeros for the rest of the 32-bit address space.
    fn examine<W: Write>(&self, start: u32, count: u32, out: &mut W) -> io::Result<()> {
        let columns = self.config.console.examine_columns.max(1) as u64;
        let word = DEREF_WIDTH as u64;
        let available = (self.machine.memory.size() as u64)
            .saturating_sub(start as u64)
            .div_ceil(word);
        let shown = (count as u64).min(available);

        let word_address = |index: u64| start.wrapping_add((index * word) as u32);
        for row in (0..shown).step_by(columns as usize) {
            write!(out, "0x{:08x}:", word_address(row))?;
            for index in row..(row + columns).min(shown) {
                let value = self.machine.memory.read(word_address(index), DEREF_WIDTH);
                write!(out, " 0x{:08x}", value)?;
            }
            writeln!(out)?;
        }

        if shown < count as u64 {
            writeln!(
                out,
                "x: stopped at end of physical memory after {} of {} words",
                shown, count
            )?;
        }
        Ok(())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

fn report<W: Write>(err: &ExprError, out: &mut W) -> io::Result<()> {
    if let Some(caret) = err.caret() {
        writeln!(out, "{}", caret)?;
    }
    writeln!(out, "Bad expression: {}", err)
}
