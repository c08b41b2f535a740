//! REPL (Read-Eval-Print Loop) module
//!
//! Provides console input, command parsing, and rustyline integration.
//!
//! ## Module Structure
//!
//! - **command.rs**: Command definitions, help table, conversion to AppEvent
//! - **parser.rs**: Splits a line into command word and arguments
//! - **input.rs**: Rustyline wrapper with history
//!
//! ## Usage in main.rs
//!
//! ```rust,ignore
//! use cpumon::repl::ReplInput;
//!
//! let mut repl = ReplInput::new("(cpumon) ")?;
//! loop {
//!     let line = repl.readline()?;
//!     let event = repl.to_app_event(&line);
//!     app.handle_event(event, &mut std::io::stdout())?;
//! }
//! ```

pub mod command;
pub mod input;
pub mod parser;

// Re-export public types
pub use command::ReplCommand;
pub use input::ReplInput;
