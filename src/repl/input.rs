use crate::app::AppEvent;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Line input for the console using rustyline
///
/// Provides:
/// - Command history for the session
/// - Arrow key navigation (left/right, up/down)
/// - Basic editing (backspace)
pub struct ReplInput {
    editor: DefaultEditor,
    prompt: String,
}

impl ReplInput {
    pub fn new(prompt: &str) -> Result<Self, ReadlineError> {
        let editor = DefaultEditor::new()?;
        Ok(Self {
            editor,
            prompt: prompt.to_string(),
        })
    }

    /// Read a line of input with the configured prompt
    ///
    /// This is a blocking call that returns when user presses Enter
    pub fn readline(&mut self) -> Result<String, ReadlineError> {
        self.editor.readline(&self.prompt)
    }

    /// Add a non-blank line to the history
    pub fn add_history_entry(&mut self, line: &str) -> Result<(), ReadlineError> {
        if line.trim().is_empty() {
            return Ok(());
        }
        self.editor.add_history_entry(line).map(|_| ())
    }

    /// Parses an input line and converts it to an AppEvent
    pub fn to_app_event(&self, line: &str) -> AppEvent {
        use crate::repl::command::command_to_app_event;
        use crate::repl::parser::parse_repl_input;

        command_to_app_event(parse_repl_input(line))
    }
}
