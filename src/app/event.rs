/// Application events
#[derive(Debug, PartialEq, Clone)]
pub enum AppEvent {
    Help(Option<String>),
    Quit,
    InfoRegisters,
    Print(String),
    Examine { count: u32, expr: String },
    Warning(String),
    InvalidCommand(String),
    None,
}
