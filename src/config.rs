// Configuration for the expression evaluator and the debug console.
// Defaults match the limits of the monitor this console replaces.

use std::env;

/// Environment variable holding the tracing filter for the console binary.
pub const LOG_ENV_VAR: &str = "CPUMON_LOG";

/// What the lexer does with a literal or register longer than the payload cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlongToken {
    /// Fail the evaluation with `ExprError::TokenTooLong`.
    Reject,
    /// Keep the first `max_token_text` characters and carry on.
    Truncate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExprConfig {
    /// Maximum number of tokens in one expression (default 32)
    pub max_tokens: usize,

    /// Maximum length of a literal or register token (default 31 chars)
    pub max_token_text: usize,

    pub overlong: OverlongToken,
}

impl Default for ExprConfig {
    fn default() -> Self {
        Self {
            max_tokens: 32,
            max_token_text: 31,
            overlong: OverlongToken::Reject,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleConfig {
    pub prompt: String,

    /// Size of the emulated physical memory in bytes (default 8 MiB)
    pub memory_size: usize,

    /// Initial value of `$eip`
    pub entry: u32,

    /// Words per line in `x` output
    pub examine_columns: usize,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            prompt: "(cpumon) ".to_string(),
            memory_size: 8 << 20,
            entry: 0x0010_0000,
            examine_columns: 4,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogConfig {
    /// `EnvFilter` directive string
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
        }
    }
}

impl LogConfig {
    pub fn from_env() -> Self {
        Self {
            filter: env::var(LOG_ENV_VAR).unwrap_or_else(|_| Self::default().filter),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub expr: ExprConfig,
    pub console: ConsoleConfig,
    pub log: LogConfig,
}
