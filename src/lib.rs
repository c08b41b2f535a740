pub mod app;
pub mod config;
pub mod expr;
pub mod logging;
pub mod machine;
pub mod repl;
