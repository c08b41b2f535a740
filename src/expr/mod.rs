//! Debugger expression evaluator
//!
//! Evaluates arithmetic and comparison expressions over 32-bit unsigned
//! values, with decimal and hex literals, `$reg` registers and `*addr`
//! memory dereference.
//!
//! ## Pipeline
//!
//! - **rules.rs**: ordered regex rule table, compiled once
//! - **lexer.rs**: first-match tokenizer producing a fresh token list per call
//! - **unary.rs**: reclassifies `*` / `-` as dereference / negation by context
//! - **eval.rs**: recursive split at the dominant operator
//! - **leaf.rs**: literals and registers to values
//!
//! Every call owns its tokens, so evaluation is re-entrant.

pub mod error;
pub mod eval;
pub mod leaf;
pub mod lexer;
pub mod rules;
pub mod token;
pub mod unary;

pub use error::ExprError;
pub use eval::{RangeEvaluator, DEREF_WIDTH};
pub use token::{Token, TokenKind};

use crate::config::ExprConfig;
use crate::machine::{MemoryBus, RegisterFile};
use tracing::debug;

/// Evaluates `input` against `machine` with the default limits.
pub fn evaluate<M>(input: &str, machine: &M) -> Result<u32, ExprError>
where
    M: RegisterFile + MemoryBus + ?Sized,
{
    evaluate_with(input, machine, &ExprConfig::default())
}

/// Evaluates `input` under `config`'s token capacity and overlong-token policy.
pub fn evaluate_with<M>(input: &str, machine: &M, config: &ExprConfig) -> Result<u32, ExprError>
where
    M: RegisterFile + MemoryBus + ?Sized,
{
    let tokens = unary::classify_unary(lexer::lex(input, config)?);
    let result = RangeEvaluator::new(machine).eval(&tokens);
    debug!(input, tokens = tokens.len(), ?result, "evaluated expression");
    result
}

/// `(value, success)` form for callers that only report pass/fail.
/// The value is 0 whenever evaluation fails.
pub fn evaluate_pair<M>(input: &str, machine: &M) -> (u32, bool)
where
    M: RegisterFile + MemoryBus + ?Sized,
{
    match evaluate(input, machine) {
        Ok(value) => (value, true),
        Err(_) => (0, false),
    }
}
