// Leaf resolvers: literal tokens to numbers, register tokens to register values.
// All accumulation wraps at 32 bits, like the machine word it models.

use super::error::ExprError;
use super::token::{Token, TokenKind};
use crate::machine::{RegisterFile, EIP_NAME, GPR_NAMES};

pub fn parse_decimal(text: &str) -> Result<u32, ExprError> {
    if text.is_empty() {
        return Err(ExprError::NumericFormat(text.to_string()));
    }
    text.chars().try_fold(0u32, |value, c| {
        let digit = c
            .to_digit(10)
            .ok_or_else(|| ExprError::NumericFormat(text.to_string()))?;
        Ok(value.wrapping_mul(10).wrapping_add(digit))
    })
}

/// Accepts an optional `0x`/`0X` prefix.
pub fn parse_hex(text: &str) -> Result<u32, ExprError> {
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    if digits.is_empty() {
        return Err(ExprError::NumericFormat(text.to_string()));
    }
    digits.chars().try_fold(0u32, |value, c| {
        let digit = c
            .to_digit(16)
            .ok_or_else(|| ExprError::NumericFormat(text.to_string()))?;
        Ok(value.wrapping_mul(16).wrapping_add(digit))
    })
}

/// Resolves `$name` through the register file.
///
/// Only the general-purpose registers and `eip` are addressable; anything
/// else is `UnknownRegister` even if the register file would answer.
pub fn read_register<R>(text: &str, registers: &R) -> Result<u32, ExprError>
where
    R: RegisterFile + ?Sized,
{
    let name = text.strip_prefix('$').unwrap_or(text);
    let known = name == EIP_NAME || GPR_NAMES.contains(&name);
    if !known {
        return Err(ExprError::UnknownRegister(name.to_string()));
    }
    registers
        .read_register(name)
        .ok_or_else(|| ExprError::UnknownRegister(name.to_string()))
}

/// Value of a single-token range.
pub fn resolve<R>(token: &Token, registers: &R) -> Result<u32, ExprError>
where
    R: RegisterFile + ?Sized,
{
    match token.kind {
        TokenKind::Decimal => parse_decimal(&token.text),
        TokenKind::Hex => parse_hex(&token.text),
        TokenKind::Register => read_register(&token.text, registers),
        kind => Err(ExprError::UnexpectedToken(format!("{:?}", kind))),
    }
}
