use super::error::ExprError;
use super::leaf;
use super::token::{Token, TokenKind};
use crate::machine::{MemoryBus, RegisterFile};

/// Bytes read by the `*` dereference operator.
pub const DEREF_WIDTH: usize = 4;

/// Recursive evaluator over an already classified token sequence.
///
/// Each call works on a contiguous sub-slice: strip a pair of parentheses
/// that spans the whole slice, otherwise split at the dominant operator and
/// recurse on each side. The first failure aborts the whole evaluation.
pub struct RangeEvaluator<'m, M: ?Sized> {
    machine: &'m M,
}

impl<'m, M> RangeEvaluator<'m, M>
where
    M: RegisterFile + MemoryBus + ?Sized,
{
    pub fn new(machine: &'m M) -> Self {
        Self { machine }
    }

    pub fn eval(&self, tokens: &[Token]) -> Result<u32, ExprError> {
        match tokens {
            [] => Err(ExprError::EmptyRange),
            [token] => leaf::resolve(token, self.machine),
            _ if is_enclosed(tokens)? => self.eval(&tokens[1..tokens.len() - 1]),
            _ => {
                let op = dominant_operator(tokens)?.ok_or(ExprError::NoOperator)?;
                let kind = tokens[op].kind;
                if kind.is_unary() {
                    self.eval_unary(kind, &tokens[..op], &tokens[op + 1..])
                } else {
                    self.eval_binary(kind, &tokens[..op], &tokens[op + 1..])
                }
            }
        }
    }

    fn eval_unary(
        &self,
        kind: TokenKind,
        before: &[Token],
        operand: &[Token],
    ) -> Result<u32, ExprError> {
        // The leftmost unary operator is only dominant when nothing but other
        // unary operators precede it, and those would have been chosen first.
        if let Some(stray) = before.first() {
            return Err(ExprError::UnexpectedToken(format!("{:?}", stray.kind)));
        }
        let value = self.eval(operand)?;
        match kind {
            TokenKind::Negate => Ok(value.wrapping_neg()),
            TokenKind::Deref => Ok(self.machine.read_memory(value, DEREF_WIDTH)),
            _ => Err(ExprError::UnexpectedToken(format!("{:?}", kind))),
        }
    }

    fn eval_binary(
        &self,
        kind: TokenKind,
        left: &[Token],
        right: &[Token],
    ) -> Result<u32, ExprError> {
        let lhs = self.eval(left)?;
        let rhs = self.eval(right)?;
        match kind {
            TokenKind::Plus => Ok(lhs.wrapping_add(rhs)),
            TokenKind::Minus => Ok(lhs.wrapping_sub(rhs)),
            TokenKind::Star => Ok(lhs.wrapping_mul(rhs)),
            TokenKind::Slash => lhs.checked_div(rhs).ok_or(ExprError::DivisionByZero),
            TokenKind::Equal => Ok((lhs == rhs) as u32),
            _ => Err(ExprError::UnexpectedToken(format!("{:?}", kind))),
        }
    }
}

/// True when the first and last tokens are one matching pair of parentheses.
///
/// `(1)+(2)` starts and ends with parentheses but the first pair closes early,
/// so it is not enclosed.
pub fn is_enclosed(tokens: &[Token]) -> Result<bool, ExprError> {
    let (Some(first), Some(last)) = (tokens.first(), tokens.last()) else {
        return Err(ExprError::EmptyRange);
    };
    if first.kind != TokenKind::LParen || last.kind != TokenKind::RParen {
        return Ok(false);
    }

    let last_index = tokens.len() - 1;
    let mut depth = 0usize;
    for (index, token) in tokens.iter().enumerate() {
        match token.kind {
            TokenKind::LParen => depth += 1,
            TokenKind::RParen => {
                depth = depth
                    .checked_sub(1)
                    .ok_or(ExprError::UnbalancedParentheses)?;
            }
            _ => {}
        }
        if depth == 0 && index < last_index {
            return Ok(false);
        }
    }

    if depth != 0 {
        return Err(ExprError::UnbalancedParentheses);
    }
    Ok(true)
}

/// Index of the operator to split on, ignoring anything inside parentheses.
///
/// Lowest precedence wins. Ties between binary operators go to the rightmost,
/// which makes them left-associative; ties between unary operators go to the
/// leftmost, so `--5` is `-(-5)`. The legacy monitor took the rightmost here
/// too, which dropped every operator but the last in a unary run.
pub fn dominant_operator(tokens: &[Token]) -> Result<Option<usize>, ExprError> {
    let mut depth = 0usize;
    let mut best: Option<(usize, u8)> = None;

    for (index, token) in tokens.iter().enumerate() {
        match token.kind {
            TokenKind::LParen => {
                depth += 1;
                continue;
            }
            TokenKind::RParen => {
                depth = depth
                    .checked_sub(1)
                    .ok_or(ExprError::UnbalancedParentheses)?;
                continue;
            }
            _ => {}
        }
        if depth > 0 {
            continue;
        }
        let Some(precedence) = token.kind.precedence() else {
            continue;
        };

        let take = match best {
            None => true,
            Some((_, best_precedence)) => {
                precedence < best_precedence
                    || (precedence == best_precedence && !token.kind.is_unary())
            }
        };
        if take {
            best = Some((index, precedence));
        }
    }

    if depth != 0 {
        return Err(ExprError::UnbalancedParentheses);
    }
    Ok(best.map(|(index, _)| index))
}
