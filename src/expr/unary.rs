use super::token::{Token, TokenKind};
use tracing::debug;

/// Decides, per occurrence, whether `*` and `-` are unary.
///
/// A `*` or `-` is unary when it starts the stream or follows anything that
/// cannot end an operand. Only one token of lookback is used; parenthesis
/// depth is irrelevant.
pub fn classify_unary(tokens: Vec<Token>) -> Vec<Token> {
    let mut previous: Option<TokenKind> = None;

    tokens
        .into_iter()
        .enumerate()
        .map(|(index, mut token)| {
            let binary_position = previous.map_or(false, TokenKind::ends_operand);
            if !binary_position {
                let unary = match token.kind {
                    TokenKind::Star => Some(TokenKind::Deref),
                    TokenKind::Minus => Some(TokenKind::Negate),
                    _ => None,
                };
                if let Some(kind) = unary {
                    debug!(index, ?kind, "reclassified as unary");
                    token.kind = kind;
                }
            }
            previous = Some(token.kind);
            token
        })
        .collect()
}
