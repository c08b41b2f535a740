use super::error::ExprError;
use super::rules::rules;
use super::token::Token;
use crate::config::{ExprConfig, OverlongToken};
use tracing::trace;

/// Splits `input` into tokens, first-match over the rule table.
///
/// Whitespace is dropped. Literals and registers keep their matched text,
/// subject to `config.max_token_text`.
pub fn lex(input: &str, config: &ExprConfig) -> Result<Vec<Token>, ExprError> {
    let mut tokens = Vec::new();
    let mut position = 0;

    while position < input.len() {
        let rest = &input[position..];
        let (rule, len) = rules()
            .iter()
            .find_map(|rule| rule.regex.find(rest).map(|m| (rule, m.end())))
            .ok_or_else(|| ExprError::NoMatch {
                position,
                input: input.to_string(),
            })?;

        let matched = &rest[..len];
        trace!(
            rule = rule.pattern,
            position,
            len,
            matched,
            "lexer rule matched"
        );
        position += len;

        let Some(kind) = rule.kind else {
            continue;
        };

        if tokens.len() >= config.max_tokens {
            return Err(ExprError::TokenCapacityExceeded {
                capacity: config.max_tokens,
            });
        }

        let token = if kind.has_payload() {
            Token::with_text(kind, payload(matched, config)?)
        } else {
            Token::new(kind)
        };
        tokens.push(token);
    }

    Ok(tokens)
}

fn payload<'a>(matched: &'a str, config: &ExprConfig) -> Result<&'a str, ExprError> {
    // Every payload rule matches ASCII only, so byte and char lengths agree.
    if matched.len() <= config.max_token_text {
        return Ok(matched);
    }
    match config.overlong {
        OverlongToken::Reject => Err(ExprError::TokenTooLong {
            text: matched.to_string(),
            max: config.max_token_text,
        }),
        OverlongToken::Truncate => Ok(&matched[..config.max_token_text]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::token::TokenKind;

    fn kinds(input: &str) -> Vec<TokenKind> {
        lex(input, &ExprConfig::default())
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_lex_operators() {
        assert_eq!(
            kinds("+-*/==()"),
            vec![
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Star,
                TokenKind::Slash,
                TokenKind::Equal,
                TokenKind::LParen,
                TokenKind::RParen,
            ]
        );
    }

    #[test]
    fn test_lex_keeps_payloads() {
        let tokens = lex("0x1f + 42 * $eax", &ExprConfig::default()).unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::with_text(TokenKind::Hex, "0x1f"),
                Token::new(TokenKind::Plus),
                Token::with_text(TokenKind::Decimal, "42"),
                Token::new(TokenKind::Star),
                Token::with_text(TokenKind::Register, "$eax"),
            ]
        );
    }

    #[test]
    fn test_lex_whitespace_emits_nothing() {
        assert_eq!(kinds("  1 \t+\t2  "), kinds("1+2"));
        assert!(kinds("   ").is_empty());
        assert!(kinds("").is_empty());
    }

    #[test]
    fn test_lex_no_match_reports_position() {
        let err = lex("1 + #2", &ExprConfig::default()).unwrap_err();
        assert_eq!(
            err,
            ExprError::NoMatch {
                position: 4,
                input: "1 + #2".to_string()
            }
        );
    }

    #[test]
    fn test_lex_single_equals_fails() {
        assert!(matches!(
            lex("1 = 1", &ExprConfig::default()),
            Err(ExprError::NoMatch { position: 2, .. })
        ));
    }

    #[test]
    fn test_lex_capacity_is_inclusive() {
        let config = ExprConfig {
            max_tokens: 3,
            ..ExprConfig::default()
        };
        assert_eq!(lex("1+2", &config).unwrap().len(), 3);
        assert_eq!(
            lex("1+2+", &config),
            Err(ExprError::TokenCapacityExceeded { capacity: 3 })
        );
    }

    #[test]
    fn test_lex_rejects_overlong_literal() {
        let config = ExprConfig {
            max_token_text: 4,
            ..ExprConfig::default()
        };
        assert!(lex("1234", &config).is_ok());
        assert!(matches!(
            lex("12345", &config),
            Err(ExprError::TokenTooLong { max: 4, .. })
        ));
    }

    #[test]
    fn test_lex_truncates_overlong_literal() {
        let config = ExprConfig {
            max_token_text: 4,
            overlong: OverlongToken::Truncate,
            ..ExprConfig::default()
        };
        let tokens = lex("$abcdef", &config).unwrap();
        assert_eq!(tokens, vec![Token::with_text(TokenKind::Register, "$abc")]);
    }
}
