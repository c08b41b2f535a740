use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExprError {
    #[error("no match at position {position}")]
    NoMatch { position: usize, input: String },

    #[error("too many tokens (capacity {capacity})")]
    TokenCapacityExceeded { capacity: usize },

    #[error("token '{text}' is longer than {max} characters")]
    TokenTooLong { text: String, max: usize },

    #[error("empty expression")]
    EmptyRange,

    #[error("unbalanced parentheses")]
    UnbalancedParentheses,

    #[error("missing operator")]
    NoOperator,

    #[error("unexpected token {0}")]
    UnexpectedToken(String),

    #[error("division by zero")]
    DivisionByZero,

    #[error("unknown register ${0}")]
    UnknownRegister(String),

    #[error("malformed number '{0}'")]
    NumericFormat(String),
}

impl ExprError {
    /// Input line followed by a caret under the column the lexer gave up on.
    pub fn caret(&self) -> Option<String> {
        match self {
            ExprError::NoMatch { position, input } => {
                // `position` is a byte offset; the caret needs a column.
                let column = input
                    .get(..*position)
                    .map_or(*position, |prefix| prefix.chars().count());
                Some(format!("{}\n{:width$}^", input, "", width = column))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caret_points_at_position() {
        let err = ExprError::NoMatch {
            position: 4,
            input: "1 + @".to_string(),
        };
        assert_eq!(err.caret().unwrap(), "1 + @\n    ^");
        assert_eq!(err.to_string(), "no match at position 4");
    }

    #[test]
    fn test_caret_counts_characters_not_bytes() {
        // U+3000 is whitespace but three bytes wide.
        let input = "1\u{3000}+ @".to_string();
        let err = ExprError::NoMatch {
            position: 6,
            input: input.clone(),
        };
        assert_eq!(err.caret().unwrap(), format!("{}\n    ^", input));
    }

    #[test]
    fn test_caret_after_lexing_wide_whitespace() {
        use crate::config::ExprConfig;
        use crate::expr::lexer::lex;

        let input = "\u{3000}\u{3000}#";
        let err = lex(input, &ExprConfig::default()).unwrap_err();
        assert!(matches!(err, ExprError::NoMatch { position: 6, .. }));
        assert_eq!(err.caret().unwrap(), format!("{}\n  ^", input));
    }

    #[test]
    fn test_caret_only_for_lex_errors() {
        assert!(ExprError::DivisionByZero.caret().is_none());
    }
}
