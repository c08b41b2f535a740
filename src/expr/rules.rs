// Rule table for the expression lexer.
// Order matters: the first rule matching at the cursor wins, so hex must come
// before decimal and `==` before anything that could eat a lone `=`.

use super::token::TokenKind;
use lazy_static::lazy_static;
use regex::Regex;

pub struct Rule {
    pub pattern: &'static str,
    pub regex: Regex,
    /// `None` for whitespace, which is consumed without emitting a token.
    pub kind: Option<TokenKind>,
}

const RULE_SOURCES: &[(&str, Option<TokenKind>)] = &[
    (r"^\s+", None),
    (r"^\+", Some(TokenKind::Plus)),
    (r"^==", Some(TokenKind::Equal)),
    (r"^0[xX][0-9a-fA-F]+", Some(TokenKind::Hex)),
    (r"^[0-9]+", Some(TokenKind::Decimal)),
    (r"^\$[a-zA-Z_][a-zA-Z0-9_]*", Some(TokenKind::Register)),
    (r"^\(", Some(TokenKind::LParen)),
    (r"^\)", Some(TokenKind::RParen)),
    (r"^\*", Some(TokenKind::Star)),
    (r"^/", Some(TokenKind::Slash)),
    (r"^-", Some(TokenKind::Minus)),
];

lazy_static! {
    static ref RULES: Vec<Rule> = RULE_SOURCES
        .iter()
        .map(|&(pattern, kind)| Rule {
            pattern,
            regex: Regex::new(pattern)
                .unwrap_or_else(|e| panic!("invalid lexer rule {}: {}", pattern, e)),
            kind,
        })
        .collect();
}

/// Compiled rules in match order. Compiled once, on first use.
pub fn rules() -> &'static [Rule] {
    RULES.as_slice()
}
