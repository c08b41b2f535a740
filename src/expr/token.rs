/// Every kind of token the expression language knows about.
///
/// `Star` and `Minus` come out of the lexer ambiguous; the unary pass turns
/// them into `Deref` / `Negate` where no left operand can exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Plus,
    Minus,
    Star,
    Slash,
    Equal,
    LParen,
    RParen,
    Decimal,
    Hex,
    Register,
    Deref,
    Negate,
}

impl TokenKind {
    /// Kinds that carry their matched text.
    pub fn has_payload(self) -> bool {
        matches!(self, TokenKind::Decimal | TokenKind::Hex | TokenKind::Register)
    }

    /// True when a binary operator may follow this kind directly.
    pub fn ends_operand(self) -> bool {
        self.has_payload() || self == TokenKind::RParen
    }

    /// Binding strength at the top level of a range; `None` for operands and
    /// parentheses.
    pub fn precedence(self) -> Option<u8> {
        match self {
            TokenKind::Equal => Some(1),
            TokenKind::Plus | TokenKind::Minus => Some(2),
            TokenKind::Star | TokenKind::Slash => Some(3),
            TokenKind::Deref | TokenKind::Negate => Some(4),
            _ => None,
        }
    }

    pub fn is_unary(self) -> bool {
        matches!(self, TokenKind::Deref | TokenKind::Negate)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Matched source text for literals and registers, empty otherwise.
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind) -> Self {
        Self {
            kind,
            text: String::new(),
        }
    }

    pub fn with_text(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}
