use std::borrow::Cow;

/// One argv entry. Values are quoted in previews, literals never are.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Literal(&'static str),
    Value(String),
}

impl Token {
    pub fn literal(token: &'static str) -> Self {
        Token::Literal(token)
    }

    pub fn value(value: impl Into<String>) -> Self {
        Token::Value(value.into())
    }

    pub fn as_str(&self) -> &str {
        match self {
            Token::Literal(token) => *token,
            Token::Value(value) => value.as_str(),
        }
    }

    pub fn display(&self) -> Cow<'_, str> {
        match self {
            Token::Literal(token) => Cow::Borrowed(*token),
            Token::Value(value) => Cow::Owned(quote(value)),
        }
    }
}

/// Double-quotes `value`, escaping quotes, backslashes and control characters.
pub fn quote(value: &str) -> String {
    format!("{:?}", value)
}
