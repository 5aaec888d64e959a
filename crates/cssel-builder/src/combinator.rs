//! Combinator tokens and the operands they join.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::SelectorBuilder;

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// "A combinator is punctuation that represents a particular kind of
/// relationship between the selectors on either side."
///
/// Tokens outside the standard set are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Combinator {
    /// [§ 16.1](https://www.w3.org/TR/selectors-4/#descendant-combinators) whitespace, `A B`
    Descendant,
    /// [§ 16.2](https://www.w3.org/TR/selectors-4/#child-combinators) `A > B`
    Child,
    /// [§ 16.3](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators) `A + B`
    NextSibling,
    /// [§ 16.4](https://www.w3.org/TR/selectors-4/#general-sibling-combinators) `A ~ B`
    SubsequentSibling,
    /// [§ 15.1](https://www.w3.org/TR/selectors-4/#the-column-combinator) `A || B`
    Column,
    /// Any other caller-supplied token.
    Other(String),
}

impl Combinator {
    /// Map a literal token to its combinator.
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        match token {
            " " => Self::Descendant,
            ">" => Self::Child,
            "+" => Self::NextSibling,
            "~" => Self::SubsequentSibling,
            "||" => Self::Column,
            other => Self::Other(other.to_string()),
        }
    }

    /// The token as written between two selectors (without padding).
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Descendant => " ",
            Self::Child => ">",
            Self::NextSibling => "+",
            Self::SubsequentSibling => "~",
            Self::Column => "||",
            Self::Other(token) => token,
        }
    }

    /// False only for `Other`.
    #[must_use]
    pub const fn is_standard(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Combinator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One entry in the sequence passed to
/// [`SelectorBuilder::combine`](crate::SelectorBuilder::combine).
///
/// The sequence alternates operand, combinator, operand, ... but rendering
/// only looks at position: even entries are written as-is, odd entries are
/// padded with one space on each side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComplexPart {
    /// A selector operand.
    Selector(SelectorBuilder),
    /// A combinator between two operands.
    Combinator(Combinator),
}

impl ComplexPart {
    /// Render this entry without padding.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ComplexPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Selector(selector) => fmt::Display::fmt(selector, f),
            Self::Combinator(combinator) => fmt::Display::fmt(combinator, f),
        }
    }
}

impl From<SelectorBuilder> for ComplexPart {
    fn from(selector: SelectorBuilder) -> Self {
        Self::Selector(selector)
    }
}

impl From<Combinator> for ComplexPart {
    fn from(combinator: Combinator) -> Self {
        Self::Combinator(combinator)
    }
}

impl From<&str> for ComplexPart {
    fn from(token: &str) -> Self {
        Self::Combinator(Combinator::from_token(token))
    }
}

impl From<String> for ComplexPart {
    fn from(token: String) -> Self {
        Self::Combinator(Combinator::from_token(&token))
    }
}
