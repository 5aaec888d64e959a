//! Selector part categories and their mandatory order.

use serde::Serialize;
use strum_macros::{Display, EnumString};

/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
///
/// The kind of a selector part. Variants are declared in the order a
/// compound selector must be written, so `Ord` compares by rank.
///
/// `Combined` is not a part: it is the rank a builder moves to once
/// [`SelectorBuilder::combine`](crate::SelectorBuilder::combine) has
/// produced a complex selector, and it outranks every part.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString, Serialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Type selector, e.g. `div`.
    Element,
    /// ID selector, e.g. `#main`.
    Id,
    /// Class selector, e.g. `.container`.
    Class,
    /// Attribute selector, e.g. `[href$=".png"]`.
    #[strum(to_string = "attribute", serialize = "attr")]
    Attribute,
    /// Pseudo-class, e.g. `:focus`.
    PseudoClass,
    /// Pseudo-element, e.g. `::before`.
    PseudoElement,
    /// Result of joining selectors with combinators.
    Combined,
}

impl Category {
    /// Position of this category in the mandatory ordering (0-6).
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Element, id and pseudo-element may each appear at most once.
    #[must_use]
    pub const fn is_singleton(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_follows_declaration_order() {
        assert_eq!(Category::Element.rank(), 0);
        assert_eq!(Category::PseudoElement.rank(), 5);
        assert_eq!(Category::Combined.rank(), 6);
        assert!(Category::Class < Category::Attribute);
    }

    #[test]
    fn test_parse_kebab_case_names() {
        assert_eq!("pseudo-class".parse::<Category>(), Ok(Category::PseudoClass));
        assert_eq!("attr".parse::<Category>(), Ok(Category::Attribute));
        assert_eq!("attribute".parse::<Category>(), Ok(Category::Attribute));
        assert!("tag".parse::<Category>().is_err());
        assert_eq!(Category::PseudoElement.to_string(), "pseudo-element");
    }
}
