//! Order-checked construction of CSS selector strings.
//!
//! # Scope
//!
//! This crate builds selectors from parts; it does not parse, match or
//! compute specificity.
//!
//! - **Compound selectors** ([§ 4.2](https://www.w3.org/TR/selectors-4/#compound))
//!   - Element, id, class, attribute, pseudo-class and pseudo-element parts
//!   - Parts must arrive in that order; element, id and pseudo-element at most once
//!
//! - **Complex selectors** ([§ 4.3](https://www.w3.org/TR/selectors-4/#complex))
//!   - Compound selectors joined by descendant, child, sibling, column or
//!     caller-supplied combinators
//!
//! Part values are passed through verbatim: no escaping and no identifier
//! validation.

/// Selector part categories and their ranks.
pub mod category;
/// Combinator tokens and complex selector entries.
pub mod combinator;
/// Builder errors.
pub mod error;
/// Free-function constructors.
pub mod facade;

mod builder;

pub use builder::SelectorBuilder;
pub use category::Category;
pub use combinator::{Combinator, ComplexPart};
pub use error::SelectorError;
pub use facade::{attr, class, combine, element, id, pseudo_class, pseudo_element};

/// Build a complex selector from a mixed list of operands and combinator
/// tokens.
///
/// Each argument is converted with [`ComplexPart::from`], so builders,
/// [`Combinator`]s and string tokens can be listed side by side.
///
/// ```
/// use cssel_builder::{complex, element};
///
/// let list = complex!(element("ul")?, ">", element("li")?);
/// assert_eq!(list.render(), "ul > li");
/// # Ok::<(), cssel_builder::SelectorError>(())
/// ```
#[macro_export]
macro_rules! complex {
    ($($part:expr),* $(,)?) => {
        $crate::facade::combine([$($crate::ComplexPart::from($part)),*])
    };
}
