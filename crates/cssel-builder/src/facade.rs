//! Free-function entry points.
//!
//! Each function starts a fresh [`SelectorBuilder`] and applies one
//! operation to it, so a selector can be started without naming the type:
//!
//! ```
//! use cssel_builder::facade;
//!
//! let link = facade::element("a")?.attribute(r#"href$=".png""#)?.pseudo_class("focus")?;
//! assert_eq!(link.render(), r#"a[href$=".png"]:focus"#);
//! # Ok::<(), cssel_builder::SelectorError>(())
//! ```

use crate::{ComplexPart, SelectorBuilder, SelectorError};

/// Start a selector with an element name.
///
/// # Errors
///
/// Never fails on a fresh builder; the `Result` keeps the chain uniform.
pub fn element(name: impl Into<String>) -> Result<SelectorBuilder, SelectorError> {
    SelectorBuilder::new().element(name)
}

/// Start a selector with an id.
///
/// # Errors
///
/// Never fails on a fresh builder.
pub fn id(name: impl Into<String>) -> Result<SelectorBuilder, SelectorError> {
    SelectorBuilder::new().id(name)
}

/// Start a selector with a class.
///
/// # Errors
///
/// Never fails on a fresh builder.
pub fn class(name: impl Into<String>) -> Result<SelectorBuilder, SelectorError> {
    SelectorBuilder::new().class(name)
}

/// Start a selector with an attribute body.
///
/// # Errors
///
/// Never fails on a fresh builder.
pub fn attr(body: impl Into<String>) -> Result<SelectorBuilder, SelectorError> {
    SelectorBuilder::new().attribute(body)
}

/// Start a selector with a pseudo-class.
///
/// # Errors
///
/// Never fails on a fresh builder.
pub fn pseudo_class(name: impl Into<String>) -> Result<SelectorBuilder, SelectorError> {
    SelectorBuilder::new().pseudo_class(name)
}

/// Start a selector with a pseudo-element.
///
/// # Errors
///
/// Never fails on a fresh builder.
pub fn pseudo_element(name: impl Into<String>) -> Result<SelectorBuilder, SelectorError> {
    SelectorBuilder::new().pseudo_element(name)
}

/// Build a complex selector from alternating operands and combinators.
///
/// See [`SelectorBuilder::combine`] for the rendering rules, and the
/// [`complex!`](crate::complex) macro for mixing operand and combinator
/// arguments without converting them by hand.
#[must_use]
pub fn combine<I, P>(parts: I) -> SelectorBuilder
where
    I: IntoIterator<Item = P>,
    P: Into<ComplexPart>,
{
    SelectorBuilder::new().combine(parts)
}
