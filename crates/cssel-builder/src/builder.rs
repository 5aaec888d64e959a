//! Incremental selector construction.

use std::fmt;

use cssel_common::warning::warn_once;
use serde::Serialize;

use crate::{Category, ComplexPart, SelectorError};

/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
/// [§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex)
///
/// Accumulates the parts of a compound selector, checking on every call
/// that parts arrive in the order
/// element → id → class → attribute → pseudo-class → pseudo-element,
/// and renders them as a selector string.
///
/// Setters consume the builder and hand it back, so calls chain with `?`:
///
/// ```
/// use cssel_builder::SelectorBuilder;
///
/// let selector = SelectorBuilder::new()
///     .id("main")?
///     .class("container")?
///     .class("editable")?;
/// assert_eq!(selector.render(), "#main.container.editable");
/// # Ok::<(), cssel_builder::SelectorError>(())
/// ```
///
/// A builder produced by [`combine`](Self::combine) holds a complex
/// selector; its part fields are ignored when rendering and any further
/// setter call fails with [`SelectorError::Order`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectorBuilder {
    #[serde(skip_serializing_if = "Option::is_none")]
    element: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    classes: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    attributes: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pseudo_classes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pseudo_element: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    combined: Option<String>,
    /// Highest category touched so far.
    #[serde(skip)]
    cursor: Option<Category>,
}

impl SelectorBuilder {
    /// Create an empty builder. It renders as the empty string.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Set the element (tag) name, written as-is.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Order`] if any other part is already set,
    /// [`SelectorError::Duplicate`] if the element is already set.
    pub fn element(mut self, name: impl Into<String>) -> Result<Self, SelectorError> {
        let name = self.accept(Category::Element, name.into())?;
        self.element = Some(name);
        Ok(self)
    }

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Set the id, rendered with a `#` prefix.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Order`] if a class, attribute, pseudo-class or
    /// pseudo-element is already set, [`SelectorError::Duplicate`] if the
    /// id is already set.
    pub fn id(mut self, name: impl Into<String>) -> Result<Self, SelectorError> {
        let name = self.accept(Category::Id, name.into())?;
        self.id = Some(name);
        Ok(self)
    }

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Append a class, rendered with a `.` prefix. Repeats are kept.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Order`] if an attribute, pseudo-class or
    /// pseudo-element is already set.
    pub fn class(mut self, name: impl Into<String>) -> Result<Self, SelectorError> {
        let name = self.accept(Category::Class, name.into())?;
        self.classes.push(name);
        Ok(self)
    }

    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Append a raw attribute body such as `href$=".png"`; it is rendered
    /// inside `[` `]`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Order`] if a pseudo-class or pseudo-element is
    /// already set.
    pub fn attribute(mut self, body: impl Into<String>) -> Result<Self, SelectorError> {
        let body = self.accept(Category::Attribute, body.into())?;
        self.attributes.push(body);
        Ok(self)
    }

    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Append a pseudo-class, rendered with a `:` prefix.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Order`] if the pseudo-element is already set.
    pub fn pseudo_class(mut self, name: impl Into<String>) -> Result<Self, SelectorError> {
        let name = self.accept(Category::PseudoClass, name.into())?;
        self.pseudo_classes.push(name);
        Ok(self)
    }

    /// [§ 3.6 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// Set the pseudo-element, rendered with a `::` prefix.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Duplicate`] if the pseudo-element is already set,
    /// [`SelectorError::Order`] if the builder holds a combined selector.
    pub fn pseudo_element(mut self, name: impl Into<String>) -> Result<Self, SelectorError> {
        let name = self.accept(Category::PseudoElement, name.into())?;
        self.pseudo_element = Some(name);
        Ok(self)
    }

    /// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
    ///
    /// Join selectors with combinators into a complex selector.
    ///
    /// `parts` alternates operand, combinator, operand, ... Entries at even
    /// positions are rendered as-is; entries at odd positions are written
    /// with one space on either side. The descendant combinator `" "`
    /// therefore comes out as three spaces.
    ///
    /// The result replaces whatever parts this builder held.
    #[must_use]
    pub fn combine<I, P>(mut self, parts: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<ComplexPart>,
    {
        let mut combined = String::new();
        for (index, part) in parts.into_iter().map(Into::into).enumerate() {
            if let ComplexPart::Combinator(combinator) = &part {
                if !combinator.is_standard() {
                    warn_once(
                        "Selector",
                        &format!("non-standard combinator '{combinator}' used verbatim"),
                    );
                }
            }

            if index % 2 == 0 {
                combined.push_str(&part.render());
            } else {
                combined.push(' ');
                combined.push_str(&part.render());
                combined.push(' ');
            }
        }

        self.combined = Some(combined);
        self.cursor = Some(Category::Combined);
        self
    }

    /// Render the selector string. Unset parts contribute nothing.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// True when no setter and no `combine` has been applied.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.cursor.is_none()
    }

    /// The latest category applied to this builder.
    #[must_use]
    pub const fn last_category(&self) -> Option<Category> {
        self.cursor
    }

    /// The element name, if set.
    #[must_use]
    pub fn element_name(&self) -> Option<&str> {
        self.element.as_deref()
    }

    /// The id, if set.
    #[must_use]
    pub fn id_name(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Classes in insertion order.
    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Attribute bodies in insertion order.
    #[must_use]
    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    /// Pseudo-classes in insertion order.
    #[must_use]
    pub fn pseudo_classes(&self) -> &[String] {
        &self.pseudo_classes
    }

    /// The pseudo-element, if set.
    #[must_use]
    pub fn pseudo_element_name(&self) -> Option<&str> {
        self.pseudo_element.as_deref()
    }

    /// The complex selector produced by `combine`, if any.
    #[must_use]
    pub fn combined(&self) -> Option<&str> {
        self.combined.as_deref()
    }

    /// Run the ordering check for `category` and pass `value` through.
    fn accept(&mut self, category: Category, value: String) -> Result<String, SelectorError> {
        self.advance(category)?;
        if value.is_empty() {
            warn_once("Selector", &format!("empty {category} value"));
        }
        Ok(value)
    }

    /// Move the cursor to `category`.
    ///
    /// The cursor never moves backwards, and a singleton category cannot be
    /// entered twice.
    fn advance(&mut self, category: Category) -> Result<(), SelectorError> {
        match self.cursor {
            Some(after) if after > category => Err(SelectorError::Order { category, after }),
            Some(current) if current == category && category.is_singleton() => {
                Err(SelectorError::Duplicate { category })
            }
            _ => {
                self.cursor = Some(category);
                Ok(())
            }
        }
    }
}

impl fmt::Display for SelectorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(combined) = &self.combined {
            return f.write_str(combined);
        }

        if let Some(element) = &self.element {
            f.write_str(element)?;
        }
        if let Some(id) = &self.id {
            write!(f, "#{id}")?;
        }
        for class in &self.classes {
            write!(f, ".{class}")?;
        }
        for attribute in &self.attributes {
            write!(f, "[{attribute}]")?;
        }
        for pseudo_class in &self.pseudo_classes {
            write!(f, ":{pseudo_class}")?;
        }
        if let Some(pseudo_element) = &self.pseudo_element {
            write!(f, "::{pseudo_element}")?;
        }
        Ok(())
    }
}
