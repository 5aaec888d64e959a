//! Errors raised while assembling a selector.

use thiserror::Error;

use crate::Category;

/// A setter was called in a sequence CSS does not allow.
///
/// Both variants are caller mistakes; the builder that raised them is
/// consumed and should not be reused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// A singleton part (element, id, pseudo-element) was set twice.
    #[error("{category} is already set on this selector")]
    Duplicate {
        /// The part that was set again.
        category: Category,
    },

    /// A part was supplied after a part that must follow it.
    #[error("{category} cannot come after {after}")]
    Order {
        /// The part that was rejected.
        category: Category,
        /// The latest part already present on the builder.
        after: Category,
    },
}
