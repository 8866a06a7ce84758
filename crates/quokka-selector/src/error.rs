//! Builder error types.
//!
//! Both conditions are fatal to the current call chain: no partial selector
//! is returned and no recovery is attempted internally. Callers handle them
//! at the point of use; the builder performs no logging.

use thiserror::Error;

/// A selector construction error.
///
/// The message text carried by each variant is part of the builder's public
/// contract; rendering a variant with `Display` always yields the same
/// fixed string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// A fragment was appended after one of a later category.
    ///
    /// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
    /// "If it contains a type selector or universal selector, that selector
    /// must come first in the sequence." The builder enforces the stricter
    /// conventional ordering across all six categories.
    #[error(
        "Selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element"
    )]
    OutOfOrder,

    /// An element, id, or pseudo-element fragment was appended a second
    /// time within one compound selector.
    #[error("Element, id and pseudo-element should not occur more then one time inside the selector")]
    DuplicatePart,
}
