//! Fluent construction of CSS selector strings.
//!
//! # Scope
//!
//! This crate implements a persistent (copy-on-write) builder for selector
//! strings per [Selectors Level 4](https://www.w3.org/TR/selectors-4/):
//!
//! - **Fragment operations**
//!   - Type (element), id, class, attribute, pseudo-class, and
//!     pseudo-element fragments, each rendered with its syntactic marker
//!     (bare name, `#`, `.`, `[...]`, `:`, `::`)
//!
//! - **Construction validation**
//!   - Fragments must be appended in the conventional order: element, id,
//!     class, attribute, pseudo-class, pseudo-element
//!   - Element, id, and pseudo-element may occur at most once per compound
//!     selector
//!
//! - **Combinators** ([§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators))
//!   - Any two selectors joined with a combinator token, inserted verbatim
//!     with single-space padding
//!
//! - **Specificity** ([§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules))
//!   - Every built selector carries its accumulated specificity
//!
//! Every operation reads its receiver and returns a freshly constructed
//! [`Selector`]; values are never mutated in place, so one root value can
//! seed any number of independent chains.
//!
//! # Not Implemented
//!
//! - Selector parsing (string to structure)
//! - Selector matching against a document tree
//! - Selector lists (`a, b`)
//!
//! # Example
//!
//! ```
//! use quokka_selector::{combine, element, id};
//!
//! let heading = id("main").class("container")?.class("editable")?;
//! assert_eq!(heading.stringify(), "#main.container.editable");
//!
//! let adjacent = combine(&element("div").id("main")?, "+", &element("table").id("data")?);
//! assert_eq!(adjacent.stringify(), "div#main + table#data");
//! # Ok::<(), quokka_selector::SelectorError>(())
//! ```

/// Builder errors for out-of-order and duplicate fragments.
pub mod error;
/// Selector construction per [Selectors Level 4](https://www.w3.org/TR/selectors-4/).
pub mod selector;

// Re-exports for convenience
pub use error::SelectorError;
pub use selector::{
    Category, Combinator, Selector, Specificity, attr, class, combine, element, id, pseudo_class,
    pseudo_element,
};
