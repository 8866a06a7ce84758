//! Fluent selector construction.
//!
//! [§ 4.1 Structure and Terminology](https://www.w3.org/TR/selectors-4/#structure)
//!
//! "A selector represents a particular pattern of element(s) in a tree
//! structure."
//!
//! A [`Selector`] is an immutable value: every operation reads the
//! receiver, validates, and returns a freshly constructed value. The zero
//! value is the shared starting point for any number of chains; the
//! crate-level entry points ([`element`], [`id`], [`class`], [`attr`],
//! [`pseudo_class`], [`pseudo_element`]) start a chain from it directly and
//! cannot fail, while the corresponding [`Selector`] methods validate
//! against the fragments already present.

/// Fragment categories and the fixed append order.
pub mod category;
/// Typed tokens for the four standard combinators.
pub mod combinator;
/// Specificity triples per [§ 17](https://www.w3.org/TR/selectors-4/#specificity-rules).
pub mod specificity;

use core::fmt;

use serde::Serialize;

pub use category::Category;
pub use combinator::Combinator;
pub use specificity::Specificity;

use crate::error::SelectorError;

/// Occurrence counters for the categories capped at one per compound
/// selector (element, id, pseudo-element).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
struct SingletonCounts {
    /// Type selector occurrences.
    element: u8,
    /// ID selector occurrences.
    id: u8,
    /// Pseudo-element occurrences.
    pseudo_element: u8,
}

impl SingletonCounts {
    /// Whether appending another fragment of `category` would exceed its cap.
    const fn at_cap(self, category: Category) -> bool {
        match category {
            Category::Element => self.element >= 1,
            Category::Id => self.id >= 1,
            Category::PseudoElement => self.pseudo_element >= 1,
            Category::Class | Category::Attribute | Category::PseudoClass => false,
        }
    }

    /// Record one more fragment of `category`.
    fn bump(&mut self, category: Category) {
        match category {
            Category::Element => self.element += 1,
            Category::Id => self.id += 1,
            Category::PseudoElement => self.pseudo_element += 1,
            Category::Class | Category::Attribute | Category::PseudoClass => {}
        }
    }
}

/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
/// [§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex)
///
/// An immutable, incrementally built selector.
///
/// Fragments are stored pre-rendered with their syntactic markers; the
/// category history and singleton counters exist only to validate further
/// fragment calls, and [`combine`] resets both (each side of a combinator
/// is validated independently, so a combined value accepts further
/// fragments validated from scratch).
///
/// # Example
///
/// ```
/// use quokka_selector::element;
///
/// let link = element("a").attr(r#"href$=".png""#)?.pseudo_class("focus")?;
/// assert_eq!(link.stringify(), r#"a[href$=".png"]:focus"#);
/// # Ok::<(), quokka_selector::SelectorError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selector {
    /// Pre-rendered fragment tokens, concatenated by [`Selector::stringify`].
    fragments: Vec<String>,
    /// Categories of the fragments appended since the last combination.
    history: Vec<Category>,
    /// Singleton-category counters since the last combination.
    counts: SingletonCounts,
    /// Accumulated specificity of every fragment, summed across
    /// combinations.
    specificity: Specificity,
}

impl Selector {
    /// The empty root selector: no fragments, empty history, zero counts.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fragments: Vec::new(),
            history: Vec::new(),
            counts: SingletonCounts {
                element: 0,
                id: 0,
                pseudo_element: 0,
            },
            specificity: Specificity(0, 0, 0),
        }
    }

    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Append a bare element name.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OutOfOrder`] if a fragment of a later category is
    /// already present; [`SelectorError::DuplicatePart`] if an element
    /// fragment is already present.
    pub fn element(&self, name: &str) -> Result<Self, SelectorError> {
        self.append(Category::Element, name)
    }

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Append an id fragment, rendered as `#name`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OutOfOrder`] if a fragment of a later category is
    /// already present; [`SelectorError::DuplicatePart`] if an id fragment
    /// is already present.
    pub fn id(&self, name: &str) -> Result<Self, SelectorError> {
        self.append(Category::Id, name)
    }

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Append a class fragment, rendered as `.name`. Classes may repeat.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OutOfOrder`] if a fragment of a later category is
    /// already present.
    pub fn class(&self, name: &str) -> Result<Self, SelectorError> {
        self.append(Category::Class, name)
    }

    /// [§ 6 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Append an attribute fragment. The expression is inserted verbatim
    /// between brackets: `href$=".png"` renders as `[href$=".png"]`.
    /// Attribute fragments may repeat.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OutOfOrder`] if a fragment of a later category is
    /// already present.
    pub fn attr(&self, expression: &str) -> Result<Self, SelectorError> {
        self.append(Category::Attribute, expression)
    }

    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Append a pseudo-class fragment, rendered as `:name`. The name is
    /// inserted verbatim, so functional forms like `nth-of-type(even)` pass
    /// through unchanged. Pseudo-class fragments may repeat.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OutOfOrder`] if a fragment of a later category is
    /// already present.
    pub fn pseudo_class(&self, name: &str) -> Result<Self, SelectorError> {
        self.append(Category::PseudoClass, name)
    }

    /// [§ 11 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// Append a pseudo-element fragment, rendered as `::name`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OutOfOrder`] if a fragment of a later category is
    /// already present; [`SelectorError::DuplicatePart`] if a
    /// pseudo-element fragment is already present.
    pub fn pseudo_element(&self, name: &str) -> Result<Self, SelectorError> {
        self.append(Category::PseudoElement, name)
    }

    /// Concatenate the fragments in append order, with no separator.
    ///
    /// Pure read, safe to call repeatedly; equivalent to the
    /// [`fmt::Display`] rendering.
    #[must_use]
    pub fn stringify(&self) -> String {
        self.fragments.concat()
    }

    /// [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)
    ///
    /// Accumulated specificity of every fragment appended so far, including
    /// both sides of every combination.
    #[must_use]
    pub const fn specificity(&self) -> Specificity {
        self.specificity
    }

    /// Validate-then-append one fragment.
    ///
    /// The order check runs first: a fragment may not follow one of a
    /// strictly later category. Equal categories are allowed, subject to
    /// the singleton cap.
    fn append(&self, category: Category, value: &str) -> Result<Self, SelectorError> {
        if self.history.last().is_some_and(|&last| last > category) {
            return Err(SelectorError::OutOfOrder);
        }
        if self.counts.at_cap(category) {
            return Err(SelectorError::DuplicatePart);
        }

        let mut next = self.clone();
        next.fragments.push(category.fragment(value));
        next.history.push(category);
        next.counts.bump(category);
        next.specificity = next.specificity + category.specificity();
        Ok(next)
    }
}

impl Default for Selector {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for fragment in &self.fragments {
            f.write_str(fragment)?;
        }
        Ok(())
    }
}

/// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
///
/// Start a chain with a bare element name. Infallible: the empty root
/// accepts any first fragment.
#[must_use]
pub fn element(name: &str) -> Selector {
    seed(Category::Element, name)
}

/// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
///
/// Start a chain with an id fragment (`#name`).
#[must_use]
pub fn id(name: &str) -> Selector {
    seed(Category::Id, name)
}

/// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
///
/// Start a chain with a class fragment (`.name`).
#[must_use]
pub fn class(name: &str) -> Selector {
    seed(Category::Class, name)
}

/// [§ 6 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
///
/// Start a chain with an attribute fragment (`[expression]`).
#[must_use]
pub fn attr(expression: &str) -> Selector {
    seed(Category::Attribute, expression)
}

/// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
///
/// Start a chain with a pseudo-class fragment (`:name`).
#[must_use]
pub fn pseudo_class(name: &str) -> Selector {
    seed(Category::PseudoClass, name)
}

/// [§ 11 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
///
/// Start a chain with a pseudo-element fragment (`::name`).
#[must_use]
pub fn pseudo_element(name: &str) -> Selector {
    seed(Category::PseudoElement, name)
}

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// "A combinator is punctuation that represents a particular kind of
/// relationship between the selectors on either side."
///
/// Join two selectors with a combinator token. The token is inserted
/// verbatim, padded with a single space on each side; it is not validated
/// against the standard set ([`Combinator::as_str`] provides the standard
/// four). Specificities of both sides are summed.
///
/// The result's category history and singleton counters are reset, so
/// further fragment calls on a combined selector validate from scratch.
///
/// # Example
///
/// ```
/// use quokka_selector::{Combinator, combine, element};
///
/// let pair = combine(
///     &element("div").id("main")?,
///     Combinator::NextSibling.as_str(),
///     &element("table").id("data")?,
/// );
/// assert_eq!(pair.stringify(), "div#main + table#data");
/// # Ok::<(), quokka_selector::SelectorError>(())
/// ```
#[must_use]
pub fn combine(left: &Selector, combinator: &str, right: &Selector) -> Selector {
    let mut fragments = Vec::with_capacity(left.fragments.len() + right.fragments.len() + 1);
    fragments.extend_from_slice(&left.fragments);
    fragments.push(format!(" {combinator} "));
    fragments.extend_from_slice(&right.fragments);

    Selector {
        fragments,
        history: Vec::new(),
        counts: SingletonCounts::default(),
        specificity: left.specificity + right.specificity,
    }
}

/// Seed a fresh chain with one fragment. The empty root accepts any first
/// category, so no validation is needed.
fn seed(category: Category, value: &str) -> Selector {
    let mut counts = SingletonCounts::default();
    counts.bump(category);
    Selector {
        fragments: vec![category.fragment(value)],
        history: vec![category],
        counts,
        specificity: category.specificity(),
    }
}
