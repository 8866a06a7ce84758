//! Fragment categories and their ordering.
//!
//! [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
//!
//! "A compound selector is a sequence of simple selectors that are not
//! separated by a combinator, and represents a set of simultaneous
//! conditions on a single element."
//!
//! Fragments are grouped into six categories. Within one compound selector
//! the builder only accepts categories in declaration order, so the order
//! check reduces to an [`Ord`] comparison on [`Category`].

use serde::Serialize;
use strum_macros::{Display, EnumIter};

use super::specificity::Specificity;

/// The category of one selector fragment.
///
/// The declaration order is the required append order: a fragment may only
/// follow fragments of the same or an earlier category. The derived [`Ord`]
/// reflects that order, and [`Display`] renders the CSS vocabulary name
/// (`element`, `id`, `class`, `attribute`, `pseudo-class`,
/// `pseudo-element`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Display, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum Category {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    /// "A type selector is the name of a document language element type."
    ///
    /// Rendered bare: `div`, `a`, `table`.
    Element,

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    /// "An ID selector is a hash (#, U+0023) immediately followed by the
    /// ID value."
    Id,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    /// "The class selector is given as a full stop (. U+002E) immediately
    /// followed by an identifier."
    Class,

    /// [§ 6 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    /// The attribute expression is wrapped in brackets: `[href$=".png"]`.
    Attribute,

    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    /// Prefixed with a single colon: `:focus`, `:nth-of-type(even)`.
    PseudoClass,

    /// [§ 11 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    /// "The syntax of a pseudo-element is '::' (two U+003A COLON
    /// characters) followed by the name of the pseudo-element."
    PseudoElement,
}

impl Category {
    /// Position of this category in the required append order (0 to 5).
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Whether this category may occur at most once per compound selector.
    ///
    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    /// "What makes attributes of type ID special is that no two such
    /// attributes can have the same value in a conformant document."
    #[must_use]
    pub const fn is_singleton(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }

    /// Render one value of this category as a fragment with its syntactic
    /// marker. The value itself is inserted verbatim.
    #[must_use]
    pub fn fragment(self, value: &str) -> String {
        match self {
            Self::Element => value.to_string(),
            Self::Id => format!("#{value}"),
            Self::Class => format!(".{value}"),
            Self::Attribute => format!("[{value}]"),
            Self::PseudoClass => format!(":{value}"),
            Self::PseudoElement => format!("::{value}"),
        }
    }

    /// [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)
    ///
    /// "count the number of ID selectors in the selector (= A)
    ///  count the number of class selectors, attributes selectors, and
    ///  pseudo-classes in the selector (= B)
    ///  count the number of type selectors and pseudo-elements in the
    ///  selector (= C)"
    ///
    /// Specificity contributed by one fragment of this category.
    #[must_use]
    pub const fn specificity(self) -> Specificity {
        match self {
            Self::Id => Specificity(1, 0, 0),
            Self::Class | Self::Attribute | Self::PseudoClass => Specificity(0, 1, 0),
            Self::Element | Self::PseudoElement => Specificity(0, 0, 1),
        }
    }
}
