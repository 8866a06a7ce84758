//! Selector specificity.
//!
//! [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)
//!
//! "Specificities are compared by comparing the three components in order:
//! the specificity with a larger A value is more specific; if the two A
//! values are tied, the specificity with a larger B value is more specific;
//! if the two B values are also tied, the specificity with a larger C value
//! is more specific."

use std::ops::Add;

use serde::Serialize;

/// [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)
/// "A selector's specificity is calculated for a given element as follows:
///  - count the number of ID selectors in the selector (= A)
///  - count the number of class selectors, attributes selectors, and pseudo-classes in the selector (= B)
///  - count the number of type selectors and pseudo-elements in the selector (= C)
///
/// Specificities are compared by comparing the three components in order."
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash, Serialize)]
pub struct Specificity(pub u32, pub u32, pub u32);

impl Specificity {
    /// Create a new specificity with (A, B, C) components.
    #[must_use]
    pub const fn new(a: u32, b: u32, c: u32) -> Self {
        Self(a, b, c)
    }
}

impl Add for Specificity {
    type Output = Self;

    // Component-wise, as when fragments accumulate or selectors combine.
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0, self.1 + rhs.1, self.2 + rhs.2)
    }
}
