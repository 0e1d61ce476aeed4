//! Arithmetic operations used by grid cells.

use serde::{Deserialize, Serialize};

/// The operation a grid cell is solved with.
///
/// # Examples
///
/// ```
/// use tetonor_core::Operation;
///
/// assert_eq!(Operation::Add.apply(3, 7), Some(10));
/// assert_eq!(Operation::Multiply.apply(3, 7), Some(21));
/// assert_eq!(Operation::Multiply.apply(u32::MAX, 2), None);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::IsVariant,
)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Addition.
    #[display("add")]
    Add,
    /// Multiplication.
    #[display("multiply")]
    Multiply,
}

impl Operation {
    /// Both operations, addition first.
    pub const ALL: [Self; 2] = [Self::Add, Self::Multiply];

    /// Applies the operation, returning `None` on overflow.
    ///
    /// An overflowing result can never equal a stored target, so callers may
    /// treat `None` as "does not match".
    #[must_use]
    pub fn apply(self, first: u32, second: u32) -> Option<u32> {
        match self {
            Self::Add => first.checked_add(second),
            Self::Multiply => first.checked_mul(second),
        }
    }

    /// Returns the operator symbol used in textual output.
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Multiply => '×',
        }
    }

    /// Returns the gerund used in hint messages ("adding", "multiplying").
    #[must_use]
    pub fn gerund(self) -> &'static str {
        match self {
            Self::Add => "adding",
            Self::Multiply => "multiplying",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_is_commutative() {
        for op in Operation::ALL {
            assert_eq!(op.apply(4, 9), op.apply(9, 4));
        }
    }

    #[test]
    fn test_apply_overflow() {
        assert_eq!(Operation::Add.apply(u32::MAX, 1), None);
        assert_eq!(Operation::Multiply.apply(1 << 16, 1 << 16), None);
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Operation::Add).unwrap(), "\"add\"");
        assert_eq!(
            serde_json::from_str::<Operation>("\"multiply\"").unwrap(),
            Operation::Multiply
        );
    }
}
