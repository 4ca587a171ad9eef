//! The two masking domains.

/// Recombination domain of a [`super::MaskedUint`](crate::masking::MaskedUint).
///
/// `BOOLEAN` shares recombine under XOR; `ARITHMETIC` shares recombine
/// under modular addition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    Boolean,
    Arithmetic,
}
