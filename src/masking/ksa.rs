//! Masked Kogge-Stone carry/borrow generation (§4.C6) and the Boolean
//! adder/subtractor built on top of it (§4.C7).
//!
//! This is a masked parallel-prefix network: `P`/`G` (propagate/generate)
//! words are folded `log2(w)` times, each fold consuming one DOM AND
//! gadget call, following Liu et al., "Towards Efficient and Secure
//! Arithmetic-to-Boolean / Boolean-to-Arithmetic Conversions" (2024) §4.

use crate::error::MaskingError;
use crate::masking::dom::bool_and;
use crate::masking::linear::{bool_not, bool_shl, bool_xor};
use crate::masking::masked::MaskedUint;
use crate::primitives::uint::UintWord;
use crate::rng::RandomSource;

/// Masked Kogge-Stone carry generation: the carry-out word of
/// `unmask(a) + unmask(b)`, Boolean-masked, each bit shifted left by one
/// position (bit `i+1` holds the carry out of bit `i`).
pub fn carry<U: UintWord, R: RandomSource>(
    a: &MaskedUint<U>,
    b: &MaskedUint<U>,
    rng: &mut R,
) -> Result<MaskedUint<U>, MaskingError> {
    let mut p = bool_xor(a, b)?;
    let mut g = bool_and(a, b, rng)?;

    let mut k = 1;
    while k < U::BITS {
        let p_shift = bool_shl(&p, k)?;
        let g_shift = bool_shl(&g, k)?;

        g = bool_xor(&g, &bool_and(&p, &g_shift, rng)?)?;
        p = bool_and(&p, &p_shift, rng)?;

        k *= 2;
    }

    bool_shl(&g, 1)
}

/// Masked Kogge-Stone borrow generation: the borrow word of
/// `unmask(a) - unmask(b)`, following the same prefix network as
/// [`carry`] but seeded from `~a` and accumulating the extra
/// conjunction term Liu et al.'s borrow chain requires.
pub fn borrow<U: UintWord, R: RandomSource>(
    a: &MaskedUint<U>,
    b: &MaskedUint<U>,
    rng: &mut R,
) -> Result<MaskedUint<U>, MaskingError> {
    let not_a = bool_not(a)?;
    let mut p = bool_xor(&not_a, b)?;
    let mut g = bool_and(&not_a, b, rng)?;

    let mut k = 1;
    while k < U::BITS {
        let p_shift = bool_shl(&p, k)?;
        let g_shift = bool_shl(&g, k)?;

        let t = bool_and(&p, &g_shift, rng)?;
        let tmp2 = bool_and(&g, &t, rng)?;

        g = bool_xor(&bool_xor(&g, &t)?, &tmp2)?;
        p = bool_and(&p, &p_shift, rng)?;

        k *= 2;
    }

    bool_shl(&g, 1)
}

/// Boolean-masked addition: `XOR(XOR(a,b), carry(a,b))`.
pub fn bool_add<U: UintWord, R: RandomSource>(
    a: &MaskedUint<U>,
    b: &MaskedUint<U>,
    rng: &mut R,
) -> Result<MaskedUint<U>, MaskingError> {
    bool_xor(&bool_xor(a, b)?, &carry(a, b, rng)?)
}

/// Boolean-masked subtraction: `XOR(XOR(a,b), borrow(a,b))`.
pub fn bool_sub<U: UintWord, R: RandomSource>(
    a: &MaskedUint<U>,
    b: &MaskedUint<U>,
    rng: &mut R,
) -> Result<MaskedUint<U>, MaskingError> {
    bool_xor(&bool_xor(a, b)?, &borrow(a, b, rng)?)
}
