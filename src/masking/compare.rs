//! Comparators and the constant-time select gadget (§4.C10).
//!
//! All comparators require Boolean-masked operands (see `original_source`
//! cross-check in SPEC_FULL.md §4) and produce a Boolean-masked result:
//! either a single bit (`0`/`1`) or, with `full_mask`, a fully broadcast
//! mask (`0` or `2^w - 1`) suitable for [`select`].

use crate::error::MaskingError;
use crate::masking::dom::{bool_and, bool_or};
use crate::masking::domain::Domain;
use crate::masking::ksa::bool_sub;
use crate::masking::linear::{bool_not, bool_shr, bool_xor};
use crate::masking::masked::MaskedUint;
use crate::primitives::uint::UintWord;
use crate::rng::RandomSource;

/// Flips a single share (`masked_value`) by XOR-ing in a plaintext
/// constant. This is the comparator negation pattern: algebraically
/// equivalent to XOR-ing the constant into the secret, since the other
/// shares are untouched.
fn negate<U: UintWord>(a: &MaskedUint<U>, constant: U) -> MaskedUint<U> {
    let mut shares = a.shares();
    shares[0] = shares[0] ^ constant;
    MaskedUint::from_shares(shares, a.order(), a.domain())
}

fn negate_bit_or_mask<U: UintWord>(a: &MaskedUint<U>, full_mask: bool) -> MaskedUint<U> {
    let constant = if full_mask { U::max_value() } else { U::one() };
    negate(a, constant)
}

/// `a < b`, both Boolean-masked. Returns a Boolean-masked `0`/`1` bit,
/// or (with `full_mask`) a fully broadcast `0`/`2^w-1` mask.
pub fn cmp_lt<U: UintWord, R: RandomSource>(
    a: &MaskedUint<U>,
    b: &MaskedUint<U>,
    full_mask: bool,
    rng: &mut R,
) -> Result<MaskedUint<U>, MaskingError> {
    MaskedUint::check_same_order(a, b)?;
    a.check_domain(Domain::Boolean)?;
    b.check_domain(Domain::Boolean)?;

    let diff = bool_sub(a, b, rng)?;
    let t0 = bool_xor(a, b)?;
    let t1 = bool_xor(&diff, b)?;
    let tmp = bool_or(&t0, &t1, rng)?;
    let tmp = bool_xor(a, &tmp)?;

    let mut out = bool_shr(&tmp, U::BITS - 1)?;

    if full_mask {
        let one = MaskedUint::from_public(U::one(), out.order(), Domain::Boolean);
        let shifted_down = bool_sub(&out, &one, rng)?;
        out = bool_not(&shifted_down)?;
    }

    out.refresh_masks(rng);
    Ok(out)
}

/// `a > b`, i.e. `b < a`.
pub fn cmp_gt<U: UintWord, R: RandomSource>(
    a: &MaskedUint<U>,
    b: &MaskedUint<U>,
    full_mask: bool,
    rng: &mut R,
) -> Result<MaskedUint<U>, MaskingError> {
    cmp_lt(b, a, full_mask, rng)
}

/// `a <= b`, i.e. `NOT(b < a)`.
pub fn cmp_le<U: UintWord, R: RandomSource>(
    a: &MaskedUint<U>,
    b: &MaskedUint<U>,
    full_mask: bool,
    rng: &mut R,
) -> Result<MaskedUint<U>, MaskingError> {
    let lt = cmp_lt(b, a, full_mask, rng)?;
    let mut out = negate_bit_or_mask(&lt, full_mask);
    out.refresh_masks(rng);
    Ok(out)
}

/// `a >= b`, i.e. `NOT(a < b)`.
pub fn cmp_ge<U: UintWord, R: RandomSource>(
    a: &MaskedUint<U>,
    b: &MaskedUint<U>,
    full_mask: bool,
    rng: &mut R,
) -> Result<MaskedUint<U>, MaskingError> {
    let lt = cmp_lt(a, b, full_mask, rng)?;
    let mut out = negate_bit_or_mask(&lt, full_mask);
    out.refresh_masks(rng);
    Ok(out)
}

/// `a == b`, i.e. `AND(a >= b, a <= b)`.
pub fn cmp_eq<U: UintWord, R: RandomSource>(
    a: &MaskedUint<U>,
    b: &MaskedUint<U>,
    full_mask: bool,
    rng: &mut R,
) -> Result<MaskedUint<U>, MaskingError> {
    let ge = cmp_ge(a, b, full_mask, rng)?;
    let le = cmp_le(a, b, full_mask, rng)?;
    let mut out = bool_and(&ge, &le, rng)?;
    out.refresh_masks(rng);
    Ok(out)
}

/// `a != b`, i.e. `NOT(a == b)`.
pub fn cmp_ne<U: UintWord, R: RandomSource>(
    a: &MaskedUint<U>,
    b: &MaskedUint<U>,
    full_mask: bool,
    rng: &mut R,
) -> Result<MaskedUint<U>, MaskingError> {
    let eq = cmp_eq(a, b, full_mask, rng)?;
    let mut out = negate_bit_or_mask(&eq, full_mask);
    out.refresh_masks(rng);
    Ok(out)
}

/// Constant-time multiplexer: `mask` must be a full-mask Boolean-masked
/// word (`0` or `2^w - 1`, e.g. as produced by the comparators with
/// `full_mask=true`). Returns `t` where `mask` unmasks to all-ones,
/// `f` where it unmasks to zero — no data-dependent branching.
pub fn select<U: UintWord, R: RandomSource>(
    t: &MaskedUint<U>,
    f: &MaskedUint<U>,
    mask: &MaskedUint<U>,
    rng: &mut R,
) -> Result<MaskedUint<U>, MaskingError> {
    MaskedUint::check_same_order(t, f)?;
    MaskedUint::check_same_order(t, mask)?;
    t.check_domain(Domain::Boolean)?;
    f.check_domain(Domain::Boolean)?;
    mask.check_domain(Domain::Boolean)?;

    let d = bool_xor(t, f)?;
    let d = bool_and(mask, &d, rng)?;
    let mut out = bool_xor(&d, f)?;
    out.refresh_masks(rng);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::uint::Uint32;
    use crate::rng::Csprng;

    fn masked(secret: u32, order: usize, rng: &mut Csprng) -> MaskedUint<Uint32> {
        MaskedUint::new(Uint32(secret), order, Domain::Boolean, rng).unwrap()
    }

    #[test]
    fn cmp_lt_bit_matches_scenario_p6() {
        let mut rng = Csprng::new();
        let a = masked(3, 2, &mut rng);
        let b = masked(5, 2, &mut rng);
        assert_eq!(cmp_lt(&a, &b, false, &mut rng).unwrap().unmask(), Uint32(1));
        assert_eq!(cmp_lt(&b, &a, false, &mut rng).unwrap().unmask(), Uint32(0));
    }

    #[test]
    fn cmp_lt_full_mask_broadcasts() {
        let mut rng = Csprng::new();
        let a = masked(3, 2, &mut rng);
        let b = masked(5, 2, &mut rng);
        assert_eq!(
            cmp_lt(&a, &b, true, &mut rng).unwrap().unmask(),
            Uint32(u32::MAX)
        );
        assert_eq!(cmp_lt(&b, &a, true, &mut rng).unwrap().unmask(), Uint32(0));
    }

    #[test]
    fn comparators_agree_with_native_ordering() {
        let mut rng = Csprng::new();
        for (x, y) in [(3u32, 5u32), (5, 3), (4, 4)] {
            let a = masked(x, 2, &mut rng);
            let b = masked(y, 2, &mut rng);
            assert_eq!(cmp_lt(&a, &b, false, &mut rng).unwrap().unmask().0, (x < y) as u32);
            assert_eq!(cmp_gt(&a, &b, false, &mut rng).unwrap().unmask().0, (x > y) as u32);
            assert_eq!(cmp_le(&a, &b, false, &mut rng).unwrap().unmask().0, (x <= y) as u32);
            assert_eq!(cmp_ge(&a, &b, false, &mut rng).unwrap().unmask().0, (x >= y) as u32);
            assert_eq!(cmp_eq(&a, &b, false, &mut rng).unwrap().unmask().0, (x == y) as u32);
            assert_eq!(cmp_ne(&a, &b, false, &mut rng).unwrap().unmask().0, (x != y) as u32);
        }
    }

    #[test]
    fn select_matches_scenario_p7() {
        let mut rng = Csprng::new();
        let t = masked(0xAAAA, 2, &mut rng);
        let f = masked(0x5555, 2, &mut rng);
        let all_ones = MaskedUint::new(Uint32(u32::MAX), 2, Domain::Boolean, &mut rng).unwrap();
        let all_zero = MaskedUint::new(Uint32(0), 2, Domain::Boolean, &mut rng).unwrap();

        assert_eq!(select(&t, &f, &all_ones, &mut rng).unwrap().unmask(), Uint32(0xAAAA));
        assert_eq!(select(&t, &f, &all_zero, &mut rng).unwrap().unmask(), Uint32(0x5555));
    }
}
