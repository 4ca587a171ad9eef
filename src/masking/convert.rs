//! Domain converters: Boolean→Arithmetic via the affine-ψ recursion of
//! Bettale, Coron & Zeitoun, "Improved High-Order Conversion From
//! Boolean to Arithmetic Masking" (2018) (§4.C8), and
//! Arithmetic→Boolean via a carry-save-adder tree feeding a masked
//! Kogge-Stone adder, following Liu et al. 2024 (§4.C9).

use crate::error::MaskingError;
use crate::masking::dom::bool_and;
use crate::masking::domain::Domain;
use crate::masking::ksa;
use crate::masking::linear::{bool_shl, bool_xor};
use crate::masking::masked::MaskedUint;
use crate::primitives::uint::UintWord;
use crate::rng::RandomSource;

/// The affine map `ψ(u,v) = (u ⊕ v) - v` the B→A recursion is built on.
fn psi<U: UintWord>(u: U, v: U) -> U {
    (u ^ v) - v
}

/// Recursive core of the B→A conversion. `x` holds `n+1` raw Boolean
/// shares; returns `n` raw Arithmetic shares summing to the same
/// secret. Cost is `O(2^d · w)` in the number of recursive calls.
fn btoa_convert<U: UintWord, R: RandomSource>(x: &[U], rng: &mut R) -> Vec<U> {
    if x.len() == 2 {
        return vec![x[0] ^ x[1]];
    }

    let mut x = x.to_vec();
    let n = x.len() - 1;

    let fresh = MaskedUint::<U>::sample_words(n - 1, rng);
    for (i, r) in fresh.into_iter().enumerate() {
        let idx = i + 1;
        x[0] = x[0] ^ r;
        x[idx] = x[idx] ^ r;
    }

    let mut y = Vec::with_capacity(n);
    let parity_term = if (n - 1) % 2 == 1 { x[0] } else { U::zero() };
    y.push(parity_term ^ psi(x[0], x[1]));
    for i in 1..n {
        y.push(psi(x[0], x[i + 1]));
    }

    let first = btoa_convert(&x[1..=n], rng);
    let second = btoa_convert(&y, rng);

    let m = first.len();
    let mut out = Vec::with_capacity(m + 1);
    for i in 0..m.saturating_sub(1) {
        out.push(first[i] + second[i]);
    }
    out.push(first[m - 1]);
    out.push(second[m - 1]);
    out
}

/// Converts a Boolean-masked value to the Arithmetic domain, preserving
/// order and secret.
///
/// # Errors
/// Returns [`MaskingError::DomainMismatch`] if `a` is not Boolean-masked.
pub fn btoa<U: UintWord, R: RandomSource>(
    a: &MaskedUint<U>,
    rng: &mut R,
) -> Result<MaskedUint<U>, MaskingError> {
    a.check_domain(Domain::Boolean)?;

    let mut x = a.shares();
    x.push(U::zero());

    let out = btoa_convert(&x, rng);
    Ok(MaskedUint::from_shares(out, a.order(), Domain::Arithmetic))
}

/// Carry-save-adder reduction step: folds three Boolean-masked words
/// into a sum/carry pair without propagating carries.
fn csa<U: UintWord, R: RandomSource>(
    x: &MaskedUint<U>,
    y: &MaskedUint<U>,
    z: &MaskedUint<U>,
    rng: &mut R,
) -> Result<(MaskedUint<U>, MaskedUint<U>), MaskingError> {
    let a = bool_xor(x, y)?;
    let s = bool_xor(&a, z)?;
    let w = bool_xor(x, z)?;
    let v = bool_and(&a, &w, rng)?;
    let c = bool_shl(&bool_xor(x, &v)?, 1)?;
    Ok((s, c))
}

/// Folds a list of `k >= 3` Boolean-masked words down to a sum/carry
/// pair by repeated [`csa`] reduction.
fn csa_tree<U: UintWord, R: RandomSource>(
    values: &[MaskedUint<U>],
    rng: &mut R,
) -> Result<(MaskedUint<U>, MaskedUint<U>), MaskingError> {
    let k = values.len();
    if k == 3 {
        return csa(&values[0], &values[1], &values[2], rng);
    }
    let (s, c) = csa_tree(&values[..k - 1], rng)?;
    csa(&s, &c, &values[k - 1], rng)
}

/// Converts an Arithmetic-masked value to the Boolean domain, preserving
/// order and secret. Cost is `O(d^2 log w)`: each of the `d+1` shares is
/// individually re-masked (Boolean, order `d`), folded by a CSA tree,
/// and combined by one masked Kogge-Stone adder.
///
/// # Errors
/// Returns [`MaskingError::DomainMismatch`] if `a` is not
/// Arithmetic-masked.
pub fn atob<U: UintWord, R: RandomSource>(
    a: &MaskedUint<U>,
    rng: &mut R,
) -> Result<MaskedUint<U>, MaskingError> {
    a.check_domain(Domain::Arithmetic)?;

    let order = a.order();
    let wrapped: Vec<MaskedUint<U>> = a
        .shares()
        .into_iter()
        .map(|share| {
            MaskedUint::new(share, order, Domain::Boolean, rng)
                .expect("order >= 1 already validated by the arithmetic operand")
        })
        .collect();

    let (s, c) = if wrapped.len() == 2 {
        (wrapped[0].clone(), wrapped[1].clone())
    } else {
        csa_tree(&wrapped, rng)?
    };

    ksa::bool_add(&s, &c, rng)
}
