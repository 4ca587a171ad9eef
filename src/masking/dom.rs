//! Domain-Oriented Masking bilinear gadget (§4.C4): the d-th order
//! secure AND/multiplication primitive of Groß et al., "Domain-Oriented
//! Masking" (CHES 2016, independent variant).
//! <https://eprint.iacr.org/2016/486.pdf>
//!
//! Every cross term `x_j ⊗ y_i` is immediately resharded with an
//! independent fresh mask before being folded back into the output
//! shares, so no wire ever carries a bilinear combination of two
//! same-index shares from both operands.

use crate::error::MaskingError;
use crate::masking::domain::Domain;
use crate::masking::masked::MaskedUint;
use crate::masking::linear::bool_xor;
use crate::primitives::uint::UintWord;
use crate::rng::RandomSource;

/// Runs the DOM-independent bilinear gadget for the share-pair operator
/// `op`, requiring both operands to already be in `required_domain`.
///
/// `op` computes `and_` for the Boolean AND gadget and `mul` for the
/// Arithmetic multiplication gadget; the masking/unmasking combine
/// operators are selected by the operands' domain tag, exactly as in
/// the reference algorithm.
fn dom_bilinear<U: UintWord, R: RandomSource>(
    a: &MaskedUint<U>,
    b: &MaskedUint<U>,
    required_domain: Domain,
    rng: &mut R,
    op: impl Fn(U, U) -> U,
) -> Result<MaskedUint<U>, MaskingError> {
    MaskedUint::check_same_order(a, b)?;
    a.check_domain(required_domain)?;
    b.check_domain(required_domain)?;

    let x = a.shares();
    let y = b.shares();
    let share_count = a.order() + 1;

    let mut out: Vec<U> = (0..share_count).map(|i| op(x[i], y[i])).collect();

    let pair_count = share_count * a.order() / 2;
    let rand_vals = MaskedUint::<U>::sample_words(pair_count, rng);
    let mut rand_vals = rand_vals.into_iter();

    let combine = |lhs: U, rhs: U| match required_domain {
        Domain::Boolean => lhs ^ rhs,
        Domain::Arithmetic => lhs - rhs,
    };
    let recombine = |lhs: U, rhs: U| match required_domain {
        Domain::Boolean => lhs ^ rhs,
        Domain::Arithmetic => lhs + rhs,
    };

    for i in 0..a.order() {
        for j in (i + 1)..share_count {
            let rand = rand_vals.next().expect("enough fresh masks were sampled");

            let o_ji = op(x[j], y[i]);
            let o_ij = op(x[i], y[j]);

            let p_ji = combine(o_ji, rand);
            let p_ij = recombine(o_ij, rand);

            out[i] = recombine(out[i], p_ij);
            out[j] = recombine(out[j], p_ji);
        }
    }

    Ok(MaskedUint::from_shares(out, a.order(), required_domain))
}

/// DOM AND: a d-th order secure Boolean-masked bitwise AND.
pub fn bool_and<U: UintWord, R: RandomSource>(
    a: &MaskedUint<U>,
    b: &MaskedUint<U>,
    rng: &mut R,
) -> Result<MaskedUint<U>, MaskingError> {
    dom_bilinear(a, b, Domain::Boolean, rng, |x, y| x & y)
}

/// DOM multiplication: a d-th order secure Arithmetic-masked modular
/// multiplication.
pub fn arith_mul<U: UintWord, R: RandomSource>(
    a: &MaskedUint<U>,
    b: &MaskedUint<U>,
    rng: &mut R,
) -> Result<MaskedUint<U>, MaskingError> {
    dom_bilinear(a, b, Domain::Arithmetic, rng, |x, y| x * y)
}

/// Boolean-masked bitwise OR, built from DOM AND and the linear XOR
/// gadget: `a | b = (a & b) ^ a ^ b`.
pub fn bool_or<U: UintWord, R: RandomSource>(
    a: &MaskedUint<U>,
    b: &MaskedUint<U>,
    rng: &mut R,
) -> Result<MaskedUint<U>, MaskingError> {
    let anded = bool_and(a, b, rng)?;
    let xored = bool_xor(a, b)?;
    bool_xor(&anded, &xored)
}
