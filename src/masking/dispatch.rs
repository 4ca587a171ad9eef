//! Auto-domain adaptation (§4.C11): wraps a binary gadget so operands
//! whose domain doesn't match what the gadget requires are converted
//! automatically via [`btoa`]/[`atob`] before the gadget runs.
//!
//! Every public entry point below exposes both a convenience path
//! (`auto_domain = true`) and a strict path (`auto_domain = false`),
//! mirroring the teacher's own `Csprng::new` (convenience) vs.
//! `Csprng::from_seed` (explicit) pairing.

use crate::error::MaskingError;
use crate::masking::convert::{atob, btoa};
use crate::masking::domain::Domain;
use crate::masking::masked::MaskedUint;
use crate::primitives::uint::UintWord;
use crate::rng::RandomSource;

/// Converts `value` into `target` domain if it isn't already there.
fn adapt<U: UintWord, R: RandomSource>(
    value: &MaskedUint<U>,
    target: Domain,
    rng: &mut R,
) -> Result<MaskedUint<U>, MaskingError> {
    if value.domain() == target {
        return Ok(value.clone());
    }
    match target {
        Domain::Boolean => atob(value, rng),
        Domain::Arithmetic => btoa(value, rng),
    }
}

/// Runs a binary gadget `op` after ensuring both operands are in
/// `required_domain`. If `auto_domain` is false and either operand's
/// domain mismatches, fails with [`MaskingError::DomainMismatch`]
/// instead of converting.
pub fn dispatch_binary<U: UintWord, R: RandomSource>(
    a: &MaskedUint<U>,
    b: &MaskedUint<U>,
    required_domain: Domain,
    auto_domain: bool,
    rng: &mut R,
    op: impl FnOnce(&MaskedUint<U>, &MaskedUint<U>, &mut R) -> Result<MaskedUint<U>, MaskingError>,
) -> Result<MaskedUint<U>, MaskingError> {
    if !auto_domain {
        a.check_domain(required_domain)?;
        b.check_domain(required_domain)?;
        return op(a, b, rng);
    }

    let a_adapted = adapt(a, required_domain, rng)?;
    let b_adapted = adapt(b, required_domain, rng)?;
    op(&a_adapted, &b_adapted, rng)
}
