//! The masked-integer representation and its lifecycle operations.
//!
//! A `MaskedUint<U>` holds a masked value plus `order` independent
//! masks. Unmasking recombines them under XOR (Boolean domain) or
//! modular addition (Arithmetic domain). See the crate-level
//! documentation for the correctness and d-th-order security
//! invariants this type and every gadget built on it must preserve.

use crate::error::MaskingError;
use crate::masking::domain::Domain;
use crate::primitives::uint::{ByteOrder, UintWord};
use crate::rng::RandomSource;

/// A secret w-bit unsigned integer represented as `order + 1` shares.
///
/// `shares()[0]` is the masked value; `shares()[1..]` are the masks.
/// Gadgets never mutate their inputs in place — the sole exception is
/// [`MaskedUint::refresh_masks`], which re-randomizes an existing
/// object's shares without changing the secret they recombine to.
#[derive(Clone, Debug)]
pub struct MaskedUint<U: UintWord> {
    order: usize,
    domain: Domain,
    masked_value: U,
    masks: Vec<U>,
}

impl<U: UintWord> MaskedUint<U> {
    /// Samples `order` fresh uniform words from `rng`.
    pub(crate) fn sample_words<R: RandomSource>(order: usize, rng: &mut R) -> Vec<U> {
        let mut buf = vec![0u8; U::BYTES];
        (0..order)
            .map(|_| {
                rng.fill_bytes(&mut buf);
                U::from_bytes(&buf, ByteOrder::Big)
                    .expect("rng fills exactly U::BYTES bytes")
            })
            .collect()
    }

    fn masking_combine(domain: Domain, a: U, b: U) -> U {
        match domain {
            Domain::Boolean => a ^ b,
            Domain::Arithmetic => a - b,
        }
    }

    fn unmasking_combine(domain: Domain, a: U, b: U) -> U {
        match domain {
            Domain::Boolean => a ^ b,
            Domain::Arithmetic => a + b,
        }
    }

    /// Constructs a fresh masking of `secret` with `order` independent
    /// masks sampled from `rng`.
    ///
    /// # Errors
    /// Returns [`MaskingError::InvalidOrder`] if `order < 1`.
    pub fn new<R: RandomSource>(
        secret: U,
        order: usize,
        domain: Domain,
        rng: &mut R,
    ) -> Result<Self, MaskingError> {
        if order < 1 {
            return Err(MaskingError::InvalidOrder);
        }

        let masks = Self::sample_words(order, rng);
        let mut masked_value = secret;
        for &mask in &masks {
            masked_value = Self::masking_combine(domain, masked_value, mask);
        }

        Ok(MaskedUint {
            order,
            domain,
            masked_value,
            masks,
        })
    }

    /// Builds a trivial masking of a public value: `masked_value = value`,
    /// every mask is zero. Used where a gadget needs to combine a masked
    /// operand with a plaintext constant of the same order (e.g. the
    /// comparator's full-mask broadcast step).
    pub(crate) fn from_public(value: U, order: usize, domain: Domain) -> Self {
        MaskedUint {
            order,
            domain,
            masked_value: value,
            masks: vec![U::zero(); order],
        }
    }

    /// Builds a `MaskedUint` directly from an explicit share sequence,
    /// as returned by a gadget. `shares[0]` is the masked value,
    /// `shares[1..]` the masks.
    pub(crate) fn from_shares(shares: Vec<U>, order: usize, domain: Domain) -> Self {
        debug_assert_eq!(shares.len(), order + 1);
        let mut shares = shares.into_iter();
        let masked_value = shares.next().expect("at least one share");
        let masks: Vec<U> = shares.collect();

        MaskedUint {
            order,
            domain,
            masked_value,
            masks,
        }
    }

    /// Recombines this value's shares and returns the secret. Pure; no
    /// side effects.
    pub fn unmask(&self) -> U {
        let mut value = self.masked_value;
        for &mask in &self.masks {
            value = Self::unmasking_combine(self.domain, value, mask);
        }
        value
    }

    /// Re-randomizes the mask sequence, leaving the secret unchanged.
    ///
    /// This is the only gadget that mutates `self` in place.
    pub fn refresh_masks<R: RandomSource>(&mut self, rng: &mut R) {
        let fresh = Self::sample_words(self.order, rng);
        for (mask, new_mask) in self.masks.iter_mut().zip(fresh) {
            self.masked_value = Self::masking_combine(self.domain, self.masked_value, new_mask);
            *mask = Self::unmasking_combine(self.domain, *mask, new_mask);
        }
    }

    /// Returns `[masked_value, masks[0], ..., masks[order-1]]`.
    pub fn shares(&self) -> Vec<U> {
        let mut out = Vec::with_capacity(self.order + 1);
        out.push(self.masked_value);
        out.extend_from_slice(&self.masks);
        out
    }

    /// Masking order `d` (share count is `d + 1`).
    pub fn order(&self) -> usize {
        self.order
    }

    /// Current recombination domain.
    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub fn masked_value(&self) -> U {
        self.masked_value
    }

    pub fn masks(&self) -> &[U] {
        &self.masks
    }

    /// Checks that two operands share the same masking order, as
    /// required at the entry of every binary gadget.
    pub(crate) fn check_same_order(a: &Self, b: &Self) -> Result<(), MaskingError> {
        if a.order != b.order {
            return Err(MaskingError::OrderMismatch);
        }
        Ok(())
    }

    /// Checks that this value is in `expected` domain.
    pub(crate) fn check_domain(&self, expected: Domain) -> Result<(), MaskingError> {
        if self.domain != expected {
            return Err(MaskingError::DomainMismatch);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::uint::Uint32;
    use crate::rng::Csprng;

    #[test]
    fn round_trip_boolean_and_arithmetic() {
        let mut rng = Csprng::new();
        for domain in [Domain::Boolean, Domain::Arithmetic] {
            let secret = Uint32(0x1234_5678);
            let mv = MaskedUint::new(secret, 3, domain, &mut rng).unwrap();
            assert_eq!(mv.unmask(), secret);
            assert_eq!(mv.masks().len(), 3);
        }
    }

    #[test]
    fn refresh_preserves_secret_but_changes_masks() {
        let mut rng = Csprng::new();
        let secret = Uint32(0x5A);
        let mut mv = MaskedUint::new(secret, 3, Domain::Boolean, &mut rng).unwrap();
        let old_masks = mv.masks().to_vec();
        mv.refresh_masks(&mut rng);
        assert_eq!(mv.unmask(), secret);
        assert_ne!(mv.masks(), old_masks.as_slice());
    }

    #[test]
    fn rejects_zero_order() {
        let mut rng = Csprng::new();
        assert!(MaskedUint::new(Uint32(1), 0, Domain::Boolean, &mut rng).is_err());
    }
}
