//! Linear gadgets (§4.C5): share-wise operations that consume no fresh
//! randomness. Correctness follows because XOR (Boolean domain) or
//! modular addition (Arithmetic domain) commutes with every operation
//! implemented here.

use crate::error::MaskingError;
use crate::masking::domain::Domain;
use crate::masking::masked::MaskedUint;
use crate::primitives::uint::UintWord;

/// Share-wise XOR of two Boolean-masked operands.
pub fn bool_xor<U: UintWord>(
    a: &MaskedUint<U>,
    b: &MaskedUint<U>,
) -> Result<MaskedUint<U>, MaskingError> {
    MaskedUint::check_same_order(a, b)?;
    a.check_domain(Domain::Boolean)?;
    b.check_domain(Domain::Boolean)?;

    let out = a
        .shares()
        .into_iter()
        .zip(b.shares())
        .map(|(x, y)| x ^ y)
        .collect();

    Ok(MaskedUint::from_shares(out, a.order(), Domain::Boolean))
}

/// Bitwise complement. Flips only the masked value's bits; the masks
/// are unchanged because `~(x ^ m) = ~x ^ m` under fixed width.
pub fn bool_not<U: UintWord>(a: &MaskedUint<U>) -> Result<MaskedUint<U>, MaskingError> {
    a.check_domain(Domain::Boolean)?;

    let mut shares = a.shares();
    shares[0] = !shares[0];
    Ok(MaskedUint::from_shares(shares, a.order(), Domain::Boolean))
}

fn shift_or_rotate<U: UintWord>(
    a: &MaskedUint<U>,
    distance: u32,
    op: impl Fn(U, u32) -> U,
) -> Result<MaskedUint<U>, MaskingError> {
    a.check_domain(Domain::Boolean)?;

    let shares = a.shares().into_iter().map(|s| op(s, distance)).collect();
    Ok(MaskedUint::from_shares(shares, a.order(), Domain::Boolean))
}

pub fn bool_shl<U: UintWord>(
    a: &MaskedUint<U>,
    distance: u32,
) -> Result<MaskedUint<U>, MaskingError> {
    shift_or_rotate(a, distance, UintWord::shl)
}

pub fn bool_shr<U: UintWord>(
    a: &MaskedUint<U>,
    distance: u32,
) -> Result<MaskedUint<U>, MaskingError> {
    shift_or_rotate(a, distance, UintWord::shr)
}

pub fn bool_rotl<U: UintWord>(
    a: &MaskedUint<U>,
    distance: u32,
) -> Result<MaskedUint<U>, MaskingError> {
    if distance == 0 {
        return Err(MaskingError::InvalidArgument);
    }
    shift_or_rotate(a, distance, UintWord::rotl)
}

pub fn bool_rotr<U: UintWord>(
    a: &MaskedUint<U>,
    distance: u32,
) -> Result<MaskedUint<U>, MaskingError> {
    if distance == 0 {
        return Err(MaskingError::InvalidArgument);
    }
    shift_or_rotate(a, distance, UintWord::rotr)
}

/// Share-wise modular addition of two Arithmetic-masked operands.
pub fn arith_add<U: UintWord>(
    a: &MaskedUint<U>,
    b: &MaskedUint<U>,
) -> Result<MaskedUint<U>, MaskingError> {
    MaskedUint::check_same_order(a, b)?;
    a.check_domain(Domain::Arithmetic)?;
    b.check_domain(Domain::Arithmetic)?;

    let out = a
        .shares()
        .into_iter()
        .zip(b.shares())
        .map(|(x, y)| x + y)
        .collect();

    Ok(MaskedUint::from_shares(out, a.order(), Domain::Arithmetic))
}

/// Share-wise modular subtraction of two Arithmetic-masked operands.
pub fn arith_sub<U: UintWord>(
    a: &MaskedUint<U>,
    b: &MaskedUint<U>,
) -> Result<MaskedUint<U>, MaskingError> {
    MaskedUint::check_same_order(a, b)?;
    a.check_domain(Domain::Arithmetic)?;
    b.check_domain(Domain::Arithmetic)?;

    let out = a
        .shares()
        .into_iter()
        .zip(b.shares())
        .map(|(x, y)| x - y)
        .collect();

    Ok(MaskedUint::from_shares(out, a.order(), Domain::Arithmetic))
}

/// Share-wise negation of an Arithmetic-masked operand.
pub fn arith_neg<U: UintWord>(a: &MaskedUint<U>) -> Result<MaskedUint<U>, MaskingError> {
    a.check_domain(Domain::Arithmetic)?;

    let out = a.shares().into_iter().map(|x| -x).collect();
    Ok(MaskedUint::from_shares(out, a.order(), Domain::Arithmetic))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::uint::Uint32;
    use crate::rng::Csprng;

    fn masked(secret: u32, order: usize, domain: Domain, rng: &mut Csprng) -> MaskedUint<Uint32> {
        MaskedUint::new(Uint32(secret), order, domain, rng).unwrap()
    }

    #[test]
    fn xor_matches_scenario_s4() {
        let mut rng = Csprng::new();
        let a = masked(0x1234_5678, 2, Domain::Boolean, &mut rng);
        let b = masked(0x0000_00FF, 2, Domain::Boolean, &mut rng);
        assert_eq!(
            bool_xor(&a, &b).unwrap().unmask(),
            Uint32(0x1234_5678) ^ Uint32(0x0000_00FF)
        );
    }

    #[test]
    fn not_matches_unmasked_not() {
        let mut rng = Csprng::new();
        let a = masked(0xAA, 3, Domain::Boolean, &mut rng);
        assert_eq!(bool_not(&a).unwrap().unmask(), !Uint32(0xAA));
    }

    #[test]
    fn arithmetic_add_sub_neg_are_consistent() {
        let mut rng = Csprng::new();
        let a = masked(5, 3, Domain::Arithmetic, &mut rng);
        let b = masked(7, 3, Domain::Arithmetic, &mut rng);
        assert_eq!(arith_add(&a, &b).unwrap().unmask(), Uint32(12));
        assert_eq!(arith_sub(&a, &b).unwrap().unmask(), Uint32(5) - Uint32(7));
        assert_eq!(arith_neg(&a).unwrap().unmask(), -Uint32(5));
    }

    #[test]
    fn rejects_domain_mismatch() {
        let mut rng = Csprng::new();
        let a = masked(1, 2, Domain::Arithmetic, &mut rng);
        let b = masked(2, 2, Domain::Arithmetic, &mut rng);
        assert!(bool_xor(&a, &b).is_err());
    }

    #[test]
    fn rejects_order_mismatch() {
        let mut rng = Csprng::new();
        let a = masked(1, 2, Domain::Boolean, &mut rng);
        let b = masked(2, 3, Domain::Boolean, &mut rng);
        assert!(bool_xor(&a, &b).is_err());
    }

    #[test]
    fn rotate_rejects_zero_distance() {
        let mut rng = Csprng::new();
        let a = masked(0x1234_5678, 2, Domain::Boolean, &mut rng);
        assert_eq!(bool_rotl(&a, 0), Err(MaskingError::InvalidArgument));
        assert_eq!(bool_rotr(&a, 0), Err(MaskingError::InvalidArgument));
    }

    #[test]
    fn shift_permits_zero_distance_as_noop() {
        let mut rng = Csprng::new();
        let a = masked(0x1234_5678, 2, Domain::Boolean, &mut rng);
        assert_eq!(bool_shl(&a, 0).unwrap().unmask(), Uint32(0x1234_5678));
        assert_eq!(bool_shr(&a, 0).unwrap().unmask(), Uint32(0x1234_5678));
    }
}
