use masking::masking::{Domain, MaskedUint};
use masking::primitives::uint::{Uint32, Uint8};
use masking::rng::Csprng;

#[test]
fn round_trip_holds_for_every_width_and_domain() {
    let mut rng = Csprng::new();
    for domain in [Domain::Boolean, Domain::Arithmetic] {
        let m8 = MaskedUint::new(Uint8(0x5A), 3, domain, &mut rng).unwrap();
        assert_eq!(m8.unmask(), Uint8(0x5A));

        let m32 = MaskedUint::new(Uint32(0xCAFEBABE), 3, domain, &mut rng).unwrap();
        assert_eq!(m32.unmask(), Uint32(0xCAFEBABE));
    }
}

#[test]
fn refresh_masks_preserves_secret_scenario_s3() {
    let mut rng = Csprng::new();
    let mut m = MaskedUint::new(Uint8(0x5A), 3, Domain::Boolean, &mut rng).unwrap();
    let before = m.masks().to_vec();
    m.refresh_masks(&mut rng);
    assert_eq!(m.unmask(), Uint8(0x5A));
    assert_ne!(m.masks(), before.as_slice());
    assert!(m.masks().iter().any(|&mask| mask != Uint8(0)));
}

#[test]
fn rejects_order_zero() {
    let mut rng = Csprng::new();
    assert!(MaskedUint::new(Uint8(1), 0, Domain::Boolean, &mut rng).is_err());
}
