use masking::masking::compare::{cmp_eq, cmp_lt, select};
use masking::masking::convert::{atob, btoa};
use masking::masking::dispatch::dispatch_binary;
use masking::masking::dom::{arith_mul, bool_and, bool_or};
use masking::masking::ksa::bool_add;
use masking::masking::linear::bool_xor;
use masking::masking::{Domain, MaskedUint};
use masking::primitives::uint::Uint32;
use masking::rng::Csprng;

fn bmasked(secret: u32, order: usize, rng: &mut Csprng) -> MaskedUint<Uint32> {
    MaskedUint::new(Uint32(secret), order, Domain::Boolean, rng).unwrap()
}

fn amasked(secret: u32, order: usize, rng: &mut Csprng) -> MaskedUint<Uint32> {
    MaskedUint::new(Uint32(secret), order, Domain::Arithmetic, rng).unwrap()
}

#[test]
fn boolean_gadgets_match_scenario_s4() {
    let mut rng = Csprng::new();
    let a = bmasked(0x1234_5678, 2, &mut rng);
    let b = bmasked(0x0000_00FF, 2, &mut rng);

    assert_eq!(bool_and(&a, &b, &mut rng).unwrap().unmask(), Uint32(0x78));
    assert_eq!(
        bool_or(&a, &b, &mut rng).unwrap().unmask(),
        Uint32(0x1234_56FF)
    );
    assert_eq!(
        bool_add(&a, &b, &mut rng).unwrap().unmask(),
        Uint32(0x1234_5777)
    );
}

#[test]
fn dom_mul_and_atob_match_scenario_s5() {
    let mut rng = Csprng::new();
    let a = amasked(5, 3, &mut rng);
    let b = amasked(7, 3, &mut rng);

    let product = arith_mul(&a, &b, &mut rng).unwrap();
    assert_eq!(product.unmask(), Uint32(35));

    let converted = atob(&product, &mut rng).unwrap();
    assert_eq!(converted.domain(), Domain::Boolean);
    assert_eq!(converted.unmask(), Uint32(35));
}

#[test]
fn btoa_atob_round_trip_matches_scenario_s6() {
    let mut rng = Csprng::new();
    for v in [0x0000_0000u32, 0xFFFF_FFFF, 0xDEAD_BEEF] {
        let original = bmasked(v, 4, &mut rng);
        let arith = btoa(&original, &mut rng).unwrap();
        let back = atob(&arith, &mut rng).unwrap();
        assert_eq!(back.domain(), Domain::Boolean);
        assert_eq!(back.unmask(), Uint32(v));
    }
}

#[test]
fn comparator_correctness_property_p6() {
    let mut rng = Csprng::new();
    for (x, y) in [(3u32, 5u32), (5, 3), (9, 9)] {
        let a = bmasked(x, 2, &mut rng);
        let b = bmasked(y, 2, &mut rng);
        assert_eq!(
            cmp_lt(&a, &b, false, &mut rng).unwrap().unmask().0,
            (x < y) as u32
        );
        assert_eq!(
            cmp_lt(&a, &b, true, &mut rng).unwrap().unmask(),
            if x < y { Uint32(u32::MAX) } else { Uint32(0) }
        );
        assert_eq!(
            cmp_eq(&a, &b, false, &mut rng).unwrap().unmask().0,
            (x == y) as u32
        );
    }
}

#[test]
fn select_correctness_property_p7() {
    let mut rng = Csprng::new();
    let t = bmasked(0xAAAA_AAAA, 3, &mut rng);
    let f = bmasked(0x5555_5555, 3, &mut rng);
    let pick_t = bmasked(u32::MAX, 3, &mut rng);
    let pick_f = bmasked(0, 3, &mut rng);

    assert_eq!(
        select(&t, &f, &pick_t, &mut rng).unwrap().unmask(),
        Uint32(0xAAAA_AAAA)
    );
    assert_eq!(
        select(&t, &f, &pick_f, &mut rng).unwrap().unmask(),
        Uint32(0x5555_5555)
    );
}

#[test]
fn auto_domain_dispatch_property_p8() {
    let mut rng = Csprng::new();
    let a = amasked(12, 2, &mut rng);
    let b = bmasked(34, 2, &mut rng);

    let xored = dispatch_binary(&a, &b, Domain::Boolean, true, &mut rng, |x, y, _| {
        bool_xor(x, y)
    })
    .unwrap();
    assert_eq!(xored.unmask(), Uint32(12 ^ 34));

    let strict = dispatch_binary(&a, &b, Domain::Boolean, false, &mut rng, |x, y, _| {
        bool_xor(x, y)
    });
    assert!(strict.is_err());
}
