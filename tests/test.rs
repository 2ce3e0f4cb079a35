// Single-thread semantics. Concurrency properties live in concurrent.rs,
// and a lot of the basic API surface is additionally covered by doctests.
use afloat::AtomicF32;

#[test]
fn readme_test() {
    static TOTAL: AtomicF32 = AtomicF32::new(800.0);

    TOTAL.add(30.0);
    TOTAL.add(-55.0);

    assert_eq!(TOTAL.load(), 775.0);
}

#[test]
fn store_load_round_trip_is_bit_exact() {
    let v = AtomicF32::default();
    assert_eq!(v.load().to_bits(), 0);

    v.store(core::f32::consts::PI);
    assert_eq!(v.load(), core::f32::consts::PI);

    // Signed zero survives: numerically equal to +0.0, bitwise distinct.
    v.store(-0.0);
    assert_eq!(v.load(), 0.0);
    assert!(v.load().is_sign_negative());
    assert_eq!(v.load().to_bits(), (-0.0f32).to_bits());

    // A NaN with a nonstandard payload comes back payload intact.
    let weird_nan = f32::from_bits(0x7fc0_1234);
    v.store(weird_nan);
    assert!(v.load().is_nan());
    assert_eq!(v.load().to_bits(), 0x7fc0_1234);
}

#[test]
fn swap_returns_prior_value() {
    let v = AtomicF32::new(0.0);
    v.store(1.5);
    assert_eq!(v.swap(-3.25), 1.5);
    assert_eq!(v.load(), -3.25);

    // Prior value is returned bit-exactly even when it's a NaN.
    let nan = f32::from_bits(0x7fa0_0001);
    v.store(nan);
    assert_eq!(v.swap(2.0).to_bits(), 0x7fa0_0001);
    assert_eq!(v.load(), 2.0);
}

#[test]
fn compare_and_swap_success_and_failure() {
    let v = AtomicF32::default();

    // Fresh cell holds +0.0 (bit pattern zero).
    assert!(v.compare_and_swap(0.0, 5.0));
    assert_eq!(v.load(), 5.0);

    // The expected value no longer matches; cell is untouched.
    assert!(!v.compare_and_swap(0.0, 7.0));
    assert_eq!(v.load(), 5.0);
}

#[test]
fn compare_and_swap_is_bitwise_not_value_equality() {
    // -0.0 == +0.0 numerically, but the bit patterns differ, so the CAS
    // must fail against a fresh (+0.0) cell.
    let v = AtomicF32::default();
    assert!(!v.compare_and_swap(-0.0, 1.0));
    assert_eq!(v.load().to_bits(), 0);

    // And the mirror image for NaN: never equal as values (NaN != NaN),
    // but a CAS with the bit-identical NaN succeeds.
    let nan = f32::from_bits(0x7fc0_0001);
    v.store(nan);
    assert!(v.compare_and_swap(nan, 9.0));
    assert_eq!(v.load(), 9.0);

    // A different NaN payload does not match.
    v.store(nan);
    assert!(!v.compare_and_swap(f32::from_bits(0x7fc0_0002), 9.0));
    assert_eq!(v.load().to_bits(), nan.to_bits());
}

#[test]
fn add_returns_result_and_propagates_ieee754() {
    let v = AtomicF32::new(1.0);
    assert_eq!(v.add(2.5), 3.5);
    assert_eq!(v.load(), 3.5);

    // Overflow to infinity and NaN propagation follow plain f32 addition.
    v.store(f32::MAX);
    assert_eq!(v.add(f32::MAX), f32::INFINITY);
    assert!(v.add(f32::NEG_INFINITY).is_nan());
    assert!(v.load().is_nan());
}

#[test]
fn partial_eq_compares_loaded_values() {
    // Value equality on the current contents, unlike compare_and_swap's
    // bitwise comparison: signed zeros are equal, NaN cells never are.
    assert_eq!(AtomicF32::new(2.5), AtomicF32::new(2.5));
    assert_ne!(AtomicF32::new(2.5), AtomicF32::new(3.5));
    assert_eq!(AtomicF32::new(-0.0), AtomicF32::new(0.0));
    assert_ne!(AtomicF32::new(f32::NAN), AtomicF32::new(f32::NAN));
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_f32() {
    serde_test::assert_tokens(&AtomicF32::new(1.0), &[serde_test::Token::F32(1.0)]);
}

#[cfg(all(
    feature = "atomic_f64",
    not(any(target_arch = "powerpc", target_arch = "mips", force_disable_atomic64))
))]
mod f64_semantics {
    use afloat::AtomicF64;

    #[test]
    fn round_trip_swap_and_cas() {
        let v = AtomicF64::default();
        assert_eq!(v.load().to_bits(), 0);

        v.store(-0.0);
        assert!(v.load().is_sign_negative());

        assert!(!v.compare_and_swap(0.0, 1.0)); // cell holds -0.0 now
        assert!(v.compare_and_swap(-0.0, 1.0));
        assert_eq!(v.swap(2.0), 1.0);
        assert_eq!(v.load(), 2.0);
    }

    #[test]
    fn add_returns_result() {
        let v = AtomicF64::new(0.1);
        assert_eq!(v.add(0.2), 0.1 + 0.2);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_f64() {
        serde_test::assert_tokens(&AtomicF64::new(1.0), &[serde_test::Token::F64(1.0)]);
    }
}
