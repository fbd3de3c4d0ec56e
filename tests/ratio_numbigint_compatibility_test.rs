// ratio_numbigint_compatibility_test.rs
//
// Checks Ratio<T> against num-rational's BigRational for every backend.
// The same suite is instantiated once per integer type using a macro.
//
// Every result must be canonical (coprime parts, positive denominator, zero
// as 0/1) and numerically equal to what num-rational computes.

#[cfg(test)]
mod compatibility_tests {
    use exact_ratio::{
        compare, Fixed, Ratio, RatioCmp, RatioError, RatioInteger, I1024, I128, I2048, I256, I512,
    };
    use num_bigint::BigInt;
    use num_integer::Integer;
    use num_rational::Ratio as NumRatio;
    use num_traits::{One, Signed, ToPrimitive, Zero};
    use std::cmp::Ordering;

    type NumRational = NumRatio<BigInt>;

    /// Widen a backend integer for comparison with num-rational.
    trait ToBig {
        fn to_big(&self) -> BigInt;
    }

    impl ToBig for BigInt {
        fn to_big(&self) -> BigInt {
            self.clone()
        }
    }

    impl<const LIMBS: usize> ToBig for Fixed<LIMBS> {
        fn to_big(&self) -> BigInt {
            self.to_bigint()
        }
    }

    /// Pairs used by the table-driven tests. Every denominator is positive.
    const SAMPLES: &[(i64, i64)] = &[
        (0, 1),
        (1, 1),
        (-1, 1),
        (1, 2),
        (-1, 2),
        (2, 3),
        (-3, 4),
        (5, 6),
        (7, 12),
        (-11, 30),
        (22, 7),
        (355, 113),
        (-1000, 999),
        (123456789, 987654321),
        (1 << 40, 3),
    ];

    fn num(n: i64, d: i64) -> NumRational {
        NumRational::new(BigInt::from(n), BigInt::from(d))
    }

    macro_rules! generate_ratio_tests {
        ($mod_name:ident, $int_type:ty) => {
            mod $mod_name {
                use super::*;

                type TestInt = $int_type;
                type TestRatio = Ratio<TestInt>;

                fn int(n: i64) -> TestInt {
                    <TestInt as RatioInteger>::from_i64(n)
                }

                fn ratio(n: i64, d: i64) -> TestRatio {
                    TestRatio::new(&int(n), &int(d)).unwrap()
                }

                /// Convert Ratio to num-rational for compatibility testing
                fn ratio_to_num(r: &TestRatio) -> NumRational {
                    NumRational::new(r.numer().to_big(), r.denom().to_big())
                }

                /// Both equal in value and stored in lowest terms.
                fn assert_matches(r: &TestRatio, expected: &NumRational) {
                    assert_canonical(r);
                    assert_eq!(&ratio_to_num(r), expected, "value mismatch for {}", r);
                }

                fn assert_canonical(r: &TestRatio) {
                    let n = r.numer().to_big();
                    let d = r.denom().to_big();
                    assert!(d > <BigInt as Zero>::zero(), "denominator of {} not positive", r);
                    assert!(Integer::gcd(&n, &d).is_one(), "{} is not reduced", r);
                    if n.is_zero() {
                        assert!(d.is_one(), "zero must be stored as 0/1");
                    }
                }

                fn pairs() -> impl Iterator<Item = ((i64, i64), (i64, i64))> {
                    SAMPLES
                        .iter()
                        .flat_map(|&a| SAMPLES.iter().map(move |&b| (a, b)))
                }

                // ========================================================================
                // CONSTRUCTION
                // ========================================================================

                #[test]
                fn test_construction_reduces() {
                    let r = ratio(6, 8);
                    assert_eq!(r.numer(), &int(3));
                    assert_eq!(r.denom(), &int(4));

                    let r = ratio(-50, 100);
                    assert_eq!(r.numer(), &int(-1));
                    assert_eq!(r.denom(), &int(2));

                    for &(n, d) in SAMPLES {
                        assert_matches(&ratio(n, d), &num(n, d));
                    }
                }

                #[test]
                fn test_zero_is_canonical() {
                    for d in [1, 2, 3, 1000, 1 << 30] {
                        let r = ratio(0, d);
                        assert_eq!(r, TestRatio::zero());
                        assert_eq!(r.denom(), &int(1));
                    }
                }

                #[test]
                fn test_rejects_bad_denominators() {
                    assert_eq!(
                        TestRatio::new(&int(1), &int(0)),
                        Err(RatioError::ZeroDenominator)
                    );
                    assert_eq!(
                        TestRatio::new(&int(1), &int(-2)),
                        Err(RatioError::NonPositiveDenominator)
                    );
                }

                // ========================================================================
                // ARITHMETIC COMPATIBILITY
                // ========================================================================

                #[test]
                fn test_addition_compatibility() {
                    for ((an, ad), (bn, bd)) in pairs() {
                        let sum = ratio(an, ad).add(&ratio(bn, bd)).unwrap();
                        assert_matches(&sum, &(num(an, ad) + num(bn, bd)));
                    }
                }

                #[test]
                fn test_subtraction_compatibility() {
                    for ((an, ad), (bn, bd)) in pairs() {
                        let diff = ratio(an, ad).sub(&ratio(bn, bd)).unwrap();
                        assert_matches(&diff, &(num(an, ad) - num(bn, bd)));
                    }
                }

                #[test]
                fn test_multiplication_compatibility() {
                    for ((an, ad), (bn, bd)) in pairs() {
                        let product = (&ratio(an, ad) * &ratio(bn, bd)).unwrap();
                        assert_matches(&product, &(num(an, ad) * num(bn, bd)));
                    }
                }

                #[test]
                fn test_division_compatibility() {
                    for ((an, ad), (bn, bd)) in pairs() {
                        let result = ratio(an, ad).div(&ratio(bn, bd));
                        if bn == 0 {
                            assert_eq!(result, Err(RatioError::ZeroDenominator));
                        } else {
                            assert_matches(&result.unwrap(), &(num(an, ad) / num(bn, bd)));
                        }
                    }
                }

                #[test]
                fn test_mul_returns_reduced() {
                    // 2/3 * 3/4 is stored as 1/2, never 6/12.
                    let result = (&ratio(2, 3) * &ratio(3, 4)).unwrap();
                    assert_eq!(result.numer(), &int(1));
                    assert_eq!(result.denom(), &int(2));
                }

                #[test]
                fn test_add_same_denominator() {
                    let result = ratio(1, 4).add(&ratio(1, 4)).unwrap();
                    assert_eq!(result, ratio(1, 2));

                    let result = ratio(3, 10).sub(&ratio(13, 10)).unwrap();
                    assert_eq!(result, ratio(-1, 1));
                    assert!(result.is_integer());
                }

                #[test]
                fn test_mul_chain() {
                    let product = ratio(2, 3)
                        .mul(&ratio(3, 4))
                        .and_then(|p| p.mul(&ratio(4, 5)))
                        .unwrap();
                    assert_eq!(product, ratio(2, 5));
                }

                // ========================================================================
                // SIGN HANDLING
                // ========================================================================

                #[test]
                fn test_negation_compatibility() {
                    for &(n, d) in SAMPLES {
                        let r = ratio(n, d);
                        assert_matches(&r.neg(), &-num(n, d));
                        assert_eq!(-(-r.clone()), r, "double negation");
                        assert_matches(&r.abs(), &Signed::abs(&num(n, d)));
                    }
                }

                #[test]
                fn test_reciprocal_compatibility() {
                    for &(n, d) in SAMPLES {
                        let r = ratio(n, d);
                        if n == 0 {
                            assert_eq!(r.inverse(), Err(RatioError::ZeroDenominator));
                        } else {
                            assert_matches(&r.inverse().unwrap(), &num(n, d).recip());
                        }
                    }
                }

                #[test]
                fn test_sign_checks() {
                    assert!(ratio(-3, 4).is_negative());
                    assert!(ratio(3, 4).is_positive());
                    assert!(!TestRatio::zero().is_positive());
                    assert!(!TestRatio::zero().is_negative());
                    assert!(TestRatio::zero().is_zero());
                }

                // ========================================================================
                // COMPARISON
                // ========================================================================

                #[test]
                fn test_comparison_compatibility() {
                    for ((an, ad), (bn, bd)) in pairs() {
                        let a = ratio(an, ad);
                        let b = ratio(bn, bd);
                        let expected = num(an, ad).cmp(&num(bn, bd));
                        assert_eq!(a.try_cmp(&b), Ok(expected), "{} vs {}", a, b);
                        assert_eq!(compare(Some(&a), Some(&b)), RatioCmp::from(expected));
                        assert_eq!(a == b, expected == Ordering::Equal);
                    }
                }

                #[test]
                fn test_comparison_antisymmetry() {
                    for ((an, ad), (bn, bd)) in pairs() {
                        let a = ratio(an, ad);
                        let b = ratio(bn, bd);
                        let ab = a.try_cmp(&b).unwrap();
                        let ba = b.try_cmp(&a).unwrap();
                        assert_eq!(ab, ba.reverse());
                    }
                }

                #[test]
                fn test_ordering_sort() {
                    let mut ours: Vec<TestRatio> =
                        SAMPLES.iter().map(|&(n, d)| ratio(n, d)).collect();
                    let mut theirs: Vec<NumRational> =
                        SAMPLES.iter().map(|&(n, d)| num(n, d)).collect();

                    ours.sort_by(|a, b| a.try_cmp(b).unwrap());
                    theirs.sort();

                    let ours: Vec<NumRational> = ours.iter().map(ratio_to_num).collect();
                    assert_eq!(ours, theirs);
                }

                #[test]
                fn test_compare_invalid_operand() {
                    let a = ratio(1, 2);
                    assert_eq!(compare(Some(&a), None), RatioCmp::Error);
                    assert_eq!(compare(None, Some(&a)), RatioCmp::Error);
                }

                // ========================================================================
                // GCD
                // ========================================================================

                #[test]
                fn test_gcd_correctness() {
                    let cases: &[(i64, i64)] = &[
                        (48, 18),
                        (-48, 18),
                        (17, 5),
                        (0, 9),
                        (9, 0),
                        (1 << 40, 1 << 12),
                        (832040, 514229),
                        (999999937, 999999929),
                        (i64::MAX, 3),
                    ];
                    for &(a, b) in cases {
                        let ours = RatioInteger::gcd(&int(a), &int(b));
                        let expected = Integer::gcd(&BigInt::from(a), &BigInt::from(b));
                        assert_eq!(ours.to_big(), expected, "gcd({}, {})", a, b);
                    }
                }

                // ========================================================================
                // EDGE CASES
                // ========================================================================

                #[test]
                fn test_identity_and_zero() {
                    let a = ratio(-7, 9);
                    let zero = TestRatio::zero();
                    let one = TestRatio::one();

                    assert_eq!(a.add(&zero).unwrap(), a);
                    assert_eq!(a.mul(&one).unwrap(), a);
                    assert_eq!(a.mul(&zero).unwrap(), zero);
                    assert_eq!(a.sub(&a).unwrap(), zero);
                    assert_eq!(a.div(&a).unwrap(), one);
                    assert_eq!(zero.div(&a).unwrap(), zero);
                }

                #[test]
                fn test_divide_by_zero() {
                    let a = ratio(3, 5);
                    assert!(a.div(&TestRatio::zero()).is_err());
                    assert!((&a / &TestRatio::zero()).is_err());
                    assert!(TestRatio::zero().inverse().is_err());
                }

                #[test]
                fn test_inverse_elements() {
                    for &(n, d) in SAMPLES.iter().filter(|&&(n, _)| n != 0) {
                        let a = ratio(n, d);
                        let inv = a.inverse().unwrap();
                        assert_eq!(a.mul(&inv).unwrap(), TestRatio::one());
                        assert_eq!(a.add(&a.neg()).unwrap(), TestRatio::zero());
                    }
                }

                // ========================================================================
                // ALGEBRAIC PROPERTIES
                // ========================================================================

                #[test]
                fn test_commutativity() {
                    for ((an, ad), (bn, bd)) in pairs() {
                        let a = ratio(an, ad);
                        let b = ratio(bn, bd);
                        assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
                        assert_eq!(a.mul(&b).unwrap(), b.mul(&a).unwrap());
                    }
                }

                #[test]
                fn test_associativity_and_distributivity() {
                    let a = ratio(2, 3);
                    let b = ratio(-5, 7);
                    let c = ratio(11, 13);

                    let left = a.add(&b).and_then(|ab| ab.add(&c)).unwrap();
                    let right = b.add(&c).and_then(|bc| a.add(&bc)).unwrap();
                    assert_eq!(left, right);

                    let left = a.mul(&b.add(&c).unwrap()).unwrap();
                    let right = a.mul(&b).unwrap().add(&a.mul(&c).unwrap()).unwrap();
                    assert_eq!(left, right);
                }

                // ========================================================================
                // REAL-WORLD USAGE
                // ========================================================================

                /// Partial sums of e = sum 1/k! stay exact and canonical.
                #[test]
                fn test_taylor_series_accumulation() {
                    let mut ours = TestRatio::zero();
                    let mut theirs = NumRational::zero();
                    let mut factorial: i64 = 1;

                    for k in 0..15i64 {
                        if k > 0 {
                            factorial *= k;
                        }
                        ours = ours.add(&ratio(1, factorial)).unwrap();
                        theirs += num(1, factorial);
                        assert_matches(&ours, &theirs);
                    }

                    let e = ours.to_f64();
                    assert!((e - std::f64::consts::E).abs() < 1e-10);
                }

                #[test]
                fn test_repeated_operations() {
                    let step = ratio(1, 7);
                    let mut acc = TestRatio::zero();
                    for _ in 0..70 {
                        acc = acc.add(&step).unwrap();
                    }
                    assert_eq!(acc, ratio(10, 1));
                }

                // ========================================================================
                // TEXT AND FLOAT COMPATIBILITY
                // ========================================================================

                #[test]
                fn test_display_compatibility() {
                    for &(n, d) in SAMPLES {
                        let r = ratio(n, d);
                        assert_eq!(r.to_string(), num(n, d).to_string());

                        let parsed: TestRatio = r.to_string().parse().unwrap();
                        assert_eq!(parsed, r);
                    }
                }

                /// Both parts beyond the f64 range: d = 2^k + 1, n = 2d + 2^(k-1),
                /// so q = 2.5 - tiny with a remainder of k bits.
                #[test]
                fn test_to_f64_fallback_large_parts() {
                    for k in [1030u32, 1500, 2040] {
                        let one = int(1);
                        let Ok(high) = one.shl(k) else {
                            eprintln!("Skipping 2^{} case - does not fit the backend", k);
                            continue;
                        };
                        let d = high.checked_add(&one).unwrap();
                        let half = one.shl(k - 1).unwrap();
                        let n = d.checked_add(&d).unwrap().checked_add(&half).unwrap();

                        let r = TestRatio::new(&n, &d).unwrap();
                        assert!(RatioInteger::to_f64(r.denom()).is_infinite());

                        let expected = ratio_to_num(&r).to_f64().unwrap();
                        assert!((r.to_f64() - 2.5).abs() < 1e-12, "2^{}: {}", k, r.to_f64());
                        assert!((r.to_f64() - expected).abs() < 1e-12);
                        assert!((r.neg().to_f64() + 2.5).abs() < 1e-12);
                    }
                }

                #[test]
                fn test_to_f64_compatibility() {
                    for &(n, d) in SAMPLES {
                        let ours = ratio(n, d).to_f64();
                        let theirs = num(n, d).to_f64().unwrap();
                        let tolerance = theirs.abs() * 1e-15;
                        assert!((ours - theirs).abs() <= tolerance, "{} vs {}", ours, theirs);
                    }
                }

                #[test]
                fn test_from_f64_edge_cases() {
                    assert_eq!(TestRatio::from_f64(0.0, 10).unwrap(), TestRatio::zero());
                    assert_eq!(TestRatio::from_f64(1.0, 1).unwrap(), TestRatio::one());
                    assert_eq!(TestRatio::from_f64(-0.5, 2).unwrap(), ratio(-1, 2));
                    assert_eq!(TestRatio::from_f64(0.1, 10).unwrap(), ratio(1, 10));
                    assert_eq!(
                        TestRatio::from_f64(f64::NAN, 10),
                        Err(RatioError::NotFinite)
                    );
                    assert_eq!(
                        TestRatio::from_f64(1.0, -3),
                        Err(RatioError::InvalidBound(-3))
                    );
                }
            }
        };
    }

    // ============================================================================
    // INSTANTIATE TEST SUITE FOR EACH BACKEND
    // ============================================================================

    generate_ratio_tests!(bigint_tests, BigInt);
    generate_ratio_tests!(i128_tests, I128);
    generate_ratio_tests!(i256_tests, I256);
    generate_ratio_tests!(i512_tests, I512);
    generate_ratio_tests!(i1024_tests, I1024);
    generate_ratio_tests!(i2048_tests, I2048);
}
