//! Property-based tests for the generic ring algorithms.

#[cfg(test)]
mod tests {
    use anneau_integers::{is_prime_u64, Integer};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use crate::{
        CommutativeRing, IdealOptions, IntegerModRing, IntegerRing, PolynomialRing, Ring,
        RingError,
    };

    fn modulus() -> impl Strategy<Value = u64> {
        1u64..60
    }

    fn small_prime() -> impl Strategy<Value = u64> {
        prop::sample::select(vec![3u64, 5, 7, 11, 13, 17, 19, 23, 29, 31])
    }

    fn any_prime() -> impl Strategy<Value = u64> {
        prop::sample::select(vec![2u64, 3, 5, 7, 11, 13])
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-50i64..=-1i64), (1i64..=50i64)]
    }

    proptest! {
        // Residue ring axioms

        #[test]
        fn residue_add_commutative(n in modulus(), a in 0u64..1000, b in 0u64..1000) {
            let ring = IntegerModRing::new(n).unwrap();
            let (a, b) = (ring.from_i64(a as i64), ring.from_i64(b as i64));
            prop_assert_eq!(ring.add_ref(&a, &b), ring.add_ref(&b, &a));
        }

        #[test]
        fn residue_distributive(
            n in modulus(),
            a in -500i64..500,
            b in -500i64..500,
            c in -500i64..500,
        ) {
            let ring = IntegerModRing::new(n).unwrap();
            let (a, b, c) = (ring.from_i64(a), ring.from_i64(b), ring.from_i64(c));
            let lhs = ring.mul_ref(&a, &ring.add_ref(&b, &c));
            let rhs = ring.add_ref(&ring.mul_ref(&a, &b), &ring.mul_ref(&a, &c));
            prop_assert!(ring.eq_el(&lhs, &rhs));
        }

        #[test]
        fn residue_negation_cancels(n in modulus(), a in -500i64..500) {
            let ring = IntegerModRing::new(n).unwrap();
            let a = ring.from_i64(a);
            prop_assert!(ring.is_zero(&ring.add_ref(&a, &ring.negate(&a))));
        }

        // Structural tests

        #[test]
        fn residue_field_iff_prime(n in modulus()) {
            let ring = IntegerModRing::new(n).unwrap();
            prop_assert_eq!(ring.is_field(true), Ok(is_prime_u64(n)));
            prop_assert_eq!(ring.is_integral_domain(true), Ok(is_prime_u64(n)));
        }

        #[test]
        fn field_proof_is_stable(n in modulus()) {
            let ring = IntegerModRing::new(n).unwrap();
            let first = ring.is_field(true);
            prop_assert_eq!(ring.is_field(true), first.clone());
            prop_assert_eq!(ring.is_field(false), first);
        }

        // Ideals

        #[test]
        fn pid_ideal_ignores_repeats(a in -200i64..200) {
            let zz = IntegerRing::new();
            let once = zz.ideal_from_integers(&[a]).unwrap();
            let twice = zz.ideal_from_integers(&[a, a]).unwrap();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn pid_ideal_is_the_gcd(a in -200i64..200, b in -200i64..200) {
            let zz = IntegerRing::new();
            let ab = zz.ideal_from_integers(&[a, b]).unwrap();
            let ba = zz.ideal_from_integers(&[b, a]).unwrap();
            prop_assert_eq!(ab.gens(), &[Integer::new(a).gcd(&Integer::new(b))]);
            prop_assert_eq!(ab, ba);
        }

        #[test]
        fn field_ideals_are_trivial(p in small_prime(), gens in prop::collection::vec(0i64..40, 0..4)) {
            let ring = IntegerModRing::new(p).unwrap();
            let gens: Vec<u64> = gens.into_iter().map(|g| ring.from_i64(g)).collect();
            let all_zero = gens.iter().all(|g| ring.is_zero(g));
            let ideal = ring.ideal(gens, IdealOptions::default()).unwrap();
            prop_assert!(ideal.is_principal());
            prop_assert_eq!(ideal.is_zero(), all_zero);
            prop_assert_eq!(ideal.is_unit(), !all_zero);
        }

        // Roots of unity

        #[test]
        fn zeta_exists_iff_order_divides(p in any_prime(), n in 1u64..32) {
            // -1 is always returned for n = 2, even where it equals 1.
            prop_assume!(p != 2 || n != 2);
            let ring = IntegerModRing::new(p).unwrap();
            match ring.zeta_order(n) {
                Ok(order) => {
                    prop_assert_eq!(order, n);
                    prop_assert_eq!((p - 1) % n, 0);
                }
                Err(err) => {
                    prop_assert_eq!(err, RingError::NoRootOfUnity(n));
                    prop_assert_ne!((p - 1) % n, 0);
                }
            }
        }

        #[test]
        fn zeta_all_counts_primitive_roots(p in small_prime(), n in 1u64..32) {
            prop_assume!((p - 1) % n == 0);
            let ring = IntegerModRing::new(p).unwrap();
            let roots = ring.zeta_all(n).unwrap();
            let totient = (1..=n).filter(|k| anneau_integers::gcd_u64(*k, n) == 1).count();
            prop_assert_eq!(roots.len(), totient);
            for z in &roots {
                prop_assert_eq!(ring.multiplicative_order(z), Ok(n));
            }
        }

        #[test]
        fn zeta_missing_when_order_does_not_divide(p in small_prime(), n in 3u64..32) {
            prop_assume!((p - 1) % n != 0);
            let ring = IntegerModRing::new(p).unwrap();
            prop_assert!(ring.zeta(n).is_err());
        }

        // Fractions

        #[test]
        fn fractions_ignore_common_factors(a in -50i64..50, b in non_zero_int(), c in non_zero_int()) {
            let zt = PolynomialRing::new(&IntegerRing::new(), "t");
            let k = zt.fraction_field().unwrap();
            let scaled = k.fraction(zt.from_i64(a * c), zt.from_i64(b * c)).unwrap();
            let plain = k.fraction(zt.from_i64(a), zt.from_i64(b)).unwrap();
            prop_assert!(k.eq_el(&scaled, &plain));
        }

        // Sampling

        #[test]
        fn random_integers_respect_bound(seed in any::<u64>(), bound in 0u64..100) {
            let zz = IntegerRing::new();
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let x = zz.random_element(&mut rng, bound).unwrap();
            prop_assert!(x.abs() <= Integer::from(bound));
        }

        #[test]
        fn random_nonzero_is_nonzero(seed in any::<u64>(), p in small_prime()) {
            let ring = IntegerModRing::new(p).unwrap();
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let x = ring.random_nonzero_element(&mut rng).unwrap();
            prop_assert!(!ring.is_zero(&x));
        }
    }
}
