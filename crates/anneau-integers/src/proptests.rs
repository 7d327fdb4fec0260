//! Property-based tests for the arithmetic the ring layer relies on.

#[cfg(test)]
mod tests {
    use num_traits::Zero;
    use proptest::prelude::*;

    use crate::{gcd_u64, is_prime_u64, Integer, Modulus, Rational};

    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    proptest! {
        #[test]
        fn gcd_divides_both(a in small_int(), b in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let g = a.gcd(&b);
            prop_assert!(g.divides(&a));
            prop_assert!(g.divides(&b));
            prop_assert!(!g.is_negative());
        }

        #[test]
        fn gcd_with_self_is_abs(a in small_int()) {
            let a = Integer::new(a);
            prop_assert_eq!(a.gcd(&a), a.abs());
        }

        #[test]
        fn rem_euclid_in_range(a in small_int(), m in non_zero_int()) {
            let r = Integer::new(a).rem_euclid(&Integer::new(m));
            prop_assert!(!r.is_negative());
            prop_assert!(r < Integer::new(m).abs());
        }

        #[test]
        fn rational_recip_inverts(n in non_zero_int(), d in non_zero_int()) {
            let r = Rational::from_i64(n, d);
            let inv = r.checked_recip().unwrap();
            prop_assert_eq!(r * inv, Rational::from(1));
        }

        #[test]
        fn rational_sub_self_is_zero(n in small_int(), d in non_zero_int()) {
            let r = Rational::from_i64(n, d);
            prop_assert!((&r - &r).is_zero());
        }

        #[test]
        fn modular_inverse_roundtrip(n in 2u64..500, a in 0u64..500) {
            let m = Modulus::new(n).unwrap();
            match m.inv(a) {
                Some(inv) => prop_assert_eq!(m.mul(a % n, inv), 1),
                None => prop_assert_ne!(gcd_u64(a % n, n), 1),
            }
        }

        #[test]
        fn primality_matches_trial_division(n in 0u64..5000) {
            let trial = n >= 2 && (2..n).take_while(|d| d * d <= n).all(|d| n % d != 0);
            prop_assert_eq!(is_prime_u64(n), trial);
        }
    }
}
