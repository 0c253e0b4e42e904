//! Property-based tests for exact scalar arithmetic.

#[cfg(test)]
mod tests {
    use dashu::base::{Gcd, UnsignedAbs};
    use dashu::integer::IBig;
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{LinalgError, Scalar};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn scalar() -> impl Strategy<Value = Scalar> {
        (small_int(), non_zero_int()).prop_map(|(n, d)| Scalar::new(n, d).unwrap())
    }

    proptest! {
        #[test]
        fn reduced_form_invariant(n in small_int(), d in non_zero_int()) {
            let s = Scalar::new(n, d).unwrap();
            let denom = s.denominator();
            prop_assert!(denom > IBig::ZERO);
            let g = s.numerator().clone().unsigned_abs().gcd(denom.unsigned_abs());
            prop_assert!(g.is_one());
        }

        #[test]
        fn zero_denominator_rejected(n in small_int()) {
            prop_assert_eq!(Scalar::new(n, 0), Err(LinalgError::DivisionByZero));
        }

        #[test]
        fn additive_inverse(a in scalar()) {
            prop_assert_eq!(&a + &(-&a), Scalar::zero());
        }

        #[test]
        fn add_commutative(a in scalar(), b in scalar()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn mul_associative(a in scalar(), b in scalar(), c in scalar()) {
            prop_assert_eq!(
                (a.clone() * b.clone()) * c.clone(),
                a * (b * c)
            );
        }

        #[test]
        fn distributive(a in scalar(), b in scalar(), c in scalar()) {
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b + a * c
            );
        }

        #[test]
        fn multiplicative_inverse(a in scalar()) {
            prop_assume!(!a.is_zero());
            prop_assert_eq!(&a * &a.recip().unwrap(), Scalar::one());
        }

        #[test]
        fn div_undoes_mul(a in scalar(), b in scalar()) {
            prop_assume!(!b.is_zero());
            prop_assert_eq!((&a * &b).checked_div(&b).unwrap(), a);
        }

        #[test]
        fn ordering_matches_cross_products(a in scalar(), b in scalar()) {
            let lhs = a.numerator() * b.denominator();
            let rhs = b.numerator() * a.denominator();
            prop_assert_eq!(a.cmp(&b), lhs.cmp(&rhs));
        }

        #[test]
        fn display_parses_back(a in scalar()) {
            prop_assert_eq!(a.to_string().parse::<Scalar>().unwrap(), a);
        }

        #[test]
        fn square_root_of_square(a in scalar()) {
            prop_assert_eq!(a.pow(2).exact_root(2), Some(a.abs()));
        }
    }
}
