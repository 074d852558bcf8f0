//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::config::PolyConfig;
    use crate::polynomial::Polynomial;

    const EPSILON: f64 = 1e-9;

    // Integer-valued coefficients keep sums and products exact in f64.
    fn small_coeff() -> impl Strategy<Value = f64> {
        (-20i32..=20i32).prop_map(f64::from)
    }

    // Strategy for generating sparse polynomials with up to 6 raw terms
    fn small_poly() -> impl Strategy<Value = Polynomial> {
        proptest::collection::vec((small_coeff(), 0i64..12i64), 0..=6)
            .prop_map(|pairs| Polynomial::from_terms(pairs).unwrap())
    }

    // Polynomials built under the default epsilon, many terms below 0.5
    fn fractional_poly() -> impl Strategy<Value = Polynomial> {
        proptest::collection::vec((-3.0f64..3.0, 0i64..12i64), 0..=6)
            .prop_map(|pairs| Polynomial::from_terms(pairs).unwrap())
    }

    // Strategy for generating evaluation points
    fn small_point() -> impl Strategy<Value = f64> {
        (-8i32..=8i32).prop_map(|n| f64::from(n) / 4.0)
    }

    // Sum of |term| at x, the scale of the rounding error in evaluate.
    fn abs_eval(p: &Polynomial, x: f64) -> f64 {
        p.terms().iter().map(|t| t.eval(x).abs()).sum()
    }

    fn close(a: f64, b: f64, scale: f64) -> bool {
        (a - b).abs() <= 1e-9 * (1.0 + scale)
    }

    proptest! {
        // Canonical form

        #[test]
        fn construction_is_canonical(
            pairs in proptest::collection::vec((-5.0f64..5.0, 0i64..8i64), 0..=12)
        ) {
            let p = Polynomial::from_terms(pairs).unwrap();
            prop_assert!(p.is_canonical(EPSILON));
        }

        #[test]
        fn operations_stay_canonical(a in small_poly(), b in small_poly()) {
            prop_assert!(a.add(&b).is_canonical(EPSILON));
            prop_assert!(a.sub(&b).is_canonical(EPSILON));
            prop_assert!(a.mul(&b).is_canonical(EPSILON));
        }

        #[test]
        fn configured_operations_stay_canonical(
            a in fractional_poly(),
            b in fractional_poly(),
            c in -2.0f64..2.0,
        ) {
            let config = PolyConfig::default().with_epsilon(0.5);
            prop_assert!(a.add_with(&b, &config).is_canonical(config.epsilon));
            prop_assert!(a.sub_with(&b, &config).is_canonical(config.epsilon));
            prop_assert!(a.scale_with(c, &config).is_canonical(config.epsilon));
            prop_assert!(a.mul_with(&b, &config).is_canonical(config.epsilon));
        }

        // Ring axioms

        #[test]
        fn poly_add_identity(a in small_poly()) {
            let zero = Polynomial::zero();
            prop_assert_eq!(a.add(&zero), a.clone());
            prop_assert_eq!(zero.add(&a), a);
        }

        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn poly_add_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
        }

        #[test]
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.mul(&b), b.mul(&a));
        }

        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            // a * (b + c) = a * b + a * c
            let left = a.mul(&b.add(&c));
            let right = a.mul(&b).add(&a.mul(&c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn poly_mul_identity(a in small_poly()) {
            let one = Polynomial::constant(1.0);
            prop_assert_eq!(a.mul(&one), a.clone());
            prop_assert_eq!(one.mul(&a), a);
        }

        #[test]
        fn poly_mul_zero(a in small_poly()) {
            let zero = Polynomial::zero();
            prop_assert!(a.mul(&zero).is_zero());
            prop_assert!(zero.mul(&a).is_zero());
        }

        #[test]
        fn poly_additive_inverse(a in small_poly()) {
            prop_assert!(a.add(&a.neg()).is_zero());
        }

        // Degree properties

        #[test]
        fn poly_mul_degree(a in small_poly(), b in small_poly()) {
            if let (Some(da), Some(db)) = (a.degree(), b.degree()) {
                // Integer coefficients have no zero divisors.
                prop_assert_eq!(a.mul(&b).degree(), Some(da + db));
            }
        }

        // Evaluation properties

        #[test]
        fn poly_eval_add(a in small_poly(), b in small_poly(), x in small_point()) {
            // (a + b)(x) = a(x) + b(x)
            let sum = a.add(&b);
            let scale = abs_eval(&a, x) + abs_eval(&b, x);
            prop_assert!(close(sum.evaluate(x), a.evaluate(x) + b.evaluate(x), scale));
        }

        #[test]
        fn poly_eval_mul(a in small_poly(), b in small_poly(), x in small_point()) {
            // (a * b)(x) = a(x) * b(x)
            let product = a.mul(&b);
            let scale = abs_eval(&a, x) * abs_eval(&b, x);
            prop_assert!(close(product.evaluate(x), a.evaluate(x) * b.evaluate(x), scale));
        }

        // Parallel vs sequential multiplication

        #[test]
        fn parallel_mul_matches_sequential(a in small_poly(), b in small_poly()) {
            let parallel = PolyConfig::default().with_parallel_threshold(1);
            let sequential = PolyConfig::default().sequential();
            prop_assert_eq!(a.mul_with(&b, &parallel), a.mul_with(&b, &sequential));
        }

        // Display / parse round trip

        #[test]
        fn display_parse_round_trip(a in small_poly()) {
            let text = a.to_string();
            let parsed: Polynomial = text.parse().unwrap();
            prop_assert_eq!(parsed, a);
        }
    }
}
