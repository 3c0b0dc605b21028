//! Property-based tests for the calculator laws.

#[cfg(test)]
mod proptest_tests {
    use crate::calculator::{add, divide, multiply, sqrt};
    use crate::error::CalcError;
    use proptest::prelude::*;

    fn finite() -> impl Strategy<Value = f64> {
        -1.0e6..1.0e6f64
    }

    proptest! {
        #[test]
        fn add_is_commutative(a in finite(), b in finite()) {
            prop_assert_eq!(add(a, b), add(b, a));
        }

        #[test]
        fn zero_is_additive_identity(a in finite()) {
            prop_assert_eq!(add(a, 0.0), a);
        }

        #[test]
        fn multiply_is_commutative(a in finite(), b in finite()) {
            prop_assert_eq!(multiply(a, b), multiply(b, a));
        }

        #[test]
        fn one_and_zero_behave_under_multiply(a in finite()) {
            prop_assert_eq!(multiply(a, 1.0), a);
            prop_assert_eq!(multiply(a, 0.0), 0.0);
        }

        #[test]
        fn divide_undoes_multiply(a in finite(), b in finite()) {
            prop_assume!(b != 0.0);
            let back = divide(multiply(a, b), b).unwrap();
            prop_assert!(
                (back - a).abs() <= 1e-9 * a.abs().max(f64::MIN_POSITIVE),
                "divide(multiply({}, {}), {}) = {}",
                a, b, b, back
            );
        }

        #[test]
        fn divide_by_zero_always_fails(x in any::<f64>()) {
            prop_assert_eq!(divide(x, 0.0), Err(CalcError::DivisionByZero));
        }

        #[test]
        fn sqrt_squares_back(a in 0.0..1.0e12f64) {
            let root = sqrt(a).unwrap();
            prop_assert!((root * root - a).abs() <= 1e-9 * a.max(1.0));
        }

        #[test]
        fn sqrt_fails_iff_negative(x in finite()) {
            prop_assert_eq!(sqrt(x).is_err(), x < 0.0);
        }
    }
}
