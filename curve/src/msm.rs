use crate::{Affine, Group, Projective, ScalarField};

/// Computes `a * G + b * point`, the combination used by signature verification.
pub fn double_scalar_mul_basepoint(a: &ScalarField, b: &ScalarField, point: &Affine) -> Projective {
    Projective::mul_generator(a) + Projective::from(*point).scalar_mul(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_single_generator_mul() {
        let x = ScalarField::from_u64(99);
        let point = Affine::mul_generator(&x);
        let a = ScalarField::from_u64(7);
        let b = ScalarField::from_u64(11);

        let expected = Projective::mul_generator(&(&a + &(&b * &x)));
        assert_eq!(double_scalar_mul_basepoint(&a, &b, &point), expected);
    }

    #[test]
    fn test_zero_scalars() {
        let point = Affine::generator();
        let zero = ScalarField::zero();
        assert!(double_scalar_mul_basepoint(&zero, &zero, &point).is_identity());
    }
}
