use super::{check_increment, check_span, start_index};

/// Scales a double-precision vector in place, mirroring the BLAS `dscal`
/// routine: `x[i] = sa * x[i]` for `n` strided elements.
///
/// Validation runs before the `sa == 1.0` early exit, so a call with an
/// undersized slice panics even when it would not have written anything.
///
/// # Panics
///
/// This function will panic if:
/// * `n > 1` and `incx` is zero.
/// * `x` is shorter than the span required for `n` elements at `incx`.
pub fn dscal(n: usize, sa: f64, x: &mut [f64], incx: isize) {
    if n == 0 {
        return;
    }

    check_increment("dscal", "incx", n, incx);
    check_span("dscal", "x", x.len(), n, "incx", incx);

    if sa == 1.0 {
        return;
    }

    if incx == 1 {
        // Contiguous case
        x[..n].iter_mut().for_each(|val| *val *= sa);
    } else {
        // Strided case (also handles n=1 with any incx)
        let mut ix = start_index(n, incx);
        for _ in 0..n {
            x[ix as usize] *= sa;
            ix += incx;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn assert_f64_vec_eq(a: &[f64], b: &[f64]) {
        assert_eq!(a.len(), b.len(), "vector lengths differ");
        for (i, (val_a, val_b)) in a.iter().zip(b.iter()).enumerate() {
            assert!(
                (val_a - val_b).abs() < EPSILON,
                "mismatch at index {i}: {val_a} != {val_b}"
            );
        }
    }

    #[test]
    fn test_dscal_n_zero_is_noop() {
        let mut x = vec![1.0, 2.0];
        dscal(0, 2.0, &mut x, 1);
        assert_f64_vec_eq(&x, &[1.0, 2.0]);
    }

    #[test]
    fn test_dscal_sa_one_is_noop() {
        let mut x = vec![1.0, 2.0, 3.0];
        dscal(3, 1.0, &mut x, 1);
        assert_f64_vec_eq(&x, &[1.0, 2.0, 3.0]);
    }

    #[test]
    #[should_panic(expected = "dscal: incx is 0 but n > 1")]
    fn test_dscal_incx_zero_panics() {
        let mut x = vec![1.0, 2.0];
        dscal(2, 2.0, &mut x, 0);
    }

    #[test]
    fn test_dscal_n_one_inc_zero_scales_first_element() {
        let mut x = vec![10.0, 99.0];
        dscal(1, 3.0, &mut x, 0);
        assert_f64_vec_eq(&x, &[30.0, 99.0]);
    }

    #[test]
    fn test_dscal_contiguous() {
        let mut x = vec![1.0, 2.0, 3.0, 4.0];
        dscal(3, 2.0, &mut x, 1);
        assert_f64_vec_eq(&x, &[2.0, 4.0, 6.0, 4.0]);
    }

    #[test]
    fn test_dscal_sa_zero_zeroes_elements() {
        let mut x = vec![1.0, 2.0, 3.0];
        dscal(3, 0.0, &mut x, 1);
        assert_f64_vec_eq(&x, &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_dscal_strided_positive_inc() {
        let mut x = vec![1.0, 0.0, 2.0, 0.0, 3.0, 0.0, 4.0];
        dscal(4, 3.0, &mut x, 2);
        assert_f64_vec_eq(&x, &[3.0, 0.0, 6.0, 0.0, 9.0, 0.0, 12.0]);
    }

    #[test]
    fn test_dscal_strided_negative_inc() {
        let mut x = vec![1.0, 0.0, 2.0, 0.0, 3.0];
        dscal(3, -1.0, &mut x, -2);
        assert_f64_vec_eq(&x, &[-1.0, 0.0, -2.0, 0.0, -3.0]);
    }

    // sa == 1.0 must not skip validation.
    #[test]
    #[should_panic(expected = "dscal: x slice length 3 is insufficient for n=3 and incx=2. Required: 5")]
    fn test_dscal_sa_one_still_validates_span() {
        let mut x = vec![1.0, 2.0, 3.0];
        dscal(3, 1.0, &mut x, 2);
    }
}
