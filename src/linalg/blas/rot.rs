use super::{check_increment, check_span, start_index};

/// Applies a plane rotation to two double-precision vectors, mirroring the
/// BLAS `drot` routine.
///
/// For each of the `n` strided element pairs, using the original values on
/// the right-hand side:
/// ```text
/// x[i] = c * x[i] + s * y[i]
/// y[i] = c * y[i] - s * x[i]
/// ```
/// `c` and `s` are typically produced by [`drotg`](super::rotg::drotg).
///
/// # Panics
///
/// This function will panic if:
/// * `n > 1` and either `incx` or `incy` is zero.
/// * Either slice is shorter than the span required for `n` elements at
///   its increment.
pub fn drot(n: usize, x: &mut [f64], incx: isize, y: &mut [f64], incy: isize, c: f64, s: f64) {
    if n == 0 {
        return;
    }

    check_increment("drot", "incx", n, incx);
    check_increment("drot", "incy", n, incy);
    check_span("drot", "x", x.len(), n, "incx", incx);
    check_span("drot", "y", y.len(), n, "incy", incy);

    // An identity rotation is a no-op once the call is validated.
    if c == 1.0 && s == 0.0 {
        return;
    }

    if incx == 1 && incy == 1 {
        // Contiguous case
        let x_slice = &mut x[..n];
        let y_slice = &mut y[..n];

        x_slice
            .iter_mut()
            .zip(y_slice.iter_mut())
            .for_each(|(x_elem, y_elem)| {
                let x_orig = *x_elem;
                let y_orig = *y_elem;
                *x_elem = c * x_orig + s * y_orig;
                *y_elem = c * y_orig - s * x_orig;
            });
    } else {
        // Strided case (also handles n=1 with any increments)
        let mut ix = start_index(n, incx);
        let mut iy = start_index(n, incy);

        for _ in 0..n {
            let x_orig = x[ix as usize];
            let y_orig = y[iy as usize];
            x[ix as usize] = c * x_orig + s * y_orig;
            y[iy as usize] = c * y_orig - s * x_orig;
            ix += incx;
            iy += incy;
        }
    }
}
