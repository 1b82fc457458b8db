use super::params::{DrotmParams, RotmFlag};
use super::{check_increment, check_span, start_index};

/// Applies a modified Givens rotation to two double-precision vectors,
/// mirroring the BLAS `drotm` routine.
///
/// For each of the `n` strided element pairs, with `H` materialized from
/// `params`:
/// ```text
/// x[i], y[i] = h11 * x[i] + h12 * y[i], h21 * x[i] + h22 * y[i]
/// ```
///
/// # Arguments
///
/// * `n`: The number of element pairs to process.
/// * `x`: First input/output vector.
/// * `incx`: Increment for `x`; negative walks the vector backwards.
/// * `y`: Second input/output vector.
/// * `incy`: Increment for `y`; negative walks the vector backwards.
/// * `params`: Rotation parameters produced by
///   [`drotmg`](super::rotmg::drotmg).
///
/// An `Identity` flag returns before the slice-span checks run, so a
/// degenerate parameter set never faults on buffers it would not touch.
/// Zero increments are still rejected first.
///
/// # Panics
///
/// This function will panic if:
/// * `n > 1` and either `incx` or `incy` is zero.
/// * The flag is not `Identity` and either slice is shorter than the span
///   required for `n` elements at its increment.
pub fn drotm(
    n: usize,
    x: &mut [f64],
    incx: isize,
    y: &mut [f64],
    incy: isize,
    params: DrotmParams,
) {
    if n == 0 {
        return;
    }

    check_increment("drotm", "incx", n, incx);
    check_increment("drotm", "incy", n, incy);

    if params.flag == RotmFlag::Identity {
        return;
    }

    check_span("drotm", "x", x.len(), n, "incx", incx);
    check_span("drotm", "y", y.len(), n, "incy", incy);

    let (h11, h12, h21, h22) = params.explicit();

    if incx == 1 && incy == 1 {
        // Contiguous case
        let x_slice = &mut x[..n];
        let y_slice = &mut y[..n];

        x_slice
            .iter_mut()
            .zip(y_slice.iter_mut())
            .for_each(|(x_elem, y_elem)| {
                let w = *x_elem;
                let z = *y_elem;
                *x_elem = h11 * w + h12 * z;
                *y_elem = h21 * w + h22 * z;
            });
    } else {
        // Strided case (also handles n=1 with any increments)
        let mut ix = start_index(n, incx);
        let mut iy = start_index(n, incy);

        for _ in 0..n {
            // Indexing is safe due to the span checks above.
            let w = x[ix as usize];
            let z = y[iy as usize];
            x[ix as usize] = h11 * w + h12 * z;
            y[iy as usize] = h21 * w + h22 * z;
            ix += incx;
            iy += incy;
        }
    }
}
