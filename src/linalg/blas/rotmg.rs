use super::params::{DrotmParams, RotmFlag};

// Rescaling bounds from the reference BLAS. RGAMSQ is the historical
// decimal constant, not 1.0 / GAMSQ exactly.
const GAM: f64 = 4096.0;
const GAMSQ: f64 = 16_777_216.0;
const RGAMSQ: f64 = 5.960_464_5e-8;

// Layout of the working H array: [h11, h21, h12, h22], matching
// `DrotmParams::h`.
const H11: usize = 0;
const H21: usize = 1;
const H12: usize = 2;
const H22: usize = 3;

/// Materializes the entries the compact `OffDiagonal`/`Diagonal` forms
/// leave implicit, so every entry can be rescaled independently, and
/// downgrades the flag to `Rescaling`. Once the flag is already
/// `Rescaling` nothing is materialized, which keeps repeated rescaling
/// iterations from clobbering entries scaled earlier.
fn fix_h(flag: RotmFlag, mut h: [f64; 4]) -> (RotmFlag, [f64; 4]) {
    match flag {
        RotmFlag::OffDiagonal => {
            h[H11] = 1.0;
            h[H22] = 1.0;
        }
        RotmFlag::Diagonal => {
            h[H12] = 1.0;
            h[H21] = -1.0;
        }
        RotmFlag::Identity | RotmFlag::Rescaling => {}
    }
    (RotmFlag::Rescaling, h)
}

fn degenerate(d1: &mut f64, d2: &mut f64, x1: &mut f64) -> DrotmParams {
    *d1 = 0.0;
    *d2 = 0.0;
    *x1 = 0.0;
    DrotmParams {
        flag: RotmFlag::Rescaling,
        h: [0.0; 4],
    }
}

/// Constructs a modified Givens rotation, mirroring the BLAS `drotmg`
/// routine.
///
/// The caller holds a two-component vector in scaled form,
/// `(x1 * sqrt(d1), y1 * sqrt(d2))`. This function computes a 2x2 matrix
/// `H` (returned compactly as [`DrotmParams`]) and updated scale factors
/// such that
/// ```text
/// H | x1 * sqrt(d1) |   | x1' * sqrt(d1') |
///   | y1 * sqrt(d2) | = | 0               |
/// ```
/// without ever taking a square root. The flag selects one of four sparse
/// shapes for `H`; see [`RotmFlag`](super::params::RotmFlag).
///
/// After the shape is chosen, the scale factors are walked back into the
/// safe range `(RGAMSQ, GAMSQ)` = `(5.9604645e-8, 4096^2)` by repeated
/// multiplication or division with `GAM^2`, compensating in `x1` and the
/// corresponding row of `H`. An exact zero scale factor is left untouched.
///
/// # Arguments
///
/// * `d1`: First scale factor; on output, the updated `d1'`.
/// * `d2`: Second scale factor (may be negative); on output, `d2'`.
/// * `x1`: First vector component; on output, `x1'`.
/// * `y1`: Second vector component; consumed, the rotation zeroes it.
///
/// # Returns
///
/// The rotation parameters. Three degenerate inputs produce the
/// `Rescaling` flag with an all-zero `H` and zeroed outputs instead of an
/// error: `d1 < 0`, a non-positive `u = 1 - h12 * h21` (unreachable in
/// exact arithmetic, kept for rounding), and `q2 < 0` when the second
/// column dominates. `d2 * y1 == 0` yields the `Identity` flag with all
/// inputs unchanged.
pub fn drotmg(d1: &mut f64, d2: &mut f64, x1: &mut f64, y1: f64) -> DrotmParams {
    let mut rd1 = *d1;
    let mut rd2 = *d2;
    let mut rx1 = *x1;

    if rd1 < 0.0 {
        return degenerate(d1, d2, x1);
    }

    let p2 = rd2 * y1;
    if p2 == 0.0 {
        // The second component is already zero in scaled form.
        return DrotmParams {
            flag: RotmFlag::Identity,
            h: [0.0; 4],
        };
    }

    let p1 = rd1 * rx1;
    let q2 = p2 * y1;
    let q1 = p1 * rx1;

    let mut flag;
    let mut h = [0.0; 4];

    if q1.abs() > q2.abs() {
        // First column dominates strictly; ties fall to the other branch.
        h[H21] = -y1 / rx1;
        h[H12] = p2 / p1;
        let u = 1.0 - h[H12] * h[H21];
        if u <= 0.0 {
            // Unreachable in exact arithmetic; rounding can get here.
            return degenerate(d1, d2, x1);
        }
        flag = RotmFlag::OffDiagonal;
        rd1 /= u;
        rd2 /= u;
        rx1 *= u;
    } else {
        if q2 < 0.0 {
            // No real rotation with this shape can zero the component.
            return degenerate(d1, d2, x1);
        }
        flag = RotmFlag::Diagonal;
        h[H11] = p1 / p2;
        h[H22] = rx1 / y1;
        let u = 1.0 + h[H11] * h[H22];
        (rd1, rd2) = (rd2 / u, rd1 / u);
        rx1 = y1 * u;
    }

    // Walk d1 back into the safe range; an exact zero stays put. The first
    // column of H and x1 absorb the compensation.
    while rd1 != 0.0 && rd1 <= RGAMSQ {
        (flag, h) = fix_h(flag, h);
        rd1 *= GAM * GAM;
        rx1 /= GAM;
        h[H11] /= GAM;
        h[H12] /= GAM;
    }
    while rd1 >= GAMSQ {
        (flag, h) = fix_h(flag, h);
        rd1 /= GAM * GAM;
        rx1 *= GAM;
        h[H11] *= GAM;
        h[H12] *= GAM;
    }

    // Same for d2, which may legitimately be negative, hence the abs tests.
    while rd2 != 0.0 && rd2.abs() <= RGAMSQ {
        (flag, h) = fix_h(flag, h);
        rd2 *= GAM * GAM;
        h[H21] /= GAM;
        h[H22] /= GAM;
    }
    while rd2.abs() >= GAMSQ {
        (flag, h) = fix_h(flag, h);
        rd2 /= GAM * GAM;
        h[H21] *= GAM;
        h[H22] *= GAM;
    }

    *d1 = rd1;
    *d2 = rd2;
    *x1 = rx1;
    DrotmParams { flag, h }
}
