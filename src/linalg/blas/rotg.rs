/// Constructs a Givens plane rotation, mirroring the BLAS `drotg` routine.
///
/// Given `a` and `b`, computes `c` (cosine) and `s` (sine) with
/// `c^2 + s^2 = 1` such that
/// ```text
/// |  c  s | | a |   | r |
/// | -s  c | | b | = | 0 |
/// ```
/// On return `a` is overwritten with `r` and `b` with the reconstruction
/// scalar `z`, from which both coefficients can be recovered from a single
/// stored value: if `|z| < 1` then `s = z` and `c = sqrt(1 - z^2)`; if
/// `|z| > 1` then `c = 1/z` and `s = sqrt(1 - c^2)`; `z == 1` stands for
/// `c = 0, s = 1`.
///
/// `r = hypot(a, b)` carries the sign of whichever input has the larger
/// magnitude (equal magnitudes take the sign of `b`), which fixes the sign
/// convention: `c >= 0` whenever `|a| > |b|`.
///
/// The function is total over all `f64` inputs. Besides the all-zero
/// short-circuit there is no special-casing; NaN and infinity inputs flow
/// through `hypot` and the divisions per IEEE-754.
pub fn drotg(a: &mut f64, b: &mut f64, c: &mut f64, s: &mut f64) {
    let a0 = *a;
    let b0 = *b;

    if a0 == 0.0 && b0 == 0.0 {
        // Degenerate identity rotation: r keeps `a` as-is, z is zero.
        *c = 1.0;
        *s = 0.0;
        *b = 0.0;
        return;
    }

    let r = if a0.abs() > b0.abs() {
        a0.hypot(b0).copysign(a0)
    } else {
        a0.hypot(b0).copysign(b0)
    };
    let c_val = a0 / r;
    let s_val = b0 / r;

    let z = if a0.abs() > b0.abs() {
        s_val
    } else if c_val != 0.0 {
        1.0 / c_val
    } else {
        // c == 0 here means a was exactly zero and b was not.
        1.0
    };

    *a = r;
    *b = z;
    *c = c_val;
    *s = s_val;
}
