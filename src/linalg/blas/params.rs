//! Compact `(flag, H)` parameter block produced by `drotmg` and consumed by
//! `drotm`.
//!
//! The modified rotation matrix is 2x2, but for three of its four shapes two
//! entries are fixed at `0`, `1`, or `-1`, so only the remaining entries are
//! stored. Which entries those are is selected by [`RotmFlag`].

/// Shape selector for the 2x2 matrix carried in [`DrotmParams`].
///
/// Historically this is a floating-point value stored in front of the `H`
/// entries: `-2.0` (identity), `-1.0` (full matrix), `0.0` (unit diagonal)
/// and `1.0` (unit off-diagonal).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RotmFlag {
    /// H is the identity; the stored entries are unused.
    Identity,
    /// All four stored entries are used literally. Produced both by the
    /// degenerate construction paths (with an all-zero `H`) and by the
    /// scale-normalization loops (with materialized, rescaled entries).
    Rescaling,
    /// `h11 = h22 = 1` implicitly; `h21` and `h12` are stored.
    OffDiagonal,
    /// `h12 = 1` and `h21 = -1` implicitly; `h11` and `h22` are stored.
    Diagonal,
}

impl RotmFlag {
    /// The historical floating-point encoding of this flag.
    pub fn as_blas(self) -> f64 {
        match self {
            RotmFlag::Identity => -2.0,
            RotmFlag::Rescaling => -1.0,
            RotmFlag::OffDiagonal => 0.0,
            RotmFlag::Diagonal => 1.0,
        }
    }

    /// Decodes the historical floating-point flag, if recognized.
    pub fn try_from_blas(flag: f64) -> Option<RotmFlag> {
        if flag == -2.0 {
            Some(RotmFlag::Identity)
        } else if flag == -1.0 {
            Some(RotmFlag::Rescaling)
        } else if flag == 0.0 {
            Some(RotmFlag::OffDiagonal)
        } else if flag == 1.0 {
            Some(RotmFlag::Diagonal)
        } else {
            None
        }
    }
}

/// Modified Givens rotation parameters: a shape flag plus up to four stored
/// matrix entries.
///
/// `h` holds `[h11, h21, h12, h22]` (column-major 2x2, the historical
/// layout). Entries that the flag declares implicit are ignored by
/// [`explicit`](DrotmParams::explicit); `drotmg` leaves them zeroed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrotmParams {
    pub flag: RotmFlag,
    pub h: [f64; 4],
}

impl DrotmParams {
    /// Materializes the full matrix as `(h11, h12, h21, h22)`, filling in
    /// the entries the compact forms leave implicit.
    pub fn explicit(&self) -> (f64, f64, f64, f64) {
        let [h11, h21, h12, h22] = self.h;
        match self.flag {
            RotmFlag::Identity => (1.0, 0.0, 0.0, 1.0),
            RotmFlag::Rescaling => (h11, h12, h21, h22),
            RotmFlag::OffDiagonal => (1.0, h12, h21, 1.0),
            RotmFlag::Diagonal => (h11, 1.0, -1.0, h22),
        }
    }

    /// Packs the parameters into the flat `[flag, h11, h21, h12, h22]`
    /// array exchanged across the historical BLAS boundary.
    pub fn to_array(&self) -> [f64; 5] {
        let [h11, h21, h12, h22] = self.h;
        [self.flag.as_blas(), h11, h21, h12, h22]
    }

    /// Unpacks a flat `[flag, h11, h21, h12, h22]` parameter array.
    ///
    /// # Panics
    ///
    /// Panics if `param[0]` is not one of the four recognized flag values.
    pub fn from_array(param: &[f64; 5]) -> DrotmParams {
        let flag = RotmFlag::try_from_blas(param[0]).unwrap_or_else(|| {
            panic!(
                "DrotmParams::from_array: unrecognized flag value {}",
                param[0]
            )
        });
        DrotmParams {
            flag,
            h: [param[1], param[2], param[3], param[4]],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_identity() {
        let p = DrotmParams {
            flag: RotmFlag::Identity,
            h: [9.0, 9.0, 9.0, 9.0], // ignored
        };
        assert_eq!(p.explicit(), (1.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_explicit_rescaling_uses_all_entries() {
        let p = DrotmParams {
            flag: RotmFlag::Rescaling,
            h: [2.0, 3.0, 4.0, 5.0],
        };
        assert_eq!(p.explicit(), (2.0, 4.0, 3.0, 5.0));
    }

    #[test]
    fn test_explicit_off_diagonal_has_unit_diagonal() {
        let p = DrotmParams {
            flag: RotmFlag::OffDiagonal,
            h: [0.0, -0.5, 0.25, 0.0],
        };
        assert_eq!(p.explicit(), (1.0, 0.25, -0.5, 1.0));
    }

    #[test]
    fn test_explicit_diagonal_has_unit_off_diagonal() {
        let p = DrotmParams {
            flag: RotmFlag::Diagonal,
            h: [0.75, 0.0, 0.0, 1.25],
        };
        assert_eq!(p.explicit(), (0.75, 1.0, -1.0, 1.25));
    }

    #[test]
    fn test_flag_blas_encoding_round_trip() {
        for flag in [
            RotmFlag::Identity,
            RotmFlag::Rescaling,
            RotmFlag::OffDiagonal,
            RotmFlag::Diagonal,
        ] {
            assert_eq!(RotmFlag::try_from_blas(flag.as_blas()), Some(flag));
        }
        assert_eq!(RotmFlag::try_from_blas(2.0), None);
        assert_eq!(RotmFlag::try_from_blas(f64::NAN), None);
    }

    #[test]
    fn test_param_array_round_trip() {
        let p = DrotmParams {
            flag: RotmFlag::Rescaling,
            h: [4096.0, -3584.0, 1792.0, 4096.0],
        };
        let packed = p.to_array();
        assert_eq!(packed, [-1.0, 4096.0, -3584.0, 1792.0, 4096.0]);
        assert_eq!(DrotmParams::from_array(&packed), p);
    }

    #[test]
    #[should_panic(expected = "unrecognized flag value 3")]
    fn test_from_array_rejects_unknown_flag() {
        DrotmParams::from_array(&[3.0, 0.0, 0.0, 0.0, 0.0]);
    }
}
