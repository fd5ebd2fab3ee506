pub trait Float: Copy {
    const NUM_SIG_BITS: u32;
    const EXP_BIAS: i32;

    /// The next representable value above `self`.
    ///
    /// Only meaningful for positive, finite values below the maximum.
    fn next_float(self) -> Self;

    /// The next representable value below `self`.
    ///
    /// Only meaningful for positive, finite values above the minimum.
    fn prev_float(self) -> Self;

    /// Exponent `e` such that `self = m * 2**e` with `m` in `[0.5, 1)`.
    fn frexp_exponent(self) -> i32;

    /// `2**floor(log2(self))` as an integer, for an integer-valued power
    /// of two.
    fn integer_exponent_of(self) -> u128;
}

impl Float for f64 {
    const NUM_SIG_BITS: u32 = Self::MANTISSA_DIGITS - 1;
    const EXP_BIAS: i32 = Self::MAX_EXP - 1;

    fn next_float(self) -> Self {
        f64::from_bits(self.to_bits() + 1)
    }

    fn prev_float(self) -> Self {
        f64::from_bits(self.to_bits() - 1)
    }

    fn frexp_exponent(self) -> i32 {
        let bits = self.to_bits();
        let bin_exp = (bits >> Self::NUM_SIG_BITS) as i32 & 0x7ff;
        if bin_exp != 0 {
            return bin_exp - (Self::EXP_BIAS - 1);
        }
        // Subnormal: the leading significand bit sets the exponent.
        let bin_sig = bits & ((1 << Self::NUM_SIG_BITS) - 1);
        debug_assert!(bin_sig != 0);
        let bin_len = 64 - bin_sig.leading_zeros() as i32;
        bin_len - (Self::EXP_BIAS - 1) - Self::NUM_SIG_BITS as i32
    }

    fn integer_exponent_of(self) -> u128 {
        let bits = self.to_bits();
        let bin_exp = (bits >> Self::NUM_SIG_BITS) as i32 - Self::EXP_BIAS;
        debug_assert!(bits & ((1 << Self::NUM_SIG_BITS) - 1) == 0);
        debug_assert!((0..128).contains(&bin_exp));
        1 << bin_exp
    }
}
