/// A real number held as the unevaluated sum `val + off` of two doubles.
///
/// `val` is kept as the double nearest to the sum and `off` as the residual,
/// which carries roughly twice the precision of a lone double through a
/// chain of multiplications.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HighPrecision {
    pub val: f64,
    pub off: f64,
}

// Mask keeping the upper 26 bits of the significand. Products of two such
// halves are exact in a double.
const SPLIT_MASK: u64 = 0xFFFF_FFFF_F800_0000;

// Splits value into a high half with the low 27 significand bits cleared and
// the exact remainder.
fn split(value: f64) -> (f64, f64) {
    let hi = f64::from_bits(value.to_bits() & SPLIT_MASK);
    (hi, value - hi)
}

impl HighPrecision {
    pub const fn new(val: f64, off: f64) -> Self {
        HighPrecision { val, off }
    }

    /// Folds `off` into `val` so that `val` is the double nearest the sum.
    pub fn normalize(&mut self) {
        let val = self.val;
        self.val += self.off;
        self.off += val - self.val;
    }

    /// Multiplies by exactly ten.
    pub fn mul10(&mut self) {
        let val = self.val;
        self.val *= 10.0;
        self.off *= 10.0;

        // val * 8 and val * 2 are exact, so this is the rounding error of
        // val * 10.
        let mut err = self.val;
        err -= val * 8.0;
        err -= val * 2.0;
        self.off -= err;

        self.normalize();
    }

    /// Multiplies by a double. The rounding error of `val * y` is recovered
    /// from the split halves of both factors.
    pub fn product(self, y: f64) -> Self {
        let (hi, lo) = split(self.val);
        let (hi2, lo2) = split(y);

        let p = self.val * y;
        let err = ((hi * hi2 - p) + lo * hi2 + hi * lo2) + lo * lo2;

        HighPrecision {
            val: p,
            off: self.off * y + err,
        }
    }

    /// Multiplies by another double-double, dropping the `off * off` term.
    pub fn scale(self, other: HighPrecision) -> Self {
        let mut result = self.product(other.val);
        result.off += self.val * other.off;
        result.normalize();
        result
    }
}
