// Double-double powers of 10 generator for the general-range scaling table.
//
// Entry i holds 10^(308 - i) as a pair (val, off) where val is the double
// nearest to the power and off is the double nearest to the residual
// 10^(308 - i) - val.

use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer as _;
use num_traits::{One as _, Zero as _};

const DEC_EXP_MAX: i32 = 308;
const TABLE_LEN: i32 = 600;

const NUM_SIG_BITS: u64 = 52;
const EXP_BIAS: i64 = 1023;

// Returns the double nearest to num / den with ties to even. The result is
// required to be a normal double.
fn nearest(num: &BigInt, den: &BigUint) -> f64 {
    if num.is_zero() {
        return 0.0;
    }
    let negative = num.sign() == Sign::Minus;
    let num = num.magnitude();

    // Scale so that the integer quotient has 64 or 65 bits.
    let shift = 64 + den.bits() as i64 - num.bits() as i64;
    let (n, d) = if shift >= 0 {
        (num << shift as usize, den.clone())
    } else {
        (num.clone(), den << (-shift) as usize)
    };
    let (q, r) = n.div_rem(&d);

    let drop = q.bits() - (NUM_SIG_BITS + 1);
    let mut sig = &q >> drop;
    let rem = &q - (&sig << drop);
    let half = BigUint::one() << (drop - 1);
    if rem > half || (rem == half && (!r.is_zero() || sig.is_odd())) {
        sig += 1u32;
    }
    let mut bin_exp = drop as i64 - shift;
    if sig.bits() > NUM_SIG_BITS + 1 {
        sig >>= 1u32;
        bin_exp += 1;
    }

    let biased = bin_exp + NUM_SIG_BITS as i64 + EXP_BIAS;
    assert!((1..2047).contains(&biased), "{num}/{den} is not a normal double");
    let sig = sig.iter_u64_digits().next().unwrap_or(0);
    let value = f64::from_bits((biased as u64) << NUM_SIG_BITS | (sig & ((1 << NUM_SIG_BITS) - 1)));
    if negative {
        -value
    } else {
        value
    }
}

// Exact value of a positive normal double as a fraction.
fn ratio_of(value: f64) -> (BigInt, BigUint) {
    let bits = value.to_bits();
    let biased = ((bits >> NUM_SIG_BITS) & 0x7ff) as i64;
    let sig = (bits & ((1 << NUM_SIG_BITS) - 1)) | (1 << NUM_SIG_BITS);
    let bin_exp = biased - EXP_BIAS - NUM_SIG_BITS as i64;
    if bin_exp >= 0 {
        (BigInt::from(sig) << bin_exp as usize, BigUint::one())
    } else {
        (BigInt::from(sig), BigUint::one() << (-bin_exp) as usize)
    }
}

fn main() {
    for i in 0..TABLE_LEN {
        let dec_exp = DEC_EXP_MAX - i;
        let pow = BigUint::from(10_u8).pow(dec_exp.unsigned_abs());
        let (num, den) = if dec_exp >= 0 {
            (BigInt::from(pow), BigUint::one())
        } else {
            (BigInt::one(), pow)
        };

        let val = nearest(&num, &den);
        let (val_num, val_den) = ratio_of(val);
        let residual_num =
            &num * BigInt::from(val_den.clone()) - &val_num * BigInt::from(den.clone());
        let residual_den = &den * &val_den;
        let off = nearest(&residual_num, &residual_den);

        println!("    ({val:?}, {off:?}), // {dec_exp:4}");
    }
}
