//! Shortest round-trip double-to-decimal conversion based on [Errol].
//!
//! Given a positive finite `f64`, the codec produces the fewest decimal
//! digits `D` and an exponent `E` such that `0.D * 10**E` reads back as the
//! same double, picking the closest candidate and breaking exact ties toward
//! an even last digit. Values are routed to one of three algorithms:
//!
//! - large integers, from 2**54 up to 2**128: exact 128-bit integer
//!   arithmetic on the rounding envelope;
//! - values in `[16, 2**53]`: fixed-point digit generation in native doubles;
//! - everything else: scaling by a power of 10 in double-double arithmetic.
//!
//! A table of pinned results covers the inputs whose scaled envelope falls
//! on a rounding boundary.
//!
//! The codec writes only digits. Placing the decimal point, the sign and the
//! exponent is left to the caller.
//!
//! [Errol]: https://cseweb.ucsd.edu/~lerner/papers/fp-printing-popl16.pdf

#![no_std]
#![deny(unsafe_op_in_unsafe_fn)]
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::float_cmp,
    clippy::unreadable_literal
)]

mod digits;
mod enumerated;
mod hp;
mod pow10;
mod traits;

#[cfg(test)]
mod tests;

use crate::hp::HighPrecision;
use crate::pow10::{POW10, POW10_BIAS, POW10_UNIT};
use crate::traits::Float;
use core::str;

/// Size of the digit buffer. No conversion writes more than 52 bytes.
pub const BUFFER_SIZE: usize = 512;

// Bounds of the large-integer range, [INT_MIN, INT_MAX).
const INT_MIN: f64 = 1.80143985094820e16;
const INT_MAX: f64 = 3.40282366920938e38;

// Bounds of the fixed-point range, [FIXED_MIN, FIXED_MAX].
const FIXED_MIN: f64 = 16.0;
const FIXED_MAX: f64 = 9.007199254740992e15;

// Safety valve on fixed-point digit generation.
const FIXED_MAX_DIGITS: usize = 50;

// Lower edge of the window general-range values are scaled into.
const SCALED_MIN: f64 = 1.00000000000000016e17;

const TEN18: u64 = 1_000_000_000_000_000_000;
const TEN19: u128 = 10_000_000_000_000_000_000;

// log10(2), low enough that index estimates never overshoot.
const LOG10_2: f64 = 0.30103;

fn pow10(index: i32) -> HighPrecision {
    let (val, off) = POW10[index as usize];
    HighPrecision::new(val, off)
}

// Index of the power of 10 that brings a value with frexp exponent bin_exp
// into [1e17, 1e19).
fn estimate_index(bin_exp: i32) -> i32 {
    let index = (f64::from(POW10_BIAS) + f64::from(bin_exp) * LOG10_2) as i32;
    index.clamp(20, POW10.len() as i32 - 1)
}

// floor(x) for |x| well inside the i64 range.
fn floor_i64(x: f64) -> i64 {
    let t = x as i64;
    if t as f64 > x {
        t - 1
    } else {
        t
    }
}

fn is_integral(x: f64) -> bool {
    floor_i64(x) as f64 == x
}

// Drops trailing zeros from buffer[..len] and terminates the digits with a
// NUL. Returns the new length.
fn finish(buffer: &mut [u8], mut len: usize) -> usize {
    while len > 1 && buffer[len - 1] == b'0' {
        len -= 1;
    }
    buffer[len] = b'\0';
    len
}

// Adds one to the last digit, carrying leftwards. Returns true if the carry
// ran off the front, in which case the digits read 1 followed by zeros.
fn round_up(digits: &mut [u8]) -> bool {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return false;
        }
    }
    digits[0] = b'1';
    true
}

// Given two different integers, returns the highest decimal position at which
// their digits differ, counting the units digit as position 0.
fn mismatch10(mut a: u64, mut b: u64) -> u32 {
    const TEN10: u64 = 10_000_000_000;
    let af = a / TEN10;
    let bf = b / TEN10;
    let mut i = 0;

    if af != bf {
        i = 10;
        a = af;
        b = bf;
    }

    loop {
        a /= 10;
        b /= 10;
        if a == b {
            return i;
        }
        i += 1;
    }
}

// Large integers: the rounding envelope is computed exactly in 128 bits.
fn format_int(value: f64, buffer: &mut [u8]) -> (usize, i32) {
    debug_assert!((INT_MIN..INT_MAX).contains(&value));

    let mid = value as u128;
    let mut low = mid - ((value - value.prev_float()) / 2.0).integer_exponent_of();
    let mut high = mid + ((value.next_float() - value) / 2.0).integer_exponent_of();

    // The envelope is (low, high]. An odd significand excludes both
    // endpoints, an even one includes both.
    if value.to_bits() & 1 != 0 {
        high -= 1;
    } else {
        low -= 1;
    }

    let l64 = (low % TEN19) as u64;
    let lf = (low / TEN19 % TEN19) as u64;
    let h64 = (high % TEN19) as u64;
    let hf = (high / TEN19 % TEN19) as u64;
    let mi = if lf != hf {
        mismatch10(lf, hf) + 19
    } else {
        mismatch10(l64, h64)
    };

    if mi == 0 {
        // Every digit of mid is significant.
        debug_assert!(mid <= u128::from(u64::MAX));
        let len = digits::write_u64(buffer, mid as u64);
        return (finish(buffer, len), len as i32);
    }

    // Round mid to a multiple of 10**mi, looking at the first dropped digit.
    // mid is a multiple of its spacing, so it can only sit halfway between
    // two multiples of 10**mi if the spacing is at most 10**mi / 10, which
    // puts both outside the envelope. There are no ties to break.
    let unit = 10u128.pow(mi);
    let truncated = (mid / (unit / 10)) as u64;
    let mut m = truncated / 10 + u64::from(truncated % 10 >= 5);

    // At a binade edge the envelope is lopsided and the nearest multiple can
    // fall outside it.
    match u128::from(m).checked_mul(unit) {
        Some(scaled) if scaled <= low => m += 1,
        Some(scaled) if scaled <= high => {}
        _ => m -= 1,
    }

    let len = digits::write_u64(buffer, m);
    (finish(buffer, len), len as i32 + mi as i32)
}

// Values with an exact integer part: the fraction is expanded digit by digit
// alongside the fractions of both envelope endpoints.
fn format_fixed(value: f64, buffer: &mut [u8]) -> (usize, i32) {
    debug_assert!((FIXED_MIN..=FIXED_MAX).contains(&value));

    let u = value as u64;
    let n = u as f64;

    let mut mid = value - n;
    let mut lo = ((value.prev_float() - n) + mid) / 2.0;
    let mut hi = ((value.next_float() - n) + mid) / 2.0;

    let mut len = digits::write_u64(buffer, u);
    let mut exp = len as i32;

    if mid != 0.0 {
        while mid != 0.0 {
            lo *= 10.0;
            let ldig = lo as u8;
            lo -= f64::from(ldig);

            mid *= 10.0;
            let mdig = mid as u8;
            mid -= f64::from(mdig);

            hi *= 10.0;
            let hdig = hi as u8;
            hi -= f64::from(hdig);

            buffer[len] = b'0' + mdig;
            len += 1;

            if hdig != ldig || len > FIXED_MAX_DIGITS {
                break;
            }
        }

        let odd = buffer[len - 1] & 1 != 0;
        if (mid > 0.5 || (mid == 0.5 && odd)) && round_up(&mut buffer[..len]) {
            exp += 1;
        }
    }

    (finish(buffer, len), exp)
}

// Everything else: scale into [1e17, 1e19) with a double-double power of 10,
// then find the shortest precision at which both envelope endpoints agree.
fn format_general(value: f64, buffer: &mut [u8]) -> (usize, i32) {
    let index = estimate_index(value.frexp_exponent());
    let scale = pow10(index);
    let mut mid = scale.product(value);
    let mut exp = index - POW10_BIAS;

    // Gaps to both neighbours, scaled alongside mid.
    let mut up = (value.next_float() - value) * scale.val;
    let mut down = (value - value.prev_float()) * scale.val;

    // Tiny inputs hit the bottom of the table and need a second scaling.
    if mid.val < SCALED_MIN {
        let index = estimate_index(mid.val.frexp_exponent());
        let scale = pow10(index);
        mid = mid.scale(scale);
        up *= scale.val;
        down *= scale.val;
        exp += index - POW10_UNIT;
    }

    let mut ten = 1.0;
    while mid.val < SCALED_MIN {
        mid.mul10();
        ten *= 10.0;
        exp -= 1;
    }
    let up = up * ten / 2.0;
    let down = down * ten / 2.0;

    let val64 = mid.val as u64;
    let mut low = val64.wrapping_add(floor_i64(mid.off - down) as u64);
    let mut high = val64.wrapping_add(floor_i64(mid.off + up) as u64);

    // Same (low, high] convention as format_int, for endpoints that land on
    // an integer.
    if value.to_bits() & 1 != 0 {
        if is_integral(mid.off + up) {
            high = high.wrapping_sub(1);
        }
    } else if is_integral(mid.off - down) {
        low = low.wrapping_sub(1);
    }

    if high >= TEN18 {
        exp += 1;
    }

    let mut lo64 = low;
    let mut hi64 = high;
    let mut iten = 1u64;
    loop {
        lo64 /= 10;
        hi64 /= 10;
        if lo64 == hi64 {
            break;
        }
        iten *= 10;
    }

    // Round mid to a multiple of iten.
    let half = mid.off + iten as f64 * 0.5;
    let q = val64.wrapping_add(floor_i64(half) as u64);
    let mut mid64 = q / iten;
    if is_integral(half) && q % iten == 0 && mid64 & 1 != 0 {
        mid64 -= 1;
    }
    let scaled = u128::from(mid64) * u128::from(iten);
    if scaled <= u128::from(low) {
        mid64 += 1;
    } else if scaled > u128::from(high) {
        mid64 -= 1;
    }

    // mid64 is the shared prefix hi64 followed by the converged digit, unless
    // rounding carried into the prefix.
    let prefix = digits::count_digits(hi64) + 1;
    let len = digits::write_u64(buffer, mid64);
    exp += len as i32 - prefix as i32;

    (finish(buffer, len), exp)
}

#[derive(Copy, Clone, Debug, PartialEq)]
enum Range {
    Int,
    Fixed,
    General,
}

fn range_of(value: f64) -> Range {
    if (INT_MIN..INT_MAX).contains(&value) {
        Range::Int
    } else if (FIXED_MIN..=FIXED_MAX).contains(&value) {
        Range::Fixed
    } else {
        Range::General
    }
}

fn dtoa_uncorrected(value: f64, buffer: &mut [u8]) -> (usize, i32) {
    match range_of(value) {
        Range::Int => format_int(value, buffer),
        Range::Fixed => format_fixed(value, buffer),
        Range::General => format_general(value, buffer),
    }
}

fn dtoa(value: f64, buffer: &mut [u8]) -> (usize, i32) {
    if let Some((digits, exp)) = enumerated::lookup(value.to_bits()) {
        let len = digits.len();
        buffer[..len].copy_from_slice(digits.as_bytes());
        buffer[len] = b'\0';
        return (len, exp);
    }
    dtoa_uncorrected(value, buffer)
}

/// Writes the shortest correctly rounded decimal digits of `value` to
/// `buffer`, followed by a NUL byte, and returns the decimal exponent.
///
/// With digits `D` and exponent `E`, `value` is the double nearest to
/// `0.D * 10**E`. For example `100.0` gives `"1"` and 3, `0.1` gives `"1"`
/// and 0.
///
/// Zero, infinities, NaN and the sign are left to the caller;
/// [`Buffer::format`] handles them.
///
/// # Panics
///
/// Panics if `value` is not positive and finite.
pub fn format_shortest(value: f64, buffer: &mut [u8; BUFFER_SIZE]) -> i32 {
    assert!(value > 0.0 && value.is_finite(), "{value} is not positive and finite");
    dtoa(value, buffer).1
}

/// Same as [`format_shortest`] without consulting the table of pinned
/// results.
///
/// Output differs from [`format_shortest`] only for pinned inputs, among
/// them `f64::MAX`, for which the result is unspecified.
///
/// # Panics
///
/// Panics if `value` is not positive and finite.
pub fn format_shortest_uncorrected(value: f64, buffer: &mut [u8; BUFFER_SIZE]) -> i32 {
    assert!(value > 0.0 && value.is_finite(), "{value} is not positive and finite");
    dtoa_uncorrected(value, buffer).1
}

/// Digits and decimal exponent of a formatted value.
///
/// The value is `0.D * 10**E` where `D` is [`digits`](Decimal::digits) and
/// `E` is [`exponent`](Decimal::exponent).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Decimal<'a> {
    digits: &'a str,
    exponent: i32,
}

impl<'a> Decimal<'a> {
    /// Significant digits without leading or trailing zeros.
    pub fn digits(&self) -> &'a str {
        self.digits
    }

    pub fn exponent(&self) -> i32 {
        self.exponent
    }
}

/// Owned storage for [`format_shortest`].
pub struct Buffer {
    bytes: [u8; BUFFER_SIZE],
}

impl Buffer {
    pub fn new() -> Self {
        Buffer {
            bytes: [0; BUFFER_SIZE],
        }
    }

    /// Formats the magnitude of `f`; the sign bit is ignored.
    ///
    /// Returns `None` for NaN and infinities. Zero formats as digits `"0"`
    /// with exponent 1.
    pub fn format(&mut self, f: f64) -> Option<Decimal<'_>> {
        if !f.is_finite() {
            return None;
        }
        let f = f64::from_bits(f.to_bits() & !(1 << 63));
        if f == 0.0 {
            return Some(Decimal {
                digits: "0",
                exponent: 1,
            });
        }

        let (len, exponent) = dtoa(f, &mut self.bytes);
        let digits = unsafe { str::from_utf8_unchecked(&self.bytes[..len]) };
        Some(Decimal { digits, exponent })
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Buffer::new()
    }
}
