use crate::digits;
use crate::enumerated::{self, ENUMERATED};
use crate::hp::HighPrecision;
use crate::traits::Float;
use crate::BUFFER_SIZE;

type Format = fn(f64, &mut [u8]) -> (usize, i32);

fn run(format: Format, value: f64) -> ([u8; BUFFER_SIZE], usize, i32) {
    let mut buffer = [0xff; BUFFER_SIZE];
    let (len, exp) = format(value, &mut buffer);
    (buffer, len, exp)
}

#[track_caller]
fn check(format: Format, value: f64, expected: &[u8], expected_exp: i32) {
    let (buffer, len, exp) = run(format, value);
    assert_eq!(&buffer[..len], expected, "digits of {value:e}");
    assert_eq!(exp, expected_exp, "exponent of {value:e}");
    assert_eq!(buffer[len], b'\0');
}

#[test]
fn write_digits() {
    let mut buffer = [0; 32];

    let len = digits::write_u32(&mut buffer, 0);
    assert_eq!(&buffer[..len], b"0");
    let len = digits::write_u32(&mut buffer, 7);
    assert_eq!(&buffer[..len], b"7");
    let len = digits::write_u32(&mut buffer, 10);
    assert_eq!(&buffer[..len], b"10");
    let len = digits::write_u32(&mut buffer, 9999);
    assert_eq!(&buffer[..len], b"9999");
    let len = digits::write_u32(&mut buffer, 10_000);
    assert_eq!(&buffer[..len], b"10000");
    let len = digits::write_u32(&mut buffer, 10_203_040);
    assert_eq!(&buffer[..len], b"10203040");
    let len = digits::write_u32(&mut buffer, 100_000_000);
    assert_eq!(&buffer[..len], b"100000000");
    let len = digits::write_u32(&mut buffer, u32::MAX);
    assert_eq!(&buffer[..len], b"4294967295");

    let len = digits::write_u64(&mut buffer, 99_999_999);
    assert_eq!(&buffer[..len], b"99999999");
    let len = digits::write_u64(&mut buffer, 9_007_199_254_740_992);
    assert_eq!(&buffer[..len], b"9007199254740992");
    let len = digits::write_u64(&mut buffer, 10_000_000_000_000_000);
    assert_eq!(&buffer[..len], b"10000000000000000");
    let len = digits::write_u64(&mut buffer, 100_000_000_000_000_001);
    assert_eq!(&buffer[..len], b"100000000000000001");
    let len = digits::write_u64(&mut buffer, u64::MAX);
    assert_eq!(&buffer[..len], b"18446744073709551615");
}

#[test]
fn count_digits() {
    assert_eq!(digits::count_digits(0), 0);
    assert_eq!(digits::count_digits(1), 1);
    assert_eq!(digits::count_digits(9), 1);
    assert_eq!(digits::count_digits(10), 2);
    assert_eq!(digits::count_digits(999_999_999_999_999_999), 18);
    assert_eq!(digits::count_digits(1_000_000_000_000_000_000), 19);
    assert_eq!(digits::count_digits(u64::MAX), 20);
}

#[test]
fn neighbours() {
    assert_eq!(1.0_f64.next_float(), 1.0 + f64::EPSILON);
    assert_eq!(1.0_f64.prev_float(), 1.0 - f64::EPSILON / 2.0);
    assert_eq!(f64::MIN_POSITIVE.prev_float().next_float(), f64::MIN_POSITIVE);
    assert_eq!(5e-324_f64.next_float(), 1e-323);
    assert_eq!(f64::MAX.prev_float(), 1.7976931348623155e308);
}

#[test]
fn frexp_exponent() {
    assert_eq!(1.0_f64.frexp_exponent(), 1);
    assert_eq!(0.5_f64.frexp_exponent(), 0);
    assert_eq!(0.75_f64.frexp_exponent(), 0);
    assert_eq!(1000.0_f64.frexp_exponent(), 10);
    assert_eq!(f64::MAX.frexp_exponent(), 1024);
    assert_eq!(f64::MIN_POSITIVE.frexp_exponent(), -1021);

    // Subnormals.
    assert_eq!(5e-324_f64.frexp_exponent(), -1073);
    assert_eq!(1e-323_f64.frexp_exponent(), -1072);
    assert_eq!(f64::MIN_POSITIVE.prev_float().frexp_exponent(), -1022);
}

#[test]
fn integer_exponent_of() {
    assert_eq!(1.0_f64.integer_exponent_of(), 1);
    assert_eq!(2.0_f64.integer_exponent_of(), 2);
    assert_eq!(1024.0_f64.integer_exponent_of(), 1024);
    assert_eq!(18014398509481984.0_f64.integer_exponent_of(), 1 << 54);
    assert_eq!(1.7014118346046923e38_f64.integer_exponent_of(), 1 << 127);
}

#[test]
fn high_precision() {
    let mut x = HighPrecision::new(1.0, 2e-16);
    x.normalize();
    assert_eq!(x.val, 1.0 + f64::EPSILON);
    assert!(x.off < 0.0);

    // 10 * 0.1 overshoots the double 1.0 by 2**-54.
    let mut x = HighPrecision::new(0.1, 0.0);
    x.mul10();
    assert_eq!(x.val, 1.0);
    assert_eq!(x.off, f64::EPSILON / 4.0);

    // (1 + 2**-52)**2 = 1 + 2**-51 + 2**-104.
    let y = 1.0 + f64::EPSILON;
    let x = HighPrecision::new(y, 0.0).product(y);
    assert_eq!(x.val, 1.0 + 2.0 * f64::EPSILON);
    assert_eq!(x.off, f64::EPSILON * f64::EPSILON);

    let one = HighPrecision::new(1.0, 0.0);
    let x = one.scale(HighPrecision::new(1e23, 8388608.0));
    assert_eq!(x, HighPrecision::new(1e23, 8388608.0));
}

#[test]
fn split_halves() {
    // The high half keeps 26 significand bits, so squaring it is exact.
    let x = 0.1_f64;
    let hi = f64::from_bits(x.to_bits() & 0xFFFF_FFFF_F800_0000);
    let lo = x - hi;
    assert_eq!(hi + lo, x);
    assert_eq!(hi.to_bits() & 0x7FF_FFFF, 0);
    let err = HighPrecision::new(hi, 0.0).product(hi).off;
    assert_eq!(err, 0.0);
}

#[test]
fn pow10_table() {
    assert_eq!(crate::pow10(0).val, 1e308);
    assert_eq!(crate::pow10(crate::POW10_UNIT).val, 1.0);
    assert_eq!(crate::pow10(crate::POW10_UNIT).off, 0.0);
    assert_eq!(crate::pow10(crate::POW10_BIAS).val, 1e18);
    assert_eq!(crate::pow10(crate::POW10_BIAS).off, 0.0);
    assert_eq!(crate::pow10(285).val, 1e23);
    assert_eq!(crate::pow10(285).off, 8388608.0);
    assert_eq!(crate::pow10(599).val, 1e-291);

    for (val, off) in crate::pow10::POW10 {
        assert_eq!(val + off, val);
    }
}

#[test]
fn estimate_index() {
    assert_eq!(crate::estimate_index(0), 290);
    assert_eq!(crate::estimate_index(1), 290);
    assert_eq!(crate::estimate_index(10), 293);
    assert_eq!(crate::estimate_index(-10), 286);
    assert_eq!(crate::estimate_index(1024), 598);
    assert_eq!(crate::estimate_index(-1073), 20);
    assert_eq!(crate::estimate_index(4000), 599);
}

#[test]
fn floor() {
    assert_eq!(crate::floor_i64(2.0), 2);
    assert_eq!(crate::floor_i64(2.5), 2);
    assert_eq!(crate::floor_i64(-0.5), -1);
    assert_eq!(crate::floor_i64(-2.0), -2);
    assert_eq!(crate::floor_i64(-2.5), -3);
    assert!(crate::is_integral(-3.0));
    assert!(!crate::is_integral(0.25));
}

#[test]
fn mismatch10() {
    assert_eq!(crate::mismatch10(123, 124), 0);
    assert_eq!(crate::mismatch10(120, 130), 1);
    assert_eq!(crate::mismatch10(99, 100), 2);
    assert_eq!(crate::mismatch10(12_345_678_901_234, 12_345_678_991_234), 4);
    assert_eq!(crate::mismatch10(1_000_000_000_000_000, 2_000_000_000_000_000), 15);
}

#[test]
fn round_up() {
    let mut digits = *b"129";
    assert!(!crate::round_up(&mut digits));
    assert_eq!(&digits, b"130");

    let mut digits = *b"1999";
    assert!(!crate::round_up(&mut digits));
    assert_eq!(&digits, b"2000");

    let mut digits = *b"999";
    assert!(crate::round_up(&mut digits));
    assert_eq!(&digits, b"100");
}

#[test]
fn finish() {
    let mut buffer = *b"12300x";
    assert_eq!(crate::finish(&mut buffer, 5), 3);
    assert_eq!(&buffer[..4], b"123\0");

    let mut buffer = *b"0x";
    assert_eq!(crate::finish(&mut buffer, 1), 1);
    assert_eq!(&buffer, b"0\0");
}

#[test]
fn enumerated_is_level_order() {
    // An in-order walk visits strictly ascending keys.
    fn walk(j: usize, prev: &mut Option<u64>) {
        if j >= ENUMERATED.len() {
            return;
        }
        walk(2 * j + 1, prev);
        let key = ENUMERATED[j].0;
        if let Some(prev) = *prev {
            assert!(prev < key, "{prev:#x} before {key:#x}");
        }
        *prev = Some(key);
        walk(2 * j + 2, prev);
    }
    walk(0, &mut None);
}

#[test]
fn enumerated_lookup() {
    for &(bits, digits, exp) in &ENUMERATED {
        assert_eq!(enumerated::lookup(bits), Some((digits, exp)));
        assert!(!digits.ends_with('0'));
        assert!(!digits.starts_with('0'));
        if bits > 1 {
            assert_ne!(enumerated::lookup(bits - 1).map(|e| e.0), Some(digits));
        }
    }

    assert_eq!(enumerated::lookup(0), None);
    assert_eq!(enumerated::lookup(1.0f64.to_bits()), None);
    assert_eq!(enumerated::lookup(0.1f64.to_bits()), None);
    assert_eq!(enumerated::lookup(u64::MAX), None);
    assert_eq!(
        enumerated::lookup(f64::MAX.to_bits()),
        Some(("17976931348623157", 309)),
    );
    assert_eq!(
        enumerated::lookup(0x3e60000000000000),
        Some(("29802322387695312", -7)),
    );
}

#[test]
fn large_integers() {
    let format_int = crate::format_int;
    check(format_int, 18014398509482000.0, b"18014398509482", 17);
    check(format_int, 1152921504606846976.0, b"1152921504606847", 19);
    check(format_int, 1e17, b"1", 18);
    check(format_int, 1e20, b"1", 21);
    check(format_int, 1e21, b"1", 22);
    check(format_int, 1e23, b"1", 24);
    check(format_int, 1.7014118346046923e38, b"17014118346046923", 39);
    check(format_int, 3.4028236692093e38, b"34028236692093", 39);
    check(format_int, 1.2345678901234569e23, b"12345678901234569", 24);

    // Binade edges where the nearest candidate lies below the narrower
    // lower half of the envelope.
    check(format_int, 6.189700196426902e26, b"6189700196426902", 27);
    check(format_int, 5.316911983139664e36, b"5316911983139664", 37);
}

#[test]
fn fixed_point() {
    let format_fixed = crate::format_fixed;
    check(format_fixed, 16.0, b"16", 2);
    check(format_fixed, 16.5, b"165", 2);
    check(format_fixed, 17.25, b"1725", 2);
    check(format_fixed, 99.99999999999999, b"9999999999999999", 2);
    check(format_fixed, 123.456, b"123456", 3);
    check(format_fixed, 255.5, b"2555", 3);
    check(format_fixed, 299792458.0, b"299792458", 9);
    check(format_fixed, 1234567.125, b"1234567125", 7);
    check(format_fixed, 1e16 / 10.0, b"1", 16);
    check(format_fixed, 9007199254740992.0, b"9007199254740992", 16);
}

#[test]
fn fixed_point_ties() {
    // Each value is exactly halfway between two 17-digit candidates, both
    // inside the envelope. The even one wins.
    let format_fixed = crate::format_fixed;
    check(format_fixed, 1125550153115268.25, b"11255501531152682", 16);
    check(format_fixed, 2115347345748811.25, b"21153473457488112", 16);
    check(format_fixed, 1372088713925819.25, b"13720887139258192", 16);

    // Here the last generated digit is odd and rounds up.
    check(format_fixed, 1125899906842624.75, b"11258999068426248", 16);
    check(format_fixed, 1234567890123456.75, b"12345678901234568", 16);
}

#[test]
fn general() {
    let format_general = crate::format_general;
    check(format_general, 1.0, b"1", 1);
    check(format_general, 0.1, b"1", 0);
    check(format_general, 0.3, b"3", 0);
    check(format_general, 0.5, b"5", 0);
    check(format_general, 1.5, b"15", 1);
    check(format_general, 9.5, b"95", 1);
    check(format_general, 2.0 / 3.0, b"6666666666666666", 0);
    check(format_general, 15.999999999999998, b"15999999999999998", 2);
    check(format_general, 9007199254740994.0, b"9007199254740994", 16);
    check(format_general, 1.8014398509481982e16, b"18014398509481982", 17);
    check(format_general, 1.801439850948199e16, b"1801439850948199", 17);
    check(format_general, 2.5e-5, b"25", -4);
    check(format_general, 6.62607015e-34, b"662607015", -33);
    check(format_general, 1e-300, b"1", -299);
    check(format_general, 1.7976931348623155e308, b"17976931348623155", 309);
    check(format_general, 3.402823669209385e38, b"3402823669209385", 39);
    check(format_general, f64::MIN_POSITIVE, b"22250738585072014", -307);
    check(format_general, 5e-324, b"5", -323);
}

#[test]
fn range_dispatch() {
    use crate::{range_of, Range};

    // Fixed-point covers [16, 2**53].
    assert_eq!(range_of(1.0), Range::General);
    assert_eq!(range_of(15.999999999999998), Range::General);
    assert_eq!(range_of(16.0), Range::Fixed);
    assert_eq!(range_of(9007199254740992.0), Range::Fixed);

    // Between 2**53 and INT_MIN, including 2**54 itself, is general.
    assert_eq!(range_of(9007199254740994.0), Range::General);
    assert_eq!(range_of(18014398509481984.0), Range::General);
    assert_eq!(range_of(18014398509481996.0), Range::General);

    // Large integers cover [INT_MIN, INT_MAX), INT_MIN being 2**54 + 16.
    assert_eq!(range_of(18014398509482000.0), Range::Int);
    assert_eq!(range_of(1.7014118346046923e38), Range::Int);
    assert_eq!(range_of(3.4028236692093e38), Range::Int);
    assert_eq!(range_of(3.402823669209385e38), Range::General);
    assert_eq!(range_of(f64::MAX), Range::General);

    let dtoa = crate::dtoa_uncorrected;
    check(dtoa, 15.999999999999998, b"15999999999999998", 2);
    check(dtoa, 16.0, b"16", 2);
    check(dtoa, 9007199254740992.0, b"9007199254740992", 16);
    check(dtoa, 9007199254740994.0, b"9007199254740994", 16);
    check(dtoa, 18014398509481996.0, b"18014398509481996", 17);
    check(dtoa, 18014398509482000.0, b"18014398509482", 17);
    check(dtoa, 3.402823669209385e38, b"3402823669209385", 39);
}

#[test]
fn pinned_results_take_precedence() {
    let mut buffer = [0xff; BUFFER_SIZE];
    for &(bits, digits, exp) in &ENUMERATED {
        let (len, e) = crate::dtoa(f64::from_bits(bits), &mut buffer);
        assert_eq!(&buffer[..len], digits.as_bytes());
        assert_eq!(e, exp);
        assert_eq!(buffer[len], b'\0');
    }
}
