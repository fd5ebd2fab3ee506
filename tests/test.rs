#![allow(clippy::unreadable_literal)]

fn dtoa(value: f64) -> (String, i32) {
    let mut buffer = errol::Buffer::new();
    let decimal = buffer.format(value).unwrap();
    (decimal.digits().to_owned(), decimal.exponent())
}

// Digits and exponent of the shortest representation printed by std.
fn reference(value: f64) -> (String, i32) {
    let s = format!("{:e}", value.abs());
    let (mantissa, exp) = s.split_once('e').unwrap();
    let digits = mantissa.replace('.', "");
    (digits, exp.parse::<i32>().unwrap() + 1)
}

fn expect(digits: &str, exp: i32) -> (String, i32) {
    (digits.to_owned(), exp)
}

#[test]
fn normal() {
    assert_eq!(dtoa(6.62607015e-34), expect("662607015", -33));
    assert_eq!(dtoa(123.456), expect("123456", 3));
    assert_eq!(dtoa(0.30000000000000004), expect("30000000000000004", 0));
}

#[test]
fn small_int() {
    assert_eq!(dtoa(1.0), expect("1", 1));
    assert_eq!(dtoa(100.0), expect("1", 3));
    assert_eq!(dtoa(16.0), expect("16", 2));
}

#[test]
fn fraction() {
    assert_eq!(dtoa(0.1), expect("1", 0));
    assert_eq!(dtoa(0.5), expect("5", 0));
    assert_eq!(dtoa(4.35e-7), expect("435", -6));
    assert_eq!(dtoa(1.0000000000000002), expect("10000000000000002", 1));
}

#[test]
fn large_int() {
    assert_eq!(dtoa(9007199254740992.0), expect("9007199254740992", 16));
    assert_eq!(dtoa(1e22), expect("1", 23));
    assert_eq!(dtoa(9223372036854775808.0), expect("9223372036854776", 19));
    assert_eq!(dtoa(18446744073709551616.0), expect("18446744073709552", 20));
    assert_eq!(dtoa(1.2345678901234568e17), expect("12345678901234568", 18));
}

#[test]
fn zero() {
    assert_eq!(dtoa(0.0), expect("0", 1));
    assert_eq!(dtoa(-0.0), expect("0", 1));
}

#[test]
fn inf() {
    let mut buffer = errol::Buffer::new();
    assert_eq!(buffer.format(f64::INFINITY), None);
    assert_eq!(buffer.format(f64::NEG_INFINITY), None);
}

#[test]
fn nan() {
    let mut buffer = errol::Buffer::new();
    assert_eq!(buffer.format(f64::NAN.copysign(1.0)), None);
    assert_eq!(buffer.format(f64::NAN.copysign(-1.0)), None);
}

#[test]
fn sign_ignored() {
    assert_eq!(dtoa(-1.5), expect("15", 1));
    assert_eq!(dtoa(-6.62607015e-34), dtoa(6.62607015e-34));
    assert_eq!(dtoa(-f64::MAX), dtoa(f64::MAX));
}

#[test]
fn shorter() {
    // A shorter candidate below the value.
    assert_eq!(dtoa(-4.932096661796888e-226), expect("4932096661796888", -225));

    // A shorter candidate above the value.
    assert_eq!(dtoa(3.439070283483335e+35), expect("3439070283483335", 36));
}

#[test]
fn single_candidate() {
    assert_eq!(dtoa(6.606854224493745e-17), expect("6606854224493745", -16));
    assert_eq!(dtoa(6.079537928711555e+61), expect("6079537928711555", 62));
}

#[test]
fn extremes() {
    assert_eq!(dtoa(f64::MAX), expect("17976931348623157", 309));
    assert_eq!(dtoa(f64::MIN_POSITIVE), expect("22250738585072014", -307));
    assert_eq!(dtoa(5e-324), expect("5", -323));
    assert_eq!(dtoa(1.5e-323), expect("15", -322));

    for value in [f64::MAX, f64::MIN_POSITIVE, 5e-324, f64::EPSILON] {
        assert_eq!(dtoa(value), reference(value));
    }
}

#[test]
fn range_boundaries() {
    let values = [
        15.999999999999998,
        16.0,
        16.000000000000004,
        9007199254740991.0,
        9007199254740992.0,
        9007199254740994.0,
        18014398509481982.0,
        18014398509481984.0,
        18014398509481988.0,
        1.7014118346046923e38,
        3.4028236692093e38,
        3.402823669209385e38,
    ];
    for value in values {
        let (digits, exp) = dtoa(value);
        let parsed: f64 = format!("0.{digits}e{exp}").parse().unwrap();
        assert_eq!(parsed, value);
        assert_eq!(digits.len(), reference(value).0.len(), "{value:e}");
    }
}

#[test]
fn exact_ties() {
    // 2**-25 = 2.98023223876953125e-8 sits halfway between two 17-digit
    // candidates; the even one wins.
    assert_eq!(dtoa(2.9802322387695312e-8), expect("29802322387695312", -7));

    // Fixed-point ties, where std rounds the other way.
    assert_eq!(dtoa(1125550153115268.25), expect("11255501531152682", 16));
    assert_eq!(dtoa(2115347345748811.25), expect("21153473457488112", 16));
    assert_eq!(dtoa(1234567890123456.75), expect("12345678901234568", 16));
}

#[test]
fn format_shortest() {
    let mut buffer = [0xff; errol::BUFFER_SIZE];

    let exp = errol::format_shortest(0.1, &mut buffer);
    assert_eq!(&buffer[..2], b"1\0");
    assert_eq!(exp, 0);

    let exp = errol::format_shortest(9007199254740992.0, &mut buffer);
    assert_eq!(&buffer[..17], b"9007199254740992\0");
    assert_eq!(exp, 16);

    // Pinned results are returned without running the algorithms.
    let exp = errol::format_shortest(f64::MAX, &mut buffer);
    assert_eq!(&buffer[..18], b"17976931348623157\0");
    assert_eq!(exp, 309);
}

#[test]
#[should_panic]
fn format_shortest_zero() {
    let mut buffer = [0; errol::BUFFER_SIZE];
    errol::format_shortest(0.0, &mut buffer);
}

#[test]
#[should_panic]
fn format_shortest_negative() {
    let mut buffer = [0; errol::BUFFER_SIZE];
    errol::format_shortest(-1.0, &mut buffer);
}

#[test]
#[should_panic]
fn format_shortest_uncorrected_nan() {
    let mut buffer = [0; errol::BUFFER_SIZE];
    errol::format_shortest_uncorrected(f64::NAN, &mut buffer);
}

#[test]
fn format_shortest_uncorrected() {
    let mut buffer = [0; errol::BUFFER_SIZE];
    let mut corrected = [0; errol::BUFFER_SIZE];
    for value in [1.0, 0.1, 123.456, 1e23, 6.62607015e-34, 5e-324, 1.7976931348623155e308] {
        let exp = errol::format_shortest_uncorrected(value, &mut buffer);
        assert_eq!(exp, errol::format_shortest(value, &mut corrected));
        assert_eq!(buffer, corrected);
    }
}

#[test]
fn buffer_reuse() {
    let mut buffer = errol::Buffer::default();
    let first = buffer.format(1.7976931348623157e308).unwrap().exponent();
    let second = buffer.format(0.25).unwrap();
    assert_eq!(first, 309);
    assert_eq!(second.digits(), "25");
    assert_eq!(second.exponent(), 0);
}
