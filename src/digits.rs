struct DivmodResult {
    div: u32,
    r#mod: u32,
}

// Returns {value / 100, value % 100} correct for values of up to 4 digits.
fn divmod100(value: u32) -> DivmodResult {
    debug_assert!(value < 10_000);
    const EXP: u32 = 19; // 19 is faster or equal to 12 even for 3 digits.
    const SIG: u32 = (1 << EXP) / 100 + 1;
    let div = (value * SIG) >> EXP; // value / 100
    DivmodResult {
        div,
        r#mod: value - div * 100,
    }
}

// Converts value in the range [0, 100) to a pair of ASCII digits.
fn digits2(value: u32) -> [u8; 2] {
    // Align data since unaligned access may be slower when crossing a
    // hardware-specific boundary.
    #[repr(align(2))]
    struct Digits([u8; 200]);

    static DATA: Digits = Digits(
        *b"0001020304050607080910111213141516171819\
           2021222324252627282930313233343536373839\
           4041424344454647484950515253545556575859\
           6061626364656667686970717273747576777879\
           8081828384858687888990919293949596979899",
    );

    let i = value as usize * 2;
    [DATA.0[i], DATA.0[i + 1]]
}

// Writes a value below 10_000 without leading zeros.
fn write_small(buffer: &mut [u8], value: u32) -> usize {
    let DivmodResult { div: ab, r#mod: cd } = divmod100(value);
    let [a, b] = digits2(ab);
    let [c, d] = digits2(cd);
    let mut len = 0;
    if value >= 1000 {
        buffer[len] = a;
        len += 1;
    }
    if value >= 100 {
        buffer[len] = b;
        len += 1;
    }
    if value >= 10 {
        buffer[len] = c;
        len += 1;
    }
    buffer[len] = d;
    len + 1
}

// Writes exactly 4 digits, zero-padded.
fn write4(buffer: &mut [u8], value: u32) {
    let DivmodResult { div: ab, r#mod: cd } = divmod100(value);
    buffer[..2].copy_from_slice(&digits2(ab));
    buffer[2..4].copy_from_slice(&digits2(cd));
}

// Writes exactly 8 digits, zero-padded.
fn write8(buffer: &mut [u8], value: u32) {
    debug_assert!(value < 100_000_000);
    write4(buffer, value / 10_000);
    write4(&mut buffer[4..], value % 10_000);
}

/// Writes the significant decimal digits of `value` to the start of
/// `buffer` and returns the number of digits written. Zero is written as a
/// single `0`.
pub fn write_u32(buffer: &mut [u8], value: u32) -> usize {
    if value < 10_000 {
        write_small(buffer, value)
    } else if value < 100_000_000 {
        // value = bbbbcccc
        let len = write_small(buffer, value / 10_000);
        write4(&mut buffer[len..], value % 10_000);
        len + 4
    } else {
        // value = aabbbbcccc
        let a = value / 100_000_000; // 1 to 42
        let len = if a >= 10 {
            buffer[..2].copy_from_slice(&digits2(a));
            2
        } else {
            buffer[0] = b'0' + a as u8;
            1
        };
        write8(&mut buffer[len..], value % 100_000_000);
        len + 8
    }
}

/// Same as [`write_u32`] for 64-bit values.
pub fn write_u64(buffer: &mut [u8], value: u64) -> usize {
    const TEN8: u64 = 100_000_000;
    const TEN16: u64 = TEN8 * TEN8;

    if value < TEN8 {
        write_u32(buffer, value as u32)
    } else if value < TEN16 {
        let len = write_u32(buffer, (value / TEN8) as u32);
        write8(&mut buffer[len..], (value % TEN8) as u32);
        len + 8
    } else {
        let a = (value / TEN16) as u32; // 1 to 1844
        let rest = value % TEN16;
        let len = write_small(buffer, a);
        write8(&mut buffer[len..], (rest / TEN8) as u32);
        write8(&mut buffer[len + 8..], (rest % TEN8) as u32);
        len + 16
    }
}

/// Number of significant decimal digits of `value`, treating zero as
/// having none.
pub fn count_digits(value: u64) -> usize {
    match value.checked_ilog10() {
        Some(n) => n as usize + 1,
        None => 0,
    }
}
