// Generator for the pinned results in src/enumerated.rs.
//
// Every record is computed with exact big-integer arithmetic: the shortest
// digit string inside the rounding interval of the input, the candidate
// nearest the input winning, exact ties going to the even digit. The records
// are printed as a level-order binary search tree.
//
// Inputs come from three places:
//
// - a scan of every power of two, keeping those whose asymmetric interval
//   excludes the nearest shortest candidate or that sit exactly halfway
//   between two candidates;
// - TIES, short dyadic fractions that are exact decimal ties, found by
//   comparing the double-double scaling against this exact conversion;
// - ENVELOPE, values around 2**53 and 2**54 whose interval endpoints are
//   integers, found the same way with random and boundary inputs.
//
// The largest finite double is always included since its upper neighbour is
// infinite.

use num_bigint::BigUint;
use num_integer::Integer as _;
use num_traits::One as _;
use std::cmp::Ordering;

const NUM_SIG_BITS: u32 = 52;
const EXP_OFFSET: i32 = 1075;
const MAX_DIGITS: usize = 17;

#[rustfmt::skip]
const TIES: &[u64] = &[
    0x3eb2000000000000, 0x3ee6800000000000, 0x3ef3400000000000,
    0x3f20500000000000, 0x3f2c900000000000, 0x3f42a80000000000,
    0x3fb5334000000000, 0x3fc1062000000000, 0x400ee99400000000,
];

#[rustfmt::skip]
const ENVELOPE: &[u64] = &[
    0x4340000000000001, 0x4340000000000002, 0x4340000000000003,
    0x43402a917d4e3200, 0x43406a2267e6707f, 0x4340800000000000,
    0x4340964000000000, 0x43415c893b67a2c8, 0x43419128ee400000,
    0x434194d000000000, 0x4341c37937e07ffe, 0x4341c37937e07fff,
    0x4341c37937e08000, 0x4341c37937e08001, 0x4341c37937e08002,
    0x4341ed570914b81b, 0x43423d1fc83f29c3, 0x43427601619df0f6,
    0x4342c28555a00000, 0x4342f2373ce44f9e, 0x4342fc5b1c26ecc8,
    0x4343000000000000, 0x4343132bc0bf63da, 0x434322fdd4100000,
    0x434331e31edf0b23, 0x434351e200000000, 0x43436bf0dfc00000,
    0x43438a3c9768a422, 0x434392c6a2e29f57, 0x4343ab294061a968,
    0x43442a0000000000, 0x4344560000000000, 0x434462556e84a1ea,
    0x43447974bcc40000, 0x43447deea4800000, 0x434480f133790000,
    0x4344b47fb3764c00, 0x4344da0000000000, 0x4344e68c5bd51f85,
    0x43451e6c00000000, 0x4345d7b2b9ea6e75, 0x434605e026b89937,
    0x43461783f94d51f7, 0x4346d0c07fec0b53, 0x4347118a31d4d648,
    0x4347630e4954a140, 0x4347a9876e8d4000, 0x4347b3747acd53c7,
    0x4347dda32384a64e, 0x4347e1c6bffbf788, 0x4348000000000000,
    0x4348064000000000, 0x43482e3940fb8f0e, 0x434842c3c4862796,
    0x4348874c84200000, 0x434888d720000000, 0x434909d803d1ad50,
    0x434910362e400000, 0x43496aeac382a60b, 0x434970d6ec43d255,
    0x4349740669a40000, 0x43497bbafa94b04c, 0x4349950000000000,
    0x43499a0000000000, 0x4349df0fe78a640d, 0x4349e37964adc2c6,
    0x4349e9b068000000, 0x4349f5f0f0bd3000, 0x4349f7f800000000,
    0x434a07fe62a5473a, 0x434a08a4ddd6dd5c, 0x434a19d95661d9ca,
    0x434a1ff0c2980000, 0x434a269136500736, 0x434a3ca48edfa107,
    0x434a761a9d0c3b26, 0x434ac76cf61e1cd3, 0x434b172fe18e731d,
    0x434b2b85c49a84e6, 0x434c000000000000, 0x434c4e01594bc4c4,
    0x434c50240f606efa, 0x434c8070c009a800, 0x434cf0600c000000,
    0x434d2372e6da4000, 0x434d34765d600000, 0x434d8f0000000000,
    0x434dbd05f3fc5a7a, 0x434dc8bab4b3f8e8, 0x434dcd1080000000,
    0x434e0b490fc3b1e2, 0x434e2a0e93d43153, 0x434e4cc000000000,
    0x434e5a92b45ae20a, 0x434e62edfb8c9376, 0x434e6d82509c7315,
    0x434e87ef19219409, 0x434ea9c50db65dbe, 0x434f5c244154a088,
    0x434f800000000000, 0x434f9b63ecfa17a2, 0x434fd4ab41dfa2c6,
    0x434fed3ff73da7ea, 0x434fefc157c9112c, 0x434ffffffffffffd,
    0x434ffffffffffffe, 0x434fffffffffffff, 0x4350000000000000,
    0x4350000000000001, 0x4350000000000002, 0x4350000000000003,
];

struct Shortest {
    digits: String,
    exp: i32,
    nearest: bool,
    tie: bool,
}

fn pow2(n: i32) -> BigUint {
    BigUint::one() << n.max(0) as usize
}

fn pow10(n: i32) -> BigUint {
    BigUint::from(10_u8).pow(n.max(0) as u32)
}

// Returns (sig, bin_exp) with value = sig * 2**bin_exp.
fn decompose(bits: u64) -> (u64, i32) {
    let biased = (bits >> NUM_SIG_BITS) as i32;
    let sig = bits & ((1 << NUM_SIG_BITS) - 1);
    if biased == 0 {
        (sig, 1 - EXP_OFFSET)
    } else {
        (sig | (1 << NUM_SIG_BITS), biased - EXP_OFFSET)
    }
}

// x * 2**t < 10**k
fn below_pow10(x: &BigUint, t: i32, k: i32) -> bool {
    x * pow2(t) * pow10(-k) < pow10(k) * pow2(-t)
}

fn shortest(bits: u64) -> Shortest {
    let (sig, bin_exp) = decompose(bits);
    let edge = sig == 1 << NUM_SIG_BITS && bin_exp > 1 - EXP_OFFSET;
    let inclusive = sig % 2 == 0;

    // Quarter units: value, interval endpoints times 2**(bin_exp - 2).
    let t = bin_exp - 2;
    let mid = BigUint::from(4 * sig);
    let low = BigUint::from(if edge { 4 * sig - 1 } else { 4 * sig - 2 });
    let high = BigUint::from(4 * sig + 2);

    // 10**(dec_exp - 1) <= value < 10**dec_exp
    let mut dec_exp = f64::from_bits(bits).log10().floor() as i32 + 1;
    while !below_pow10(&mid, t, dec_exp) {
        dec_exp += 1;
    }
    while below_pow10(&mid, t, dec_exp - 1) {
        dec_exp -= 1;
    }

    for len in 1..=MAX_DIGITS {
        let shift = len as i32 - dec_exp;
        let up = pow2(t) * pow10(shift);
        let down = pow2(-t) * pow10(-shift);

        let (floor, rem) = (&mid * &up).div_rem(&down);
        let tie = (&rem << 1_u32).cmp(&down);
        let round_up = match tie {
            Ordering::Greater => true,
            Ordering::Less => false,
            Ordering::Equal => floor.is_odd(),
        };
        let ceil = &floor + 1_u32;
        let candidates = if round_up { [ceil, floor] } else { [floor, ceil] };

        let low = &low * &up;
        let high = &high * &up;
        for (i, candidate) in candidates.into_iter().enumerate() {
            let scaled = &candidate * &down;
            let inside = if inclusive {
                low <= scaled && scaled <= high
            } else {
                low < scaled && scaled < high
            };
            if inside {
                let digits = candidate.to_string();
                let exp = dec_exp + digits.len() as i32 - len as i32;
                return Shortest {
                    digits: digits.trim_end_matches('0').to_owned(),
                    exp,
                    nearest: i == 0,
                    tie: tie == Ordering::Equal,
                };
            }
        }
    }
    unreachable!("{bits:#x} needs more than {MAX_DIGITS} digits");
}

// Fills out[j] so that an in-order walk of the implicit tree yields sorted.
fn level_order<'a>(sorted: &mut impl Iterator<Item = &'a u64>, out: &mut [u64], j: usize) {
    if j >= out.len() {
        return;
    }
    level_order(sorted, out, 2 * j + 1);
    if let Some(&key) = sorted.next() {
        out[j] = key;
    }
    level_order(sorted, out, 2 * j + 2);
}

fn main() {
    let mut keys = Vec::new();
    for biased in 1..0x7ff_u64 {
        let bits = biased << NUM_SIG_BITS;
        let shortest = shortest(bits);
        if !shortest.nearest || shortest.tie {
            keys.push(bits);
        }
    }
    keys.extend_from_slice(TIES);
    keys.extend_from_slice(ENVELOPE);
    keys.push(f64::MAX.to_bits());
    keys.sort_unstable();
    keys.dedup();

    let mut table = vec![0; keys.len()];
    level_order(&mut keys.iter(), &mut table, 0);

    println!("pub static ENUMERATED: [(u64, &str, i32); {}] = [", table.len());
    for bits in table {
        let Shortest { digits, exp, .. } = shortest(bits);
        let value = f64::from_bits(bits);
        println!("    ({bits:#018x}, \"{digits}\", {exp}), // {value:?}");
    }
    println!("];");
}
