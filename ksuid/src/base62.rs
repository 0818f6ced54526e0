//! Fixed-width base62 conversion.
//!
//! Converts between the 20-byte big-endian binary KSUID and its
//! 27-character base62 text form. Both directions are pure, allocation-free
//! long divisions over fixed buffers and never fail; input validation is the
//! caller's job (see [`Ksuid::parse`](crate::Ksuid::parse)).

/// The base62 alphabet, in ascending digit order.
///
/// The order matches ASCII, so byte-wise comparison of two encoded strings
/// equals numeric comparison of the values they encode.
pub const ALPHABET: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

const OFFSET_UPPERCASE: u8 = 10;
const OFFSET_LOWERCASE: u8 = 36;

/// Reports whether `b` is a valid base62 digit.
pub fn is_base62(b: u8) -> bool {
    b.is_ascii_digit() || b.is_ascii_uppercase() || b.is_ascii_lowercase()
}

/// Returns the numeric value (0-61) of a base62 digit byte.
///
/// Bytes outside the alphabet yield garbage values; validate first.
fn digit_value(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'A'..=b'Z' => OFFSET_UPPERCASE + (digit - b'A'),
        _ => OFFSET_LOWERCASE + digit.wrapping_sub(b'a'),
    }
}

/// Encodes a 20-byte binary KSUID into its 27-character base62 form.
///
/// The input is treated as an unsigned big-endian integer and re-expressed
/// in base 62, most-significant digit first. Unused leading positions are
/// padded with `'0'`.
///
/// The input is split into five 32-bit words; this is where most of the
/// efficiency comes from, since long division is O(N^2) in the number of
/// limbs and 32-bit limbs make N a quarter of the byte count.
pub fn encode(src: &[u8; 20]) -> [u8; 27] {
    const SRC_BASE: u64 = 1 << 32;
    const DST_BASE: u64 = 62;

    let mut bp = [0u32; 5];
    for (part, chunk) in bp.iter_mut().zip(src.chunks_exact(4)) {
        *part = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    let mut bp_len = bp.len();

    let mut dst = [b'0'; 27];
    let mut n = dst.len();

    while bp_len > 0 {
        let mut bq = [0u32; 5];
        let mut bq_len = 0;
        let mut remainder: u64 = 0;

        for &limb in &bp[..bp_len] {
            let value = u64::from(limb) + remainder * SRC_BASE;
            let digit = value / DST_BASE;
            remainder = value % DST_BASE;

            // Drop leading zero limbs so the vector shrinks as the
            // magnitude shrinks.
            if bq_len != 0 || digit != 0 {
                bq[bq_len] = digit as u32;
                bq_len += 1;
            }
        }

        // Lowest digits come out first, so fill from the end backward.
        n -= 1;
        dst[n] = ALPHABET[remainder as usize];
        bp = bq;
        bp_len = bq_len;
    }

    dst
}

/// Decodes a 27-character base62 KSUID into its 20-byte binary form.
///
/// The inverse of [`encode`]: the 27 digit values are long-divided by 2^32,
/// each pass emitting one big-endian word into the output from the end
/// backward. Unused leading bytes are zero.
///
/// Bytes outside the alphabet produce garbage output rather than an error.
/// A 27-digit string can encode slightly more than 160 bits; any excess
/// beyond the 20-byte capacity is discarded (the value is taken mod 2^160).
pub fn decode(src: &[u8; 27]) -> [u8; 20] {
    const SRC_BASE: u64 = 62;
    const DST_BASE: u64 = 1 << 32;

    let mut bp = [0u8; 27];
    for (part, &digit) in bp.iter_mut().zip(src.iter()) {
        *part = digit_value(digit);
    }
    let mut bp_len = bp.len();

    let mut dst = [0u8; 20];
    let mut n = dst.len();

    while bp_len > 0 {
        let mut bq = [0u8; 27];
        let mut bq_len = 0;
        let mut remainder: u64 = 0;

        for &limb in &bp[..bp_len] {
            let value = u64::from(limb) + remainder * SRC_BASE;
            let digit = value / DST_BASE;
            remainder = value % DST_BASE;

            if bq_len != 0 || digit != 0 {
                bq[bq_len] = digit as u8;
                bq_len += 1;
            }
        }

        if n >= 4 {
            n -= 4;
            dst[n..n + 4].copy_from_slice(&(remainder as u32).to_be_bytes());
        }
        bp = bq;
        bp_len = bq_len;
    }

    dst
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_values_cover_alphabet() {
        for (value, &digit) in ALPHABET.iter().enumerate() {
            assert!(is_base62(digit));
            assert_eq!(digit_value(digit), value as u8);
        }
    }

    #[test]
    fn rejects_non_alphabet_bytes() {
        for b in [b'+', b'/', b'-', b'_', b' ', b'@', b'[', b'`', b'{', 0xff] {
            assert!(!is_base62(b), "{b:#x} should not be base62");
        }
    }

    #[test]
    fn zero_encodes_to_all_zero_digits() {
        assert_eq!(&encode(&[0u8; 20]), b"000000000000000000000000000");
        assert_eq!(decode(b"000000000000000000000000000"), [0u8; 20]);
    }

    #[test]
    fn max_value_matches_reference() {
        assert_eq!(&encode(&[0xff; 20]), b"aWgEPTl1tmebfsQzFP4bxwgy80V");
        assert_eq!(decode(b"aWgEPTl1tmebfsQzFP4bxwgy80V"), [0xff; 20]);
    }

    #[test]
    fn over_range_string_is_truncated_mod_2_pow_160() {
        // 62^27 - 1 exceeds 2^160 - 1; decode must not write past the
        // buffer and keeps the low 160 bits.
        let out = decode(b"zzzzzzzzzzzzzzzzzzzzzzzzzzz");
        // 62^27 - 1 mod 2^160, canonically re-encoded.
        assert_eq!(&encode(&out), b"PTJlaWEy6DLOK7Z0kavO23J1rzT");
    }
}
