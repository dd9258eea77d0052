/*
 * Copyright (C) 2026 The baseconv contributors
 *
 * This file is part of baseconv.
 *
 * baseconv is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published
 * by the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * baseconv is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License
 * along with baseconv. If not, see <https://www.gnu.org/licenses/>.
 */

//! Functions for converting to and from Base58 text.
//!
//! Every leading zero byte is written as one leading `'1'` (the Base58 zero
//! symbol), and every leading `'1'` decodes to one zero byte.

use super::alphabet::{ASCII, BASE58, HEX};
use super::bigint::count_leading_zeros;
use super::convert::convert_valid;
use super::error::Result;
use super::Radix;

use alloc::{string::String, vec, vec::Vec};

/// Encodes bytes as Base58.
pub fn encode(bytes: &[u8]) -> String {
    BASE58.encode_bytes(bytes)
}

/// Decodes Base58 text into bytes.
///
/// # Errors
///
/// [`Error::UnknownCharacter`](crate::Error::UnknownCharacter) if `text`
/// contains a character outside the Base58 alphabet.
pub fn decode(text: &str) -> Result<Vec<u8>> {
    BASE58.decode_bytes(text)
}

/// Encodes hex text (lowercase) as Base58.
///
/// Leading zero digits are counted in pairs: each `"00"` becomes one `'1'`.
/// If the run of leading zeros has odd length, its last zero is converted
/// along with the rest of the number, where it is still a leading zero and
/// so adds one more `'1'`. The number of hex digits need not be even.
///
/// # Errors
///
/// [`Error::UnknownCharacter`](crate::Error::UnknownCharacter) for a
/// non-hex character.
pub fn from_hex(hex: &str) -> Result<String> {
    let nibbles = HEX.parse(hex)?;
    let paired = count_leading_zeros(&nibbles) / 2 * 2;
    let rest = convert_valid(&nibbles[paired..], Radix::HEX, Radix::BASE58);
    let mut digits = vec![0; paired / 2];
    digits.extend(rest);
    Ok(BASE58.render_valid(&digits))
}

/// Decodes Base58 text into hex text.
///
/// Each leading `'1'` becomes `"00"`. The rest of the number is written
/// without padding, so the output may have an odd number of digits.
///
/// # Errors
///
/// [`Error::UnknownCharacter`](crate::Error::UnknownCharacter) if `text`
/// contains a character outside the Base58 alphabet.
pub fn to_hex(text: &str) -> Result<String> {
    let digits = BASE58.parse(text)?;
    // One extra zero per leading '1', so each zero byte yields two nibbles.
    let mut padded = vec![0; count_leading_zeros(&digits)];
    padded.extend_from_slice(&digits);
    let nibbles = convert_valid(&padded, Radix::BASE58, Radix::HEX);
    Ok(HEX.render_valid(&nibbles))
}

/// Encodes text whose characters are all in U+0000 to U+00FF, taking each
/// character's code point as one byte.
///
/// # Errors
///
/// [`Error::UnknownCharacter`](crate::Error::UnknownCharacter) for a
/// character above U+00FF.
pub fn from_ascii(text: &str) -> Result<String> {
    Ok(encode(&ASCII.parse(text)?))
}

/// Decodes Base58 text, rendering each resulting byte as the character with
/// that code point.
pub fn to_ascii(text: &str) -> Result<String> {
    Ok(ASCII.render_valid(&decode(text)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn hello_world() {
        assert_eq!(encode(b"Hello World!"), "2NEpo7TZRRrLZSi2U");
        assert_eq!(decode("2NEpo7TZRRrLZSi2U").unwrap(), b"Hello World!");
    }

    #[test]
    fn quick_brown_fox() {
        let text = "The quick brown fox jumps over the lazy dog.";
        let b58 = "USm3fpXnKG5EUBx2ndxBDMPVciP5hGey2Jh4NDv6gmeo1LkMeiKrLJUUBk6Z";
        assert_eq!(from_ascii(text).unwrap(), b58);
        assert_eq!(to_ascii(b58).unwrap(), text);
    }

    #[test]
    fn zero_bytes() {
        assert_eq!(encode(&[0, 0, 0, 0]), "1111");
        assert_eq!(decode("1111").unwrap(), [0, 0, 0, 0]);
        assert_eq!(from_ascii("\0\0\0\0").unwrap(), "1111");
        assert_eq!(encode(&[0, 0, 0, 1]), "1112");
    }

    #[test]
    fn empty() {
        assert_eq!(encode(&[]), "");
        assert!(decode("").unwrap().is_empty());
        assert_eq!(from_hex("").unwrap(), "");
        assert_eq!(to_hex("").unwrap(), "");
    }

    #[test]
    fn hex() {
        assert_eq!(from_hex("0000287fb4cd").unwrap(), "11233QC4");
        assert_eq!(to_hex("11233QC4").unwrap(), "0000287fb4cd");
        assert_eq!(from_hex("0000000000000000").unwrap(), "11111111");
        assert_eq!(to_hex("11111111").unwrap(), "0000000000000000");
    }

    #[test]
    fn hex_odd_leading_zero() {
        // The third zero is not a whole byte but still a leading zero.
        assert_eq!(from_hex("000abc").unwrap(), "11pP");
        assert_eq!(from_hex("0abc").unwrap(), "1pP");
        assert_eq!(from_hex("0f").unwrap(), "1G");
        assert_eq!(from_hex("000").unwrap(), "11");
        assert_eq!(from_hex("0").unwrap(), "1");
    }

    #[test]
    fn hex_without_padding() {
        assert_eq!(to_hex("G").unwrap(), "f");
        assert_eq!(to_hex("2").unwrap(), "1");
        assert_eq!(to_hex("1G").unwrap(), "00f");
        assert_eq!(to_hex("1").unwrap(), "00");
        assert_eq!(to_hex("11pP").unwrap(), "0000abc");
    }

    #[test]
    fn hex_odd_length() {
        assert_eq!(from_hex("abc").unwrap(), "pP");
        assert_eq!(from_hex("f").unwrap(), "G");
        assert_eq!(from_hex(&to_hex("1G").unwrap()).unwrap(), "1G");
    }

    #[test]
    fn bad_hex() {
        assert_eq!(from_hex("0g"), Err(Error::UnknownCharacter('g')));
        assert_eq!(from_hex("ABCD"), Err(Error::UnknownCharacter('A')));
        assert_eq!(from_hex("00 1"), Err(Error::UnknownCharacter(' ')));
    }

    #[test]
    fn bad_base58() {
        assert_eq!(decode("1O"), Err(Error::UnknownCharacter('O')));
        assert_eq!(to_hex("0"), Err(Error::UnknownCharacter('0')));
        assert_eq!(from_ascii("€"), Err(Error::UnknownCharacter('€')));
    }
}
