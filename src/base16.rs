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

//! Byte-aligned hex: every byte is exactly two lowercase hex digits.

use super::alphabet::HEX;
use super::error::{Error, Result};

use alloc::{string::String, vec::Vec};

pub fn encode(bytes: &[u8]) -> String {
    let nibbles: Vec<u8> =
        bytes.iter().flat_map(|&b| [b >> 4, b & 0x0f]).collect();
    HEX.render_valid(&nibbles)
}

/// # Errors
///
/// [`Error::UnknownCharacter`] for a non-hex character, or
/// [`Error::OddLength`] if the number of hex digits is odd.
pub fn decode(hex: &str) -> Result<Vec<u8>> {
    let nibbles = HEX.parse(hex)?;
    if nibbles.len() % 2 != 0 {
        return Err(Error::OddLength(nibbles.len()));
    }
    Ok(nibbles.chunks_exact(2).map(|pair| pair[0] << 4 | pair[1]).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs() {
        assert_eq!(encode(&[0x00, 0x0a, 0xff]), "000aff");
        assert_eq!(decode("000aff").unwrap(), [0x00, 0x0a, 0xff]);
        assert_eq!(encode(&[]), "");
    }

    #[test]
    fn malformed() {
        assert_eq!(decode("abc"), Err(Error::OddLength(3)));
        assert_eq!(decode("zz"), Err(Error::UnknownCharacter('z')));
    }
}
