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

//! Mappings between digit values and the characters that display them.

use super::convert::convert_valid;
use super::error::{Error, Result};
use super::Radix;

use alloc::{string::String, vec::Vec};

const UNMAPPED: u8 = 0xff;

enum Table {
    /// Digit `d` is displayed as the ASCII character `symbols[d]`.
    Symbols {
        symbols: &'static [u8],
        lookup: [u8; 128],
    },
    /// Digit `d` is displayed as the character with code point `d`.
    Passthrough,
}

/// A bijection between the digit values of a [`Radix`] and a set of
/// characters.
pub struct Alphabet {
    radix: Radix,
    table: Table,
}

/// Lowercase hexadecimal digits.
pub static HEX: Alphabet = Alphabet::from_symbols(b"0123456789abcdef");

/// The conventional Base58 alphabet, which leaves out `0`, `O`, `I` and `l`.
pub static BASE58: Alphabet = Alphabet::from_symbols(
    b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz",
);

/// Radix 256, where each digit is displayed as the character with the same
/// code point (U+0000 to U+00FF).
pub static ASCII: Alphabet = Alphabet {
    radix: Radix::BYTE,
    table: Table::Passthrough,
};

/// Identifies one of the built-in alphabets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AlphabetId {
    Hex,
    Base58,
    Ascii,
}

impl AlphabetId {
    pub fn alphabet(self) -> &'static Alphabet {
        match self {
            Self::Hex => &HEX,
            Self::Base58 => &BASE58,
            Self::Ascii => &ASCII,
        }
    }
}

impl Alphabet {
    pub(crate) const fn from_symbols(symbols: &'static [u8]) -> Self {
        let mut lookup = [UNMAPPED; 128];
        let mut i = 0;
        while i < symbols.len() {
            let c = symbols[i];
            assert!(c < 128, "alphabet symbols must be ASCII");
            assert!(
                lookup[c as usize] == UNMAPPED,
                "alphabet symbols must be unique",
            );
            lookup[c as usize] = i as u8;
            i += 1;
        }
        Self {
            radix: Radix::__const(symbols.len() as u16),
            table: Table::Symbols {
                symbols,
                lookup,
            },
        }
    }

    pub fn radix(&self) -> Radix {
        self.radix
    }

    /// Returns the character displaying `digit`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDigit`] if `digit` is not less than [`Self::radix`].
    pub fn to_char(&self, digit: u8) -> Result<char> {
        if !self.radix.contains(digit) {
            return Err(Error::InvalidDigit {
                digit,
                radix: self.radix.get(),
            });
        }
        Ok(self.to_char_valid(digit))
    }

    pub(crate) fn to_char_valid(&self, digit: u8) -> char {
        match &self.table {
            Table::Symbols {
                symbols,
                ..
            } => char::from(symbols[usize::from(digit)]),
            Table::Passthrough => char::from(digit),
        }
    }

    /// Returns the digit value displayed by `c`.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownCharacter`] if `c` is not in this alphabet.
    pub fn to_digit(&self, c: char) -> Result<u8> {
        let byte = u8::try_from(c).ok();
        let digit = match &self.table {
            Table::Symbols {
                lookup,
                ..
            } => byte
                .and_then(|b| lookup.get(usize::from(b)).copied())
                .filter(|&d| d != UNMAPPED),
            Table::Passthrough => byte,
        };
        digit.ok_or(Error::UnknownCharacter(c))
    }

    /// The character displaying digit zero.
    pub fn zero_char(&self) -> char {
        self.to_char_valid(0)
    }

    /// Maps every character of `text` to its digit value.
    pub fn parse(&self, text: &str) -> Result<Vec<u8>> {
        text.chars().map(|c| self.to_digit(c)).collect()
    }

    /// Maps every digit to its character.
    pub fn render(&self, digits: &[u8]) -> Result<String> {
        digits.iter().map(|&d| self.to_char(d)).collect()
    }

    pub(crate) fn render_valid(&self, digits: &[u8]) -> String {
        debug_assert!(digits.iter().all(|&d| self.radix.contains(d)));
        digits.iter().map(|&d| self.to_char_valid(d)).collect()
    }

    /// Converts `bytes` to this radix and renders the result.
    ///
    /// Each leading zero byte becomes one [`Self::zero_char`].
    pub fn encode_bytes(&self, bytes: &[u8]) -> String {
        self.render_valid(&convert_valid(bytes, Radix::BYTE, self.radix))
    }

    /// The inverse of [`Self::encode_bytes`].
    pub fn decode_bytes(&self, text: &str) -> Result<Vec<u8>> {
        Ok(convert_valid(&self.parse(text)?, self.radix, Radix::BYTE))
    }
}
