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

use core::fmt::{self, Formatter};

/// An error encountered while converting between radices or alphabets.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// A radix outside `2..=256` was requested.
    InvalidRadix(u32),
    /// A digit was not less than the radix it was declared in.
    InvalidDigit {
        digit: u8,
        radix: u16,
    },
    /// A character is not part of the active alphabet.
    UnknownCharacter(char),
    /// Attempted to divide by zero.
    DivisionByZero,
    /// Base16 input did not contain a whole number of bytes.
    OddLength(usize),
}

/// Alias of <code>[Result](core::result::Result)\<T, [Error]></code>.
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRadix(r) => {
                write!(f, "invalid radix: {} (must be in 2..=256)", r)
            }
            Self::InvalidDigit {
                digit,
                radix,
            } => {
                write!(f, "digit {} is out of range for radix {}", digit, radix)
            }
            Self::UnknownCharacter(c) => {
                write!(f, "unknown character: {:?}", c)
            }
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::OddLength(n) => {
                write!(f, "odd number of hex digits: {}", n)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
