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

//! Conversion of digit sequences between radices.
//!
//! A digit sequence is read as one big integer, so conversion alone cannot
//! tell a leading zero digit from no digit at all. The number of leading
//! zeros in the source is therefore counted up front and the same number of
//! zero digits is prefixed to the result, whatever the two radices are. This
//! is what makes four `0x00` bytes come out as `"1111"` in Base58.

use super::bigint::{check_digits, count_leading_zeros, BigRadixInt};
use super::error::Result;
use super::Radix;

use alloc::vec::Vec;

/// Converts `buffer` (most significant digit first) from radix `from` to
/// radix `to`.
///
/// Each leading zero digit of `buffer` becomes exactly one leading zero digit
/// of the output. An empty buffer converts to an empty buffer.
///
/// # Errors
///
/// [`Error::InvalidDigit`](super::Error::InvalidDigit) if a digit in
/// `buffer` is not less than `from`.
pub fn convert(buffer: &[u8], from: Radix, to: Radix) -> Result<Vec<u8>> {
    check_digits(buffer, from)?;
    Ok(convert_valid(buffer, from, to))
}

/// Like [`convert`], but takes radices as plain integers.
///
/// # Errors
///
/// [`Error::InvalidRadix`](super::Error::InvalidRadix) if either radix is
/// outside `2..=256`; otherwise the same as [`convert`].
pub fn convert_digits(
    buffer: &[u8],
    from_radix: u32,
    to_radix: u32,
) -> Result<Vec<u8>> {
    convert(buffer, Radix::try_new(from_radix)?, Radix::try_new(to_radix)?)
}

pub(crate) fn convert_valid(buffer: &[u8], from: Radix, to: Radix) -> Vec<u8> {
    let zeros = count_leading_zeros(buffer);
    let value = BigRadixInt::from_valid(&buffer[zeros..], from);
    let digits = magnitude(value, to);
    let mut out = Vec::with_capacity(zeros + digits.len());
    out.resize(zeros, 0);
    out.extend(digits);
    out
}

/// Returns the digits of `value` in radix `to`, most significant first.
///
/// Zero has no digits, so the result is empty for zero.
pub fn magnitude(mut value: BigRadixInt, to: Radix) -> Vec<u8> {
    let divisor = to.divisor();
    let mut digits = Vec::with_capacity(estimate_len(&value, to));
    while !value.is_zero() {
        let (quotient, rem) = value.div_rem_nonzero(divisor);
        // `rem < to <= 256`
        digits.push(rem as u8);
        value = quotient;
    }
    digits.reverse();
    digits
}

// Upper bound on the number of radix-`to` digits needed, from
// len * log(from) / log(to) with log approximated by bit length.
fn estimate_len(value: &BigRadixInt, to: Radix) -> usize {
    let bits = |r: Radix| 16 - (r.get() - 1).leading_zeros() as usize;
    let from_bits = bits(value.radix());
    let to_bits = bits(to).saturating_sub(1).max(1);
    value.digits().len() * from_bits / to_bits + 1
}
