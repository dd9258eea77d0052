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

//! Big integers stored as digit sequences in an arbitrary radix.

use super::error::{Error, Result};
use super::Radix;

use core::num::NonZeroU16;

use alloc::vec::Vec;

pub(crate) fn count_leading_zeros(digits: &[u8]) -> usize {
    digits.iter().take_while(|&&d| d == 0).count()
}

/// A non-negative integer represented as a sequence of digits in a fixed
/// [`Radix`], most significant digit first.
///
/// The digit sequence never has a leading zero, except for the value zero
/// itself, which is represented as exactly one zero digit. Values are
/// immutable; arithmetic returns a new `BigRadixInt`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BigRadixInt {
    digits: Vec<u8>,
    radix: Radix,
}

impl BigRadixInt {
    /// Returns the value zero in the given radix.
    pub fn zero(radix: Radix) -> Self {
        Self::normalized(Vec::new(), radix)
    }

    /// Creates a `BigRadixInt` from `digits` (most significant first) in
    /// `radix`.
    ///
    /// Redundant leading zeros are removed. An empty slice is zero.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidRadix`] if `radix` is outside `2..=256`, or
    /// [`Error::InvalidDigit`] if any digit is not less than `radix`.
    pub fn from_digits(digits: &[u8], radix: u32) -> Result<Self> {
        Self::new(digits, Radix::try_new(radix)?)
    }

    /// Like [`Self::from_digits`], but takes an already validated [`Radix`].
    pub fn new(digits: &[u8], radix: Radix) -> Result<Self> {
        check_digits(digits, radix)?;
        Ok(Self::from_valid(digits, radix))
    }

    pub(crate) fn from_valid(digits: &[u8], radix: Radix) -> Self {
        debug_assert!(digits.iter().all(|&d| radix.contains(d)));
        let start = count_leading_zeros(digits);
        Self::normalized(digits[start..].to_vec(), radix)
    }

    fn normalized(mut digits: Vec<u8>, radix: Radix) -> Self {
        debug_assert!(digits.first() != Some(&0));
        if digits.is_empty() {
            digits.push(0);
        }
        Self {
            digits,
            radix,
        }
    }

    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    pub fn radix(&self) -> Radix {
        self.radix
    }

    /// The number of digits. Always at least 1.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_zero(&self) -> bool {
        self.digits == [0]
    }

    /// Divides by a small integer, returning the quotient and remainder.
    ///
    /// # Errors
    ///
    /// [`Error::DivisionByZero`] if `divisor` is zero.
    pub fn div_rem(&self, divisor: u16) -> Result<(Self, u16)> {
        let divisor = NonZeroU16::new(divisor).ok_or(Error::DivisionByZero)?;
        Ok(self.div_rem_nonzero(divisor))
    }

    pub(crate) fn div_rem_nonzero(&self, divisor: NonZeroU16) -> (Self, u16) {
        let divisor = u32::from(divisor.get());
        let radix = u32::from(self.radix.get());
        let mut quotient = Vec::with_capacity(self.digits.len());
        let mut rem = 0_u32;
        for &d in &self.digits {
            // `rem < divisor <= u16::MAX` and `radix <= 256`, so `acc` stays
            // below 2^24 + 2^8.
            let acc = rem * radix + u32::from(d);
            debug_assert!(acc / divisor < radix);
            quotient.push((acc / divisor) as u8);
            rem = acc % divisor;
        }
        let start = count_leading_zeros(&quotient);
        quotient.drain(..start);
        (Self::normalized(quotient, self.radix), rem as u16)
    }
}

pub(crate) fn check_digits(digits: &[u8], radix: Radix) -> Result<()> {
    match digits.iter().find(|&&d| !radix.contains(d)) {
        Some(&digit) => Err(Error::InvalidDigit {
            digit,
            radix: radix.get(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_leading_zeros() {
        let n = BigRadixInt::from_digits(&[0, 0, 3, 0, 7], 10).unwrap();
        assert_eq!(n.digits(), [3, 0, 7]);
        assert_eq!(n.len(), 3);
        assert!(!n.is_zero());
    }

    #[test]
    fn zero_is_one_digit() {
        let cases: [&[u8]; 3] = [&[], &[0], &[0, 0, 0]];
        for digits in cases {
            let n = BigRadixInt::from_digits(digits, 58).unwrap();
            assert_eq!(n.digits(), [0]);
            assert_eq!(n.len(), 1);
            assert!(n.is_zero());
        }
        assert_eq!(BigRadixInt::zero(Radix::HEX).digits(), [0]);
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(
            BigRadixInt::from_digits(&[1], 1),
            Err(Error::InvalidRadix(1)),
        );
        assert_eq!(
            BigRadixInt::from_digits(&[1], 257),
            Err(Error::InvalidRadix(257)),
        );
        assert_eq!(
            BigRadixInt::from_digits(&[1, 10, 2], 10),
            Err(Error::InvalidDigit {
                digit: 10,
                radix: 10,
            }),
        );
    }

    #[test]
    fn div_rem() {
        // 1234 / 7 = 176 r 2
        let n = BigRadixInt::from_digits(&[1, 2, 3, 4], 10).unwrap();
        let (q, r) = n.div_rem(7).unwrap();
        assert_eq!(q.digits(), [1, 7, 6]);
        assert_eq!(r, 2);

        // 0x01ff / 58 = 8 r 47
        let n = BigRadixInt::from_digits(&[0x01, 0xff], 256).unwrap();
        let (q, r) = n.div_rem(58).unwrap();
        assert_eq!(q.digits(), [8]);
        assert_eq!(r, 47);
    }

    #[test]
    fn div_rem_to_zero() {
        let n = BigRadixInt::from_digits(&[5], 10).unwrap();
        let (q, r) = n.div_rem(16).unwrap();
        assert!(q.is_zero());
        assert_eq!(r, 5);
    }

    #[test]
    fn div_rem_large_divisor() {
        let n = BigRadixInt::from_digits(&[0xff, 0xff, 0xff], 256).unwrap();
        let (q, r) = n.div_rem(u16::MAX).unwrap();
        // 0xffffff = 65535 * 256 + 255
        assert_eq!(q.digits(), [1, 0]);
        assert_eq!(r, 255);
    }

    #[test]
    fn div_by_zero() {
        let n = BigRadixInt::from_digits(&[1], 2).unwrap();
        assert_eq!(n.div_rem(0), Err(Error::DivisionByZero));
    }
}
