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

use super::error::{Error, Result};

use core::fmt::{self, Display, Formatter};
use core::num::NonZeroU16;

/// The number of distinct digit values in a positional numeral system.
///
/// Always in `2..=256`, so every digit of every supported radix fits in one
/// [`u8`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Radix(u16);

#[macro_export]
#[doc(hidden)]
macro_rules! const_radix {
    ($n:expr) => {{
        use $crate::Radix;
        const RADIX: Radix = Radix::__const($n);
        RADIX
    }};
}

impl Radix {
    pub const MIN: u32 = 2;
    pub const MAX: u32 = 256;

    /// Raw bytes.
    pub const BYTE: Self = const_radix!(256);
    /// Hexadecimal digits.
    pub const HEX: Self = const_radix!(16);
    /// Base58 symbols.
    pub const BASE58: Self = const_radix!(58);

    /// Returns [`None`] if `n` is outside `2..=256`.
    pub fn new(n: u32) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&n).then(|| Self(n as u16))
    }

    /// Like [`Self::new`], but fails with [`Error::InvalidRadix`].
    pub fn try_new(n: u32) -> Result<Self> {
        Self::new(n).ok_or(Error::InvalidRadix(n))
    }

    #[doc(hidden)]
    pub const fn __const(n: u16) -> Self {
        const BOUNDS_CHECK: [u16; 1] = [0];
        let out_of_range = n < Self::MIN as u16 || n > Self::MAX as u16;
        Self(n + BOUNDS_CHECK[out_of_range as usize])
    }

    pub const fn get(self) -> u16 {
        self.0
    }

    /// Whether `digit` is a valid digit value in this radix.
    pub fn contains(self, digit: u8) -> bool {
        u16::from(digit) < self.0
    }

    pub(crate) fn divisor(self) -> NonZeroU16 {
        // SAFETY: `self.0` is at least 2.
        unsafe { NonZeroU16::new_unchecked(self.0) }
    }
}

impl From<Radix> for u32 {
    fn from(r: Radix) -> u32 {
        r.0.into()
    }
}

impl TryFrom<u32> for Radix {
    type Error = Error;

    fn try_from(n: u32) -> Result<Self> {
        Self::try_new(n)
    }
}

impl Display for Radix {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
