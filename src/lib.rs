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

#![cfg_attr(not(feature = "std"), no_std)]

//! Conversion of digit sequences between arbitrary radices, and the text
//! codecs built on it.
//!
//! ```
//! assert_eq!(baseconv::encode_base58(b"Hello World!"), "2NEpo7TZRRrLZSi2U");
//! assert_eq!(baseconv::hex_to_base58("0000287fb4cd").unwrap(), "11233QC4");
//! assert_eq!(baseconv::convert_digits(&[0, 2, 5, 5], 10, 16).unwrap(), [0, 15, 15]);
//! ```

extern crate alloc;

#[macro_use]
mod radix;

pub mod alphabet;
pub mod base16;
pub mod base58;
pub mod base64;
pub mod bigint;
pub mod convert;
mod error;
mod iter;
pub mod percent;
pub mod utf8;

pub use radix::Radix;

pub use error::{Error, Result};

pub use alphabet::{Alphabet, AlphabetId};
pub use bigint::BigRadixInt;

pub use convert::convert_digits;

pub use base58::decode as decode_base58;
pub use base58::encode as encode_base58;
pub use base58::from_hex as hex_to_base58;
pub use base58::to_hex as base58_to_hex;
