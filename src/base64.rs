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

//! Functions and types for standard Base64 (`A–Z a–z 0–9 + /`, with `=`
//! padding).
//!
//! Unlike Base58, Base64 does not go through a big integer: every 3 bytes
//! are packed into 4 six-bit symbols independently.

use super::alphabet::Alphabet;
use super::iter::{BaseIterator, Flatten, InspectBaseIterator};

use core::array;
use core::fmt::{self, Formatter};
use core::iter::{Fuse, FusedIterator, Take};

use alloc::{string::String, vec::Vec};

const BYTES_PER_CHUNK: usize = 3;
const SYMBOLS_PER_CHUNK: usize = 4;

const PAD: char = '=';

static BASE64: Alphabet = Alphabet::from_symbols(
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/",
);

/// An error encountered while decoding Base64 text.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeError {
    /// Encountered an unexpected character.
    BadChar(char),
    /// The input was not the correct number of characters.
    BadLength,
}

use DecodeError as Error;

/// Alias of <code>[Result]\<T, [DecodeError]></code>.
pub type DecodeResult<T> = Result<T, DecodeError>;

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadChar(c) => write!(f, "bad character: {:?}", c),
            Self::BadLength => write!(f, "bad input length"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DecodeError {}

/// Used by [`encode_with`] to configure the encoding process.
#[non_exhaustive]
#[derive(Clone, Copy, Debug)]
pub struct EncodeConfig {
    /// Whether to pad the last group with ‘=’ to four characters.
    /// [default: true]
    pub pad: bool,
}

impl EncodeConfig {
    /// Returns the default configuration.
    pub const fn new() -> Self {
        Self {
            pad: true,
        }
    }
}

impl Default for EncodeConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Used by [`decode_with`] to configure the decoding process.
#[non_exhaustive]
#[derive(Clone, Copy, Debug)]
pub struct DecodeConfig {
    /// Whether the input must be padded with ‘=’ to a multiple of four
    /// characters. Padding that is present is always checked.
    /// [default: false]
    pub require_padding: bool,
}

impl DecodeConfig {
    /// Returns the default configuration.
    pub const fn new() -> Self {
        Self {
            require_padding: false,
        }
    }
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self::new()
    }
}

struct BytesToUnflatChars<I> {
    iter: I,
    pad: bool,
}

impl<I: InspectBaseIterator> InspectBaseIterator for BytesToUnflatChars<I> {
    type Iter = I::Iter;

    fn base_iterator(&self) -> &Self::Iter {
        self.iter.base_iterator()
    }
}

type BytesToUnflatCharsItem = Take<array::IntoIter<char, SYMBOLS_PER_CHUNK>>;

impl<I> Iterator for BytesToUnflatChars<I>
where
    I: FusedIterator<Item = u8>,
{
    type Item = BytesToUnflatCharsItem;

    fn next(&mut self) -> Option<Self::Item> {
        let mut num_bytes = 0;
        let mut sum = 0_u32;
        self.iter
            .by_ref()
            .map(u32::from)
            .enumerate()
            .take(BYTES_PER_CHUNK)
            .for_each(|(i, n)| {
                num_bytes += 1;
                sum |= n << (8 * (BYTES_PER_CHUNK - 1 - i));
            });

        if num_bytes == 0 {
            return None;
        }

        let mut chars = [PAD; SYMBOLS_PER_CHUNK];
        chars.iter_mut().take(num_bytes + 1).enumerate().for_each(|(i, c)| {
            let shift = 6 * (SYMBOLS_PER_CHUNK - 1 - i);
            *c = BASE64.to_char_valid(((sum >> shift) & 0x3f) as u8);
        });
        let len = if self.pad {
            SYMBOLS_PER_CHUNK
        } else {
            num_bytes + 1
        };
        Some(IntoIterator::into_iter(chars).take(len))
    }
}

impl<I: FusedIterator<Item = u8>> FusedIterator for BytesToUnflatChars<I> {}

fn encoded_len(bytes: usize, pad: bool) -> Option<usize> {
    let tail = match (bytes % BYTES_PER_CHUNK, pad) {
        (0, _) => 0,
        (_, true) => SYMBOLS_PER_CHUNK,
        (n, false) => n + 1,
    };
    (bytes / BYTES_PER_CHUNK)
        .checked_mul(SYMBOLS_PER_CHUNK)?
        .checked_add(tail)
}

/// Iterator returned by [`encode_to_chars`] and [`encode_with`].
pub struct Encoder<I> {
    pad: bool,
    iter: Flatten<
        BytesToUnflatChars<BaseIterator<Fuse<I>>>,
        BytesToUnflatCharsItem,
    >,
}

impl<I: Iterator> Encoder<I> {
    fn new(iter: I, config: EncodeConfig) -> Self {
        Self {
            pad: config.pad,
            iter: Flatten::new(BytesToUnflatChars {
                iter: BaseIterator(iter.fuse()),
                pad: config.pad,
            }),
        }
    }
}

impl<I> Iterator for Encoder<I>
where
    I: Iterator<Item = u8>,
{
    type Item = char;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }

    fn fold<B, F>(self, init: B, f: F) -> B
    where
        F: FnMut(B, Self::Item) -> B,
    {
        self.iter.fold(init, f)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.base_iterator().size_hint();
        (
            encoded_len(lower, self.pad).unwrap_or(usize::MAX),
            upper
                .and_then(|n| encoded_len(n, self.pad))
                .and_then(|n| {
                    // Up to 3 chars of the current group may not have been
                    // yielded yet.
                    n.checked_add(SYMBOLS_PER_CHUNK - 1)
                }),
        )
    }
}

impl<I: Iterator<Item = u8>> FusedIterator for Encoder<I> {}

/// Encodes bytes as a sequence of Base64 chars.
pub fn encode_to_chars<I>(bytes: I) -> Encoder<I::IntoIter>
where
    I: IntoIterator<Item = u8>,
{
    encode_with(bytes, EncodeConfig::new())
}

/// Like [`encode_to_chars`], but takes a configuration object.
pub fn encode_with<I>(bytes: I, config: EncodeConfig) -> Encoder<I::IntoIter>
where
    I: IntoIterator<Item = u8>,
{
    Encoder::new(bytes.into_iter(), config)
}

/// Encodes bytes as a padded Base64 [`String`].
pub fn encode(bytes: &[u8]) -> String {
    encode_to_chars(bytes.iter().copied()).collect()
}

/// Decodes Base64 text. Padding is optional.
pub fn decode(text: &str) -> DecodeResult<Vec<u8>> {
    decode_with(text, DecodeConfig::new())
}

/// Decodes Base64 text with the given config.
///
/// This function is like [`decode`], but takes a configuration object.
pub fn decode_with(text: &str, config: DecodeConfig) -> DecodeResult<Vec<u8>> {
    let body = text.trim_end_matches(PAD);
    let padding = text.len() - body.len();
    if padding >= SYMBOLS_PER_CHUNK - 1 {
        return Err(Error::BadChar(PAD));
    }

    let mut out = Vec::with_capacity(body.len() / 4 * 3 + 2);
    let mut sum = 0_u32;
    let mut len = 0;
    let mut total = 0_usize;
    for c in body.chars() {
        let n = BASE64.to_digit(c).map_err(|_| Error::BadChar(c))?;
        sum = sum << 6 | u32::from(n);
        len += 1;
        total += 1;
        if len == SYMBOLS_PER_CHUNK {
            out.extend_from_slice(&sum.to_be_bytes()[1..]);
            sum = 0;
            len = 0;
        }
    }

    if (padding > 0 || config.require_padding)
        && (total + padding) % SYMBOLS_PER_CHUNK != 0
    {
        return Err(Error::BadLength);
    }

    match len {
        0 => {}
        1 => return Err(Error::BadLength),
        n => {
            // Bits past the last whole byte are ignored.
            sum <<= 6 * (SYMBOLS_PER_CHUNK - n);
            out.extend_from_slice(&sum.to_be_bytes()[1..n]);
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hello_world() {
        assert_eq!(encode(b"Hello World!"), "SGVsbG8gV29ybGQh");
        assert_eq!(decode("SGVsbG8gV29ybGQh").unwrap(), b"Hello World!");
    }

    #[test]
    fn utf8_sample() {
        let text = "Foo © bar 𝌆 baz ☃ qux 😍 你好";
        let b64 = "Rm9vIMKpIGJhciDwnYyGIGJheiDimIMgcXV4IPCfmI0g5L2g5aW9";
        assert_eq!(encode(text.as_bytes()), b64);
        assert_eq!(decode(b64).unwrap(), text.as_bytes());
    }

    #[test]
    fn padding() {
        assert_eq!(encode(b"A"), "QQ==");
        assert_eq!(encode(b"AB"), "QUI=");
        assert_eq!(encode(b""), "");
        assert_eq!(decode("QQ==").unwrap(), b"A");
        assert_eq!(decode("QQ").unwrap(), b"A");
        assert_eq!(decode("QUI").unwrap(), b"AB");
    }

    #[test]
    fn unpadded_encoding() {
        let config = EncodeConfig {
            pad: false,
        };
        let s: String = encode_with(*b"AB", config).collect();
        assert_eq!(s, "QUI");
        let s: String = encode_with(*b"ABC", config).collect();
        assert_eq!(s, "QUJD");
    }

    #[test]
    fn required_padding() {
        let config = DecodeConfig {
            require_padding: true,
        };
        assert_eq!(decode_with("QQ", config), Err(Error::BadLength));
        assert_eq!(decode_with("QQ==", config).unwrap(), b"A");
    }

    #[test]
    fn malformed() {
        assert_eq!(decode("Q"), Err(Error::BadLength));
        assert_eq!(decode("QQ="), Err(Error::BadLength));
        assert_eq!(decode("Q==="), Err(Error::BadChar('=')));
        assert_eq!(decode("Q=Q="), Err(Error::BadChar('=')));
        assert_eq!(decode("QQ-="), Err(Error::BadChar('-')));
    }

    #[test]
    fn size_hint() {
        let iter = encode_to_chars(*b"Hello");
        let (lower, upper) = iter.size_hint();
        assert!(lower <= 8);
        assert!(upper.map_or(false, |n| n >= 8));
        assert_eq!(iter.count(), 8);
    }
}
