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

//! Transcoding between Unicode code points and UTF-8 bytes.

use super::iter::{BaseIterator, Flatten, InspectBaseIterator};

use core::array;
use core::fmt::{self, Debug, Display, Formatter};
use core::iter::{FusedIterator, Peekable, Take};

use alloc::{string::String, vec::Vec};

/// Error information for an invalid UTF-8 sequence.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct InvalidUtf8 {
    bytes: [u8; 4],
    len: u8,
}

impl InvalidUtf8 {
    /// The bytes that were invalid UTF-8.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes[..usize::from(self.len)]
    }
}

impl Debug for InvalidUtf8 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("InvalidUtf8").field(&self.bytes()).finish()
    }
}

impl Display for InvalidUtf8 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "invalid UTF-8: {:?}", self.bytes())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidUtf8 {}

/// An error encountered while transcoding.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Utf8Error {
    /// The value is a surrogate or is above U+10FFFF.
    InvalidCodePoint(u32),
    /// The provided bytes were not valid UTF-8.
    InvalidUtf8(InvalidUtf8),
}

impl Display for Utf8Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCodePoint(n) => {
                write!(f, "invalid code point: {:#x}", n)
            }
            Self::InvalidUtf8(e) => write!(f, "{}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Utf8Error {}

impl From<InvalidUtf8> for Utf8Error {
    fn from(e: InvalidUtf8) -> Self {
        Self::InvalidUtf8(e)
    }
}

struct CharsToUnflatUtf8<I>(I);

impl<I: InspectBaseIterator> InspectBaseIterator for CharsToUnflatUtf8<I> {
    type Iter = I::Iter;

    fn base_iterator(&self) -> &Self::Iter {
        self.0.base_iterator()
    }
}

type CharsToUnflatUtf8Item = Take<array::IntoIter<u8, 4>>;

impl<I> Iterator for CharsToUnflatUtf8<I>
where
    I: Iterator<Item = char>,
{
    type Item = CharsToUnflatUtf8Item;

    fn next(&mut self) -> Option<Self::Item> {
        let mut bytes = [0; 4];
        let len = self.0.next()?.encode_utf8(&mut bytes).len();
        Some(IntoIterator::into_iter(bytes).take(len))
    }
}

impl<I: FusedIterator<Item = char>> FusedIterator for CharsToUnflatUtf8<I> {}

/// Iterator returned by [`encode_chars`].
pub struct EncodeUtf8<I>(
    Flatten<CharsToUnflatUtf8<BaseIterator<I>>, CharsToUnflatUtf8Item>,
);

impl<I> Iterator for EncodeUtf8<I>
where
    I: Iterator<Item = char>,
{
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn fold<B, F>(self, init: B, f: F) -> B
    where
        F: FnMut(B, Self::Item) -> B,
    {
        self.0.fold(init, f)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.0.base_iterator().size_hint();
        (
            lower,
            upper
                .and_then(|n| n.checked_mul(4))
                // Up to 3 bytes of the current char may be left.
                .and_then(|n| n.checked_add(3)),
        )
    }
}

impl<I: FusedIterator<Item = char>> FusedIterator for EncodeUtf8<I> {}

/// Encodes a sequence of chars as UTF-8 bytes.
pub fn encode_chars<I>(chars: I) -> EncodeUtf8<I::IntoIter>
where
    I: IntoIterator<Item = char>,
{
    EncodeUtf8(Flatten::new(CharsToUnflatUtf8(BaseIterator(
        chars.into_iter(),
    ))))
}

/// Encodes a sequence of Unicode code points as UTF-8.
///
/// # Errors
///
/// [`Utf8Error::InvalidCodePoint`] for a surrogate or a value above
/// U+10FFFF. Nothing is returned for the valid code points before it.
pub fn encode_code_points<I>(code_points: I) -> Result<Vec<u8>, Utf8Error>
where
    I: IntoIterator<Item = u32>,
{
    let chars = code_points
        .into_iter()
        .map(|n| char::from_u32(n).ok_or(Utf8Error::InvalidCodePoint(n)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(encode_chars(chars).collect())
}

/// Iterator returned by [`decode`].
///
/// An incomplete sequence ends at the first byte that cannot continue it;
/// that byte starts the next item.
pub struct DecodeUtf8<I: Iterator>(Peekable<I>);

fn is_continuation(b: u8) -> bool {
    b & 0xc0 == 0x80
}

impl<I> Iterator for DecodeUtf8<I>
where
    I: Iterator<Item = u8>,
{
    type Item = Result<char, InvalidUtf8>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut bytes = [self.0.next()?, 0, 0, 0];
        let mut len = 1;
        loop {
            match core::str::from_utf8(&bytes[..len]) {
                Ok(s) => {
                    if let Some(c) = s.chars().next() {
                        break Some(Ok(c));
                    }
                }
                Err(e) => {
                    if e.error_len().is_none() && len < bytes.len() {
                        let next = self.0.next_if(|&b| is_continuation(b));
                        if let Some(b) = next {
                            bytes[len] = b;
                            len += 1;
                            continue;
                        }
                    }
                }
            }
            break Some(Err(InvalidUtf8 {
                bytes,
                len: len as u8,
            }));
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.0.size_hint();
        (lower / 4 + usize::from(lower % 4 != 0), upper)
    }
}

impl<I: FusedIterator<Item = u8>> FusedIterator for DecodeUtf8<I> {}

/// Decodes UTF-8 bytes into chars, one item per char or invalid sequence.
pub fn decode<I>(bytes: I) -> DecodeUtf8<I::IntoIter>
where
    I: IntoIterator<Item = u8>,
{
    DecodeUtf8(bytes.into_iter().peekable())
}

/// Decodes UTF-8 bytes into Unicode code points.
pub fn decode_code_points(bytes: &[u8]) -> Result<Vec<u32>, Utf8Error> {
    decode(bytes.iter().copied())
        .map(|c| c.map(u32::from).map_err(Utf8Error::from))
        .collect()
}

/// Decodes UTF-8 bytes into a [`String`].
pub fn decode_to_string(bytes: &[u8]) -> Result<String, Utf8Error> {
    decode(bytes.iter().copied())
        .map(|c| c.map_err(Utf8Error::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Foo © bar 𝌆 baz ☃ qux 😍 你好";
    const SAMPLE_UTF8: [u8; 39] = [
        0x46, 0x6F, 0x6F, 0x20, 0xC2, 0xA9, 0x20, 0x62, 0x61, 0x72, 0x20,
        0xF0, 0x9D, 0x8C, 0x86, 0x20, 0x62, 0x61, 0x7A, 0x20, 0xE2, 0x98,
        0x83, 0x20, 0x71, 0x75, 0x78, 0x20, 0xF0, 0x9F, 0x98, 0x8D, 0x20,
        0xE4, 0xBD, 0xA0, 0xE5, 0xA5, 0xBD,
    ];

    #[test]
    fn encode_sample() {
        let bytes: Vec<u8> = encode_chars(SAMPLE.chars()).collect();
        assert_eq!(bytes, SAMPLE_UTF8);
        let code_points = SAMPLE.chars().map(u32::from);
        assert_eq!(encode_code_points(code_points).unwrap(), SAMPLE_UTF8);
    }

    #[test]
    fn decode_sample() {
        assert_eq!(decode_to_string(&SAMPLE_UTF8).unwrap(), SAMPLE);
        let code_points: Vec<u32> = SAMPLE.chars().map(u32::from).collect();
        assert_eq!(decode_code_points(&SAMPLE_UTF8).unwrap(), code_points);
    }

    #[test]
    fn sequence_lengths() {
        assert_eq!(encode_code_points([0x7f]).unwrap(), [0x7f]);
        assert_eq!(encode_code_points([0x80]).unwrap(), [0xc2, 0x80]);
        assert_eq!(encode_code_points([0x7ff]).unwrap(), [0xdf, 0xbf]);
        assert_eq!(encode_code_points([0x800]).unwrap(), [0xe0, 0xa0, 0x80]);
        assert_eq!(
            encode_code_points([0x10ffff]).unwrap(),
            [0xf4, 0x8f, 0xbf, 0xbf],
        );
    }

    #[test]
    fn invalid_code_points() {
        assert_eq!(
            encode_code_points([0x41, 0xd800]),
            Err(Utf8Error::InvalidCodePoint(0xd800)),
        );
        assert_eq!(
            encode_code_points([0x110000]),
            Err(Utf8Error::InvalidCodePoint(0x110000)),
        );
    }

    #[test]
    fn invalid_utf8() {
        let err = |bytes: &[u8]| match decode_to_string(bytes) {
            Err(Utf8Error::InvalidUtf8(e)) => e.bytes().to_vec(),
            other => panic!("unexpected result: {:?}", other),
        };
        assert_eq!(err(&[0x41, 0xff]), [0xff]);
        assert_eq!(err(&[0xe2, 0x98]), [0xe2, 0x98]);
        assert_eq!(err(&[0xc2, 0x41]), [0xc2]);
        // Legacy 5-byte form.
        assert_eq!(err(&[0xf8, 0x88, 0x80, 0x80, 0x80]), [0xf8]);
    }

    #[test]
    fn truncated_sequence_keeps_next_char() {
        let items: Vec<_> = decode([0xe2, 0x98, 0x41, 0xc2, 0xa9]).collect();
        assert_eq!(items.len(), 3);
        match items[0] {
            Err(e) => assert_eq!(e.bytes(), [0xe2, 0x98]),
            Ok(c) => panic!("unexpected char: {:?}", c),
        }
        assert_eq!(items[1], Ok('A'));
        assert_eq!(items[2], Ok('©'));
    }
}
