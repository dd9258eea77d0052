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

//! Percent-encoding (URL encoding).
//!
//! Non-ASCII characters and the characters in [`RESERVED`] are written as
//! their UTF-8 bytes, each as `%XX`.

use super::utf8::{self, InvalidUtf8};

use core::fmt::{self, Formatter};

use alloc::{string::String, vec::Vec};

/// ASCII characters that are always escaped.
pub const RESERVED: &str = "!*();:@&=+$,/?#[]% ";

const UPPER_HEX: &[u8; 16] = b"0123456789ABCDEF";

/// An error encountered while decoding percent-encoded text.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeError {
    /// The `%` at this byte offset is not followed by two hex digits.
    BadEscape(usize),
    /// A run of escapes did not decode to valid UTF-8.
    InvalidUtf8(InvalidUtf8),
}

/// Alias of <code>[Result]\<T, [DecodeError]></code>.
pub type DecodeResult<T> = Result<T, DecodeError>;

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadEscape(i) => write!(f, "bad escape at offset {}", i),
            Self::InvalidUtf8(e) => write!(f, "{}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DecodeError {}

fn needs_escape(c: char) -> bool {
    !c.is_ascii() || RESERVED.contains(c)
}

pub fn encode(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        if !needs_escape(c) {
            out.push(c);
            continue;
        }
        for b in utf8::encode_chars([c]) {
            out.push('%');
            out.push(char::from(UPPER_HEX[usize::from(b >> 4)]));
            out.push(char::from(UPPER_HEX[usize::from(b & 0x0f)]));
        }
    }
    out
}

/// Decodes percent-encoded text.
///
/// Consecutive escapes are decoded together, so a multi-byte UTF-8 sequence
/// may be split across several of them. Hex digits may be in either case.
pub fn decode(encoded: &str) -> DecodeResult<String> {
    let mut out = String::with_capacity(encoded.len());
    let mut pending = Vec::new();
    let mut chars = encoded.char_indices().peekable();
    while let Some((mut start, c)) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        loop {
            let mut hex_digit =
                || chars.next().and_then(|(_, c)| c.to_digit(16));
            match (hex_digit(), hex_digit()) {
                (Some(hi), Some(lo)) => pending.push((hi << 4 | lo) as u8),
                _ => return Err(DecodeError::BadEscape(start)),
            }
            match chars.peek() {
                Some(&(i, '%')) => {
                    start = i;
                    chars.next();
                }
                _ => break,
            }
        }
        for c in utf8::decode(pending.drain(..)) {
            out.push(c.map_err(DecodeError::InvalidUtf8)?);
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_with_unicode() {
        let raw = "http://example.com/path/to/file.html?param=value&param2=\
                   value2&param3=Foo © bar 𝌆 baz ☃ qux 😍 你好";
        let encoded = "http%3A%2F%2Fexample.com%2Fpath%2Fto%2Ffile.html%3F\
                       param%3Dvalue%26param2%3Dvalue2%26param3%3DFoo%20%C2\
                       %A9%20bar%20%F0%9D%8C%86%20baz%20%E2%98%83%20qux%20\
                       %F0%9F%98%8D%20%E4%BD%A0%E5%A5%BD";
        assert_eq!(encode(raw), encoded);
        assert_eq!(decode(encoded).unwrap(), raw);
    }

    #[test]
    fn reserved_characters() {
        let raw = "http://www.baeldung.com?key1=value 1&key2=value@!$2&\
                   key3=value%3";
        let encoded = "http%3A%2F%2Fwww.baeldung.com%3Fkey1%3Dvalue%201%26\
                       key2%3Dvalue%40%21%242%26key3%3Dvalue%253";
        assert_eq!(encode(raw), encoded);
        assert_eq!(decode(encoded).unwrap(), raw);
    }

    #[test]
    fn lowercase_escapes() {
        assert_eq!(decode("%c2%a9").unwrap(), "©");
        assert_eq!(decode("a%2fb").unwrap(), "a/b");
    }

    #[test]
    fn bad_escapes() {
        assert_eq!(decode("%"), Err(DecodeError::BadEscape(0)));
        assert_eq!(decode("ab%4"), Err(DecodeError::BadEscape(2)));
        assert_eq!(decode("%41%zz"), Err(DecodeError::BadEscape(3)));
    }

    #[test]
    fn bad_utf8() {
        assert!(matches!(decode("%C2"), Err(DecodeError::InvalidUtf8(_))));
        assert!(matches!(decode("%FF%41"), Err(DecodeError::InvalidUtf8(_))));
    }
}
