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

use std::io::{stdin, stdout, Read, Write};
use std::path::{Path, PathBuf};
use std::process::exit;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use baseconv::{base16, base58, base64, percent};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Codec {
    /// Bytes to Base58
    Base58,
    /// Hex text to Base58
    Hex58,
    /// Bytes to hex, two digits per byte
    Base16,
    /// Bytes to padded Base64
    Base64,
    /// Text to percent-encoded text
    Url,
}

/// Encodes or decodes data from [FILE] and writes the result to standard
/// output. If [FILE] is missing or "-", the data is read from standard input.
#[derive(Parser)]
#[command(name = "baseconv", version)]
struct Cli {
    /// Decode data instead of encoding
    #[arg(short, long)]
    decode: bool,
    /// Codec to use
    #[arg(short, long, value_enum, default_value_t = Codec::Base58)]
    codec: Codec,
    file: Option<PathBuf>,
}

fn read_input(path: Option<&Path>) -> Result<Vec<u8>> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read(path)
            .with_context(|| {
                format!("could not open file '{}'", path.display())
            }),
        _ => {
            let mut buf = Vec::new();
            stdin().read_to_end(&mut buf).context("could not read input")?;
            Ok(buf)
        }
    }
}

fn utf8(input: &[u8]) -> Result<&str> {
    std::str::from_utf8(input).context("input is not valid UTF-8")
}

/// Encoded text is read with surrounding whitespace removed.
fn encoded_text(input: &[u8]) -> Result<&str> {
    utf8(input).map(str::trim)
}

fn transcode(codec: Codec, decode: bool, input: &[u8]) -> Result<Vec<u8>> {
    Ok(match (codec, decode) {
        (Codec::Base58, false) => base58::encode(input).into_bytes(),
        (Codec::Base58, true) => base58::decode(encoded_text(input)?)
            .context("input is not valid Base58")?,
        (Codec::Hex58, false) => base58::from_hex(encoded_text(input)?)
            .context("input is not valid hex")?
            .into_bytes(),
        (Codec::Hex58, true) => base58::to_hex(encoded_text(input)?)
            .context("input is not valid Base58")?
            .into_bytes(),
        (Codec::Base16, false) => base16::encode(input).into_bytes(),
        (Codec::Base16, true) => base16::decode(encoded_text(input)?)
            .context("input is not valid hex")?,
        (Codec::Base64, false) => base64::encode(input).into_bytes(),
        (Codec::Base64, true) => base64::decode(encoded_text(input)?)
            .context("input is not valid Base64")?,
        (Codec::Url, false) => percent::encode(utf8(input)?).into_bytes(),
        (Codec::Url, true) => percent::decode(encoded_text(input)?)
            .context("input is not valid percent-encoded text")?
            .into_bytes(),
    })
}

fn write_output(output: &[u8]) -> Result<()> {
    let mut writer = stdout().lock();
    writer
        .write_all(output)
        .and_then(|_| writer.flush())
        .context("could not write to standard output")
}

fn run(cli: &Cli) -> Result<()> {
    let input = read_input(cli.file.as_deref())?;
    let output = transcode(cli.codec, cli.decode, &input)?;
    write_output(&output)
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("error: {:#}", e);
        exit(1);
    }
}
