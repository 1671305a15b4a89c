//! simple implementation of hexadecimal encoding and decoding
//!
//! Only used to display keys and signatures and to build them back from
//! their textual form; the byte layouts are never affected.
use std::{error, fmt, result};

const ALPHABET: &[u8] = b"0123456789abcdef";

/// hexadecimal decoding potential errors
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub enum Error {
    /// a given character is not part of the supported hexadecimal
    /// alphabet. Contains the index of the faulty byte
    UnknownSymbol(usize),
    /// the input does not hold an even number of symbols
    OddLength(usize),
}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::UnknownSymbol(idx) => write!(f, "Unknown symbol at byte index {}", idx),
            Error::OddLength(len) => write!(f, "Odd number of hexadecimal symbols ({})", len),
        }
    }
}
impl error::Error for Error {}

pub type Result<T> = result::Result<T, Error>;

/// encode bytes into an hexadecimal string
pub fn encode(input: &[u8]) -> String {
    let mut s = String::with_capacity(input.len() * 2);
    for &byte in input.iter() {
        s.push(ALPHABET[(byte >> 4) as usize] as char);
        s.push(ALPHABET[(byte & 0xf) as usize] as char);
    }
    s
}

/// decode the given hexadecimal string, whitespaces are skipped
pub fn decode(input: &str) -> Result<Vec<u8>> {
    let mut b = Vec::with_capacity(input.len() / 2);
    let mut modulus = 0;
    let mut buf = 0u8;

    for (idx, byte) in input.bytes().enumerate() {
        let nibble = match byte {
            b'A'..=b'F' => byte - b'A' + 10,
            b'a'..=b'f' => byte - b'a' + 10,
            b'0'..=b'9' => byte - b'0',
            b' ' | b'\r' | b'\n' | b'\t' => continue,
            _ => return Err(Error::UnknownSymbol(idx)),
        };
        buf = (buf << 4) | nibble;

        modulus += 1;
        if modulus == 2 {
            modulus = 0;
            b.push(buf);
            buf = 0;
        }
    }

    if modulus != 0 {
        return Err(Error::OddLength(b.len() * 2 + 1));
    }
    Ok(b)
}
