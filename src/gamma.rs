//! Elias gamma coding of positive integers.
//!
//! A gamma code writes `m >= 1` as its exponent `n = floor(log2(m))` in unary,
//! followed by the `n` low-order bits of `m`:
//!
//! ```text
//! m    n   unary(n+1)  truncated  code
//! 1    0   1                      1
//! 2    1   01          0          010
//! 3    1   01          1          011
//! 4    2   001         00         00100
//! 9    3   0001        001        0001001
//! ```
//!
//! The code is `2n + 1` bits long. Bits are stored one per `u8` (0 or 1),
//! most significant first.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// `floor(log2(m))`, from the position of the highest set bit.
///
/// # Errors
/// Returns `Error::InvalidInput` if `m` is 0.
pub fn exponent(m: u64) -> Result<u32> {
    if m == 0 {
        return Err(Error::InvalidInput("gamma coding is undefined for zero"));
    }
    Ok(m.ilog2())
}

/// `k - 1` zero bits followed by a single one bit.
///
/// # Errors
/// Returns `Error::InvalidInput` if `k` is 0 or too large for a `k`-bit
/// vector to be allocated.
pub fn unary(k: u64) -> Result<Vec<u8>> {
    if k == 0 {
        return Err(Error::InvalidInput("unary code needs k >= 1"));
    }
    let len = usize::try_from(k).map_err(|_| Error::InvalidInput("unary code too long"))?;
    let mut bits = Vec::new();
    bits.try_reserve_exact(len)
        .map_err(|_| Error::InvalidInput("unary code too long"))?;
    bits.resize(len - 1, 0);
    bits.push(1);
    Ok(bits)
}

/// Most-significant-bit-first binary of `m`, without leading zeros.
///
/// # Errors
/// Returns `Error::InvalidInput` if `m` is 0.
pub fn binary(m: u64) -> Result<Vec<u8>> {
    let n = exponent(m)?;
    Ok((0..=n).rev().map(|i| ((m >> i) & 1) as u8).collect())
}

/// `binary(m)` with its leading one removed; empty for `m == 1`.
///
/// # Errors
/// Returns `Error::InvalidInput` if `m` is 0.
pub fn truncated_binary(m: u64) -> Result<Vec<u8>> {
    let mut bits = binary(m)?;
    bits.remove(0);
    Ok(bits)
}

/// Gamma code of `m`: `unary(exponent(m) + 1) ++ truncated_binary(m)`.
///
/// # Errors
/// Returns `Error::InvalidInput` if `m` is 0.
pub fn gamma_encode(m: u64) -> Result<GammaCode> {
    let n = exponent(m)?;
    // The terminating one of the unary prefix is the leading one of binary(m).
    let mut bits = Vec::with_capacity(2 * n as usize + 1);
    bits.resize(n as usize, 0);
    bits.extend((0..=n).rev().map(|i| ((m >> i) & 1) as u8));
    Ok(GammaCode { bits })
}

/// Decode a single codeword.
///
/// Everything from the first one bit to the end is read as a binary number.
/// If the codeword stops before its remainder is complete (fewer bits after
/// the one than there were zeros before it), the missing low-order bits are
/// taken as zeros.
///
/// # Errors
/// - `Error::MissingOneBit` if the codeword contains no one bit.
/// - `Error::Overflow` if the value needs more than 64 bits.
pub fn gamma_decode(code: &GammaCode) -> Result<u64> {
    decode_bits(&code.bits)
}

fn decode_bits(bits: &[u8]) -> Result<u64> {
    let p = bits
        .iter()
        .position(|&b| b == 1)
        .ok_or(Error::MissingOneBit)?;
    let tail = &bits[p..];
    let width = tail.len().max(p + 1);
    if width > 64 {
        return Err(Error::Overflow { bits: width });
    }

    let value = tail
        .iter()
        .fold(0u64, |acc, &b| (acc << 1) | u64::from(b));
    Ok(value << (width - tail.len()))
}

/// A gamma codeword: a sequence of bits, each 0 or 1.
///
/// Codes produced by [`gamma_encode`] are always well formed. Codes parsed
/// from text or built with [`GammaCode::from_bits`] only guarantee that every
/// element is a bit; [`gamma_decode`] reports what cannot be decoded.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GammaCode {
    bits: Vec<u8>,
}

impl GammaCode {
    /// Wrap a bit vector.
    ///
    /// # Errors
    /// Returns `Error::InvalidInput` if any element is not 0 or 1.
    pub fn from_bits(bits: Vec<u8>) -> Result<Self> {
        if bits.iter().any(|&b| b > 1) {
            return Err(Error::InvalidInput("codeword bits must be 0 or 1"));
        }
        Ok(Self { bits })
    }

    /// Number of bits in the codeword.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Whether the codeword has no bits at all.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// The bits, most significant first.
    pub fn as_bits(&self) -> &[u8] {
        &self.bits
    }

    /// Consume the codeword, returning its bits.
    pub fn into_bits(self) -> Vec<u8> {
        self.bits
    }
}

impl fmt::Display for GammaCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.bits {
            f.write_str(if b == 0 { "0" } else { "1" })?;
        }
        Ok(())
    }
}

impl FromStr for GammaCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let bits = s
            .chars()
            .map(|c| match c {
                '0' => Ok(0),
                '1' => Ok(1),
                _ => Err(Error::InvalidInput("codeword text must be 0s and 1s")),
            })
            .collect::<Result<Vec<u8>>>()?;
        Ok(Self { bits })
    }
}

impl PartialEq<str> for GammaCode {
    fn eq(&self, other: &str) -> bool {
        self.bits.len() == other.len()
            && self
                .bits
                .iter()
                .zip(other.bytes())
                .all(|(&b, c)| c == b'0' + b)
    }
}

impl PartialEq<&str> for GammaCode {
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}
