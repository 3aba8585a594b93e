//! Bit-level access to a decoded hexadecimal transmission.
//!
//! This module provides [`BitSequence`], an immutable bit string built once
//! from a hexadecimal input line. Bits are addressed MSB-first: bit 0 of the
//! sequence is the most significant bit of the first hex digit.
//!
//! # Offset Threading
//!
//! The sequence itself is stateless; there is no internal cursor. Every read
//! takes an explicit bit offset and returns the value together with the new
//! offset, so callers thread their own position through a parse:
//!
//! ```
//! use bits_decoder_core::bitio::BitSequence;
//!
//! let bits = BitSequence::from_hex("D2").unwrap();
//! let (version, offset) = bits.read_bits(0, 3).unwrap();
//! let (type_id, _offset) = bits.read_bits(offset, 3).unwrap();
//! assert_eq!((version, type_id), (0b110, 0b100));
//! ```

use crate::error::{BitIoError, Result};

/// An immutable, 0-indexed sequence of bits of known finite length.
///
/// Built once from a hexadecimal string; each hex digit expands to exactly
/// 4 bits, most significant first, digits processed left to right. Bits are
/// packed MSB-first into bytes. Odd-length hex strings are valid: the final
/// nibble occupies the high half of the last byte.
///
/// # Invariants
/// - `num_bits == 4 * hex_len` for the originating hex string
/// - bytes beyond `num_bits` hold only zero padding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitSequence {
    /// Packed bits, MSB-first within each byte
    bytes: Vec<u8>,
    /// Exact number of valid bits
    num_bits: usize,
}

impl BitSequence {
    /// Build a bit sequence from a hexadecimal string.
    ///
    /// Accepts upper- or lower-case digits. The caller is responsible for
    /// stripping surrounding whitespace; any non-hex character is rejected.
    ///
    /// # Errors
    /// `BitIoError::InvalidHexDigit` for the first non-hexadecimal character.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let mut bytes = Vec::with_capacity((hex.len() + 1) / 2);

        for (index, ch) in hex.chars().enumerate() {
            let nibble = ch
                .to_digit(16)
                .ok_or(BitIoError::InvalidHexDigit { ch, index })? as u8;

            if index % 2 == 0 {
                // High half of a fresh byte
                bytes.push(nibble << 4);
            } else if let Some(last) = bytes.last_mut() {
                // Low half of the byte pushed for the previous digit
                *last |= nibble;
            }
        }

        Ok(Self {
            bytes,
            num_bits: hex.len() * 4,
        })
    }

    /// Total number of bits in the sequence.
    #[inline]
    pub fn len(&self) -> usize {
        self.num_bits
    }

    /// Check whether the sequence contains no bits.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.num_bits == 0
    }

    /// Number of bits remaining after the given offset.
    #[inline]
    pub fn remaining(&self, offset: usize) -> usize {
        self.num_bits.saturating_sub(offset)
    }

    /// Read `count` bits starting at `offset`, MSB-first.
    ///
    /// Returns the bits interpreted as an unsigned integer together with the
    /// advanced offset (`offset + count`). The sequence is not mutated.
    ///
    /// # Errors
    /// - `BitIoError::InvalidBitCount` if `count` > 64
    /// - `BitIoError::OutOfRange` if `offset + count` exceeds the length
    pub fn read_bits(&self, offset: usize, count: usize) -> Result<(u64, usize)> {
        if count > 64 {
            return Err(BitIoError::InvalidBitCount(count).into());
        }

        let available = self.remaining(offset);
        if count > available {
            return Err(BitIoError::OutOfRange {
                offset,
                requested: count,
                available,
            }
            .into());
        }

        let mut value = 0u64;
        let mut pos = offset;
        let mut remaining = count;

        while remaining > 0 {
            let byte_idx = pos / 8;
            let bit_offset = pos % 8;

            // How many bits can we take from the current byte?
            let bits_in_byte = 8 - bit_offset;
            let bits_to_read = remaining.min(bits_in_byte);

            let byte = self.bytes[byte_idx];
            let mask = ((1u16 << bits_to_read) - 1) as u8;
            let bits = (byte >> (bits_in_byte - bits_to_read)) & mask;

            value = (value << bits_to_read) | u64::from(bits);

            pos += bits_to_read;
            remaining -= bits_to_read;
        }

        Ok((value, offset + count))
    }

    /// Read a single bit at `offset`.
    ///
    /// Returns the bit as a bool together with the advanced offset.
    pub fn read_bit(&self, offset: usize) -> Result<(bool, usize)> {
        let (value, next) = self.read_bits(offset, 1)?;
        Ok((value == 1, next))
    }
}
