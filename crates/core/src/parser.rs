//! Recursive-descent parser for the packet grammar.
//!
//! Consumes bits from a [`BitSequence`] and produces a [`Packet`] tree plus
//! the number of bits consumed. Offsets are threaded explicitly: every parse
//! step returns the new offset alongside its result, so there is no shared
//! mutable cursor and each function is independently testable.
//!
//! # Wire Grammar
//!
//! ```text
//! packet        := version(3) type_id(3) body
//! body          := literal_body            ; when type_id == 4
//!               |  operator_body           ; otherwise
//! literal_body  := group+                  ; group = cont(1) nibble(4)
//!                                          ; last group has cont = 0
//! operator_body := len0_framing | len1_framing
//! len0_framing  := "0" total_len(15) subpacket+
//!                                          ; subpackets consume exactly
//!                                          ; total_len bits
//! len1_framing  := "1" count(11) subpacket{count}
//! ```
//!
//! # Padding
//!
//! The outermost packet rarely ends on a hex-digit boundary; trailing bits
//! after it are padding. The parser simply does not consume them and never
//! interprets them as a sibling packet.
//!
//! # Termination
//!
//! Every recursive call consumes at least the 6 header bits, so parsing
//! terminates within `len(bits) / 6` steps.

use crate::bitio::BitSequence;
use crate::error::{BitIoError, Error, ParseError, Result};
use crate::packet::{Packet, Payload};

/// Type ID marking a literal packet.
pub const LITERAL_TYPE_ID: u8 = 4;

/// Decode a full transmission from its hexadecimal form.
///
/// Builds the bit sequence, parses the outermost packet from offset 0, and
/// ignores trailing padding bits.
///
/// # Errors
/// - `BitIoError::InvalidHexDigit` for non-hex input
/// - `ParseError::TruncatedInput` if a field read runs past the end
/// - `ParseError::Framing` on a length-type-0 size mismatch
/// - `ParseError::LiteralOverflow` for literals wider than 64 bits
pub fn decode(hex: &str) -> Result<Packet> {
    let bits = BitSequence::from_hex(hex)?;
    let (packet, _offset) = parse_packet(&bits, 0)?;
    Ok(packet)
}

/// Parse one packet starting at `offset`.
///
/// Returns the packet together with the offset of the first bit after it.
pub fn parse_packet(bits: &BitSequence, offset: usize) -> Result<(Packet, usize)> {
    let (version, offset) = read_field(bits, offset, 3)?;
    let (type_id, offset) = read_field(bits, offset, 3)?;
    let version = version as u8;
    let type_id = type_id as u8;

    if type_id == LITERAL_TYPE_ID {
        let (value, offset) = parse_literal(bits, offset)?;
        let packet = Packet {
            version,
            type_id,
            payload: Payload::Literal(value),
        };
        Ok((packet, offset))
    } else {
        let (children, offset) = parse_children(bits, offset)?;
        let packet = Packet {
            version,
            type_id,
            payload: Payload::Operator(children),
        };
        Ok((packet, offset))
    }
}

/// Parse a literal body: 5-bit groups, each a continuation flag plus a
/// nibble, concatenated MSB-first until a group with flag 0.
///
/// Values are held in u64; a 17th significant nibble is a
/// `ParseError::LiteralOverflow` rather than a silent wrap.
fn parse_literal(bits: &BitSequence, offset: usize) -> Result<(u64, usize)> {
    let literal_start = offset;
    let mut offset = offset;
    let mut value = 0u64;

    loop {
        let (group, next) = read_field(bits, offset, 5)?;
        offset = next;

        let more = group & 0b1_0000 != 0;
        let nibble = group & 0b0_1111;

        // Shifting would drop significant bits
        if value.leading_zeros() < 4 {
            return Err(ParseError::LiteralOverflow {
                offset: literal_start,
            }
            .into());
        }
        value = (value << 4) | nibble;

        if !more {
            return Ok((value, offset));
        }
    }
}

/// Parse an operator body: the 1-bit length type selects between total-bit
/// framing (0) and sub-packet-count framing (1).
fn parse_children(bits: &BitSequence, offset: usize) -> Result<(Vec<Packet>, usize)> {
    let (length_type, offset) = read_field(bits, offset, 1)?;

    if length_type == 0 {
        // The next 15 bits declare the combined size of all children
        let (total_len, offset) = read_field(bits, offset, 15)?;
        let declared = total_len as usize;
        let start = offset;
        let end = start + declared;

        let mut children = Vec::new();
        let mut offset = offset;
        while offset < end {
            let (child, next) = parse_packet(bits, offset)?;
            if next > end {
                return Err(ParseError::Framing {
                    declared,
                    consumed: next - start,
                }
                .into());
            }
            children.push(child);
            offset = next;
        }
        // Loop invariant: offset never passes end, so children consumed
        // exactly `declared` bits here
        Ok((children, offset))
    } else {
        // The next 11 bits declare how many children follow
        let (count, offset) = read_field(bits, offset, 11)?;

        let mut children = Vec::with_capacity(count as usize);
        let mut offset = offset;
        for _ in 0..count {
            let (child, next) = parse_packet(bits, offset)?;
            children.push(child);
            offset = next;
        }
        Ok((children, offset))
    }
}

/// Read a fixed-width field, surfacing bit-reader range errors as
/// `ParseError::TruncatedInput`.
fn read_field(bits: &BitSequence, offset: usize, count: usize) -> Result<(u64, usize)> {
    bits.read_bits(offset, count).map_err(|err| match err {
        Error::BitIo(BitIoError::OutOfRange {
            offset,
            requested,
            available,
        }) => ParseError::TruncatedInput {
            offset,
            requested,
            available,
        }
        .into(),
        other => other,
    })
}
