//! Error types for the transmission decoder.
//!
//! All operations return structured errors rather than panicking.
//! Every error is detected at the lowest layer that can observe it and
//! propagated unchanged to the top-level decode call; nothing retries
//! or substitutes a default value.

use thiserror::Error;

/// Top-level error type for all operations in the decoder.
///
/// Each variant corresponds to a specific failure domain:
/// - Bit I/O: reading fixed-width fields from the bit sequence
/// - Parse: packet grammar violations (truncation, framing, overflow)
/// - Eval: evaluation-time arity or arithmetic failures
#[derive(Debug, Error)]
pub enum Error {
    /// Bit-level read failed (e.g., reading past the end of the sequence)
    #[error("bit I/O error: {0}")]
    BitIo(#[from] BitIoError),

    /// Packet grammar error (truncated header, bad framing, oversized literal)
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Evaluation error (wrong operand count, arithmetic overflow)
    #[error("evaluation error: {0}")]
    Eval(#[from] EvalError),
}

/// Bit-level I/O errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BitIoError {
    /// A read would run past the end of the bit sequence
    #[error("read out of range at bit {offset}: requested {requested}, available {available}")]
    OutOfRange {
        offset: usize,
        requested: usize,
        available: usize,
    },

    /// Invalid bit count (more than 64 bits requested in one read)
    #[error("invalid bit count: {0}")]
    InvalidBitCount(usize),

    /// Input contains a character that is not a hexadecimal digit
    #[error("invalid hex digit {ch:?} at position {index}")]
    InvalidHexDigit { ch: char, index: usize },
}

/// Packet grammar errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A header or framing field read would run past the end of the input
    #[error("truncated input at bit {offset}: requested {requested}, available {available}")]
    TruncatedInput {
        offset: usize,
        requested: usize,
        available: usize,
    },

    /// A length-type-0 operator's children overshoot the declared bit total
    #[error("framing mismatch: declared {declared} sub-packet bits, children consume {consumed}")]
    Framing { declared: usize, consumed: usize },

    /// A literal value does not fit in 64 bits
    #[error("literal value starting at bit {offset} exceeds 64 bits")]
    LiteralOverflow { offset: usize },
}

/// Evaluation errors.
///
/// The packet tree itself is still valid to inspect when these occur;
/// only evaluation cannot proceed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EvalError {
    /// An aggregate operator (sum/product/min/max) has no children
    #[error("operator type {type_id} has no operands")]
    NoOperands { type_id: u8 },

    /// A comparison operator (5/6/7) does not have exactly 2 children
    #[error("comparison operator type {type_id} requires exactly 2 operands, got {actual}")]
    WrongArity { type_id: u8, actual: usize },

    /// Sum or product overflowed u64
    #[error("operator type {type_id} overflowed 64-bit arithmetic")]
    Overflow { type_id: u8 },

    /// An operator packet carries the literal type ID (only possible for
    /// hand-constructed trees; the parser never builds one)
    #[error("type {type_id} is not an operator")]
    NotAnOperator { type_id: u8 },
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
