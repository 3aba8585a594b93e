//! Expression evaluation over a packet tree.
//!
//! A decoded transmission is an expression: literal packets are numbers and
//! operator packets combine their children's values according to the type ID.
//! Evaluation is a pure post-order fold; the tree is never mutated and can be
//! evaluated any number of times with the same result.
//!
//! # Operations
//!
//! | type ID | operation    | operands  |
//! |---------|--------------|-----------|
//! | 0       | sum          | 1 or more |
//! | 1       | product      | 1 or more |
//! | 2       | minimum      | 1 or more |
//! | 3       | maximum      | 1 or more |
//! | 5       | greater than | exactly 2 |
//! | 6       | less than    | exactly 2 |
//! | 7       | equal to     | exactly 2 |
//!
//! Comparisons yield 1 when true and 0 when false. The grammar does not
//! enforce operand counts, so arity is checked here: a comparison without
//! exactly two children is a structured error, not a panic.

use crate::error::{EvalError, Result};
use crate::packet::{Packet, Payload};

/// Evaluate the expression rooted at `packet`.
///
/// Children are evaluated left to right in parse order, then combined by
/// the operator's type ID.
///
/// # Errors
/// - `EvalError::NoOperands` for an aggregate operator with no children
/// - `EvalError::WrongArity` for a comparison without exactly 2 children
/// - `EvalError::Overflow` if a sum or product exceeds u64
pub fn evaluate(packet: &Packet) -> Result<u64> {
    match &packet.payload {
        Payload::Literal(value) => Ok(*value),
        Payload::Operator(children) => {
            let values = children
                .iter()
                .map(evaluate)
                .collect::<Result<Vec<u64>>>()?;
            apply(packet.type_id, &values)
        }
    }
}

/// Combine operand values according to the operator type ID.
fn apply(type_id: u8, values: &[u64]) -> Result<u64> {
    match type_id {
        0 => fold_checked(type_id, values, u64::checked_add),
        1 => fold_checked(type_id, values, u64::checked_mul),
        2 => values
            .iter()
            .copied()
            .min()
            .ok_or_else(|| EvalError::NoOperands { type_id }.into()),
        3 => values
            .iter()
            .copied()
            .max()
            .ok_or_else(|| EvalError::NoOperands { type_id }.into()),
        5 => {
            let (a, b) = operand_pair(type_id, values)?;
            Ok(u64::from(a > b))
        }
        6 => {
            let (a, b) = operand_pair(type_id, values)?;
            Ok(u64::from(a < b))
        }
        7 => {
            let (a, b) = operand_pair(type_id, values)?;
            Ok(u64::from(a == b))
        }
        // The parser never builds an operator with the literal type ID, but
        // trees can also be constructed by hand
        _ => Err(EvalError::NotAnOperator { type_id }.into()),
    }
}

/// Fold operands with a checked binary operation, starting from the first.
///
/// Seeding from the first operand (rather than an identity element) keeps
/// the single-operand case exactly the operand's value.
fn fold_checked(
    type_id: u8,
    values: &[u64],
    op: fn(u64, u64) -> Option<u64>,
) -> Result<u64> {
    let (first, rest) = values
        .split_first()
        .ok_or(EvalError::NoOperands { type_id })?;
    rest.iter().try_fold(*first, |acc, &value| {
        op(acc, value).ok_or_else(|| EvalError::Overflow { type_id }.into())
    })
}

/// Extract exactly two operands for a comparison operator.
fn operand_pair(type_id: u8, values: &[u64]) -> Result<(u64, u64)> {
    match values {
        [a, b] => Ok((*a, *b)),
        _ => Err(EvalError::WrongArity {
            type_id,
            actual: values.len(),
        }
        .into()),
    }
}
