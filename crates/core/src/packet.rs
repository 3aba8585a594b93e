//! Packet tree data model.
//!
//! A decoded transmission is a tree of packets. Each node carries a 3-bit
//! version, a 3-bit type ID, and a payload that is either a literal value
//! (type ID 4) or an ordered list of child packets (every other type ID).
//!
//! The payload is a closed sum type: a literal with children, or an
//! operator holding a value, is unrepresentable by construction.
//!
//! # Ownership
//!
//! Each child is exclusively owned by its parent; the outermost packet is
//! owned by the decode call's result. The tree is acyclic by construction
//! since every child is parsed from a disjoint, forward-only bit range.
//! Once built, the tree is immutable and only traversed (evaluation,
//! version summing).

/// Payload of a packet: a literal number or an ordered list of children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// Literal value (type ID 4), built from concatenated 5-bit groups
    Literal(u64),

    /// Operator children, in the order they were parsed
    Operator(Vec<Packet>),
}

/// One decoded packet of the transmission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packet {
    /// Version field, 0-7 (3 bits on the wire)
    pub version: u8,

    /// Type ID, 0-7 (3 bits on the wire); 4 means literal
    pub type_id: u8,

    /// Literal value or child packets
    pub payload: Payload,
}

impl Packet {
    /// Whether this packet is a literal.
    pub fn is_literal(&self) -> bool {
        matches!(self.payload, Payload::Literal(_))
    }

    /// Child packets of an operator, or an empty slice for a literal.
    pub fn children(&self) -> &[Packet] {
        match &self.payload {
            Payload::Literal(_) => &[],
            Payload::Operator(children) => children,
        }
    }

    /// Sum the version fields over this packet and every descendant.
    ///
    /// Pure pre-order fold; literals contribute only their own version.
    /// Independent of evaluation, so a tree that fails to evaluate still
    /// has a well-defined version sum.
    pub fn version_sum(&self) -> u64 {
        let own = u64::from(self.version);
        match &self.payload {
            Payload::Literal(_) => own,
            Payload::Operator(children) => {
                own + children.iter().map(Packet::version_sum).sum::<u64>()
            }
        }
    }
}
