//! bits-decoder-core: hierarchical bit-packet decoder and evaluator
//!
//! This library decodes a hexadecimal "transmission" into a tree of packets
//! and computes two independent results over it:
//! - the version sum, totalling every packet's version field
//! - the evaluated value of the outermost packet's expression
//!
//! # Architecture
//!
//! The pipeline is a straight line of pure steps:
//! - `bitio`: hex string -> immutable bit sequence with offset-threaded reads
//! - `parser`: recursive descent over the bits -> packet tree
//! - `packet`: the tree itself, plus the version-sum fold
//! - `eval`: post-order evaluation of the tree to a single value
//!
//! # Design Principles
//!
//! - **No panics**: all errors are structured and propagate unchanged
//! - **No shared state**: offsets are threaded explicitly, never stored in
//!   a mutable cursor; every decode call owns its own input
//! - **Immutable after construction**: the bit sequence and the packet tree
//!   are built once and only read afterwards
//!
//! # Example
//!
//! ```
//! use bits_decoder_core::{decode, evaluate};
//!
//! let packet = decode("C200B40A82").unwrap();
//! assert_eq!(packet.version_sum(), 14);
//! assert_eq!(evaluate(&packet).unwrap(), 3);
//! ```

pub mod bitio;
pub mod error;
pub mod eval;
pub mod packet;
pub mod parser;

// Re-export the common entry points
pub use error::{Error, Result};
pub use eval::evaluate;
pub use packet::{Packet, Payload};
pub use parser::decode;
