//! # Invoke Primitives
//!
//! Fundamental types shared by the contract invocation codecs.
//!
//! - `Address`: 160-bit contract address (script hash)
//!
//! ## Design Principles
//!
//! - **Zero dependencies on other invoke-* crates**: wire codecs for these
//!   types live in `invoke-io`
//! - **Fixed width**: an `Address` is always `ADDRESS_SIZE` bytes on the wire
//!
//! ## Example
//!
//! ```rust
//! use invoke_primitives::Address;
//!
//! let contract = Address::zero();
//! assert!(contract.is_zero());
//!
//! let parsed = Address::parse("0x0000000000000000000000000000000000000001").unwrap();
//! assert_eq!(parsed.to_array()[0], 1);
//! ```

pub mod address;
pub mod constants;
pub mod error;


pub use address::Address;
pub use constants::*;
pub use error::{PrimitiveError, PrimitiveResult};
