//! Protocol constants for contract addresses.

/// Size of a contract address in bytes.
pub const ADDRESS_SIZE: usize = 20;

/// Version byte prefixed to an address before Base58Check encoding.
pub const ADDRESS_VERSION: u8 = 0x17;

/// Length of the Base58Check checksum.
pub const ADDRESS_CHECKSUM_SIZE: usize = 4;

/// Decoded length of a Base58Check address (version + hash + checksum).
pub const ADDRESS_BASE58_DECODED_SIZE: usize = 1 + ADDRESS_SIZE + ADDRESS_CHECKSUM_SIZE;
