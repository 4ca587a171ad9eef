//! Error types for the masking library.
//!
//! All fallible operations in this crate — `Uint` byte conversion and
//! `MaskedUint` construction and gadgets — return this single error
//! enum. There is no I/O in this crate and therefore no recoverable
//! failure mode beyond argument validation; gadget interiors never fail
//! once their inputs have passed validation.

/// Errors raised by `Uint`/`MaskedUint` construction and gadgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskingError {
    /// A byte sequence passed to `Uint::from_bytes` did not have the
    /// length required by the target width (exactly w/8 bytes).
    InvalidByteLength,

    /// An operand's domain did not match the operation's required
    /// domain and `auto_domain` was `false`.
    DomainMismatch,

    /// Two operands of a binary gadget had different masking orders.
    OrderMismatch,

    /// A masking order below 1 was requested.
    InvalidOrder,

    /// A shift/rotate distance or other gadget argument was out of range.
    InvalidArgument,
}
