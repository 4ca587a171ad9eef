//! Random number generation module
//!
//! This module provides cryptographically secure randomness facilities
//! used to sample fresh masks for the masking gadgets.
//!
//! It is built around a ChaCha20-based deterministic random bit generator
//! (DRBG) and exposes a high-level CSPRNG interface, together with a small
//! `RandomSource` trait so that gadgets can be driven by either the real
//! CSPRNG or a deterministic test double.

/// Design goals:
/// - Cryptographic security
/// - Deterministic expansion from a secure seed
/// - Forward secrecy through periodic rekeying
/// - No heap allocation
/// - Minimal and explicit API surface
pub(crate) mod chacha20;
mod csprng;
mod source;

/// Cryptographically secure pseudorandom number generator.
///
/// This type is the primary entry point for generating secure randomness
/// for mask sampling.
pub use csprng::Csprng;

/// Injectable randomness source consumed by every gadget that needs
/// fresh masks.
pub use source::RandomSource;
