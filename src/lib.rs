//! Higher-order masked unsigned-integer primitives for side-channel-
//! resistant computation.
//!
//! A secret w-bit unsigned integer is represented as `order + 1` shares
//! that recombine under XOR (the Boolean domain) or modular addition
//! (the Arithmetic domain). Every operation on a masked value is a
//! *gadget*: it consumes and produces share tuples without ever
//! reconstructing the secret, and without an intermediate wire whose
//! distribution depends on the secret at orders up to the masking
//! order.
//!
//! The focus is on **clarity, predictability, and auditability**, rather
//! than on providing a large or high-level cryptographic API. All
//! components are explicit in their semantics and suitable for
//! security-critical code.
//!
//! # Module overview
//!
//! - [`primitives`]
//!   Fixed-width unsigned integers (`Uint8`/`Uint32`/`Uint64`) wrapping
//!   modulo 2^w — the unmasked backing type every masking gadget
//!   operates over.
//!
//! - [`rng`]
//!   Cryptographically secure pseudorandom number generation
//!   (ChaCha20-DRBG, OS-seeded) plus the [`rng::RandomSource`] trait
//!   gadgets take as an injectable randomness dependency.
//!
//! - [`masking`]
//!   The masked-integer representation and every gadget: DOM AND/MUL,
//!   linear gadgets, the masked Kogge-Stone adder, Boolean⇄Arithmetic
//!   converters, comparators, select, and auto-domain dispatch.
//!
//! - [`error`]
//!   The crate's unified error type, [`error::MaskingError`].
//!
//! # Design goals
//!
//! - No heap allocations in `primitives` or `rng`
//! - Minimal and explicit APIs
//! - Stable, well-defined semantics
//! - Clear separation between gadget logic and supporting utilities
//!
//! This crate is not intended to replace full-featured, externally
//! audited cryptographic libraries; it provides masked-computation
//! building blocks for higher-level, security-critical code.

mod os;

pub mod error;
pub mod masking;
pub mod primitives;
pub mod rng;
