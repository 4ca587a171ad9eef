//! Higher-order masking gadgets for side-channel-resistant computation.
//!
//! A secret w-bit unsigned integer is represented as `order + 1` shares
//! (a [`MaskedUint`]) that recombine under XOR (Boolean domain) or
//! modular addition (Arithmetic domain). Every function in this module
//! tree is a gadget: it consumes and produces share tuples without ever
//! reconstructing the secret, and — at orders up to the masking order —
//! without an intermediate wire whose distribution depends on it.
//!
//! - [`masked`] — the [`MaskedUint`] representation, construction,
//!   unmasking, and mask refresh.
//! - [`linear`] — share-wise gadgets needing no fresh randomness (XOR,
//!   NOT, shifts/rotations, arithmetic add/sub/neg).
//! - [`dom`] — the DOM AND/MUL bilinear gadget and the OR gadget built
//!   on it.
//! - [`ksa`] — the masked Kogge-Stone carry/borrow network and the
//!   Boolean adder/subtractor built on it.
//! - [`convert`] — Boolean⇄Arithmetic domain converters.
//! - [`compare`] — comparators and the constant-time select gadget.
//! - [`dispatch`] — auto-domain adaptation for binary gadgets.

pub mod compare;
pub mod convert;
pub mod dispatch;
pub mod dom;
pub mod domain;
pub mod ksa;
pub mod linear;
pub mod masked;

pub use domain::Domain;
pub use masked::MaskedUint;
