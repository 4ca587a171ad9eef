//! Fixed-size integer primitives.
//!
//! Exposes the [`uint`] module: the `UintWord` trait and the
//! `Uint8`/`Uint32`/`Uint64` monomorphic widths the masking gadgets
//! operate on.

pub mod uint;
