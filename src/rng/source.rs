//! Injectable randomness source.
//!
//! Every gadget that consumes fresh randomness (mask sampling, mask
//! refresh, the DOM bilinear gadget, the B→A / A→B converters) is
//! parameterized over this trait instead of reaching for a process-wide
//! CSPRNG internally. This is what lets tests substitute a deterministic
//! source while production code uses [`crate::rng::Csprng`].

/// A source of cryptographically uniform bytes.
///
/// Implementors must produce output indistinguishable from uniform
/// random bytes; `fill_bytes` may be called repeatedly and must not
/// repeat its output stream.
pub trait RandomSource {
    /// Fills `out` with fresh random bytes.
    fn fill_bytes(&mut self, out: &mut [u8]);
}
