//! Provide [`FixedHashState`] and [`NoOpHashState`].
//!
//! - `FixedHashState` wraps `foldhash` with a constant seed, so iteration order of
//!   maps built from the same keys does not change between runs.
//! - `NoOpHashState` forwards a single `u64` unchanged. Keys such as
//!   [`TypeId`](core::any::TypeId) are already well distributed.

use core::hash::{BuildHasher, Hasher};

use foldhash::fast::{FixedState, FoldHasher};

// -----------------------------------------------------------------------------
// FixedHasher

const FIXED_SEED: FixedState = FixedState::with_seed(0x2F6A_91C3_D04B_7E15);

/// The hasher produced by [`FixedHashState`].
pub type FixedHasher = FoldHasher<'static>;

/// A `foldhash` state with a constant seed.
///
/// # Examples
///
/// ```
/// use core::hash::BuildHasher;
/// use rp_utils::hash::FixedHashState;
///
/// assert_eq!(FixedHashState.hash_one("name"), FixedHashState.hash_one("name"));
/// ```
#[derive(Copy, Clone, Default, Debug)]
pub struct FixedHashState;

impl BuildHasher for FixedHashState {
    type Hasher = FixedHasher;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        FIXED_SEED.build_hasher()
    }
}

// -----------------------------------------------------------------------------
// NoOpHasher

/// A hasher that stores the last `u64` written to it.
///
/// Byte writes are folded in, so it still behaves for keys that do not call
/// `write_u64`, but it is only meant for pre-hashed keys.
#[derive(Copy, Clone, Default, Debug)]
pub struct NoOpHasher {
    hash: u64,
}

impl Hasher for NoOpHasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.hash
    }

    fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.hash = self.hash.rotate_left(8) ^ u64::from(byte);
        }
    }

    #[inline]
    fn write_u64(&mut self, i: u64) {
        self.hash = i;
    }
}

/// Builds [`NoOpHasher`]s.
///
/// # Examples
///
/// ```
/// use core::hash::{BuildHasher, Hasher};
/// use rp_utils::hash::NoOpHashState;
///
/// let mut hasher = NoOpHashState.build_hasher();
/// hasher.write_u64(42);
/// assert_eq!(hasher.finish(), 42);
/// ```
#[derive(Copy, Clone, Default, Debug)]
pub struct NoOpHashState;

impl BuildHasher for NoOpHashState {
    type Hasher = NoOpHasher;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        NoOpHasher { hash: 0 }
    }
}
