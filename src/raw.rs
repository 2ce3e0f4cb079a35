//! Free functions over caller-owned atomic storage.
//!
//! Sometimes the float lives in memory you don't control the type of — a
//! field in a foreign struct, an element of a bit-level arena — and wrapping
//! it in [`AtomicF32`](crate::AtomicF32) isn't an option. These functions
//! perform the same operations directly on a caller-supplied
//! [`AtomicU32`](core::sync::atomic::AtomicU32) holding the `f32` bit
//! pattern.
//!
//! Taking `&AtomicU32` (rather than a raw pointer) makes the usual
//! discipline a type-system fact instead of a documentation plea: the
//! storage is correctly sized and aligned by construction, and safe Rust
//! cannot read or write it except through atomic operations. The caller's
//! remaining obligation is only to treat the integer contents as `f32` bits
//! everywhere.
//!
//! Only the 32-bit width is provided here; for 64-bit use the
//! [`AtomicF64`](crate::AtomicF64) type.

use core::sync::atomic::{
    AtomicU32,
    Ordering::{AcqRel, Acquire},
};

/// Loads the `f32` stored in `cell`, with `Acquire` ordering.
///
/// # Example
///
/// ```
/// # use std::sync::atomic::AtomicU32;
/// let cell = AtomicU32::new(1.5f32.to_bits());
/// assert_eq!(afloat::raw::load(&cell), 1.5);
/// ```
#[inline]
pub fn load(cell: &AtomicU32) -> f32 {
    f32::from_bits(cell.load(Acquire))
}

/// Adds `delta` to the `f32` stored in `cell`, returning the result of this
/// addition.
///
/// The same lock-free retry loop as [`AtomicF32::add`]: read, add, attempt
/// a compare-and-swap, and start over on the freshly observed value if some
/// other thread got there first.
///
/// [`AtomicF32::add`]: crate::AtomicF32::add
///
/// # Example
///
/// ```
/// # use std::sync::atomic::AtomicU32;
/// static CELL: AtomicU32 = AtomicU32::new(0); // bit pattern of +0.0
///
/// std::thread::scope(|s| {
///     for _ in 0..100 {
///         s.spawn(|| {
///             afloat::raw::add(&CELL, 1.0);
///         });
///     }
/// });
///
/// assert_eq!(afloat::raw::load(&CELL), 100.0);
/// ```
#[inline]
pub fn add(cell: &AtomicU32, delta: f32) -> f32 {
    let mut current = cell.load(Acquire);
    loop {
        let candidate = f32::from_bits(current) + delta;
        match cell.compare_exchange_weak(current, candidate.to_bits(), AcqRel, Acquire) {
            Ok(_) => return candidate,
            Err(observed) => current = observed,
        }
    }
}
