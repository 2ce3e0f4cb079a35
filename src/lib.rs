//! Lock-free atomic floating point values.
//!
//! Hardware atomics only come in integer widths, so a shared `f32`/`f64`
//! counter ordinarily needs a mutex. This crate provides [`AtomicF32`] and
//! [`AtomicF64`] instead: each is an `f32`/`f64` whose bit pattern lives in
//! an `AtomicU32`/`AtomicU64`, giving you load, store, swap,
//! compare-and-swap, and a CAS-loop `add` without ever taking a lock.
//!
//! ```
//! # use afloat::AtomicF32;
//! static TOTAL: AtomicF32 = AtomicF32::new(0.0);
//!
//! std::thread::scope(|s| {
//!     for _ in 0..100 {
//!         s.spawn(|| {
//!             TOTAL.add(1.0);
//!         });
//!     }
//! });
//!
//! assert_eq!(TOTAL.load(), 100.0);
//! ```
//!
//! Unlike the `std` atomics, the operations here take no `Ordering`
//! argument. Each uses the weakest ordering that makes the operation behave
//! the way callers expect — `Acquire` loads, `Release` stores, `AcqRel`
//! read-modify-writes — so all operations on one cell are linearizable
//! against each other without paying for `SeqCst` fences. Callers that need
//! different orderings, or want to manipulate the representation directly,
//! can drop down to the integer view via `as_atomic_bits`.
//!
//! For floats embedded in caller-owned integer storage, the [`raw`] module
//! offers the same `load`/`add` as free functions over an `&AtomicU32`.
//!
//! # Portability
//!
//! [`AtomicF32`] is as portable as `AtomicU32` (very). Not every
//! architecture has 64-bit atomics, though, so [`AtomicF64`] sits behind an
//! on-by-default feature flag, `atomic_f64`, and is explicitly disabled on
//! platforms known not to have them (32-bit MIPS and PowerPC targets).
//!
//! Because the feature is on by default, a dependency may enable it by
//! accident. If you're the one invoking `cargo build` and can't flip the
//! flag off through `Cargo.toml`, you can force-disable `AtomicF64` with the
//! `force_disable_atomic64` cfg (`RUSTFLAGS="--cfg=force_disable_atomic64"`).
//!
//! # Performance
//!
//! `load`, `store`, and `swap` translate to single atomic instructions and
//! cost roughly what the integer versions do. `add` has to do real float
//! arithmetic between the read and the write, so it is a compare-and-swap
//! retry loop: lock-free (some thread always completes its update), but
//! under heavy write contention an individual call may loop several times,
//! making it noticeably slower than integer `fetch_add`. `compare_and_swap`
//! compares *bit patterns*, not float values — see its documentation for
//! how that plays out with signed zero and NaN.
//!
//! # Serde
//!
//! With the optional `serde` feature, both types serialize and deserialize
//! transparently as the float they hold.
#![no_std]
#![deny(missing_docs)]

mod atomic_f32;
pub use atomic_f32::AtomicF32;

pub mod raw;

#[cfg(all(
    feature = "atomic_f64",
    not(any(target_arch = "powerpc", target_arch = "mips", force_disable_atomic64))
))]
mod atomic_f64;

#[cfg(all(
    feature = "atomic_f64",
    not(any(target_arch = "powerpc", target_arch = "mips", force_disable_atomic64))
))]
pub use atomic_f64::AtomicF64;

#[cfg(feature = "serde")]
mod serde_impls;
